use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{NavigationCause, NavigationDirection, SlideTransition};
use crate::error::CarouselResult;
use crate::render::RenderSync;

use super::CarouselEngine;

/// Timer that fired during a [`CarouselEngine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    WheelZoom,
    Autoplay,
    ControlsHide,
}

/// What a single tick did, in firing order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickReport {
    pub fired: SmallVec<[TimerKind; 3]>,
    pub autoplay_transition: Option<SlideTransition>,
}

impl TickReport {
    #[must_use]
    pub fn fired(&self, kind: TimerKind) -> bool {
        self.fired.contains(&kind)
    }
}

impl<R: RenderSync> CarouselEngine<R> {
    /// Starts periodic advancing. Returns `false` when already running.
    pub fn start_autoplay(&mut self) -> CarouselResult<bool> {
        self.ensure_active()?;
        let now = self.now();
        let started = self.core.runtime.autoplay.start(now);
        if started {
            debug!(
                interval_ms = self.core.config.autoplay_interval_ms,
                "autoplay started"
            );
        }
        Ok(started)
    }

    /// Stops periodic advancing. Returns `false` when already stopped.
    pub fn stop_autoplay(&mut self) -> CarouselResult<bool> {
        self.ensure_active()?;
        let stopped = self.core.runtime.autoplay.stop();
        if stopped {
            debug!("autoplay stopped");
        }
        Ok(stopped)
    }

    /// Polls every timer against the clock and runs whatever is due.
    ///
    /// Hosts call this from their event loop (animation frame or interval).
    pub fn tick(&mut self) -> CarouselResult<TickReport> {
        self.ensure_active()?;
        let now = self.now();
        let mut report = TickReport::default();

        if let Some(delta_y) = self.core.runtime.wheel_zoom.poll(now) {
            trace!(delta_y, "wheel burst settled");
            self.apply_wheel_zoom(delta_y);
            report.fired.push(TimerKind::WheelZoom);
        }

        if self.core.runtime.autoplay.poll(now) {
            report.fired.push(TimerKind::Autoplay);
            report.autoplay_transition =
                self.navigate_by(NavigationDirection::Next, NavigationCause::Autoplay)?;
        }

        if self.core.runtime.controls_hide.poll(now) {
            report.fired.push(TimerKind::ControlsHide);
            self.set_controls_visible(false);
        }

        Ok(report)
    }
}

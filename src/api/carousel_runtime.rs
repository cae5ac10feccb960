use indexmap::IndexMap;

use crate::extensions::SlideObserver;
use crate::interaction::{InputSource, SwipeGate};
use crate::scheduling::{AutoplayScheduler, CoalescingScheduler, DelayedAction};

use super::CarouselConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Lifecycle {
    Active,
    Destroyed,
}

/// Timers, registries and lifecycle grouped separately from the model.
pub(super) struct CarouselRuntimeState {
    pub(super) lifecycle: Lifecycle,
    pub(super) autoplay: AutoplayScheduler,
    /// Latest wheel delta of the current burst.
    pub(super) wheel_zoom: CoalescingScheduler<f64>,
    pub(super) swipe_gate: SwipeGate,
    pub(super) controls_hide: DelayedAction,
    pub(super) observers: IndexMap<String, Box<dyn SlideObserver>>,
    pub(super) input_sources: IndexMap<String, Box<dyn InputSource>>,
}

impl CarouselRuntimeState {
    #[must_use]
    pub(super) fn from_config(config: &CarouselConfig) -> Self {
        Self {
            lifecycle: Lifecycle::Active,
            autoplay: AutoplayScheduler::new(config.autoplay_interval()),
            wheel_zoom: CoalescingScheduler::new(config.wheel_debounce()),
            swipe_gate: SwipeGate::new(config.swipe_tuning()),
            controls_hide: DelayedAction::new(config.controls_hide_delay()),
            observers: IndexMap::new(),
            input_sources: IndexMap::new(),
        }
    }

    /// Cancels every pending timer. Returns how many were pending.
    pub(super) fn cancel_timers(&mut self) -> usize {
        let mut cancelled = 0;
        cancelled += usize::from(self.autoplay.stop());
        cancelled += usize::from(self.wheel_zoom.cancel());
        cancelled += usize::from(self.controls_hide.cancel());
        self.swipe_gate.reset();
        cancelled
    }
}

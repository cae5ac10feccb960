use std::time::Duration;

use tracing::{debug, trace};

use crate::error::{CarouselError, CarouselResult};
use crate::render::RenderSync;
use crate::scheduling::Clock;

use super::{carousel_runtime::Lifecycle, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `CarouselEngine` coordinates slide navigation, zoom/pan state, timers,
/// slide observers and input sources, and reports every visible change to
/// its [`RenderSync`].
pub struct CarouselEngine<R: RenderSync> {
    pub(super) render_sync: R,
    pub(super) clock: Box<dyn Clock>,
    pub(super) core: EngineCore,
}

impl<R: RenderSync> CarouselEngine<R> {
    #[must_use]
    pub fn render_sync(&self) -> &R {
        &self.render_sync
    }

    pub fn render_sync_mut(&mut self) -> &mut R {
        &mut self.render_sync
    }

    #[must_use]
    pub fn into_render_sync(self) -> R {
        self.render_sync
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.core.runtime.lifecycle == Lifecycle::Destroyed
    }

    /// Tears the instance down.
    ///
    /// Cancels every timer, detaches this instance's input sources, drops
    /// observers and slides. Every later call returns
    /// [`CarouselError::Destroyed`]. Calling `destroy` again is a no-op.
    pub fn destroy(&mut self) {
        if self.is_destroyed() {
            trace!("destroy on already destroyed carousel");
            return;
        }

        let cancelled_timers = self.core.runtime.cancel_timers();
        let detached_sources = self.core.runtime.input_sources.len();
        for (id, mut source) in self.core.runtime.input_sources.drain(..) {
            source.detach();
            trace!(source = %id, "detached input source");
        }
        self.core.runtime.observers.clear();

        let model = &mut self.core.model;
        model.zoom = model.zoom.reset();
        model.zoom_target = None;
        model.index = None;
        model.slides.clear();
        self.core.runtime.lifecycle = Lifecycle::Destroyed;

        debug!(cancelled_timers, detached_sources, "carousel destroyed");
    }

    pub(super) fn ensure_active(&self) -> CarouselResult<()> {
        if self.is_destroyed() {
            return Err(CarouselError::Destroyed);
        }
        Ok(())
    }

    pub(super) fn now(&self) -> Duration {
        self.clock.now()
    }
}

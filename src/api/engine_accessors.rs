use std::time::Duration;

use crate::core::{Slide, Viewport};
use crate::interaction::ZoomPanState;
use crate::render::RenderSync;

use super::{CarouselConfig, CarouselEngine};

impl<R: RenderSync> CarouselEngine<R> {
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.core.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.viewport
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        self.core.model.slides.slides()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.core.model.slides.len()
    }

    /// Active slide, `None` while the collection is empty.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.core.model.current_index()
    }

    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        self.core.model.index.map(|index| index.previous())
    }

    #[must_use]
    pub fn zoom_state(&self) -> ZoomPanState {
        self.core.model.zoom
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.core.model.zoom.is_zoomed()
    }

    /// Slide the zoom subsystem is bound to.
    #[must_use]
    pub fn zoom_target(&self) -> Option<usize> {
        self.core.model.zoom_target.map(|target| target.slide)
    }

    #[must_use]
    pub fn is_autoplay_running(&self) -> bool {
        self.core.runtime.autoplay.is_running()
    }

    /// Time left until the next autoplay advance.
    #[must_use]
    pub fn autoplay_remaining(&self) -> Option<Duration> {
        self.core.runtime.autoplay.remaining(self.now())
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.core.model.controls_visible
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.core.model.fullscreen
    }
}

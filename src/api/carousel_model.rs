use crate::core::{SlideCollection, SlideIndex, Size, TargetGeometry, Viewport};
use crate::interaction::ZoomPanState;

/// The slide image the zoom subsystem is currently bound to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ZoomTarget {
    pub(super) slide: usize,
    pub(super) image: Size,
}

/// Navigation, zoom and presentation state owned by the engine.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CarouselModel {
    pub(super) viewport: Viewport,
    pub(super) slides: SlideCollection,
    /// `None` exactly when `slides` is empty.
    pub(super) index: Option<SlideIndex>,
    pub(super) zoom: ZoomPanState,
    pub(super) zoom_target: Option<ZoomTarget>,
    pub(super) controls_visible: bool,
    pub(super) fullscreen: bool,
}

impl CarouselModel {
    #[must_use]
    pub(super) fn current_index(&self) -> Option<usize> {
        self.index.map(SlideIndex::current)
    }

    #[must_use]
    pub(super) fn zoom_geometry(&self) -> Option<TargetGeometry> {
        self.zoom_target
            .map(|target| TargetGeometry::new(target.image, self.viewport))
    }

    /// Binds the zoom target to the current slide if it has loaded.
    #[must_use]
    pub(super) fn resolve_zoom_target(&self) -> Option<ZoomTarget> {
        let slide = self.current_index()?;
        let image = self.slides.image_size(slide)?;
        Some(ZoomTarget { slide, image })
    }
}

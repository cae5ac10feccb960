//! Auxiliary views that follow the active slide.
//!
//! The engine keeps an ordered list of observers and stays agnostic to which
//! of them exist.

pub mod indicators;

pub use indicators::{
    BULLETS_OBSERVER_ID, IndicatorKind, IndicatorSnapshot, IndicatorStrip,
    THUMBNAILS_OBSERVER_ID, ThumbnailAlignment, ThumbnailFitMode,
};

use crate::core::SlideTransition;

/// Slide-index observer hook.
///
/// Observers see every transition after the render sync did and cannot
/// mutate engine state.
pub trait SlideObserver {
    fn id(&self) -> &str;

    /// Called on registration with the collection size and active slide.
    fn on_slides_reset(&mut self, _total: usize, _current: Option<usize>) {}

    fn on_slide_changed(&mut self, transition: SlideTransition);

    /// Marker state for snapshot consumers, if this observer draws one.
    fn indicator_snapshot(&self) -> Option<IndicatorSnapshot> {
        None
    }
}

pub mod slide_index;
pub mod slides;
pub mod types;

pub use slide_index::{
    NavigationCause, NavigationDirection, SlideIndex, SlideTransition, advance_slide_index,
    resolve_slide_index,
};
pub use slides::{Slide, SlideCollection, filename_without_extension};
pub use types::{Size, TargetGeometry, Viewport};

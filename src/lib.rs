//! carousel-rs: image carousel core.
//!
//! Owns slide navigation with cyclic wraparound, bounded pan/zoom, autoplay
//! and gesture gating for an embeddable image viewer. Drawing and raw input
//! stay with the host through the [`render::RenderSync`] and
//! [`interaction::InputSource`] seams.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod scheduling;
pub mod telemetry;

pub use api::{CarouselConfig, CarouselEngine};
pub use error::{CarouselError, CarouselResult};

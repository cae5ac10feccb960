mod autoplay_controller;
mod carousel_model;
mod carousel_runtime;
mod config;
mod engine;
mod engine_accessors;
mod engine_core;
mod engine_init;
mod gesture_controller;
mod input_registry;
mod navigation_controller;
mod observer_registry;
mod snapshot;
mod validation;
mod zoom_controller;

pub use autoplay_controller::{TickReport, TimerKind};
pub use config::{CarouselConfig, TransitionEffect};
pub use engine::CarouselEngine;
pub use snapshot::{
    CAROUSEL_SNAPSHOT_JSON_SCHEMA_V1, CarouselSnapshot, CarouselSnapshotJsonContractV1,
    SlideSnapshot,
};

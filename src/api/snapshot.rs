use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, CarouselResult};
use crate::extensions::IndicatorSnapshot;
use crate::interaction::ZoomSnapshot;
use crate::render::RenderSync;

use super::{CarouselEngine, TransitionEffect};

pub const CAROUSEL_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSnapshot {
    pub source: String,
    pub loaded: bool,
    /// Filename caption, present when `show_filenames` is on.
    pub caption: Option<String>,
}

/// Deterministic view of the whole carousel state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    pub slides: Vec<SlideSnapshot>,
    pub current_index: Option<usize>,
    pub previous_index: Option<usize>,
    pub cycle: bool,
    pub zoom: ZoomSnapshot,
    pub zoom_target: Option<usize>,
    pub autoplay_running: bool,
    pub autoplay_interval_ms: u64,
    pub controls_visible: bool,
    pub fullscreen: bool,
    pub transition_effect: TransitionEffect,
    pub indicators: Vec<IndicatorSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: CarouselSnapshot,
}

impl CarouselSnapshot {
    pub fn to_json_pretty(&self) -> CarouselResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            CarouselError::InvalidData(format!("failed to serialize carousel snapshot: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> CarouselResult<String> {
        let payload = CarouselSnapshotJsonContractV1 {
            schema_version: CAROUSEL_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            CarouselError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> CarouselResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<CarouselSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: CarouselSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            CarouselError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CAROUSEL_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(CarouselError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: RenderSync> CarouselEngine<R> {
    pub fn snapshot(&self) -> CarouselResult<CarouselSnapshot> {
        self.ensure_active()?;
        let config = &self.core.config;
        let model = &self.core.model;

        let slides = model
            .slides
            .slides()
            .iter()
            .map(|slide| SlideSnapshot {
                source: slide.source.clone(),
                loaded: slide.loaded,
                caption: config.show_filenames.then(|| slide.caption().to_owned()),
            })
            .collect();

        Ok(CarouselSnapshot {
            slides,
            current_index: model.current_index(),
            previous_index: model.index.map(|index| index.previous()),
            cycle: config.cycle,
            zoom: model.zoom.snapshot(),
            zoom_target: model.zoom_target.map(|target| target.slide),
            autoplay_running: self.core.runtime.autoplay.is_running(),
            autoplay_interval_ms: config.autoplay_interval_ms,
            controls_visible: model.controls_visible,
            fullscreen: model.fullscreen,
            transition_effect: config.transition_effect,
            indicators: self.indicator_snapshots(),
        })
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> CarouselResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }
}

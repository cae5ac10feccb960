use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, CarouselResult};
use crate::extensions::{ThumbnailAlignment, ThumbnailFitMode};
use crate::interaction::{SwipeTuning, ZoomLimits};

use super::validation::validate_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionEffect {
    #[default]
    Fade,
    Slide,
}

/// Construction options.
///
/// Field names follow the widget's JSON option keys (`camelCase`). Missing
/// keys take their defaults; wrong types are rejected by
/// [`CarouselConfig::from_json_str`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    pub images: Vec<String>,
    pub autoplay: bool,
    #[serde(rename = "autoplayInterval")]
    pub autoplay_interval_ms: u64,
    pub cycle: bool,
    pub min_scale: f64,
    pub max_scale: f64,
    pub zoom_step: f64,
    pub swipe_threshold_px: u32,
    pub swipe_cooldown_ms: u64,
    pub swipe_min_velocity: f64,
    pub wheel_debounce_ms: u64,
    pub controls_hide_delay_ms: u64,
    pub show_controls: bool,
    pub show_thumbnails: bool,
    pub show_bullets: bool,
    pub show_filenames: bool,
    pub transition_effect: TransitionEffect,
    pub thumbnail_fit_mode: ThumbnailFitMode,
    pub thumbnail_alignment: ThumbnailAlignment,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let zoom = ZoomLimits::default();
        Self {
            images: Vec::new(),
            autoplay: false,
            autoplay_interval_ms: 3_000,
            cycle: true,
            min_scale: zoom.min_scale,
            max_scale: zoom.max_scale,
            zoom_step: zoom.step,
            swipe_threshold_px: 50,
            swipe_cooldown_ms: 250,
            swipe_min_velocity: 0.65,
            wheel_debounce_ms: 16,
            controls_hide_delay_ms: 3_000,
            show_controls: true,
            show_thumbnails: true,
            show_bullets: false,
            show_filenames: false,
            transition_effect: TransitionEffect::default(),
            thumbnail_fit_mode: ThumbnailFitMode::default(),
            thumbnail_alignment: ThumbnailAlignment::default(),
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parses and validates JSON options.
    pub fn from_json_str(input: &str) -> CarouselResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            CarouselError::InvalidConfig(format!("failed to parse carousel options: {e}"))
        })?;
        validate_config(&config)?;
        Ok(config)
    }

    #[must_use]
    pub fn with_cycle(mut self, cycle: bool) -> Self {
        self.cycle = cycle;
        self
    }

    #[must_use]
    pub fn with_autoplay(mut self, interval_ms: u64) -> Self {
        self.autoplay = true;
        self.autoplay_interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn with_zoom_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    #[must_use]
    pub fn with_zoom_step(mut self, zoom_step: f64) -> Self {
        self.zoom_step = zoom_step;
        self
    }

    #[must_use]
    pub fn with_indicators(mut self, show_thumbnails: bool, show_bullets: bool) -> Self {
        self.show_thumbnails = show_thumbnails;
        self.show_bullets = show_bullets;
        self
    }

    #[must_use]
    pub fn with_controls(mut self, show_controls: bool) -> Self {
        self.show_controls = show_controls;
        self
    }

    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits {
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            step: self.zoom_step,
        }
    }

    #[must_use]
    pub fn swipe_tuning(&self) -> SwipeTuning {
        SwipeTuning {
            threshold_px: f64::from(self.swipe_threshold_px),
            min_velocity_px_per_ms: self.swipe_min_velocity,
            cooldown: Duration::from_millis(self.swipe_cooldown_ms),
        }
    }

    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    #[must_use]
    pub fn wheel_debounce(&self) -> Duration {
        Duration::from_millis(self.wheel_debounce_ms)
    }

    #[must_use]
    pub fn controls_hide_delay(&self) -> Duration {
        Duration::from_millis(self.controls_hide_delay_ms)
    }
}

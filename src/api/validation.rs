use crate::error::{CarouselError, CarouselResult};

use super::CarouselConfig;

pub(super) fn validate_config(config: &CarouselConfig) -> CarouselResult<()> {
    if config.autoplay_interval_ms == 0 {
        return Err(CarouselError::InvalidConfig(
            "autoplayInterval must be a positive number of milliseconds".to_owned(),
        ));
    }

    if !config.min_scale.is_finite() || config.min_scale <= 0.0 {
        return Err(CarouselError::InvalidConfig(
            "minScale must be finite and > 0".to_owned(),
        ));
    }
    if !config.max_scale.is_finite() || config.max_scale < config.min_scale {
        return Err(CarouselError::InvalidConfig(
            "maxScale must be finite and >= minScale".to_owned(),
        ));
    }
    if !config.zoom_step.is_finite() || config.zoom_step <= 0.0 || config.zoom_step > 1.0 {
        return Err(CarouselError::InvalidConfig(
            "zoomStep must be finite and in (0, 1]".to_owned(),
        ));
    }

    if !config.swipe_min_velocity.is_finite() || config.swipe_min_velocity < 0.0 {
        return Err(CarouselError::InvalidConfig(
            "swipeMinVelocity must be finite and >= 0".to_owned(),
        ));
    }

    Ok(())
}

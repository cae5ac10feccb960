use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::NavigationDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Swiping left reveals the next slide.
    #[must_use]
    pub const fn navigation(self) -> NavigationDirection {
        match self {
            Self::Left => NavigationDirection::Next,
            Self::Right => NavigationDirection::Previous,
        }
    }
}

/// Horizontal swipe as reported by the host's gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeEvent {
    pub direction: SwipeDirection,
    pub distance_px: f64,
    pub velocity_px_per_ms: f64,
}

impl SwipeEvent {
    #[must_use]
    pub fn new(direction: SwipeDirection, distance_px: f64, velocity_px_per_ms: f64) -> Self {
        Self {
            direction,
            distance_px,
            velocity_px_per_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeTuning {
    pub threshold_px: f64,
    pub min_velocity_px_per_ms: f64,
    pub cooldown: Duration,
}

impl Default for SwipeTuning {
    fn default() -> Self {
        Self {
            threshold_px: 50.0,
            min_velocity_px_per_ms: 0.65,
            cooldown: Duration::from_millis(250),
        }
    }
}

/// Why a swipe did not turn into navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeRejection {
    Zoomed,
    BelowThreshold,
    CoolingDown,
}

/// Filters recognized swipes into at most one navigation per cooldown window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGate {
    tuning: SwipeTuning,
    last_accepted: Option<Duration>,
}

impl SwipeGate {
    #[must_use]
    pub fn new(tuning: SwipeTuning) -> Self {
        Self {
            tuning,
            last_accepted: None,
        }
    }

    #[must_use]
    pub fn tuning(&self) -> SwipeTuning {
        self.tuning
    }

    /// Decides whether `event` navigates. Rejected swipes never restart the
    /// cooldown.
    pub fn admit(
        &mut self,
        event: SwipeEvent,
        now: Duration,
        zoomed: bool,
    ) -> Result<NavigationDirection, SwipeRejection> {
        if zoomed {
            return Err(SwipeRejection::Zoomed);
        }
        if event.distance_px.abs() < self.tuning.threshold_px
            || event.velocity_px_per_ms.abs() < self.tuning.min_velocity_px_per_ms
        {
            return Err(SwipeRejection::BelowThreshold);
        }
        if let Some(last) = self.last_accepted {
            if now.saturating_sub(last) < self.tuning.cooldown {
                return Err(SwipeRejection::CoolingDown);
            }
        }
        self.last_accepted = Some(now);
        Ok(event.direction.navigation())
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

use serde::{Deserialize, Serialize};

use crate::core::TargetGeometry;

/// Scale limits and the relative step used by zoom in/out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Zoom in multiplies by `1 + step`, zoom out divides by it.
    pub step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 4.0,
            step: 0.2,
        }
    }
}

impl ZoomLimits {
    #[must_use]
    pub fn clamp_scale(self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    #[must_use]
    pub fn step_factor(self) -> f64 {
        1.0 + self.step
    }
}

/// Relative distance to `min_scale` below which a scale counts as unzoomed.
const MIN_SCALE_SNAP_EPSILON: f64 = 1e-9;

/// Largest translation along one axis that keeps the scaled image covering
/// the container.
#[must_use]
pub fn max_translate(image_extent: f64, container_extent: f64, scale: f64) -> f64 {
    ((image_extent * scale - container_extent) / 2.0).max(0.0)
}

/// Clamps a translation along one axis into the bounds of [`max_translate`].
#[must_use]
pub fn constrain_translate(
    translate: f64,
    image_extent: f64,
    container_extent: f64,
    scale: f64,
) -> f64 {
    let limit = max_translate(image_extent, container_extent, scale);
    if limit <= 0.0 {
        return 0.0;
    }
    translate.clamp(-limit, limit)
}

/// Read-only view of the zoom state handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomSnapshot {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub is_zoomed: bool,
}

/// Bounded pan/zoom state of the visible slide.
///
/// Every transition returns a new value. Translation is always constrained
/// against the geometry passed in, and collapses to the origin whenever the
/// scale is back at `min_scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomPanState {
    limits: ZoomLimits,
    scale: f64,
    translate_x: f64,
    translate_y: f64,
    drag_origin: Option<(f64, f64)>,
}

impl Default for ZoomPanState {
    fn default() -> Self {
        Self::identity(ZoomLimits::default())
    }
}

impl ZoomPanState {
    #[must_use]
    pub fn identity(limits: ZoomLimits) -> Self {
        Self {
            limits,
            scale: limits.min_scale,
            translate_x: 0.0,
            translate_y: 0.0,
            drag_origin: None,
        }
    }

    #[must_use]
    pub fn limits(self) -> ZoomLimits {
        self.limits
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn translate(self) -> (f64, f64) {
        (self.translate_x, self.translate_y)
    }

    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.scale > self.limits.min_scale
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.drag_origin.is_some()
    }

    #[must_use]
    pub fn snapshot(self) -> ZoomSnapshot {
        ZoomSnapshot {
            scale: self.scale,
            translate_x: self.translate_x,
            translate_y: self.translate_y,
            is_zoomed: self.is_zoomed(),
        }
    }

    #[must_use]
    pub fn reset(self) -> Self {
        Self::identity(self.limits)
    }

    #[must_use]
    pub fn zoomed_in(self, geometry: TargetGeometry) -> Self {
        self.with_scale(self.scale * self.limits.step_factor(), geometry)
    }

    #[must_use]
    pub fn zoomed_out(self, geometry: TargetGeometry) -> Self {
        self.with_scale(self.scale / self.limits.step_factor(), geometry)
    }

    /// Sets an absolute scale, clamped to the limits.
    #[must_use]
    pub fn with_scale(self, scale: f64, geometry: TargetGeometry) -> Self {
        let scale = self.limits.clamp_scale(scale);
        // Zoom out divides by the step factor, which can leave a rounding
        // residue above the minimum.
        if scale - self.limits.min_scale <= MIN_SCALE_SNAP_EPSILON * self.limits.min_scale {
            return Self {
                scale: self.limits.min_scale,
                translate_x: 0.0,
                translate_y: 0.0,
                drag_origin: None,
                ..self
            };
        }
        Self { scale, ..self }.constrained(geometry)
    }

    /// Moves the image by a delta. Has no effect at minimum scale.
    #[must_use]
    pub fn panned_by(self, delta_x: f64, delta_y: f64, geometry: TargetGeometry) -> Self {
        if !self.is_zoomed() {
            return self;
        }
        Self {
            translate_x: self.translate_x + delta_x,
            translate_y: self.translate_y + delta_y,
            ..self
        }
        .constrained(geometry)
    }

    /// Re-applies the pan bounds for the current scale.
    #[must_use]
    pub fn constrained(self, geometry: TargetGeometry) -> Self {
        if !self.is_zoomed() {
            return Self {
                translate_x: 0.0,
                translate_y: 0.0,
                ..self
            };
        }
        Self {
            translate_x: constrain_translate(
                self.translate_x,
                geometry.image.width,
                geometry.container.width,
                self.scale,
            ),
            translate_y: constrain_translate(
                self.translate_y,
                geometry.image.height,
                geometry.container.height,
                self.scale,
            ),
            ..self
        }
    }

    /// Captures the pointer offset relative to the current translation.
    #[must_use]
    pub fn drag_started(self, pointer_x: f64, pointer_y: f64) -> Self {
        if !self.is_zoomed() {
            return self;
        }
        Self {
            drag_origin: Some((pointer_x - self.translate_x, pointer_y - self.translate_y)),
            ..self
        }
    }

    #[must_use]
    pub fn drag_updated(self, pointer_x: f64, pointer_y: f64, geometry: TargetGeometry) -> Self {
        let Some((origin_x, origin_y)) = self.drag_origin else {
            return self;
        };
        if !self.is_zoomed() {
            return self;
        }
        Self {
            translate_x: pointer_x - origin_x,
            translate_y: pointer_y - origin_y,
            ..self
        }
        .constrained(geometry)
    }

    #[must_use]
    pub fn drag_ended(self) -> Self {
        Self {
            drag_origin: None,
            ..self
        }
    }
}

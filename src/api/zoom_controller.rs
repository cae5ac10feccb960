use tracing::{debug, trace};

use crate::core::{Size, TargetGeometry, Viewport};
use crate::error::{CarouselError, CarouselResult};
use crate::interaction::ZoomPanState;
use crate::render::RenderSync;

use super::CarouselEngine;

impl<R: RenderSync> CarouselEngine<R> {
    pub fn zoom_in(&mut self) -> CarouselResult<()> {
        self.ensure_active()?;
        self.apply_zoom_transition(ZoomPanState::zoomed_in);
        Ok(())
    }

    pub fn zoom_out(&mut self) -> CarouselResult<()> {
        self.ensure_active()?;
        self.apply_zoom_transition(ZoomPanState::zoomed_out);
        Ok(())
    }

    /// Sets an absolute scale, clamped to the configured limits. Zero and
    /// negative values land on the minimum.
    pub fn set_zoom_scale(&mut self, scale: f64) -> CarouselResult<()> {
        self.ensure_active()?;
        if !scale.is_finite() {
            return Err(CarouselError::InvalidData(
                "zoom scale must be finite".to_owned(),
            ));
        }
        self.apply_zoom_transition(|state, geometry| state.with_scale(scale, geometry));
        Ok(())
    }

    pub fn pan_by(&mut self, delta_x: f64, delta_y: f64) -> CarouselResult<()> {
        self.ensure_active()?;
        validate_pointer(delta_x, delta_y, "pan delta")?;
        self.apply_zoom_transition(|state, geometry| state.panned_by(delta_x, delta_y, geometry));
        Ok(())
    }

    pub fn reset_zoom(&mut self) -> CarouselResult<()> {
        self.ensure_active()?;
        self.core.runtime.wheel_zoom.cancel();
        let reset = self.core.model.zoom.reset();
        self.commit_zoom(reset);
        Ok(())
    }

    pub fn begin_drag(&mut self, pointer_x: f64, pointer_y: f64) -> CarouselResult<()> {
        self.ensure_active()?;
        validate_pointer(pointer_x, pointer_y, "pointer position")?;
        if self.core.model.zoom_target.is_none() {
            return Ok(());
        }
        let started = self.core.model.zoom.drag_started(pointer_x, pointer_y);
        self.commit_zoom(started);
        Ok(())
    }

    pub fn update_drag(&mut self, pointer_x: f64, pointer_y: f64) -> CarouselResult<()> {
        self.ensure_active()?;
        validate_pointer(pointer_x, pointer_y, "pointer position")?;
        self.apply_zoom_transition(|state, geometry| {
            state.drag_updated(pointer_x, pointer_y, geometry)
        });
        Ok(())
    }

    pub fn end_drag(&mut self) -> CarouselResult<()> {
        self.ensure_active()?;
        let ended = self.core.model.zoom.drag_ended();
        self.commit_zoom(ended);
        Ok(())
    }

    /// Updates the container size and re-applies the pan bounds.
    pub fn resize(&mut self, viewport: Viewport) -> CarouselResult<()> {
        self.ensure_active()?;
        self.core.model.viewport = viewport.validated()?;
        self.apply_zoom_transition(ZoomPanState::constrained);
        debug!(
            width = viewport.width,
            height = viewport.height,
            "carousel resized"
        );
        Ok(())
    }

    /// Records that a slide image finished loading at `image_size` (its
    /// on-screen size at scale 1).
    ///
    /// When the slide is the active one the zoom subsystem binds to it; a
    /// repeated call updates the measured size and re-applies the bounds.
    pub fn mark_slide_loaded(&mut self, index: usize, image_size: Size) -> CarouselResult<()> {
        self.ensure_active()?;
        self.core.model.slides.mark_loaded(index, image_size)?;
        trace!(index, "slide loaded");

        if self.core.model.current_index() != Some(index) {
            return Ok(());
        }
        let previous_target = self.core.model.zoom_target;
        self.core.model.zoom_target = self.core.model.resolve_zoom_target();
        if previous_target.map(|target| target.slide) != Some(index) {
            self.render_sync.on_zoom_target_changed(Some(index));
        }
        self.apply_zoom_transition(ZoomPanState::constrained);
        Ok(())
    }

    /// Applies a pure transition against the bound target's geometry.
    ///
    /// No-op while the active slide has not loaded yet.
    pub(super) fn apply_zoom_transition(
        &mut self,
        transition: impl FnOnce(ZoomPanState, TargetGeometry) -> ZoomPanState,
    ) -> bool {
        let Some(geometry) = self.core.model.zoom_geometry() else {
            trace!("zoom request without a loaded target");
            return false;
        };
        let next = transition(self.core.model.zoom, geometry);
        self.commit_zoom(next)
    }

    pub(super) fn commit_zoom(&mut self, next: ZoomPanState) -> bool {
        if next == self.core.model.zoom {
            return false;
        }
        self.core.model.zoom = next;
        self.render_sync.on_zoom_changed(next.snapshot());
        true
    }

    /// Resets zoom to identity and moves the target to the new active slide.
    pub(super) fn reset_zoom_for_slide_change(&mut self) {
        self.core.runtime.wheel_zoom.cancel();
        let model = &mut self.core.model;
        model.zoom = model.zoom.reset();
        self.render_sync.on_zoom_changed(self.core.model.zoom.snapshot());

        self.core.model.zoom_target = None;
        self.core.model.zoom_target = self.core.model.resolve_zoom_target();
        self.render_sync
            .on_zoom_target_changed(self.core.model.zoom_target.map(|target| target.slide));
    }

    /// Applies a settled wheel burst. Negative deltas zoom in.
    pub(super) fn apply_wheel_zoom(&mut self, delta_y: f64) -> bool {
        if delta_y < 0.0 {
            self.apply_zoom_transition(ZoomPanState::zoomed_in)
        } else if delta_y > 0.0 {
            self.apply_zoom_transition(ZoomPanState::zoomed_out)
        } else {
            false
        }
    }
}

fn validate_pointer(x: f64, y: f64, what: &str) -> CarouselResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(CarouselError::InvalidData(format!("{what} must be finite")));
    }
    Ok(())
}

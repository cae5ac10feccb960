mod null_render_sync;

pub use null_render_sync::NullRenderSync;

use crate::interaction::ZoomSnapshot;

/// Contract implemented by the view layer.
///
/// The engine calls these hooks after each state transition; the
/// implementation owns every visual effect (classes, transforms, icons).
pub trait RenderSync {
    fn on_slide_changed(&mut self, previous: usize, current: usize);

    fn on_zoom_changed(&mut self, zoom: ZoomSnapshot);

    /// The zoom subsystem detached from its previous slide and is now bound
    /// to `target`, or to nothing while the current slide is still loading.
    fn on_zoom_target_changed(&mut self, _target: Option<usize>) {}

    fn on_controls_visibility_changed(&mut self, _visible: bool) {}

    fn on_fullscreen_changed(&mut self, _fullscreen: bool) {}
}

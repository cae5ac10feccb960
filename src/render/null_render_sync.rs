use crate::interaction::ZoomSnapshot;

use super::RenderSync;

/// Headless [`RenderSync`] used by tests and view-less hosts.
///
/// It keeps the last reported values and call counts so callers can assert on
/// what a real view would have been asked to draw.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NullRenderSync {
    pub slide_change_count: usize,
    pub last_slide_change: Option<(usize, usize)>,
    pub zoom_change_count: usize,
    pub last_zoom: Option<ZoomSnapshot>,
    pub zoom_target: Option<usize>,
    pub controls_visible: Option<bool>,
    pub fullscreen: bool,
}

impl RenderSync for NullRenderSync {
    fn on_slide_changed(&mut self, previous: usize, current: usize) {
        self.slide_change_count += 1;
        self.last_slide_change = Some((previous, current));
    }

    fn on_zoom_changed(&mut self, zoom: ZoomSnapshot) {
        self.zoom_change_count += 1;
        self.last_zoom = Some(zoom);
    }

    fn on_zoom_target_changed(&mut self, target: Option<usize>) {
        self.zoom_target = target;
    }

    fn on_controls_visibility_changed(&mut self, visible: bool) {
        self.controls_visible = Some(visible);
    }

    fn on_fullscreen_changed(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }
}

use tracing::{debug, trace};

use crate::core::{NavigationCause, NavigationDirection, SlideTransition};
use crate::error::{CarouselError, CarouselResult};
use crate::interaction::{ControlAction, InputEvent, Key, SwipeEvent};
use crate::render::RenderSync;

use super::CarouselEngine;

impl<R: RenderSync> CarouselEngine<R> {
    /// Routes one raw input event.
    ///
    /// Returns the slide transition when the event navigated.
    pub fn handle_input(&mut self, event: InputEvent) -> CarouselResult<Option<SlideTransition>> {
        self.ensure_active()?;
        match event {
            InputEvent::Wheel { delta_y } => {
                self.queue_wheel_zoom(delta_y)?;
                Ok(None)
            }
            InputEvent::PointerDown { x, y } => {
                self.begin_drag(x, y)?;
                Ok(None)
            }
            InputEvent::PointerMove { x, y } => {
                self.update_drag(x, y)?;
                Ok(None)
            }
            InputEvent::PointerUp => {
                self.end_drag()?;
                Ok(None)
            }
            InputEvent::Swipe(swipe) => self.handle_swipe(swipe),
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::TouchStart => {
                self.show_controls();
                Ok(None)
            }
            InputEvent::TouchEnd => {
                self.schedule_controls_hide();
                Ok(None)
            }
        }
    }

    /// Runs an on-screen control, then shows the controls and restarts
    /// their hide countdown. Ignored when controls are disabled.
    pub fn press_control(
        &mut self,
        action: ControlAction,
    ) -> CarouselResult<Option<SlideTransition>> {
        self.ensure_active()?;
        if !self.core.config.show_controls {
            trace!(?action, "control pressed while controls are disabled");
            return Ok(None);
        }

        let transition = match action {
            ControlAction::Prev => {
                self.navigate_by(NavigationDirection::Previous, NavigationCause::Control)?
            }
            ControlAction::Next => {
                self.navigate_by(NavigationDirection::Next, NavigationCause::Control)?
            }
            ControlAction::ZoomIn => {
                self.zoom_in()?;
                None
            }
            ControlAction::ZoomOut => {
                self.zoom_out()?;
                None
            }
            ControlAction::ZoomReset => {
                self.reset_zoom()?;
                None
            }
            ControlAction::Fullscreen => {
                self.toggle_fullscreen()?;
                None
            }
        };

        self.show_controls();
        self.schedule_controls_hide();
        Ok(transition)
    }

    /// Flips the fullscreen flag and returns the new value.
    pub fn toggle_fullscreen(&mut self) -> CarouselResult<bool> {
        self.ensure_active()?;
        let fullscreen = !self.core.model.fullscreen;
        self.core.model.fullscreen = fullscreen;
        self.render_sync.on_fullscreen_changed(fullscreen);
        debug!(fullscreen, "fullscreen toggled");
        Ok(fullscreen)
    }

    fn queue_wheel_zoom(&mut self, delta_y: f64) -> CarouselResult<()> {
        if !delta_y.is_finite() {
            return Err(CarouselError::InvalidData(
                "wheel delta must be finite".to_owned(),
            ));
        }
        if delta_y == 0.0 {
            return Ok(());
        }
        let now = self.now();
        self.core.runtime.wheel_zoom.push(delta_y, now);
        Ok(())
    }

    fn handle_swipe(&mut self, swipe: SwipeEvent) -> CarouselResult<Option<SlideTransition>> {
        let now = self.now();
        let zoomed = self.core.model.zoom.is_zoomed();
        match self.core.runtime.swipe_gate.admit(swipe, now, zoomed) {
            Ok(direction) => self.navigate_by(direction, NavigationCause::Swipe),
            Err(rejection) => {
                trace!(?rejection, direction = ?swipe.direction, "swipe ignored");
                Ok(None)
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> CarouselResult<Option<SlideTransition>> {
        if !self.core.config.show_controls {
            return Ok(None);
        }
        match key {
            Key::ArrowLeft => {
                self.navigate_by(NavigationDirection::Previous, NavigationCause::Keyboard)
            }
            Key::ArrowRight => self.navigate_by(NavigationDirection::Next, NavigationCause::Keyboard),
            Key::Escape => {
                self.reset_zoom()?;
                Ok(None)
            }
            Key::Other => Ok(None),
        }
    }

    fn show_controls(&mut self) {
        if !self.core.config.show_controls {
            return;
        }
        self.core.runtime.controls_hide.cancel();
        self.set_controls_visible(true);
    }

    fn schedule_controls_hide(&mut self) {
        if !self.core.config.show_controls {
            return;
        }
        let now = self.now();
        self.core.runtime.controls_hide.schedule(now);
    }

    pub(super) fn set_controls_visible(&mut self, visible: bool) {
        if self.core.model.controls_visible == visible {
            return;
        }
        self.core.model.controls_visible = visible;
        self.render_sync.on_controls_visibility_changed(visible);
    }
}

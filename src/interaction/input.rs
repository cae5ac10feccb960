use serde::{Deserialize, Serialize};

use crate::error::CarouselResult;

use super::SwipeEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

/// Raw input reported by a host input source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Wheel scroll over the image area. Negative `delta_y` zooms in.
    Wheel { delta_y: f64 },
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    Swipe(SwipeEvent),
    Key(Key),
    TouchStart,
    TouchEnd,
}

/// On-screen control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlAction {
    Prev,
    Next,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    Fullscreen,
}

/// Per-instance event subscription owned by one carousel.
///
/// The carousel attaches a source when it is registered and detaches it on
/// removal or teardown; events observed by the source are forwarded to
/// `CarouselEngine::handle_input` by the host.
pub trait InputSource {
    fn id(&self) -> &str;
    fn attach(&mut self) -> CarouselResult<()>;
    fn detach(&mut self);
}

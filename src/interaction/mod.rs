mod input;
mod swipe;
mod zoom_pan;

pub use input::{ControlAction, InputEvent, InputSource, Key};
pub use swipe::{SwipeDirection, SwipeEvent, SwipeGate, SwipeRejection, SwipeTuning};
pub use zoom_pan::{
    ZoomLimits, ZoomPanState, ZoomSnapshot, constrain_translate, max_translate,
};

//! Poll-driven timers.
//!
//! Nothing here owns a thread or a runtime timer. The host event loop calls
//! `CarouselEngine::tick`, which polls each scheduler against the injected
//! [`Clock`]; cancelling a scheduler is a plain state change.

mod autoplay;
mod clock;
mod coalescing;
mod delayed_action;

pub use autoplay::{AutoplayScheduler, AutoplayState};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use coalescing::CoalescingScheduler;
pub use delayed_action::DelayedAction;

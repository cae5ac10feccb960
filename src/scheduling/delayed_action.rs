use std::time::Duration;

/// One-shot timeout. Scheduling again replaces the previous deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayedAction {
    delay: Duration,
    deadline: Option<Duration>,
}

impl DelayedAction {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn schedule(&mut self, now: Duration) {
        self.deadline = Some(now.saturating_add(self.delay));
    }

    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Returns `true` exactly once, when the deadline has passed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

use std::time::Duration;

/// Trailing-edge debounce: the latest value pushed during a burst is released
/// once no newer value arrived for a full window.
#[derive(Debug, Clone, PartialEq)]
pub struct CoalescingScheduler<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    value: T,
    deadline: Duration,
}

impl<T> CoalescingScheduler<T> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces any pending value and restarts the window.
    pub fn push(&mut self, value: T, now: Duration) {
        self.pending = Some(Pending {
            value,
            deadline: now.saturating_add(self.window),
        });
    }

    /// Releases the pending value once its window has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if !due {
            return None;
        }
        self.pending.take().map(|pending| pending.value)
    }

    /// Drops the pending value without releasing it.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::CoalescingScheduler;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn burst_releases_latest_value_once() {
        let mut scheduler = CoalescingScheduler::new(ms(16));
        scheduler.push(-1.0, ms(0));
        scheduler.push(-3.0, ms(10));
        scheduler.push(2.0, ms(20));

        assert_eq!(scheduler.poll(ms(30)), None);
        assert_eq!(scheduler.poll(ms(36)), Some(2.0));
        assert_eq!(scheduler.poll(ms(100)), None);
    }

    #[test]
    fn cancel_drops_pending_value() {
        let mut scheduler = CoalescingScheduler::new(ms(16));
        scheduler.push(1_u8, ms(0));
        assert!(scheduler.cancel());
        assert!(!scheduler.is_pending());
        assert_eq!(scheduler.poll(ms(50)), None);
        assert!(!scheduler.cancel());
    }
}

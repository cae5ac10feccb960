use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoplayState {
    Stopped,
    Running { next_due: Duration },
}

/// Periodic advance timer.
///
/// At most one countdown exists at a time: `start` while running keeps the
/// current countdown and `reset` replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayScheduler {
    interval: Duration,
    state: AutoplayState,
}

impl AutoplayScheduler {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: AutoplayState::Stopped,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn state(&self) -> AutoplayState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, AutoplayState::Running { .. })
    }

    /// Time left until the next advance, if running.
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        match self.state {
            AutoplayState::Stopped => None,
            AutoplayState::Running { next_due } => Some(next_due.saturating_sub(now)),
        }
    }

    /// Returns `false` when already running.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = AutoplayState::Running {
            next_due: now.saturating_add(self.interval),
        };
        true
    }

    /// Returns `false` when already stopped.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = AutoplayState::Stopped;
        was_running
    }

    pub fn reset(&mut self, now: Duration) {
        self.stop();
        self.start(now);
    }

    /// Fires at most once per call and schedules the following countdown
    /// from `now`.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.state {
            AutoplayState::Running { next_due } if now >= next_due => {
                self.state = AutoplayState::Running {
                    next_due: now.saturating_add(self.interval),
                };
                true
            }
            _ => false,
        }
    }
}

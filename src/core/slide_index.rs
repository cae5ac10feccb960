use serde::{Deserialize, Serialize};

/// Step direction for relative navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationDirection {
    Next,
    Previous,
}

impl NavigationDirection {
    #[must_use]
    pub const fn delta(self) -> isize {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

/// What triggered a slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationCause {
    Api,
    Autoplay,
    Swipe,
    Keyboard,
    Control,
}

/// Outcome of one navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideTransition {
    pub previous: usize,
    pub current: usize,
    pub cause: NavigationCause,
}

/// Resolves a requested slide position against the collection bounds.
///
/// Returns `None` for an empty collection. Out-of-range targets wrap to the
/// opposite end when `cycle` is set and stick to the nearest end otherwise.
#[must_use]
pub fn resolve_slide_index(target: isize, total: usize, cycle: bool) -> Option<usize> {
    if total == 0 {
        return None;
    }

    let last = total - 1;
    if target < 0 {
        return Some(if cycle { last } else { 0 });
    }

    let target = target.unsigned_abs();
    if target >= total {
        return Some(if cycle { 0 } else { last });
    }
    Some(target)
}

/// Resolves the slide one step away from `current`.
#[must_use]
pub fn advance_slide_index(
    current: usize,
    direction: NavigationDirection,
    total: usize,
    cycle: bool,
) -> Option<usize> {
    let current = isize::try_from(current).unwrap_or(isize::MAX);
    resolve_slide_index(current.saturating_add(direction.delta()), total, cycle)
}

/// Current and previous slide positions.
///
/// Both values are always valid indices into the collection they were
/// resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideIndex {
    current: usize,
    previous: usize,
}

impl SlideIndex {
    #[must_use]
    pub fn new(start: usize) -> Self {
        Self {
            current: start,
            previous: start,
        }
    }

    #[must_use]
    pub fn current(self) -> usize {
        self.current
    }

    #[must_use]
    pub fn previous(self) -> usize {
        self.previous
    }

    /// Moves to an already resolved position, remembering the old one.
    #[must_use]
    pub fn moved_to(self, resolved: usize) -> Self {
        Self {
            current: resolved,
            previous: self.current,
        }
    }
}

//! One-shot click listener slots owned by a widget instance.

use std::collections::HashSet;

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// Document-wide click listener (click anywhere closes the dropdown).
    Document,
    /// The dropdown's toggle button.
    ToggleButton,
}

/// Registry of armed one-shot listeners.
///
/// A listener fires at most once: [`take`](Self::take) both reports whether it
/// was armed and disarms it. Each target holds at most one listener, so arming
/// twice never stacks handlers.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    armed: HashSet<ListenerTarget>,
}

impl ListenerRegistry {
    /// Create a registry with nothing armed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the listener for `target`. Returns `false` if it was already armed.
    pub fn arm(&mut self, target: ListenerTarget) -> bool {
        self.armed.insert(target)
    }

    /// Remove the listener for `target`. Returns `false` if none was armed.
    pub fn disarm(&mut self, target: ListenerTarget) -> bool {
        self.armed.remove(&target)
    }

    /// Fire the listener for `target`: returns `true` and disarms it if armed.
    pub fn take(&mut self, target: ListenerTarget) -> bool {
        self.armed.remove(&target)
    }

    /// Check whether a listener is armed for `target`.
    pub fn is_armed(&self, target: ListenerTarget) -> bool {
        self.armed.contains(&target)
    }

    /// Disarm everything.
    pub fn clear(&mut self) {
        self.armed.clear();
    }
}

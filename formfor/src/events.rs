//! Input event types shared by widgets.

/// Modifier keys state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control key held
    pub ctrl: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };
}

/// Where a click landed, from the point of view of a select field.
///
/// Clicks that land on the widget bubble up to the document afterwards, the
/// same way a DOM click reaches `document` after its target handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The button that opens the dropdown.
    ToggleButton,
    /// A row of the open dropdown, by index into the filtered list.
    Option(usize),
    /// Anywhere else in the document.
    Outside,
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was acted upon but may continue to propagate.
    Handled,
    /// Event was consumed: default action suppressed, propagation stopped.
    Consumed,
}

impl EventResult {
    /// Check if the widget acted on the event.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }

    /// Whether the host should suppress the event's default action
    /// (for example submitting an enclosing form on Enter).
    pub fn prevents_default(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    /// Whether the host should stop the event from bubbling further.
    pub fn stops_propagation(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

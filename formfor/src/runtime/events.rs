//! Event handling - convert crossterm events to formfor events.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use log::trace;

use crate::events::Modifiers;
use crate::keybinds::{Key, KeyCombo};

/// Terminal events a form host forwards to its widgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event
    Key(KeyCombo),
    /// Left mouse button pressed at (column, row)
    Click { x: u16, y: u16 },
    /// Mouse moved to (column, row)
    Hover { x: u16, y: u16 },
    /// Request to quit
    Quit,
}

/// Convert crossterm KeyModifiers to formfor Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        shift: mods.contains(KeyModifiers::SHIFT),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

/// Convert crossterm KeyCode to formfor Key
fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        _ => None,
    }
}

/// Convert a crossterm KeyEvent to a formfor KeyCombo
pub fn convert_key_event(event: KeyEvent) -> Option<KeyCombo> {
    let key = convert_key(event.code)?;
    Some(KeyCombo::new(key, convert_modifiers(event.modifiers)))
}

/// Convert a crossterm MouseEvent to a formfor Event
pub fn convert_mouse_event(event: MouseEvent) -> Option<Event> {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Event::Click { x, y }),
        MouseEventKind::Moved => Some(Event::Hover { x, y }),
        _ => None,
    }
}

/// Convert a crossterm Event to a formfor Event
pub fn convert_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key_event) => {
            trace!(
                "Key event: code={:?}, modifiers={:?}, kind={:?}",
                key_event.code, key_event.modifiers, key_event.kind
            );

            // Only handle key press events, not release or repeat
            if key_event.kind != KeyEventKind::Press {
                return None;
            }

            if key_event.modifiers.contains(KeyModifiers::CONTROL)
                && key_event.code == KeyCode::Char('c')
            {
                return Some(Event::Quit);
            }
            convert_key_event(key_event).map(Event::Key)
        }
        CrosstermEvent::Mouse(mouse_event) => convert_mouse_event(mouse_event),
        _ => None,
    }
}

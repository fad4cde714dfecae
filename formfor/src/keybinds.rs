use crate::events::Modifiers;

/// A key combination (key + modifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add shift modifier
    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }
}

impl From<Key> for KeyCombo {
    fn from(key: Key) -> Self {
        Self::key(key)
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key
    Char(char),
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Space
    Space,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
}

impl Key {
    /// Map a DOM `keyCode` to a key.
    ///
    /// Letters map to their lowercase character; codes with no counterpart
    /// return `None`.
    pub fn from_key_code(code: u32) -> Option<Self> {
        let key = match code {
            8 => Self::Backspace,
            9 => Self::Tab,
            13 => Self::Enter,
            27 => Self::Escape,
            32 => Self::Space,
            38 => Self::Up,
            40 => Self::Down,
            48..=57 => Self::Char(char::from_digit(code - 48, 10)?),
            65..=90 => Self::Char(char::from_u32(code + 32)?),
            _ => return None,
        };
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_key_codes() {
        assert_eq!(Key::from_key_code(27), Some(Key::Escape));
        assert_eq!(Key::from_key_code(13), Some(Key::Enter));
        assert_eq!(Key::from_key_code(38), Some(Key::Up));
        assert_eq!(Key::from_key_code(40), Some(Key::Down));
    }

    #[test]
    fn printable_key_codes() {
        assert_eq!(Key::from_key_code(65), Some(Key::Char('a')));
        assert_eq!(Key::from_key_code(90), Some(Key::Char('z')));
        assert_eq!(Key::from_key_code(55), Some(Key::Char('7')));
        assert_eq!(Key::from_key_code(255), None);
        assert_eq!(Key::from_key_code(37), None);
    }

    #[test]
    fn combo_builders() {
        let combo = KeyCombo::key(Key::Enter).ctrl().shift();
        assert!(combo.modifiers.ctrl && combo.modifiers.shift && !combo.modifiers.alt);
        assert_eq!(KeyCombo::from(Key::Up), KeyCombo::new(Key::Up, Modifiers::NONE));
    }
}

//! Keyboard input delivered to editing controls.

/// Keys an editing control may receive while a cell is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Enter,
    Escape,
    Tab,
    Space,
    Backspace,
    Delete,

    // Function keys with grid meaning
    F2,
    F4,

    /// A printable character.
    Character(char),

    /// Unknown/unmapped key.
    Unknown(u16),
}

impl Key {
    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp
                | Key::ArrowDown
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::Home
                | Key::End
                | Key::PageUp
                | Key::PageDown
        )
    }
}

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held.
    pub alt: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        shift: false,
        control: false,
        alt: true,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt
    }
}

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: KeyboardModifiers,
}

impl KeyPress {
    /// A key press without modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyboardModifiers::NONE,
        }
    }

    /// A key press with modifiers.
    pub fn with_modifiers(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self { key, modifiers }
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

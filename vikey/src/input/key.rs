//! Key event types for the command language.

/// Modifier flags attached to a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift was held.
    pub shift: bool,
    /// Control was held.
    pub control: bool,
    /// Alt was held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: KeyModifiers = KeyModifiers {
        shift: false,
        control: false,
        alt: false,
    };

    /// Check if no modifier is set.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.control && !self.alt
    }
}

/// The key itself: a printable character or a symbolic key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character.
    Char(char),
    /// Escape key.
    Escape,
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
}

/// A single key event: a key code plus its modifiers.
///
/// Key events arrive already unmapped; the engine only reports the remap
/// mode the next event should be interpreted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held at the time.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a key event.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// A plain character key with no modifiers.
    pub fn from_char(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    /// A control-modified character key.
    pub fn ctrl(c: char) -> Self {
        Self::new(
            KeyCode::Char(c),
            KeyModifiers {
                control: true,
                ..KeyModifiers::NONE
            },
        )
    }

    /// An alt-modified character key.
    pub fn alt(c: char) -> Self {
        Self::new(
            KeyCode::Char(c),
            KeyModifiers {
                alt: true,
                ..KeyModifiers::NONE
            },
        )
    }

    /// The Escape key.
    pub fn escape() -> Self {
        Self::new(KeyCode::Escape, KeyModifiers::NONE)
    }

    /// Check if this is the Escape key, with any modifiers.
    pub fn is_escape(&self) -> bool {
        matches!(self.code, KeyCode::Escape)
    }

    /// Get the character, if this is a character key without control or
    /// alt modifiers. Shift is allowed: uppercase input carries it.
    pub fn as_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !self.modifiers.control && !self.modifiers.alt => Some(c),
            _ => None,
        }
    }

    /// Get the decimal digit value, if this is a plain digit key.
    pub fn as_digit(&self) -> Option<u32> {
        self.as_char().and_then(|c| c.to_digit(10))
    }
}

impl std::fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifiers.control {
            if let KeyCode::Char(c) = self.code {
                return write!(f, "^{}", c.to_ascii_uppercase());
            }
        }
        match self.code {
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Escape => write!(f, "<Esc>"),
            KeyCode::Enter => write!(f, "<Enter>"),
            KeyCode::Tab => write!(f, "<Tab>"),
            KeyCode::Backspace => write!(f, "<BS>"),
            KeyCode::Delete => write!(f, "<Del>"),
            KeyCode::Up => write!(f, "<Up>"),
            KeyCode::Down => write!(f, "<Down>"),
            KeyCode::Left => write!(f, "<Left>"),
            KeyCode::Right => write!(f, "<Right>"),
            KeyCode::Home => write!(f, "<Home>"),
            KeyCode::End => write!(f, "<End>"),
            KeyCode::PageUp => write!(f, "<PageUp>"),
            KeyCode::PageDown => write!(f, "<PageDown>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        let key = KeyEvent::from_char('a');
        assert_eq!(key.as_char(), Some('a'));
        assert!(key.modifiers.is_empty());
    }

    #[test]
    fn test_ctrl_has_no_char_value() {
        let key = KeyEvent::ctrl('d');
        assert_eq!(key.as_char(), None);
        assert!(key.modifiers.control);
    }

    #[test]
    fn test_as_digit() {
        assert_eq!(KeyEvent::from_char('7').as_digit(), Some(7));
        assert_eq!(KeyEvent::from_char('x').as_digit(), None);
        assert_eq!(KeyEvent::ctrl('7').as_digit(), None);
    }

    #[test]
    fn test_is_escape() {
        assert!(KeyEvent::escape().is_escape());
        assert!(!KeyEvent::from_char('q').is_escape());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", KeyEvent::from_char('a')), "a");
        assert_eq!(format!("{}", KeyEvent::ctrl('d')), "^D");
        assert_eq!(format!("{}", KeyEvent::escape()), "<Esc>");
    }
}

//! Keyboard shortcuts

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

/// Error when a shortcut string like `cmd+shift+k` is malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortcutParseError {
    #[error("Shortcut is empty")]
    Empty,

    #[error("Shortcut \"{0}\" has no key")]
    MissingKey(String),

    #[error("Unknown modifier: \"{0}\". Expected cmd, shift, option or ctrl")]
    UnknownModifier(String),

    #[error("Unknown key: \"{0}\"")]
    UnknownKey(String),
}

/// Key that triggers a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Return,
    Escape,
    Delete,
    Tab,
    Space,
    UpArrow,
    DownArrow,
    LeftArrow,
    RightArrow,
}

impl Key {
    fn normalized(self) -> Self {
        match self {
            Self::Char(' ') => Self::Space,
            Self::Char(c) => Self::Char(c.to_ascii_lowercase()),
            other => other,
        }
    }

    fn parse(token: &str) -> Result<Self, ShortcutParseError> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Self::Char(c).normalized());
        }

        match token.to_ascii_lowercase().as_str() {
            "return" | "enter" => Ok(Self::Return),
            "esc" | "escape" => Ok(Self::Escape),
            "delete" | "backspace" => Ok(Self::Delete),
            "tab" => Ok(Self::Tab),
            "space" => Ok(Self::Space),
            "plus" => Ok(Self::Char('+')),
            "up" => Ok(Self::UpArrow),
            "down" => Ok(Self::DownArrow),
            "left" => Ok(Self::LeftArrow),
            "right" => Ok(Self::RightArrow),
            _ => Err(ShortcutParseError::UnknownKey(token.to_string())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char('+') => write!(f, "plus"),
            Self::Char(c) => write!(f, "{}", c),
            Self::Return => write!(f, "return"),
            Self::Escape => write!(f, "esc"),
            Self::Delete => write!(f, "delete"),
            Self::Tab => write!(f, "tab"),
            Self::Space => write!(f, "space"),
            Self::UpArrow => write!(f, "up"),
            Self::DownArrow => write!(f, "down"),
            Self::LeftArrow => write!(f, "left"),
            Self::RightArrow => write!(f, "right"),
        }
    }
}

/// Set of modifier keys held with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Self = Self(0);
    pub const COMMAND: Self = Self(1);
    pub const SHIFT: Self = Self(1 << 1);
    pub const OPTION: Self = Self(1 << 2);
    pub const CONTROL: Self = Self(1 << 3);

    const NAMED: [(Self, &'static str); 4] = [
        (Self::COMMAND, "cmd"),
        (Self::SHIFT, "shift"),
        (Self::OPTION, "option"),
        (Self::CONTROL, "ctrl"),
    ];

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "cmd" | "command" | "super" | "meta" => Some(Self::COMMAND),
            "shift" => Some(Self::SHIFT),
            "opt" | "option" | "alt" => Some(Self::OPTION),
            "ctrl" | "control" => Some(Self::CONTROL),
            _ => None,
        }
    }
}

impl BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(m, _)| self.contains(*m))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", names.join("+"))
    }
}

/// A key press delivered to a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// Key plus modifiers that triggers an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyboardShortcut {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyboardShortcut {
    /// Shortcut with the default Command modifier
    pub fn new(key: Key) -> Self {
        Self::with_modifiers(key, Modifiers::COMMAND)
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key: key.normalized(),
            modifiers,
        }
    }

    /// Letters match case-insensitively; modifiers must match exactly.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.key.normalized() && self.modifiers == event.modifiers
    }
}

impl FromStr for KeyboardShortcut {
    type Err = ShortcutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let mut tokens: Vec<&str> = s.split('+').map(str::trim).collect();
        let key_token = tokens.pop().unwrap_or_default();
        if key_token.is_empty() {
            return Err(ShortcutParseError::MissingKey(s.to_string()));
        }

        let mut modifiers = Modifiers::NONE;
        for token in tokens {
            modifiers = modifiers
                | Modifiers::parse(token)
                    .ok_or_else(|| ShortcutParseError::UnknownModifier(token.to_string()))?;
        }

        if Modifiers::parse(key_token).is_some() {
            return Err(ShortcutParseError::MissingKey(s.to_string()));
        }

        Ok(Self::with_modifiers(Key::parse(key_token)?, modifiers))
    }
}

impl fmt::Display for KeyboardShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// Callback bound to a shortcut
#[derive(Clone)]
pub struct ShortcutAction(Arc<dyn Fn() + Send + Sync>);

impl ShortcutAction {
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(action))
    }

    pub fn perform(&self) {
        (self.0)()
    }
}

impl fmt::Debug for ShortcutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ShortcutAction")
    }
}

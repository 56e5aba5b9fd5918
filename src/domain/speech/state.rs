//! Speech playback state

use std::fmt;

/// Playback states of a speech controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpeechState {
    #[default]
    Idle,
    Speaking,
}

impl SpeechState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Speaking => "speaking",
        }
    }

    /// Map the observable "is speaking" flag to a state
    pub const fn from_speaking(speaking: bool) -> Self {
        if speaking {
            Self::Speaking
        } else {
            Self::Idle
        }
    }

    /// Check if currently speaking
    pub const fn is_speaking(&self) -> bool {
        matches!(self, Self::Speaking)
    }
}

impl fmt::Display for SpeechState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

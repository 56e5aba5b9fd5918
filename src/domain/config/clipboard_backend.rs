//! Clipboard backend selection

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidClipboardBackendError;

/// All available clipboard backends
pub const ALL_BACKENDS: &[ClipboardBackend] = &[
    ClipboardBackend::Arboard,
    ClipboardBackend::Wayland,
    ClipboardBackend::Memory,
];

/// Clipboard implementation chosen at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClipboardBackend {
    /// Cross-platform system clipboard
    #[default]
    Arboard,
    /// wl-copy / wl-paste
    Wayland,
    /// Process-local clipboard
    Memory,
}

impl ClipboardBackend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arboard => "arboard",
            Self::Wayland => "wayland",
            Self::Memory => "memory",
        }
    }
}

impl FromStr for ClipboardBackend {
    type Err = InvalidClipboardBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arboard" => Ok(Self::Arboard),
            "wayland" | "wl-clipboard" => Ok(Self::Wayland),
            "memory" => Ok(Self::Memory),
            _ => Err(InvalidClipboardBackendError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_backends() {
        assert_eq!("arboard".parse::<ClipboardBackend>().unwrap(), ClipboardBackend::Arboard);
        assert_eq!(" Wayland ".parse::<ClipboardBackend>().unwrap(), ClipboardBackend::Wayland);
        assert_eq!("wl-clipboard".parse::<ClipboardBackend>().unwrap(), ClipboardBackend::Wayland);
        assert_eq!("memory".parse::<ClipboardBackend>().unwrap(), ClipboardBackend::Memory);
    }

    #[test]
    fn parse_invalid_backend() {
        let err = "x11".parse::<ClipboardBackend>().unwrap_err();
        assert_eq!(err.input, "x11");
        assert!(err.to_string().contains("arboard"));
    }

    #[test]
    fn display_round_trips() {
        for backend in ALL_BACKENDS {
            assert_eq!(backend.to_string().parse::<ClipboardBackend>().unwrap(), *backend);
        }
    }
}

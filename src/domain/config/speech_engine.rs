//! Speech engine selection

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidSpeechEngineError;

/// Speech engine chosen at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpeechEngineKind {
    /// The platform synthesizer where one is built in, espeak-ng elsewhere
    #[default]
    Auto,
    /// espeak-ng command line tool
    Espeak,
    /// Platform synthesizer (AVSpeechSynthesizer, SAPI/WinRT)
    System,
}

impl SpeechEngineKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Espeak => "espeak",
            Self::System => "system",
        }
    }
}

impl FromStr for SpeechEngineKind {
    type Err = InvalidSpeechEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "espeak" | "espeak-ng" => Ok(Self::Espeak),
            "system" | "native" => Ok(Self::System),
            _ => Err(InvalidSpeechEngineError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SpeechEngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_engines() {
        assert_eq!("auto".parse::<SpeechEngineKind>().unwrap(), SpeechEngineKind::Auto);
        assert_eq!("espeak-ng".parse::<SpeechEngineKind>().unwrap(), SpeechEngineKind::Espeak);
        assert_eq!(" System ".parse::<SpeechEngineKind>().unwrap(), SpeechEngineKind::System);
    }

    #[test]
    fn parse_invalid_engine() {
        let err = "festival".parse::<SpeechEngineKind>().unwrap_err();
        assert_eq!(err.input, "festival");
        assert!(err.to_string().contains("espeak"));
    }
}

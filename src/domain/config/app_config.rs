//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::speech::DEFAULT_PREFERRED_LANGUAGE;

use super::{ClipboardBackend, SpeechEngineKind};

/// Default speech engine binary
pub const DEFAULT_ENGINE_BIN: &str = "espeak-ng";

/// Speech settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Which engine speaks: auto, espeak or system
    pub engine: Option<String>,
    /// Language prefix whose voices are listed first
    pub preferred_language: Option<String>,
    /// Speech engine executable
    pub engine_bin: Option<String>,
    /// Whether to probe the audio output before speaking
    pub audio_session: Option<bool>,
}

/// Clipboard settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    pub backend: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Identifier of the user's selected synthesis voice
    pub voice_identifier: Option<String>,
    pub speech: Option<SpeechConfig>,
    pub clipboard: Option<ClipboardConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            voice_identifier: None,
            speech: Some(SpeechConfig {
                engine: Some(SpeechEngineKind::default().to_string()),
                preferred_language: Some(DEFAULT_PREFERRED_LANGUAGE.to_string()),
                engine_bin: Some(DEFAULT_ENGINE_BIN.to_string()),
                audio_session: Some(true),
            }),
            clipboard: Some(ClipboardConfig {
                backend: Some(ClipboardBackend::default().to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            voice_identifier: other.voice_identifier.or(self.voice_identifier),
            speech: Self::merge_speech_config(self.speech, other.speech),
            clipboard: Self::merge_clipboard_config(self.clipboard, other.clipboard),
        }
    }

    fn merge_speech_config(
        base: Option<SpeechConfig>,
        other: Option<SpeechConfig>,
    ) -> Option<SpeechConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(SpeechConfig {
                engine: o.engine.or(b.engine),
                preferred_language: o.preferred_language.or(b.preferred_language),
                engine_bin: o.engine_bin.or(b.engine_bin),
                audio_session: o.audio_session.or(b.audio_session),
            }),
        }
    }

    fn merge_clipboard_config(
        base: Option<ClipboardConfig>,
        other: Option<ClipboardConfig>,
    ) -> Option<ClipboardConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(ClipboardConfig {
                backend: o.backend.or(b.backend),
            }),
        }
    }

    /// Get the preferred voice language prefix, or "zh" if not set
    pub fn preferred_language_or_default(&self) -> &str {
        self.speech
            .as_ref()
            .and_then(|s| s.preferred_language.as_deref())
            .unwrap_or(DEFAULT_PREFERRED_LANGUAGE)
    }

    /// Get the speech engine binary, or "espeak-ng" if not set
    pub fn engine_bin_or_default(&self) -> &str {
        self.speech
            .as_ref()
            .and_then(|s| s.engine_bin.as_deref())
            .unwrap_or(DEFAULT_ENGINE_BIN)
    }

    /// Get the audio session setting, or true if not set
    pub fn audio_session_or_default(&self) -> bool {
        self.speech
            .as_ref()
            .and_then(|s| s.audio_session)
            .unwrap_or(true)
    }

    /// Get speech engine as parsed value, or auto if not set/invalid
    pub fn speech_engine_or_default(&self) -> SpeechEngineKind {
        self.speech
            .as_ref()
            .and_then(|s| s.engine.as_ref())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get clipboard backend as parsed value, or default if not set/invalid
    pub fn clipboard_backend_or_default(&self) -> ClipboardBackend {
        self.clipboard
            .as_ref()
            .and_then(|c| c.backend.as_ref())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

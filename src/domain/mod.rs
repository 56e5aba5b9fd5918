//! Domain layer - Core business logic
//!
//! Contains value objects, voice policies, and domain errors.
//! This layer has no dependencies on external systems.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod speech;

// Re-export common types
pub use clipboard::ClipboardImage;
pub use config::{AppConfig, ClipboardBackend};
pub use error::*;
pub use speech::{SpeechRate, SpeechState, Utterance, UtteranceId, Voice, VoiceQuality};

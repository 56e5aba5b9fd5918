//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod audio_session;
pub mod clipboard;
pub mod config;
pub mod speech;

// Re-export common types
pub use audio_session::{AudioSession, AudioSessionError};
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use speech::{EngineEvent, EngineEventSender, SpeechEngine, SpeechError};

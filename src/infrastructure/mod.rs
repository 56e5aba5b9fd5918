//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard, the speech synthesizers, the audio output
//! and the config file.

pub mod audio_session;
pub mod clipboard;
pub mod config;
pub mod speech;

// Re-export adapters
pub use audio_session::{create_audio_session, NoOpAudioSession, RodioAudioSession};
pub use clipboard::{create_clipboard, ArboardClipboard, MemoryClipboard, WaylandClipboard};
pub use config::{LayeredConfigStore, XdgConfigStore};
pub use speech::{create_speech_engine, EspeakEngine};

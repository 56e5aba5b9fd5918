//! Configuration domain module

mod app_config;
mod clipboard_backend;
mod speech_engine;

pub use app_config::{AppConfig, ClipboardConfig, SpeechConfig, DEFAULT_ENGINE_BIN};
pub use clipboard_backend::{ClipboardBackend, ALL_BACKENDS};
pub use speech_engine::SpeechEngineKind;

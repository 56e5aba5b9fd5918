//! Application layer - Services and port interfaces
//!
//! Contains the adapter-facing services and trait definitions
//! for external system interactions.

pub mod clipboard_service;
pub mod ports;
pub mod speech_controller;

// Re-export services
pub use clipboard_service::ClipboardService;
pub use speech_controller::{CompletionHandler, SpeechController};

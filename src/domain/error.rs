//! Domain error types

use thiserror::Error;

/// Error when an unknown clipboard backend is configured
#[derive(Debug, Clone, Error)]
#[error("Invalid clipboard backend: \"{input}\". Valid backends are: arboard, wayland, memory")]
pub struct InvalidClipboardBackendError {
    pub input: String,
}

/// Error when an unknown speech engine is configured
#[derive(Debug, Clone, Error)]
#[error("Invalid speech engine: \"{input}\". Valid engines are: auto, espeak, system")]
pub struct InvalidSpeechEngineError {
    pub input: String,
}

/// Error when clipboard image dimensions and pixel data disagree
#[derive(Debug, Clone, Error)]
pub enum InvalidImageError {
    #[error("Image has no pixels ({width}x{height})")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("Image buffer holds {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

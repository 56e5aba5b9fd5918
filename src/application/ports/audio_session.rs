//! Audio session port for speech playback
//!
//! Prepares the audio output before an utterance is submitted.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while configuring the audio session
#[derive(Error, Debug)]
pub enum AudioSessionError {
    /// No audio output device available
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// The output exists but could not be prepared for playback
    #[error("Audio session configuration failed: {0}")]
    ConfigurationFailed(String),
}

/// Port trait for audio output configuration
#[async_trait]
pub trait AudioSession: Send + Sync {
    /// Prepare the audio output for spoken playback
    async fn configure_playback(&self) -> Result<(), AudioSessionError>;
}

/// Blanket implementation for boxed audio session types
#[async_trait]
impl AudioSession for Box<dyn AudioSession> {
    async fn configure_playback(&self) -> Result<(), AudioSessionError> {
        self.as_ref().configure_playback().await
    }
}

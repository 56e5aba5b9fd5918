//! Rodio-based audio session adapter
//!
//! Opens the default output device and a playback sink to make sure speech
//! has somewhere to go before an utterance is submitted.

use async_trait::async_trait;
use rodio::{OutputStream, Sink};

use crate::application::ports::{AudioSession, AudioSessionError};

/// Audio session implementation using rodio
pub struct RodioAudioSession;

impl RodioAudioSession {
    /// Create a new rodio-based audio session
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioAudioSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioSession for RodioAudioSession {
    async fn configure_playback(&self) -> Result<(), AudioSessionError> {
        // Device probing blocks, keep it off the async runtime
        tokio::task::spawn_blocking(probe_output_sync)
            .await
            .map_err(|e| {
                AudioSessionError::ConfigurationFailed(format!("Task join error: {}", e))
            })?
    }
}

/// Open and release the default output (called from spawn_blocking)
fn probe_output_sync() -> Result<(), AudioSessionError> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| AudioSessionError::DeviceNotAvailable(e.to_string()))?;

    let sink = Sink::try_new(&stream_handle)
        .map_err(|e| AudioSessionError::ConfigurationFailed(e.to_string()))?;
    sink.stop();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "Requires audio hardware"]
    async fn can_configure_playback() {
        let session = RodioAudioSession::new();
        assert!(session.configure_playback().await.is_ok());
    }
}

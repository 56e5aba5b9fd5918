//! No-op audio session adapter
//!
//! Used when audio session probing is disabled or no audio stack exists.

use async_trait::async_trait;

use crate::application::ports::{AudioSession, AudioSessionError};

/// Audio session that leaves the output untouched
pub struct NoOpAudioSession;

impl NoOpAudioSession {
    /// Create a new no-op audio session
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpAudioSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioSession for NoOpAudioSession {
    async fn configure_playback(&self) -> Result<(), AudioSessionError> {
        Ok(())
    }
}

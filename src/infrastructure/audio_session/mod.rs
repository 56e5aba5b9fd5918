//! Audio session infrastructure adapters

mod noop;
mod rodio;

pub use noop::NoOpAudioSession;
pub use rodio::RodioAudioSession;

use crate::application::ports::AudioSession;

/// Create an audio session adapter based on whether probing is enabled
pub fn create_audio_session(enabled: bool) -> Box<dyn AudioSession> {
    if enabled {
        Box::new(RodioAudioSession::new())
    } else {
        Box::new(NoOpAudioSession::new())
    }
}

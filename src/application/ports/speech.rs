//! Speech engine port interface

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::domain::speech::{Utterance, UtteranceId, Voice};

/// Speech engine errors
#[derive(Debug, Clone, Error)]
pub enum SpeechError {
    #[error("Speech engine '{0}' not found. Please install espeak-ng or set speech.engine_bin.")]
    EngineNotFound(String),

    #[error("Speech engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("Failed to list voices: {0}")]
    VoiceListFailed(String),

    #[error("Failed to start utterance: {0}")]
    SpeakFailed(String),

    #[error("Failed to stop speaking: {0}")]
    StopFailed(String),
}

/// Notifications emitted by an engine while rendering an utterance.
///
/// Engines send these from their own tasks; the controller applies them
/// when its owner pumps the event queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Audio for the utterance started playing
    Started(UtteranceId),
    /// The utterance played to completion
    Finished(UtteranceId),
    /// The engine failed mid-utterance
    Failed { id: UtteranceId, message: String },
}

impl EngineEvent {
    /// The utterance this event belongs to
    pub fn utterance_id(&self) -> UtteranceId {
        match self {
            Self::Started(id) | Self::Finished(id) => *id,
            Self::Failed { id, .. } => *id,
        }
    }
}

/// Channel on which engines report [`EngineEvent`]s
pub type EngineEventSender = mpsc::UnboundedSender<EngineEvent>;

/// Port for a platform text-to-speech engine
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// List the voices the engine can speak with, in engine order.
    async fn voices(&self) -> Result<Vec<Voice>, SpeechError>;

    /// Submit an utterance for playback.
    ///
    /// Returns once the utterance has been accepted; start, finish and
    /// failure are reported on `events`.
    async fn speak(&self, utterance: Utterance, events: EngineEventSender)
        -> Result<(), SpeechError>;

    /// Stop any playback immediately. No event is sent for the stopped
    /// utterance.
    async fn stop(&self) -> Result<(), SpeechError>;
}

/// Blanket implementation for boxed speech engines
#[async_trait]
impl SpeechEngine for Box<dyn SpeechEngine> {
    async fn voices(&self) -> Result<Vec<Voice>, SpeechError> {
        self.as_ref().voices().await
    }

    async fn speak(
        &self,
        utterance: Utterance,
        events: EngineEventSender,
    ) -> Result<(), SpeechError> {
        self.as_ref().speak(utterance, events).await
    }

    async fn stop(&self) -> Result<(), SpeechError> {
        self.as_ref().stop().await
    }
}

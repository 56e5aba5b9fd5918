//! espeak-ng speech engine adapter
//!
//! Each utterance runs one `espeak-ng` process that plays audio directly.
//! Stopping kills the process.

use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::sync::{oneshot, Mutex};
use tracing::{debug, warn};

use crate::application::ports::{EngineEvent, EngineEventSender, SpeechEngine, SpeechError};
use crate::domain::config::DEFAULT_ENGINE_BIN;
use crate::domain::speech::{SpeechRate, Utterance, UtteranceId, Voice};

use super::voice_list::merge_voice_lists;

/// Lists every voice except MBROLA ones
const VOICES_ARG: &str = "--voices";
/// Lists the MBROLA voices
const MBROLA_VOICES_ARG: &str = "--voices=mb";

/// espeak-ng words-per-minute range and its normal rate
const MIN_WPM: f32 = 80.0;
const NORMAL_WPM: f32 = 175.0;
const MAX_WPM: f32 = 450.0;

/// Map a normalized rate onto espeak-ng words per minute.
///
/// 0.0 → 80, 0.5 → 175 (espeak's default), 1.0 → 450; linear in between.
pub fn words_per_minute(rate: SpeechRate) -> u32 {
    let r = rate.value();
    let wpm = if r <= 0.5 {
        MIN_WPM + (NORMAL_WPM - MIN_WPM) * (r / 0.5)
    } else {
        NORMAL_WPM + (MAX_WPM - NORMAL_WPM) * ((r - 0.5) / 0.5)
    };
    wpm.round() as u32
}

/// Handle to the process speaking right now
struct ActiveUtterance {
    id: UtteranceId,
    cancel: oneshot::Sender<()>,
}

/// Speech engine driving the espeak-ng command line tool
pub struct EspeakEngine {
    binary: String,
    active: Arc<Mutex<Option<ActiveUtterance>>>,
}

impl EspeakEngine {
    /// Create an engine using the `espeak-ng` binary on PATH
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_ENGINE_BIN)
    }

    /// Create an engine using a specific binary
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            active: Arc::new(Mutex::new(None)),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Run `espeak-ng <arg>` and return the voice table it prints
    async fn list_voices(&self, arg: &str) -> Result<String, SpeechError> {
        let output = Command::new(&self.binary)
            .arg(arg)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SpeechError::EngineNotFound(self.binary.clone())
                } else {
                    SpeechError::VoiceListFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            return Err(SpeechError::VoiceListFailed(format!(
                "{} {} exited with status: {}",
                self.binary, arg, output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn map_spawn_error(&self, e: std::io::Error) -> SpeechError {
        if e.kind() == std::io::ErrorKind::NotFound {
            SpeechError::EngineNotFound(self.binary.clone())
        } else {
            SpeechError::SpeakFailed(e.to_string())
        }
    }
}

impl Default for EspeakEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechEngine for EspeakEngine {
    async fn voices(&self) -> Result<Vec<Voice>, SpeechError> {
        let voices = self.list_voices(VOICES_ARG).await?;

        // Missing MBROLA data only costs the enhanced voices
        let mbrola = match self.list_voices(MBROLA_VOICES_ARG).await {
            Ok(listing) => listing,
            Err(e) => {
                warn!(error = %e, "Skipping MBROLA voices");
                String::new()
            }
        };

        Ok(merge_voice_lists(&[&voices, &mbrola]))
    }

    async fn speak(
        &self,
        utterance: Utterance,
        events: EngineEventSender,
    ) -> Result<(), SpeechError> {
        let id = utterance.id;
        let wpm = words_per_minute(utterance.rate);
        debug!(utterance = %id, voice = %utterance.voice_identifier, wpm, "Spawning espeak-ng");

        let mut child = Command::new(&self.binary)
            .arg("-v")
            .arg(&utterance.voice_identifier)
            .arg("-s")
            .arg(wpm.to_string())
            .arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.map_spawn_error(e))?;

        // Write text to stdin, then close it so espeak-ng starts speaking
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(utterance.text.as_bytes()).await {
                let _ = child.kill().await;
                return Err(SpeechError::SpeakFailed(e.to_string()));
            }
        }

        let (cancel_tx, cancel_rx) = oneshot::channel();
        if let Some(previous) = self.active.lock().await.replace(ActiveUtterance {
            id,
            cancel: cancel_tx,
        }) {
            let _ = previous.cancel.send(());
        }

        let _ = events.send(EngineEvent::Started(id));

        let active = Arc::clone(&self.active);
        let binary = self.binary.clone();
        tokio::spawn(async move {
            let outcome = tokio::select! {
                status = child.wait() => Some(status),
                _ = cancel_rx => {
                    let _ = child.kill().await;
                    None
                }
            };

            {
                let mut active = active.lock().await;
                if active.as_ref().is_some_and(|a| a.id == id) {
                    *active = None;
                }
            }

            let event = match outcome {
                // Stopped: the controller already knows
                None => return,
                Some(Ok(status)) if status.success() => EngineEvent::Finished(id),
                Some(Ok(status)) => EngineEvent::Failed {
                    id,
                    message: format!("{} exited with status: {}", binary, status),
                },
                Some(Err(e)) => EngineEvent::Failed {
                    id,
                    message: e.to_string(),
                },
            };
            let _ = events.send(event);
        });

        Ok(())
    }

    async fn stop(&self) -> Result<(), SpeechError> {
        if let Some(active) = self.active.lock().await.take() {
            debug!(utterance = %active.id, "Stopping espeak-ng");
            // The receiver is gone if the process already exited
            let _ = active.cancel.send(());
        }
        Ok(())
    }
}

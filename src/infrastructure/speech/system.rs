//! Platform synthesizer adapter built on the `tts` crate
//!
//! Uses AVSpeechSynthesizer on macOS and WinRT/SAPI on Windows. Linux keeps
//! espeak-ng, so the adapter itself is not compiled there; the callback
//! bookkeeping and value mapping below are shared and tested everywhere.

use crate::application::ports::{EngineEvent, EngineEventSender};
use crate::domain::speech::{SpeechRate, UtteranceId, VoiceQuality};

/// Callback kinds reported by the platform synthesizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Begin,
    End,
    Stop,
}

/// Maps synthesizer utterance ids onto ours and turns callbacks into
/// [`EngineEvent`]s.
///
/// Callbacks can arrive before `speak` has returned the synthesizer's id;
/// those are buffered and replayed once the id is bound.
pub(crate) struct CallbackTracker<K> {
    current: Option<(UtteranceId, Option<K>)>,
    early: Vec<(Phase, K)>,
    events: Option<EngineEventSender>,
}

impl<K: Copy + PartialEq> CallbackTracker<K> {
    pub(crate) fn new() -> Self {
        Self {
            current: None,
            early: Vec::new(),
            events: None,
        }
    }

    /// Start tracking `ours`, dropping whatever came before
    pub(crate) fn begin(&mut self, ours: UtteranceId, events: EngineEventSender) {
        self.current = Some((ours, None));
        self.early.clear();
        self.events = Some(events);
    }

    /// Record the synthesizer id for the tracked utterance
    pub(crate) fn bind(&mut self, theirs: K) {
        let Some((ours, _)) = self.current else {
            return;
        };
        self.current = Some((ours, Some(theirs)));

        let early = std::mem::take(&mut self.early);
        for (phase, id) in early {
            if id == theirs {
                self.emit(ours, phase);
            }
        }
    }

    /// Forget the tracked utterance without reporting anything
    pub(crate) fn clear(&mut self) -> Option<UtteranceId> {
        self.early.clear();
        self.current.take().map(|(ours, _)| ours)
    }

    /// The utterance being tracked, if any
    pub(crate) fn current(&self) -> Option<UtteranceId> {
        self.current.map(|(ours, _)| ours)
    }

    /// Apply one synthesizer callback
    pub(crate) fn observe(&mut self, phase: Phase, theirs: K) {
        let Some((ours, known)) = self.current else {
            return;
        };
        match known {
            None => self.early.push((phase, theirs)),
            Some(known) if known == theirs => self.emit(ours, phase),
            Some(_) => {}
        }
    }

    /// Report the end of `ours` when it is still tracked
    pub(crate) fn finish(&mut self, ours: UtteranceId) {
        if self.current() == Some(ours) {
            self.emit(ours, Phase::End);
        }
    }

    fn emit(&mut self, ours: UtteranceId, phase: Phase) {
        let event = match phase {
            Phase::Begin => EngineEvent::Started(ours),
            Phase::End => {
                self.current = None;
                EngineEvent::Finished(ours)
            }
            // Stops come from our own stop() or an interruption
            Phase::Stop => {
                self.current = None;
                return;
            }
        };
        if let Some(events) = &self.events {
            let _ = events.send(event);
        }
    }
}

/// Map a normalized rate onto a synthesizer's own rate range.
///
/// 0.5 lands on `normal`; each half is linear.
pub(crate) fn synthesizer_rate(rate: SpeechRate, min: f32, normal: f32, max: f32) -> f32 {
    let r = rate.value();
    if r <= 0.5 {
        min + (normal - min) * (r / 0.5)
    } else {
        normal + (max - normal) * ((r - 0.5) / 0.5)
    }
}

/// Quality tier encoded in platform voice identifiers
/// (`com.apple.voice.premium.zh-CN.Lili`).
pub(crate) fn quality_from_identifier(identifier: &str) -> VoiceQuality {
    let lower = identifier.to_lowercase();
    if lower.contains(".premium.") {
        VoiceQuality::Premium
    } else if lower.contains(".enhanced.") {
        VoiceQuality::Enhanced
    } else {
        VoiceQuality::Default
    }
}

#[cfg(not(target_os = "linux"))]
pub use adapter::SystemEngine;

#[cfg(not(target_os = "linux"))]
mod adapter {
    use std::sync::{Arc, Mutex, MutexGuard};
    use std::time::Duration;

    use async_trait::async_trait;
    use tracing::{debug, warn};

    use super::{quality_from_identifier, synthesizer_rate, CallbackTracker, Phase};
    use crate::application::ports::{EngineEvent, EngineEventSender, SpeechEngine, SpeechError};
    use crate::domain::speech::{Utterance, UtteranceId, Voice};

    type Tracker = Arc<Mutex<CallbackTracker<tts::UtteranceId>>>;

    /// Interval for polling synthesizers without utterance callbacks
    const POLL_INTERVAL: Duration = Duration::from_millis(50);

    /// Speech engine backed by the platform synthesizer
    pub struct SystemEngine {
        tts: Mutex<tts::Tts>,
        tracker: Tracker,
        callbacks: bool,
    }

    impl SystemEngine {
        /// Connect to the platform synthesizer
        pub fn new() -> Result<Self, SpeechError> {
            let tts = tts::Tts::default()
                .map_err(|e| SpeechError::EngineUnavailable(e.to_string()))?;
            let tracker: Tracker = Arc::new(Mutex::new(CallbackTracker::new()));
            let callbacks = tts.supported_features().utterance_callbacks;

            if callbacks {
                for phase in [Phase::Begin, Phase::End, Phase::Stop] {
                    let tracker = Arc::clone(&tracker);
                    let callback: Box<dyn FnMut(tts::UtteranceId)> = Box::new(move |id| {
                        if let Ok(mut tracker) = tracker.lock() {
                            tracker.observe(phase, id);
                        }
                    });
                    let registered = match phase {
                        Phase::Begin => tts.on_utterance_begin(Some(callback)),
                        Phase::End => tts.on_utterance_end(Some(callback)),
                        Phase::Stop => tts.on_utterance_stop(Some(callback)),
                    };
                    registered.map_err(|e| SpeechError::EngineUnavailable(e.to_string()))?;
                }
            }

            debug!(callbacks, "Connected to platform synthesizer");
            Ok(Self {
                tts: Mutex::new(tts),
                tracker,
                callbacks,
            })
        }

        fn tts(&self) -> Result<MutexGuard<'_, tts::Tts>, SpeechError> {
            self.tts
                .lock()
                .map_err(|_| SpeechError::EngineUnavailable("synthesizer lock poisoned".into()))
        }

        fn tracker(&self) -> Result<MutexGuard<'_, CallbackTracker<tts::UtteranceId>>, SpeechError> {
            self.tracker
                .lock()
                .map_err(|_| SpeechError::EngineUnavailable("tracker lock poisoned".into()))
        }

        /// Report completion by watching `is_speaking` instead of callbacks
        fn poll_until_silent(&self, utterance: UtteranceId) {
            let Ok(tts) = self.tts().map(|tts| tts.clone()) else {
                return;
            };
            let tracker = Arc::clone(&self.tracker);

            tokio::spawn(async move {
                let mut ticker = tokio::time::interval(POLL_INTERVAL);
                loop {
                    ticker.tick().await;
                    let Ok(mut state) = tracker.lock() else {
                        return;
                    };
                    if state.current() != Some(utterance) {
                        return;
                    }
                    match tts.is_speaking() {
                        Ok(true) => {}
                        Ok(false) => return state.finish(utterance),
                        Err(e) => {
                            warn!(error = %e, "Lost track of platform synthesizer");
                            return state.finish(utterance);
                        }
                    }
                }
            });
        }
    }

    #[async_trait]
    impl SpeechEngine for SystemEngine {
        async fn voices(&self) -> Result<Vec<Voice>, SpeechError> {
            let voices = self
                .tts()?
                .voices()
                .map_err(|e| SpeechError::VoiceListFailed(e.to_string()))?;

            Ok(voices
                .into_iter()
                .map(|voice| {
                    let id = voice.id();
                    let quality = quality_from_identifier(&id);
                    Voice::new(id, voice.name(), voice.language().as_str()).with_quality(quality)
                })
                .collect())
        }

        async fn speak(
            &self,
            utterance: Utterance,
            events: EngineEventSender,
        ) -> Result<(), SpeechError> {
            let id = utterance.id;
            let mut tts = self.tts()?;

            match tts
                .voices()
                .ok()
                .and_then(|voices| voices.into_iter().find(|v| v.id() == utterance.voice_identifier))
            {
                Some(voice) => tts
                    .set_voice(&voice)
                    .map_err(|e| SpeechError::SpeakFailed(e.to_string()))?,
                None => debug!(voice = %utterance.voice_identifier, "Voice not offered, using default"),
            }

            let rate = synthesizer_rate(
                utterance.rate,
                tts.min_rate(),
                tts.normal_rate(),
                tts.max_rate(),
            );
            if let Err(e) = tts.set_rate(rate) {
                debug!(error = %e, "Synthesizer ignored rate");
            }

            self.tracker()?.begin(id, events.clone());
            debug!(utterance = %id, voice = %utterance.voice_identifier, rate, "Speaking with platform synthesizer");

            let theirs = match tts.speak(utterance.text, true) {
                Ok(theirs) => theirs,
                Err(e) => {
                    self.tracker()?.clear();
                    return Err(SpeechError::SpeakFailed(e.to_string()));
                }
            };
            drop(tts);

            match theirs {
                Some(theirs) if self.callbacks => self.tracker()?.bind(theirs),
                _ => {
                    let _ = events.send(EngineEvent::Started(id));
                    self.poll_until_silent(id);
                }
            }

            Ok(())
        }

        async fn stop(&self) -> Result<(), SpeechError> {
            if let Some(id) = self.tracker()?.clear() {
                debug!(utterance = %id, "Stopping platform synthesizer");
            }
            self.tts()?
                .stop()
                .map(|_| ())
                .map_err(|e| SpeechError::StopFailed(e.to_string()))
        }
    }
}

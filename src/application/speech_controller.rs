//! Speech playback controller
//!
//! Wraps a speech engine with an observable speaking flag, a sorted voice
//! list and voice selection from the persisted preference.
//!
//! State machine:
//!   IDLE -> SPEAKING (engine reports start of a spoken utterance)
//!   SPEAKING -> IDLE (natural completion, engine failure, or stop)
//!
//! The controller is owned by a single task and mutated through `&mut self`.
//! Engine events arrive on a channel from engine tasks and only touch
//! controller state when the owner pumps them with [`SpeechController::next_event`]
//! or [`SpeechController::drain_events`].

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::domain::speech::{
    same_order, select_voice, sort_voices, SpeechState, Utterance, UtteranceId, Voice,
};

use super::ports::{AudioSession, ConfigStore, EngineEvent, EngineEventSender, SpeechEngine};

/// Handler run once when an utterance ends, whether it finished or was stopped
pub type CompletionHandler = Box<dyn FnOnce() + Send>;

/// Speech playback controller
pub struct SpeechController<E, S, P>
where
    E: SpeechEngine,
    S: AudioSession,
    P: ConfigStore,
{
    engine: E,
    session: S,
    preferences: P,
    preferred_language: String,
    events_tx: EngineEventSender,
    events_rx: mpsc::UnboundedReceiver<EngineEvent>,
    speaking: watch::Sender<bool>,
    voices: watch::Sender<Vec<Voice>>,
    current: Option<UtteranceId>,
    pending_completion: Option<CompletionHandler>,
    next_id: UtteranceId,
}

impl<E, S, P> SpeechController<E, S, P>
where
    E: SpeechEngine,
    S: AudioSession,
    P: ConfigStore,
{
    /// Create a controller with an empty voice list.
    ///
    /// Call [`refresh_voices`](Self::refresh_voices) before speaking.
    pub fn new(engine: E, session: S, preferences: P, preferred_language: impl Into<String>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (speaking, _) = watch::channel(false);
        let (voices, _) = watch::channel(Vec::new());

        Self {
            engine,
            session,
            preferences,
            preferred_language: preferred_language.into(),
            events_tx,
            events_rx,
            speaking,
            voices,
            current: None,
            pending_completion: None,
            next_id: UtteranceId::new(1),
        }
    }

    /// Check if an utterance is currently being spoken
    pub fn is_speaking(&self) -> bool {
        *self.speaking.borrow()
    }

    /// Get the current playback state
    pub fn state(&self) -> SpeechState {
        SpeechState::from_speaking(self.is_speaking())
    }

    /// Check if an utterance was submitted and has not ended yet.
    ///
    /// True from `speak` until completion or `stop`, including the window
    /// before the engine reports that playback started.
    pub fn has_pending_utterance(&self) -> bool {
        self.current.is_some()
    }

    /// Observe the speaking flag
    pub fn subscribe_speaking(&self) -> watch::Receiver<bool> {
        self.speaking.subscribe()
    }

    /// Observe the published voice list
    pub fn subscribe_voices(&self) -> watch::Receiver<Vec<Voice>> {
        self.voices.subscribe()
    }

    /// Snapshot of the published voice list
    pub fn voices(&self) -> Vec<Voice> {
        self.voices.borrow().clone()
    }

    /// Resolve the voice to speak with.
    ///
    /// Returns the persisted preference if it names a voice in the current
    /// list, otherwise the first voice, or `None` if the list is empty.
    pub async fn selected_voice_id(&self) -> Option<String> {
        let preference = match self.preferences.voice_preference().await {
            Ok(preference) => preference,
            Err(e) => {
                warn!(error = %e, "Could not read voice preference");
                None
            }
        };

        select_voice(preference.as_deref(), &self.voices.borrow())
    }

    /// Speak `text`, running `on_finished` once the utterance ends.
    ///
    /// Returns as soon as the engine accepted the utterance. A call made
    /// while another utterance is in flight interrupts it first. Does nothing
    /// (beyond logging) when no voice is available.
    pub async fn speak<F>(&mut self, text: &str, on_finished: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let Some(voice_id) = self.selected_voice_id().await else {
            warn!("Could not find a voice identifier, not speaking");
            return;
        };
        debug!(voice = %voice_id, "Selected voice");

        if self.current.is_some() {
            debug!("Interrupting utterance in flight");
            self.stop().await;
        }

        if let Err(e) = self.session.configure_playback().await {
            warn!(error = %e, "Audio session setup failed, continuing");
        }

        let id = self.next_id;
        self.next_id = id.next();
        self.current = Some(id);
        self.pending_completion = Some(Box::new(on_finished));

        let utterance = Utterance::new(id, text, voice_id);
        info!(utterance = %id, chars = text.chars().count(), "Submitting utterance");

        if let Err(e) = self.engine.speak(utterance, self.events_tx.clone()).await {
            warn!(utterance = %id, error = %e, "Speech engine rejected utterance");
            self.finish(id);
        }
    }

    /// Stop speaking immediately.
    ///
    /// Runs the pending completion handler, so callers see the same signal
    /// as for natural completion.
    pub async fn stop(&mut self) {
        self.speaking.send_replace(false);
        self.current = None;

        if let Some(on_finished) = self.pending_completion.take() {
            on_finished();
        }

        if let Err(e) = self.engine.stop().await {
            warn!(error = %e, "Speech engine stop failed");
        }
    }

    /// Recompute the voice list from the engine.
    ///
    /// The list is only republished when the order of identifiers changed, so
    /// subscribers see no change notification for an unchanged voice set.
    pub async fn refresh_voices(&mut self) {
        let voices = match self.engine.voices().await {
            Ok(voices) => voices,
            Err(e) => {
                warn!(error = %e, "Could not list voices");
                return;
            }
        };

        let sorted = sort_voices(voices, &self.preferred_language);
        if same_order(&self.voices.borrow(), &sorted) {
            debug!(count = sorted.len(), "Voice list unchanged");
            return;
        }

        info!(count = sorted.len(), "Voice list updated");
        self.voices.send_replace(sorted);
    }

    /// Wait for the next engine event and apply it.
    pub async fn next_event(&mut self) -> Option<EngineEvent> {
        let event = self.events_rx.recv().await?;
        self.handle_event(event.clone());
        Some(event)
    }

    /// Apply every engine event already queued, without waiting.
    ///
    /// # Returns
    /// The number of events applied
    pub fn drain_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Apply an engine event to controller state.
    ///
    /// Events for utterances that were stopped or superseded are ignored.
    pub fn handle_event(&mut self, event: EngineEvent) {
        if self.current != Some(event.utterance_id()) {
            debug!(?event, "Ignoring event for stale utterance");
            return;
        }

        match event {
            EngineEvent::Started(id) => {
                debug!(utterance = %id, "Speech started");
                self.speaking.send_replace(true);
            }
            EngineEvent::Finished(id) => {
                debug!(utterance = %id, "Speech finished");
                self.finish(id);
            }
            EngineEvent::Failed { id, message } => {
                warn!(utterance = %id, error = %message, "Speech synthesis error");
                self.finish(id);
            }
        }
    }

    fn finish(&mut self, id: UtteranceId) {
        if self.current != Some(id) {
            return;
        }
        self.current = None;
        self.speaking.send_replace(false);

        if let Some(on_finished) = self.pending_completion.take() {
            on_finished();
        }
    }
}

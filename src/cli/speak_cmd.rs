//! Speak and voices command handlers

use crate::application::ports::{AudioSession, ConfigStore, EngineEvent, SpeechEngine};
use crate::application::SpeechController;

use super::app::VOICE_ENV;
use super::presenter::Presenter;

enum Step {
    Event(Option<EngineEvent>),
    Interrupted,
}

/// Speak `text` and wait until playback ends or Ctrl-C stops it
pub async fn handle_speak_command<E, S, P>(
    controller: &mut SpeechController<E, S, P>,
    text: &str,
    presenter: &mut Presenter,
) -> Result<(), String>
where
    E: SpeechEngine,
    S: AudioSession,
    P: ConfigStore,
{
    if text.trim().is_empty() {
        return Err("Nothing to speak".to_string());
    }
    if controller.voices().is_empty() {
        return Err("No voices available. Is espeak-ng installed?".to_string());
    }

    let voice = controller.selected_voice_id().await.unwrap_or_default();
    controller.speak(text, || {}).await;
    if !controller.has_pending_utterance() {
        return Err("Speech engine rejected the utterance".to_string());
    }

    presenter.start_spinner(&format!("Speaking ({})...", voice));

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut failure = None;
    while controller.has_pending_utterance() {
        let step = tokio::select! {
            event = controller.next_event() => Step::Event(event),
            _ = &mut ctrl_c => Step::Interrupted,
        };

        match step {
            Step::Event(Some(EngineEvent::Failed { message, .. })) => failure = Some(message),
            Step::Event(Some(EngineEvent::Started(_))) => presenter.update_spinner(&format!(
                "Speaking ({})... press Ctrl-C to stop",
                voice
            )),
            Step::Event(Some(EngineEvent::Finished(_))) => {}
            Step::Event(None) => break,
            Step::Interrupted => {
                controller.stop().await;
                presenter.spinner_success("Stopped");
                return Ok(());
            }
        }
    }

    match failure {
        Some(message) => {
            presenter.spinner_fail("Speech failed");
            Err(message)
        }
        None => {
            presenter.spinner_success("Done");
            Ok(())
        }
    }
}

/// List voices, marking the one speech would use.
///
/// With `select`, the voice is first stored as the preference in `prefs`.
pub async fn handle_voices_command<E, S, P, W>(
    controller: &SpeechController<E, S, P>,
    select: Option<String>,
    prefs: &W,
    presenter: &Presenter,
) -> Result<(), String>
where
    E: SpeechEngine,
    S: AudioSession,
    P: ConfigStore,
    W: ConfigStore,
{
    let voices = controller.voices();
    if voices.is_empty() {
        return Err("No voices available. Is espeak-ng installed?".to_string());
    }

    if let Some(identifier) = select.as_deref() {
        if !voices.iter().any(|v| v.identifier == identifier) {
            return Err(format!("Unknown voice: {}", identifier));
        }
        prefs
            .set_voice_preference(identifier)
            .await
            .map_err(|e| e.to_string())?;
        presenter.success(&format!("Default voice set to {}", identifier));
    }

    let selected = controller.selected_voice_id().await;
    if let Some(notice) = select
        .as_deref()
        .and_then(|stored| override_notice(stored, selected.as_deref()))
    {
        presenter.warn(&notice);
    }

    for voice in &voices {
        presenter.voice(voice, selected.as_deref() == Some(voice.identifier.as_str()));
    }

    Ok(())
}

/// Warning for when an override hides the voice just stored
fn override_notice(stored: &str, effective: Option<&str>) -> Option<String> {
    match effective {
        Some(effective) if effective != stored => Some(format!(
            "{} is set, so speech keeps using {} instead of {}",
            VOICE_ENV, effective, stored
        )),
        _ => None,
    }
}

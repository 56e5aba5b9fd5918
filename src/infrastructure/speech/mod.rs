//! Speech engine infrastructure adapters

mod espeak;
// Only the tests use the shared helpers where the adapter is not built
#[cfg_attr(target_os = "linux", allow(dead_code))]
mod system;
mod voice_list;

pub use espeak::{words_per_minute, EspeakEngine};
#[cfg(not(target_os = "linux"))]
pub use system::SystemEngine;
pub use voice_list::{merge_voice_lists, parse_voice_list};

use tracing::warn;

use crate::application::ports::SpeechEngine;
use crate::domain::config::SpeechEngineKind;

/// Whether this build links a platform synthesizer
pub const SYSTEM_ENGINE_AVAILABLE: bool = cfg!(not(target_os = "linux"));

/// Resolve `auto` and unavailable choices to the engine that will run
pub fn resolve_engine(kind: SpeechEngineKind) -> SpeechEngineKind {
    match kind {
        SpeechEngineKind::Auto if SYSTEM_ENGINE_AVAILABLE => SpeechEngineKind::System,
        SpeechEngineKind::Auto => SpeechEngineKind::Espeak,
        SpeechEngineKind::System if !SYSTEM_ENGINE_AVAILABLE => {
            warn!("No platform synthesizer on this system, using espeak-ng");
            SpeechEngineKind::Espeak
        }
        other => other,
    }
}

/// Create the speech engine for the configured kind.
///
/// Falls back to espeak-ng (`engine_bin`) when the platform synthesizer
/// can't be reached.
pub fn create_speech_engine(kind: SpeechEngineKind, engine_bin: &str) -> Box<dyn SpeechEngine> {
    match resolve_engine(kind) {
        #[cfg(not(target_os = "linux"))]
        SpeechEngineKind::System => match SystemEngine::new() {
            Ok(engine) => Box::new(engine),
            Err(e) => {
                warn!(error = %e, "Platform synthesizer unavailable, using espeak-ng");
                Box::new(EspeakEngine::with_binary(engine_bin))
            }
        },
        _ => Box::new(EspeakEngine::with_binary(engine_bin)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SpeechError;

    #[test]
    fn explicit_espeak_is_kept() {
        assert_eq!(resolve_engine(SpeechEngineKind::Espeak), SpeechEngineKind::Espeak);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_resolves_to_espeak() {
        assert_eq!(resolve_engine(SpeechEngineKind::Auto), SpeechEngineKind::Espeak);
        assert_eq!(resolve_engine(SpeechEngineKind::System), SpeechEngineKind::Espeak);
    }

    #[cfg(not(target_os = "linux"))]
    #[test]
    fn auto_prefers_platform_synthesizer() {
        assert_eq!(resolve_engine(SpeechEngineKind::Auto), SpeechEngineKind::System);
    }

    #[tokio::test]
    async fn espeak_engine_uses_configured_binary() {
        let engine = create_speech_engine(SpeechEngineKind::Espeak, "chatdesk-no-such-speech-engine");
        let err = engine.voices().await.unwrap_err();
        assert!(matches!(err, SpeechError::EngineNotFound(ref bin) if bin == "chatdesk-no-such-speech-engine"));
    }
}

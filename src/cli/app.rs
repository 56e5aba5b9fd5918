//! Composition root shared by the subcommands

use std::env;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::application::ports::{AudioSession, Clipboard, ConfigStore, SpeechEngine};
use crate::application::{ClipboardService, SpeechController};
use crate::domain::config::{AppConfig, ClipboardConfig};
use crate::infrastructure::{
    create_audio_session, create_clipboard, create_speech_engine, LayeredConfigStore,
    XdgConfigStore,
};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the selected voice
pub const VOICE_ENV: &str = "CHATDESK_VOICE";

/// Config store seen by the commands: file plus runtime overrides
pub type AppConfigStore = LayeredConfigStore<XdgConfigStore>;

/// Speech controller wired to the concrete adapters
pub type AppSpeechController =
    SpeechController<Box<dyn SpeechEngine>, Box<dyn AudioSession>, AppConfigStore>;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "info,chatdesk=debug"
    } else {
        "warn,chatdesk=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (e.g. from tests) is not an error worth reporting
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Overrides read from the environment
pub fn env_overrides() -> AppConfig {
    AppConfig {
        voice_identifier: env::var(VOICE_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    }
}

/// Overrides from command-line flags
pub fn cli_overrides(voice: Option<String>, clipboard_backend: Option<String>) -> AppConfig {
    AppConfig {
        voice_identifier: voice,
        clipboard: clipboard_backend.map(|backend| ClipboardConfig {
            backend: Some(backend),
        }),
        ..Default::default()
    }
}

/// Build the config store: defaults < file < env < cli
pub fn config_store(cli: AppConfig) -> AppConfigStore {
    LayeredConfigStore::new(XdgConfigStore::new(), env_overrides().merge(cli))
}

/// Load the merged config, falling back to defaults plus overrides if the
/// file can't be read
pub async fn load_merged_config(store: &AppConfigStore) -> AppConfig {
    match store.load().await {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable config file");
            AppConfig::defaults().merge(store.overrides().clone())
        }
    }
}

/// Clipboard service for the configured backend
pub fn clipboard_service(config: &AppConfig) -> ClipboardService<Box<dyn Clipboard>> {
    ClipboardService::new(create_clipboard(config.clipboard_backend_or_default()))
}

/// Speech controller for the configured engine, with voices loaded
pub async fn speech_controller(config: &AppConfig, store: AppConfigStore) -> AppSpeechController {
    let engine = create_speech_engine(
        config.speech_engine_or_default(),
        config.engine_bin_or_default(),
    );
    let session = create_audio_session(config.audio_session_or_default());

    let mut controller = SpeechController::new(
        engine,
        session,
        store,
        config.preferred_language_or_default(),
    );
    controller.refresh_voices().await;
    controller
}

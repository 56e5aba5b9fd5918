//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{ClipboardBackend, ClipboardConfig, SpeechConfig, SpeechEngineKind};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "voice_identifier" => config.voice_identifier = Some(value.to_string()),
        "speech.engine" => {
            config.speech.get_or_insert_with(SpeechConfig::default).engine =
                Some(value.to_lowercase())
        }
        "speech.preferred_language" => {
            config.speech.get_or_insert_with(SpeechConfig::default).preferred_language =
                Some(value.to_string())
        }
        "speech.engine_bin" => {
            config.speech.get_or_insert_with(SpeechConfig::default).engine_bin =
                Some(value.to_string())
        }
        "speech.audio_session" => {
            config.speech.get_or_insert_with(SpeechConfig::default).audio_session =
                Some(parse_bool(key, value)?)
        }
        "clipboard.backend" => {
            config.clipboard.get_or_insert_with(ClipboardConfig::default).backend =
                Some(value.to_lowercase())
        }
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    let speech = config.speech.as_ref();

    let value = match key {
        "voice_identifier" => config.voice_identifier.clone(),
        "speech.engine" => speech.and_then(|s| s.engine.clone()),
        "speech.preferred_language" => speech.and_then(|s| s.preferred_language.clone()),
        "speech.engine_bin" => speech.and_then(|s| s.engine_bin.clone()),
        "speech.audio_session" => speech.and_then(|s| s.audio_session).map(|b| b.to_string()),
        "clipboard.backend" => config.clipboard.as_ref().and_then(|c| c.backend.clone()),
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;
    let speech = config.speech.as_ref();

    presenter.key_value(
        "voice_identifier",
        config.voice_identifier.as_deref().unwrap_or(NOT_SET),
    );
    presenter.key_value(
        "speech.engine",
        speech.and_then(|s| s.engine.as_deref()).unwrap_or(NOT_SET),
    );
    presenter.key_value(
        "speech.preferred_language",
        speech
            .and_then(|s| s.preferred_language.as_deref())
            .unwrap_or(NOT_SET),
    );
    presenter.key_value(
        "speech.engine_bin",
        speech.and_then(|s| s.engine_bin.as_deref()).unwrap_or(NOT_SET),
    );
    presenter.key_value(
        "speech.audio_session",
        &speech
            .and_then(|s| s.audio_session)
            .map(|b| b.to_string())
            .unwrap_or_else(|| NOT_SET.to_string()),
    );
    presenter.key_value(
        "clipboard.backend",
        config
            .clipboard
            .as_ref()
            .and_then(|c| c.backend.as_deref())
            .unwrap_or(NOT_SET),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "voice_identifier" | "speech.preferred_language" | "speech.engine_bin" => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must not be empty".to_string(),
                });
            }
        }
        "speech.audio_session" => {
            parse_bool(key, value)?;
        }
        "speech.engine" => {
            value
                .parse::<SpeechEngineKind>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        "clipboard.backend" => {
            value
                .parse::<ClipboardBackend>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        _ => {}
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be 'true' or 'false'".to_string(),
        }),
    }
}

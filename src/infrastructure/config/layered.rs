//! Config store with in-memory overrides
//!
//! Reads merge `defaults < stored file < overrides`; writes go to the
//! underlying store untouched, so overrides from the environment or the
//! command line never get persisted.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Wraps a store and layers runtime overrides on top of it
pub struct LayeredConfigStore<S: ConfigStore> {
    inner: S,
    overrides: AppConfig,
}

impl<S: ConfigStore> LayeredConfigStore<S> {
    /// Create a layered store
    pub fn new(inner: S, overrides: AppConfig) -> Self {
        Self { inner, overrides }
    }

    /// The runtime overrides
    pub fn overrides(&self) -> &AppConfig {
        &self.overrides
    }
}

#[async_trait]
impl<S: ConfigStore> ConfigStore for LayeredConfigStore<S> {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        let stored = self.inner.load().await?;
        Ok(AppConfig::defaults()
            .merge(stored)
            .merge(self.overrides.clone()))
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.inner.save(config).await
    }

    fn path(&self) -> PathBuf {
        self.inner.path()
    }

    fn exists(&self) -> bool {
        self.inner.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        self.inner.init().await
    }

    async fn set_voice_preference(&self, identifier: &str) -> Result<(), ConfigError> {
        self.inner.set_voice_preference(identifier).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::XdgConfigStore;

    #[tokio::test]
    async fn overrides_win_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = XdgConfigStore::with_path(dir.path().join("config.toml"));
        file.set_voice_preference("en-us").await.unwrap();

        let store = LayeredConfigStore::new(
            file,
            AppConfig {
                voice_identifier: Some("cmn".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(store.voice_preference().await.unwrap(), Some("cmn".to_string()));
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = LayeredConfigStore::new(
            XdgConfigStore::with_path(dir.path().join("config.toml")),
            AppConfig::empty(),
        );

        let config = store.load().await.unwrap();
        assert_eq!(config.preferred_language_or_default(), "zh");
        assert!(config.voice_identifier.is_none());
    }

    #[tokio::test]
    async fn preference_writes_skip_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let store = LayeredConfigStore::new(
            XdgConfigStore::with_path(&path),
            AppConfig {
                speech: Some(crate::domain::config::SpeechConfig {
                    engine_bin: Some("/opt/espeak".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );

        store.set_voice_preference("fr-fr").await.unwrap();

        let stored = XdgConfigStore::with_path(&path).load().await.unwrap();
        assert_eq!(stored.voice_identifier, Some("fr-fr".to_string()));
        assert!(stored.speech.is_none());
    }
}

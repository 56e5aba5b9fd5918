//! Configuration and preference storage port

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage.
///
/// Also serves as the persisted preference store: the selected voice lives
/// under `voice_identifier`.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage.
    ///
    /// # Returns
    /// The loaded config (may have None fields if file doesn't exist)
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Save configuration to storage.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;

    /// Check if configuration file exists.
    fn exists(&self) -> bool;

    /// Initialize configuration file with defaults.
    /// Fails if file already exists.
    async fn init(&self) -> Result<(), ConfigError>;

    /// Read the persisted voice preference.
    async fn voice_preference(&self) -> Result<Option<String>, ConfigError> {
        Ok(self.load().await?.voice_identifier)
    }

    /// Persist the voice preference, keeping every other setting.
    async fn set_voice_preference(&self, identifier: &str) -> Result<(), ConfigError> {
        let mut config = self.load().await?;
        config.voice_identifier = Some(identifier.to_string());
        self.save(&config).await
    }
}

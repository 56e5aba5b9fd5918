//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::clipboard::ClipboardImage;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("{0} not found. Please install wl-clipboard.")]
    ToolNotFound(String),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to copy to clipboard: {0}")]
    CopyFailed(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Invalid clipboard image: {0}")]
    InvalidImage(String),
}

/// Port for clipboard operations
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replace the system clipboard content with text.
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Read text from the clipboard.
    ///
    /// # Returns
    /// `Ok(None)` when the clipboard is empty or holds non-text content
    async fn get_text(&self) -> Result<Option<String>, ClipboardError>;

    /// Read an image from the clipboard.
    ///
    /// # Returns
    /// `Ok(None)` when the clipboard holds no image
    async fn get_image(&self) -> Result<Option<ClipboardImage>, ClipboardError>;

    /// Whether copied content disappears once this process exits.
    fn releases_on_exit(&self) -> bool {
        false
    }

    /// Put `text` on the clipboard and keep serving it until another
    /// application takes the clipboard over.
    ///
    /// Adapters whose content outlives the process return right away.
    async fn hold_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().set_text(text).await
    }

    async fn get_text(&self) -> Result<Option<String>, ClipboardError> {
        self.as_ref().get_text().await
    }

    async fn get_image(&self) -> Result<Option<ClipboardImage>, ClipboardError> {
        self.as_ref().get_image().await
    }

    fn releases_on_exit(&self) -> bool {
        self.as_ref().releases_on_exit()
    }

    async fn hold_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().hold_text(text).await
    }
}

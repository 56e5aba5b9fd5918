//! In-process clipboard adapter
//!
//! Keeps clipboard content in memory. Used for headless runs and tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};
use crate::domain::clipboard::ClipboardImage;

#[derive(Debug, Clone, Default)]
enum Content {
    #[default]
    Empty,
    Text(String),
    Image(ClipboardImage),
}

/// Process-local clipboard
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: Mutex<Content>,
}

impl MemoryClipboard {
    /// Create an empty in-memory clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content with an image
    pub fn set_image(&self, image: ClipboardImage) -> Result<(), ClipboardError> {
        *self.lock()? = Content::Image(image);
        Ok(())
    }

    /// Clear the clipboard
    pub fn clear(&self) -> Result<(), ClipboardError> {
        *self.lock()? = Content::Empty;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Content>, ClipboardError> {
        self.content
            .lock()
            .map_err(|_| ClipboardError::ClipboardUnavailable("clipboard lock poisoned".to_string()))
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.lock()? = Content::Text(text.to_string());
        Ok(())
    }

    async fn get_text(&self) -> Result<Option<String>, ClipboardError> {
        match &*self.lock()? {
            Content::Text(text) => Ok(Some(text.clone())),
            _ => Ok(None),
        }
    }

    async fn get_image(&self) -> Result<Option<ClipboardImage>, ClipboardError> {
        match &*self.lock()? {
            Content::Image(image) => Ok(Some(image.clone())),
            _ => Ok(None),
        }
    }
}

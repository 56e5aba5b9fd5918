//! Clipboard service
//!
//! Best-effort clipboard access: failures are logged and never reach the
//! caller, except through the `try_` variant used by the CLI.

use tracing::{debug, warn};

use crate::domain::clipboard::ClipboardImage;

use super::ports::{Clipboard, ClipboardError};

/// Fire-and-forget wrapper around a clipboard adapter
pub struct ClipboardService<C: Clipboard> {
    clipboard: C,
}

impl<C: Clipboard> ClipboardService<C> {
    /// Create a new clipboard service
    pub fn new(clipboard: C) -> Self {
        Self { clipboard }
    }

    /// Replace the clipboard content with `message`.
    pub async fn set_text(&self, message: &str) {
        let _ = self.try_set_text(message).await;
    }

    /// Replace the clipboard content, reporting whether it worked
    pub async fn try_set_text(&self, message: &str) -> Result<(), ClipboardError> {
        self.clipboard.set_text(message).await.map_err(|e| {
            warn!(error = %e, "Clipboard write failed");
            e
        })
    }

    /// Whether copied text is lost when this process exits
    pub fn releases_on_exit(&self) -> bool {
        self.clipboard.releases_on_exit()
    }

    /// Keep serving `message` until another application copies something
    pub async fn hold_text(&self, message: &str) -> Result<(), ClipboardError> {
        self.clipboard.hold_text(message).await
    }

    /// Current clipboard text, or `None` if the clipboard holds no text.
    pub async fn get_text(&self) -> Option<String> {
        match self.clipboard.get_text().await {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, "Clipboard text unavailable");
                None
            }
        }
    }

    /// Current clipboard image, or `None` if the clipboard holds no image.
    pub async fn get_image(&self) -> Option<ClipboardImage> {
        match self.clipboard.get_image().await {
            Ok(image) => image,
            Err(e) => {
                debug!(error = %e, "Clipboard image unavailable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockClipboard {
        text: Mutex<Option<String>>,
    }

    #[async_trait]
    impl Clipboard for MockClipboard {
        async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
            *self.text.lock().unwrap() = Some(text.to_string());
            Ok(())
        }

        async fn get_text(&self) -> Result<Option<String>, ClipboardError> {
            Ok(self.text.lock().unwrap().clone())
        }

        async fn get_image(&self) -> Result<Option<ClipboardImage>, ClipboardError> {
            Ok(None)
        }
    }

    struct BrokenClipboard;

    #[async_trait]
    impl Clipboard for BrokenClipboard {
        async fn set_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::ClipboardUnavailable("no display".to_string()))
        }

        async fn get_text(&self) -> Result<Option<String>, ClipboardError> {
            Err(ClipboardError::ReadFailed("no display".to_string()))
        }

        async fn get_image(&self) -> Result<Option<ClipboardImage>, ClipboardError> {
            Err(ClipboardError::ReadFailed("no display".to_string()))
        }
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let service = ClipboardService::new(MockClipboard::default());
        service.set_text("hello 世界").await;
        assert_eq!(service.get_text().await, Some("hello 世界".to_string()));
    }

    #[tokio::test]
    async fn empty_clipboard_reads_none() {
        let service = ClipboardService::new(MockClipboard::default());
        assert_eq!(service.get_text().await, None);
        assert_eq!(service.get_image().await, None);
    }

    #[tokio::test]
    async fn try_set_text_reports_failure() {
        let service = ClipboardService::new(BrokenClipboard);
        let err = service.try_set_text("lost").await.unwrap_err();
        assert!(matches!(err, ClipboardError::ClipboardUnavailable(_)));

        let service = ClipboardService::new(MockClipboard::default());
        assert!(service.try_set_text("kept").await.is_ok());
        assert!(!service.releases_on_exit());
    }

    #[tokio::test]
    async fn errors_are_swallowed() {
        let service = ClipboardService::new(BrokenClipboard);
        service.set_text("ignored").await;
        assert_eq!(service.get_text().await, None);
        assert_eq!(service.get_image().await, None);
    }
}

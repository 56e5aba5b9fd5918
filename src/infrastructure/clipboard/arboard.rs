//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland). On Linux the copied
//! content is served by this process and vanishes when it exits, unless a
//! clipboard manager takes it over.

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};
use crate::domain::clipboard::ClipboardImage;

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn open() -> Result<arboard::Clipboard, ClipboardError> {
    arboard::Clipboard::new().map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))
}

/// Set `text` and block until another application owns the clipboard
#[cfg(target_os = "linux")]
fn serve_until_replaced(text: String) -> Result<(), ClipboardError> {
    use arboard::SetExtLinux;

    open()?
        .set()
        .wait()
        .text(text)
        .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
}

#[cfg(not(target_os = "linux"))]
fn serve_until_replaced(_text: String) -> Result<(), ClipboardError> {
    Ok(())
}

/// Run a blocking arboard operation off the async runtime
async fn run_blocking<T, F>(f: F) -> Result<T, ClipboardError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ClipboardError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();

        run_blocking(move || {
            open()?
                .set_text(text)
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
        })
        .await
    }

    fn releases_on_exit(&self) -> bool {
        cfg!(target_os = "linux")
    }

    async fn hold_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        run_blocking(move || serve_until_replaced(text)).await
    }

    async fn get_text(&self) -> Result<Option<String>, ClipboardError> {
        run_blocking(|| match open()?.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
        })
        .await
    }

    async fn get_image(&self) -> Result<Option<ClipboardImage>, ClipboardError> {
        run_blocking(|| match open()?.get_image() {
            Ok(data) => {
                let width = u32::try_from(data.width)
                    .map_err(|e| ClipboardError::InvalidImage(e.to_string()))?;
                let height = u32::try_from(data.height)
                    .map_err(|e| ClipboardError::InvalidImage(e.to_string()))?;
                ClipboardImage::from_rgba(width, height, data.bytes.into_owned())
                    .map(Some)
                    .map_err(|e| ClipboardError::InvalidImage(e.to_string()))
            }
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
        })
        .await
    }
}

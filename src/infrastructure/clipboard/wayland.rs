//! Wayland clipboard adapter using wl-copy / wl-paste

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{Clipboard, ClipboardError};
use crate::domain::clipboard::ClipboardImage;

use super::png::decode_png;

const WL_COPY: &str = "wl-copy";
const WL_PASTE: &str = "wl-paste";

/// wl-paste shorthand matching any textual offer (`text/plain`,
/// `UTF8_STRING`, ...)
const TEXT_TYPE: &str = "text";
const PNG_TYPE: &str = "image/png";

/// Wayland clipboard adapter using wl-clipboard
pub struct WaylandClipboard {
    copy_bin: String,
    paste_bin: String,
}

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self::with_tools(WL_COPY, WL_PASTE)
    }

    /// Use specific wl-copy / wl-paste executables
    pub fn with_tools(copy_bin: impl Into<String>, paste_bin: impl Into<String>) -> Self {
        Self {
            copy_bin: copy_bin.into(),
            paste_bin: paste_bin.into(),
        }
    }

    /// Run wl-paste for a MIME type.
    ///
    /// wl-paste exits non-zero when the clipboard is empty or has no content
    /// of the requested type; that maps to `None`.
    async fn paste(&self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        let output = Command::new(&self.paste_bin)
            .args(["--no-newline", "--type", mime_type])
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::ToolNotFound(self.paste_bin.clone())
                } else {
                    ClipboardError::ReadFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            return Ok(None);
        }

        Ok(Some(output.stdout))
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for WaylandClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.copy_bin)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ClipboardError::ToolNotFound(self.copy_bin.clone())
                } else {
                    ClipboardError::CopyFailed(e.to_string())
                }
            })?;

        // Write text to stdin, then close it so wl-copy takes ownership
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::CopyFailed(format!(
                "{} exited with status: {}",
                self.copy_bin, status
            )));
        }

        Ok(())
    }

    async fn get_text(&self) -> Result<Option<String>, ClipboardError> {
        let Some(bytes) = self.paste(TEXT_TYPE).await? else {
            return Ok(None);
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))
    }

    async fn get_image(&self) -> Result<Option<ClipboardImage>, ClipboardError> {
        match self.paste(PNG_TYPE).await? {
            Some(bytes) if !bytes.is_empty() => decode_png(&bytes).map(Some),
            _ => Ok(None),
        }
    }
}

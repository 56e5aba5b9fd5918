//! Clipboard command handler

use crate::application::ports::Clipboard;
use crate::application::ClipboardService;
use crate::infrastructure::clipboard::encode_png;

use super::args::ClipAction;
use super::presenter::Presenter;

/// Handle clip subcommand
pub async fn handle_clip_command<C: Clipboard>(
    action: ClipAction,
    service: &ClipboardService<C>,
    presenter: &Presenter,
) -> Result<(), String> {
    match action {
        ClipAction::Copy { text } => {
            service
                .try_set_text(&text)
                .await
                .map_err(|e| e.to_string())?;
            presenter.success("Copied to clipboard");

            if service.releases_on_exit() {
                presenter.info(
                    "Serving the text until another application copies; Ctrl-C drops it",
                );
                tokio::select! {
                    held = service.hold_text(&text) => held.map_err(|e| e.to_string())?,
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Ok(())
        }
        ClipAction::Paste => {
            let text = service
                .get_text()
                .await
                .ok_or_else(|| "Clipboard holds no text".to_string())?;
            presenter.output(&text);
            Ok(())
        }
        ClipAction::Image { out } => {
            let image = service
                .get_image()
                .await
                .ok_or_else(|| "Clipboard holds no image".to_string())?;

            match out {
                Some(path) => {
                    let png = encode_png(&image).map_err(|e| e.to_string())?;
                    tokio::fs::write(&path, png)
                        .await
                        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
                    presenter.success(&format!(
                        "Saved {} image to {}",
                        image.dimensions(),
                        path.display()
                    ));
                }
                None => presenter.output(&image.dimensions()),
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ClipboardError;
    use crate::domain::clipboard::ClipboardImage;
    use crate::infrastructure::MemoryClipboard;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    struct RefusingClipboard;

    #[async_trait]
    impl Clipboard for RefusingClipboard {
        async fn set_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::ClipboardUnavailable("no display".to_string()))
        }

        async fn get_text(&self) -> Result<Option<String>, ClipboardError> {
            Ok(None)
        }

        async fn get_image(&self) -> Result<Option<ClipboardImage>, ClipboardError> {
            Ok(None)
        }
    }

    /// Clipboard whose content goes away with the process
    struct ProcessOwnedClipboard {
        inner: MemoryClipboard,
        held: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Clipboard for ProcessOwnedClipboard {
        async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.inner.set_text(text).await
        }

        async fn get_text(&self) -> Result<Option<String>, ClipboardError> {
            self.inner.get_text().await
        }

        async fn get_image(&self) -> Result<Option<ClipboardImage>, ClipboardError> {
            self.inner.get_image().await
        }

        fn releases_on_exit(&self) -> bool {
            true
        }

        async fn hold_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.held.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn copy(text: &str) -> ClipAction {
        ClipAction::Copy {
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn copy_reports_clipboard_failure() {
        let service = ClipboardService::new(RefusingClipboard);
        let err = handle_clip_command(copy("hello"), &service, &Presenter::new())
            .await
            .unwrap_err();
        assert!(err.contains("no display"));
    }

    #[tokio::test]
    async fn copy_holds_process_owned_clipboard() {
        let held = Arc::new(Mutex::new(Vec::new()));
        let service = ClipboardService::new(ProcessOwnedClipboard {
            inner: MemoryClipboard::new(),
            held: Arc::clone(&held),
        });

        handle_clip_command(copy("kept alive"), &service, &Presenter::new())
            .await
            .unwrap();

        assert_eq!(service.get_text().await, Some("kept alive".to_string()));
        assert_eq!(*held.lock().unwrap(), vec!["kept alive".to_string()]);
    }

    #[tokio::test]
    async fn paste_on_empty_clipboard_fails() {
        let service = ClipboardService::new(MemoryClipboard::new());
        let err = handle_clip_command(ClipAction::Paste, &service, &Presenter::new())
            .await
            .unwrap_err();
        assert!(err.contains("no text"));
    }

    #[tokio::test]
    async fn copy_then_paste_succeeds() {
        let service = ClipboardService::new(MemoryClipboard::new());
        let presenter = Presenter::new();

        handle_clip_command(
            ClipAction::Copy {
                text: "hello".to_string(),
            },
            &service,
            &presenter,
        )
        .await
        .unwrap();

        assert!(handle_clip_command(ClipAction::Paste, &service, &presenter)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn image_is_saved_as_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clip.png");

        let clipboard = MemoryClipboard::new();
        clipboard
            .set_image(ClipboardImage::from_rgba(1, 1, vec![10, 20, 30, 255]).unwrap())
            .unwrap();
        let service = ClipboardService::new(clipboard);

        handle_clip_command(
            ClipAction::Image {
                out: Some(path.clone()),
            },
            &service,
            &Presenter::new(),
        )
        .await
        .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
}

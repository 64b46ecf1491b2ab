use anyhow::{Context, Result};

/// Destination for copied snippets. The app writes through a trait so tests
/// can record what would have landed on the system clipboard.
pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// The real system clipboard via `arboard`. A fresh handle is opened per
/// write; on some platforms holding one across the app's lifetime keeps a
/// display connection open.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().context("Failed to access system clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to copy text to clipboard")?;
        Ok(())
    }
}

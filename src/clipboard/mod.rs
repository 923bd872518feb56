use anyhow::{Context, Result};
use arboard::Clipboard;

/// Clipboard sink, abstracted so tests can capture writes without touching
/// the system clipboard
trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

#[cfg(test)]
fn copy_with_sink(link: &str, sink: &mut dyn ClipboardSink) -> Result<()> {
    if link.is_empty() {
        anyhow::bail!("Nothing to copy");
    }
    sink.set_text(link)
}

/// Copy a shareable listing link to the system clipboard.
///
/// # Errors
/// Returns an error if the link is empty, or if the clipboard is unavailable
/// (headless environments, denied access).
pub fn copy_share_link(link: &str) -> Result<()> {
    if link.is_empty() {
        anyhow::bail!("Nothing to copy");
    }
    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(link)
}

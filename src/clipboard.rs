use crate::error::{QuoteError, Result};
use arboard::Clipboard;
use tracing::{debug, info};

/// Handler run once the program is no longer the clipboard owner.
pub type OwnershipLost = Box<dyn FnOnce()>;

/// Destination for the selected quote.
pub trait ClipboardWriter {
    /// Makes `text` the sole clipboard content. `on_lost` fires if the writer
    /// observes another program taking ownership before it returns.
    fn write_text(&mut self, text: &str, on_lost: Option<OwnershipLost>) -> Result<()>;
}

/// System clipboard through arboard.
///
/// Without `hold`, the write is fire-and-forget. On X11 and Wayland the
/// contents then outlive the process only if a clipboard manager takes them
/// over. With `hold`, Linux and the BSDs keep serving paste requests until
/// another program replaces the contents.
pub struct ArboardClipboard {
    clipboard: Clipboard,
    hold: bool,
}

impl ArboardClipboard {
    pub fn new(hold: bool) -> Result<Self> {
        let clipboard = Clipboard::new().map_err(|e| QuoteError::Clipboard(e.to_string()))?;
        Ok(Self { clipboard, hold })
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str, on_lost: Option<OwnershipLost>) -> Result<()> {
        if self.hold {
            return hold_text(&mut self.clipboard, text, on_lost);
        }

        self.clipboard
            .set_text(text)
            .map_err(|e| QuoteError::Clipboard(e.to_string()))
    }
}

#[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
fn hold_text(clipboard: &mut Clipboard, text: &str, on_lost: Option<OwnershipLost>) -> Result<()> {
    use arboard::SetExtLinux;

    info!("Holding clipboard until its contents are replaced");
    clipboard
        .set()
        .wait()
        .text(text.to_owned())
        .map_err(|e| QuoteError::Clipboard(e.to_string()))?;

    debug!("Clipboard ownership lost");
    if let Some(handler) = on_lost {
        handler();
    }
    Ok(())
}

#[cfg(not(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten")))))]
fn hold_text(clipboard: &mut Clipboard, text: &str, _on_lost: Option<OwnershipLost>) -> Result<()> {
    // Clipboard contents already outlive the process here.
    info!("Hold requested but not needed on this platform");
    clipboard
        .set_text(text)
        .map_err(|e| QuoteError::Clipboard(e.to_string()))?;
    debug!("Clipboard set");
    Ok(())
}

/// Wraps a quote in one double-quote character on each side.
pub fn wrap_quote(quote: &str) -> String {
    format!("\"{quote}\"")
}

/// Publishes `quote` to the clipboard, wrapped in double quotes.
pub fn copy_quote<W: ClipboardWriter + ?Sized>(
    writer: &mut W,
    quote: &str,
    on_lost: Option<OwnershipLost>,
) -> Result<()> {
    let text = wrap_quote(quote);
    debug!("Copying {} bytes to clipboard", text.len());
    writer.write_text(&text, on_lost)
}

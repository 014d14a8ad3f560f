//! Clipboard bridge
//!
//! The copy action is fire-and-forget: the indicator is cosmetic and a
//! failed write must never take the dashboard down.

/// Best-effort write of `text` to the platform clipboard.
pub fn copy_text(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text.to_owned()) {
                tracing::debug!("clipboard write failed: {}", e);
            }
        }
        Err(e) => {
            tracing::debug!("clipboard unavailable: {}", e);
        }
    }
}

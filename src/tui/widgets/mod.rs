//! Dashboard widgets
//!
//! Each widget is a stateless renderer: it borrows the state it needs and
//! writes into the frame buffer. Logic stays in the domain layer.

mod agent_rail;
mod console;
mod gauge;
mod header;
mod status_bar;

pub use agent_rail::AgentRail;
pub use console::ConsoleOverlay;
pub use gauge::Gauge;
pub use header::Header;
pub use status_bar::StatusBar;

/// Common widget utilities
pub mod utils {
    use unicode_width::UnicodeWidthChar;
    use unicode_width::UnicodeWidthStr;

    /// Truncate to a display width, appending an ellipsis when cut.
    pub fn truncate(s: &str, max_width: usize) -> String {
        if UnicodeWidthStr::width(s) <= max_width {
            return s.to_string();
        }
        let budget = max_width.saturating_sub(1);
        let mut out = String::new();
        let mut used = 0;
        for ch in s.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + w > budget {
                break;
            }
            used += w;
            out.push(ch);
        }
        out.push('…');
        out
    }
}

//! Neon Theme - Visual Design System
//!
//! Cyan/violet-on-obsidian palette for the dashboard chrome.

use ratatui::style::{Color, Modifier, Style};

use crate::fixtures::optimizations::Impact;
use crate::fixtures::qa::QaStatus;
use crate::fixtures::trace::LogLevel;

/// Neon color palette
#[derive(Debug, Clone)]
pub struct NeonTheme {
    // Primary palette
    pub neon_cyan: Color,
    pub neon_violet: Color,
    pub obsidian: Color,
    pub foreground: Color,
    pub muted: Color,

    // Status colors
    pub emerald: Color,
    pub amber: Color,
    pub coral: Color,

    // Dimmed versions
    pub dim_cyan: Color,
    pub dim_violet: Color,
}

impl Default for NeonTheme {
    fn default() -> Self {
        Self {
            neon_cyan: Color::Rgb(0, 242, 255),     // #00F2FF
            neon_violet: Color::Rgb(149, 0, 255),   // #9500FF
            obsidian: Color::Rgb(13, 17, 23),       // #0D1117
            foreground: Color::Rgb(230, 237, 243),  // #E6EDF3
            muted: Color::Rgb(125, 133, 144),       // #7D8590

            emerald: Color::Rgb(52, 211, 153),      // #34D399
            amber: Color::Rgb(251, 191, 36),        // #FBBF24
            coral: Color::Rgb(248, 113, 113),       // #F87171

            dim_cyan: Color::Rgb(0, 121, 128),
            dim_violet: Color::Rgb(75, 0, 128),
        }
    }
}

impl NeonTheme {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Styles
    // ─────────────────────────────────────────────────────────────────────

    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.neon_cyan)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent style (violet)
    pub fn accent(&self) -> Style {
        Style::default().fg(self.neon_violet)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.neon_cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.emerald)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.amber)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.coral)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for panels (focused panels glow cyan)
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.neon_cyan)
        } else {
            Style::default().fg(self.muted)
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fixture-keyed styles
    // ─────────────────────────────────────────────────────────────────────

    pub fn level_style(&self, level: LogLevel) -> Style {
        match level {
            LogLevel::Info => Style::default().fg(self.neon_cyan),
            LogLevel::Warn => Style::default().fg(self.amber),
            LogLevel::Debug => Style::default().fg(self.muted),
            LogLevel::Success => Style::default().fg(self.emerald),
        }
    }

    pub fn qa_status_style(&self, status: QaStatus) -> Style {
        match status {
            QaStatus::Passed => Style::default().fg(self.emerald),
            QaStatus::Warning => Style::default().fg(self.amber),
            QaStatus::Failed => Style::default().fg(self.coral),
        }
    }

    pub fn impact_style(&self, impact: Impact) -> Style {
        match impact {
            Impact::High => Style::default().fg(self.emerald),
            Impact::Medium => Style::default().fg(self.amber),
            Impact::Low => Style::default().fg(self.muted),
        }
    }

    /// Pulse between the bright and dim primary every few frames. Drives the
    /// active node glow and the console cursor.
    pub fn pulse_color(&self, frame: u64) -> Color {
        if (frame / 8) % 2 == 0 {
            self.neon_cyan
        } else {
            self.dim_cyan
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Icons and Symbols
// ─────────────────────────────────────────────────────────────────────────────

/// UI icons used throughout the dashboard
pub mod icons {
    pub const LOGO: &str = "◆";
    pub const CONSOLE: &str = "◈";
    pub const NODE_ACTIVE: &str = "⬢";
    pub const NODE_IDLE: &str = "⬡";
    pub const PARTICLE: &str = "●";
    pub const CONNECTOR: &str = "│";
    pub const CHEVRON_CLOSED: &str = "▸";
    pub const CHEVRON_OPEN: &str = "▾";
    pub const FILE: &str = "▤";
    pub const COPY: &str = "⧉";
    pub const CLOCK: &str = "◷";
    pub const ARROW_DOWN: &str = "↓";
    pub const ARROW_UP: &str = "↑";
    pub const CURSOR: &str = "▍";
    pub const DOT: &str = "·";

    /// Spinner frames for the status-bar activity indicator
    pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let theme = NeonTheme::new();
        assert_eq!(theme.neon_cyan, Color::Rgb(0, 242, 255));
        assert_eq!(theme.neon_violet, Color::Rgb(149, 0, 255));
    }

    #[test]
    fn test_pulse_alternates() {
        let theme = NeonTheme::new();
        assert_eq!(theme.pulse_color(0), theme.neon_cyan);
        assert_eq!(theme.pulse_color(8), theme.dim_cyan);
        assert_eq!(theme.pulse_color(16), theme.neon_cyan);
    }

    #[test]
    fn test_level_styles_differ() {
        let theme = NeonTheme::new();
        assert_ne!(
            theme.level_style(LogLevel::Warn).fg,
            theme.level_style(LogLevel::Success).fg
        );
    }

    #[test]
    fn test_border_style_focused_vs_unfocused() {
        let theme = NeonTheme::new();
        assert_ne!(theme.border_style(true).fg, theme.border_style(false).fg);
    }
}

//! Status bar widget
//!
//! Bottom chrome with the fabricated system readings:
//!
//! ```text
//! ● System Status: All Agents Active │ ⠋ Optimizing...   CPU: 42% │ Memory: 2.4GB │ ● Connected
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::{icons, NeonTheme};

const SYSTEM_STATUS: &str = "All Agents Active";
const ACTIVITY: &str = "Optimizing...";
const CPU: &str = "CPU: 42%";
const MEMORY: &str = "Memory: 2.4GB";
const NETWORK: &str = "Connected";

pub struct StatusBar<'a> {
    frame: u64,
    theme: &'a NeonTheme,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: &'a NeonTheme) -> Self {
        Self { frame: 0, theme }
    }

    pub fn with_frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    fn spinner(&self) -> &'static str {
        let idx = (self.frame / 3) as usize % icons::SPINNER_FRAMES.len();
        icons::SPINNER_FRAMES[idx]
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::styled(" ● ", self.theme.success()),
            Span::styled("System Status: ", self.theme.text()),
            Span::styled(SYSTEM_STATUS, self.theme.highlight()),
            Span::styled(" │ ", self.theme.dimmed()),
            Span::styled(self.spinner(), self.theme.accent()),
            Span::styled(" ", Style::default()),
            Span::styled(ACTIVITY, self.theme.dimmed()),
        ]);

        let right_text = format!("{} │ {} │ ● {} ", CPU, MEMORY, NETWORK);
        let right = Line::from(vec![Span::styled(right_text.as_str(), self.theme.dimmed())]);

        Paragraph::new(left).render(area, buf);

        let right_width = UnicodeWidthStr::width(right_text.as_str()) as u16;
        if area.width > right_width {
            let right_area = Rect::new(
                area.x + area.width - right_width,
                area.y,
                right_width,
                1,
            );
            Paragraph::new(right).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(bar: StatusBar, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buffer = Buffer::empty(area);
        bar.render(area, &mut buffer);
        let mut out = String::new();
        for x in 0..width {
            out.push_str(buffer[(x, 0)].symbol());
        }
        out
    }

    #[test]
    fn test_status_bar_readings() {
        let theme = NeonTheme::new();
        let out = render_to_string(StatusBar::new(&theme), 100);
        assert!(out.contains("All Agents Active"));
        assert!(out.contains("CPU: 42%"));
        assert!(out.contains("Memory: 2.4GB"));
        assert!(out.contains("Connected"));
    }

    #[test]
    fn test_spinner_advances_with_frame() {
        let theme = NeonTheme::new();
        let a = StatusBar::new(&theme).with_frame(0).spinner();
        let b = StatusBar::new(&theme).with_frame(3).spinner();
        assert_ne!(a, b);
    }
}

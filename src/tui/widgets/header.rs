//! Header widget
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ ◆ DevMind AI │ MULTI-AGENT SYSTEM          ◈ console │ ● │ ⚙        │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::theme::{icons, NeonTheme};

pub struct Header<'a> {
    console_open: bool,
    theme: &'a NeonTheme,
}

impl<'a> Header<'a> {
    pub fn new(console_open: bool, theme: &'a NeonTheme) -> Self {
        Self {
            console_open,
            theme,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let console_style = if self.console_open {
            self.theme.highlight()
        } else {
            self.theme.dimmed()
        };

        let line = Line::from(vec![
            Span::styled(format!(" {} ", icons::LOGO), self.theme.header()),
            Span::styled(
                "DevMind AI",
                Style::default()
                    .fg(self.theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", self.theme.dimmed()),
            Span::styled("MULTI-AGENT SYSTEM", self.theme.dimmed()),
            Span::styled("   ", Style::default()),
            Span::styled(
                format!("{} console", icons::CONSOLE),
                console_style,
            ),
            Span::styled("  ● ", self.theme.accent()),
            Span::styled(" ⚙", self.theme.dimmed()),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(header: Header, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        header.render(area, &mut buffer);
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_header_branding() {
        let theme = NeonTheme::new();
        let out = render_to_string(Header::new(true, &theme), 70, 3);
        assert!(out.contains("DevMind AI"));
        assert!(out.contains("MULTI-AGENT SYSTEM"));
        assert!(out.contains("console"));
    }
}

//! Reasoning console overlay
//!
//! Floating panel anchored above the status bar. Three observable states:
//! hidden entirely, minimized to its title row, or expanded over the log
//! body. The log body shows whatever the feed has revealed so far, plus the
//! idle line with a blinking cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::fixtures::trace::{LogEntry, AWAITING_MESSAGE, LOGS};
use crate::tui::state::ConsoleVisibility;
use crate::tui::theme::{icons, NeonTheme};

/// Preferred overlay width, clamped to the frame.
const MAX_WIDTH: u16 = 76;
/// Rows when expanded (borders included).
const EXPANDED_HEIGHT: u16 = 16;
/// Rows when minimized: just the bordered title.
const MINIMIZED_HEIGHT: u16 = 3;

pub struct ConsoleOverlay<'a> {
    visibility: ConsoleVisibility,
    logs: &'a [&'static LogEntry],
    frame: u64,
    theme: &'a NeonTheme,
}

impl<'a> ConsoleOverlay<'a> {
    pub fn new(
        visibility: ConsoleVisibility,
        logs: &'a [&'static LogEntry],
        theme: &'a NeonTheme,
    ) -> Self {
        Self {
            visibility,
            logs,
            frame: 0,
            theme,
        }
    }

    pub fn with_frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    /// Popup rectangle: centered horizontally, anchored above the bottom
    /// chrome. Returns `None` while the console is closed or the frame is
    /// too small to float anything.
    pub fn popup_area(&self, frame_area: Rect) -> Option<Rect> {
        if self.visibility == ConsoleVisibility::Closed {
            return None;
        }
        let height = match self.visibility {
            ConsoleVisibility::Expanded => EXPANDED_HEIGHT,
            _ => MINIMIZED_HEIGHT,
        };
        let height = height.min(frame_area.height.saturating_sub(4));
        if height < MINIMIZED_HEIGHT || frame_area.width < 20 {
            return None;
        }
        let width = MAX_WIDTH.min(frame_area.width.saturating_sub(4));
        let x = frame_area.x + (frame_area.width - width) / 2;
        let y = frame_area.y + frame_area.height.saturating_sub(height + 3);
        Some(Rect::new(x, y, width, height))
    }

    fn log_line(&self, entry: &'static LogEntry) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!(" {} ", entry.clock()), self.theme.dimmed()),
            Span::styled(entry.level.label(), self.theme.level_style(entry.level)),
            Span::styled(" ", Style::default()),
            Span::styled(entry.message, self.theme.text()),
        ])
    }

    fn awaiting_line(&self) -> Line<'a> {
        // Reuse the last fixture clock so the idle line never shows wall time.
        let clock = LOGS[LOGS.len() - 1].clock();
        let mut spans = vec![
            Span::styled(format!(" {} ", clock), self.theme.dimmed()),
            Span::styled("[ACTIVE ]", self.theme.highlight()),
            Span::styled(" ", Style::default()),
            Span::styled(AWAITING_MESSAGE, self.theme.text()),
        ];
        if (self.frame / 8) % 2 == 0 {
            spans.push(Span::styled(
                format!(" {}", icons::CURSOR),
                Style::default().fg(self.theme.pulse_color(self.frame)),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for ConsoleOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(popup) = self.popup_area(area) else {
            return;
        };

        Clear.render(popup, buf);

        let title = format!(
            " {} Reasoning Trace ─ Real-time Analysis ─ [m]in [c]lose ",
            icons::CONSOLE
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true))
            .title(title);

        if self.visibility == ConsoleVisibility::Minimized {
            block.render(popup, buf);
            return;
        }

        let body_rows = popup.height.saturating_sub(2) as usize;
        let mut lines: Vec<Line> = self
            .logs
            .iter()
            .copied()
            .map(|entry| self.log_line(entry))
            .collect();
        lines.push(self.awaiting_line());

        // Keep the newest lines in view once the body overflows.
        let skip = lines.len().saturating_sub(body_rows);
        let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

        Paragraph::new(visible).block(block).render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(overlay: ConsoleOverlay, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        overlay.render(area, &mut buffer);
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn full_trace() -> Vec<&'static LogEntry> {
        LOGS.iter().collect()
    }

    #[test]
    fn test_closed_console_renders_nothing() {
        let theme = NeonTheme::new();
        let logs = full_trace();
        let out = render_to_string(
            ConsoleOverlay::new(ConsoleVisibility::Closed, &logs, &theme),
            100,
            30,
        );
        assert!(!out.contains("Reasoning Trace"));
    }

    #[test]
    fn test_expanded_console_shows_logs() {
        let theme = NeonTheme::new();
        let logs = full_trace();
        let out = render_to_string(
            ConsoleOverlay::new(ConsoleVisibility::Expanded, &logs, &theme),
            100,
            30,
        );
        assert!(out.contains("Reasoning Trace"));
        assert!(out.contains("Awaiting next instruction"));
        assert!(out.contains("Bundle size reduced by 23%"));
    }

    #[test]
    fn test_minimized_console_keeps_title_hides_body() {
        let theme = NeonTheme::new();
        let logs = full_trace();
        let out = render_to_string(
            ConsoleOverlay::new(ConsoleVisibility::Minimized, &logs, &theme),
            100,
            30,
        );
        assert!(out.contains("Reasoning Trace"));
        assert!(!out.contains("Awaiting next instruction"));
        assert!(!out.contains("Initializing multi-agent orchestration"));
    }

    #[test]
    fn test_cursor_blinks_with_frame() {
        let theme = NeonTheme::new();
        let logs: Vec<&'static LogEntry> = Vec::new();
        let on = render_to_string(
            ConsoleOverlay::new(ConsoleVisibility::Expanded, &logs, &theme).with_frame(0),
            100,
            30,
        );
        let off = render_to_string(
            ConsoleOverlay::new(ConsoleVisibility::Expanded, &logs, &theme).with_frame(8),
            100,
            30,
        );
        assert!(on.contains(icons::CURSOR));
        assert!(!off.contains(icons::CURSOR));
    }
}

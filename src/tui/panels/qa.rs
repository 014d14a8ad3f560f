//! QA audit panel
//!
//! Status tiles, progress readouts, and the audit list. Every number here is
//! derived from the fixture slice on the way through.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::fixtures::qa::{self, QA_ITEMS, QA_PROGRESS};
use crate::tui::theme::{icons, NeonTheme};
use crate::tui::widgets::Gauge;

pub fn render(frame: &mut Frame, area: Rect, theme: &NeonTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(true))
        .title(" ✓ QA AUDIT ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 8 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                          // heading + score
            Constraint::Length(2),                          // status tiles
            Constraint::Length(QA_PROGRESS.len() as u16 * 2 + 1), // gauges
            Constraint::Min(3),                             // audit list
        ])
        .split(inner);

    render_heading(frame, chunks[0], theme);
    render_tiles(frame, chunks[1], theme);
    render_gauges(frame, chunks[2], theme);
    render_items(frame, chunks[3], theme);
}

fn render_heading(frame: &mut Frame, area: Rect, theme: &NeonTheme) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                " Quality Assurance Audit",
                theme.text().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   Quality: {}%", qa::quality_score()),
                theme.success().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![Span::styled(
            " Automated code quality and security analysis",
            theme.dimmed(),
        )]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_tiles(frame: &mut Frame, area: Rect, theme: &NeonTheme) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let stats = [
        (qa::passed_count(), "Passed", theme.success()),
        (qa::warning_count(), "Warnings", theme.warning()),
        (qa::failed_count(), "Failed", theme.error()),
    ];

    for (tile, (value, label, style)) in tiles.iter().zip(stats) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", value),
                style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(label, theme.dimmed()),
        ]);
        frame.render_widget(Paragraph::new(line), *tile);
    }
}

fn render_gauges(frame: &mut Frame, area: Rect, theme: &NeonTheme) {
    let mut y = area.y;
    for (label, percent) in QA_PROGRESS {
        if y + 2 > area.y + area.height {
            break;
        }
        let gauge_area = Rect::new(area.x + 1, y, area.width.saturating_sub(2), 2);
        frame.render_widget(
            Gauge::from_percent(*percent)
                .label(label)
                .fill_color(theme.neon_cyan)
                .text_color(theme.foreground),
            gauge_area,
        );
        y += 2;
    }
}

fn render_items(frame: &mut Frame, area: Rect, theme: &NeonTheme) {
    let lines: Vec<Line> = QA_ITEMS
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", item.status.icon()),
                    theme.qa_status_style(item.status),
                ),
                Span::styled(item.name, theme.text().add_modifier(Modifier::BOLD)),
                Span::styled(format!(" — {}", item.message), theme.dimmed()),
                Span::styled(
                    format!("  {} {}", icons::CLOCK, item.duration),
                    theme.dimmed(),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

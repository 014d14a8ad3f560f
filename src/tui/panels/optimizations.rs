//! Optimizations panel
//!
//! Headline metric tiles and the suggested-optimization list. The "Applied"
//! markers are fixture literals; nothing here toggles them.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::fixtures::optimizations::{METRICS, OPTIMIZATIONS};
use crate::tui::theme::{icons, NeonTheme};

pub fn render(frame: &mut Frame, area: Rect, theme: &NeonTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(true))
        .title(" ⚡ OPTIMIZATIONS ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 8 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading
            Constraint::Length(3), // metric tiles
            Constraint::Min(3),    // optimization list
        ])
        .split(inner);

    render_heading(frame, chunks[0], theme);
    render_metrics(frame, chunks[1], theme);
    render_list(frame, chunks[2], theme);
}

fn render_heading(frame: &mut Frame, area: Rect, theme: &NeonTheme) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                " Performance Optimizations",
                theme.text().add_modifier(Modifier::BOLD),
            ),
            Span::styled("   [ Apply All ]", theme.highlight()),
        ]),
        Line::from(vec![Span::styled(
            " AI-powered performance analysis and improvements",
            theme.dimmed(),
        )]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_metrics(frame: &mut Frame, area: Rect, theme: &NeonTheme) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for (tile, metric) in tiles.iter().zip(METRICS) {
        let (arrow, change_style) = if metric.improved {
            (icons::ARROW_DOWN, theme.success())
        } else {
            (icons::ARROW_UP, theme.warning())
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", metric.value), theme.text().add_modifier(Modifier::BOLD)),
                Span::styled(format!("{}{}", arrow, metric.change), change_style),
            ]),
            Line::from(vec![Span::styled(format!(" {}", metric.label), theme.dimmed())]),
        ];
        frame.render_widget(Paragraph::new(lines), *tile);
    }
}

fn render_list(frame: &mut Frame, area: Rect, theme: &NeonTheme) {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            " SUGGESTED OPTIMIZATIONS",
            theme.dimmed().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    for opt in OPTIMIZATIONS {
        let applied = if opt.applied {
            Span::styled("Applied", theme.success())
        } else {
            Span::styled("Apply", theme.highlight())
        };
        lines.push(Line::from(vec![
            Span::styled(" ⚡ ", theme.impact_style(opt.impact)),
            Span::styled(opt.title, theme.text().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" — {}", opt.description), theme.dimmed()),
            Span::styled(format!("  [{}]  ", opt.savings), theme.impact_style(opt.impact)),
            applied,
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

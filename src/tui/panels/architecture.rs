//! Architecture panel
//!
//! Pipeline overview plus the active agent's brief: focus, summary,
//! responsibilities, and the downstream handoff.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::fixtures::agents::{agent, AGENTS};
use crate::fixtures::architecture::architecture_note;
use crate::tui::state::DashboardState;
use crate::tui::theme::{icons, NeonTheme};

pub fn render(frame: &mut Frame, area: Rect, state: &DashboardState, theme: &NeonTheme) {
    let note = architecture_note(state.active_agent);
    let active = agent(state.active_agent);

    // Pipeline strip: every stage, active one highlighted.
    let mut pipeline = vec![Span::raw(" ")];
    for (idx, entry) in AGENTS.iter().enumerate() {
        let style = if entry.id == state.active_agent {
            theme.highlight()
        } else {
            theme.dimmed()
        };
        pipeline.push(Span::styled(format!("{} {}", entry.icon, entry.name), style));
        if idx < AGENTS.len() - 1 {
            pipeline.push(Span::styled(" ──▸ ", theme.accent()));
        }
    }

    let mut lines = vec![
        Line::from(pipeline),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", active.icon), theme.highlight()),
            Span::styled(
                active.name,
                Style::default()
                    .fg(theme.neon_cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" — ", theme.dimmed()),
            Span::styled(note.focus, theme.text()),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(format!(" {}", note.summary), theme.dimmed())]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " RESPONSIBILITIES",
            theme.dimmed().add_modifier(Modifier::BOLD),
        )]),
    ];

    for item in note.responsibilities {
        lines.push(Line::from(vec![
            Span::styled(format!("   {} ", icons::DOT), theme.accent()),
            Span::styled(*item, theme.text()),
        ]));
    }

    lines.push(Line::from(""));
    let handoff = match note.handoff {
        Some(next) => Line::from(vec![
            Span::styled(" Hands off to ", theme.dimmed()),
            Span::styled(agent(next).name, theme.highlight()),
        ]),
        None => Line::from(vec![Span::styled(
            " Final stage — publishes metrics to the dashboard",
            theme.dimmed(),
        )]),
    };
    lines.push(handoff);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(true))
        .title(" ◈ ARCHITECTURE ");

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

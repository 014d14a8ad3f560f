//! Implementation panel
//!
//! Collapsible file cards over the generated-source fixture. The cursor row
//! carries the keyboard focus; expanded cards show numbered code lines with
//! the original's crude keyword tinting.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::fixtures::implementation::{FileBlock, FILES};
use crate::tui::state::DashboardState;
use crate::tui::theme::{icons, NeonTheme};

pub fn render(frame: &mut Frame, area: Rect, state: &DashboardState, theme: &NeonTheme) {
    let now = Instant::now();
    let copied_id = state.implementation.copied_id(now);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Source Code Implementation", theme.text().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![Span::styled(
            " Auto-generated files with intelligent code synthesis",
            theme.dimmed(),
        )]),
        Line::from(""),
    ];

    for (idx, file) in FILES.iter().enumerate() {
        lines.push(file_header(file, idx, state, copied_id, theme));
        if state.implementation.is_expanded(file.id) {
            lines.extend(code_lines(file, theme));
            lines.push(Line::from(""));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(true))
        .title(" ▤ IMPLEMENTATION ");

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn file_header(
    file: &'static FileBlock,
    idx: usize,
    state: &DashboardState,
    copied_id: Option<&'static str>,
    theme: &NeonTheme,
) -> Line<'static> {
    let selected = state.implementation.cursor == idx;
    let expanded = state.implementation.is_expanded(file.id);

    let chevron = if expanded {
        icons::CHEVRON_OPEN
    } else {
        icons::CHEVRON_CLOSED
    };
    let marker = if selected { "›" } else { " " };
    let name_style = if selected {
        theme.highlight()
    } else {
        theme.text()
    };

    let mut spans = vec![
        Span::styled(marker.to_string(), theme.highlight()),
        Span::styled(format!("{} ", chevron), theme.dimmed()),
        Span::styled(format!("{} ", icons::FILE), theme.accent()),
        Span::styled(file.name, name_style),
        Span::styled(format!("  [{}]", file.language), theme.dimmed()),
    ];

    if copied_id == Some(file.id) {
        spans.push(Span::styled(
            "  ✓ copied",
            theme.success().add_modifier(Modifier::BOLD),
        ));
    } else if selected && expanded {
        spans.push(Span::styled(
            format!("  {} y", icons::COPY),
            theme.dimmed(),
        ));
    }

    Line::from(spans)
}

fn code_lines(file: &'static FileBlock, theme: &NeonTheme) -> Vec<Line<'static>> {
    file.code
        .lines()
        .enumerate()
        .map(|(i, line)| {
            Line::from(vec![
                Span::styled(format!(" {:>3} ", i + 1), theme.dimmed()),
                Span::styled(line, keyword_style(line, theme)),
            ])
        })
        .collect()
}

/// Keyword tinting, deliberately as crude as the mockup's: whole lines take
/// the color of the first keyword family they mention.
fn keyword_style(line: &str, theme: &NeonTheme) -> Style {
    if line.contains("//") {
        theme.dimmed()
    } else if line.contains("export") || line.contains("return") {
        theme.accent()
    } else if line.contains("async") || line.contains("await") {
        Style::default().fg(theme.neon_cyan)
    } else {
        theme.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_style_families() {
        let theme = NeonTheme::new();
        assert_eq!(
            keyword_style("export class Foo {", &theme).fg,
            Some(theme.neon_violet)
        );
        assert_eq!(
            keyword_style("  async initialize() {", &theme).fg,
            Some(theme.neon_cyan)
        );
        assert_eq!(
            keyword_style("// comment", &theme).fg,
            Some(theme.muted)
        );
        assert_eq!(
            keyword_style("  const x = 1;", &theme).fg,
            Some(theme.foreground)
        );
    }
}

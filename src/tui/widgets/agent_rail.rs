//! Agent rail widget
//!
//! The workflow sidebar: four connected nodes, one active. Connectors above
//! the active node read as "completed" and carry a flowing particle; the rest
//! stay dim. All motion derives from the frame counter.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::fixtures::agents::{AgentId, AGENTS};
use crate::tui::theme::{icons, NeonTheme};

pub struct AgentRail<'a> {
    active: AgentId,
    frame: u64,
    theme: &'a NeonTheme,
}

impl<'a> AgentRail<'a> {
    pub fn new(active: AgentId, theme: &'a NeonTheme) -> Self {
        Self {
            active,
            frame: 0,
            theme,
        }
    }

    /// Set the animation frame for the particle and pulse.
    pub fn with_frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    fn set_centered(&self, buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
        let w = text.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(w) / 2;
        if y < area.y + area.height {
            buf.set_string(x, y, text, style);
        }
    }
}

impl Widget for AgentRail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 9 {
            return;
        }

        let mut y = area.y;
        self.set_centered(
            buf,
            area,
            y,
            "AGENT WORKFLOW",
            self.theme.dimmed().add_modifier(Modifier::BOLD),
        );
        y += 2;

        // Squeeze the connectors when the terminal is short.
        let connector_rows: u16 = if area.height >= 19 { 3 } else { 1 };
        let active_idx = self.active.index();

        for (idx, agent) in AGENTS.iter().enumerate() {
            let is_active = idx == active_idx;

            // Node glyph row
            let (glyph, glyph_style) = if is_active {
                (
                    icons::NODE_ACTIVE,
                    Style::default()
                        .fg(self.theme.pulse_color(self.frame))
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (icons::NODE_IDLE, self.theme.dimmed())
            };
            self.set_centered(buf, area, y, &format!("{} {}", glyph, agent.icon), glyph_style);
            y += 1;

            // Name row
            let name_style = if is_active {
                self.theme.highlight()
            } else {
                self.theme.dimmed()
            };
            self.set_centered(buf, area, y, agent.name, name_style);
            y += 1;

            // Connector down to the next node
            if idx < AGENTS.len() - 1 {
                let completed = idx < active_idx;
                let particle_row = (self.frame / 2) % u64::from(connector_rows);
                for row in 0..connector_rows {
                    let (symbol, style) = if completed {
                        if u64::from(row) == particle_row {
                            (
                                icons::PARTICLE,
                                Style::default()
                                    .fg(self.theme.neon_cyan)
                                    .add_modifier(Modifier::BOLD),
                            )
                        } else if row == 0 {
                            (icons::CONNECTOR, Style::default().fg(self.theme.neon_cyan))
                        } else {
                            (icons::CONNECTOR, Style::default().fg(self.theme.neon_violet))
                        }
                    } else {
                        (icons::CONNECTOR, Style::default().fg(self.theme.dim_violet))
                    };
                    self.set_centered(buf, area, y, symbol, style);
                    y += 1;
                }
            }

            if y >= area.y + area.height {
                break;
            }
        }
    }
}

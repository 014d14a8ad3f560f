//! Main-tab panels
//!
//! One module per tab. Exactly one panel renders per frame, chosen by the
//! active tab; the other three contribute nothing to the buffer.

mod architecture;
mod implementation;
mod optimizations;
mod qa;

use ratatui::layout::Rect;
use ratatui::Frame;

use super::state::{DashboardState, TabId};
use super::theme::NeonTheme;

/// Render the panel for the active tab.
pub fn render_active(frame: &mut Frame, area: Rect, state: &DashboardState, theme: &NeonTheme) {
    match state.active_tab {
        TabId::Architecture => architecture::render(frame, area, state, theme),
        TabId::Implementation => implementation::render(frame, area, state, theme),
        TabId::Qa => qa::render(frame, area, theme),
        TabId::Optimizations => optimizations::render(frame, area, theme),
    }
}

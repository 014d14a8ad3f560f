//! Full-frame render tests
//!
//! Renders the dashboard into a ratatui test backend and asserts on the
//! visible text: panel exclusivity, console states, and the fixture surface.

#![cfg(feature = "tui")]

use ratatui::{backend::TestBackend, Terminal};

use devmind::tui::state::{DashboardState, TabId};
use devmind::tui::{render, NeonTheme};

/// Render one frame into a string.
fn render_to_string(state: &DashboardState, width: u16, height: u16) -> String {
    let theme = NeonTheme::new();
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, state, &theme)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_initial_frame_shows_chrome_rail_and_architecture() {
    let state = DashboardState::with_full_trace();
    let out = render_to_string(&state, 120, 40);

    // Chrome
    assert!(out.contains("DevMind AI"));
    assert!(out.contains("MULTI-AGENT SYSTEM"));
    assert!(out.contains("All Agents Active"));
    assert!(out.contains("CPU: 42%"));

    // Rail lists all four agents
    for name in ["Planner", "Coder", "Reviewer", "Optimizer"] {
        assert!(out.contains(name), "missing agent {}", name);
    }

    // First tab's panel is mounted
    assert!(out.contains("ARCHITECTURE"));
    assert!(out.contains("Requirement analysis & task decomposition"));

    // Console boots open and expanded
    assert!(out.contains("Reasoning Trace"));
    assert!(out.contains("Awaiting next instruction"));
}

#[test]
fn test_exactly_one_panel_mounts_per_tab() {
    let mut state = DashboardState::new();
    state.console.toggle_open(); // keep the overlay out of the way

    state.active_tab = TabId::Qa;
    let out = render_to_string(&state, 120, 40);
    assert!(out.contains("Quality Assurance Audit"));
    assert!(out.contains("Quality: 67%"));
    assert!(!out.contains("Source Code Implementation"));
    assert!(!out.contains("Tree Shaking Enhancement"));
    assert!(!out.contains("Requirement analysis & task decomposition"));

    state.active_tab = TabId::Optimizations;
    let out = render_to_string(&state, 120, 40);
    assert!(out.contains("Performance Optimizations"));
    assert!(out.contains("Tree Shaking Enhancement"));
    assert!(!out.contains("Quality Assurance Audit"));
}

#[test]
fn test_qa_panel_shows_derived_numbers() {
    let mut state = DashboardState::new();
    state.console.toggle_open();
    state.active_tab = TabId::Qa;

    let out = render_to_string(&state, 120, 40);
    assert!(out.contains("Quality: 67%"));
    assert!(out.contains("4 Passed"));
    assert!(out.contains("2 Warnings"));
    assert!(out.contains("0 Failed"));
    assert!(out.contains("Code Coverage"));
    assert!(out.contains("96%"));
}

#[test]
fn test_implementation_panel_expansion_is_visible() {
    let mut state = DashboardState::new();
    state.console.toggle_open();
    state.active_tab = TabId::Implementation;

    // File 1 ships expanded: its code is on screen. File 2 is collapsed:
    // header only.
    let out = render_to_string(&state, 120, 45);
    assert!(out.contains("AgentOrchestrator.ts"));
    assert!(out.contains("export class AgentOrchestrator"));
    assert!(out.contains("PlannerAgent.ts"));
    assert!(!out.contains("decomposeRequirements"));

    state.implementation.toggle_expanded("1");
    let out = render_to_string(&state, 120, 45);
    assert!(!out.contains("export class AgentOrchestrator"));
}

#[test]
fn test_console_states_render_distinctly() {
    let mut state = DashboardState::with_full_trace();

    // Expanded: title and body visible.
    let out = render_to_string(&state, 120, 40);
    assert!(out.contains("Reasoning Trace"));
    assert!(out.contains("Planner Agent activated successfully"));

    // Minimized: title row only.
    state.console.toggle_minimize();
    let out = render_to_string(&state, 120, 40);
    assert!(out.contains("Reasoning Trace"));
    assert!(!out.contains("Planner Agent activated successfully"));
    assert!(!out.contains("Awaiting next instruction"));

    // Closed: gone entirely.
    state.console.toggle_open();
    let out = render_to_string(&state, 120, 40);
    assert!(!out.contains("Reasoning Trace"));
}

#[test]
fn test_active_agent_drives_architecture_brief() {
    let mut state = DashboardState::new();
    state.console.toggle_open();
    state.active_agent = devmind::fixtures::agents::AgentId::Optimizer;

    let out = render_to_string(&state, 120, 40);
    assert!(out.contains("Performance tuning"));
    assert!(!out.contains("Requirement analysis & task decomposition"));
}

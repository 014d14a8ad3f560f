//! TUI Application - Main entry point and run loop

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::clipboard;
use super::events::{handle_key_event, poll_event, Action};
use super::panels;
use super::state::{DashboardState, TabId};
use super::theme::NeonTheme;
use super::widgets::{AgentRail, ConsoleOverlay, Header, StatusBar};
use crate::error::{DevmindError, Result};
use crate::feed::{FeedBridge, FeedEvent, MockFeed};

/// Frame cadence (~60fps)
const TICK_RATE: Duration = Duration::from_millis(16);

/// Sidebar width in columns
const RAIL_WIDTH: u16 = 22;

/// TUI application
pub struct App {
    state: DashboardState,
    theme: NeonTheme,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: DashboardState::new(),
            theme: NeonTheme::new(),
        }
    }

    /// Run the dashboard until the user quits.
    pub async fn run(mut self) -> Result<()> {
        let mut feed = MockFeed::new();
        let mut feed_rx = feed.start().await?;

        let mut terminal = self.setup_terminal()?;
        let result = self.main_loop(&mut terminal, &mut feed_rx).await;
        self.restore_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| DevmindError::Terminal {
            reason: format!("failed to enable raw mode: {}", e),
        })?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| DevmindError::Terminal {
            reason: format!("failed to enter alternate screen: {}", e),
        })?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(|e| DevmindError::Terminal {
            reason: format!("failed to create terminal: {}", e),
        })
    }

    fn restore_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        feed_rx: &mut mpsc::Receiver<FeedEvent>,
    ) -> Result<()> {
        loop {
            // Drain the feed without blocking the frame.
            while let Ok(FeedEvent::Log(entry)) = feed_rx.try_recv() {
                self.state.push_log(entry);
            }

            self.state.tick(Instant::now());

            let state = &self.state;
            let theme = &self.theme;
            terminal.draw(|frame| render(frame, state, theme))?;

            if let Some(key) = poll_event(TICK_RATE)? {
                match handle_key_event(key, &mut self.state) {
                    Action::Quit => self.state.should_quit = true,
                    Action::CopyFile(file) => clipboard::copy_text(file.code),
                    _ => {}
                }
            }

            if self.state.should_quit {
                break;
            }
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one dashboard frame. Public so render tests can drive it against a
/// test backend.
pub fn render(frame: &mut Frame, state: &DashboardState, theme: &NeonTheme) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // body
            Constraint::Length(1), // status bar
            Constraint::Length(1), // key hints
        ])
        .split(area);

    frame.render_widget(Header::new(state.console.is_open(), theme), rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(RAIL_WIDTH), Constraint::Min(30)])
        .split(rows[1]);

    render_rail(frame, body[0], state, theme);
    render_main(frame, body[1], state, theme);

    frame.render_widget(StatusBar::new(theme).with_frame(state.frame), rows[2]);
    render_hints(frame, rows[3], theme);

    // The floating console draws last, over everything else.
    frame.render_widget(
        ConsoleOverlay::new(state.console.visibility(), &state.revealed_logs, theme)
            .with_frame(state.frame),
        area,
    );
}

fn render_rail(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
    theme: &NeonTheme,
) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        AgentRail::new(state.active_agent, theme).with_frame(state.frame),
        inner,
    );
}

fn render_main(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
    theme: &NeonTheme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(8)])
        .split(area);

    let titles: Vec<Line> = TabId::ALL
        .iter()
        .map(|tab| {
            Line::from(Span::styled(
                format!(" {}:{} ", tab.number(), tab.title()),
                Style::default(),
            ))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.active_tab.index())
        .style(theme.dimmed())
        .highlight_style(theme.highlight())
        .divider(Span::styled("│", theme.dimmed()));
    frame.render_widget(tabs, chunks[0]);

    panels::render_active(frame, chunks[1], state, theme);
}

fn render_hints(frame: &mut Frame, area: ratatui::layout::Rect, theme: &NeonTheme) {
    let hints = Line::from(vec![
        Span::styled(" [q]", theme.accent()),
        Span::styled("uit ", theme.dimmed()),
        Span::styled("[1-4]", theme.accent()),
        Span::styled(" tabs ", theme.dimmed()),
        Span::styled("[↑↓]", theme.accent()),
        Span::styled(" agent ", theme.dimmed()),
        Span::styled("[c]", theme.accent()),
        Span::styled("onsole ", theme.dimmed()),
        Span::styled("[m]", theme.accent()),
        Span::styled("inimize ", theme.dimmed()),
        Span::styled("[j/k]", theme.accent()),
        Span::styled(" files ", theme.dimmed()),
        Span::styled("[Enter]", theme.accent()),
        Span::styled(" expand ", theme.dimmed()),
        Span::styled("[y]", theme.accent()),
        Span::styled(" copy", theme.dimmed()),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}

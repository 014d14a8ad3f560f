//! TUI Module - DevMind Dashboard
//!
//! Architecture:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    UI LAYER (widgets/, panels/)                     │
//! │  Stateless renderers over DashboardState + fixtures.                │
//! └─────────────────────────────────────────────────────────────────────┘
//!                               ▲
//!                               │ state + fixtures
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      DOMAIN LAYER (state.rs)                        │
//! │  DashboardState: selections, console machine, per-file flags.       │
//! └─────────────────────────────────────────────────────────────────────┘
//!                               ▲
//!                               │ FeedEvent stream
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    CONNECTOR LAYER (feed.rs)                        │
//! │  FeedBridge trait; MockFeed replays the trace fixture.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

#[cfg(feature = "tui")]
mod app;
#[cfg(feature = "tui")]
mod clipboard;
#[cfg(feature = "tui")]
mod events;
#[cfg(feature = "tui")]
pub mod panels;
#[cfg(feature = "tui")]
pub mod state;
#[cfg(feature = "tui")]
pub mod theme;
#[cfg(feature = "tui")]
pub mod widgets;

#[cfg(feature = "tui")]
pub use app::{render, App};
#[cfg(feature = "tui")]
pub use events::{handle_key_event, Action};
#[cfg(feature = "tui")]
pub use state::{ConsoleVisibility, DashboardState, TabId};
#[cfg(feature = "tui")]
pub use theme::NeonTheme;

/// Run the dashboard.
#[cfg(feature = "tui")]
pub async fn run() -> crate::error::Result<()> {
    App::new().run().await
}

#[cfg(not(feature = "tui"))]
pub async fn run() -> crate::error::Result<()> {
    Err(crate::error::DevmindError::FeatureDisabled {
        reason: "this build has no dashboard; rebuild with --features tui".to_string(),
    })
}

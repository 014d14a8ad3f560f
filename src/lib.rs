//! DevMind - terminal dashboard mockup for a multi-agent coding system
//!
//! Everything the dashboard shows is a hardcoded fixture; the only runtime
//! behavior is UI state (selected agent/tab, console visibility, per-file
//! expand/collapse, copy feedback) and presentational animation.

pub mod error;
pub mod feed;
pub mod fixtures;
pub mod report;
pub mod tui;

pub use error::{DevmindError, FixSuggestion, Result};

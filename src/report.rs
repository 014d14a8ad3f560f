//! Plain-terminal reports
//!
//! The non-TUI command surface: prints the same fixtures the dashboard
//! renders, so the data is scriptable and testable without a TTY.

use colored::Colorize;
use tokio_stream::StreamExt;

use crate::error::Result;
use crate::feed::{self, FeedBridge, FeedEvent, MockFeed};
use crate::fixtures::trace::{LogEntry, LogLevel};
use crate::fixtures::{self, qa, FixtureBundle};

fn print_log_line(entry: &LogEntry) {
    let label = match entry.level {
        LogLevel::Info => entry.level.label().cyan(),
        LogLevel::Warn => entry.level.label().yellow(),
        LogLevel::Debug => entry.level.label().dimmed(),
        LogLevel::Success => entry.level.label().green(),
    };
    println!("{} {} {}", entry.clock().dimmed(), label, entry.message);
}

/// Print the reasoning trace at once.
pub fn print_trace() {
    for entry in fixtures::LOGS {
        print_log_line(entry);
    }
}

/// Replay the reasoning trace with the dashboard's reveal cadence.
pub async fn replay_trace() -> Result<()> {
    let mut feed = MockFeed::new();
    let mut stream = feed::into_stream(feed.start().await?);
    while let Some(FeedEvent::Log(entry)) = stream.next().await {
        print_log_line(entry);
    }
    Ok(())
}

/// Print the QA audit summary.
pub fn print_qa() {
    println!("{}", "Quality Assurance Audit".bold());
    println!(
        "{} {}",
        "Quality score:".dimmed(),
        format!("{}%", qa::quality_score()).green().bold()
    );
    println!(
        "{} passed, {} warnings, {} failed",
        qa::passed_count().to_string().green(),
        qa::warning_count().to_string().yellow(),
        qa::failed_count().to_string().red()
    );
    println!();
    for item in fixtures::QA_ITEMS {
        let icon = match item.status {
            fixtures::QaStatus::Passed => item.status.icon().green(),
            fixtures::QaStatus::Warning => item.status.icon().yellow(),
            fixtures::QaStatus::Failed => item.status.icon().red(),
        };
        println!(
            "{} {} ({}) - {}",
            icon,
            item.name.bold(),
            item.duration.dimmed(),
            item.message
        );
    }
}

/// All fixtures as pretty-printed JSON.
pub fn export_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&FixtureBundle::collect())?)
}

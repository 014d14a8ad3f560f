//! The reasoning trace
//!
//! Twelve canned log lines replayed into the floating console. Timestamps are
//! RFC 3339; the console shows only the clock portion.

use chrono::DateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Debug,
    Success,
}

impl LogLevel {
    /// Bracketed label, padded to a fixed column width.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "[INFO   ]",
            LogLevel::Warn => "[WARN   ]",
            LogLevel::Debug => "[DEBUG  ]",
            LogLevel::Success => "[SUCCESS]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub timestamp: &'static str,
    pub level: LogLevel,
    pub message: &'static str,
}

impl LogEntry {
    /// HH:MM:SS portion of the timestamp. Falls back to the raw string if the
    /// fixture ever carries a malformed timestamp.
    pub fn clock(&self) -> String {
        DateTime::parse_from_rfc3339(self.timestamp)
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|_| self.timestamp.to_string())
    }
}

pub const LOGS: &[LogEntry] = &[
    LogEntry {
        timestamp: "2024-01-18T10:45:32.456Z",
        level: LogLevel::Info,
        message: "Initializing multi-agent orchestration...",
    },
    LogEntry {
        timestamp: "2024-01-18T10:45:32.891Z",
        level: LogLevel::Success,
        message: "Planner Agent activated successfully",
    },
    LogEntry {
        timestamp: "2024-01-18T10:45:33.123Z",
        level: LogLevel::Debug,
        message: "Analyzing project requirements from specification...",
    },
    LogEntry {
        timestamp: "2024-01-18T10:45:33.567Z",
        level: LogLevel::Info,
        message: "Generating architecture blueprint...",
    },
    LogEntry {
        timestamp: "2024-01-18T10:45:34.012Z",
        level: LogLevel::Debug,
        message: "Evaluating component dependencies: React, TypeScript, TailwindCSS",
    },
    LogEntry {
        timestamp: "2024-01-18T10:45:34.456Z",
        level: LogLevel::Info,
        message: "Coder Agent processing implementation queue...",
    },
    LogEntry {
        timestamp: "2024-01-18T10:45:34.891Z",
        level: LogLevel::Success,
        message: "Generated 12 component files with type definitions",
    },
    LogEntry {
        timestamp: "2024-01-18T10:45:35.234Z",
        level: LogLevel::Debug,
        message: "Applying code optimization patterns...",
    },
    LogEntry {
        timestamp: "2024-01-18T10:45:35.678Z",
        level: LogLevel::Info,
        message: "Reviewer Agent scanning for potential issues...",
    },
    LogEntry {
        timestamp: "2024-01-18T10:45:36.012Z",
        level: LogLevel::Warn,
        message: "Minor accessibility improvements suggested in NavComponent",
    },
    LogEntry {
        timestamp: "2024-01-18T10:45:36.456Z",
        level: LogLevel::Info,
        message: "Optimizer Agent analyzing performance metrics...",
    },
    LogEntry {
        timestamp: "2024-01-18T10:45:36.891Z",
        level: LogLevel::Success,
        message: "Bundle size reduced by 23% after tree-shaking",
    },
];

/// The idle line rendered after the trace, with the blinking cursor.
pub const AWAITING_MESSAGE: &str = "Awaiting next instruction";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_has_twelve_entries() {
        assert_eq!(LOGS.len(), 12);
    }

    #[test]
    fn test_clock_strips_date() {
        assert_eq!(LOGS[0].clock(), "10:45:32");
        assert_eq!(LOGS[11].clock(), "10:45:36");
    }

    #[test]
    fn test_labels_share_column_width() {
        for entry in LOGS {
            assert_eq!(entry.level.label().len(), 9);
        }
    }

    #[test]
    fn test_level_distribution() {
        let warns = LOGS.iter().filter(|l| l.level == LogLevel::Warn).count();
        let successes = LOGS
            .iter()
            .filter(|l| l.level == LogLevel::Success)
            .count();
        assert_eq!(warns, 1);
        assert_eq!(successes, 3);
    }
}

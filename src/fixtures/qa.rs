//! QA audit results
//!
//! Six canned checks plus the derived counts and quality score the panel
//! displays. The derivations are recomputed from the slice on every call;
//! nothing caches them.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QaStatus {
    Passed,
    Warning,
    Failed,
}

impl QaStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            QaStatus::Passed => "✓",
            QaStatus::Warning => "⚠",
            QaStatus::Failed => "✗",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QaItem {
    pub id: &'static str,
    pub name: &'static str,
    pub status: QaStatus,
    pub message: &'static str,
    pub duration: &'static str,
}

pub const QA_ITEMS: &[QaItem] = &[
    QaItem {
        id: "1",
        name: "Type Safety Check",
        status: QaStatus::Passed,
        message: "All types are properly defined",
        duration: "0.8s",
    },
    QaItem {
        id: "2",
        name: "Security Scan",
        status: QaStatus::Passed,
        message: "No vulnerabilities detected",
        duration: "2.4s",
    },
    QaItem {
        id: "3",
        name: "Code Coverage",
        status: QaStatus::Warning,
        message: "Coverage at 78% (target: 80%)",
        duration: "1.2s",
    },
    QaItem {
        id: "4",
        name: "Performance Audit",
        status: QaStatus::Passed,
        message: "All metrics within threshold",
        duration: "3.1s",
    },
    QaItem {
        id: "5",
        name: "Accessibility Check",
        status: QaStatus::Warning,
        message: "2 minor ARIA issues found",
        duration: "0.9s",
    },
    QaItem {
        id: "6",
        name: "Dependency Audit",
        status: QaStatus::Passed,
        message: "All packages up to date",
        duration: "1.5s",
    },
];

/// Progress readouts shown above the audit list: label and percentage.
pub const QA_PROGRESS: &[(&str, u8)] = &[
    ("Code Coverage", 78),
    ("Test Pass Rate", 96),
    ("Documentation", 85),
];

pub fn count_by_status(status: QaStatus) -> usize {
    QA_ITEMS.iter().filter(|i| i.status == status).count()
}

pub fn passed_count() -> usize {
    count_by_status(QaStatus::Passed)
}

pub fn warning_count() -> usize {
    count_by_status(QaStatus::Warning)
}

pub fn failed_count() -> usize {
    count_by_status(QaStatus::Failed)
}

/// Percentage of passed checks, rounded to the nearest integer.
pub fn quality_score() -> u8 {
    if QA_ITEMS.is_empty() {
        return 0;
    }
    ((passed_count() * 100) as f64 / QA_ITEMS.len() as f64).round() as u8
}

//! Dashboard fixtures
//!
//! Every dataset the dashboard renders is a `'static` literal in one of these
//! modules. Nothing here is created, mutated, or destroyed at runtime; the
//! panels derive their counts and scores from these slices on every frame.

pub mod agents;
pub mod architecture;
pub mod implementation;
pub mod optimizations;
pub mod qa;
pub mod trace;

use serde::Serialize;

pub use agents::{Agent, AgentId, AGENTS};
pub use architecture::{architecture_note, ArchitectureNote, ARCHITECTURE_NOTES};
pub use implementation::{FileBlock, FILES};
pub use optimizations::{Impact, Metric, Optimization, METRICS, OPTIMIZATIONS};
pub use qa::{QaItem, QaStatus, QA_ITEMS};
pub use trace::{LogEntry, LogLevel, LOGS};

/// Everything the dashboard knows, in one serializable bundle.
///
/// Used by `devmind export` so external tooling can consume the same data the
/// panels render.
#[derive(Debug, Serialize)]
pub struct FixtureBundle {
    pub agents: &'static [Agent],
    pub architecture: &'static [ArchitectureNote],
    pub trace: &'static [LogEntry],
    pub files: &'static [FileBlock],
    pub qa: &'static [QaItem],
    pub optimizations: &'static [Optimization],
    pub metrics: &'static [Metric],
}

impl FixtureBundle {
    pub fn collect() -> Self {
        Self {
            agents: AGENTS,
            architecture: ARCHITECTURE_NOTES,
            trace: LOGS,
            files: FILES,
            qa: QA_ITEMS,
            optimizations: OPTIMIZATIONS,
            metrics: METRICS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_covers_all_datasets() {
        let bundle = FixtureBundle::collect();
        assert_eq!(bundle.agents.len(), 4);
        assert_eq!(bundle.architecture.len(), 4);
        assert_eq!(bundle.trace.len(), 12);
        assert_eq!(bundle.files.len(), 3);
        assert_eq!(bundle.qa.len(), 6);
        assert_eq!(bundle.optimizations.len(), 5);
        assert_eq!(bundle.metrics.len(), 4);
    }

    #[test]
    fn test_bundle_serializes() {
        let json = serde_json::to_string(&FixtureBundle::collect()).unwrap();
        assert!(json.contains("planner"));
        assert!(json.contains("AgentOrchestrator.ts"));
    }
}

//! Architecture briefs
//!
//! One brief per agent for the Architecture panel, selected by the active
//! agent. Like every other dataset here, the briefs are fabricated.

use serde::Serialize;

use super::agents::AgentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchitectureNote {
    pub agent: AgentId,
    pub focus: &'static str,
    pub summary: &'static str,
    pub responsibilities: &'static [&'static str],
    /// Downstream stage the agent hands off to, if any.
    pub handoff: Option<AgentId>,
}

pub const ARCHITECTURE_NOTES: &[ArchitectureNote] = &[
    ArchitectureNote {
        agent: AgentId::Planner,
        focus: "Requirement analysis & task decomposition",
        summary: "Breaks the incoming specification into phased work items, \
                  estimates durations, and maps the dependencies between \
                  phases before anything is generated.",
        responsibilities: &[
            "Parse the specification into discrete requirements",
            "Group requirements into execution phases",
            "Estimate durations per phase",
            "Publish the plan to the task queue",
        ],
        handoff: Some(AgentId::Coder),
    },
    ArchitectureNote {
        agent: AgentId::Coder,
        focus: "Code synthesis",
        summary: "Consumes the published plan and emits typed component files \
                  through the template engine, resolving imports across the \
                  generated modules.",
        responsibilities: &[
            "Generate component scaffolding from templates",
            "Resolve imports across generated modules",
            "Emit unit tests alongside each file",
            "Queue artifacts for review",
        ],
        handoff: Some(AgentId::Reviewer),
    },
    ArchitectureNote {
        agent: AgentId::Reviewer,
        focus: "Static analysis & QA",
        summary: "Audits the generated code for type safety, security, and \
                  accessibility issues, and gates the release on the audit \
                  outcome.",
        responsibilities: &[
            "Run type safety and security scans",
            "Track coverage against the 80% target",
            "File warnings for accessibility gaps",
            "Gate the release on audit results",
        ],
        handoff: Some(AgentId::Optimizer),
    },
    ArchitectureNote {
        agent: AgentId::Optimizer,
        focus: "Performance tuning",
        summary: "Applies bundle and runtime optimizations to the reviewed \
                  build and reports the measured savings back to the \
                  dashboard.",
        responsibilities: &[
            "Tree-shake unused exports",
            "Split non-critical chunks",
            "Memoize expensive computations",
            "Publish before/after metrics",
        ],
        handoff: None,
    },
];

/// Brief for the given agent.
pub fn architecture_note(agent: AgentId) -> &'static ArchitectureNote {
    &ARCHITECTURE_NOTES[agent.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_note_per_agent() {
        assert_eq!(ARCHITECTURE_NOTES.len(), AgentId::ALL.len());
        for id in AgentId::ALL {
            assert_eq!(architecture_note(id).agent, id);
        }
    }

    #[test]
    fn test_handoffs_follow_rail_order() {
        assert_eq!(
            architecture_note(AgentId::Planner).handoff,
            Some(AgentId::Coder)
        );
        assert_eq!(architecture_note(AgentId::Optimizer).handoff, None);
    }
}

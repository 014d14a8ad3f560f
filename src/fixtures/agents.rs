//! The agent roster
//!
//! Four decorative agents form the workflow rail. The list order is the rail
//! order, and connector styling is derived from positions in this list.

use serde::Serialize;

/// Identifier for one of the four pipeline agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentId {
    Planner,
    Coder,
    Reviewer,
    Optimizer,
}

impl AgentId {
    /// All agents in rail order.
    pub const ALL: [AgentId; 4] = [
        AgentId::Planner,
        AgentId::Coder,
        AgentId::Reviewer,
        AgentId::Optimizer,
    ];

    /// Position in the rail.
    pub fn index(&self) -> usize {
        match self {
            AgentId::Planner => 0,
            AgentId::Coder => 1,
            AgentId::Reviewer => 2,
            AgentId::Optimizer => 3,
        }
    }

    /// Stable string id, matching the fixture ids.
    pub fn id(&self) -> &'static str {
        match self {
            AgentId::Planner => "planner",
            AgentId::Coder => "coder",
            AgentId::Reviewer => "reviewer",
            AgentId::Optimizer => "optimizer",
        }
    }

    /// Next agent down the rail (saturating at the last node).
    pub fn next(&self) -> AgentId {
        let idx = (self.index() + 1).min(Self::ALL.len() - 1);
        Self::ALL[idx]
    }

    /// Previous agent up the rail (saturating at the first node).
    pub fn prev(&self) -> AgentId {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

/// One selectable node on the workflow rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const AGENTS: &[Agent] = &[
    Agent {
        id: AgentId::Planner,
        name: "Planner",
        icon: "◆",
    },
    Agent {
        id: AgentId::Coder,
        name: "Coder",
        icon: "▣",
    },
    Agent {
        id: AgentId::Reviewer,
        name: "Reviewer",
        icon: "◎",
    },
    Agent {
        id: AgentId::Optimizer,
        name: "Optimizer",
        icon: "⚡",
    },
];

/// Look up the display entry for an agent.
pub fn agent(id: AgentId) -> &'static Agent {
    &AGENTS[id.index()]
}

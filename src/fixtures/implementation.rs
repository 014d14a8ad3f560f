//! Generated source files
//!
//! Three canned file blocks for the Implementation panel. The code text is
//! what the copy action places on the clipboard, verbatim.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileBlock {
    pub id: &'static str,
    pub name: &'static str,
    pub language: &'static str,
    pub code: &'static str,
}

pub const FILES: &[FileBlock] = &[
    FileBlock {
        id: "1",
        name: "AgentOrchestrator.ts",
        language: "typescript",
        code: r#"export class AgentOrchestrator {
  private agents: Map<string, Agent> = new Map();
  private taskQueue: Task[] = [];

  async initialize(): Promise<void> {
    await this.loadAgentConfigs();
    await this.startHealthCheck();
  }

  async dispatch(task: Task): Promise<Result> {
    const agent = this.selectOptimalAgent(task);
    return await agent.execute(task);
  }
}"#,
    },
    FileBlock {
        id: "2",
        name: "PlannerAgent.ts",
        language: "typescript",
        code: r#"export class PlannerAgent extends BaseAgent {
  async analyze(requirements: string[]): Promise<Plan> {
    const context = await this.buildContext();
    const breakdown = this.decomposeRequirements(requirements);

    return {
      phases: breakdown.map(b => this.createPhase(b)),
      estimatedTime: this.calculateDuration(breakdown),
      dependencies: this.mapDependencies(breakdown)
    };
  }
}"#,
    },
    FileBlock {
        id: "3",
        name: "CodeGenerator.ts",
        language: "typescript",
        code: r#"export class CodeGenerator {
  private templates: TemplateEngine;

  generate(spec: ComponentSpec): GeneratedCode {
    const structure = this.analyzeStructure(spec);
    const imports = this.resolveImports(structure);

    return {
      content: this.templates.render(structure),
      imports,
      tests: this.generateTests(spec)
    };
  }
}"#,
    },
];

/// Look up a file block by its fixture id.
pub fn file_by_id(id: &str) -> Option<&'static FileBlock> {
    FILES.iter().find(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_files_with_unique_ids() {
        assert_eq!(FILES.len(), 3);
        for (i, a) in FILES.iter().enumerate() {
            for b in &FILES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_file_lookup() {
        assert_eq!(file_by_id("1").unwrap().name, "AgentOrchestrator.ts");
        assert!(file_by_id("99").is_none());
    }

    #[test]
    fn test_code_blocks_are_multiline() {
        for file in FILES {
            assert!(file.code.lines().count() > 5, "{} too short", file.name);
        }
    }
}

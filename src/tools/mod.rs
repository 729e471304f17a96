//! Named tools for a conversational agent.
//!
//! Each tool takes the agent's raw input string and returns a JSON string the
//! agent can place in its prompt.

pub mod knowledge;
pub mod lab;

pub use knowledge::*;
pub use lab::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Failed to serialize tool output: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Agent-callable tool (allows mocking in the orchestration layer).
pub trait AgentTool {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn call(&self, input: &str) -> Result<String, ToolError>;
}

/// The tool set an agent is built with.
pub fn default_tools() -> Vec<Box<dyn AgentTool + Send + Sync>> {
    vec![Box::new(GoutLabTool), Box::new(KnowledgeTool)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tools_have_unique_names() {
        let names: Vec<_> = default_tools().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["gout_lab_analyzer", "medical_knowledge_base"]);
    }

    #[test]
    fn every_tool_describes_itself() {
        for tool in default_tools() {
            assert!(!tool.description().trim().is_empty(), "{}", tool.name());
        }
    }

    #[test]
    fn serialization_error_message() {
        let err: ToolError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(err.to_string().starts_with("Failed to serialize tool output"));
    }
}

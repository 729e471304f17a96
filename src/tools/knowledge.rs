use crate::intelligence::available_topics;

use super::{AgentTool, ToolError};

/// Answers topic questions from the built-in gout knowledge table.
pub struct KnowledgeTool;

impl KnowledgeTool {
    /// Returned instead of JSON when nothing matches.
    pub fn not_found_message() -> String {
        let keys: Vec<&str> = available_topics().collect();
        format!(
            "No matching medical knowledge found. Try one of these keywords: {}.",
            keys.join(", ")
        )
    }
}

impl AgentTool for KnowledgeTool {
    fn name(&self) -> &'static str {
        "medical_knowledge_base"
    }

    fn description(&self) -> &'static str {
        "Medical knowledge base for gout and related conditions: definitions, symptoms, \
         diagnostic criteria, treatment and prevention. Supported topics:\n\
         - 痛风 (gout)\n\
         - 高尿酸血症 (hyperuricemia)\n\
         - 尿酸 (uric acid)\n\
         - 痛风性关节炎 (gouty arthritis)\n\
         - 痛风石 (tophi)\n\
         - 肾功能 (kidney function)\n\
         - 炎症 (inflammatory markers)\n\
         Input a topic keyword to get the matching entries."
    }

    fn call(&self, input: &str) -> Result<String, ToolError> {
        let _span = tracing::info_span!("medical_knowledge_base").entered();
        let records = crate::lookup_topic(input);
        if records.is_empty() {
            return Ok(Self::not_found_message());
        }
        Ok(serde_json::to_string_pretty(&records)?)
    }
}

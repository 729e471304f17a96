use super::{AgentTool, ToolError};

/// Analyses pasted lab-report lines and returns the risk assessment as JSON.
pub struct GoutLabTool;

impl AgentTool for GoutLabTool {
    fn name(&self) -> &'static str {
        "gout_lab_analyzer"
    }

    fn description(&self) -> &'static str {
        "Gout lab report analyzer. Reads blood chemistry results, focusing on uric acid and \
         related inflammatory and kidney markers. Give one result per line with the test name, \
         value, unit and reference range, for example:\n\
         \"尿酸 520 umol/L (参考范围: 208-428)\"\n\
         \"C反应蛋白 15.2 mg/L (参考范围: <3.0)\"\n\
         Returns each marker's status, an overall gout risk level and recommendations."
    }

    fn call(&self, input: &str) -> Result<String, ToolError> {
        let _span = tracing::info_span!("gout_lab_analyzer").entered();
        let result = crate::extract_and_classify(input);
        Ok(serde_json::to_string_pretty(&result)?)
    }
}

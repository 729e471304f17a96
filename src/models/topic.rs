use serde::Serialize;

/// Static informational entry for one medical topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRecord {
    pub topic: &'static str,
    pub definition: &'static str,
    pub symptoms: &'static [&'static str],
    pub causes: &'static [&'static str],
    pub risk_factors: &'static [&'static str],
    pub diagnosis: &'static [&'static str],
    pub treatment: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub references: &'static [&'static str],
}

impl TopicRecord {
    /// Record with only the required fields; list sections start empty.
    pub const fn new(topic: &'static str, definition: &'static str) -> Self {
        Self {
            topic,
            definition,
            symptoms: &[],
            causes: &[],
            risk_factors: &[],
            diagnosis: &[],
            treatment: &[],
            prevention: &[],
            references: &[],
        }
    }
}

use serde::Serialize;

use crate::models::{Measurement, RiskLevel};

// ---------------------------------------------------------------------------
// RiskSignals
// ---------------------------------------------------------------------------

/// The three abnormality flags the risk decision is made from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskSignals {
    pub uric_acid_high: bool,
    pub inflammation_present: bool,
    pub kidney_issues: bool,
}

/// Which of the four fixed summary messages applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    /// Uric acid high with both inflammation and kidney involvement.
    Multiple,
    /// Uric acid high with exactly one of inflammation or kidney involvement.
    Combined,
    /// Uric acid high on its own.
    UricAcidOnly,
    /// Uric acid not high.
    Clear,
}

impl RiskSignals {
    pub fn tier(&self) -> RiskTier {
        match (self.uric_acid_high, self.inflammation_present, self.kidney_issues) {
            (true, true, true) => RiskTier::Multiple,
            (true, true, false) | (true, false, true) => RiskTier::Combined,
            (true, false, false) => RiskTier::UricAcidOnly,
            (false, _, _) => RiskTier::Clear,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self.tier() {
            RiskTier::Multiple => RiskLevel::High,
            RiskTier::Combined => RiskLevel::Medium,
            RiskTier::UricAcidOnly | RiskTier::Clear => RiskLevel::Low,
        }
    }

    pub fn follow_up_needed(&self) -> bool {
        self.uric_acid_high
    }
}

// ---------------------------------------------------------------------------
// ClassificationResult
// ---------------------------------------------------------------------------

/// Outcome of classifying one report's measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// First uric-acid reading in the report, if any.
    pub uric_acid: Option<Measurement>,
    pub inflammatory_markers: Vec<Measurement>,
    pub kidney_markers: Vec<Measurement>,
    pub risk_level: RiskLevel,
    pub follow_up_needed: bool,
    /// Most specific first, general advice after.
    pub recommendations: Vec<String>,
}

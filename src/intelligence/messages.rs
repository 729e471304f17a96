//! Fixed recommendation templates and their composition order.

use crate::models::Measurement;

use super::types::{RiskSignals, RiskTier};

/// Uric acid above this (µmol/L) gets the urgent-care message.
pub const URIC_ACID_URGENT_UMOL_L: f64 = 500.0;
/// Uric acid above this (µmol/L) gets the dietary message.
pub const URIC_ACID_DIET_UMOL_L: f64 = 450.0;

pub const URIC_ACID_URGENT: &str =
    "Uric acid is markedly elevated. See a doctor promptly and discuss urate-lowering medication.";
pub const URIC_ACID_DIET: &str =
    "Uric acid is elevated. Adjust your diet and limit high-purine foods.";

pub const SUMMARY_MULTIPLE: &str =
    "Several markers are abnormal. See a doctor promptly for a specialist treatment plan.";
pub const SUMMARY_COMBINED: &str =
    "See a doctor soon for further tests and evaluation.";
pub const SUMMARY_URIC_ACID_ONLY: &str =
    "Adjust your lifestyle and recheck your levels regularly.";
pub const SUMMARY_CLEAR: &str =
    "Results are broadly normal. Maintain a healthy lifestyle.";

pub const LIFESTYLE_ADVICE: [&str; 5] = [
    "Follow a low-purine diet: avoid organ meats, seafood and rich broths.",
    "Drink more water, at least 2000 ml a day.",
    "Limit alcohol, especially beer.",
    "Exercise moderately and avoid strenuous exertion.",
    "Keep your weight under control and avoid obesity.",
];

pub const KIDNEY_ADVICE: [&str; 3] = [
    "Protect kidney function and avoid nephrotoxic drugs.",
    "Keep blood pressure and blood glucose under control.",
    "Monitor kidney function markers regularly.",
];

/// Urgency message for a high uric-acid reading, if its value crosses a threshold.
pub fn uric_acid_message(uric_acid: &Measurement) -> Option<&'static str> {
    if !uric_acid.is_high() {
        return None;
    }
    if uric_acid.value() > URIC_ACID_URGENT_UMOL_L {
        Some(URIC_ACID_URGENT)
    } else if uric_acid.value() > URIC_ACID_DIET_UMOL_L {
        Some(URIC_ACID_DIET)
    } else {
        None
    }
}

pub fn summary_message(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Multiple => SUMMARY_MULTIPLE,
        RiskTier::Combined => SUMMARY_COMBINED,
        RiskTier::UricAcidOnly => SUMMARY_URIC_ACID_ONLY,
        RiskTier::Clear => SUMMARY_CLEAR,
    }
}

/// Build the ordered recommendation list. Never deduplicated.
pub fn compose_recommendations(
    uric_acid: Option<&Measurement>,
    signals: &RiskSignals,
) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(message) = uric_acid.and_then(uric_acid_message) {
        out.push(message.to_string());
    }

    out.push(summary_message(signals.tier()).to_string());

    if signals.uric_acid_high || signals.inflammation_present {
        out.extend(LIFESTYLE_ADVICE.iter().map(|s| s.to_string()));
    }

    if signals.kidney_issues {
        out.extend(KIDNEY_ADVICE.iter().map(|s| s.to_string()));
    }

    out
}

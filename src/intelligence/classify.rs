use crate::models::{MarkerCategory, Measurement};

// Aliases are matched as lowercase substrings of the parameter name.
// Each list carries the Chinese report term and its English equivalents.

const URIC_ACID_ALIASES: &[&str] = &["尿酸", "uric"];

const INFLAMMATION_ALIASES: &[&str] = &[
    "c反应蛋白", "crp", "c-reactive",
    "血沉", "esr", "sedimentation",
    "白细胞", "wbc", "white blood",
];

const KIDNEY_ALIASES: &[&str] = &[
    "肌酐", "creatinine",
    "尿素", "urea",
    "肾小球", "gfr", "filtration",
];

/// Subset of kidney aliases naming the filtration rate, where LOW is the bad direction.
const FILTRATION_RATE_ALIASES: &[&str] = &["肾小球", "gfr", "filtration"];

fn contains_any(lower: &str, aliases: &[&str]) -> bool {
    aliases.iter().any(|alias| lower.contains(alias))
}

/// Assign a clinical category from the parameter name (case-insensitive).
/// Categories are checked in declaration order; the first hit wins.
pub fn categorize(parameter: &str) -> MarkerCategory {
    let lower = parameter.to_lowercase();
    if contains_any(&lower, URIC_ACID_ALIASES) {
        MarkerCategory::UricAcid
    } else if contains_any(&lower, INFLAMMATION_ALIASES) {
        MarkerCategory::Inflammation
    } else if contains_any(&lower, KIDNEY_ALIASES) {
        MarkerCategory::Kidney
    } else {
        MarkerCategory::Unknown
    }
}

/// True when the parameter names a glomerular filtration rate.
pub fn is_filtration_rate(parameter: &str) -> bool {
    contains_any(&parameter.to_lowercase(), FILTRATION_RATE_ALIASES)
}

/// Kidney markers are abnormal when HIGH; filtration rate also when LOW.
pub fn kidney_marker_abnormal(measurement: &Measurement) -> bool {
    measurement.is_high() || (measurement.is_low() && is_filtration_rate(measurement.parameter()))
}

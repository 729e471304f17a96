//! Stage 1 of line parsing: split a report line into name, value, unit, and
//! the trailing text that may carry a reference notation.

use std::sync::LazyLock;

use regex::Regex;

/// Name (no digits), decimal value, unit token, remainder.
///
/// Unit tokens start with a letter, micro sign, `%` or `×` and may continue
/// with digits and superscripts so `×10⁹/L` and `ml/min/1.73m²` stay whole.
static SEGMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>[^0-9]+?)\s*(?P<value>[0-9]+(?:\.[0-9]*)?)\s*(?P<unit>[A-Za-zμµ%×][A-Za-z0-9μµ/×.%^⁰¹²³⁴⁵⁶⁷⁸⁹]*)(?P<rest>.*)$",
    )
    .expect("Invalid segment regex pattern")
});

/// The leading fields of a report line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<'a> {
    pub parameter: &'a str,
    pub value: f64,
    pub unit: &'a str,
    pub rest: &'a str,
}

/// Split a trimmed line into its leading fields.
/// Returns `None` when the line has no name, no number, or no unit.
pub fn split_segment(line: &str) -> Option<LineSegment<'_>> {
    let caps = SEGMENT_PATTERN.captures(line)?;

    let parameter = caps.name("name")?.as_str().trim();
    if parameter.is_empty() {
        return None;
    }
    let value: f64 = caps.name("value")?.as_str().parse().ok()?;

    Some(LineSegment {
        parameter,
        value,
        unit: caps.name("unit")?.as_str(),
        rest: caps.name("rest").map_or("", |m| m.as_str()),
    })
}

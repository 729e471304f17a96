//! Measurement extraction from free-form lab-report text.
//!
//! Each line is parsed on its own in two stages: [`segment::split_segment`]
//! reads name, value and unit, then [`reference::parse_reference`] reads the
//! bounds from whatever follows. Lines that fail either stage are skipped.

pub mod reference;
pub mod segment;

pub use reference::*;
pub use segment::*;

use crate::models::Measurement;

/// Why a line produced no measurement. Only used for trace output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    Blank,
    NoSegment,
    NoReference,
}

fn parse_line_inner(line: &str) -> Result<Measurement, SkipReason> {
    let line = line.trim();
    if line.is_empty() {
        return Err(SkipReason::Blank);
    }
    let seg = split_segment(line).ok_or(SkipReason::NoSegment)?;
    let bounds = parse_reference(seg.rest).ok_or(SkipReason::NoReference)?;
    Ok(Measurement::new(seg.parameter, seg.value, seg.unit, bounds))
}

/// Parse one report line. `None` when the line matches no known notation.
pub fn parse_line(line: &str) -> Option<Measurement> {
    parse_line_inner(line).ok()
}

/// Lazy sequence of measurements over the lines of a report.
///
/// A clone resumes from the current line, so clone before iterating to walk
/// the same text twice.
#[derive(Debug, Clone)]
pub struct Measurements<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl Iterator for Measurements<'_> {
    type Item = Measurement;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, line) in self.lines.by_ref() {
            match parse_line_inner(line) {
                Ok(measurement) => return Some(measurement),
                Err(SkipReason::Blank) => {}
                Err(reason) => {
                    tracing::trace!(line = index + 1, ?reason, "Skipped unrecognised report line");
                }
            }
        }
        None
    }
}

/// Extract every recognisable measurement from `text`, in line order.
pub fn extract_measurements(text: &str) -> Measurements<'_> {
    Measurements {
        lines: text.lines().enumerate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MeasurementStatus, UNBOUNDED_ABOVE};

    const REPORT: &str = "尿酸 520 umol/L (参考范围: 208-428)
C反应蛋白 15.2 mg/L (参考范围: <3.0)
血沉 45 mm/h (参考范围: <15)
肌酐 95 umol/L (参考范围: 54-106)";

    #[test]
    fn uric_acid_scenario() {
        let all: Vec<_> = extract_measurements("尿酸 520 umol/L (参考范围: 208-428)").collect();
        assert_eq!(all.len(), 1);
        let m = &all[0];
        assert_eq!(m.parameter(), "尿酸");
        assert_eq!(m.value(), 520.0);
        assert_eq!(m.unit(), "umol/L");
        assert_eq!(m.reference_min(), Some(208.0));
        assert_eq!(m.reference_max(), Some(428.0));
        assert_eq!(m.status(), MeasurementStatus::High);
    }

    #[test]
    fn extracts_report_in_line_order() {
        let names: Vec<String> = extract_measurements(REPORT)
            .map(|m| m.parameter().to_string())
            .collect();
        assert_eq!(names, vec!["尿酸", "C反应蛋白", "血沉", "肌酐"]);
    }

    #[test]
    fn labelled_upper_bound_is_read() {
        let crp = extract_measurements(REPORT).nth(1).unwrap();
        assert_eq!(crp.reference_min(), Some(0.0));
        assert_eq!(crp.reference_max(), Some(3.0));
        assert_eq!(crp.status(), MeasurementStatus::High);
    }

    #[test]
    fn value_equal_to_upper_bound_is_normal() {
        let m = parse_line("CRP 3.0 mg/L (<3.0)").unwrap();
        assert_eq!(m.reference_max(), Some(3.0));
        assert_eq!(m.reference_min(), Some(0.0));
        assert_eq!(m.status(), MeasurementStatus::Normal);
    }

    #[test]
    fn lower_bound_notation() {
        let m = parse_line("eGFR 55 ml/min/1.73m² (>90)").unwrap();
        assert_eq!(m.reference_min(), Some(90.0));
        assert_eq!(m.reference_max(), Some(UNBOUNDED_ABOVE));
        assert_eq!(m.status(), MeasurementStatus::Low);
    }

    #[test]
    fn range_bounds_kept_as_written() {
        for (line, low, high, status) in [
            ("肌酐 95 umol/L (参考范围: 54-106)", 54.0, 106.0, MeasurementStatus::Normal),
            ("尿素 9.5 mmol/L (2.5-7.1)", 2.5, 7.1, MeasurementStatus::High),
            ("WBC 3.1 ×10⁹/L (reference range: 4.0 - 10.0)", 4.0, 10.0, MeasurementStatus::Low),
        ] {
            let m = parse_line(line).unwrap();
            assert_eq!(m.reference_min(), Some(low), "{line}");
            assert_eq!(m.reference_max(), Some(high), "{line}");
            assert_eq!(m.status(), status, "{line}");
        }
    }

    #[test]
    fn invalid_data_yields_nothing() {
        assert_eq!(extract_measurements("invalid data").count(), 0);
        assert_eq!(extract_measurements("").count(), 0);
    }

    #[test]
    fn line_without_reference_is_skipped() {
        assert!(parse_line("尿酸 520 umol/L").is_none());
    }

    #[test]
    fn malformed_lines_do_not_stop_extraction() {
        let text = "报告单\n\n尿酸 300 umol/L (208-428)\n???\n血沉 8 mm/h (<15)\r\n";
        let all: Vec<_> = extract_measurements(text).collect();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].parameter(), "血沉");
    }

    #[test]
    fn sequence_is_restartable_by_clone() {
        let seq = extract_measurements(REPORT);
        let first: Vec<_> = seq.clone().collect();
        let second: Vec<_> = seq.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn parsing_is_deterministic() {
        let a: Vec<_> = extract_measurements(REPORT).collect();
        let b: Vec<_> = extract_measurements(REPORT).collect();
        assert_eq!(a, b);
        for m in &a {
            assert_eq!(
                MeasurementStatus::derive(m.value(), m.reference_min(), m.reference_max()),
                m.status()
            );
        }
    }
}

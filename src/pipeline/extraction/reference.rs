//! Stage 2 of line parsing: read reference bounds from the text after the unit.
//!
//! Two notations, tried in order:
//! 1. range: `参考范围: 208-428`, `(3.5 ~ 7.2)`, `ref 4 to 10`
//! 2. single bound in brackets: `(<3.0)`, `（参考值：>90）`, `[≤15]`

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ReferenceBounds;

const LABEL: &str =
    r"(?:参考范围|参考范|参考值|参考区间|正常范围|reference\s+range|reference|ref)\s*[:：]?\s*";
const NUMBER: &str = r"[0-9]+(?:\.[0-9]*)?";

static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(?:{LABEL})?[<>＜＞]?\s*(?P<low>{NUMBER})\s*(?:[-－–—~～至]|to)\s*(?P<high>{NUMBER})"
    ))
    .expect("Invalid range regex pattern")
});

static BOUND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)[（(\[【]\s*(?:{LABEL})?(?P<op>[<>＜＞≤≥]?)\s*(?P<limit>{NUMBER})\s*[）)\]】]?"
    ))
    .expect("Invalid bound regex pattern")
});

/// Comparator in front of a single bracketed bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparator {
    Below,
    Above,
    Unstated,
}

impl Comparator {
    fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "<" | "＜" | "≤" => Self::Below,
            ">" | "＞" | "≥" => Self::Above,
            _ => Self::Unstated,
        }
    }
}

/// Match a `low - high` range anywhere in `text`.
pub fn match_range(text: &str) -> Option<ReferenceBounds> {
    let caps = RANGE_PATTERN.captures(text)?;
    let low: f64 = caps.name("low")?.as_str().parse().ok()?;
    let high: f64 = caps.name("high")?.as_str().parse().ok()?;
    Some(ReferenceBounds::range(low, high))
}

/// Match a bracketed single bound anywhere in `text`.
///
/// A bracketed number without a comparator still matches but sets no bounds.
pub fn match_bound(text: &str) -> Option<ReferenceBounds> {
    let caps = BOUND_PATTERN.captures(text)?;
    let limit: f64 = caps.name("limit")?.as_str().parse().ok()?;
    let op = caps.name("op").map_or("", |m| m.as_str());

    Some(match Comparator::from_symbol(op) {
        Comparator::Below => ReferenceBounds::below(limit),
        Comparator::Above => ReferenceBounds::above(limit),
        Comparator::Unstated => ReferenceBounds::default(),
    })
}

/// Range notation wins when both could apply.
pub fn parse_reference(text: &str) -> Option<ReferenceBounds> {
    match_range(text).or_else(|| match_bound(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNBOUNDED_ABOVE;

    #[test]
    fn range_with_chinese_label() {
        assert_eq!(
            match_range(" (参考范围: 208-428)"),
            Some(ReferenceBounds::range(208.0, 428.0))
        );
    }

    #[test]
    fn range_with_full_width_colon_and_tilde() {
        assert_eq!(
            match_range("（参考值：3.5～7.2）"),
            Some(ReferenceBounds::range(3.5, 7.2))
        );
    }

    #[test]
    fn range_with_cjk_to_glyph() {
        assert_eq!(
            match_range("参考区间 54至106"),
            Some(ReferenceBounds::range(54.0, 106.0))
        );
    }

    #[test]
    fn range_with_english_label_and_word_separator() {
        assert_eq!(
            match_range("(Reference Range: 4.0 to 10.0)"),
            Some(ReferenceBounds::range(4.0, 10.0))
        );
    }

    #[test]
    fn range_without_label() {
        assert_eq!(
            match_range(" 2.5 - 7.1"),
            Some(ReferenceBounds::range(2.5, 7.1))
        );
    }

    #[test]
    fn range_ignores_single_bound() {
        assert_eq!(match_range("(参考范围: <3.0)"), None);
    }

    #[test]
    fn bound_below() {
        assert_eq!(match_bound(" (<3.0)"), Some(ReferenceBounds::below(3.0)));
    }

    #[test]
    fn bound_below_with_label() {
        assert_eq!(
            match_bound(" (参考范围: <3.0)"),
            Some(ReferenceBounds::below(3.0))
        );
    }

    #[test]
    fn bound_above_full_width() {
        let bounds = match_bound("（参考值：＞90）").unwrap();
        assert_eq!(bounds.min, Some(90.0));
        assert_eq!(bounds.max, Some(UNBOUNDED_ABOVE));
    }

    #[test]
    fn bound_inclusive_comparators() {
        assert_eq!(match_bound("[≤15]"), Some(ReferenceBounds::below(15.0)));
        assert_eq!(match_bound("【≥60】"), Some(ReferenceBounds::above(60.0)));
    }

    #[test]
    fn bound_without_comparator_sets_nothing() {
        assert_eq!(match_bound("(3.0)"), Some(ReferenceBounds::default()));
    }

    #[test]
    fn bound_requires_bracket() {
        assert_eq!(match_bound(" <3.0"), None);
    }

    #[test]
    fn range_takes_priority() {
        assert_eq!(
            parse_reference("(参考范围: 208-428)"),
            Some(ReferenceBounds::range(208.0, 428.0))
        );
    }

    #[test]
    fn nothing_recognisable() {
        assert_eq!(parse_reference(" positive"), None);
        assert_eq!(parse_reference(""), None);
    }
}

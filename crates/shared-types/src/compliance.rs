//! Pass/fail evaluation of compliance metrics.
//!
//! Shared by the admin tile editor (live preview) and the public detail
//! page so both always agree on a metric's result.

use crate::shariah::{ComparisonType, ComplianceMetric};
use regex::Regex;
use std::sync::LazyLock;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(\.\d+)?").expect("number pattern compiles"));

/// Tolerance for `ComparisonType::Equal`.
pub const EQUALITY_EPSILON: f64 = 0.001;

/// Extract the first signed decimal number from free text.
///
/// Thousands separators are removed first, so `"1,250.5 M"` yields `1250.5`.
pub fn parse_numeric_value(text: &str) -> Option<f64> {
    let cleaned = text.replace(',', "");
    NUMBER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Decide whether a metric passes.
///
/// Custom metrics pass unless their status is `fail`. Numeric comparisons
/// pass when either side has no number in it: unparsable data fails open.
pub fn evaluate_metric(metric: &ComplianceMetric) -> bool {
    if metric.comparison_type == ComparisonType::Custom {
        return !metric
            .custom_status
            .as_deref()
            .is_some_and(|s| s.trim().eq_ignore_ascii_case("fail"));
    }

    let (Some(actual), Some(threshold)) = (
        parse_numeric_value(&metric.actual),
        parse_numeric_value(&metric.threshold),
    ) else {
        return true;
    };

    match metric.comparison_type {
        ComparisonType::LessThan => actual <= threshold,
        ComparisonType::GreaterThan => actual >= threshold,
        ComparisonType::Equal => (actual - threshold).abs() < EQUALITY_EPSILON,
        ComparisonType::Custom | ComparisonType::Unrecognized => true,
    }
}

/// Display result of a metric evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricOutcome {
    Pass,
    Fail,
}

impl MetricOutcome {
    pub fn of(metric: &ComplianceMetric) -> Self {
        if evaluate_metric(metric) {
            MetricOutcome::Pass
        } else {
            MetricOutcome::Fail
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricOutcome::Pass => "Pass",
            MetricOutcome::Fail => "Fail",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, MetricOutcome::Pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(actual: &str, threshold: &str, comparison: ComparisonType) -> ComplianceMetric {
        ComplianceMetric {
            criteria: "Debt ratio".into(),
            threshold: threshold.into(),
            actual: actual.into(),
            comparison_type: comparison,
            custom_status: None,
        }
    }

    fn custom(status: Option<&str>) -> ComplianceMetric {
        ComplianceMetric {
            criteria: "Business activity".into(),
            threshold: "Halal".into(),
            actual: "Halal".into(),
            comparison_type: ComparisonType::Custom,
            custom_status: status.map(str::to_string),
        }
    }

    #[test]
    fn parses_percentages_and_embedded_numbers() {
        assert_eq!(parse_numeric_value("33%"), Some(33.0));
        assert_eq!(parse_numeric_value("< 5%"), Some(5.0));
        assert_eq!(parse_numeric_value("Halal"), None);
        assert_eq!(parse_numeric_value(""), None);
    }

    #[test]
    fn parses_negative_decimal_and_thousands() {
        assert_eq!(parse_numeric_value("-2.75x"), Some(-2.75));
        assert_eq!(parse_numeric_value("$1,250,000.50"), Some(1_250_000.5));
        assert_eq!(parse_numeric_value("ratio 0.3 of 1.0"), Some(0.3));
    }

    #[test]
    fn trailing_dot_is_not_part_of_the_number() {
        assert_eq!(parse_numeric_value("12."), Some(12.0));
    }

    #[test]
    fn less_than_examples() {
        assert!(evaluate_metric(&metric("0%", "33%", ComparisonType::LessThan)));
        assert!(!evaluate_metric(&metric("40%", "33%", ComparisonType::LessThan)));
        assert!(evaluate_metric(&metric("33%", "33%", ComparisonType::LessThan)));
    }

    #[test]
    fn greater_than_is_inclusive() {
        assert!(evaluate_metric(&metric("50", "50", ComparisonType::GreaterThan)));
        assert!(evaluate_metric(&metric("51", "50", ComparisonType::GreaterThan)));
        assert!(!evaluate_metric(&metric("49.9", "50", ComparisonType::GreaterThan)));
    }

    #[test]
    fn equal_uses_tolerance() {
        assert!(evaluate_metric(&metric("50%", "50%", ComparisonType::Equal)));
        assert!(evaluate_metric(&metric("50.0004", "50", ComparisonType::Equal)));
        assert!(!evaluate_metric(&metric("50.01", "50", ComparisonType::Equal)));
    }

    #[test]
    fn custom_status_decides() {
        assert!(!evaluate_metric(&custom(Some("fail"))));
        assert!(!evaluate_metric(&custom(Some("FAIL"))));
        assert!(evaluate_metric(&custom(Some("pass"))));
        assert!(evaluate_metric(&custom(None)));
    }

    #[test]
    fn custom_ignores_numbers() {
        let mut m = metric("90%", "10%", ComparisonType::Custom);
        m.custom_status = Some("pass".into());
        assert!(evaluate_metric(&m));
    }

    #[test]
    fn unparsable_values_fail_open() {
        assert!(evaluate_metric(&metric("n/a", "33%", ComparisonType::LessThan)));
        assert!(evaluate_metric(&metric("40%", "none", ComparisonType::LessThan)));
    }

    #[test]
    fn unrecognized_comparison_passes() {
        assert!(evaluate_metric(&metric("99", "1", ComparisonType::Unrecognized)));
    }

    #[test]
    fn labels() {
        assert_eq!(MetricOutcome::of(&metric("40%", "33%", ComparisonType::LessThan)).label(), "Fail");
        assert_eq!(MetricOutcome::of(&custom(None)).label(), "Pass");
    }
}

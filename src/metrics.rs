// Report metric extraction
//
// The analysis pipeline writes human-readable report files; the few numbers
// the dashboard needs are scraped back out of that text via labeled-line
// patterns. Fields that are missing or malformed are simply absent from the
// result and the caller substitutes its configured defaults.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

/// A single metric value parsed out of report text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl MetricValue {
    /// Numeric payload, if this metric parsed as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricValue::Number(v) => Some(*v),
            MetricValue::Text(_) => None,
        }
    }

    /// Text payload, if this metric is a string field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetricValue::Number(_) => None,
            MetricValue::Text(s) => Some(s.as_str()),
        }
    }
}

/// Metric name → value, containing only the fields that were found and parsed.
pub type MetricSet = BTreeMap<&'static str, MetricValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetricKind {
    Number,
    Text,
}

struct LabelPattern {
    name: &'static str,
    kind: MetricKind,
    pattern: &'static str,
}

// The known metric fields and their labeled-line shapes. Patterns are
// searched independently anywhere in the text; first match wins.
const KNOWN_METRICS: &[LabelPattern] = &[
    LabelPattern {
        name: "correlation",
        kind: MetricKind::Number,
        pattern: r"Correlation coefficient: ([\d.-]+)",
    },
    LabelPattern {
        name: "elasticity",
        kind: MetricKind::Number,
        pattern: r"Elasticity: ([\d.-]+)%",
    },
    LabelPattern {
        name: "wettest_month",
        kind: MetricKind::Text,
        pattern: r"Wettest month: (\w+)",
    },
];

static COMPILED: Lazy<Vec<Regex>> = Lazy::new(|| {
    KNOWN_METRICS
        .iter()
        .map(|m| Regex::new(m.pattern).expect("static metric pattern"))
        .collect()
});

/// Scan report text for every known metric field.
///
/// Pure function of its input: no I/O, no side effects. A field appears in
/// the result only if its pattern matched and (for numeric fields) the
/// captured token parsed as `f64`; anything else is omitted rather than
/// reported as an error.
pub fn extract_metrics(report: &str) -> MetricSet {
    let mut found = MetricSet::new();

    for (field, re) in KNOWN_METRICS.iter().zip(COMPILED.iter()) {
        let Some(caps) = re.captures(report) else {
            continue;
        };
        // Capture group 1 is the value token in every known pattern
        let raw = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

        match field.kind {
            MetricKind::Number => {
                // A token like "-" or "1.2.3" matches the pattern but is not
                // a number; treat it the same as a missing field
                if let Ok(value) = raw.parse::<f64>() {
                    found.insert(field.name, MetricValue::Number(value));
                }
            }
            MetricKind::Text => {
                found.insert(field.name, MetricValue::Text(raw.to_string()));
            }
        }
    }

    found
}

/// Numeric metric lookup with a caller-supplied default for absent fields.
pub fn number_or(metrics: &MetricSet, name: &str, default: f64) -> f64 {
    metrics
        .get(name)
        .and_then(MetricValue::as_number)
        .unwrap_or(default)
}

/// Text metric lookup with a caller-supplied default for absent fields.
pub fn text_or<'a>(metrics: &'a MetricSet, name: &str, default: &'a str) -> &'a str {
    metrics
        .get(name)
        .and_then(MetricValue::as_text)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_line_is_extracted() {
        let metrics = extract_metrics("Correlation coefficient: 0.041");
        assert_eq!(
            metrics.get("correlation"),
            Some(&MetricValue::Number(0.041))
        );
        assert_eq!(metrics.len(), 1, "only the matched field should appear");
    }

    #[test]
    fn missing_elasticity_falls_back_to_default() {
        let metrics = extract_metrics("Correlation coefficient: 0.041\n");
        assert!(!metrics.contains_key("elasticity"));
        assert_eq!(number_or(&metrics, "elasticity", -0.40), -0.40);
    }

    #[test]
    fn malformed_number_is_omitted_not_an_error() {
        let metrics = extract_metrics("Correlation coefficient: N/A\n");
        assert!(!metrics.contains_key("correlation"));
    }

    #[test]
    fn unparseable_numeric_token_is_omitted() {
        // "-" and "1.2.3" match the pattern's character class but fail parse
        let metrics = extract_metrics("Correlation coefficient: -\nElasticity: 1.2.3%\n");
        assert!(metrics.is_empty());
    }

    #[test]
    fn full_report_extracts_all_three_fields() {
        let body = "Correlation coefficient: 0.041\nElasticity: -0.40%\nWettest month: May\n";
        let metrics = extract_metrics(body);

        assert_eq!(metrics.len(), 3);
        assert_eq!(
            metrics.get("correlation"),
            Some(&MetricValue::Number(0.041))
        );
        assert_eq!(metrics.get("elasticity"), Some(&MetricValue::Number(-0.40)));
        assert_eq!(
            metrics.get("wettest_month"),
            Some(&MetricValue::Text("May".to_string()))
        );
    }

    #[test]
    fn fields_are_found_regardless_of_order_and_surrounding_prose() {
        let body = "RAIN TAX ACADEMIC REPORT\n\nWettest month: September\n\
                    Some discussion paragraph.\nElasticity: -1.25%\n\
                    Appendix. Correlation coefficient: -0.300 (weak)\n";
        let metrics = extract_metrics(body);

        assert_eq!(number_or(&metrics, "correlation", 0.0), -0.300);
        assert_eq!(number_or(&metrics, "elasticity", 0.0), -1.25);
        assert_eq!(text_or(&metrics, "wettest_month", "?"), "September");
    }

    #[test]
    fn first_match_wins_for_repeated_labels() {
        let body = "Elasticity: -0.40%\nElasticity: -9.99%\n";
        let metrics = extract_metrics(body);
        assert_eq!(number_or(&metrics, "elasticity", 0.0), -0.40);
    }

    #[test]
    fn month_token_is_returned_verbatim() {
        let metrics = extract_metrics("Wettest month: May 2025\n");
        // \w+ captures a single word token; trailing text is not part of it
        assert_eq!(text_or(&metrics, "wettest_month", "?"), "May");
    }

    #[test]
    fn empty_text_yields_empty_set() {
        assert!(extract_metrics("").is_empty());
    }
}

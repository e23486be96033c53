//! Type definitions for dataset statistics

use std::fmt;

use serde::{Deserialize, Serialize};

/// Descriptive statistics for a single dataset.
///
/// Produced fresh by [`crate::summary`]; the library keeps no reference to
/// it. Serializes with camelCase field names, so the JSON shape carries
/// `standardDeviation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticalSummary {
    /// Arithmetic mean
    pub average: f64,
    /// Largest value
    pub maximum: f64,
    /// Middle value of the sorted dataset
    pub median: f64,
    /// Smallest value
    pub minimum: f64,
    /// Most frequent values, ascending and deduplicated
    pub mode: Vec<f64>,
    /// Maximum minus minimum
    pub range: f64,
    /// Population standard deviation
    pub standard_deviation: f64,
}

impl fmt::Display for StatisticalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = self
            .mode
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "avg {} | median {} | min {} | max {} | range {} | mode [{}] | std dev {}",
            self.average,
            self.median,
            self.minimum,
            self.maximum,
            self.range,
            mode,
            self.standard_deviation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StatisticalSummary {
        StatisticalSummary {
            average: 3.0,
            maximum: 5.0,
            median: 3.0,
            minimum: 1.0,
            mode: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            range: 4.0,
            standard_deviation: 2.0_f64.sqrt(),
        }
    }

    #[test]
    fn test_display_is_one_line_with_all_stats() {
        let summary = StatisticalSummary {
            average: 2.0,
            maximum: 2.0,
            median: 2.0,
            minimum: 2.0,
            mode: vec![2.0],
            range: 0.0,
            standard_deviation: 0.0,
        };
        assert_eq!(
            summary.to_string(),
            "avg 2 | median 2 | min 2 | max 2 | range 0 | mode [2] | std dev 0"
        );
    }

    #[test]
    fn test_display_joins_multiple_modes() {
        let display = sample().to_string();
        assert!(display.contains("mode [1, 2, 3, 4, 5]"));
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "average",
            "maximum",
            "median",
            "minimum",
            "mode",
            "range",
            "standardDeviation",
        ] {
            assert!(object.contains_key(key), "missing key: {key}");
        }
        assert!(!object.contains_key("standard_deviation"));
    }

    #[test]
    fn test_deserializes_from_camel_case() {
        let json = r#"{
            "average": 1.75,
            "maximum": 3.0,
            "median": 1.5,
            "minimum": 1.0,
            "mode": [1.0],
            "range": 2.0,
            "standardDeviation": 0.5
        }"#;
        let summary: StatisticalSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.median, 1.5);
        assert_eq!(summary.standard_deviation, 0.5);
        assert_eq!(summary.mode, vec![1.0]);
    }
}

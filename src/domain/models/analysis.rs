//! Analysis payloads returned by simulated operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a data point: a percentage/score or a label such as a count with units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 => write!(f, "{n:.0}"),
            Self::Number(n) => write!(f, "{n:.1}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for DataValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Labelled value attached to an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: DataValue,
}

/// Result of one completed simulated operation.
///
/// Built fresh for each call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub title: String,
    pub summary: String,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_points: Option<Vec<DataPoint>>,
}

impl AnalysisResult {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            recommendations: Vec::new(),
            data_points: None,
        }
    }

    /// Append a recommendation.
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendations.push(recommendation.into());
        self
    }

    /// Append a data point.
    pub fn with_data_point(mut self, label: impl Into<String>, value: impl Into<DataValue>) -> Self {
        self.data_points
            .get_or_insert_with(Vec::new)
            .push(DataPoint {
                label: label.into(),
                value: value.into(),
            });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_points_in_order() {
        let result = AnalysisResult::new("Title", "Summary")
            .with_recommendation("first")
            .with_recommendation("second")
            .with_data_point("Acceptance", 72.5)
            .with_data_point("Applicants", "50 files");

        assert_eq!(result.recommendations, vec!["first", "second"]);
        let points = result.data_points.unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].value, DataValue::Number(72.5));
        assert_eq!(points[1].value, DataValue::Text("50 files".to_string()));
    }

    #[test]
    fn test_data_value_untagged_serialization() {
        let json = serde_json::to_string(&DataValue::from(12u32)).unwrap();
        assert_eq!(json, "12.0");
        let text: DataValue = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(text, DataValue::Text("high".to_string()));
    }

    #[test]
    fn test_data_value_display() {
        assert_eq!(DataValue::Number(40.0).to_string(), "40");
        assert_eq!(DataValue::Number(12.34).to_string(), "12.3");
        assert_eq!(DataValue::from("n/a").to_string(), "n/a");
    }

    #[test]
    fn test_points_omitted_when_absent() {
        let json = serde_json::to_value(AnalysisResult::new("t", "s")).unwrap();
        assert!(json.get("data_points").is_none());
    }
}

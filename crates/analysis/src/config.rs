//! Analysis options.
//!
//! Thresholds, lexicons and weights are fixed tables so that scores stay
//! comparable between runs; only caller-facing behavior is configurable.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Options controlling an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Reject transcripts with no words instead of scoring them
    pub strict: bool,
    /// Number of recommendation titles carried into the summary
    pub top_recommendations: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            strict: false,
            top_recommendations: 3,
        }
    }
}

impl AnalysisOptions {
    /// Options with strict transcript checking enabled.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Read options from a JSON document; missing fields take their defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| AnalysisError::InvalidOptions {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = AnalysisOptions::default();
        assert!(!options.strict);
        assert_eq!(options.top_recommendations, 3);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let options = AnalysisOptions::from_json(r#"{"strict": true}"#).unwrap();
        assert_eq!(options, AnalysisOptions::strict());
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = AnalysisOptions::from_json(r#"{"top_recommendations": "many"}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidOptions { .. }));
    }
}

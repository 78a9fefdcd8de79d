//! JSON reporter for machine-readable output

use crate::AnalysisResults;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Serialize one analysis run as JSON
    pub fn report(&self, results: &AnalysisResults) -> String {
        if self.pretty {
            serde_json::to_string_pretty(results).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(results).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{AnalysisEngine, AnalysisRequest};

    fn sample_results() -> AnalysisResults {
        AnalysisEngine::without_ai()
            .analyze(&AnalysisRequest::new("Some content.").with_keyword("content"))
            .unwrap()
    }

    #[test]
    fn compact_output_parses_back() {
        let reporter = JsonReporter::new();
        let json = reporter.report(&sample_results());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["targetKeyword"], "content");
        assert_eq!(parsed["serp"]["predictedRank"], "Unknown");
    }

    #[test]
    fn pretty_output_is_multiline() {
        let reporter = JsonReporter::new().pretty();
        let json = reporter.report(&sample_results());
        assert!(json.contains('\n'));
    }
}

//! Plain-text report, suitable for saving or piping.
//!
//! Section order is fixed: SEO, SERP, AEO, Humanization, Differentiation,
//! then Engagement when present.

use crate::{AnalysisResults, ScoreResult};
use std::fmt::Write;

/// Reporter for the exportable plain-text format
pub struct TextReporter;

impl TextReporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the full report as a string.
    pub fn report(&self, results: &AnalysisResults) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "CONTENT QUALITY REPORT");
        let _ = writeln!(out, "Generated: {}", results.timestamp);
        if let Some(ref keyword) = results.target_keyword {
            let _ = writeln!(out, "Target keyword: {}", keyword);
        }
        let _ = writeln!(out, "Overall score: {}/100", results.overall_score());

        self.write_section(&mut out, "SEO", &results.seo);
        self.write_section(&mut out, "SERP", &results.serp);
        self.write_section(&mut out, "AEO", &results.aeo);
        self.write_section(&mut out, "Humanization", &results.humanization);
        self.write_section(&mut out, "Differentiation", &results.differentiation);
        if let Some(ref engagement) = results.engagement {
            self.write_section(&mut out, "Engagement", engagement);
        }

        if let Some(ref gaps) = results.gap_analysis {
            let _ = writeln!(out, "\n== Content Gaps ==");
            for element in &gaps.missing_elements {
                let _ = writeln!(out, "  - {}", element);
            }
        }

        out
    }

    fn write_section(&self, out: &mut String, name: &str, result: &ScoreResult) {
        let _ = writeln!(out, "\n== {}: {}/100 ==", name, result.score);
        if let Some(ref rank) = result.predicted_rank {
            let _ = writeln!(out, "Predicted rank: {}", rank);
        }
        if !result.issues.is_empty() {
            let _ = writeln!(out, "Issues:");
            for issue in &result.issues {
                let _ = writeln!(out, "  - {}", issue);
            }
        }
        if !result.recommendations.is_empty() {
            let _ = writeln!(out, "Recommendations:");
            for recommendation in &result.recommendations {
                let _ = writeln!(out, "  - {}", recommendation);
            }
        }
        if let Some(ref metrics) = result.metrics {
            let _ = writeln!(out, "Metrics:");
            for (key, value) in metrics {
                let _ = writeln!(out, "  {}: {}", key, value);
            }
        }
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

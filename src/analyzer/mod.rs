//! Heuristic analyzers and the aggregation engine.
//!
//! Every analyzer is a pure function from content to a `ScoreResult`: it
//! evaluates an ordered list of independent rule checks, and failed checks
//! are folded into the score. Check order is part of the output contract,
//! since only the first five recommendations survive truncation.

pub mod aeo;
pub mod differentiation;
pub mod engagement;
pub mod engine;
pub mod extended;
pub mod humanization;
pub mod seo;
pub mod serp;

pub use engine::{AnalysisEngine, AnalysisRequest, AnalyzeError, EngineOptions};

use crate::ScoreResult;

/// Recommendations are capped at this many entries, in evaluation order.
pub(crate) const MAX_RECOMMENDATIONS: usize = 5;

/// One failed rule check: the penalty it costs plus the issue and
/// recommendation it contributes.
#[derive(Debug, Clone)]
pub(crate) struct FailedCheck {
    pub penalty: u8,
    pub issue: String,
    pub recommendation: String,
}

/// Evaluate a single rule check. Returns the failure record when `failed`
/// is true, `None` otherwise.
pub(crate) fn check(
    failed: bool,
    penalty: u8,
    issue: impl Into<String>,
    recommendation: impl Into<String>,
) -> Option<FailedCheck> {
    failed.then(|| FailedCheck {
        penalty,
        issue: issue.into(),
        recommendation: recommendation.into(),
    })
}

/// Fold failed checks into a `ScoreResult`: score is 100 minus the summed
/// penalties, floored at 0; issues keep evaluation order; recommendations
/// truncate to the first five.
pub(crate) fn fold_checks(failed: impl IntoIterator<Item = FailedCheck>) -> ScoreResult {
    let mut penalty_total: u32 = 0;
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();
    for check in failed {
        penalty_total += check.penalty as u32;
        issues.push(check.issue);
        if recommendations.len() < MAX_RECOMMENDATIONS {
            recommendations.push(check.recommendation);
        }
    }
    ScoreResult {
        score: 100u32.saturating_sub(penalty_total).min(100) as u8,
        issues,
        recommendations,
        metrics: None,
        predicted_rank: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(penalty: u8, tag: &str) -> FailedCheck {
        FailedCheck {
            penalty,
            issue: format!("issue {}", tag),
            recommendation: format!("rec {}", tag),
        }
    }

    #[test]
    fn no_failures_is_perfect_score() {
        let result = fold_checks(Vec::new());
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn penalties_subtract_from_one_hundred() {
        let result = fold_checks(vec![failed(15, "a"), failed(10, "b")]);
        assert_eq!(result.score, 75);
        assert_eq!(result.issues, vec!["issue a", "issue b"]);
    }

    #[test]
    fn score_floors_at_zero() {
        let result = fold_checks(vec![
            failed(20, "a"),
            failed(20, "b"),
            failed(20, "c"),
            failed(20, "d"),
            failed(20, "e"),
            failed(20, "f"),
        ]);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn recommendations_truncate_to_five_in_order() {
        let result = fold_checks((0..7).map(|i| failed(5, &i.to_string())));
        assert_eq!(result.issues.len(), 7);
        assert_eq!(result.recommendations.len(), 5);
        assert_eq!(result.recommendations[0], "rec 0");
        assert_eq!(result.recommendations[4], "rec 4");
    }

    #[test]
    fn check_passes_produce_none() {
        assert!(check(false, 10, "i", "r").is_none());
        let c = check(true, 10, "i", "r").unwrap();
        assert_eq!(c.penalty, 10);
    }
}

//! Differentiation analyzer: uniqueness vs. generic competitor coverage.
//!
//! Local heuristics plus one line of AI commentary, with the same
//! degrade-don't-crash policy as the SERP analyzer.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{check, fold_checks};
use crate::ai::{AiClient, AiTask};
use crate::ScoreResult;

static EXAMPLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)for example|for instance|case study|real-world|we worked with").unwrap()
});

static DISCOVERY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bi found\b|\bwe found\b|\bwe discovered\b|in my experience|\bi tested\b|\bwe tested\b")
        .unwrap()
});

static OPINION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bi think\b|\bi believe\b|in my opinion|\bmy take\b").unwrap());

pub(crate) fn has_examples(content: &str) -> bool {
    EXAMPLE_RE.is_match(content)
}

fn local_result(content: &str, current_year: i32) -> ScoreResult {
    let failed = [
        check(
            !has_examples(content),
            20,
            "No concrete examples or case studies",
            "Walk through a real example instead of describing the idea abstractly",
        ),
        check(
            !DISCOVERY_RE.is_match(content),
            15,
            "No first-hand findings",
            "Share what you found or tested yourself",
        ),
        check(
            !OPINION_RE.is_match(content),
            15,
            "No stated point of view",
            "Take a position instead of summarizing the consensus",
        ),
        check(
            !content.contains(&current_year.to_string()),
            10,
            "No reference to the current year",
            "Date the content so readers know it is current",
        ),
    ];

    fold_checks(failed.into_iter().flatten())
}

/// The documented degraded result used whenever the external call fails.
pub fn fallback() -> ScoreResult {
    ScoreResult {
        score: 60,
        issues: vec!["Unable to perform differentiation analysis".to_string()],
        recommendations: vec!["Check API configuration and try again".to_string()],
        metrics: None,
        predicted_rank: None,
    }
}

/// Score content uniqueness, folding in one line of AI commentary.
pub fn analyze(content: &str, client: &AiClient) -> ScoreResult {
    match client.commentary(AiTask::Differentiation, content) {
        Ok(commentary) => {
            let mut result = local_result(content, Utc::now().year());
            result.issues.push(commentary);
            result
                .recommendations
                .push("Lean into the angle identified above".to_string());
            result
        }
        Err(_) => fallback(),
    }
}

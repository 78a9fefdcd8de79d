//! SERP analyzer: competitiveness against pages already ranking.
//!
//! Local heuristics plus one line of AI commentary. If the external call
//! fails the analyzer degrades to a fixed fallback result instead of
//! propagating the error.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{check, fold_checks};
use crate::ai::{AiClient, AiTask};
use crate::text;
use crate::ScoreResult;

const COMPETITIVE_WORDS: usize = 1000;
const TOP_RANK_WORDS: usize = 1500;

static STATISTIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+(?:\.\d+)?%|\b\d+ (?:percent|million|billion|times|out of)\b").unwrap()
});

static CITATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)according to|\bstudy\b|\bstudies\b|\bresearch\b|\bsource\b|\bsurvey\b")
        .unwrap()
});

pub(crate) fn has_statistics(content: &str) -> bool {
    STATISTIC_RE.is_match(content)
}

pub(crate) fn has_citations(content: &str) -> bool {
    CITATION_RE.is_match(content)
}

fn local_result(content: &str) -> ScoreResult {
    let words = text::word_count(content);

    let failed = [
        check(
            words < COMPETITIVE_WORDS,
            20,
            "Content is shorter than typical top-ranking pages",
            "Expand coverage toward 1000+ words of substantive material",
        ),
        check(
            !has_statistics(content),
            15,
            "No statistics or data points cited",
            "Add concrete numbers to back up the main claims",
        ),
        check(
            !has_citations(content),
            10,
            "No sources or research cited",
            "Reference authoritative studies or sources by name",
        ),
    ];

    let mut result = fold_checks(failed.into_iter().flatten());
    result.predicted_rank = Some(if words >= TOP_RANK_WORDS {
        "Top 10 potential".to_string()
    } else {
        "Page 2-3".to_string()
    });
    result
}

/// The documented degraded result used whenever the external call fails.
pub fn fallback() -> ScoreResult {
    ScoreResult {
        score: 50,
        issues: vec!["Unable to perform full SERP analysis".to_string()],
        recommendations: vec!["Check API configuration and try again".to_string()],
        metrics: None,
        predicted_rank: Some("Unknown".to_string()),
    }
}

/// Score SERP competitiveness, folding in one line of AI commentary.
pub fn analyze(content: &str, client: &AiClient) -> ScoreResult {
    match client.commentary(AiTask::SerpCompetitiveness, content) {
        Ok(commentary) => {
            let mut result = local_result(content);
            result.issues.push(commentary);
            result
                .recommendations
                .push("Address the competitive gap identified above".to_string());
            result
        }
        Err(_) => fallback(),
    }
}

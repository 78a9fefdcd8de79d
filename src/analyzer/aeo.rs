//! AEO analyzer: how well the content serves answer engines.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{check, fold_checks};
use crate::text;
use crate::ScoreResult;

const MIN_LIST_LINES: usize = 3;
const MAX_AVG_PARAGRAPH_CHARS: f64 = 500.0;

static FAQ_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bfaq\b|frequently asked|what is\b|how do\b|why do\b|can you\b").unwrap()
});

static HOW_TO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)step-by-step|\bstep \d|\bhow to\b|follow these|first,").unwrap()
});

static DEFINITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)is defined as|refers to|means that|\bis a\b|\bare a\b").unwrap()
});

pub(crate) fn has_faq(content: &str) -> bool {
    FAQ_RE.is_match(content)
}

pub(crate) fn has_how_to(content: &str) -> bool {
    HOW_TO_RE.is_match(content)
}

pub(crate) fn has_definition(content: &str) -> bool {
    DEFINITION_RE.is_match(content)
}

/// Score the content for answer-engine consumption: direct questions,
/// liftable lists, short blocks, procedures, and definitions.
pub fn analyze(content: &str) -> ScoreResult {
    let avg_paragraph = text::avg_paragraph_chars(content);

    let failed = [
        check(
            !has_faq(content),
            15,
            "No FAQ-style questions found",
            "Add an FAQ section that answers common questions directly",
        ),
        check(
            text::list_line_count(content) < MIN_LIST_LINES,
            10,
            "Fewer than 3 structured list items",
            "Use bulleted or numbered lists so answer engines can lift key points",
        ),
        check(
            avg_paragraph > MAX_AVG_PARAGRAPH_CHARS,
            15,
            "Paragraphs average over 500 characters",
            "Split long paragraphs into short, self-contained blocks",
        ),
        check(
            !has_how_to(content),
            10,
            "No step-by-step instructions found",
            "Add a numbered how-to section for task-oriented queries",
        ),
        check(
            !has_definition(content),
            10,
            "No definition-style phrasing found",
            "Open with a concise definition of the main concept",
        ),
    ];

    fold_checks(failed.into_iter().flatten())
}

//! Engagement analyzer (extended mode): reading effort and skimmability.

use super::{check, fold_checks};
use crate::text;
use crate::{Metrics, ScoreResult};

const WORDS_PER_MINUTE: usize = 200;
const MAX_AVG_PARAGRAPH_CHARS: f64 = 400.0;
const MIN_SUBHEADERS: usize = 2;

/// Estimated reading time in whole minutes, rounded up.
pub fn reading_time_minutes(word_count: usize) -> u64 {
    word_count.div_ceil(WORDS_PER_MINUTE) as u64
}

/// Qualitative skimmability label from the density of structural lines
/// (headers and list items) per paragraph.
pub fn skimmability(content: &str) -> &'static str {
    let paragraphs = text::split_paragraphs(content).len();
    if paragraphs == 0 {
        return "low";
    }
    let structural = text::level1_header_count(content)
        + text::level2_header_count(content)
        + text::list_line_count(content);
    let ratio = structural as f64 / paragraphs as f64;
    if ratio >= 0.3 {
        "high"
    } else if ratio >= 0.1 {
        "medium"
    } else {
        "low"
    }
}

/// Score how likely the content is to hold a reader.
pub fn analyze(content: &str) -> ScoreResult {
    let avg_paragraph = text::avg_paragraph_chars(content);

    let failed = [
        check(
            avg_paragraph > MAX_AVG_PARAGRAPH_CHARS,
            15,
            "Paragraphs are long enough to lose skimmers",
            "Keep paragraphs short so the page stays scannable",
        ),
        check(
            !content.contains('?'),
            10,
            "No questions engaging the reader",
            "Ask the reader a direct question to pull them into the text",
        ),
        check(
            text::level2_header_count(content) < MIN_SUBHEADERS,
            10,
            "Few subheadings to break up the text",
            "Add subheadings so readers can jump to the part they need",
        ),
    ];

    let mut result = fold_checks(failed.into_iter().flatten());

    let mut metrics = Metrics::new();
    metrics.insert(
        "readingTimeMinutes".into(),
        reading_time_minutes(text::word_count(content)).into(),
    );
    metrics.insert("skimmability".into(), skimmability(content).into());
    result.metrics = Some(metrics);
    result
}

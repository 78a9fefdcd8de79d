//! SEO analyzer: keyword density, readability, structure, and length checks.

use super::{check, fold_checks};
use crate::text;
use crate::{Metrics, ScoreResult};

const DENSITY_MIN: f64 = 1.0;
const DENSITY_MAX: f64 = 2.5;
const READABILITY_FLOOR: f64 = 60.0;
const MIN_WORDS: usize = 300;
const MIN_H2: usize = 2;
const MIN_LINKS: usize = 2;

/// Flesch-style readability estimate from average sentence length.
fn readability(avg_words_per_sentence: f64) -> f64 {
    206.835 - 1.015 * avg_words_per_sentence
}

/// Score the content for traditional search ranking signals.
///
/// Density is computed from the single most frequent word of 5+ characters,
/// not from a caller-supplied keyword.
pub fn analyze(content: &str) -> ScoreResult {
    let words = text::word_count(content);
    let primary = text::most_frequent_word(content);
    let density = primary
        .as_ref()
        .map(|(word, _)| text::keyword_density(content, word))
        .unwrap_or(0.0);
    let readability_score = readability(text::avg_words_per_sentence(content));
    let h1_count = text::level1_header_count(content);
    let h2_count = text::level2_header_count(content);
    let link_count = text::markdown_link_count(content);

    let failed = [
        check(
            !(DENSITY_MIN..=DENSITY_MAX).contains(&density),
            15,
            "Keyword density is outside the optimal 1-2.5% range",
            "Adjust usage of your primary keyword to land between 1% and 2.5% of total words",
        ),
        check(
            readability_score < READABILITY_FLOOR,
            10,
            "Content is difficult to read",
            "Shorten sentences to bring the readability score above 60",
        ),
        check(
            h1_count == 0,
            15,
            "Missing H1 heading",
            "Add a single H1 heading containing your primary keyword",
        ),
        check(
            h2_count < MIN_H2,
            10,
            "Fewer than two H2 subheadings",
            "Break the content into sections with descriptive H2 subheadings",
        ),
        check(
            words < MIN_WORDS,
            20,
            "Content is under 300 words",
            "Expand the content to at least 300 words of substantive text",
        ),
        check(
            link_count < MIN_LINKS,
            10,
            "Fewer than 2 links to supporting pages",
            "Link to relevant internal and external sources",
        ),
    ];

    let mut result = fold_checks(failed.into_iter().flatten());

    let mut metrics = Metrics::new();
    metrics.insert("keywordDensity".into(), format!("{:.2}%", density).into());
    metrics.insert(
        "readabilityScore".into(),
        ((readability_score * 10.0).round() / 10.0).into(),
    );
    metrics.insert("wordCount".into(), words.into());
    metrics.insert(
        "primaryKeyword".into(),
        primary.map(|(word, _)| word).unwrap_or_else(|| "N/A".into()).into(),
    );
    result.metrics = Some(metrics);
    result
}

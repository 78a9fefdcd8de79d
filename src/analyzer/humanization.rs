//! Humanization analyzer: how human-written vs. machine-generated the
//! text reads. Rhythm, sentence openers, passive voice, stock phrases,
//! and personal pronouns.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{check, fold_checks};
use crate::text;
use crate::{Metrics, ScoreResult};

const MIN_SENTENCE_STD_DEV: f64 = 5.0;
const MAX_STARTER_RATIO: f64 = 0.20;
const MAX_PASSIVE_RATIO: f64 = 0.20;
const MAX_CLICHES: usize = 2;
const MIN_PRONOUNS: usize = 5;

/// Stock phrases that mark generated copy. The check fires when more than
/// two distinct phrases appear.
const AI_CLICHES: [&str; 4] = [
    "it's important to note",
    "in today's fast-paced world",
    "delve into",
    "in conclusion",
];

static PASSIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:was|were|is|are|been|being|be)\s+\w+(?:ed|en)\b").unwrap());

static PRONOUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:i|me|my|we|our|you|your)\b").unwrap());

/// Share of sentences whose first word is the most common first word.
/// 0.0 when there are no sentences.
fn top_starter_ratio(sentences: &[&str]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let mut counts = std::collections::HashMap::new();
    for sentence in sentences {
        if let Some(first) = sentence.split_whitespace().next() {
            *counts.entry(first.to_lowercase()).or_insert(0usize) += 1;
        }
    }
    let top = counts.values().copied().max().unwrap_or(0);
    top as f64 / sentences.len() as f64
}

/// Share of sentences containing a passive construction.
fn passive_ratio(sentences: &[&str]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let passive = sentences.iter().filter(|s| PASSIVE_RE.is_match(s)).count();
    passive as f64 / sentences.len() as f64
}

/// Score how human the text reads.
pub fn analyze(content: &str) -> ScoreResult {
    let sentences = text::split_sentences(content);
    let lengths = text::sentence_word_lengths(content);
    let std_dev = text::std_dev(&lengths);
    let starter_ratio = top_starter_ratio(&sentences);
    let passive = passive_ratio(&sentences);
    let lowered = content.to_lowercase();
    let cliche_count = AI_CLICHES.iter().filter(|p| lowered.contains(*p)).count();
    let pronouns = PRONOUN_RE.find_iter(content).count();

    let failed = [
        check(
            std_dev < MIN_SENTENCE_STD_DEV,
            20,
            "Monotonous sentence rhythm",
            "Mix short punchy sentences with longer explanatory ones",
        ),
        check(
            starter_ratio > MAX_STARTER_RATIO,
            15,
            "Repetitive sentence starters",
            "Vary how sentences begin instead of reusing the same opener",
        ),
        check(
            passive > MAX_PASSIVE_RATIO,
            15,
            "Heavy use of passive voice",
            "Rewrite passive sentences in active voice",
        ),
        check(
            cliche_count > MAX_CLICHES,
            10,
            "Contains common AI-generated phrases",
            "Replace stock phrases with specific, concrete statements",
        ),
        check(
            pronouns < MIN_PRONOUNS,
            10,
            "Few personal pronouns",
            "Address the reader directly and add first-person perspective",
        ),
    ];

    let mut result = fold_checks(failed.into_iter().flatten());

    let mut metrics = Metrics::new();
    metrics.insert("sentenceStdDev".into(), ((std_dev * 10.0).round() / 10.0).into());
    metrics.insert(
        "passiveVoicePercent".into(),
        format!("{:.1}%", passive * 100.0).into(),
    );
    result.metrics = Some(metrics);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_does_not_panic() {
        let result = analyze("");
        // Rhythm and pronoun checks fail on empty input; ratios stay 0
        assert_eq!(result.score, 70);
    }

    #[test]
    fn repetitive_starters_flagged() {
        let content = "Also we run tests. Also we ship code here. \
                       Also we review pull requests every single day without fail. \
                       You write. I read your long drafts.";
        let result = analyze(content);
        assert!(result
            .issues
            .iter()
            .any(|i| i == "Repetitive sentence starters"));
    }

    #[test]
    fn uniform_lengths_flag_rhythm() {
        let content = "One two three four five. Six seven eight nine ten. \
                       Alpha beta gamma delta epsilon.";
        let result = analyze(content);
        assert!(result.issues.iter().any(|i| i.contains("rhythm")));
    }

    #[test]
    fn passive_heavy_text_flagged() {
        let content = "The report was written by the intern. The budget was approved. \
                       The launch was delayed. The memo was shredded.";
        let result = analyze(content);
        assert!(result.issues.iter().any(|i| i.contains("passive")));
        let metrics = result.metrics.as_ref().unwrap();
        assert_eq!(
            metrics["passiveVoicePercent"],
            crate::MetricValue::Text("100.0%".into())
        );
    }

    #[test]
    fn cliche_threshold_needs_three_phrases() {
        let two = "It's important to note the date. In conclusion, we met it. \
                   I wrote this myself for you, my readers, with our own notes.";
        assert!(!analyze(two)
            .issues
            .iter()
            .any(|i| i.contains("AI-generated")));

        let three = format!("{} Let me delve into details.", two);
        assert!(analyze(&three)
            .issues
            .iter()
            .any(|i| i.contains("AI-generated")));
    }

    #[test]
    fn starter_ratio_zero_for_no_sentences() {
        assert_eq!(top_starter_ratio(&[]), 0.0);
        assert_eq!(passive_ratio(&[]), 0.0);
    }
}

//! Text metric primitives shared by every analyzer.
//!
//! All functions are pure and total: empty input yields zero counts, and
//! derived ratios treat a zero denominator as 0.0 rather than NaN.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Minimum length for a word to participate in frequency analysis.
const FREQUENCY_MIN_WORD_LEN: usize = 5;

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

static MD_H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#\s").unwrap());

static MD_H2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^##\s").unwrap());

static MD_LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]+\]\([^)]+\)").unwrap());

static LIST_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*(?:[-*]|\d+\.)\s").unwrap());

/// Number of whitespace-separated words; 0 for empty content.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Case-folded words for frequency analysis. Split on non-word runs;
/// words shorter than 5 characters are excluded.
pub fn words_for_frequency(text: &str) -> Vec<String> {
    NON_WORD_RE
        .split(text)
        .filter(|w| w.chars().count() >= FREQUENCY_MIN_WORD_LEN)
        .map(|w| w.to_lowercase())
        .collect()
}

/// Frequency table over `words_for_frequency`.
pub fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    for word in words_for_frequency(text) {
        *freq.entry(word).or_insert(0) += 1;
    }
    freq
}

/// The single most frequent word of 5+ characters, with its count.
/// Ties break toward the lexicographically smaller word so the result
/// is deterministic.
pub fn most_frequent_word(text: &str) -> Option<(String, usize)> {
    word_frequencies(text)
        .into_iter()
        .max_by(|(wa, ca), (wb, cb)| ca.cmp(cb).then_with(|| wb.cmp(wa)))
}

/// Occurrences of `word` (case-insensitive, frequency tokenization) as a
/// percentage of total words. 0.0 when the content has no words.
pub fn keyword_density(text: &str, word: &str) -> f64 {
    let total = word_count(text);
    if total == 0 {
        return 0.0;
    }
    let needle = word.to_lowercase();
    let occurrences = NON_WORD_RE
        .split(text)
        .filter(|w| w.to_lowercase() == needle)
        .count();
    occurrences as f64 / total as f64 * 100.0
}

/// Sentences: split on terminal punctuation, trimmed, empties dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Paragraphs: split on blank-line runs, trimmed, empties dropped.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Mean words per sentence; 0.0 when there are no sentences.
pub fn avg_words_per_sentence(text: &str) -> f64 {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return 0.0;
    }
    let total_words: usize = sentences.iter().map(|s| word_count(s)).sum();
    total_words as f64 / sentences.len() as f64
}

/// Mean paragraph length in characters; 0.0 when there are no paragraphs.
pub fn avg_paragraph_chars(text: &str) -> f64 {
    let paragraphs = split_paragraphs(text);
    if paragraphs.is_empty() {
        return 0.0;
    }
    let total_chars: usize = paragraphs.iter().map(|p| p.chars().count()).sum();
    total_chars as f64 / paragraphs.len() as f64
}

/// Per-sentence word counts, in document order.
pub fn sentence_word_lengths(text: &str) -> Vec<usize> {
    split_sentences(text).iter().map(|s| word_count(s)).collect()
}

/// Population standard deviation; 0.0 for an empty slice.
pub fn std_dev(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<usize>() as f64 / n;
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    variance.sqrt()
}

/// Count of `# ` level-1 markdown headers.
pub fn level1_header_count(text: &str) -> usize {
    MD_H1_RE.find_iter(text).count()
}

/// Count of `## ` level-2 markdown headers.
pub fn level2_header_count(text: &str) -> usize {
    MD_H2_RE.find_iter(text).count()
}

/// Count of markdown-style `[label](url)` links.
pub fn markdown_link_count(text: &str) -> usize {
    MD_LINK_RE.find_iter(text).count()
}

/// Count of structured list lines (`-`, `*`, or `1.` bullets).
pub fn list_line_count(text: &str) -> usize {
    LIST_LINE_RE.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_empty_is_zero() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t  "), 0);
    }

    #[test]
    fn word_count_splits_on_whitespace() {
        assert_eq!(word_count("one two\nthree\tfour"), 4);
    }

    #[test]
    fn frequency_excludes_short_words() {
        let words = words_for_frequency("the cat chased another stray feline");
        assert!(words.contains(&"chased".to_string()));
        assert!(words.contains(&"another".to_string()));
        assert!(!words.contains(&"the".to_string()));
        assert!(!words.contains(&"cat".to_string()));
    }

    #[test]
    fn most_frequent_word_case_folds() {
        let text = "Marketing matters. marketing wins. MARKETING everywhere.";
        let (word, count) = most_frequent_word(text).unwrap();
        assert_eq!(word, "marketing");
        assert_eq!(count, 3);
    }

    #[test]
    fn most_frequent_word_empty_is_none() {
        assert!(most_frequent_word("").is_none());
        assert!(most_frequent_word("a an it to").is_none());
    }

    #[test]
    fn keyword_density_zero_denominator() {
        assert_eq!(keyword_density("", "anything"), 0.0);
    }

    #[test]
    fn keyword_density_basic() {
        // 1 occurrence in 10 words
        let text = "marketing one two three four five six seven eight nine";
        let density = keyword_density(text, "marketing");
        assert!((density - 10.0).abs() < 1e-9);
    }

    #[test]
    fn sentences_split_and_trim() {
        let sentences = split_sentences("First one. Second!  Third? ");
        assert_eq!(sentences, vec!["First one", "Second", "Third"]);
    }

    #[test]
    fn sentences_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("...!!!").is_empty());
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let paragraphs = split_paragraphs("one\n\ntwo\nstill two\n\nthree");
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[1], "two\nstill two");
    }

    #[test]
    fn ratios_are_total() {
        assert_eq!(avg_words_per_sentence(""), 0.0);
        assert_eq!(avg_paragraph_chars(""), 0.0);
        assert_eq!(std_dev(&[]), 0.0);
    }

    #[test]
    fn std_dev_of_uniform_lengths_is_zero() {
        assert_eq!(std_dev(&[7, 7, 7, 7]), 0.0);
    }

    #[test]
    fn std_dev_varied() {
        // lengths 2 and 6: mean 4, variance 4, std dev 2
        assert!((std_dev(&[2, 6]) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn markdown_structure_counts() {
        let text = "# Title\n\n## One\n\n## Two\n\n- item\n- item\n1. step\n\nSee [docs](https://example.com) and [more](https://example.org).";
        assert_eq!(level1_header_count(text), 1);
        assert_eq!(level2_header_count(text), 2);
        assert_eq!(list_line_count(text), 3);
        assert_eq!(markdown_link_count(text), 2);
    }

    #[test]
    fn h2_not_counted_as_h1() {
        assert_eq!(level1_header_count("## Only a subheader\n"), 0);
        assert_eq!(level2_header_count("# Only a title\n"), 0);
    }
}

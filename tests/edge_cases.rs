//! Edge case tests: degenerate inputs must not panic.

use clarity::analyzer::{AnalysisEngine, AnalysisRequest, EngineOptions};
use clarity::AnalysisResults;

fn analyze(content: &str) -> AnalysisResults {
    let engine = AnalysisEngine::new(EngineOptions {
        extended: true,
        degrade_without_ai: true,
        ..EngineOptions::default()
    });
    engine
        .analyze(&AnalysisRequest::new(content))
        .expect("analysis should always complete")
}

#[test]
fn empty_content_no_panic() {
    let results = analyze("");
    assert!(results.overall_score() <= 100);
}

#[test]
fn whitespace_only_no_panic() {
    analyze("   \n\n\t  \n ");
}

#[test]
fn punctuation_only_no_panic() {
    let results = analyze("...!!!???...");
    assert!(results.seo.score <= 100);
}

#[test]
fn single_word_no_panic() {
    analyze("word");
}

#[test]
fn very_long_single_sentence_no_panic() {
    let content = "word ".repeat(50_000);
    analyze(&content);
}

#[test]
fn unicode_content_no_panic() {
    analyze("日本語のテキスト。絵文字もある 🎉🎉🎉。改行も\n\nある。");
}

#[test]
fn crlf_line_endings_handled() {
    // blank-line paragraph split uses \n\n; CRLF content must still analyze
    analyze("# Title\r\n\r\nSome content here.\r\n");
}

#[test]
fn bom_prefixed_content_no_panic() {
    analyze("\u{feff}# Title\n\nContent after a byte-order mark.");
}

#[test]
fn markdown_edge_syntax_no_panic() {
    analyze("#\n##\n- \n* \n1. \n[](https://example.com)\n[]()");
}

#[test]
fn zero_sentences_ratio_metrics_are_neutral() {
    let results = analyze("no terminal punctuation at all");
    // humanization ratios must be defined even with one sentence-less blob
    assert!(results.humanization.score <= 100);
}

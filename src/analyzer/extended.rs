//! Extended-mode projections: derived records computed after the analyzers
//! run. Pure functions of the content; none of them feed back into the
//! dimension scores.

use super::{aeo, differentiation, humanization, serp};
use crate::text;
use crate::{AiDetection, AiDetectionSegment, GapAnalysis, SerpAnalysis, SnippetOptimization};

/// Benchmark average word count of top-10 results for competitive queries.
const COMPETITOR_AVG_WORDS: usize = 1800;

const EXCERPT_WORDS: usize = 8;

/// Compare the content's length against the top-10 benchmark.
pub fn serp_analysis(content: &str) -> SerpAnalysis {
    let target = text::word_count(content);
    let comparison = if target >= COMPETITOR_AVG_WORDS {
        format!(
            "Content length ({} words) meets or exceeds the top-10 average of {} words",
            target, COMPETITOR_AVG_WORDS
        )
    } else {
        format!(
            "Content is {} words short of the top-10 average of {} words",
            COMPETITOR_AVG_WORDS - target,
            COMPETITOR_AVG_WORDS
        )
    };
    SerpAnalysis {
        target_word_count: target,
        competitor_avg_word_count: COMPETITOR_AVG_WORDS,
        comparison,
    }
}

/// Score each paragraph with the humanization heuristics and report the
/// per-segment breakdown.
pub fn ai_detection(content: &str) -> AiDetection {
    let segments: Vec<AiDetectionSegment> = text::split_paragraphs(content)
        .iter()
        .map(|paragraph| {
            let words: Vec<&str> = paragraph.split_whitespace().collect();
            let mut excerpt = words
                .iter()
                .take(EXCERPT_WORDS)
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            if words.len() > EXCERPT_WORDS {
                excerpt.push_str("...");
            }
            AiDetectionSegment {
                excerpt,
                human_likeness: humanization::analyze(paragraph).score,
            }
        })
        .collect();

    let overall = if segments.is_empty() {
        0
    } else {
        let sum: u32 = segments.iter().map(|s| s.human_likeness as u32).sum();
        (sum / segments.len() as u32) as u8
    };

    AiDetection {
        overall_human_likeness: overall,
        segments,
    }
}

/// List the content elements the heuristics found missing.
pub fn gap_analysis(content: &str) -> GapAnalysis {
    let mut missing = Vec::new();
    if !aeo::has_faq(content) {
        missing.push("FAQ section".to_string());
    }
    if text::list_line_count(content) < 3 {
        missing.push("Structured lists".to_string());
    }
    if !aeo::has_how_to(content) {
        missing.push("Step-by-step instructions".to_string());
    }
    if !serp::has_statistics(content) {
        missing.push("Supporting statistics".to_string());
    }
    if !serp::has_citations(content) {
        missing.push("Source citations".to_string());
    }
    if !differentiation::has_examples(content) {
        missing.push("Concrete examples".to_string());
    }
    if text::markdown_link_count(content) < 2 {
        missing.push("Supporting links".to_string());
    }
    GapAnalysis {
        missing_elements: missing,
    }
}

/// Judge whether the opening of the content could be lifted as a featured
/// snippet, and in which format.
pub fn snippet_optimization(content: &str) -> SnippetOptimization {
    let paragraphs = text::split_paragraphs(content);
    let opening = paragraphs.first().copied().unwrap_or("");

    if aeo::has_definition(opening) {
        return SnippetOptimization {
            ready: true,
            format: "definition".to_string(),
            suggestions: Vec::new(),
        };
    }
    if text::list_line_count(content) >= 3 {
        return SnippetOptimization {
            ready: true,
            format: "list".to_string(),
            suggestions: vec![
                "Place the list directly under a question-style heading".to_string()
            ],
        };
    }
    SnippetOptimization {
        ready: false,
        format: "none".to_string(),
        suggestions: vec![
            "Open with a one-sentence definition of the main concept".to_string(),
            "Add a concise list answer engines can lift verbatim".to_string(),
        ],
    }
}

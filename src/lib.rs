//! Clarity: Content Quality Analyzer
//!
//! This library scores a block of Markdown or plain text along six heuristic
//! dimensions (SEO, SERP competitiveness, answer-engine optimization,
//! humanization, differentiation, engagement) and returns structured issues
//! and recommendations for each.

pub mod ai;
pub mod analyzer;
pub mod config;
pub mod reporter;
pub mod text;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A derived statistic exposed by an analyzer: either a formatted string
/// (e.g. "1.50%") or a plain number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(u64),
    Float(f64),
    Text(String),
}

impl From<u64> for MetricValue {
    fn from(v: u64) -> Self {
        MetricValue::Int(v)
    }
}

impl From<usize> for MetricValue {
    fn from(v: usize) -> Self {
        MetricValue::Int(v as u64)
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Float(v)
    }
}

impl From<String> for MetricValue {
    fn from(v: String) -> Self {
        MetricValue::Text(v)
    }
}

impl From<&str> for MetricValue {
    fn from(v: &str) -> Self {
        MetricValue::Text(v.to_string())
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Int(v) => write!(f, "{}", v),
            MetricValue::Float(v) => write!(f, "{}", v),
            MetricValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Named metrics attached to a `ScoreResult`, in stable (sorted) order.
pub type Metrics = BTreeMap<String, MetricValue>;

/// The per-dimension output of one analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Score in 0-100, floored at 0
    pub score: u8,
    /// One entry per failed rule check, in evaluation order
    pub issues: Vec<String>,
    /// One entry per failed check, truncated to the first 5
    pub recommendations: Vec<String>,
    /// Derived statistics (SEO, Humanization, Engagement)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    /// Free-text rank label (SERP only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_rank: Option<String>,
}

impl ScoreResult {
    /// A clean result with no issues
    pub fn perfect() -> Self {
        Self {
            score: 100,
            issues: Vec::new(),
            recommendations: Vec::new(),
            metrics: None,
            predicted_rank: None,
        }
    }
}

/// Competitor-comparison projection (extended mode)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerpAnalysis {
    /// Word count of the analyzed content
    pub target_word_count: usize,
    /// Benchmark average word count of top-ranking pages
    pub competitor_avg_word_count: usize,
    /// Human-readable comparison of the two
    pub comparison: String,
}

/// One scored slice of content in the AI-detection breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDetectionSegment {
    /// First words of the paragraph this segment covers
    pub excerpt: String,
    /// 0-100, higher reads more human
    pub human_likeness: u8,
}

/// Per-segment human-likeness breakdown (extended mode)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDetection {
    pub overall_human_likeness: u8,
    pub segments: Vec<AiDetectionSegment>,
}

/// Content elements the heuristics found missing (extended mode)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysis {
    pub missing_elements: Vec<String>,
}

/// Featured-snippet readiness projection (extended mode)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetOptimization {
    pub ready: bool,
    /// Snippet format the content is closest to: "definition", "list", or "none"
    pub format: String,
    pub suggestions: Vec<String>,
}

/// The full aggregate record for one analysis run.
///
/// Constructed once by the analysis engine and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResults {
    pub seo: ScoreResult,
    pub serp: ScoreResult,
    pub aeo: ScoreResult,
    pub humanization: ScoreResult,
    pub differentiation: ScoreResult,
    /// Present in extended mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement: Option<ScoreResult>,
    /// RFC 3339 creation instant, stamped at aggregation time
    pub timestamp: String,
    /// Caller-supplied keyword, carried through unmodified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serp_analysis: Option<SerpAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_detection: Option<AiDetection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_analysis: Option<GapAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet_optimization: Option<SnippetOptimization>,
}

impl AnalysisResults {
    /// Dimension scores in report order, extended sections excluded.
    pub fn dimension_scores(&self) -> Vec<(&'static str, u8)> {
        let mut scores = vec![
            ("SEO", self.seo.score),
            ("SERP", self.serp.score),
            ("AEO", self.aeo.score),
            ("Humanization", self.humanization.score),
            ("Differentiation", self.differentiation.score),
        ];
        if let Some(ref engagement) = self.engagement {
            scores.push(("Engagement", engagement.score));
        }
        scores
    }

    /// Unweighted mean of all present dimension scores, rounded to nearest.
    pub fn overall_score(&self) -> u8 {
        let scores = self.dimension_scores();
        if scores.is_empty() {
            return 0;
        }
        let sum: u32 = scores.iter().map(|(_, s)| *s as u32).sum();
        ((sum + scores.len() as u32 / 2) / scores.len() as u32) as u8
    }
}

//! Analysis engine: runs every analyzer and assembles the aggregate record.

use chrono::Utc;
use thiserror::Error;

use super::{aeo, differentiation, engagement, extended, humanization, seo, serp};
use crate::ai::AiClient;
use crate::AnalysisResults;

/// Top-level analysis failure. External-service errors never surface here;
/// they degrade inside the affected analyzer.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("API key not configured - pass --api-key, set it in .clarityrc.json, or use --no-ai")]
    MissingApiKey,
}

/// One analysis request: the content plus an optional target keyword that
/// is carried through to the results unmodified.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub content: String,
    pub target_keyword: Option<String>,
}

impl AnalysisRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            target_keyword: None,
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.target_keyword = Some(keyword.into());
        self
    }
}

/// Options resolved by the caller (CLI flags merged with config).
#[derive(Default)]
pub struct EngineOptions {
    pub client: Option<AiClient>,
    pub extended: bool,
    /// Run the AI-assisted analyzers on their fallback path instead of
    /// requiring a credential.
    pub degrade_without_ai: bool,
}

/// Runs the analyzers and assembles one immutable `AnalysisResults`.
/// Holds no state across runs.
pub struct AnalysisEngine {
    options: EngineOptions,
}

impl AnalysisEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// An engine whose AI-assisted analyzers always degrade; never touches
    /// the network.
    pub fn without_ai() -> Self {
        Self::new(EngineOptions {
            degrade_without_ai: true,
            ..EngineOptions::default()
        })
    }

    /// Analyze one piece of content.
    ///
    /// The synchronous analyzers are pure; the two AI-assisted ones issue
    /// their external calls concurrently so total latency is bounded by the
    /// slower of the two.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResults, AnalyzeError> {
        let degraded;
        let client: &AiClient = match &self.options.client {
            Some(client) => client,
            None if self.options.degrade_without_ai => {
                degraded = AiClient::new("");
                &degraded
            }
            None => return Err(AnalyzeError::MissingApiKey),
        };

        let content = request.content.as_str();

        let seo = seo::analyze(content);
        let aeo = aeo::analyze(content);
        let humanization = humanization::analyze(content);
        let engagement = self.options.extended.then(|| engagement::analyze(content));

        let (serp, differentiation) = rayon::join(
            || serp::analyze(content, client),
            || differentiation::analyze(content, client),
        );

        let (serp_analysis, ai_detection, gap_analysis, snippet_optimization) =
            if self.options.extended {
                (
                    Some(extended::serp_analysis(content)),
                    Some(extended::ai_detection(content)),
                    Some(extended::gap_analysis(content)),
                    Some(extended::snippet_optimization(content)),
                )
            } else {
                (None, None, None, None)
            };

        Ok(AnalysisResults {
            seo,
            serp,
            aeo,
            humanization,
            differentiation,
            engagement,
            timestamp: Utc::now().to_rfc3339(),
            target_keyword: request.target_keyword.clone(),
            serp_analysis,
            ai_detection,
            gap_analysis,
            snippet_optimization,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_client_is_a_configuration_error() {
        let engine = AnalysisEngine::new(EngineOptions::default());
        let result = engine.analyze(&AnalysisRequest::new("text"));
        assert!(matches!(result, Err(AnalyzeError::MissingApiKey)));
    }

    #[test]
    fn degraded_run_is_structurally_complete() {
        let engine = AnalysisEngine::without_ai();
        let request = AnalysisRequest::new("Some content.").with_keyword("content");
        let results = engine.analyze(&request).unwrap();

        assert_eq!(results.target_keyword.as_deref(), Some("content"));
        assert!(!results.timestamp.is_empty());
        // AI-assisted dimensions degrade to their documented fallbacks
        assert_eq!(results.serp.score, 50);
        assert_eq!(results.differentiation.score, 60);
        // plain mode carries no extended sections
        assert!(results.engagement.is_none());
        assert!(results.gap_analysis.is_none());
    }

    #[test]
    fn extended_run_populates_every_section() {
        let engine = AnalysisEngine::new(EngineOptions {
            extended: true,
            degrade_without_ai: true,
            ..EngineOptions::default()
        });
        let results = engine
            .analyze(&AnalysisRequest::new("A paragraph.\n\nAnother one."))
            .unwrap();

        assert!(results.engagement.is_some());
        assert!(results.serp_analysis.is_some());
        assert!(results.ai_detection.is_some());
        assert!(results.gap_analysis.is_some());
        assert!(results.snippet_optimization.is_some());
    }

    #[test]
    fn dimension_scores_are_independent_of_each_other() {
        let engine = AnalysisEngine::without_ai();
        let a = engine.analyze(&AnalysisRequest::new("Text one.")).unwrap();
        let b = engine.analyze(&AnalysisRequest::new("Text one.")).unwrap();
        // identical input, identical scores (timestamps may differ)
        assert_eq!(a.seo, b.seo);
        assert_eq!(a.aeo, b.aeo);
        assert_eq!(a.humanization, b.humanization);
    }
}

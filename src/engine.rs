//! Multi-modal fusion engine
//!
//! Combines per-modality analyzer results into one explainable verdict.
//! The engine is constructed once with a strategy and weight
//! configuration and is immutable afterward; `fuse` is a pure
//! computation with no I/O and no per-call state, so one engine can be
//! shared freely across threads. Reconfiguration means constructing a
//! new engine.

use crate::config::FusionWeights;
use crate::error::FusionError;
use crate::explain::{build_explanation, no_data_explanation};
use crate::extract::{extract_audio_score, extract_text_score, extract_video_score};
use crate::models::{
    DetailedAnalysis, FusionReport, HealthStatus, Modality, StrategyInfo, Verdict,
};
use crate::payloads::{AudioAnalysis, TextAnalysis, VideoAnalysis};
use crate::strategy::StrategyKind;
use crate::verdict::classify;
use std::collections::BTreeMap;
use tracing::info;

/// Default minimum confidence for a non-uncertain verdict
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Fuses predictions from multiple modalities into a final verdict
pub struct FusionEngine {
    strategy: StrategyKind,
    weights: FusionWeights,
    confidence_threshold: f64,
}

impl Default for FusionEngine {
    fn default() -> Self {
        // Default weights always normalize; unwrap cannot fire here
        Self::new(
            StrategyKind::default(),
            FusionWeights::default(),
            DEFAULT_CONFIDENCE_THRESHOLD,
        )
        .expect("default fusion weights are valid")
    }
}

impl FusionEngine {
    /// Create an engine with the given strategy and weights.
    ///
    /// Weights are normalized to sum to 1.0; a configuration whose
    /// weights cannot be normalized is rejected here rather than
    /// surfacing mid-fuse.
    pub fn new(
        strategy: StrategyKind,
        weights: FusionWeights,
        confidence_threshold: f64,
    ) -> Result<Self, FusionError> {
        let weights = weights.normalized()?;
        Ok(Self {
            strategy,
            weights,
            confidence_threshold,
        })
    }

    /// Create an engine with default weights and threshold
    pub fn with_strategy(strategy: StrategyKind) -> Self {
        Self::new(
            strategy,
            FusionWeights::default(),
            DEFAULT_CONFIDENCE_THRESHOLD,
        )
        .expect("default fusion weights are valid")
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub fn weights(&self) -> FusionWeights {
        self.weights
    }

    /// Fuse results from the modalities that completed analysis.
    ///
    /// Any subset of payloads may be supplied; a payload whose upstream
    /// analysis did not complete must be omitted, not passed partially
    /// filled. With zero payloads the engine returns the fixed neutral
    /// result rather than an error.
    pub fn fuse(
        &self,
        text_result: Option<&TextAnalysis>,
        audio_result: Option<&AudioAnalysis>,
        video_result: Option<&VideoAnalysis>,
    ) -> FusionReport {
        let mut contributions = BTreeMap::new();
        if let Some(text) = text_result {
            contributions.insert(Modality::Text, extract_text_score(text, &self.weights));
        }
        if let Some(audio) = audio_result {
            contributions.insert(Modality::Audio, extract_audio_score(audio, &self.weights));
        }
        if let Some(video) = video_result {
            contributions.insert(Modality::Video, extract_video_score(video, &self.weights));
        }

        if contributions.is_empty() {
            return self.no_data_report();
        }

        // Fixed Text -> Audio -> Video order so tie-breaking strategies
        // are deterministic
        let scores: Vec<_> = Modality::ALL
            .iter()
            .filter_map(|m| contributions.get(m).copied())
            .collect();

        let fused = self.strategy.implementation().fuse(&scores);
        let verdict = classify(fused.score, fused.confidence, self.confidence_threshold);
        let explanation = build_explanation(fused.score, fused.confidence, verdict, &contributions);

        info!(
            strategy = self.strategy.name(),
            modalities = scores.len(),
            score = fused.score,
            confidence = fused.confidence,
            verdict = %verdict,
            "fusion complete"
        );

        FusionReport {
            final_score: fused.score,
            final_verdict: verdict,
            confidence: fused.confidence,
            modality_contributions: contributions,
            explanation,
            detailed_analysis: DetailedAnalysis {
                text: text_result.cloned(),
                audio: audio_result.cloned(),
                video: video_result.cloned(),
            },
            fusion_strategy: self.strategy.name().to_string(),
            weights_used: self.weights,
        }
    }

    /// Fixed neutral result when no modality data is available.
    ///
    /// Deliberate policy, not an error: upstream analyzers fail
    /// independently and a caller with nothing left still gets a
    /// well-formed UNCERTAIN report.
    fn no_data_report(&self) -> FusionReport {
        FusionReport {
            final_score: 50.0,
            final_verdict: Verdict::Uncertain,
            confidence: 0.0,
            modality_contributions: BTreeMap::new(),
            explanation: no_data_explanation(),
            detailed_analysis: DetailedAnalysis::default(),
            fusion_strategy: self.strategy.name().to_string(),
            weights_used: self.weights,
        }
    }

    /// Static catalogue of the selectable fusion strategies
    pub fn list_strategies() -> Vec<StrategyInfo> {
        [
            StrategyKind::WeightedAverage,
            StrategyKind::Maximum,
            StrategyKind::Minimum,
            StrategyKind::Voting,
        ]
        .iter()
        .map(|kind| {
            let implementation = kind.implementation();
            StrategyInfo {
                name: implementation.name(),
                description: implementation.description(),
                is_default: *kind == StrategyKind::default(),
            }
        })
        .collect()
    }

    /// Trivial liveness signal
    pub fn health_check(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy",
            engine_ready: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payloads::MlPrediction;

    #[test]
    fn test_new_rejects_degenerate_weights() {
        let result = FusionEngine::new(
            StrategyKind::WeightedAverage,
            FusionWeights::new(0.0, 0.0, 0.0),
            DEFAULT_CONFIDENCE_THRESHOLD,
        );
        assert!(matches!(
            result,
            Err(FusionError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn test_new_normalizes_weights() {
        let engine = FusionEngine::new(
            StrategyKind::WeightedAverage,
            FusionWeights::new(9.0, 6.0, 5.0),
            DEFAULT_CONFIDENCE_THRESHOLD,
        )
        .unwrap();
        assert!(engine.weights().is_normalized());
        assert!((engine.weights().text - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_contributions_match_supplied_payloads() {
        let engine = FusionEngine::default();
        let text = TextAnalysis {
            ml_prediction: Some(MlPrediction {
                fake_probability: Some(0.1),
                confidence: Some(0.8),
                features: None,
            }),
            ..Default::default()
        };
        let video = VideoAnalysis::default();

        let report = engine.fuse(Some(&text), None, Some(&video));
        assert_eq!(report.modality_contributions.len(), 2);
        assert!(report.modality_contributions.contains_key(&Modality::Text));
        assert!(report.modality_contributions.contains_key(&Modality::Video));
        assert!(report.detailed_analysis.audio.is_none());
        assert_eq!(report.detailed_analysis.text.as_ref(), Some(&text));
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FusionEngine>();
    }

    #[test]
    fn test_list_strategies_catalogue() {
        let strategies = FusionEngine::list_strategies();
        assert_eq!(strategies.len(), 4);
        assert_eq!(strategies[0].name, "weighted_average");
        assert!(strategies[0].is_default);
        assert!(strategies[1..].iter().all(|s| !s.is_default));
        // The reserved learned strategy is not advertised
        assert!(strategies.iter().all(|s| s.name != "learned"));
    }

    #[test]
    fn test_health_check() {
        let engine = FusionEngine::default();
        let health = engine.health_check();
        assert_eq!(health.status, "healthy");
        assert!(health.engine_ready);
    }
}

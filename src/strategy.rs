//! Fusion strategies
//!
//! A strategy combines the per-modality scores present in one fuse call
//! into a single `(score, confidence)` pair. Strategies are a closed set
//! dispatched through the `FusionStrategy` trait, so adding one is a
//! compile-time-checked extension rather than string matching.
//!
//! # Strategies
//!
//! - `WeightedAverage`: weight-renormalized mean with a cross-modal
//!   consistency adjustment (default)
//! - `Maximum`: most optimistic single modality
//! - `Minimum`: most pessimistic single modality
//! - `Voting`: majority vote over binary real/fake votes
//! - `Learned`: reserved; currently dispatches to `WeightedAverage`

use crate::models::ModalityScore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Combined score and confidence produced by a strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusedSignal {
    pub score: f64,
    pub confidence: f64,
}

/// Selectable fusion strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    WeightedAverage,
    Maximum,
    Minimum,
    Voting,
    /// Reserved for a future trained fusion model. Selecting it is not an
    /// error; it behaves exactly like `WeightedAverage` until a model
    /// exists.
    Learned,
}

impl StrategyKind {
    /// Parse a strategy name from the request boundary.
    ///
    /// Unknown names are not an error; they fall back to the default
    /// strategy so a misconfigured caller still gets a result.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "weighted_average" => StrategyKind::WeightedAverage,
            "maximum" => StrategyKind::Maximum,
            "minimum" => StrategyKind::Minimum,
            "voting" => StrategyKind::Voting,
            "learned" => StrategyKind::Learned,
            other => {
                debug!(name = other, "unknown fusion strategy, using weighted_average");
                StrategyKind::default()
            }
        }
    }

    /// Wire name for reports and the strategy catalogue
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::WeightedAverage => "weighted_average",
            StrategyKind::Maximum => "maximum",
            StrategyKind::Minimum => "minimum",
            StrategyKind::Voting => "voting",
            StrategyKind::Learned => "learned",
        }
    }

    /// Resolve to the implementation that will run.
    ///
    /// `Learned` resolves to the weighted-average implementation; this is
    /// a documented fallback, not an error path.
    pub fn implementation(&self) -> &'static dyn FusionStrategy {
        match self {
            StrategyKind::WeightedAverage | StrategyKind::Learned => &WeightedAverage,
            StrategyKind::Maximum => &Maximum,
            StrategyKind::Minimum => &Minimum,
            StrategyKind::Voting => &Voting,
        }
    }
}

/// One fusion algorithm
///
/// `fuse` is only called with at least one score present; the engine
/// handles the zero-modality case before dispatch.
pub trait FusionStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn fuse(&self, scores: &[ModalityScore]) -> FusedSignal;
}

/// Weight-renormalized mean with cross-modal consistency adjustment
pub struct WeightedAverage;

// Consistency adjustment bounds: scores agreeing within a 15-point std
// earn a confidence boost, scores spread past 35 pay a penalty.
const AGREEMENT_STD: f64 = 15.0;
const DISAGREEMENT_STD: f64 = 35.0;
const CONSISTENCY_DELTA: f64 = 0.10;
const CONSISTENCY_CAP: f64 = 0.95;
const CONSISTENCY_FLOOR: f64 = 0.35;

impl FusionStrategy for WeightedAverage {
    fn name(&self) -> &'static str {
        "weighted_average"
    }

    fn description(&self) -> &'static str {
        "Weighted average of all modalities (recommended)"
    }

    fn fuse(&self, scores: &[ModalityScore]) -> FusedSignal {
        // Renormalize weights over the modalities actually present
        let weight_sum: f64 = scores.iter().map(|s| s.weight).sum();

        let score = scores
            .iter()
            .map(|s| s.score * s.weight / weight_sum)
            .sum::<f64>();
        let mut confidence = scores
            .iter()
            .map(|s| s.confidence * s.weight / weight_sum)
            .sum::<f64>();

        if scores.len() > 1 {
            let std = population_std(scores);
            if std < AGREEMENT_STD {
                confidence = (confidence + CONSISTENCY_DELTA).min(CONSISTENCY_CAP);
                debug!(std, confidence, "modalities agree, confidence boosted");
            } else if std > DISAGREEMENT_STD {
                confidence = (confidence - CONSISTENCY_DELTA).max(CONSISTENCY_FLOOR);
                debug!(std, confidence, "modalities disagree, confidence reduced");
            }
        }

        FusedSignal { score, confidence }
    }
}

/// Population standard deviation of the raw modality scores
fn population_std(scores: &[ModalityScore]) -> f64 {
    let n = scores.len() as f64;
    let mean = scores.iter().map(|s| s.score).sum::<f64>() / n;
    let variance = scores
        .iter()
        .map(|s| (s.score - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt()
}

/// Most optimistic modality wins
pub struct Maximum;

impl FusionStrategy for Maximum {
    fn name(&self) -> &'static str {
        "maximum"
    }

    fn description(&self) -> &'static str {
        "Most optimistic score (highest credibility)"
    }

    fn fuse(&self, scores: &[ModalityScore]) -> FusedSignal {
        // Strictly-greater comparison keeps the first of tied scores,
        // which is the Text > Audio > Video iteration order.
        let best = scores
            .iter()
            .fold(&scores[0], |best, s| if s.score > best.score { s } else { best });
        FusedSignal {
            score: best.score,
            confidence: best.confidence,
        }
    }
}

/// Most pessimistic modality wins
pub struct Minimum;

impl FusionStrategy for Minimum {
    fn name(&self) -> &'static str {
        "minimum"
    }

    fn description(&self) -> &'static str {
        "Most pessimistic score (lowest credibility)"
    }

    fn fuse(&self, scores: &[ModalityScore]) -> FusedSignal {
        let worst = scores
            .iter()
            .fold(&scores[0], |worst, s| if s.score < worst.score { s } else { worst });
        FusedSignal {
            score: worst.score,
            confidence: worst.confidence,
        }
    }
}

/// Majority voting over binary real/fake votes
pub struct Voting;

impl FusionStrategy for Voting {
    fn name(&self) -> &'static str {
        "voting"
    }

    fn description(&self) -> &'static str {
        "Majority voting across modalities"
    }

    fn fuse(&self, scores: &[ModalityScore]) -> FusedSignal {
        let real_votes = scores.iter().filter(|s| s.score > 50.0).count();
        let fake_votes = scores.len() - real_votes;

        let score = if real_votes > fake_votes {
            75.0
        } else if fake_votes > real_votes {
            25.0
        } else {
            50.0
        };

        let confidence =
            scores.iter().map(|s| s.confidence).sum::<f64>() / scores.len() as f64;

        debug!(real_votes, fake_votes, score, "voting fusion");
        FusedSignal { score, confidence }
    }
}

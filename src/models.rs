//! Core data models for verimodal
//!
//! These models represent the fusion engine's inputs and outputs:
//! per-modality scores, verdicts, explanations, and the final
//! `FusionReport` returned from every fuse call.

use crate::payloads::{AudioAnalysis, TextAnalysis, VideoAnalysis};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Content modality analyzed by an upstream analyzer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Text,
    Audio,
    Video,
}

impl Modality {
    /// Fixed iteration order. Tie-breaking in max/min fusion depends on
    /// this order being stable, so never iterate modalities via a hash map.
    pub const ALL: [Modality; 3] = [Modality::Text, Modality::Audio, Modality::Video];

    /// Capitalized label for report text
    pub fn label(&self) -> &'static str {
        match self {
            Modality::Text => "Text",
            Modality::Audio => "Audio",
            Modality::Video => "Video",
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Modality::Text => write!(f, "text"),
            Modality::Audio => write!(f, "audio"),
            Modality::Video => write!(f, "video"),
        }
    }
}

/// One modality's contribution to a fusion call
///
/// Produced fresh by the extractors on every call; `score` is a 0-100
/// credibility scalar (higher = more likely authentic), `confidence` is
/// 0-1, and `weight` is the configured fusion weight for this modality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModalityScore {
    pub modality: Modality,
    pub score: f64,
    pub confidence: f64,
    pub weight: f64,
}

/// Categorical outcome of a fusion call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Fake,
    Real,
    Uncertain,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Fake => write!(f, "FAKE"),
            Verdict::Real => write!(f, "REAL"),
            Verdict::Uncertain => write!(f, "UNCERTAIN"),
        }
    }
}

/// Qualitative confidence band for report text
///
/// `None` appears only in the no-data result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Medium,
    Low,
    None,
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceLevel::VeryHigh => write!(f, "Very High"),
            ConfidenceLevel::High => write!(f, "High"),
            ConfidenceLevel::Medium => write!(f, "Medium"),
            ConfidenceLevel::Low => write!(f, "Low"),
            ConfidenceLevel::None => write!(f, "None"),
        }
    }
}

/// Human-readable rationale attached to every fusion report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Multi-line summary: overall assessment, confidence band, and one
    /// line per contributing modality
    pub summary: String,
    pub verdict: Verdict,
    pub confidence_level: ConfidenceLevel,
    /// Fixed guidance keyed by verdict
    pub recommendation: String,
}

/// Echo of the raw analyzer payloads that went into a fusion call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub text: Option<TextAnalysis>,
    pub audio: Option<AudioAnalysis>,
    pub video: Option<VideoAnalysis>,
}

impl DetailedAnalysis {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.audio.is_none() && self.video.is_none()
    }
}

/// Complete output of one fusion call
///
/// Invariants: `final_score` is in 0-100, `confidence` is in 0-1, and
/// `modality_contributions` holds exactly the modalities whose payloads
/// were supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionReport {
    pub final_score: f64,
    pub final_verdict: Verdict,
    pub confidence: f64,
    pub modality_contributions: BTreeMap<Modality, ModalityScore>,
    pub explanation: Explanation,
    pub detailed_analysis: DetailedAnalysis,
    pub fusion_strategy: String,
    pub weights_used: crate::config::FusionWeights,
}

/// Catalogue entry describing one selectable fusion strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyInfo {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "default")]
    pub is_default: bool,
}

/// Trivial liveness signal for the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub engine_ready: bool,
}

//! Multi-Modal Credibility Fusion Engine
//!
//! verimodal combines independent text, audio, and video analyzer
//! outputs into a single explainable credibility verdict. Analyzers run
//! elsewhere; this crate only consumes their result payloads and decides.
//!
//! # Fusion Formula (weighted average, the default)
//!
//! ```text
//! score      = Σ(score_i × w_i / Σw_present)     over present modalities
//! confidence = Σ(conf_i  × w_i / Σw_present)
//!
//! Consistency adjustment (≥2 modalities):
//!   std(scores) < 15  → confidence + 0.10 (cap 0.95)   modalities agree
//!   std(scores) > 35  → confidence - 0.10 (floor 0.35) modalities disagree
//! ```
//!
//! # Verdict Thresholds
//!
//! - confidence below threshold (default 0.5) → UNCERTAIN
//! - score ≥ 70 → REAL
//! - score ≤ 30 → FAKE
//! - otherwise → UNCERTAIN
//!
//! # Example
//!
//! ```
//! use verimodal::{FusionEngine, TextAnalysis, Verdict};
//!
//! let engine = FusionEngine::default();
//! let text: TextAnalysis = serde_json::from_str(r#"{
//!     "ml_prediction": { "fake_probability": 0.05, "confidence": 0.9 }
//! }"#).unwrap();
//!
//! let report = engine.fuse(Some(&text), None, None);
//! assert_eq!(report.final_verdict, Verdict::Real);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod explain;
pub mod extract;
pub mod models;
pub mod payloads;
pub mod strategy;
pub mod verdict;

pub use config::FusionWeights;
pub use engine::{FusionEngine, DEFAULT_CONFIDENCE_THRESHOLD};
pub use error::FusionError;
pub use models::{
    ConfidenceLevel, DetailedAnalysis, Explanation, FusionReport, HealthStatus, Modality,
    ModalityScore, StrategyInfo, Verdict,
};
pub use payloads::{
    AudioAnalysis, AudioQuality, DeepfakeDetection, MlPrediction, Sentiment, TextAnalysis,
    TextFeatures, VideoAnalysis, VideoInfo, VideoQualityMetrics,
};
pub use strategy::StrategyKind;

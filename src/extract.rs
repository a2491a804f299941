//! Per-modality score extraction
//!
//! Each extractor turns one analyzer payload into a uniform
//! `ModalityScore`. Extraction is total: malformed or partial payloads
//! never fail, they substitute neutral defaults. When the preferred
//! model-based signal is missing, each modality falls back to heuristics
//! over its quality metrics.

use crate::config::FusionWeights;
use crate::models::{Modality, ModalityScore};
use crate::payloads::{AudioAnalysis, DeepfakeDetection, TextAnalysis, VideoAnalysis};
use tracing::debug;

// Neutral defaults substituted for missing payload fields
const NEUTRAL_FAKE_PROBABILITY: f64 = 0.5;
const NEUTRAL_CONFIDENCE: f64 = 0.5;
const NEUTRAL_AUTHENTICITY: f64 = 50.0;
const NEUTRAL_SNR_DB: f64 = 20.0;

/// Count indicators whose text marks a severe or extreme artifact
fn severe_indicator_count(detection: &DeepfakeDetection) -> usize {
    detection
        .indicators
        .iter()
        .filter(|i| {
            let lower = i.to_lowercase();
            lower.contains("severe") || lower.contains("extreme")
        })
        .count()
}

/// Extract a credibility score from a text analysis payload
pub fn extract_text_score(result: &TextAnalysis, weights: &FusionWeights) -> ModalityScore {
    let (score, confidence) = if let Some(ml) = &result.ml_prediction {
        let fake_prob = ml.fake_probability.unwrap_or(NEUTRAL_FAKE_PROBABILITY);
        let mut credibility = (1.0 - fake_prob) * 100.0;
        let mut confidence = ml.confidence.unwrap_or(NEUTRAL_CONFIDENCE);

        if let Some(features) = &ml.features {
            // Many clickbait hits mean the model saw strong evidence
            if features.clickbait_indicators > 3 {
                confidence = (confidence + 0.10).min(0.95);
            }
            if features.credibility_markers > 2 {
                credibility = (credibility + 5.0).min(100.0);
            }
        }
        (credibility, confidence)
    } else {
        // Heuristic fallback: score off manipulation indicators
        let manipulation_count = result.manipulation_indicators.len();
        let mut penalty = manipulation_count as f64 * 12.0;

        // Extreme sentiment polarity often indicates bias
        if let Some(sentiment) = &result.sentiment {
            if sentiment.compound.abs() > 0.8 {
                penalty += 8.0;
            }
        }

        let credibility = (65.0 - penalty).max(10.0);
        let confidence = 0.55 + (manipulation_count as f64 * 0.05).min(0.25);
        (credibility, confidence)
    };

    debug!(score, confidence, "extracted text score");
    ModalityScore {
        modality: Modality::Text,
        score,
        confidence,
        weight: weights.for_modality(Modality::Text),
    }
}

/// Extract an authenticity score from an audio analysis payload
pub fn extract_audio_score(result: &AudioAnalysis, weights: &FusionWeights) -> ModalityScore {
    let (score, confidence) = if let Some(df) = &result.deepfake_detection {
        let authenticity = df.authenticity_score.unwrap_or(NEUTRAL_AUTHENTICITY);
        let mut confidence = df.confidence.unwrap_or(NEUTRAL_CONFIDENCE);

        let severe = severe_indicator_count(df);
        if severe > 0 {
            confidence = (confidence + severe as f64 * 0.08).min(0.92);
        }
        (authenticity, confidence)
    } else {
        // Quality fallback
        let (snr, clipping) = result
            .quality
            .map(|q| {
                (
                    q.snr_db.unwrap_or(NEUTRAL_SNR_DB),
                    q.clipping_percentage.unwrap_or(0.0),
                )
            })
            .unwrap_or((NEUTRAL_SNR_DB, 0.0));

        let mut authenticity = 70.0;
        if snr < 15.0 {
            authenticity -= 15.0;
        }
        if snr > 50.0 {
            // Too clean for a natural recording
            authenticity -= 10.0;
        }
        if clipping > 1.0 {
            authenticity -= 10.0;
        }
        (authenticity, 0.5)
    };

    debug!(score, confidence, "extracted audio score");
    ModalityScore {
        modality: Modality::Audio,
        score,
        confidence,
        weight: weights.for_modality(Modality::Audio),
    }
}

/// Extract an authenticity score from a video analysis payload
pub fn extract_video_score(result: &VideoAnalysis, weights: &FusionWeights) -> ModalityScore {
    let (score, confidence) = if let Some(df) = &result.deepfake_detection {
        let authenticity = df.authenticity_score.unwrap_or(NEUTRAL_AUTHENTICITY);
        let mut confidence = df.confidence.unwrap_or(NEUTRAL_CONFIDENCE);

        let severe = severe_indicator_count(df);
        let edge_artifacts = df
            .indicators
            .iter()
            .any(|i| i.to_lowercase().contains("edge"));

        if severe > 0 {
            confidence = (confidence + severe as f64 * 0.07).min(0.88);
        }
        // Edge-blending artifacts are a strong face-swap tell
        if edge_artifacts {
            confidence = (confidence + 0.10).min(0.90);
        }
        (authenticity, confidence)
    } else {
        // Scene/quality fallback
        let duration = result
            .video_info
            .and_then(|info| info.duration)
            .unwrap_or(1.0)
            .max(1.0);
        let scene_rate = result.scene_change_count as f64 / duration;
        let sharpness = result
            .quality_metrics
            .and_then(|q| q.sharpness)
            .unwrap_or(0.0);

        let mut authenticity = 70.0;
        if scene_rate > 5.0 {
            authenticity -= 15.0;
        }
        if sharpness < 30.0 {
            authenticity -= 10.0;
        }
        (authenticity, 0.5)
    };

    debug!(score, confidence, "extracted video score");
    ModalityScore {
        modality: Modality::Video,
        score,
        confidence,
        weight: weights.for_modality(Modality::Video),
    }
}

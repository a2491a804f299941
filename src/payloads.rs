//! Analyzer output contracts
//!
//! Each upstream analyzer (text classification, audio forensics, video
//! forensics) reports its result as loosely-populated JSON. These structs
//! mirror those shapes with every field optional or defaulted, so a
//! partial payload deserializes cleanly instead of failing at the
//! boundary. Missing-field handling lives in the extractors, which
//! substitute documented neutral defaults.
//!
//! A payload should only be passed to the engine once its upstream
//! analysis reports COMPLETED; anything else must be treated as absent.

use serde::{Deserialize, Serialize};

/// Text analyzer output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// Model-based fake/real prediction, when the classifier ran
    #[serde(default)]
    pub ml_prediction: Option<MlPrediction>,

    /// Heuristic manipulation indicators found in the text
    #[serde(default)]
    pub manipulation_indicators: Vec<String>,

    /// Sentiment analysis of the cleaned text
    #[serde(default, rename = "sentiment_analysis")]
    pub sentiment: Option<Sentiment>,
}

/// Classifier prediction block inside a text payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MlPrediction {
    /// Probability the text is fake, 0-1
    #[serde(default)]
    pub fake_probability: Option<f64>,

    /// Model confidence in its own prediction, 0-1
    #[serde(default)]
    pub confidence: Option<f64>,

    /// Intermediate feature counts the model exposed
    #[serde(default)]
    pub features: Option<TextFeatures>,
}

/// Feature counts reported alongside a text prediction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFeatures {
    #[serde(default)]
    pub clickbait_indicators: u32,
    #[serde(default)]
    pub credibility_markers: u32,
}

/// Compound sentiment polarity, -1 (negative) to +1 (positive)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    #[serde(default)]
    pub compound: f64,
}

/// Audio analyzer output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioAnalysis {
    #[serde(default)]
    pub deepfake_detection: Option<DeepfakeDetection>,

    /// Signal quality metrics, used when no deepfake result is present
    #[serde(default)]
    pub quality: Option<AudioQuality>,
}

/// Deepfake detector sub-result, shared by the audio and video payloads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeepfakeDetection {
    /// 0-100, higher = more likely authentic
    #[serde(default)]
    pub authenticity_score: Option<f64>,

    #[serde(default)]
    pub confidence: Option<f64>,

    /// Free-text descriptions of detected artifacts
    #[serde(default)]
    pub indicators: Vec<String>,
}

/// Audio signal quality metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioQuality {
    #[serde(default)]
    pub snr_db: Option<f64>,
    #[serde(default)]
    pub clipping_percentage: Option<f64>,
}

/// Video analyzer output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoAnalysis {
    #[serde(default)]
    pub deepfake_detection: Option<DeepfakeDetection>,

    #[serde(default)]
    pub quality_metrics: Option<VideoQualityMetrics>,

    #[serde(default)]
    pub scene_change_count: u32,

    #[serde(default)]
    pub video_info: Option<VideoInfo>,
}

/// Frame quality metrics for the fallback video score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoQualityMetrics {
    /// Laplacian variance; low values indicate blur
    #[serde(default)]
    pub sharpness: Option<f64>,
}

/// Container metadata for the analyzed video
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,
}

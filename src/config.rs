//! Fusion weight configuration
//!
//! Weights control how much each modality contributes under the
//! weighted-average strategy. They are normalized to sum to 1.0 when the
//! engine is constructed and immutable afterward; changing weights means
//! constructing a new engine, never mutating one mid-flight.

use crate::error::FusionError;
use crate::models::Modality;
use serde::{Deserialize, Serialize};

/// Per-modality fusion weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionWeights {
    /// Weight for text analysis (default: 0.45)
    #[serde(default = "default_text_weight")]
    pub text: f64,

    /// Weight for audio analysis (default: 0.30)
    #[serde(default = "default_audio_weight")]
    pub audio: f64,

    /// Weight for video analysis (default: 0.25)
    #[serde(default = "default_video_weight")]
    pub video: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            text: default_text_weight(),
            audio: default_audio_weight(),
            video: default_video_weight(),
        }
    }
}

// Text is usually the most informative signal, audio carries voice
// authenticity, video covers visual manipulation.
fn default_text_weight() -> f64 {
    0.45
}
fn default_audio_weight() -> f64 {
    0.30
}
fn default_video_weight() -> f64 {
    0.25
}

impl FusionWeights {
    pub fn new(text: f64, audio: f64, video: f64) -> Self {
        Self { text, audio, video }
    }

    /// Check that weights sum to 1.0 (with tolerance)
    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() < 1e-9
    }

    pub fn sum(&self) -> f64 {
        self.text + self.audio + self.video
    }

    /// Normalize weights to sum to 1.0.
    ///
    /// Fails if the sum is not a positive finite number (all-zero or
    /// negative weights cannot be normalized); this is the engine's only
    /// construction-time error.
    pub fn normalized(&self) -> Result<Self, FusionError> {
        let sum = self.sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Err(FusionError::InvalidWeights {
                reason: "weights must sum to a positive finite value".to_string(),
                text: self.text,
                audio: self.audio,
                video: self.video,
            });
        }
        Ok(Self {
            text: self.text / sum,
            audio: self.audio / sum,
            video: self.video / sum,
        })
    }

    /// Weight configured for one modality
    pub fn for_modality(&self, modality: Modality) -> f64 {
        match modality {
            Modality::Text => self.text,
            Modality::Audio => self.audio,
            Modality::Video => self.video,
        }
    }
}

//! Errors that can occur when constructing a fusion engine
//!
//! Fusion itself never fails: malformed payload fields degrade to neutral
//! defaults and unknown strategy names fall back to the default strategy.
//! The one fatal condition is a weight configuration that cannot be
//! normalized, which is rejected at construction time.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FusionError {
    #[error("invalid fusion weights: {reason} (text={text}, audio={audio}, video={video})")]
    InvalidWeights {
        reason: String,
        text: f64,
        audio: f64,
        video: f64,
    },
}

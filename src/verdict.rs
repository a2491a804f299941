//! Verdict classification
//!
//! Pure two-input decision table mapping a fused `(score, confidence)`
//! pair to a categorical verdict. Low confidence gates the verdict to
//! `Uncertain` regardless of score.

use crate::models::Verdict;

/// Score at or above this is classified `Real`
pub const REAL_THRESHOLD: f64 = 70.0;
/// Score at or below this is classified `Fake`
pub const FAKE_THRESHOLD: f64 = 30.0;

/// Classify a fused score under the given confidence threshold
pub fn classify(score: f64, confidence: f64, confidence_threshold: f64) -> Verdict {
    if confidence < confidence_threshold {
        return Verdict::Uncertain;
    }

    if score >= REAL_THRESHOLD {
        Verdict::Real
    } else if score <= FAKE_THRESHOLD {
        Verdict::Fake
    } else {
        Verdict::Uncertain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_score_is_real() {
        assert_eq!(classify(75.0, 0.6, 0.5), Verdict::Real);
        assert_eq!(classify(70.0, 0.6, 0.5), Verdict::Real);
    }

    #[test]
    fn test_low_score_is_fake() {
        assert_eq!(classify(20.0, 0.6, 0.5), Verdict::Fake);
        assert_eq!(classify(30.0, 0.6, 0.5), Verdict::Fake);
    }

    #[test]
    fn test_middle_band_is_uncertain() {
        assert_eq!(classify(50.0, 0.6, 0.5), Verdict::Uncertain);
        assert_eq!(classify(69.9, 0.99, 0.5), Verdict::Uncertain);
        assert_eq!(classify(30.1, 0.99, 0.5), Verdict::Uncertain);
    }

    #[test]
    fn test_confidence_gate_overrides_score() {
        assert_eq!(classify(90.0, 0.3, 0.5), Verdict::Uncertain);
        assert_eq!(classify(5.0, 0.49, 0.5), Verdict::Uncertain);
    }

    #[test]
    fn test_confidence_at_threshold_passes_gate() {
        assert_eq!(classify(90.0, 0.5, 0.5), Verdict::Real);
    }
}

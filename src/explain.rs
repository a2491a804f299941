//! Explanation builder
//!
//! Composes the human-readable rationale attached to every fusion
//! report: a confidence band, a multi-line summary, and a fixed
//! recommendation keyed by verdict.

use crate::models::{ConfidenceLevel, Explanation, Modality, ModalityScore, Verdict};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Map a numeric confidence to its qualitative band
pub fn confidence_level(confidence: f64) -> ConfidenceLevel {
    if confidence >= 0.8 {
        ConfidenceLevel::VeryHigh
    } else if confidence >= 0.6 {
        ConfidenceLevel::High
    } else if confidence >= 0.4 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

fn recommendation_for(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Fake => {
            "This content shows significant indicators of manipulation or falsehood. \
             Exercise caution and verify from reliable sources."
        }
        Verdict::Real => {
            "This content appears credible with few indicators of manipulation. \
             However, always verify important claims."
        }
        Verdict::Uncertain => {
            "Analysis is inconclusive. Additional verification recommended before \
             drawing conclusions."
        }
    }
}

/// Build the explanation for a completed fusion call
pub fn build_explanation(
    score: f64,
    confidence: f64,
    verdict: Verdict,
    contributions: &BTreeMap<Modality, ModalityScore>,
) -> Explanation {
    let level = confidence_level(confidence);

    let mut summary = String::new();
    let _ = writeln!(summary, "Overall Assessment: {verdict} (Score: {score:.1}/100)");
    let _ = writeln!(
        summary,
        "Confidence Level: {level} ({:.2}%)",
        confidence * 100.0
    );
    let _ = writeln!(summary);
    let _ = writeln!(summary, "Analysis by Modality:");
    for modality in Modality::ALL {
        if let Some(contribution) = contributions.get(&modality) {
            let _ = writeln!(
                summary,
                "- {}: {:.1}/100 (confidence: {:.2}%)",
                modality.label(),
                contribution.score,
                contribution.confidence * 100.0
            );
        }
    }

    Explanation {
        summary,
        verdict,
        confidence_level: level,
        recommendation: recommendation_for(verdict).to_string(),
    }
}

/// Canned explanation for the no-data result
pub fn no_data_explanation() -> Explanation {
    Explanation {
        summary: "No analysis data available".to_string(),
        verdict: Verdict::Uncertain,
        confidence_level: ConfidenceLevel::None,
        recommendation: "Unable to analyze - no data provided".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_bands() {
        assert_eq!(confidence_level(0.95), ConfidenceLevel::VeryHigh);
        assert_eq!(confidence_level(0.8), ConfidenceLevel::VeryHigh);
        assert_eq!(confidence_level(0.79), ConfidenceLevel::High);
        assert_eq!(confidence_level(0.6), ConfidenceLevel::High);
        assert_eq!(confidence_level(0.45), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(0.39), ConfidenceLevel::Low);
        assert_eq!(confidence_level(0.0), ConfidenceLevel::Low);
    }

    #[test]
    fn test_summary_lists_contributing_modalities_in_order() {
        let mut contributions = BTreeMap::new();
        contributions.insert(
            Modality::Video,
            ModalityScore {
                modality: Modality::Video,
                score: 40.0,
                confidence: 0.5,
                weight: 0.25,
            },
        );
        contributions.insert(
            Modality::Text,
            ModalityScore {
                modality: Modality::Text,
                score: 82.5,
                confidence: 0.75,
                weight: 0.45,
            },
        );

        let explanation = build_explanation(65.4, 0.62, Verdict::Uncertain, &contributions);
        assert!(explanation
            .summary
            .starts_with("Overall Assessment: UNCERTAIN (Score: 65.4/100)"));
        assert!(explanation.summary.contains("Confidence Level: High"));

        let text_pos = explanation.summary.find("- Text: 82.5/100").unwrap();
        let video_pos = explanation.summary.find("- Video: 40.0/100").unwrap();
        assert!(text_pos < video_pos);
        assert!(!explanation.summary.contains("- Audio"));
    }

    #[test]
    fn test_recommendation_keyed_by_verdict() {
        let contributions = BTreeMap::new();
        let fake = build_explanation(10.0, 0.9, Verdict::Fake, &contributions);
        assert!(fake.recommendation.contains("Exercise caution"));
        let real = build_explanation(90.0, 0.9, Verdict::Real, &contributions);
        assert!(real.recommendation.contains("appears credible"));
    }

    #[test]
    fn test_no_data_explanation_uses_none_band() {
        let explanation = no_data_explanation();
        assert_eq!(explanation.confidence_level, ConfidenceLevel::None);
        assert_eq!(explanation.verdict, Verdict::Uncertain);
    }
}

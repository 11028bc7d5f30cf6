//! Quality scoring
//!
//! Confidence grows with usage volume alone; evidence also requires the
//! phrase's context tokens to co-occur above chance.

/// Derived quality scores for one phrase
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QualityScores {
    /// `1 - e^(-count/4)`: approaches 1 as usage count grows
    pub confidence: f64,
    /// `mean_positive_pmi * ln(1 + count)`
    pub evidence: f64,
}

/// Compute quality scores from a phrase's usage count and its mean positive
/// PMI (0.0 when the phrase has no positive-PMI tokens).
pub fn compute_quality(count: u64, mean_positive_pmi: f64) -> QualityScores {
    let confidence = 1.0 - (-(count as f64) / 4.0).exp();
    let mean = if mean_positive_pmi > 0.0 {
        mean_positive_pmi
    } else {
        0.0
    };
    QualityScores {
        confidence,
        evidence: mean * (count as f64).ln_1p(),
    }
}

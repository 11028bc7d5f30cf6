//! Pointwise mutual information
//!
//! PMI compares a phrase/token pair's observed joint frequency against the
//! frequency expected if the two were independent. Positive values mean more
//! co-occurrence than chance.

/// Sentinel for "no evidence": returned when any input count is zero.
///
/// Large enough in magnitude that it can never be mistaken for a real PMI
/// value, and strictly negative so positive-PMI aggregates always exclude it.
pub const NO_EVIDENCE: f64 = -1e6;

/// PMI between a phrase and a context token.
///
/// `co_count` rows contain both, `phrase_count` rows contain the phrase,
/// `token_count` rows contain the token, out of `total_contexts` rows.
pub fn compute_pmi(
    co_count: u64,
    phrase_count: u64,
    token_count: u64,
    total_contexts: u64,
) -> f64 {
    if co_count == 0 || phrase_count == 0 || token_count == 0 || total_contexts == 0 {
        return NO_EVIDENCE;
    }
    let total = total_contexts as f64;
    let joint = co_count as f64 / total;
    let expected = (phrase_count as f64 / total) * (token_count as f64 / total);
    safe_log(joint / expected)
}

/// Natural log guarded against non-positive input.
fn safe_log(value: f64) -> f64 {
    if value <= 0.0 {
        NO_EVIDENCE
    } else {
        value.ln()
    }
}

//! Per-phrase feature summaries
//!
//! Computes the full PMI vector over a phrase's co-occurring tokens plus
//! summary statistics restricted to the strictly positive entries.

use crate::stats::pmi::compute_pmi;
use crate::stats::store::{CorpusTotals, PhraseStats};
use rustc_hash::FxHashMap;

/// A phrase's PMI profile with positive-entry summary statistics
#[derive(Debug, Clone, Default)]
pub struct FeatureSummary {
    /// Token -> PMI for every token in the phrase's co-occurrence counts
    pub token_pmi: FxHashMap<String, f64>,
    /// Mean of PMI values > 0 (0.0 when none exist)
    pub mean_positive_pmi: f64,
    /// Population variance of PMI values > 0 (0.0 when none exist)
    pub variance_positive_pmi: f64,
    /// Maximum PMI value > 0 (0.0 when none exist)
    pub max_positive_pmi: f64,
    /// Number of PMI values > 0
    pub positive_count: u64,
}

/// Summarize a single phrase against the corpus totals.
pub fn summarize_phrase(stat: &PhraseStats, totals: &CorpusTotals) -> FeatureSummary {
    let mut summary = FeatureSummary::default();
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    let mut max = 0.0;
    let mut count = 0u64;

    for (token, &co_count) in &stat.token_counts {
        let token_total = totals.token_totals.get(token).copied().unwrap_or(0);
        let pmi = compute_pmi(co_count, stat.count, token_total, totals.total_contexts);
        summary.token_pmi.insert(token.clone(), pmi);
        if pmi > 0.0 {
            sum += pmi;
            sum_sq += pmi * pmi;
            count += 1;
            if pmi > max {
                max = pmi;
            }
        }
    }

    summary.max_positive_pmi = max;
    summary.positive_count = count;
    if count > 0 {
        let mean = sum / count as f64;
        summary.mean_positive_pmi = mean;
        // Sum-of-squares form can dip below zero in floating point.
        summary.variance_positive_pmi = (sum_sq / count as f64 - mean * mean).max(0.0);
    }
    summary
}

/// Summarize every phrase in the store.
pub fn summarize_all(
    phrases: &FxHashMap<String, PhraseStats>,
    totals: &CorpusTotals,
) -> FxHashMap<String, FeatureSummary> {
    phrases
        .iter()
        .map(|(phrase, stat)| (phrase.clone(), summarize_phrase(stat, totals)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::pmi::NO_EVIDENCE;

    fn phrase_with_tokens(count: u64, tokens: &[(&str, u64)]) -> PhraseStats {
        PhraseStats {
            count,
            score_sum: 0.0,
            region_counts: FxHashMap::default(),
            token_counts: tokens
                .iter()
                .map(|(t, c)| (t.to_string(), *c))
                .collect(),
        }
    }

    fn totals(total: u64, tokens: &[(&str, u64)]) -> CorpusTotals {
        CorpusTotals {
            total_contexts: total,
            token_totals: tokens
                .iter()
                .map(|(t, c)| (t.to_string(), *c))
                .collect(),
        }
    }

    #[test]
    fn test_single_positive_entry() {
        let stat = phrase_with_tokens(4, &[("party", 2)]);
        let totals = totals(16, &[("party", 4)]);
        let summary = summarize_phrase(&stat, &totals);

        let expected = 2.0_f64.ln();
        assert!((summary.token_pmi["party"] - expected).abs() < 1e-12);
        assert_eq!(summary.positive_count, 1);
        assert!((summary.mean_positive_pmi - expected).abs() < 1e-12);
        assert!((summary.max_positive_pmi - expected).abs() < 1e-12);
        // A single value has zero variance.
        assert!(summary.variance_positive_pmi.abs() < 1e-12);
    }

    #[test]
    fn test_missing_token_total_yields_sentinel() {
        let stat = phrase_with_tokens(4, &[("ghost", 2)]);
        let totals = totals(16, &[]);
        let summary = summarize_phrase(&stat, &totals);

        assert_eq!(summary.token_pmi["ghost"], NO_EVIDENCE);
        assert_eq!(summary.positive_count, 0);
        assert_eq!(summary.mean_positive_pmi, 0.0);
        assert_eq!(summary.variance_positive_pmi, 0.0);
        assert_eq!(summary.max_positive_pmi, 0.0);
    }

    #[test]
    fn test_negative_pmi_excluded_from_aggregates() {
        // "common" co-occurs below chance, "rare" above it.
        let stat = phrase_with_tokens(10, &[("common", 1), ("rare", 5)]);
        let totals = totals(100, &[("common", 90), ("rare", 6)]);
        let summary = summarize_phrase(&stat, &totals);

        assert!(summary.token_pmi["common"] < 0.0);
        assert!(summary.token_pmi["rare"] > 0.0);
        assert_eq!(summary.positive_count, 1);
        assert!((summary.mean_positive_pmi - summary.token_pmi["rare"]).abs() < 1e-12);
    }

    #[test]
    fn test_variance_over_two_entries() {
        let stat = phrase_with_tokens(4, &[("alpha", 2), ("beta", 4)]);
        let totals = totals(16, &[("alpha", 4), ("beta", 4)]);
        let summary = summarize_phrase(&stat, &totals);

        let a = summary.token_pmi["alpha"];
        let b = summary.token_pmi["beta"];
        assert_eq!(summary.positive_count, 2);
        let mean = (a + b) / 2.0;
        let variance = (a * a + b * b) / 2.0 - mean * mean;
        assert!((summary.mean_positive_pmi - mean).abs() < 1e-12);
        assert!((summary.variance_positive_pmi - variance).abs() < 1e-12);
        assert!((summary.max_positive_pmi - b.max(a)).abs() < 1e-12);
        assert!(summary.variance_positive_pmi >= 0.0);
    }
}

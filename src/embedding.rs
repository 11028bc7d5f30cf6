//! Embedding construction
//!
//! Selects a fixed vocabulary of the highest document-frequency tokens and
//! builds one dense PMI vector per sufficiently frequent phrase, aligned to
//! that vocabulary order.

use crate::stats::features::FeatureSummary;
use crate::stats::store::{CorpusTotals, PhraseStats};
use rustc_hash::FxHashMap;

/// Select the embedding vocabulary: top `limit` tokens by document
/// frequency, ties broken by token name ascending.
pub fn select_vocabulary(totals: &CorpusTotals, limit: usize) -> Vec<String> {
    let mut entries: Vec<(&String, u64)> = totals
        .token_totals
        .iter()
        .map(|(token, &count)| (token, count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(limit);
    entries.into_iter().map(|(token, _)| token.clone()).collect()
}

/// Build a PMI vector per phrase whose usage count meets `min_count`.
///
/// Coordinate `i` holds the phrase's PMI with `vocab[i]` when that value is
/// at least `min_pmi`, else 0.0. An empty vocabulary yields an empty set.
pub fn build_embeddings(
    phrases: &FxHashMap<String, PhraseStats>,
    features: &FxHashMap<String, FeatureSummary>,
    vocab: &[String],
    min_count: u64,
    min_pmi: f64,
) -> FxHashMap<String, Vec<f64>> {
    let mut embeddings = FxHashMap::default();
    if vocab.is_empty() {
        return embeddings;
    }
    for (phrase, stat) in phrases {
        if stat.count < min_count {
            continue;
        }
        let mut vector = vec![0.0; vocab.len()];
        if let Some(summary) = features.get(phrase) {
            for (i, token) in vocab.iter().enumerate() {
                let Some(&value) = summary.token_pmi.get(token) else {
                    continue;
                };
                if value >= min_pmi {
                    vector[i] = value;
                }
            }
        }
        embeddings.insert(phrase.clone(), vector);
    }
    embeddings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::features::summarize_all;

    fn totals(total: u64, tokens: &[(&str, u64)]) -> CorpusTotals {
        CorpusTotals {
            total_contexts: total,
            token_totals: tokens.iter().map(|(t, c)| (t.to_string(), *c)).collect(),
        }
    }

    #[test]
    fn test_vocabulary_order() {
        let totals = totals(10, &[("beta", 5), ("alpha", 5), ("gamma", 7), ("rare", 1)]);
        let vocab = select_vocabulary(&totals, 3);
        // Count descending, name ascending on the tie.
        assert_eq!(vocab, vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_vocabulary_limit_beyond_size() {
        let totals = totals(10, &[("alpha", 1)]);
        assert_eq!(select_vocabulary(&totals, 32), vec!["alpha"]);
        assert!(select_vocabulary(&totals, 0).is_empty());
    }

    #[test]
    fn test_embeddings_respect_min_count() {
        let mut phrases = FxHashMap::default();
        phrases.insert(
            "lit".to_string(),
            PhraseStats {
                count: 3,
                token_counts: [("party".to_string(), 2)].into_iter().collect(),
                ..PhraseStats::default()
            },
        );
        phrases.insert(
            "once".to_string(),
            PhraseStats {
                count: 1,
                token_counts: [("party".to_string(), 1)].into_iter().collect(),
                ..PhraseStats::default()
            },
        );
        let totals = totals(8, &[("party", 4)]);
        let features = summarize_all(&phrases, &totals);
        let vocab = select_vocabulary(&totals, 4);

        let embeddings = build_embeddings(&phrases, &features, &vocab, 2, 0.0);
        assert!(embeddings.contains_key("lit"));
        assert!(!embeddings.contains_key("once"));
        assert_eq!(embeddings["lit"].len(), vocab.len());
    }

    #[test]
    fn test_threshold_zeroes_coordinates() {
        let mut phrases = FxHashMap::default();
        phrases.insert(
            "lit".to_string(),
            PhraseStats {
                count: 4,
                token_counts: [("party".to_string(), 2), ("common".to_string(), 1)]
                    .into_iter()
                    .collect(),
                ..PhraseStats::default()
            },
        );
        // "common" appears in nearly every row, so its PMI is negative.
        let totals = totals(16, &[("party", 4), ("common", 15)]);
        let features = summarize_all(&phrases, &totals);
        let vocab = vec!["party".to_string(), "common".to_string()];

        let embeddings = build_embeddings(&phrases, &features, &vocab, 1, 0.0);
        let vector = &embeddings["lit"];
        assert!(vector[0] > 0.0);
        assert_eq!(vector[1], 0.0);
    }

    #[test]
    fn test_empty_vocabulary() {
        let phrases = FxHashMap::default();
        let features = FxHashMap::default();
        let embeddings = build_embeddings(&phrases, &features, &[], 1, 0.0);
        assert!(embeddings.is_empty());
    }
}

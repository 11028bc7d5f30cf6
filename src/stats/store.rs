//! Phrase statistics accumulation
//!
//! [`TrainerState`] is the mergeable accumulation model: per-phrase
//! statistics plus corpus-wide totals. It is the only state that survives
//! across runs (via the snapshot layer); everything else in the pipeline is
//! derived fresh from it.

use crate::nlp::StopwordFilter;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Minimum token length admitted into a phrase's co-occurrence counts.
const MIN_TOKEN_LEN: usize = 3;

/// Accumulated statistics for one phrase
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhraseStats {
    /// Number of context rows absorbed for this phrase
    pub count: u64,
    /// Running sum of per-occurrence scores
    pub score_sum: f64,
    /// Region label -> occurrence count
    pub region_counts: FxHashMap<String, u64>,
    /// Context token -> co-occurrence count (filtered tokens only)
    pub token_counts: FxHashMap<String, u64>,
}

impl PhraseStats {
    /// Mean per-occurrence score, 0.0 when nothing was absorbed
    pub fn avg_score(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.score_sum / self.count as f64
        }
    }
}

/// Corpus-wide counters used to normalize PMI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusTotals {
    /// One increment per absorbed context row
    pub total_contexts: u64,
    /// Token -> number of distinct rows containing it (document frequency)
    pub token_totals: FxHashMap<String, u64>,
}

/// The full accumulation model for a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainerState {
    /// Phrase string -> accumulated statistics
    pub phrases: FxHashMap<String, PhraseStats>,
    /// Corpus-wide totals
    pub totals: CorpusTotals,
}

impl TrainerState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb exactly one context row.
    ///
    /// Updates the phrase's statistics and the corpus totals together, so a
    /// corpus of N rows produces N calls. Per-phrase token counts keep only
    /// tokens of length >= 3 that differ from the phrase and are not stop
    /// words; document frequencies count every distinct token in the row,
    /// unfiltered.
    pub fn absorb(
        &mut self,
        phrase: &str,
        region: &str,
        score: f64,
        tokens: &[String],
        stopwords: &StopwordFilter,
    ) {
        let stat = self.phrases.entry(phrase.to_string()).or_default();
        stat.count += 1;
        stat.score_sum += score;
        if !region.is_empty() {
            *stat.region_counts.entry(region.to_string()).or_insert(0) += 1;
        }
        for token in tokens {
            if token.len() < MIN_TOKEN_LEN
                || token.as_str() == phrase
                || stopwords.is_stopword(token)
            {
                continue;
            }
            *stat.token_counts.entry(token.clone()).or_insert(0) += 1;
        }

        self.totals.total_contexts += 1;
        let unique: FxHashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in unique {
            *self
                .totals
                .token_totals
                .entry(token.to_string())
                .or_insert(0) += 1;
        }
    }

    /// Number of distinct phrases seen so far
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}

//! Token inverted index
//!
//! Maps each context token to the phrases it co-occurs with and their
//! counts. Built once per run over every phrase, with no filtering.

use crate::stats::store::PhraseStats;
use rustc_hash::FxHashMap;

/// Inverted index: token -> list of (phrase, co-occurrence count)
#[derive(Debug, Default)]
pub struct TokenIndex {
    entries: FxHashMap<String, Vec<(String, u64)>>,
}

impl TokenIndex {
    /// Build the index from every phrase's token counts.
    pub fn build(phrases: &FxHashMap<String, PhraseStats>) -> Self {
        let mut entries: FxHashMap<String, Vec<(String, u64)>> = FxHashMap::default();
        for (phrase, stat) in phrases {
            for (token, &count) in &stat.token_counts {
                entries
                    .entry(token.clone())
                    .or_default()
                    .push((phrase.clone(), count));
            }
        }
        Self { entries }
    }

    /// Phrases co-occurring with a token, if any
    pub fn get(&self, token: &str) -> Option<&[(String, u64)]> {
        self.entries.get(token).map(Vec::as_slice)
    }

    /// Number of distinct tokens indexed
    pub fn token_count(&self) -> usize {
        self.entries.len()
    }
}

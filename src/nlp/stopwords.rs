//! Stop-word filtering
//!
//! A fixed set of common English words excluded from co-occurrence
//! statistics. The set only affects per-phrase token counts; corpus-wide
//! document frequencies are accumulated over the unfiltered token stream.

use rustc_hash::FxHashSet;

/// Common English words excluded from phrase co-occurrence counts.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "am", "an", "and", "any",
    "are", "around", "as", "at", "back", "be", "because", "been", "before",
    "being", "but", "by", "can", "come", "could", "day", "did", "do", "does",
    "done", "dont", "down", "even", "every", "few", "find", "first", "for",
    "from", "get", "give", "go", "going", "good", "got", "had", "has", "have",
    "having", "he", "her", "here", "hers", "high", "him", "his", "how", "i",
    "if", "in", "into", "is", "isnt", "it", "its", "just", "keep", "know",
    "last", "like", "little", "long", "look", "lot", "made", "make", "many",
    "may", "me", "might", "more", "most", "much", "must", "my", "need", "no",
    "not", "now", "of", "off", "on", "once", "one", "only", "or", "other",
    "our", "out", "over", "people", "really", "right", "same", "see", "she",
    "should", "since", "so", "some", "still", "such", "take", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "thing",
    "think", "this", "those", "though", "through", "time", "to", "too", "up",
    "us", "very", "want", "was", "way", "we", "well", "were", "what", "when",
    "which", "who", "why", "will", "with", "without", "would", "year", "you",
    "your", "youre",
];

/// Membership filter over the fixed stop-word set
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<&'static str>,
}

impl StopwordFilter {
    /// Create a filter over the built-in English set
    pub fn new() -> Self {
        Self {
            words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Check whether a token is a stop word
    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of words in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new()
    }
}

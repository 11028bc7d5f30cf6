//! Phrase-similarity graph: token inverted index and related-phrase ranking.

pub mod index;
pub mod related;

pub use index::TokenIndex;
pub use related::related_phrases;

//! # slang-miner
//!
//! Offline statistical analysis of slang-phrase usage contexts.
//!
//! The library consumes a tab-separated corpus of phrase occurrences (with
//! region labels, sentiment scores, and surrounding free text) and produces
//! a structured report covering, per sufficiently frequent phrase: usage
//! volume, average score, regional distribution, statistically significant
//! co-occurring context tokens (PMI), related phrases, and optionally a
//! low-dimensional PMI embedding with a k-means cluster assignment.
//!
//! A run is a single-threaded, two-phase batch: absorb every row into the
//! mergeable [`TrainerState`], then derive all statistics from the
//! accumulated totals. State snapshots make training resumable across
//! corpus batches.

pub mod clustering;
pub mod corpus;
pub mod embedding;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pipeline;
pub mod report;
pub mod state;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use clustering::{run_kmeans, ClusterModel};
pub use corpus::CorpusReader;
pub use embedding::{build_embeddings, select_vocabulary};
pub use errors::{MinerError, Result};
pub use graph::{index::TokenIndex, related::related_phrases};
pub use nlp::{StopwordFilter, Tokenizer};
pub use pipeline::{RunPaths, RunSummary};
pub use report::Report;
pub use stats::{
    compute_pmi, compute_quality, summarize_all, summarize_phrase, CorpusTotals, FeatureSummary,
    PhraseStats, QualityScores, TrainerState, NO_EVIDENCE,
};
pub use types::MinerConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Statistical core: accumulation, PMI, feature summaries, quality scores.

pub mod features;
pub mod pmi;
pub mod quality;
pub mod store;

pub use features::{summarize_all, summarize_phrase, FeatureSummary};
pub use pmi::{compute_pmi, NO_EVIDENCE};
pub use quality::{compute_quality, QualityScores};
pub use store::{CorpusTotals, PhraseStats, TrainerState};

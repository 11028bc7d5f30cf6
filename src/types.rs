//! Core configuration for slang-miner
//!
//! All tunable knobs of the analysis pipeline live in [`MinerConfig`],
//! injected at startup and treated as immutable for the run.

use crate::errors::{MinerError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a mining run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinerConfig {
    /// Minimum usage count for a phrase to be reported or embedded
    pub min_count: u64,
    /// Maximum context tokens listed per phrase
    pub top_tokens: usize,
    /// Maximum related phrases listed per phrase
    pub related_limit: usize,
    /// Embedding vocabulary size (top document-frequency tokens)
    pub embedding_features: usize,
    /// Number of k-means clusters (0 disables clustering)
    pub cluster_count: usize,
    /// Lloyd iteration budget for k-means
    pub cluster_iterations: usize,
    /// Minimum PMI for an embedding coordinate to be kept
    pub min_pmi: f64,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_count: 2,
            top_tokens: 12,
            related_limit: 5,
            embedding_features: 32,
            cluster_count: 8,
            cluster_iterations: 25,
            min_pmi: 0.0,
        }
    }
}

impl MinerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.cluster_iterations == 0 {
            return Err(MinerError::invalid_config(
                "cluster_iterations must be > 0",
            ));
        }
        Ok(())
    }

    /// Builder method: set minimum usage count
    pub fn with_min_count(mut self, min_count: u64) -> Self {
        self.min_count = min_count;
        self
    }

    /// Builder method: set context-token list limit
    pub fn with_top_tokens(mut self, top_tokens: usize) -> Self {
        self.top_tokens = top_tokens;
        self
    }

    /// Builder method: set related-phrase list limit
    pub fn with_related_limit(mut self, related_limit: usize) -> Self {
        self.related_limit = related_limit;
        self
    }

    /// Builder method: set embedding vocabulary size
    pub fn with_embedding_features(mut self, embedding_features: usize) -> Self {
        self.embedding_features = embedding_features;
        self
    }

    /// Builder method: set cluster count
    pub fn with_cluster_count(mut self, cluster_count: usize) -> Self {
        self.cluster_count = cluster_count;
        self
    }

    /// Builder method: set Lloyd iteration budget
    pub fn with_cluster_iterations(mut self, cluster_iterations: usize) -> Self {
        self.cluster_iterations = cluster_iterations;
        self
    }

    /// Builder method: set the embedding PMI threshold
    pub fn with_min_pmi(mut self, min_pmi: f64) -> Self {
        self.min_pmi = min_pmi;
        self
    }
}

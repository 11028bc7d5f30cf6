//! Error types for slang-miner
//!
//! Fatal errors only: configuration problems and I/O failures at the file
//! boundaries. Data-level anomalies (short rows, malformed scores, absent
//! prior state) are recovered in place and never surface here.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MinerError>;

/// Main error type for slang-miner
#[derive(Error, Debug)]
pub enum MinerError {
    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The corpus TSV could not be opened or read
    #[error("Failed to read corpus {}: {source}", .path.display())]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report JSON could not be written
    #[error("Failed to write report {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The state snapshot could not be written
    #[error("Failed to write state {}: {source}", .path.display())]
    StateWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The related-phrase graph could not be written
    #[error("Failed to write graph {}: {source}", .path.display())]
    GraphWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl MinerError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a corpus read error
    pub fn corpus_read(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::CorpusRead {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a report write error
    pub fn report_write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::ReportWrite {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a state write error
    pub fn state_write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::StateWrite {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a graph write error
    pub fn graph_write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::GraphWrite {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for MinerError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

//! Corpus reading
//!
//! Consumes a tab-separated corpus of phrase usage contexts and absorbs
//! each data row into a [`TrainerState`]. The first line is a header and is
//! always skipped; rows with fewer than five fields are dropped silently.

use crate::nlp::{StopwordFilter, Tokenizer};
use crate::stats::store::TrainerState;
use std::io::{self, BufRead};
use tracing::debug;

// Positional columns: phrase, platform, regionHint, score, context.
const COL_PHRASE: usize = 0;
const COL_REGION: usize = 2;
const COL_SCORE: usize = 3;
const COL_CONTEXT: usize = 4;
const MIN_COLUMNS: usize = 5;

/// Reader that turns corpus rows into absorb calls
#[derive(Debug, Default)]
pub struct CorpusReader {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
}

impl CorpusReader {
    /// Create a reader with the built-in tokenizer and stop-word set
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            stopwords: StopwordFilter::new(),
        }
    }

    /// Absorb every data row from `reader` into `state`.
    ///
    /// Returns the number of rows actually absorbed (header and malformed
    /// rows excluded).
    pub fn absorb<R: BufRead>(&self, reader: R, state: &mut TrainerState) -> io::Result<u64> {
        let mut absorbed = 0u64;
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line_no == 0 {
                // Header row, skipped unconditionally.
                continue;
            }
            let columns: Vec<&str> = line.split('\t').collect();
            if columns.len() < MIN_COLUMNS {
                debug!(line = line_no + 1, fields = columns.len(), "skipping short row");
                continue;
            }
            let tokens = self.tokenizer.tokenize(columns[COL_CONTEXT]);
            let score = parse_score(columns[COL_SCORE]);
            state.absorb(
                columns[COL_PHRASE],
                columns[COL_REGION],
                score,
                &tokens,
                &self.stopwords,
            );
            absorbed += 1;
        }
        Ok(absorbed)
    }
}

/// Parse a score field; empty or malformed values map to 0.0.
pub fn parse_score(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

//! Incremental state snapshots
//!
//! A snapshot captures the full accumulation model (corpus totals plus
//! every phrase's statistics) as JSON, so a later run can load it and keep
//! absorbing new corpus batches without reprocessing history.

use crate::errors::{MinerError, Result};
use crate::stats::store::TrainerState;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Load a prior snapshot.
///
/// A missing or unreadable path is not an error: the run starts from an
/// empty state.
pub fn load_state(path: &Path) -> TrainerState {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!(path = %path.display(), %err, "no prior state, starting empty");
            return TrainerState::new();
        }
    };
    match serde_json::from_reader(BufReader::new(file)) {
        Ok(state) => state,
        Err(err) => {
            debug!(path = %path.display(), %err, "unreadable prior state, starting empty");
            TrainerState::new()
        }
    }
}

/// Persist the accumulated state. A write failure here is fatal.
pub fn save_state(path: &Path, state: &TrainerState) -> Result<()> {
    let file = File::create(path).map_err(|err| MinerError::state_write(path, err))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, state)?;
    writer
        .flush()
        .map_err(|err| MinerError::state_write(path, err))
}

//! Batch pipeline orchestration
//!
//! A run has a strict two-phase structure: absorb every corpus row (on top
//! of any merged prior state), then derive everything else — feature
//! summaries, embeddings, clusters, the report — from the fully-accumulated
//! totals. Nothing derived is computed per row.

use crate::clustering::run_kmeans;
use crate::corpus::CorpusReader;
use crate::embedding::{build_embeddings, select_vocabulary};
use crate::errors::{MinerError, Result};
use crate::graph::index::TokenIndex;
use crate::report;
use crate::state;
use crate::stats::features::summarize_all;
use crate::stats::store::TrainerState;
use crate::types::MinerConfig;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// File locations for one run
#[derive(Debug, Clone, Default)]
pub struct RunPaths {
    /// Corpus TSV to absorb
    pub input: PathBuf,
    /// Report JSON destination
    pub output: PathBuf,
    /// Prior state snapshot to merge, if any
    pub state_in: Option<PathBuf>,
    /// Where to save the post-absorb state, if requested
    pub state_out: Option<PathBuf>,
    /// Related-phrase edge list destination, if requested
    pub graph_output: Option<PathBuf>,
}

/// What a finished run reports back to the caller
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Rows absorbed from this run's corpus (excludes merged prior state)
    pub rows_absorbed: u64,
    /// Context rows accumulated overall, prior state included
    pub total_contexts: u64,
    /// Distinct phrases accumulated overall
    pub phrase_count: usize,
    /// Phrases that received an embedding vector
    pub embedded_phrases: usize,
    /// Whether clustering ran
    pub clustered: bool,
}

/// Execute a full mining run.
pub fn run(paths: &RunPaths, config: &MinerConfig) -> Result<RunSummary> {
    config.validate()?;

    let mut state = match &paths.state_in {
        Some(path) => state::load_state(path),
        None => TrainerState::new(),
    };

    let file =
        File::open(&paths.input).map_err(|err| MinerError::corpus_read(&paths.input, err))?;
    let reader = CorpusReader::new();
    let rows_absorbed = reader
        .absorb(BufReader::new(file), &mut state)
        .map_err(|err| MinerError::corpus_read(&paths.input, err))?;
    info!(
        rows = rows_absorbed,
        total_contexts = state.totals.total_contexts,
        phrases = state.phrase_count(),
        "corpus absorbed"
    );

    if let Some(path) = &paths.state_out {
        state::save_state(path, &state)?;
        info!(path = %path.display(), "state snapshot written");
    }

    let features = summarize_all(&state.phrases, &state.totals);
    let vocab = select_vocabulary(&state.totals, config.embedding_features);
    let embeddings = build_embeddings(
        &state.phrases,
        &features,
        &vocab,
        config.min_count,
        config.min_pmi,
    );
    let clusters = run_kmeans(
        &embeddings,
        config.cluster_count,
        config.cluster_iterations,
        &mut rand::thread_rng(),
    );
    if clusters.is_none() {
        debug!(
            embedded = embeddings.len(),
            requested = config.cluster_count,
            "clustering skipped"
        );
    }

    let index = TokenIndex::build(&state.phrases);
    let document = report::assemble(&state, &features, &index, &vocab, clusters.as_ref(), config);

    let file =
        File::create(&paths.output).map_err(|err| MinerError::report_write(&paths.output, err))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer
        .flush()
        .map_err(|err| MinerError::report_write(&paths.output, err))?;
    info!(path = %paths.output.display(), "report written");

    if let Some(path) = &paths.graph_output {
        let rendered = report::render_graph(&state, &index, config);
        fs::write(path, rendered).map_err(|err| MinerError::graph_write(path, err))?;
        info!(path = %path.display(), "related phrase graph written");
    }

    Ok(RunSummary {
        rows_absorbed,
        total_contexts: state.totals.total_contexts,
        phrase_count: state.phrase_count(),
        embedded_phrases: embeddings.len(),
        clustered: clusters.is_some(),
    })
}

use anyhow::Result;
use clap::Parser;
use slang_miner::pipeline::{self, RunPaths};
use slang_miner::MinerConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Mine a slang context corpus into a structured usage report.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Corpus TSV (phrase, platform, region, score, context)
    #[arg(long)]
    input: PathBuf,

    /// Report JSON destination
    #[arg(long, default_value = "slang_language_model.json")]
    output: PathBuf,

    /// Minimum usage count for a phrase to be reported or embedded
    #[arg(long, default_value_t = 2)]
    min_count: u64,

    /// Maximum context tokens listed per phrase
    #[arg(long, default_value_t = 12)]
    top_tokens: usize,

    /// Maximum related phrases listed per phrase
    #[arg(long, default_value_t = 5)]
    related_limit: usize,

    /// Write the related-phrase edge list to this TSV
    #[arg(long)]
    graph_output: Option<PathBuf>,

    /// Prior state snapshot to merge before absorbing the corpus
    #[arg(long)]
    state_in: Option<PathBuf>,

    /// Save the post-absorb state snapshot here
    #[arg(long)]
    state_out: Option<PathBuf>,

    /// Embedding vocabulary size
    #[arg(long, default_value_t = 32)]
    embedding_features: usize,

    /// Number of k-means clusters (0 disables clustering)
    #[arg(long, default_value_t = 8)]
    clusters: usize,

    /// K-means iteration budget
    #[arg(long, default_value_t = 25)]
    cluster_iterations: usize,

    /// Minimum PMI for an embedding coordinate to be kept
    #[arg(long, default_value_t = 0.0)]
    min_pmi: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = MinerConfig::new()
        .with_min_count(args.min_count)
        .with_top_tokens(args.top_tokens)
        .with_related_limit(args.related_limit)
        .with_embedding_features(args.embedding_features)
        .with_cluster_count(args.clusters)
        .with_cluster_iterations(args.cluster_iterations)
        .with_min_pmi(args.min_pmi);
    let paths = RunPaths {
        input: args.input,
        output: args.output,
        state_in: args.state_in,
        state_out: args.state_out,
        graph_output: args.graph_output.clone(),
    };

    pipeline::run(&paths, &config)?;
    println!(
        "Wrote language model summary to {}",
        paths.output.display()
    );
    if let Some(graph) = &args.graph_output {
        println!("Wrote related phrase graph to {}", graph.display());
    }
    Ok(())
}

//! Batch runner for the curation pipeline.
//!
//! Reads `.txt`/`.md` files from an input directory, runs them through
//! filter -> score -> improve -> chunk against a local Ollama server, and
//! writes chunk/rejection/report files to the output directory.

mod export;
mod loader;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use curation::{report, CurationConfig, CurationPipeline, OllamaLlm};
use ollama_client::OllamaClient;
use tracing_subscriber::EnvFilter;

/// Curate raw text documents into retrieval-ready chunks.
#[derive(Parser, Debug)]
#[command(name = "curate", version, about)]
struct Args {
    /// Input directory containing .txt or .md files
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for processed data
    #[arg(short, long)]
    output: PathBuf,

    /// Ollama model name (overrides OLLAMA_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Ollama base URL (overrides OLLAMA_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    /// Relevance keywords; documents mentioning none of them are rejected
    #[arg(long)]
    keyword: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mut client = OllamaClient::from_env().with_timeout(Duration::from_secs(args.timeout));
    if let Some(model) = &args.model {
        client = client.with_model(model);
    }
    if let Some(base_url) = &args.base_url {
        client = client.with_base_url(base_url);
    }

    let mut config = CurationConfig::default();
    if !args.keyword.is_empty() {
        config.filter.allowed_keywords = args.keyword.clone();
    }

    let pipeline = CurationPipeline::new(OllamaLlm::new(client), config);

    let inputs = loader::load_documents(&args.input)?;
    if inputs.is_empty() {
        println!("No documents to process. Exiting.");
        return Ok(());
    }

    let outcome = pipeline.process_batch(inputs).await;

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("cannot create output directory {}", args.output.display()))?;

    export::export_chunks(&args.output, &report::chunk_records(&outcome.documents))?;
    export::export_rejected(&args.output, &report::reject_records(&outcome.documents))?;
    export::export_report(&args.output, &report::score_reports(&outcome.documents))?;

    let stats = &outcome.stats;
    println!();
    println!("Pipeline execution complete");
    println!("  total input:          {}", stats.total_input);
    println!("  passed:               {}", stats.passed);
    println!("  rejected (filters):   {}", stats.rejected_filters);
    println!("  rejected (scoring):   {}", stats.rejected_evaluation);
    println!("  chunks exported:      {}", stats.chunks_produced);
    println!();
    println!("Outputs written to: {}", args.output.display());

    Ok(())
}

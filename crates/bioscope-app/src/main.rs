//! Bioscope application binary - composition root.
//!
//! Ties together all Bioscope crates into a single executable:
//! 1. Load configuration from TOML
//! 2. Load the publications corpus from JSON
//! 3. Build the knowledge graph (entity extraction over the whole corpus)
//! 4. Start the axum REST API server

mod cli;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;

use bioscope_api::{routes, AppState};
use bioscope_core::{BioscopeConfig, Corpus};
use bioscope_summarize::GeminiClient;

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config first; its log level feeds the tracing filter.
    let config_file = args.resolve_config_path();
    let mut config = BioscopeConfig::load_or_default(&config_file);

    // Tracing. CLI log level beats RUST_LOG beats the config file.
    let env_filter = match args.resolve_log_level() {
        Some(level) => tracing_subscriber::EnvFilter::new(level),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.general.log_level.clone())),
    };
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!("Starting Bioscope v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    if let Some(corpus_path) = args.resolve_corpus_path() {
        config.corpus.path = corpus_path;
    }
    config.general.port = args.resolve_port(config.general.port);

    // Corpus. A missing or malformed corpus file is fatal; the server has
    // nothing to serve without it.
    let corpus = match Corpus::load(Path::new(&config.corpus.path)) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(path = %config.corpus.path, error = %e, "Failed to load corpus");
            return Err(e.into());
        }
    };
    tracing::info!(documents = corpus.len(), path = %config.corpus.path, "Corpus loaded");

    // Summarizer. With no API key configured the server still runs; the
    // summarize endpoint reports the missing configuration per request.
    if config.summarize.resolved_api_key().is_empty() {
        tracing::warn!("No summarization API key configured; /api/summarize will fail");
    }
    let summarizer = Arc::new(GeminiClient::new(&config.summarize));

    // State (builds the knowledge graph from the corpus).
    let state = AppState::new(config.clone(), corpus, summarizer);
    tracing::info!(
        nodes = state.graph.node_count(),
        edges = state.graph.edge_count(),
        "Knowledge graph ready"
    );

    routes::start_server(&config, state).await?;

    Ok(())
}

//! Application state shared across all route handlers.
//!
//! The corpus and graph are loaded/built once at startup and immutable
//! afterward; per-session mutable state (the summary cache) lives behind
//! its own synchronization. All fields use `Arc` for cheap cloning.

use std::sync::Arc;
use std::time::Instant;

use bioscope_core::{BioscopeConfig, Corpus};
use bioscope_graph::Graph;
use bioscope_summarize::{StaticSummarizer, SummaryCache, Summarizer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<BioscopeConfig>,
    /// The loaded publication corpus.
    pub corpus: Arc<Corpus>,
    /// Knowledge graph built once from the corpus.
    pub graph: Arc<Graph>,
    /// Summarization collaborator.
    pub summarizer: Arc<dyn Summarizer>,
    /// Per-document-id summary memoization.
    pub summaries: Arc<SummaryCache>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState, building the graph from the corpus.
    pub fn new(config: BioscopeConfig, corpus: Corpus, summarizer: Arc<dyn Summarizer>) -> Self {
        let graph = bioscope_graph::build(&corpus);
        Self {
            config: Arc::new(config),
            corpus: Arc::new(corpus),
            graph: Arc::new(graph),
            summarizer,
            summaries: Arc::new(SummaryCache::new()),
            start_time: Instant::now(),
        }
    }

    /// State backed by a canned summarizer, for tests and offline runs.
    pub fn with_static_summaries(
        config: BioscopeConfig,
        corpus: Corpus,
        summary_text: &str,
    ) -> Self {
        Self::new(config, corpus, Arc::new(StaticSummarizer::new(summary_text)))
    }
}

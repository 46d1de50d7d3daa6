//! Route handler functions for all API endpoints.
//!
//! Each handler extracts query/body parameters via axum extractors,
//! runs the pure core functions against the shared state, and returns
//! JSON responses.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use bioscope_core::Document;
use bioscope_extract::normalize;
use bioscope_graph::{GraphEdge, GraphNode, NodeType, ViewConfig};

use crate::error::ApiError;
use crate::state::AppState;

/// Abstract snippets returned by search are capped at this many chars.
const SNIPPET_CHARS: usize = 300;

// =============================================================================
// Query parameter and body types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct GraphParams {
    /// Comma-separated node type names, e.g. `Publication,Mission`.
    pub types: Option<String>,
    pub max_publications: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// Document id; the cache and in-flight deduplication key.
    pub id: String,
    /// Natural-language question; defaults to asking about the title.
    pub question: Option<String>,
    /// Full document record. When absent the id is looked up in the corpus.
    pub context: Option<Document>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub document_count: usize,
    pub node_count: usize,
    pub edge_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultResponse {
    pub id: String,
    pub score: u32,
    pub title: String,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResultResponse>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GraphViewResponse {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphEdge>,
    pub node_count: usize,
    pub edge_count: usize,
    /// Total publications in the full graph, for slider bounds.
    pub total_publications: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub content: String,
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET /health - liveness plus corpus/graph statistics.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        document_count: state.corpus.len(),
        node_count: state.graph.node_count(),
        edge_count: state.graph.edge_count(),
    })
}

/// GET /api/search - ranked full-text search over the corpus.
///
/// A missing or blank query is a valid zero-result state, not an error.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let query = params.q.unwrap_or_default();
    let ranked = bioscope_search::search(&state.corpus, &query);
    let total = ranked.len();

    let limit = params.limit.unwrap_or(total);
    let results = ranked
        .into_iter()
        .take(limit)
        .map(|r| {
            let doc = state.corpus.get(&r.document_id);
            SearchResultResponse {
                title: doc
                    .map(|d| normalize(d.title.as_deref()))
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| "Untitled Publication".to_string()),
                abstract_snippet: doc
                    .and_then(|d| d.abstract_text.as_deref())
                    .map(|a| truncate(&normalize(Some(a)), SNIPPET_CHARS)),
                link: doc
                    .and_then(|d| d.link.as_deref())
                    .map(|l| normalize(Some(l))),
                id: r.document_id,
                score: r.relevance,
            }
        })
        .collect();

    Json(SearchResponse { results, total })
}

/// GET /api/graph - the visible subgraph for a view configuration.
pub async fn graph(
    State(state): State<AppState>,
    Query(params): Query<GraphParams>,
) -> Result<Json<GraphViewResponse>, ApiError> {
    let config = view_config(&state, &params)?;
    let visible = bioscope_graph::filter(&state.graph, &config);

    Ok(Json(GraphViewResponse {
        node_count: visible.node_count(),
        edge_count: visible.edge_count(),
        total_publications: state.graph.publication_count(),
        nodes: visible.nodes,
        links: visible.links,
    }))
}

/// POST /api/summarize - AI summary for one document, cached per id.
///
/// Concurrent requests for one id coalesce onto a single upstream call;
/// a cached id never re-issues the call. Upstream failure leaves the
/// cache unset so the document can be retried.
pub async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    if request.id.trim().is_empty() {
        return Err(ApiError::BadRequest("Field 'id' must not be empty".to_string()));
    }

    let document = match request.context {
        Some(doc) => doc,
        None => state
            .corpus
            .get(&request.id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Unknown document id '{}'", request.id)))?,
    };

    let question = request.question.unwrap_or_else(|| {
        format!(
            "Give me content and links on {}",
            normalize(document.title.as_deref())
        )
    });

    let summarizer = Arc::clone(&state.summarizer);
    let content = state
        .summaries
        .get_or_fetch(&request.id, || {
            let document = document.clone();
            async move { summarizer.summarize(&question, &document).await }
        })
        .await?;

    Ok(Json(SummarizeResponse { content }))
}

// =============================================================================
// Helpers
// =============================================================================

fn view_config(state: &AppState, params: &GraphParams) -> Result<ViewConfig, ApiError> {
    let mut config = ViewConfig {
        max_publications: state.config.graph.default_max_publications,
        ..ViewConfig::default()
    };

    if let Some(ref types) = params.types {
        let mut selected = std::collections::HashSet::new();
        for name in types.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let node_type = NodeType::parse(name).ok_or_else(|| {
                ApiError::BadRequest(format!(
                    "Unknown node type '{}'. Expected one of: Publication, Mission, Keyword, Organism, Location",
                    name
                ))
            })?;
            selected.insert(node_type);
        }
        config.selected_types = selected;
    }

    if let Some(max) = params.max_publications {
        // The filter itself never clamps; the owning layer keeps the
        // value at least 1.
        config.max_publications = max.max(1);
    }

    Ok(config)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

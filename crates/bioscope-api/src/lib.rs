//! Bioscope API crate - axum HTTP server for search, graph and summaries.
//!
//! Exposes the corpus through three endpoints (ranked search, filtered
//! knowledge graph, AI summarization) plus a health check, with per-IP
//! rate limiting on the summarization route.

pub mod error;
pub mod handlers;
pub mod rate_limit;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;

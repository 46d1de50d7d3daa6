//! Bioscope search crate - relevance ranking over the corpus.
//!
//! Scores every document against a free-text query with additive field
//! weights and returns matches in descending score order. Pure and
//! synchronous; recomputed in full for every query.

pub mod ranker;

pub use ranker::{search, SearchResult};

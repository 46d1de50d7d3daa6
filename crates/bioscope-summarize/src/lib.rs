//! Bioscope summarize crate - external AI summarization collaborator.
//!
//! Wraps the remote generative-language API behind a `Summarizer` trait,
//! normalizes its loosely shaped responses through a tagged payload type,
//! and memoizes results per document id with in-flight request coalescing.

pub mod cache;
pub mod client;
pub mod error;
pub mod payload;

pub use cache::SummaryCache;
pub use client::{GeminiClient, StaticSummarizer, Summarizer};
pub use error::SummarizeError;
pub use payload::SummaryPayload;

//! Bioscope graph crate - entity-relationship graph built from the corpus.
//!
//! The builder runs the entity extractor over every document and produces
//! one immutable node/edge graph per corpus load. The filter derives the
//! visible subgraph for a view configuration; it is a pure function
//! recomputed on every configuration change.

pub mod builder;
pub mod filter;
pub mod types;

pub use builder::build;
pub use filter::filter;
pub use types::{EdgeEndpoint, Graph, GraphEdge, GraphNode, NodeType, ViewConfig, VisibleGraph};

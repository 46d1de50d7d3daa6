//! Bioscope core crate - configuration, errors, and corpus loading.
//!
//! Holds the pieces every other crate depends on: the top-level error
//! type, the TOML configuration model, and the publication corpus
//! (document records parsed from a JSON mapping of id to fields).

pub mod config;
pub mod corpus;
pub mod error;

pub use config::BioscopeConfig;
pub use corpus::{Corpus, Document};
pub use error::{BioscopeError, Result};

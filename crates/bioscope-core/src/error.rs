use thiserror::Error;

/// Top-level error type for the Bioscope system.
///
/// Subsystem crates define their own error types and convert into
/// `BioscopeError` at the boundary so that the `?` operator works across
/// crates. Corpus-load failure is the only error that is fatal to the
/// graph and search views; everything else is recoverable per request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BioscopeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corpus load error: {0}")]
    CorpusLoad(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Summarization error: {0}")]
    Summarize(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for BioscopeError {
    fn from(err: toml::de::Error) -> Self {
        BioscopeError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for BioscopeError {
    fn from(err: toml::ser::Error) -> Self {
        BioscopeError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for BioscopeError {
    fn from(err: serde_json::Error) -> Self {
        BioscopeError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Bioscope operations.
pub type Result<T> = std::result::Result<T, BioscopeError>;

use thiserror::Error;

/// Errors from the summarization collaborator.
///
/// All variants are recoverable per request: a failure clears the loading
/// state and leaves the cache unset so a later retry is possible. No
/// retry is performed here.
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("api key is not configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(String),
    #[error("upstream returned status {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("unreadable response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(err: reqwest::Error) -> Self {
        SummarizeError::Http(err.to_string())
    }
}

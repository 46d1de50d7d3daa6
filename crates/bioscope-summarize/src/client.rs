//! Summarizer trait and the generative-language API client.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use bioscope_core::config::SummarizeConfig;
use bioscope_core::Document;

use crate::error::SummarizeError;
use crate::payload::SummaryPayload;

/// Produces a natural-language summary for a publication.
///
/// Dynamic dispatch (`Arc<dyn Summarizer>`) lets the server use the real
/// API client while tests substitute `StaticSummarizer`.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, question: &str, document: &Document)
        -> Result<String, SummarizeError>;
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Sends one request per call; failures surface as a single error with no
/// retry, leaving retry policy to the caller's interaction model.
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &SummarizeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.resolved_api_key(),
            model: config.model.clone(),
        }
    }

    fn system_instruction(document: &Document) -> String {
        let context = format!(
            "Title: {}\nAbstract: {}\nLink: {}",
            document.title.as_deref().unwrap_or("(none)"),
            document.abstract_text.as_deref().unwrap_or("(none)"),
            document.link.as_deref().unwrap_or("(none)")
        );
        format!(
            "You are a research assistant specializing in space life sciences. \
             Answer only from the publication context below. Be concise and \
             precise; preserve numeric results, experiment names and mission \
             context. Say when something is not present in the context instead \
             of speculating, and include links from the context when available.\n\n\
             Context:\n{}",
            context
        )
    }

    /// Pull the answer text out of a `generateContent` response body.
    ///
    /// The documented shape is `candidates[0].content.parts[0].text`; any
    /// other shape falls back to the tagged-payload normalization.
    fn extract_answer(body: Value) -> String {
        if let Some(text) = body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
        {
            return text.to_string();
        }
        SummaryPayload::from_value(body).render()
    }
}

#[async_trait]
impl Summarizer for GeminiClient {
    async fn summarize(
        &self,
        question: &str,
        document: &Document,
    ) -> Result<String, SummarizeError> {
        if self.api_key.is_empty() {
            return Err(SummarizeError::MissingApiKey);
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        );
        let body = json!({
            "system_instruction": {"parts": [{"text": Self::system_instruction(document)}]},
            "contents": [{"role": "user", "parts": [{"text": question}]}]
        });

        debug!(model = %self.model, "Requesting summary");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Summarization upstream failed");
            return Err(SummarizeError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SummarizeError::InvalidResponse(e.to_string()))?;
        Ok(Self::extract_answer(body))
    }
}

/// Summarizer that returns canned text. Used in tests and as an offline
/// stand-in when no upstream is reachable.
pub struct StaticSummarizer {
    text: String,
}

impl StaticSummarizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl Summarizer for StaticSummarizer {
    async fn summarize(
        &self,
        _question: &str,
        _document: &Document,
    ) -> Result<String, SummarizeError> {
        Ok(self.text.clone())
    }
}

//! Publication corpus loading.
//!
//! The corpus is a JSON document mapping document-id strings to records
//! with optional `Title`, `Abstract`, `Introduction` and `Link` fields.
//! Unknown fields are ignored. A malformed entry is skipped; a corpus
//! that fails to parse as a JSON object is a fatal `CorpusLoad` error.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{BioscopeError, Result};

/// One publication record, immutable once loaded.
///
/// Field values come straight from the source JSON; they may carry a
/// leading `Abstract`/`Introduction` label or surrounding quotes, which
/// the text normalizer strips downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(rename = "Introduction", skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(rename = "Link", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// The full collection of publication documents for a session.
///
/// Iteration order equals document order in the source JSON file
/// (`serde_json` is built with `preserve_order`). Publication truncation
/// in graph views and tie-breaking in search results both depend on this
/// order, so it is part of the corpus contract.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<(String, Document)>,
    by_id: HashMap<String, usize>,
}

impl Corpus {
    /// Parse a corpus from a JSON string.
    ///
    /// Entries whose value is not a well-formed record are skipped with a
    /// debug log; they contribute nothing to graph or search views.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| BioscopeError::CorpusLoad(e.to_string()))?;

        let entries = match value {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(BioscopeError::CorpusLoad(format!(
                    "expected a JSON object at the top level, got {}",
                    json_type_name(&other)
                )))
            }
        };

        let mut docs = Vec::with_capacity(entries.len());
        let mut by_id = HashMap::with_capacity(entries.len());

        for (id, entry) in entries {
            match serde_json::from_value::<Document>(entry) {
                Ok(doc) => {
                    by_id.insert(id.clone(), docs.len());
                    docs.push((id, doc));
                }
                Err(e) => {
                    debug!(document_id = %id, error = %e, "Skipping malformed corpus entry");
                }
            }
        }

        Ok(Self { docs, by_id })
    }

    /// Load a corpus from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BioscopeError::CorpusLoad(format!("failed to read {}: {}", path.display(), e))
        })?;
        let corpus = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            documents = corpus.len(),
            "Corpus loaded"
        );
        Ok(corpus)
    }

    /// Number of documents in the corpus.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Look up a document by its corpus id.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.by_id.get(id).map(|&i| &self.docs[i].1)
    }

    /// Iterate documents in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Document)> {
        self.docs.iter().map(|(id, doc)| (id.as_str(), doc))
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

//! Session summary cache with in-flight request coalescing.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::sync::OnceCell;

use crate::error::SummarizeError;

/// Key→text store memoizing summarization results per document id.
///
/// Write-once per id in normal operation: the first fetch for an id runs
/// the supplied future, concurrent callers for the same id await that
/// same in-flight result instead of issuing a duplicate call, and later
/// callers get the cached text. A failed fetch leaves the slot unset so
/// the id can be retried. No eviction; the cache lives for the session.
#[derive(Default)]
pub struct SummaryCache {
    entries: Mutex<HashMap<String, Arc<OnceCell<String>>>>,
}

impl SummaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached text for an id, if a fetch has completed.
    pub fn get(&self, id: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(id).and_then(|cell| cell.get().cloned())
    }

    /// Number of ids with a completed summary.
    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.values().filter(|cell| cell.initialized()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the summary for an id, running `fetch` at most once per id at
    /// a time. The per-id cell is the deduplication token: a second
    /// request while one is in flight coalesces onto its result.
    pub async fn get_or_fetch<F, Fut>(&self, id: &str, fetch: F) -> Result<String, SummarizeError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, SummarizeError>>,
    {
        let cell = {
            let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(entries.entry(id.to_string()).or_default())
        };

        cell.get_or_try_init(fetch).await.cloned()
    }
}

//! History read path over the record store

use crate::error::EngineError;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::debug;
use veracity_domain::traits::{RecordQuery, RecordStore};
use veracity_domain::VerdictStatus;

/// A past verification projected into the caller-facing shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// The claim that was verified
    pub text: String,

    /// Its classified verdict
    pub status: VerdictStatus,

    /// ISO-8601 time the record was created
    pub time: String,
}

/// Reads a requester's past verification records.
///
/// Independent of the verification pipeline; shares only the store.
pub struct HistoryReader<S: RecordStore> {
    store: Arc<Mutex<S>>,
}

impl<S> HistoryReader<S>
where
    S: RecordStore,
    S::Error: std::fmt::Display,
{
    /// Create a reader over a shared store handle
    pub fn new(store: Arc<Mutex<S>>) -> Self {
        Self { store }
    }

    /// Return the requester's past verifications, most recent first.
    ///
    /// Requires a non-empty requester id.
    pub fn history(&self, requester_id: &str) -> Result<Vec<HistoryEntry>, EngineError> {
        if requester_id.is_empty() {
            return Err(EngineError::InvalidInput("User ID required".to_string()));
        }

        let query = RecordQuery {
            requester_id: Some(requester_id.to_string()),
            limit: None,
        };

        let stored = self
            .store
            .lock()
            .map_err(|e| EngineError::Internal(format!("Store lock poisoned: {}", e)))?
            .find(&query)
            .map_err(|e| EngineError::Internal(e.to_string()))?;

        debug!("History query for '{}': {} records", requester_id, stored.len());

        Ok(stored
            .into_iter()
            .map(|item| HistoryEntry {
                text: item.record.claim_text,
                status: item.record.status,
                time: item.created_at,
            })
            .collect())
    }
}

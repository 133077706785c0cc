//! Veracity Storage Layer
//!
//! Implements the `RecordStore` trait over SQLite.
//!
//! # Architecture
//!
//! One append-only `records` table; the sources and explanation payloads
//! are stored as JSON columns and rehydrated on read. Records are
//! ordered by their creation timestamp (ISO-8601 strings sort
//! lexicographically).
//!
//! # Examples
//!
//! ```no_run
//! use veracity_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for record operations
//! ```

#![warn(missing_docs)]

use rusqlite::{params, Connection};
use std::path::Path;
use thiserror::Error;
use veracity_domain::traits::{RecordQuery, RecordStore};
use veracity_domain::{
    Explanation, RecordId, SourceCitation, StoredRecord, VerdictStatus, VerificationRecord,
};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON column (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid data found in a row
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of `RecordStore`
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe; share a store across tasks
/// behind a mutex.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a store at the given database path.
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    fn status_from_str(s: &str) -> Result<VerdictStatus, StoreError> {
        match s {
            "VERIFIED" => Ok(VerdictStatus::Verified),
            "CONTRADICTED" => Ok(VerdictStatus::Contradicted),
            "INCONCLUSIVE" => Ok(VerdictStatus::Inconclusive),
            other => Err(StoreError::InvalidData(format!(
                "Unknown verdict status: {}",
                other
            ))),
        }
    }
}

/// Raw row shape pulled from SQLite before JSON rehydration
struct RecordRow {
    id: String,
    requester: Option<String>,
    claim: String,
    status: String,
    confidence: String,
    sources: String,
    explanation: String,
    created_at: String,
}

impl RecordRow {
    fn into_stored(self) -> Result<StoredRecord, StoreError> {
        let id = RecordId::from_string(&self.id).map_err(StoreError::InvalidData)?;
        let status = SqliteStore::status_from_str(&self.status)?;
        let sources: Vec<SourceCitation> = serde_json::from_str(&self.sources)?;
        let explanation: Explanation = serde_json::from_str(&self.explanation)?;

        Ok(StoredRecord {
            id,
            created_at: self.created_at.clone(),
            record: VerificationRecord {
                status,
                confidence: self.confidence,
                timestamp: self.created_at,
                sources,
                explanation,
                claim_text: self.claim,
                requester_id: self.requester,
            },
        })
    }
}

impl RecordStore for SqliteStore {
    type Error = StoreError;

    fn create(&mut self, record: &VerificationRecord) -> Result<RecordId, Self::Error> {
        let id = RecordId::new();
        let sources = serde_json::to_string(&record.sources)?;
        let explanation = serde_json::to_string(&record.explanation)?;

        self.conn.execute(
            "INSERT INTO records (id, requester, claim, status, confidence, sources, explanation, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                id.to_string(),
                record.requester_id,
                record.claim_text,
                record.status.as_str(),
                record.confidence,
                sources,
                explanation,
                record.timestamp,
            ],
        )?;

        Ok(id)
    }

    fn find(&self, query: &RecordQuery) -> Result<Vec<StoredRecord>, Self::Error> {
        let mut sql = String::from(
            "SELECT id, requester, claim, status, confidence, sources, explanation, created_at
             FROM records WHERE 1=1",
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(requester) = &query.requester_id {
            sql.push_str(" AND requester = ?");
            params.push(Box::new(requester.clone()));
        }

        sql.push_str(" ORDER BY created_at DESC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            params.push(Box::new(limit));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let rows = stmt
            .query_map(&param_refs[..], |row| {
                Ok(RecordRow {
                    id: row.get(0)?,
                    requester: row.get(1)?,
                    claim: row.get(2)?,
                    status: row.get(3)?,
                    confidence: row.get(4)?,
                    sources: row.get(5)?,
                    explanation: row.get(6)?,
                    created_at: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(RecordRow::into_stored).collect()
    }
}

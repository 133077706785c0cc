//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates:
//! `veracity-gateway` for the inference service, `veracity-store`
//! for persistence.

use crate::record::{RecordId, StoredRecord, VerificationRecord};
use async_trait::async_trait;

/// Unstructured natural-language text returned by the inference service.
///
/// No internal structure is assumed beyond loosely-formatted lines; the
/// report parser in `veracity-engine` is the only consumer.
pub type RawReport = String;

/// Outbound boundary to the AI inference service
///
/// Implemented by the infrastructure layer (veracity-gateway)
#[async_trait]
pub trait InferenceService {
    /// Error type for inference calls
    type Error;

    /// Submit a claim and/or image for verification and return the
    /// free-text report produced by the service.
    ///
    /// Callers guarantee at least one of `claim` / `image` is populated;
    /// implementations do not re-validate.
    async fn submit(
        &self,
        claim: Option<&str>,
        image: Option<&str>,
    ) -> Result<RawReport, Self::Error>;
}

/// Trait for persisting and retrieving verification records
///
/// Implemented by the infrastructure layer (veracity-store)
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Persist a record, returning its assigned storage id
    fn create(&mut self, record: &VerificationRecord) -> Result<RecordId, Self::Error>;

    /// Query records matching criteria, ordered by creation time
    /// descending (most recent first)
    fn find(&self, query: &RecordQuery) -> Result<Vec<StoredRecord>, Self::Error>;
}

/// Query criteria for retrieving verification records
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    /// Filter by requester identity
    pub requester_id: Option<String>,

    /// Maximum results to return
    pub limit: Option<usize>,
}

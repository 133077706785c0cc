//! Verification records - the structured result of a verification run

use crate::status::VerdictStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a stored verification record, based on UUIDv7.
///
/// UUIDv7 provides chronological sortability for temporal queries and
/// requires no coordination for distributed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u128);

impl RecordId {
    /// Generate a new UUIDv7-based RecordId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Parse a RecordId from its UUID string form
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid record id: {}", e))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A structured reference to supporting or contradicting evidence,
/// extracted from the raw inference report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCitation {
    /// Source label (publisher, outlet, tool name)
    pub source: String,

    /// Title or description of the cited material
    pub title: String,

    /// Publication date as written in the report; `"Recent"` or `"N/A"`
    /// when the report carries no date
    pub date: String,

    /// Link to the cited material. No URL signal exists in the raw
    /// report text, so this is always `None` in the current extraction.
    pub url: Option<String>,
}

/// Human-readable explanation attached to a verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    /// One-line summary
    pub summary: String,

    /// Ordered supporting points
    pub points: Vec<String>,
}

/// The structured result of one verification run.
///
/// Created once per successfully parsed report and immutable thereafter.
/// The record store owns it after the persistence call returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRecord {
    /// Classified verdict
    pub status: VerdictStatus,

    /// Confidence as reported by the inference service, verbatim
    /// (`"High"`, `"87%"`, ...); `"N/A"` when absent
    pub confidence: String,

    /// ISO-8601 creation timestamp
    pub timestamp: String,

    /// Evidence citations extracted from the report
    pub sources: Vec<SourceCitation>,

    /// Explanation carrying the full raw report
    pub explanation: Explanation,

    /// The claim that was verified, or a placeholder for image-only runs
    pub claim_text: String,

    /// Identity of the requester, when one was supplied
    pub requester_id: Option<String>,
}

/// A verification record as returned from the store's read path,
/// together with its storage identity.
#[derive(Debug, Clone)]
pub struct StoredRecord {
    /// Storage identifier assigned at persistence time
    pub id: RecordId,

    /// ISO-8601 time the row was created
    pub created_at: String,

    /// The persisted record
    pub record: VerificationRecord,
}

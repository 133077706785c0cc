//! Veracity Domain Layer
//!
//! Core data model for the claim-verification service. This crate defines
//! the value objects that flow through the pipeline (submissions, verdict
//! records, source citations) and the trait interfaces behind which the
//! infrastructure lives.
//!
//! ## Key Concepts
//!
//! - **ClaimSubmission**: the input unit - a textual claim and/or an image
//! - **VerdictStatus**: the classified truth status of a claim
//! - **VerificationRecord**: the structured result built from an inference
//!   report; immutable once created
//! - **RecordStore / InferenceService**: boundaries implemented by the
//!   storage and gateway crates
//!
//! ## Architecture
//!
//! Infrastructure implementations live in other crates:
//! - `veracity-gateway` implements [`traits::InferenceService`]
//! - `veracity-store` implements [`traits::RecordStore`]
//! - `veracity-engine` orchestrates both

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod status;
pub mod submission;
pub mod traits;

// Re-exports for convenience
pub use record::{Explanation, RecordId, SourceCitation, StoredRecord, VerificationRecord};
pub use status::VerdictStatus;
pub use submission::ClaimSubmission;
pub use traits::RawReport;

//! Veracity Engine
//!
//! Verification orchestration and report parsing - the algorithmic core
//! of the service.
//!
//! # Architecture
//!
//! ```text
//! Submission → Engine → Gateway → (inference service) → Parser → Record
//!                                                          │
//!                                                   (best-effort persist)
//! ```
//!
//! # Key Features
//!
//! - **Report Parsing**: deterministic conversion of a free-text
//!   inference report into a typed verdict record; pure, total, never
//!   fails - unrecognized text degrades to default field values
//! - **Orchestration**: validate → call the inference service → parse →
//!   persist best-effort → return; service failures are surfaced, store
//!   failures are not
//! - **History**: independent read path projecting stored records into
//!   the caller-facing shape, most recent first
//!
//! # Example Usage
//!
//! ```no_run
//! use std::sync::{Arc, Mutex};
//! use veracity_engine::VerificationEngine;
//! use veracity_gateway::MockInference;
//! use veracity_store::SqliteStore;
//! use veracity_domain::ClaimSubmission;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = MockInference::new("Verdict: VERIFIED\nConfidence: High");
//! let store = Arc::new(Mutex::new(SqliteStore::new(":memory:")?));
//!
//! let engine = VerificationEngine::new(gateway, store);
//! let record = engine
//!     .verify(ClaimSubmission::from_text("The sky is blue"))
//!     .await?;
//!
//! println!("Verdict: {}", record.status);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod engine;
mod error;
mod history;
mod parser;
mod verdict;

pub use engine::{VerificationEngine, IMAGE_SUBMISSION_PLACEHOLDER};
pub use error::EngineError;
pub use history::{HistoryEntry, HistoryReader};
pub use parser::{ReportFragment, ReportParser};

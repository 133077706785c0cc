//! Verification orchestration pipeline

use crate::error::EngineError;
use crate::parser::ReportParser;
use chrono::{SecondsFormat, Utc};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use veracity_domain::traits::{InferenceService, RecordStore};
use veracity_domain::{ClaimSubmission, VerificationRecord};

/// Claim text recorded when a submission carried only an image
pub const IMAGE_SUBMISSION_PLACEHOLDER: &str = "Image Verification";

/// Orchestrates one verification run: validate the submission, call the
/// inference service, parse the report, persist best-effort, and return
/// the structured record.
///
/// Each call is an independent pipeline; concurrent submissions of the
/// same claim are processed independently with no dedup or coalescing.
pub struct VerificationEngine<I, S>
where
    I: InferenceService,
    S: RecordStore,
{
    inference: Arc<I>,
    store: Arc<Mutex<S>>,
    parser: ReportParser,
}

impl<I, S> VerificationEngine<I, S>
where
    I: InferenceService + Send + Sync,
    S: RecordStore,
    I::Error: std::fmt::Display,
    S::Error: std::fmt::Display,
{
    /// Create a new engine over an inference service and a shared store.
    ///
    /// The store handle is shared with the history read path, so it is
    /// taken pre-wrapped.
    pub fn new(inference: I, store: Arc<Mutex<S>>) -> Self {
        Self {
            inference: Arc::new(inference),
            store,
            parser: ReportParser::new(),
        }
    }

    /// Verify a claim submission.
    ///
    /// Fails with `InvalidInput` before any network call when the
    /// submission is empty, and with `ServiceUnavailable` when the
    /// inference service cannot produce a report. A persistence failure
    /// does not fail the operation - the record is still returned.
    pub async fn verify(
        &self,
        submission: ClaimSubmission,
    ) -> Result<VerificationRecord, EngineError> {
        if !submission.has_payload() {
            return Err(EngineError::InvalidInput(
                "Claim or image is required".to_string(),
            ));
        }

        info!(
            "Verifying submission (text: {}, image: {})",
            submission.claim_text.is_some(),
            submission.image_data.is_some()
        );

        let report = self
            .inference
            .submit(
                submission.claim_text.as_deref(),
                submission.image_data.as_deref(),
            )
            .await
            .map_err(|e| EngineError::ServiceUnavailable(e.to_string()))?;

        debug!("Report length: {} chars", report.len());

        let fragment = self.parser.parse(&report);

        let record = VerificationRecord {
            status: fragment.status,
            confidence: fragment.confidence,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            sources: fragment.sources,
            explanation: fragment.explanation,
            claim_text: submission
                .claim_text
                .filter(|claim| !claim.is_empty())
                .unwrap_or_else(|| IMAGE_SUBMISSION_PLACEHOLDER.to_string()),
            requester_id: submission.requester_id,
        };

        self.persist_best_effort(&record);

        info!("Verification complete: {}", record.status);

        Ok(record)
    }

    /// Fire-and-forget write to the record store. The outcome is
    /// logged and explicitly discarded; availability of the verdict to
    /// the caller takes precedence over durability.
    fn persist_best_effort(&self, record: &VerificationRecord) {
        let outcome = match self.store.lock() {
            Ok(mut store) => store
                .create(record)
                .map(|id| debug!("Verification record saved: {}", id))
                .map_err(|e| e.to_string()),
            Err(e) => Err(format!("Store lock poisoned: {}", e)),
        };

        if let Err(reason) = outcome {
            warn!("Failed to persist verification record: {}", reason);
        }
    }
}

//! Veracity Inference Gateway
//!
//! Outbound boundary to the external AI inference service.
//!
//! # Architecture
//!
//! This crate provides implementations of the `InferenceService` trait
//! from `veracity-domain`. The gateway treats the inference service as a
//! black box producing free text; converting that text into structured
//! data is the engine's job.
//!
//! # Providers
//!
//! - `MockInference`: deterministic mock for testing
//! - `HttpInferenceGateway`: HTTP integration with the inference endpoint
//!
//! # Examples
//!
//! ```
//! use veracity_gateway::MockInference;
//! use veracity_domain::traits::InferenceService;
//!
//! # async fn example() {
//! let gateway = MockInference::new("Verdict: VERIFIED");
//! let report = gateway.submit(Some("test claim"), None).await.unwrap();
//! assert_eq!(report, "Verdict: VERIFIED");
//! # }
//! ```

#![warn(missing_docs)]

pub mod http;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use veracity_domain::traits::InferenceService;
use veracity_domain::RawReport;

pub use http::HttpInferenceGateway;

/// Errors that can occur when calling the inference service
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    /// The service answered with a non-success status
    #[error("Inference service error: {0}")]
    ServiceError(String),

    /// The service could not be reached (connection refused, DNS
    /// failure, timeout)
    #[error("Inference service unreachable: {0}")]
    Unreachable(String),
}

/// Mock inference service for deterministic testing
///
/// Returns pre-configured reports without making any network calls.
///
/// # Examples
///
/// ```
/// use veracity_gateway::MockInference;
/// use veracity_domain::traits::InferenceService;
///
/// # async fn example() {
/// let mut gateway = MockInference::new("Verdict: INCONCLUSIVE");
/// gateway.add_response("the sky is blue", "Verdict: VERIFIED\nConfidence: High");
///
/// assert_eq!(
///     gateway.submit(Some("the sky is blue"), None).await.unwrap(),
///     "Verdict: VERIFIED\nConfidence: High"
/// );
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockInference {
    default_report: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    error: Arc<Mutex<Option<GatewayError>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockInference {
    /// Create a mock returning a fixed report for all submissions
    pub fn new(report: impl Into<String>) -> Self {
        Self {
            default_report: report.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific report for a given claim text
    pub fn add_response(&mut self, claim: impl Into<String>, report: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(claim.into(), report.into());
    }

    /// Make every subsequent submission fail with the given error
    pub fn set_error(&self, error: GatewayError) {
        *self.error.lock().unwrap() = Some(error);
    }

    /// Number of times `submit` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockInference {
    fn default() -> Self {
        Self::new("No verdict info here.")
    }
}

#[async_trait]
impl InferenceService for MockInference {
    type Error = GatewayError;

    async fn submit(
        &self,
        claim: Option<&str>,
        _image: Option<&str>,
    ) -> Result<RawReport, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }

        let responses = self.responses.lock().unwrap();
        if let Some(report) = claim.and_then(|c| responses.get(c)) {
            return Ok(report.clone());
        }

        Ok(self.default_report.clone())
    }
}

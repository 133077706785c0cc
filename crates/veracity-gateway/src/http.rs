//! HTTP gateway to the inference service
//!
//! Issues one POST per verification against the configured endpoint and
//! maps transport and HTTP failures into [`GatewayError`].
//!
//! # Features
//!
//! - Endpoint normalization tolerant of operator misconfiguration
//! - Bounded request timeout (expiry reported as `Unreachable`)
//! - Structured error payload decoding with status-text fallback
//!
//! # Examples
//!
//! ```no_run
//! use veracity_gateway::HttpInferenceGateway;
//!
//! let gateway = HttpInferenceGateway::new("http://127.0.0.1:8000/verify");
//! ```

use crate::GatewayError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use veracity_domain::traits::InferenceService;
use veracity_domain::RawReport;

/// Default inference service endpoint.
///
/// The configured address is used verbatim after normalization - the
/// gateway never appends a path segment, so a non-default endpoint must
/// include its full path.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/verify";

/// Default timeout for inference requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Report text substituted when the service answers 2xx without a
/// `result` field. The parser matches no pattern in it and degrades to
/// an inconclusive verdict.
pub const NO_REPORT_PLACEHOLDER: &str = "No report generated.";

/// HTTP implementation of the inference service boundary
pub struct HttpInferenceGateway {
    endpoint: String,
    client: reqwest::Client,
}

/// Request body for the inference endpoint
#[derive(Serialize)]
struct InferenceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    claim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

/// Success response from the inference endpoint
#[derive(Deserialize)]
struct InferenceResponse {
    result: Option<String>,
}

/// Error payload carried by non-2xx responses
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Normalize a configured endpoint address: trim surrounding whitespace
/// and strip any run of trailing path separators. A default path segment
/// is never appended.
fn normalize_endpoint(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

impl HttpInferenceGateway {
    /// Create a gateway for the given endpoint with the default timeout.
    ///
    /// The endpoint is normalized once here; the gateway has no other
    /// dependence on ambient configuration.
    pub fn new(endpoint: impl AsRef<str>) -> Self {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a gateway with an explicit request timeout
    pub fn with_timeout(endpoint: impl AsRef<str>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap();

        Self {
            endpoint: normalize_endpoint(endpoint.as_ref()),
            client,
        }
    }

    /// The normalized endpoint this gateway targets
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InferenceService for HttpInferenceGateway {
    type Error = GatewayError;

    /// Submit a claim and/or image and return the free-text report.
    ///
    /// Exactly one outbound call per invocation; no retries, no caching.
    async fn submit(
        &self,
        claim: Option<&str>,
        image: Option<&str>,
    ) -> Result<RawReport, Self::Error> {
        debug!("Calling inference service at {}", self.endpoint);

        let request_body = InferenceRequest {
            claim: claim.map(str::to_string),
            image: image.map(str::to_string),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GatewayError::Unreachable(format!("Request failed: {}", e)))?;

        let status = response.status();
        debug!("Inference service response status: {}", status);

        if !status.is_success() {
            // Prefer the structured error payload; fall back to the
            // transport's status text when decoding fails.
            let message = match response.json::<ErrorBody>().await {
                Ok(ErrorBody {
                    detail: Some(detail),
                }) => detail,
                _ => status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            };
            return Err(GatewayError::ServiceError(message));
        }

        let payload: InferenceResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::ServiceError(format!("Invalid response body: {}", e)))?;

        Ok(payload
            .result
            .unwrap_or_else(|| NO_REPORT_PLACEHOLDER.to_string()))
    }
}

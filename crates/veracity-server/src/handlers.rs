//! HTTP request handlers for the verification service.
//!
//! Implements claim submission, history retrieval, and health check
//! endpoints using axum.

use axum::{
    extract::{DefaultBodyLimit, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use veracity_domain::traits::{InferenceService, RecordStore};
use veracity_domain::{ClaimSubmission, Explanation, SourceCitation, VerdictStatus, VerificationRecord};
use veracity_engine::{EngineError, HistoryEntry, HistoryReader, VerificationEngine};

/// Request bodies may carry base64 image payloads; allow up to 50 MB.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Shared application state
pub struct AppState<I, S>
where
    I: InferenceService,
    S: RecordStore,
{
    /// Verification pipeline
    pub engine: Arc<VerificationEngine<I, S>>,
    /// History read path
    pub history: Arc<HistoryReader<S>>,
}

impl<I, S> Clone for AppState<I, S>
where
    I: InferenceService,
    S: RecordStore,
{
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            history: Arc::clone(&self.history),
        }
    }
}

/// Claim verification request
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// Textual claim to verify
    pub claim: Option<String>,
    /// Base64 image payload
    pub image: Option<String>,
    /// Optional requester identity
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Claim verification response - the documented projection of a
/// verification record
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    /// Classified verdict
    pub status: VerdictStatus,
    /// Confidence text as reported
    pub confidence: String,
    /// ISO-8601 creation time
    pub timestamp: String,
    /// Evidence citations
    pub sources: Vec<SourceCitation>,
    /// Explanation carrying the full report
    pub explanation: Explanation,
}

impl From<VerificationRecord> for VerifyResponse {
    fn from(record: VerificationRecord) -> Self {
        Self {
            status: record.status,
            confidence: record.confidence,
            timestamp: record.timestamp,
            sources: record.sources,
            explanation: record.explanation,
        }
    }
}

/// History query parameters
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    /// Requester identity (required)
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Current server time, ISO-8601
    pub timestamp: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type wrapping the engine's error kinds
#[derive(Debug)]
pub struct AppError(EngineError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            EngineError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            EngineError::ServiceUnavailable(detail) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("AI service unavailable: {}", detail),
            ),
            EngineError::Internal(detail) => {
                // Log the detail; the caller sees a generic message.
                error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        AppError(e)
    }
}

/// POST /api/verify - Verify a claim
async fn verify_claim<I, S>(
    State(state): State<AppState<I, S>>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, AppError>
where
    I: InferenceService + Send + Sync + 'static,
    I::Error: std::fmt::Display,
    S: RecordStore + Send + 'static,
    S::Error: std::fmt::Display,
{
    let submission = ClaimSubmission {
        claim_text: request.claim,
        image_data: request.image,
        requester_id: request.user_id,
    };

    let record = state.engine.verify(submission).await?;

    Ok(Json(VerifyResponse::from(record)))
}

/// GET /api/history?userId=... - A requester's past verifications,
/// most recent first
async fn get_history<I, S>(
    State(state): State<AppState<I, S>>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<HistoryEntry>>, AppError>
where
    I: InferenceService + Send + Sync + 'static,
    S: RecordStore + Send + 'static,
    S::Error: std::fmt::Display,
{
    let user_id = params.user_id.unwrap_or_default();
    let entries = state.history.history(&user_id)?;

    Ok(Json(entries))
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    })
}

/// Create the axum router with all routes
pub fn create_router<I, S>(state: AppState<I, S>) -> Router
where
    I: InferenceService + Send + Sync + 'static,
    I::Error: std::fmt::Display,
    S: RecordStore + Send + 'static,
    S::Error: std::fmt::Display,
{
    Router::new()
        .route("/api/verify", post(verify_claim::<I, S>))
        .route("/api/history", get(get_history::<I, S>))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Mutex;
    use tower::ServiceExt; // for oneshot
    use veracity_gateway::{GatewayError, MockInference};
    use veracity_store::SqliteStore;

    fn create_test_state(gateway: MockInference) -> AppState<MockInference, SqliteStore> {
        let store = Arc::new(Mutex::new(SqliteStore::new(":memory:").unwrap()));
        AppState {
            engine: Arc::new(VerificationEngine::new(gateway, Arc::clone(&store))),
            history: Arc::new(HistoryReader::new(store)),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state(MockInference::default()));

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_verify_returns_documented_projection() {
        let gateway = MockInference::new(
            "Verdict: CONTRADICTED\nConfidence: High\nSources:\n1. Reuters: Markets Fall (2024-05-01)",
        );
        let app = create_router(create_test_state(gateway));

        let request = Request::builder()
            .method("POST")
            .uri("/api/verify")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"claim": "Markets rose today", "userId": "user-1"}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "CONTRADICTED");
        assert_eq!(json["confidence"], "High");
        assert_eq!(json["sources"][0]["source"], "Reuters");
        assert_eq!(json["sources"][0]["title"], "Markets Fall");
        assert_eq!(json["sources"][0]["date"], "2024-05-01");
        assert_eq!(json["explanation"]["summary"], "AI Verification Complete");
        // Claim and requester stay out of the response body
        assert!(json.get("claimText").is_none());
        assert!(json.get("userId").is_none());
    }

    #[tokio::test]
    async fn test_verify_empty_submission_is_bad_request() {
        let app = create_router(create_test_state(MockInference::default()));

        let request = Request::builder()
            .method("POST")
            .uri("/api/verify")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"claim": ""}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("required"));
    }

    #[tokio::test]
    async fn test_verify_service_error_is_service_unavailable() {
        let gateway = MockInference::default();
        gateway.set_error(GatewayError::ServiceError("model overloaded".to_string()));
        let app = create_router(create_test_state(gateway));

        let request = Request::builder()
            .method("POST")
            .uri("/api/verify")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"claim": "some claim"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = body_json(response).await;
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("model overloaded"));
    }

    #[tokio::test]
    async fn test_history_requires_user_id() {
        let app = create_router(create_test_state(MockInference::default()));

        let request = Request::builder()
            .uri("/api/history")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_verify_then_history_round_trip() {
        let gateway = MockInference::new("Verdict: VERIFIED\nConfidence: High");
        let state = create_test_state(gateway);
        let app = create_router(state);

        let request = Request::builder()
            .method("POST")
            .uri("/api/verify")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"claim": "The sky is blue", "userId": "user-7"}"#,
            ))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let request = Request::builder()
            .uri("/api/history?userId=user-7")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["text"], "The sky is blue");
        assert_eq!(entries[0]["status"], "VERIFIED");
        assert!(entries[0]["time"].is_string());
    }
}

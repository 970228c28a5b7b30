//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the analysis itself.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use serde_json::Value;

use super::dto::{AnalyzeRequest, EndpointInfo, HealthResponse, ServiceInfoResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::{AnalysisResult, Ticket};
use crate::models::sample_tickets;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Service information
// =============================================================================

/// GET /
///
/// Describe the service and its endpoints.
pub async fn root() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: "Ticket analytics API".to_string(),
        endpoints: vec![
            EndpointInfo::new("GET", "/health", "Service health"),
            EndpointInfo::new("GET", "/v1/sample-tickets", "Demonstration tickets"),
            EndpointInfo::new("POST", "/v1/analyze", "Analyze a ticket batch"),
        ],
    })
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /v1/sample-tickets
///
/// Tickets that can be posted back to the analyze endpoint.
pub async fn get_sample_tickets() -> Json<Vec<Ticket>> {
    Json(sample_tickets())
}

// =============================================================================
// Analysis
// =============================================================================

/// POST /v1/analyze
///
/// Analyze the submitted ticket batch. Validation failures map to 400, any
/// other engine failure to 500.
pub async fn analyze_tickets(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> HandlerResult<AnalysisResult> {
    let Json(body) = body?;
    let records = AnalyzeRequest::from_value(body)?.into_records()?;
    let now = Utc::now();
    let config = state.analytics.clone();
    let batch_size = records.len();

    // CPU-bound work runs off the async executor
    let result = tokio::task::spawn_blocking(move || {
        crate::services::analyze_at(&records, now, &config)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    tracing::info!(
        tickets = batch_size,
        projected = result.projection.is_some(),
        "Analyzed ticket batch"
    );
    Ok(Json(result))
}

//! Data Transfer Objects for the HTTP API.
//!
//! The analysis response itself is [`crate::api::AnalysisResult`]; this module
//! holds the request-side shapes and the small informational responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::AppError;

pub use crate::api::{AnalysisResult, Ticket};

/// Request body for the analyze endpoint.
///
/// Accepts either a bare JSON array of tickets or an object wrapping the
/// array under `tickets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyzeRequest {
    Bare(Vec<Value>),
    Wrapped {
        #[serde(default)]
        tickets: Option<Value>,
    },
}

impl AnalyzeRequest {
    /// Parse a request body, checking only its top-level shape.
    pub fn from_value(body: Value) -> Result<Self, AppError> {
        serde_json::from_value(body).map_err(|_| {
            AppError::BadRequest(
                "Request body must be a ticket array or an object with a 'tickets' array"
                    .to_string(),
            )
        })
    }

    /// Extract the non-empty list of raw ticket records.
    pub fn into_records(self) -> Result<Vec<Value>, AppError> {
        let records = match self {
            AnalyzeRequest::Bare(records) => records,
            AnalyzeRequest::Wrapped { tickets: None } => {
                return Err(AppError::BadRequest("No ticket data provided".to_string()))
            }
            AnalyzeRequest::Wrapped {
                tickets: Some(Value::Array(records)),
            } => records,
            AnalyzeRequest::Wrapped { tickets: Some(_) } => {
                return Err(AppError::BadRequest("'tickets' must be an array".to_string()))
            }
        };

        if records.is_empty() {
            return Err(AppError::BadRequest("No ticket data provided".to_string()));
        }
        Ok(records)
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

/// Service description returned by the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    pub message: String,
    /// Endpoint path to short description
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
    pub description: String,
}

impl EndpointInfo {
    pub fn new(method: &str, path: &str, description: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            description: description.to_string(),
        }
    }
}

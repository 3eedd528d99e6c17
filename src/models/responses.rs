use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{QuizState, Recommendations};
use crate::models::domain::{Progress, Question, RecommendationRecord};

/// Render-ready recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub top: Vec<RecommendationRecord>,
    /// Omitted when there is nothing beyond the top section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub others: Option<Vec<RecommendationRecord>>,
    pub answered: usize,
}

impl From<&Recommendations> for RecommendationsResponse {
    fn from(results: &Recommendations) -> Self {
        Self {
            top: results.top_records(),
            others: results.has_others().then(|| results.other_records()),
            answered: results.answered,
        }
    }
}

/// Snapshot of a quiz session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub state: QuizState,
    pub progress: Progress,
    /// The question to show next, if the quiz is in progress
    pub question: Option<Question>,
    /// Present once the quiz is completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<RecommendationsResponse>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub active_sessions: u64,
}

/// Error response, also used as the error type of failed extractors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code: status.as_u16(),
        }
    }

    pub fn bad_request(error: &str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error, message)
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorResponse {}

impl ResponseError for ErrorResponse {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(ResponseError::status_code(self)).json(self)
    }
}

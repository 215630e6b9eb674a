use analyzer::AnalysisError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use semantic::SemanticError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Analysis(err) => match err {
                AnalysisError::MissingInput(_) => StatusCode::BAD_REQUEST,
                AnalysisError::Provider(SemanticError::InvalidConfig(_)) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                AnalysisError::Provider(_) => StatusCode::BAD_GATEWAY,
                AnalysisError::UpstreamParse { .. } | AnalysisError::ShapeMismatch { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ServerError::NotFound => "NOT_FOUND",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::Analysis(err) => match err {
                AnalysisError::MissingInput(_) => "MISSING_INPUT",
                AnalysisError::Provider(SemanticError::InvalidConfig(_)) => "CONFIG_ERROR",
                AnalysisError::Provider(_) => "UPSTREAM_ERROR",
                AnalysisError::UpstreamParse { .. } => "UPSTREAM_PARSE_ERROR",
                AnalysisError::ShapeMismatch { .. } => "SHAPE_MISMATCH",
            },
        }
    }

    /// Structured context for the caller, when there is any.
    pub fn details(&self) -> Option<Value> {
        match self {
            ServerError::Analysis(AnalysisError::UpstreamParse { raw }) => {
                Some(json!({ "raw": raw }))
            }
            ServerError::Analysis(AnalysisError::ShapeMismatch { reason, sample }) => {
                Some(json!({ "reason": reason, "sample": sample }))
            }
            ServerError::Analysis(AnalysisError::Provider(SemanticError::Upstream {
                status,
                body,
            })) => Some(json!({ "status": status, "body": body })),
            _ => None,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request_failed");
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(err: JsonRejection) -> Self {
        ServerError::BadRequest(err.body_text())
    }
}

impl From<SemanticError> for ServerError {
    fn from(err: SemanticError) -> Self {
        match err {
            SemanticError::InvalidConfig(msg) => ServerError::Config(msg),
            other => ServerError::Analysis(AnalysisError::Provider(other)),
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::estimator::InputError;
use crate::leads::LeadError;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Workload figures failed validation
    InvalidInput(String),
    /// Email failed the shape check
    InvalidEmail(String),
    /// Lead store refused the lead
    LeadRejected(String),
    /// Lead store unreachable or answered garbage
    Upstream(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {}", msg),
            Self::LeadRejected(msg) => write!(f, "Lead rejected: {}", msg),
            Self::Upstream(msg) => write!(f, "Upstream error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// User-facing message; the widget shows this string as-is
    fn public_message(&self) -> &str {
        match self {
            Self::InvalidInput(msg)
            | Self::InvalidEmail(msg)
            | Self::LeadRejected(msg)
            | Self::Upstream(msg) => msg,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            Self::LeadRejected(_) | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "success": false,
            "error": self.public_message(),
            "type": error_type_name(&self),
        }));

        (status, body).into_response()
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::InvalidInput(_) => "invalid_input",
        AppError::InvalidEmail(_) => "invalid_email",
        AppError::LeadRejected(_) => "lead_rejected",
        AppError::Upstream(_) => "upstream_error",
    }
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<LeadError> for AppError {
    fn from(err: LeadError) -> Self {
        match err {
            LeadError::InvalidEmail => Self::InvalidEmail(err.to_string()),
            LeadError::Rejected(msg) => Self::LeadRejected(msg),
            LeadError::Transport(_) | LeadError::MalformedResponse(_) => {
                Self::Upstream(err.to_string())
            }
        }
    }
}

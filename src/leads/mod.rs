//! Lead capture
//!
//! A lead is an email address plus the inputs and results it was captured
//! with. Leads are handed to a [`LeadSink`]: either forwarded to an external
//! lead-storage endpoint or, in development, only logged.

pub mod email;
pub mod http;
pub mod log;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::config::{LeadMode, LeadsConfig};
use crate::estimator::{RoiCalculation, RoiInputs};

pub use email::{is_valid_email, INVALID_EMAIL_MESSAGE};
pub use http::HttpLeadSink;
pub use log::LogLeadSink;

/// Message used when the lead store fails without saying why
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to save submission";

/// Lead record as sent to the lead store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub id: Uuid,
    pub email: String,
    pub inputs: RoiInputs,
    pub results: RoiCalculation,
    pub submitted_at: DateTime<Utc>,
}

impl LeadSubmission {
    pub fn new(email: impl Into<String>, inputs: RoiInputs, results: RoiCalculation) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            inputs,
            results,
            submitted_at: Utc::now(),
        }
    }
}

/// Acknowledgement from a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadReceipt {
    pub id: Uuid,
    pub sink: &'static str,
}

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("{}", INVALID_EMAIL_MESSAGE)]
    InvalidEmail,

    /// The lead store answered but refused the lead
    #[error("{0}")]
    Rejected(String),

    #[error("Failed to reach lead store: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response from lead store: {0}")]
    MalformedResponse(String),
}

impl LeadError {
    /// Short machine-readable name, used for metrics labels
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "invalid_email",
            Self::Rejected(_) => "rejected",
            Self::Transport(_) => "transport",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Destination for captured leads
#[async_trait]
pub trait LeadSink: Send + Sync + 'static {
    /// Sink name (e.g. "http", "log")
    fn name(&self) -> &'static str;

    async fn submit(&self, lead: &LeadSubmission) -> Result<LeadReceipt, LeadError>;
}

/// Build the sink selected by the configuration
pub fn build_sink(config: &LeadsConfig, client: reqwest::Client) -> Arc<dyn LeadSink> {
    match config.mode {
        LeadMode::Forward => Arc::new(HttpLeadSink::new(
            client,
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_seconds),
        )),
        LeadMode::Log => Arc::new(LogLeadSink::new(Duration::from_millis(config.log_delay_ms))),
    }
}

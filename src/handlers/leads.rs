use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{de::IgnoredAny, Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

use super::AppState;
use crate::{
    error::AppError,
    estimator::{estimate, RoiInputs},
    leads::{is_valid_email, LeadError, LeadSubmission},
    logging::MaskedEmail,
    metrics,
    report::{build_report, RoiReport},
};

#[derive(Debug, Deserialize)]
pub struct LeadRequest {
    pub email: String,
    pub inputs: RoiInputs,
    /// Results computed by the widget; recomputed server-side instead
    #[serde(default)]
    pub results: Option<IgnoredAny>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeadResponse {
    pub success: bool,
    pub id: Uuid,
    pub report: RoiReport,
}

/// Handle /api/leads
///
/// Captures the lead and, once the sink accepts it, returns the full report.
pub async fn handle_lead(
    State(state): State<AppState>,
    payload: Result<Json<LeadRequest>, JsonRejection>,
) -> Result<Json<LeadResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let sink = state.sink();

    if !is_valid_email(&request.email) {
        metrics::record_lead(sink.name(), LeadError::InvalidEmail.kind());
        return Err(LeadError::InvalidEmail.into());
    }

    let results = match estimate(&request.inputs) {
        Ok(results) => results,
        Err(e) => {
            metrics::record_lead(sink.name(), "invalid_input");
            return Err(e.into());
        }
    };

    let lead = LeadSubmission::new(request.email, request.inputs, results);

    tracing::info!(
        lead_id = %lead.id,
        email = %MaskedEmail::new(&lead.email),
        sink = sink.name(),
        "Capturing lead"
    );

    let start = Instant::now();
    let outcome = sink.submit(&lead).await;
    metrics::record_lead_duration(sink.name(), start.elapsed());

    match outcome {
        Ok(receipt) => {
            metrics::record_lead(receipt.sink, "success");
            tracing::info!(lead_id = %receipt.id, "Lead saved, releasing report");

            Ok(Json(LeadResponse {
                success: true,
                id: receipt.id,
                report: build_report(&results),
            }))
        }
        Err(e) => {
            metrics::record_lead(sink.name(), e.kind());
            tracing::warn!(lead_id = %lead.id, error = %e, "Failed to save lead");
            Err(e.into())
        }
    }
}

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    estimator::{estimate, RoiCalculation, RoiInputs},
    metrics,
};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub results: RoiCalculation,
    /// Whether the full report is behind the email gate
    pub requires_email: bool,
}

/// Handle /api/estimate
///
/// Returns the headline numbers only. The breakdown, tips and chart are
/// released by /api/leads once an email has been captured.
pub async fn handle_estimate(
    payload: Result<Json<RoiInputs>, JsonRejection>,
) -> Result<Json<EstimateResponse>, AppError> {
    let Json(inputs) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let results = estimate(&inputs)?;
    let requires_email = inputs.has_workload();

    tracing::debug!(
        total_weekly_hours = inputs.total_weekly_hours(),
        monthly_time_saved = results.monthly_time_saved,
        requires_email,
        "Computed ROI estimate"
    );
    metrics::record_estimate(requires_email);

    Ok(Json(EstimateResponse {
        results,
        requires_email,
    }))
}

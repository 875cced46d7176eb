use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::{LeadError, LeadReceipt, LeadSink, LeadSubmission, DEFAULT_FAILURE_MESSAGE};
use crate::logging::{mask_url, MaskedEmail};

/// Forwards leads to an external lead store as JSON
///
/// The store is expected to answer with a JSON body carrying either a
/// `success` flag or an `error` message.
pub struct HttpLeadSink {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpLeadSink {
    pub fn new(client: Client, endpoint: String, timeout: Duration) -> Self {
        Self {
            client,
            endpoint,
            timeout,
        }
    }
}

#[async_trait]
impl LeadSink for HttpLeadSink {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn submit(&self, lead: &LeadSubmission) -> Result<LeadReceipt, LeadError> {
        tracing::debug!(
            endpoint = %mask_url(&self.endpoint),
            email = %MaskedEmail::new(&lead.email),
            lead_id = %lead.id,
            "Forwarding lead"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(lead)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                lead_id = %lead.id,
                "Lead store rejected submission"
            );
            return Err(LeadError::Rejected(
                error_message(&body).unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            ));
        }

        check_success_body(&body)?;

        Ok(LeadReceipt {
            id: lead.id,
            sink: self.name(),
        })
    }
}

/// Interpret a 2xx body
///
/// An empty body counts as success. A JSON body only fails when it carries
/// `"success": false`.
fn check_success_body(body: &str) -> Result<(), LeadError> {
    if body.trim().is_empty() {
        return Ok(());
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| LeadError::MalformedResponse(e.to_string()))?;

    if value.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(LeadError::Rejected(
            error_message(body).unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
        ));
    }

    Ok(())
}

/// Pull the `error` message out of a lead store response body
///
/// Accepts both `{"error": "..."}` and `{"error": {"message": "..."}}`.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;

    let message = match error {
        Value::String(s) => s.clone(),
        Value::Object(obj) => obj.get("message")?.as_str()?.to_string(),
        _ => return None,
    };

    if message.trim().is_empty() {
        None
    } else {
        Some(message)
    }
}

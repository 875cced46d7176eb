use async_trait::async_trait;
use std::time::Duration;

use super::{LeadError, LeadReceipt, LeadSink, LeadSubmission};
use crate::logging::MaskedEmail;

/// Development sink: logs the lead and always succeeds
pub struct LogLeadSink {
    delay: Duration,
}

impl LogLeadSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl LeadSink for LogLeadSink {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn submit(&self, lead: &LeadSubmission) -> Result<LeadReceipt, LeadError> {
        tracing::info!(
            lead_id = %lead.id,
            email = %MaskedEmail::new(&lead.email),
            customer_service_hours = lead.inputs.customer_service_hours,
            lead_nurturing_hours = lead.inputs.lead_nurturing_hours,
            hourly_wage = lead.inputs.hourly_wage,
            annual_cost_saved = lead.results.annual_cost_saved,
            "Saving lead (log only)"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(LeadReceipt {
            id: lead.id,
            sink: self.name(),
        })
    }
}

//! ROI estimation
//!
//! Maps weekly workload hours and an hourly wage to projected time and cost
//! savings using a fixed set of industry efficiency factors. Everything here
//! is pure arithmetic with no state or I/O.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Average number of weeks in a month
pub const WEEKS_PER_MONTH: f64 = 4.33;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Estimated months until the full automation benefit is realized
pub const TIME_TO_VALUE_MONTHS: f64 = 2.0;

/// Industry efficiency factors used for every estimate
pub const INDUSTRY_FACTORS: EfficiencyFactors = EfficiencyFactors {
    task_complexity: 0.85,
    repetitive_task_ratio: 0.75,
    automation_potential: 0.90,
};

/// Caller-supplied workload figures
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiInputs {
    /// Weekly hours spent on customer service
    pub customer_service_hours: f64,
    /// Weekly hours spent nurturing leads
    pub lead_nurturing_hours: f64,
    /// Average hourly wage
    pub hourly_wage: f64,
}

/// Derived savings metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiCalculation {
    pub monthly_time_saved: f64,
    pub annual_time_saved: f64,
    pub monthly_cost_saved: f64,
    pub annual_cost_saved: f64,
    /// Fraction of work hours eliminated (0-1)
    pub automation_efficiency: f64,
    /// Months to full benefit
    pub time_to_value: f64,
    /// `automation_efficiency` as a percentage
    pub productivity_gain: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyFactors {
    /// Share of tasks simple enough for automation
    pub task_complexity: f64,
    /// Share of tasks that are repetitive
    pub repetitive_task_ratio: f64,
    /// Success rate of automated responses
    pub automation_potential: f64,
}

/// Rejected workload figures
///
/// The estimator accepts any finite number; these checks are applied at the
/// HTTP and CLI boundaries only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Inputs are finite but too large for the savings to be representable
    #[error("Inputs are too large to estimate ({field} overflows)")]
    Overflow { field: &'static str },
}

impl RoiInputs {
    pub fn new(customer_service_hours: f64, lead_nurturing_hours: f64, hourly_wage: f64) -> Self {
        Self {
            customer_service_hours,
            lead_nurturing_hours,
            hourly_wage,
        }
    }

    /// Total weekly hours across both activities
    pub fn total_weekly_hours(&self) -> f64 {
        self.customer_service_hours + self.lead_nurturing_hours
    }

    /// Whether there is any workload to automate
    ///
    /// The email gate is only shown when this is true.
    pub fn has_workload(&self) -> bool {
        self.customer_service_hours != 0.0 || self.lead_nurturing_hours != 0.0
    }

    /// Check that every field is a finite, non-negative number
    pub fn validate(&self) -> Result<(), InputError> {
        let fields = [
            ("customerServiceHours", self.customer_service_hours),
            ("leadNurturingHours", self.lead_nurturing_hours),
            ("hourlyWage", self.hourly_wage),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InputError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(InputError::Negative { field, value });
            }
        }

        Ok(())
    }
}

impl RoiCalculation {
    /// Check that every savings figure is a finite number
    ///
    /// JSON has no encoding for infinity, so an overflowed figure would be
    /// written as `null`.
    pub fn ensure_finite(&self) -> Result<(), InputError> {
        let fields = [
            ("monthlyTimeSaved", self.monthly_time_saved),
            ("annualTimeSaved", self.annual_time_saved),
            ("monthlyCostSaved", self.monthly_cost_saved),
            ("annualCostSaved", self.annual_cost_saved),
        ];

        match fields.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, _)) => Err(InputError::Overflow { field }),
            None => Ok(()),
        }
    }
}

/// Combined automation efficiency of a factor set
pub fn automation_efficiency(factors: &EfficiencyFactors) -> f64 {
    factors.task_complexity * factors.repetitive_task_ratio * factors.automation_potential
}

/// Compute the ROI estimate for the given inputs
pub fn calculate_roi(inputs: &RoiInputs) -> RoiCalculation {
    let monthly_hours = inputs.total_weekly_hours() * WEEKS_PER_MONTH;
    let annual_hours = monthly_hours * MONTHS_PER_YEAR;

    let automation_efficiency = automation_efficiency(&INDUSTRY_FACTORS);

    let monthly_time_saved = monthly_hours * automation_efficiency;
    let annual_time_saved = annual_hours * automation_efficiency;

    RoiCalculation {
        monthly_time_saved,
        annual_time_saved,
        monthly_cost_saved: monthly_time_saved * inputs.hourly_wage,
        annual_cost_saved: annual_time_saved * inputs.hourly_wage,
        automation_efficiency,
        time_to_value: TIME_TO_VALUE_MONTHS,
        productivity_gain: automation_efficiency * 100.0,
    }
}

/// Validate the inputs, compute the estimate and check that it is representable
///
/// This is the entry point for the HTTP and CLI boundaries.
pub fn estimate(inputs: &RoiInputs) -> Result<RoiCalculation, InputError> {
    inputs.validate()?;
    let results = calculate_roi(inputs);
    results.ensure_finite()?;
    Ok(results)
}

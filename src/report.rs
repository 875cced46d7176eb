//! Results report shown once a lead has been captured
//!
//! Turns a [`RoiCalculation`] into the breakdown, factor explanation and
//! personalized action plan that accompany the savings chart.

use serde::{Deserialize, Serialize};

use crate::chart::{savings_chart, BarChart};
use crate::estimator::{RoiCalculation, INDUSTRY_FACTORS};

/// Weeks per month used when converting monthly savings back to weekly
const WEEKS_PER_MONTH_ROUNDED: f64 = 4.0;

const MAX_QUICK_WINS: f64 = 5.0;

/// Weekly hours above which freed time goes to strategic work
const STRATEGIC_WEEKLY_HOURS: f64 = 10.0;
const EXPANSION_ANNUAL_SAVINGS: f64 = 50_000.0;
const TEAM_DEVELOPMENT_MONTHLY_HOURS: f64 = 80.0;
const INTEGRATION_PRODUCTIVITY_GAIN: f64 = 70.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiReport {
    pub results: RoiCalculation,
    pub breakdown: Breakdown,
    pub factors: FactorExplanation,
    pub tips: Vec<Tip>,
    pub chart: BarChart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub current_process: CurrentProcess,
    pub projected_benefits: ProjectedBenefits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentProcess {
    pub monthly_manual_hours: f64,
    pub automation_potential: f64,
    pub implementation_months: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedBenefits {
    pub monthly_hours_saved: f64,
    pub monthly_cost_reduction: f64,
    pub annual_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorExplanation {
    pub factors: Vec<FactorDescription>,
    /// Combined efficiency, as a percentage
    pub combined_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorDescription {
    pub label: String,
    pub percent: f64,
    pub description: String,
}

/// A single action plan entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub content: String,
}

impl Tip {
    fn new(title: &str, content: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            content: content.into(),
        }
    }
}

/// Build the full report for a calculation
pub fn build_report(results: &RoiCalculation) -> RoiReport {
    RoiReport {
        results: *results,
        breakdown: breakdown(results),
        factors: factor_explanation(results),
        tips: personalized_tips(results),
        chart: savings_chart(results),
    }
}

pub fn breakdown(results: &RoiCalculation) -> Breakdown {
    let monthly_manual_hours = if results.automation_efficiency != 0.0 {
        results.monthly_time_saved / results.automation_efficiency
    } else {
        0.0
    };

    Breakdown {
        current_process: CurrentProcess {
            monthly_manual_hours,
            automation_potential: results.productivity_gain,
            implementation_months: results.time_to_value,
        },
        projected_benefits: ProjectedBenefits {
            monthly_hours_saved: results.monthly_time_saved,
            monthly_cost_reduction: results.monthly_cost_saved,
            annual_savings: results.annual_cost_saved,
        },
    }
}

pub fn factor_explanation(results: &RoiCalculation) -> FactorExplanation {
    let factors = vec![
        FactorDescription {
            label: "Task Complexity".to_string(),
            percent: INDUSTRY_FACTORS.task_complexity * 100.0,
            description: "Percentage of tasks simple enough for AI handling".to_string(),
        },
        FactorDescription {
            label: "Repetitive Tasks".to_string(),
            percent: INDUSTRY_FACTORS.repetitive_task_ratio * 100.0,
            description: "Portion of work that follows predictable patterns".to_string(),
        },
        FactorDescription {
            label: "Automation Success".to_string(),
            percent: INDUSTRY_FACTORS.automation_potential * 100.0,
            description: "AI's accuracy in handling automated tasks".to_string(),
        },
    ];

    FactorExplanation {
        factors,
        combined_efficiency: results.productivity_gain,
    }
}

/// Generate the action plan for a calculation
///
/// The first three tips are always present; the rest depend on how large the
/// projected savings are.
pub fn personalized_tips(results: &RoiCalculation) -> Vec<Tip> {
    let weekly_hours_saved = results.monthly_time_saved / WEEKS_PER_MONTH_ROUNDED;
    let quick_wins = MAX_QUICK_WINS.min(weekly_hours_saved.ceil());

    let focus_area = if weekly_hours_saved > STRATEGIC_WEEKLY_HOURS {
        "strategic planning and team development"
    } else {
        "improving customer satisfaction metrics"
    };

    let mut tips = vec![
        Tip::new(
            "Quick Wins First",
            format!(
                "Start by automating your top {} most frequent customer inquiries to see immediate impact.",
                quick_wins
            ),
        ),
        Tip::new(
            "Strategic Timeline",
            format!(
                "With {} months to full implementation, focus on training your team in phases while the AI learns from your existing processes.",
                results.time_to_value
            ),
        ),
        Tip::new(
            "Resource Optimization",
            format!(
                "Redirect {:.1} weekly hours into {}.",
                weekly_hours_saved, focus_area
            ),
        ),
    ];

    if results.annual_cost_saved > EXPANSION_ANNUAL_SAVINGS {
        tips.push(Tip::new(
            "Expansion Strategy",
            "Your high ROI potential suggests expanding automation to sales and marketing workflows.",
        ));
    }

    if results.monthly_time_saved > TEAM_DEVELOPMENT_MONTHLY_HOURS {
        tips.push(Tip::new(
            "Team Development",
            "Consider upskilling your team in AI management and advanced customer experience strategies.",
        ));
    }

    if results.productivity_gain > INTEGRATION_PRODUCTIVITY_GAIN {
        tips.push(Tip::new(
            "Integration Opportunity",
            "Your workflow is highly suitable for automation. Consider integrating with CRM and support platforms.",
        ));
    }

    tips
}

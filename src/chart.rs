//! Savings bar chart
//!
//! The data set mirrors what a Chart.js bar chart expects so a browser widget
//! can hand it straight to the renderer. `render_text` draws the same data for
//! terminals.

use serde::{Deserialize, Serialize};

use crate::estimator::RoiCalculation;

pub const CHART_TITLE: &str = "Projected Cost Savings with AI Automation";
pub const DATASET_LABEL: &str = "Cost Savings ($)";

const BAR_CHAR: char = '█';

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChart {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
}

/// Monthly vs annual cost savings
pub fn savings_chart(results: &RoiCalculation) -> BarChart {
    BarChart {
        title: CHART_TITLE.to_string(),
        labels: vec!["Monthly Savings".to_string(), "Annual Savings".to_string()],
        datasets: vec![Dataset {
            label: DATASET_LABEL.to_string(),
            data: vec![results.monthly_cost_saved, results.annual_cost_saved],
            background_color: vec![
                "rgba(54, 162, 235, 0.6)".to_string(),
                "rgba(75, 192, 192, 0.6)".to_string(),
            ],
            border_color: vec![
                "rgba(54, 162, 235, 1)".to_string(),
                "rgba(75, 192, 192, 1)".to_string(),
            ],
            border_width: 1,
        }],
    }
}

impl BarChart {
    /// Render the first data set as horizontal bars, at most `width` cells long
    pub fn render_text(&self, width: usize) -> String {
        let Some(dataset) = self.datasets.first() else {
            return format!("{}\n", self.title);
        };

        let max = dataset.data.iter().copied().fold(0.0_f64, f64::max);
        let label_width = self.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut out = format!("{}\n", self.title);
        for (label, value) in self.labels.iter().zip(&dataset.data) {
            let cells = if max > 0.0 && *value > 0.0 {
                ((value / max) * width as f64).round() as usize
            } else {
                0
            };
            let bar: String = std::iter::repeat(BAR_CHAR).take(cells).collect();
            out.push_str(&format!(
                "{:<label_width$} | {} ${:.2}\n",
                label,
                bar,
                value,
                label_width = label_width
            ));
        }
        out
    }
}

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use roi_calculator::{
    estimator::{estimate, RoiInputs},
    report::{build_report, RoiReport},
};
use tracing::debug;

const CHART_WIDTH: usize = 40;

/// Execute the estimate command
///
/// Prints the full report directly; the email gate only applies to the
/// HTTP widget.
pub fn execute(inputs: RoiInputs, json: bool) -> Result<()> {
    let results = estimate(&inputs)?;
    debug!(
        total_weekly_hours = inputs.total_weekly_hours(),
        annual_cost_saved = results.annual_cost_saved,
        "Computed ROI estimate"
    );

    let report = build_report(&results);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&inputs, &report);
    }

    Ok(())
}

fn print_report(inputs: &RoiInputs, report: &RoiReport) {
    println!("{}", "AI Chatbot ROI Calculator".bold());
    println!(
        "  {} {:.1} h/week customer service, {:.1} h/week lead nurturing, ${:.2}/h",
        "Inputs:".cyan(),
        inputs.customer_service_hours,
        inputs.lead_nurturing_hours,
        inputs.hourly_wage
    );
    println!();

    let current = &report.breakdown.current_process;
    let projected = &report.breakdown.projected_benefits;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("METRIC").fg(Color::Cyan),
        Cell::new("VALUE").fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Monthly manual workload"),
        Cell::new(format!("{:.1} hours", current.monthly_manual_hours)),
    ]);
    table.add_row(vec![
        Cell::new("Automation potential"),
        Cell::new(format!("{:.1}%", current.automation_potential)),
    ]);
    table.add_row(vec![
        Cell::new("Implementation timeline"),
        Cell::new(format!("{} months", current.implementation_months)),
    ]);
    table.add_row(vec![
        Cell::new("Monthly hours saved"),
        Cell::new(format!("{:.1} hours", projected.monthly_hours_saved)),
    ]);
    table.add_row(vec![
        Cell::new("Annual hours saved"),
        Cell::new(format!("{:.1} hours", report.results.annual_time_saved)),
    ]);
    table.add_row(vec![
        Cell::new("Monthly cost reduction"),
        Cell::new(format!("${:.2}", projected.monthly_cost_reduction)).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Annual savings"),
        Cell::new(format!("${:.2}", projected.annual_savings)).fg(Color::Green),
    ]);
    println!("{table}");
    println!();

    print!("{}", report.chart.render_text(CHART_WIDTH));
    println!();

    println!("{}", "How We Calculate This".bold());
    for factor in &report.factors.factors {
        println!(
            "  {} ({:.0}%): {}",
            factor.label.cyan(),
            factor.percent,
            factor.description
        );
    }
    println!(
        "  Combined automation efficiency: {:.1}%",
        report.factors.combined_efficiency
    );
    println!();

    println!("{}", "Your Personalized Action Plan".bold());
    for tip in &report.tips {
        println!("  {} {}", "▸".yellow(), tip.title.bold());
        println!("    {}", tip.content);
    }
}

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use roi_calculator::{estimator::RoiInputs, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // The start command initializes tracing itself once the config is loaded
    let needs_early_tracing = !matches!(args.get_command(), cli::Commands::Start);

    if needs_early_tracing {
        init_tracing();
    }

    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Estimate {
            customer_service_hours,
            lead_nurturing_hours,
            hourly_wage,
            json,
        } => {
            let inputs = RoiInputs::new(customer_service_hours, lead_nurturing_hours, hourly_wage);
            commands::estimate::execute(inputs, json)?;
        }
        cli::Commands::Test => {
            commands::test::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("ROI Calculator v{}", env!("CARGO_PKG_VERSION"));
            println!("Rust {}", env!("CARGO_PKG_RUST_VERSION"));
        }
    }

    Ok(())
}

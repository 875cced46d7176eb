use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roi-calculator", version, about = "AI automation ROI calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the HTTP server (default)
    Start,

    /// Compute an ROI estimate and print the full report
    Estimate {
        /// Weekly customer service hours
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        customer_service_hours: f64,

        /// Weekly lead nurturing hours
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        lead_nurturing_hours: f64,

        /// Average hourly wage
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        hourly_wage: f64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Test configuration file validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration (with credentials masked)
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_start() {
        let cli = Cli {
            config: PathBuf::from("config.toml"),
            command: None,
        };

        assert!(matches!(cli.get_command(), Commands::Start));
    }

    #[test]
    fn test_cli_parsing_estimate() {
        let args = vec![
            "roi-calculator",
            "estimate",
            "--customer-service-hours",
            "10",
            "--lead-nurturing-hours",
            "5",
            "--hourly-wage",
            "20",
            "--json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Estimate {
                customer_service_hours,
                lead_nurturing_hours,
                hourly_wage,
                json,
            } => {
                assert_eq!(customer_service_hours, 10.0);
                assert_eq!(lead_nurturing_hours, 5.0);
                assert_eq!(hourly_wage, 20.0);
                assert!(json);
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_estimate_defaults_to_zero() {
        let cli = Cli::try_parse_from(["roi-calculator", "estimate"]).unwrap();
        match cli.get_command() {
            Commands::Estimate { hourly_wage, json, .. } => {
                assert_eq!(hourly_wage, 0.0);
                assert!(!json);
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_parsing_config_show_with_path() {
        let args = vec!["roi-calculator", "--config", "/etc/roi.toml", "config", "show"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.config, PathBuf::from("/etc/roi.toml"));
        match cli.get_command() {
            Commands::Config { action } => {
                assert!(matches!(action, ConfigCommands::Show));
            }
            _ => panic!("Expected Config command"),
        }
    }
}

use crate::domain::model::ReportFormat;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "s3n")]
#[command(about = "Validate and format Swiss social security numbers")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check one or more numbers; exits with status 1 if any is invalid
    Check {
        #[arg(required = true)]
        numbers: Vec<String>,
    },

    /// Print a valid number in dotted (default) or dotless form
    Format {
        number: String,

        #[arg(long)]
        dotless: bool,
    },

    /// Check every number of a CSV file described by a TOML config
    Batch {
        /// Path to TOML configuration file
        #[arg(short, long, default_value = "s3n.toml")]
        config: String,

        /// Override input.path from the config
        #[arg(long)]
        input: Option<String>,

        /// Override output.path from the config
        #[arg(long)]
        output: Option<String>,

        /// Override output.report from the config (csv or json)
        #[arg(long)]
        report: Option<ReportFormat>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_command() {
        let config = CliConfig::parse_from(["s3n", "check", "756.9217.0769.85", "7563047500962"]);
        match config.command {
            Command::Check { numbers } => assert_eq!(numbers.len(), 2),
            other => panic!("unexpected command {:?}", other),
        }
        assert!(!config.verbose);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_parse_batch_overrides() {
        let config = CliConfig::parse_from([
            "s3n",
            "--verbose",
            "batch",
            "--input",
            "people.csv",
            "--report",
            "json",
        ]);
        assert!(config.verbose);
        match config.command {
            Command::Batch {
                config,
                input,
                output,
                report,
            } => {
                assert_eq!(config, "s3n.toml");
                assert_eq!(input.as_deref(), Some("people.csv"));
                assert_eq!(output, None);
                assert_eq!(report, Some(ReportFormat::Json));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_check_requires_a_number() {
        assert!(CliConfig::try_parse_from(["s3n", "check"]).is_err());
    }
}

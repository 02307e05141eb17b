use clap::Parser;
use s3n::app::batch::{summarize, write_reports, BatchChecker};
use s3n::config::{Command, LogFormat};
use s3n::utils::{logger, validation::Validate};
use s3n::{BatchConfig, CliConfig, NumberFormat, S3nError};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    let result = match config.command {
        Command::Check { numbers } => Ok(run_check(&numbers)),
        Command::Format { number, dotless } => run_format(&number, dotless),
        Command::Batch {
            config,
            input,
            output,
            report,
        } => run_batch(&config, input, output, report),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("❌ {}", e);
            match e.downcast_ref::<S3nError>() {
                Some(e) => {
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    ExitCode::from(e.exit_code())
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    ExitCode::from(2)
                }
            }
        }
    }
}

fn run_check(numbers: &[String]) -> ExitCode {
    let checker = BatchChecker::default();
    let reports: Vec<_> = numbers.iter().map(|n| checker.check_line(n)).collect();

    for report in &reports {
        match &report.reason {
            None => println!("{}: valid", report.input),
            Some(reason) => println!("{}: invalid ({})", report.input, reason),
        }
    }

    ExitCode::from(summarize(&reports).exit_code())
}

fn run_format(number: &str, dotless: bool) -> anyhow::Result<ExitCode> {
    let format = if dotless {
        NumberFormat::Dotless
    } else {
        NumberFormat::Dotted
    };

    println!("{}", s3n::format_number(number, format)?);
    Ok(ExitCode::SUCCESS)
}

fn run_batch(
    config_path: &str,
    input: Option<String>,
    output: Option<String>,
    report: Option<s3n::ReportFormat>,
) -> anyhow::Result<ExitCode> {
    tracing::info!("📁 Loading configuration from: {}", config_path);
    let mut config = BatchConfig::from_file(config_path)?;

    config.apply_overrides(input, output, report);
    config.validate()?;

    let checker = BatchChecker::new(config.batch_options()?);
    let file = File::open(config.input_path()).map_err(S3nError::IoError)?;
    let reports = checker.check_reader(BufReader::new(file))?;

    match config.output_path() {
        Some(path) => {
            let file = File::create(path).map_err(S3nError::IoError)?;
            write_reports(&reports, config.report_format(), BufWriter::new(file))?;
            tracing::info!("📁 Report saved to: {}", path);
        }
        None => write_reports(&reports, config.report_format(), io::stdout().lock())?,
    }

    Ok(ExitCode::from(summarize(&reports).exit_code()))
}

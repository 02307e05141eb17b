use anyhow::Result;
use s3n::app::batch::{summarize, write_reports};
use s3n::utils::validation::Validate;
use s3n::{BatchChecker, BatchConfig, CheckReport, ReportFormat};
use std::fs::File;
use std::io::BufReader;
use tempfile::TempDir;

#[test]
fn test_batch_from_toml_config_to_json_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("people.csv");
    let report_path = temp_dir.path().join("report.json");

    std::fs::write(
        &input_path,
        "id;name;ahv\n\
         1;Anna;756.9217.0769.85\n\
         2;Beat;7563047500962\n\
         3;Cla;756.9217.0769.83\n\
         4;Dora;\n",
    )?;

    let config_content = format!(
        r#"
[input]
path = "{}"
column = "ahv"
delimiter = ";"

[output]
path = "{}"
report = "json"
number_format = "dotless"
"#,
        input_path.to_str().unwrap().replace('\\', "/"),
        report_path.to_str().unwrap().replace('\\', "/"),
    );
    let config_path = temp_dir.path().join("s3n.toml");
    std::fs::write(&config_path, config_content)?;

    let config = BatchConfig::from_file(&config_path)?;
    config.validate()?;

    let checker = BatchChecker::new(config.batch_options()?);
    let reports = checker.check_reader(BufReader::new(File::open(config.input_path())?))?;

    let output_path = config.output_path().unwrap();
    write_reports(&reports, config.report_format(), File::create(output_path)?)?;

    let written: Vec<CheckReport> = serde_json::from_str(&std::fs::read_to_string(&report_path)?)?;
    assert_eq!(written.len(), 3);
    assert_eq!(written[0].formatted.as_deref(), Some("7569217076985"));
    assert_eq!(written[1].formatted.as_deref(), Some("7563047500962"));
    assert!(!written[2].valid);
    assert!(written[2].reason.is_some());

    let summary = summarize(&written);
    assert_eq!((summary.total, summary.valid, summary.invalid), (3, 2, 1));

    Ok(())
}

#[test]
fn test_batch_csv_report_keeps_input_order() -> Result<()> {
    let input = "ahv\n718.9217.0769.83\n756.1234.5678.97\n";
    let reports = BatchChecker::default().check_reader(input.as_bytes())?;

    let mut out = Vec::new();
    write_reports(&reports, ReportFormat::Csv, &mut out)?;
    let text = String::from_utf8(out)?;

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("718.9217.0769.83,false,,"));
    assert_eq!(lines[2], "756.1234.5678.97,true,756.1234.5678.97,");

    Ok(())
}

#[test]
fn test_missing_files_are_reported() {
    let config = BatchConfig::from_toml_str("[input]\npath = \"/nonexistent/s3n/input.csv\"\n")
        .unwrap();
    assert!(config.validate().is_ok());
    assert!(File::open(config.input_path()).is_err());
    assert!(BatchConfig::from_file("/nonexistent/s3n.toml").is_err());
}

#[test]
fn test_check_exit_status_follows_invalid_numbers() {
    let checker = BatchChecker::default();

    let valid: Vec<_> = ["756.9217.0769.85", "7563047500962"]
        .iter()
        .map(|n| checker.check_line(n))
        .collect();
    assert_eq!(summarize(&valid).exit_code(), 0);

    let mixed: Vec<_> = ["756.9217.0769.85", "756.9217.0769.83"]
        .iter()
        .map(|n| checker.check_line(n))
        .collect();
    assert_eq!(summarize(&mixed).exit_code(), 1);
}

#[test]
fn test_cli_overrides_replace_config_values() -> Result<()> {
    let mut config = BatchConfig::from_toml_str(
        "[input]\npath = \"people.csv\"\n[output]\npath = \"report.csv\"\nreport = \"csv\"\n",
    )?;

    config.apply_overrides(
        Some("other.csv".to_string()),
        Some("report.json".to_string()),
        Some(ReportFormat::Json),
    );
    config.validate()?;

    assert_eq!(config.input_path(), "other.csv");
    assert_eq!(config.output_path(), Some("report.json"));
    assert_eq!(config.report_format(), ReportFormat::Json);

    Ok(())
}

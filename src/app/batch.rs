use crate::core::formatter::render;
use crate::core::validator::validate;
use crate::domain::model::{BatchSummary, CheckReport, NumberFormat, ReportFormat};
use crate::utils::error::{Result, S3nError};
use std::io::{Read, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Header name, or a zero-based index when the input has no header row.
    /// Defaults to the first column.
    pub column: Option<String>,
    pub has_headers: bool,
    pub delimiter: u8,
    pub number_format: NumberFormat,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            column: None,
            has_headers: true,
            delimiter: b',',
            number_format: NumberFormat::Dotted,
        }
    }
}

/// Checks many numbers read from a CSV source.
#[derive(Debug, Clone, Default)]
pub struct BatchChecker {
    options: BatchOptions,
}

impl BatchChecker {
    pub fn new(options: BatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Checks one value exactly as given, like [`crate::is_valid`].
    /// Surrounding whitespace makes the value invalid.
    pub fn check_line(&self, input: &str) -> CheckReport {
        match validate(input) {
            Ok(digits) => CheckReport {
                input: input.to_string(),
                valid: true,
                formatted: Some(render(&digits, self.options.number_format)),
                reason: None,
            },
            Err(e) => CheckReport {
                input: input.to_string(),
                valid: false,
                formatted: None,
                reason: Some(e.to_string()),
            },
        }
    }

    pub fn check_reader<R: Read>(&self, reader: R) -> Result<Vec<CheckReport>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(self.options.has_headers)
            .delimiter(self.options.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let column = self.resolve_column(&mut csv_reader)?;
        tracing::debug!("Reading numbers from column {}", column);

        let mut reports = Vec::new();
        for (line, record) in csv_reader.records().enumerate() {
            let record = record?;
            let Some(value) = record.get(column) else {
                tracing::warn!("Record {} has no column {}", line + 1, column);
                let delimiter = char::from(self.options.delimiter).to_string();
                reports.push(CheckReport {
                    input: record.iter().collect::<Vec<_>>().join(&delimiter),
                    valid: false,
                    formatted: None,
                    reason: Some(format!(
                        "Missing column {} in record {}",
                        column,
                        line + 1
                    )),
                });
                continue;
            };
            if value.is_empty() {
                continue;
            }
            reports.push(self.check_line(value));
        }

        let summary = summarize(&reports);
        tracing::info!(
            "Checked {} numbers: {} valid, {} invalid",
            summary.total,
            summary.valid,
            summary.invalid
        );

        Ok(reports)
    }

    fn resolve_column<R: Read>(&self, csv_reader: &mut csv::Reader<R>) -> Result<usize> {
        let Some(column) = self.options.column.as_deref() else {
            return Ok(0);
        };

        if self.options.has_headers {
            let headers = csv_reader.headers()?;
            return headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| S3nError::ConfigValidationError {
                    field: "input.column".to_string(),
                    message: format!(
                        "Column '{}' not found; available columns: {}",
                        column,
                        headers.iter().collect::<Vec<_>>().join(", ")
                    ),
                });
        }

        column
            .parse::<usize>()
            .map_err(|_| S3nError::ConfigValidationError {
                field: "input.column".to_string(),
                message: format!(
                    "'{}' is not a column index; use a number when has_headers is false",
                    column
                ),
            })
    }
}

pub fn summarize(reports: &[CheckReport]) -> BatchSummary {
    let valid = reports.iter().filter(|r| r.valid).count();
    BatchSummary {
        total: reports.len(),
        valid,
        invalid: reports.len() - valid,
    }
}

/// Column names of a CSV report, in [`CheckReport`] field order.
pub const REPORT_HEADERS: [&str; 4] = ["input", "valid", "formatted", "reason"];

pub fn write_reports<W: Write>(
    reports: &[CheckReport],
    format: ReportFormat,
    mut writer: W,
) -> Result<()> {
    match format {
        ReportFormat::Csv => {
            let mut csv_writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer);
            csv_writer.write_record(REPORT_HEADERS)?;
            for report in reports {
                csv_writer.serialize(report)?;
            }
            csv_writer.flush()?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, reports)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
    }
    Ok(())
}

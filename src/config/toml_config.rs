use crate::app::batch::BatchOptions;
use crate::domain::model::{NumberFormat, ReportFormat};
use crate::utils::error::{Result, S3nError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration of a batch check, usually loaded from `s3n.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input: InputConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
    pub column: Option<String>,
    pub has_headers: Option<bool>,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report destination; stdout when absent.
    pub path: Option<String>,
    pub report: Option<ReportFormat>,
    pub number_format: Option<NumberFormat>,
}

impl BatchConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(S3nError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| S3nError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable `VAR`.
    /// Unknown variables are left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| S3nError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn input_path(&self) -> &str {
        &self.input.path
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn report_format(&self) -> ReportFormat {
        self.output
            .as_ref()
            .and_then(|o| o.report)
            .unwrap_or_default()
    }

    pub fn number_format(&self) -> NumberFormat {
        self.output
            .as_ref()
            .and_then(|o| o.number_format)
            .unwrap_or_default()
    }

    /// Applies command-line overrides; `None` keeps the configured value.
    pub fn apply_overrides(
        &mut self,
        input: Option<String>,
        output: Option<String>,
        report: Option<ReportFormat>,
    ) {
        if let Some(input) = input {
            tracing::info!("🔧 Input overridden to: {}", input);
            self.input.path = input;
        }

        if output.is_none() && report.is_none() {
            return;
        }

        let out = self.output.get_or_insert_with(OutputConfig::default);
        if output.is_some() {
            out.path = output;
        }
        if report.is_some() {
            out.report = report;
        }
    }

    pub fn batch_options(&self) -> Result<BatchOptions> {
        let delimiter = match self.input.delimiter.as_deref() {
            Some(d) => validation::validate_delimiter("input.delimiter", d)?,
            None => b',',
        };

        Ok(BatchOptions {
            column: self.input.column.clone(),
            has_headers: self.input.has_headers.unwrap_or(true),
            delimiter,
            number_format: self.number_format(),
        })
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input.path", &self.input.path)?;

        if let Some(column) = &self.input.column {
            validation::validate_non_empty_string("input.column", column)?;
        }

        if let Some(delimiter) = &self.input.delimiter {
            validation::validate_delimiter("input.delimiter", delimiter)?;
        }

        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }

        Ok(())
    }
}

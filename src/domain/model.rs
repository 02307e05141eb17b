use crate::core::formatter::render;
use crate::core::validator::{validate, NUMBER_LENGTH};
use crate::utils::error::S3nError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout used when printing a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// `756.9217.0769.85`
    #[default]
    Dotted,
    /// `7569217076985`
    Dotless,
}

impl FromStr for NumberFormat {
    type Err = S3nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dotted" => Ok(NumberFormat::Dotted),
            "dotless" => Ok(NumberFormat::Dotless),
            _ => Err(S3nError::InvalidConfigValueError {
                field: "number_format".to_string(),
                value: s.to_string(),
                reason: "Valid formats: dotted, dotless".to_string(),
            }),
        }
    }
}

/// Encoding of a batch report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = S3nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(S3nError::InvalidConfigValueError {
                field: "report".to_string(),
                value: s.to_string(),
                reason: "Valid formats: csv, json".to_string(),
            }),
        }
    }
}

/// A Swiss social security number that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SocialSecurityNumber {
    digits: [u8; NUMBER_LENGTH],
}

impl SocialSecurityNumber {
    pub fn parse(number: &str) -> Result<Self, S3nError> {
        let digits = validate(number).map_err(|_| S3nError::InvalidNumber)?;
        Ok(Self { digits })
    }

    pub fn digits(&self) -> &[u8; NUMBER_LENGTH] {
        &self.digits
    }

    pub fn checksum_digit(&self) -> u8 {
        self.digits[NUMBER_LENGTH - 1]
    }

    pub fn format(&self, format: NumberFormat) -> String {
        render(&self.digits, format)
    }

    pub fn dotted(&self) -> String {
        self.format(NumberFormat::Dotted)
    }

    pub fn dotless(&self) -> String {
        self.format(NumberFormat::Dotless)
    }
}

impl fmt::Display for SocialSecurityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

impl FromStr for SocialSecurityNumber {
    type Err = S3nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SocialSecurityNumber {
    type Error = S3nError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for SocialSecurityNumber {
    type Error = S3nError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SocialSecurityNumber> for String {
    fn from(number: SocialSecurityNumber) -> Self {
        number.dotted()
    }
}

/// Outcome of checking one input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub input: String,
    pub valid: bool,
    pub formatted: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl BatchSummary {
    /// Process exit status for a finished check: 0 when every number is
    /// valid, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.invalid == 0 {
            0
        } else {
            1
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum S3nError {
    #[error("Invalid character found: {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Number must start with {expected}")]
    InvalidPrefix { expected: &'static str },

    #[error("Invalid length: expected {expected} digits, found {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Checksum mismatch: expected {expected}, found {actual}")]
    InvalidChecksum { expected: u8, actual: u8 },

    #[error("Social security number is invalid")]
    InvalidNumber,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl S3nError {
    /// True for errors that describe the number itself rather than the
    /// environment it was read from.
    pub fn is_number_error(&self) -> bool {
        matches!(
            self,
            S3nError::InvalidCharacter { .. }
                | S3nError::InvalidPrefix { .. }
                | S3nError::InvalidLength { .. }
                | S3nError::InvalidChecksum { .. }
                | S3nError::InvalidNumber
        )
    }

    /// Process exit status: 1 for a rejected number, 2 for anything else.
    pub fn exit_code(&self) -> u8 {
        if self.is_number_error() {
            1
        } else {
            2
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            S3nError::IoError(e) => format!("Could not read or write a file: {}", e),
            S3nError::CsvError(e) => format!("Input is not valid CSV: {}", e),
            S3nError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            S3nError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            S3nError::InvalidCharacter { .. } => {
                "Use only digits, optionally grouped with dots (756.XXXX.XXXX.XX)"
            }
            S3nError::InvalidPrefix { .. } => "Swiss social security numbers start with 756",
            S3nError::InvalidLength { .. } => "A social security number has exactly 13 digits",
            S3nError::InvalidChecksum { .. } | S3nError::InvalidNumber => {
                "Check the number for typos; the last digit is a checksum"
            }
            S3nError::IoError(_) => "Check that the file exists and is readable",
            S3nError::CsvError(_) => "Check the delimiter and header settings in the config",
            S3nError::SerializationError(_) => "Report this issue; the output could not be encoded",
            S3nError::ConfigValidationError { .. } | S3nError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, S3nError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_message() {
        assert_eq!(
            S3nError::InvalidNumber.to_string(),
            "Social security number is invalid"
        );
    }

    #[test]
    fn test_number_errors_are_classified() {
        assert!(S3nError::InvalidChecksum { expected: 5, actual: 3 }.is_number_error());
        assert!(S3nError::InvalidLength { expected: 13, actual: 12 }.is_number_error());

        let io = S3nError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_number_error());
        assert_eq!(io.exit_code(), 2);
        assert_eq!(S3nError::InvalidNumber.exit_code(), 1);
        assert!(io.user_friendly_message().contains("gone"));
    }
}

use crate::core::checksum::checksum;
use crate::core::digits::parse_digits;
use crate::utils::error::{Result, S3nError};

/// Country prefix every Swiss social security number starts with.
pub const PREFIX: &str = "756";

/// Number of digits, check digit included.
pub const NUMBER_LENGTH: usize = 13;

/// Validates a number, dotted or not, and returns its digits.
///
/// Checks run in this order: the raw input must start with `756`, every
/// character other than `.` must be a digit, there must be exactly 13 digits
/// and the last one must match [`checksum`] over the first 12.
pub fn validate(number: &str) -> Result<[u8; NUMBER_LENGTH]> {
    if !number.starts_with(PREFIX) {
        return Err(S3nError::InvalidPrefix { expected: PREFIX });
    }

    let parsed = parse_digits(number)?;

    let digits: [u8; NUMBER_LENGTH] =
        parsed
            .as_slice()
            .try_into()
            .map_err(|_| S3nError::InvalidLength {
                expected: NUMBER_LENGTH,
                actual: parsed.len(),
            })?;

    let (body, given) = digits.split_at(NUMBER_LENGTH - 1);
    let expected = checksum(body);

    if given[0] != expected {
        return Err(S3nError::InvalidChecksum {
            expected,
            actual: given[0],
        });
    }

    Ok(digits)
}

/// Returns whether `number` is a valid Swiss social security number.
/// The number can be dotted or not.
pub fn is_valid(number: &str) -> bool {
    match validate(number) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!(number, reason = %e, "Rejected social security number");
            false
        }
    }
}

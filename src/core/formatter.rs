use crate::core::digits::SEPARATOR;
use crate::core::validator::{validate, NUMBER_LENGTH};
use crate::domain::model::NumberFormat;
use crate::utils::error::{Result, S3nError};

/// Digit groups of the dotted form: `756.9217.0769.85`.
const DOTTED_GROUPS: [usize; 4] = [3, 4, 4, 2];

pub(crate) fn render(digits: &[u8; NUMBER_LENGTH], format: NumberFormat) -> String {
    let mut result = String::with_capacity(NUMBER_LENGTH + DOTTED_GROUPS.len() - 1);

    match format {
        NumberFormat::Dotless => {
            result.extend(digits.iter().map(|&d| char::from(b'0' + d)));
        }
        NumberFormat::Dotted => {
            let mut rest = &digits[..];
            for (index, &size) in DOTTED_GROUPS.iter().enumerate() {
                if index > 0 {
                    result.push(SEPARATOR);
                }
                let (group, tail) = rest.split_at(size);
                result.extend(group.iter().map(|&d| char::from(b'0' + d)));
                rest = tail;
            }
        }
    }

    result
}

/// Formats a valid number in the requested layout.
///
/// Every validation failure is reported as [`S3nError::InvalidNumber`].
pub fn format_number(number: &str, format: NumberFormat) -> Result<String> {
    let digits = validate(number).map_err(|e| {
        tracing::debug!(number, reason = %e, "Refusing to format invalid number");
        S3nError::InvalidNumber
    })?;

    Ok(render(&digits, format))
}

/// Formats a number with dots: `7569217076985` becomes `756.9217.0769.85`.
/// The number needs to be valid.
pub fn dotted_format(number: &str) -> Result<String> {
    format_number(number, NumberFormat::Dotted)
}

/// Formats a number without dots: `756.9217.0769.85` becomes `7569217076985`.
/// The number needs to be valid.
pub fn dotless_format(number: &str) -> Result<String> {
    format_number(number, NumberFormat::Dotless)
}

use crate::utils::error::{Result, S3nError};

/// Group separator accepted anywhere in the input.
pub const SEPARATOR: char = '.';

/// Converts a number such as `756.9217.0769.85` into its digits, in order.
///
/// Separators are dropped; any other non-digit character fails with
/// [`S3nError::InvalidCharacter`]. The length of the result is not checked.
pub fn parse_digits(number: &str) -> Result<Vec<u8>> {
    let mut digits = Vec::with_capacity(number.len());

    for (position, character) in number.char_indices() {
        if character == SEPARATOR {
            continue;
        }

        match character.to_digit(10) {
            Some(value) => digits.push(value as u8),
            None => return Err(S3nError::InvalidCharacter { character, position }),
        }
    }

    Ok(digits)
}

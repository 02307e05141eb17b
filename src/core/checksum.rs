/// Computes the expected check digit for the digits preceding it.
///
/// Digits at odd positions count three times, the others once; the check
/// digit is whatever brings the sum up to the next multiple of ten.
pub fn checksum(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(index, &digit)| {
            let weight = if index % 2 != 0 { 3 } else { 1 };
            weight * u32::from(digit)
        })
        .sum();

    match sum % 10 {
        0 => 0,
        rest => (10 - rest) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::digits::parse_digits;

    #[test]
    fn test_checksum_known_numbers() {
        // 756.1234.5678.97
        assert_eq!(checksum(&parse_digits("756123456789").unwrap()), 7);
        assert_eq!(checksum(&parse_digits("756.1234.5678.9").unwrap()), 7);
        // 756.3047.5009.62
        assert_eq!(checksum(&parse_digits("756.3047.5009.6").unwrap()), 2);
        // 756.9217.0769.85
        assert_eq!(checksum(&parse_digits("756.9217.0769.8").unwrap()), 5);
    }

    #[test]
    fn test_checksum_zero_remainder() {
        // 1 + 3*3 = 10
        assert_eq!(checksum(&[1, 3]), 0);
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn test_checksum_is_deterministic() {
        let digits = [7, 5, 6, 9, 2, 1, 7, 0, 7, 6, 9, 8];
        assert_eq!(checksum(&digits), checksum(&digits));
    }
}

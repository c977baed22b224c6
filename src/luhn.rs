//! Luhn (mod 10) checksum.
//!
//! Digits are weighted from the right: the rightmost digit is position 0 and
//! kept as is, every odd position is doubled (minus 9 when the result exceeds
//! 9), and the number passes when the total is a multiple of 10.

use crate::normalize::NormalizedNumber;

/// Doubled digit values with 9 subtracted from results above 9.
/// Index is the digit (0-9).
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Runs the Luhn check on a normalized number.
///
/// # Example
///
/// ```
/// use cardcheck::{luhn_check, normalize};
///
/// assert!(luhn_check(&normalize("4111111111111111").unwrap()));
/// assert!(!luhn_check(&normalize("4111111111111112").unwrap()));
/// ```
#[inline]
pub fn luhn_check(number: &NormalizedNumber) -> bool {
    validate(number.digits())
}

/// Validates a digit slice using the Luhn algorithm.
///
/// `digits` holds digit values (0-9), not ASCII. An empty slice fails.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::validate;
///
/// assert!(validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
/// assert!(!validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) of a digit slice.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u64 {
    weighted_sum(digits, false)
}

/// Computes the check digit that makes `digits` followed by it pass Luhn.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Every existing digit moves one position left once the check digit
    // is appended, so doubling starts at the rightmost one.
    let sum = weighted_sum(digits, true);
    ((10 - sum % 10) % 10) as u8
}

fn weighted_sum(digits: &[u8], double_first: bool) -> u64 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if (i % 2 == 1) != double_first {
                u64::from(DOUBLE_TABLE[d as usize])
            } else {
                u64::from(d)
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;

    #[test]
    fn test_valid_cards() {
        // Visa test cards
        assert!(validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
        assert!(validate(&[4, 0, 1, 2, 8, 8, 8, 8, 8, 8, 8, 8, 1, 8, 8, 1]));

        // Mastercard test card
        assert!(validate(&[5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4]));

        // Amex test card
        assert!(validate(&[3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5]));

        // Diners Club
        assert!(validate(&[3, 0, 5, 6, 9, 3, 0, 9, 0, 2, 5, 9, 0, 4]));
    }

    #[test]
    fn test_invalid_cards() {
        assert!(!validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
        assert!(!validate(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_luhn_check_on_normalized() {
        assert!(luhn_check(&normalize("4111-1111-1111-1111").unwrap()));
        assert!(luhn_check(&normalize("378282246310005").unwrap()));
        assert!(!luhn_check(&normalize("4111111111111112").unwrap()));
    }

    #[test]
    fn test_checksum_value() {
        // 4111111111111111: 8 + 7 * 2 + 8 * 1 = 30
        assert_eq!(
            compute_checksum(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
            30
        );
    }

    #[test]
    fn test_checksum_of_long_input() {
        // Each 9 contributes 9 whether doubled or not
        let nines = vec![9u8; 999_999];
        assert_eq!(compute_checksum(&nines), 8_999_991);
        assert!(!validate(&nines));

        let mut zeros = vec![0u8; 1_000_000];
        zeros.push(generate_check_digit(&zeros));
        assert!(validate(&zeros));
    }

    #[test]
    fn test_generate_check_digit() {
        let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        assert_eq!(generate_check_digit(&partial), 1);

        let partial = [5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(generate_check_digit(&partial), 4);

        let partial = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0];
        assert_eq!(generate_check_digit(&partial), 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(!validate(&[]));
    }

    #[test]
    fn test_single_digit() {
        assert!(validate(&[0]));
        assert!(!validate(&[1]));
        assert!(!validate(&[5]));
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }
}

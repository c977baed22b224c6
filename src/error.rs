//! Error types for card number validation.
//!
//! Normalization errors ([`ValidationError::InvalidCharacter`] and
//! [`ValidationError::NoDigits`]) stop validation early. The remaining
//! variants are collected side by side in a
//! [`ValidationResult`](crate::ValidationResult) so a caller sees every reason
//! a number was rejected.

use crate::CardBrand;
use std::fmt;

/// Reasons a card number can fail validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A character other than a digit, whitespace, or hyphen was found.
    InvalidCharacter {
        /// The position in the input string (0-indexed, in chars).
        position: usize,
        /// The invalid character that was found.
        character: char,
    },

    /// Nothing but whitespace and hyphens (or nothing at all) was given.
    NoDigits,

    /// No rule in the brand table matches the number's prefix.
    UnknownBrand,

    /// The card number length is invalid for the detected brand.
    InvalidLengthForBrand {
        /// The detected card brand.
        brand: CardBrand,
        /// The actual number of digits.
        length: usize,
        /// The valid lengths for this brand, ascending.
        valid_lengths: &'static [u8],
    },

    /// The Luhn checksum validation failed.
    InvalidChecksum,
}

impl ValidationError {
    /// Returns true for errors raised while normalizing the raw input.
    ///
    /// These are the only errors that end validation early.
    #[inline]
    pub const fn is_normalization(&self) -> bool {
        matches!(self, Self::InvalidCharacter { .. } | Self::NoDigits)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits, spaces, and hyphens allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::NoDigits => {
                write!(
                    f,
                    "card number contains no digits (only digits, spaces, and hyphens allowed)"
                )
            }

            Self::UnknownBrand => {
                write!(f, "unrecognized card brand - check the card number prefix")
            }

            Self::InvalidLengthForBrand {
                brand,
                length,
                valid_lengths,
            } => {
                let expected: Vec<String> = valid_lengths.iter().map(|l| l.to_string()).collect();
                write!(
                    f,
                    "invalid length for {}: got {} digits, expected [{}]",
                    brand,
                    length,
                    expected.join(", ")
                )
            }

            Self::InvalidChecksum => {
                write!(f, "checksum failed (Luhn check) - please verify the card number")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::InvalidCharacter {
                position: 2,
                character: 'a'
            }
            .to_string(),
            "invalid character 'a' at position 2 (only digits, spaces, and hyphens allowed)"
        );

        assert_eq!(
            ValidationError::InvalidChecksum.to_string(),
            "checksum failed (Luhn check) - please verify the card number"
        );

        assert_eq!(
            ValidationError::UnknownBrand.to_string(),
            "unrecognized card brand - check the card number prefix"
        );
    }

    #[test]
    fn test_length_message_names_brand_and_lengths() {
        let err = ValidationError::InvalidLengthForBrand {
            brand: CardBrand::Hipercard,
            length: 15,
            valid_lengths: CardBrand::Hipercard.valid_lengths(),
        };
        assert_eq!(
            err.to_string(),
            "invalid length for Hipercard: got 15 digits, expected [13, 16, 19]"
        );
    }

    #[test]
    fn test_control_characters_are_escaped() {
        let err = ValidationError::InvalidCharacter {
            position: 0,
            character: '\u{7}',
        };
        assert!(err.to_string().contains("\\u{7}"));
    }

    #[test]
    fn test_is_normalization() {
        assert!(ValidationError::NoDigits.is_normalization());
        assert!(ValidationError::InvalidCharacter {
            position: 0,
            character: 'x'
        }
        .is_normalization());
        assert!(!ValidationError::UnknownBrand.is_normalization());
        assert!(!ValidationError::InvalidChecksum.is_normalization());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }
}

//! Input normalization: strip formatting, keep digits.
//!
//! Raw card numbers arrive as typed by people, e.g. `4111-1111 1111-1111`.
//! [`normalize`] removes whitespace and hyphens and rejects anything else,
//! producing a [`NormalizedNumber`] that the rest of the pipeline works on.

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroize;

/// A non-empty sequence of decimal digits.
///
/// # Security
///
/// - Digits are zeroed in memory when the value is dropped
/// - `Debug` output is masked
/// - There is no `Display` impl; use [`NormalizedNumber::number`] explicitly
#[derive(Clone, PartialEq, Eq)]
pub struct NormalizedNumber {
    /// Digit values (0-9), most significant first.
    digits: Vec<u8>,
}

impl NormalizedNumber {
    /// Returns the digit values (0-9, not ASCII), most significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Returns the number of digits.
    #[inline]
    pub fn length(&self) -> usize {
        self.digits.len()
    }

    /// Returns the full number as a digit string.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Never log the result; use
    /// [`mask_number`](crate::mask::mask_number) for display.
    pub fn number(&self) -> String {
        self.digits.iter().map(|&d| (b'0' + d) as char).collect()
    }

    /// Returns the last four digits (or all of them for shorter numbers).
    pub fn last_four(&self) -> String {
        let start = self.digits.len().saturating_sub(4);
        self.digits[start..]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }
}

impl fmt::Debug for NormalizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedNumber")
            .field("number", &crate::mask::mask_number(self))
            .field("length", &self.digits.len())
            .finish()
    }
}

impl FromStr for NormalizedNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

impl Drop for NormalizedNumber {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

/// Unicode whitespace plus the ASCII information separators (U+001C-U+001F),
/// which `char::is_whitespace` leaves out.
#[inline]
fn is_separator_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strips whitespace and hyphens from `raw` and checks that only digits remain.
///
/// # Errors
///
/// * [`ValidationError::InvalidCharacter`] for the first character that is
///   not an ASCII digit, whitespace, or `-`
/// * [`ValidationError::NoDigits`] if nothing is left after stripping
///
/// # Example
///
/// ```
/// use cardcheck::normalize;
///
/// let number = normalize("4111-1111 1111-1111").unwrap();
/// assert_eq!(number.number(), "4111111111111111");
///
/// assert!(normalize("41a1").is_err());
/// assert!(normalize(" - ").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<NormalizedNumber, ValidationError> {
    // Digits go straight into the zeroizing wrapper so an early return
    // still clears whatever was collected.
    let mut number = NormalizedNumber {
        digits: Vec::with_capacity(raw.len()),
    };

    for (position, c) in raw.chars().enumerate() {
        match c {
            '0'..='9' => number.digits.push(c as u8 - b'0'),
            '-' => {}
            c if is_separator_space(c) => {}
            character => {
                return Err(ValidationError::InvalidCharacter {
                    position,
                    character,
                });
            }
        }
    }

    if number.digits.is_empty() {
        return Err(ValidationError::NoDigits);
    }

    Ok(number)
}

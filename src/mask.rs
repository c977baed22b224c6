//! Masking of card numbers for display and logging.
//!
//! Only the last four digits are ever shown. Use these helpers wherever a
//! card number would otherwise be printed.

use crate::normalize::NormalizedNumber;

/// Masks a normalized number, keeping only its last four digits.
///
/// # Example
///
/// ```
/// use cardcheck::{mask, normalize};
///
/// let number = normalize("4111-1111-1111-1111").unwrap();
/// assert_eq!(mask::mask_number(&number), "************1111");
/// ```
pub fn mask_number(number: &NormalizedNumber) -> String {
    let hidden = number.length().saturating_sub(4);
    let mut result = String::with_capacity(number.length());
    result.extend(std::iter::repeat('*').take(hidden));
    result.push_str(&number.last_four());
    result
}

/// Masks a raw input string, keeping only its last four ASCII digits.
///
/// Characters that are not ASCII digits stay where they are, so the
/// caller's formatting (and any invalid characters) remain visible.
///
/// # Example
///
/// ```
/// use cardcheck::mask::mask_string;
///
/// assert_eq!(mask_string("4111-1111-1111-1111"), "****-****-****-1111");
/// assert_eq!(mask_string("41a1"), "41a1");
/// ```
pub fn mask_string(input: &str) -> String {
    let digit_count = input.chars().filter(|c| c.is_ascii_digit()).count();
    let mut to_hide = digit_count.saturating_sub(4);

    input
        .chars()
        .map(|c| {
            if c.is_ascii_digit() && to_hide > 0 {
                to_hide -= 1;
                '*'
            } else {
                c
            }
        })
        .collect()
}

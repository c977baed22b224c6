//! Validation orchestration for card numbers.
//!
//! [`validate_card`] runs the whole pipeline:
//! 1. Normalization (strips spaces and hyphens)
//! 2. Brand detection
//! 3. Brand-specific length check
//! 4. Luhn checksum
//!
//! Only a normalization failure stops early. Brand, length, and checksum
//! failures are independent and all of them end up in the result.

use crate::brand::BrandRule;
use crate::detect::detect_rule;
use crate::error::ValidationError;
use crate::luhn::luhn_check;
use crate::normalize::normalize;
use crate::CardBrand;

/// Outcome of validating one card number.
///
/// A result is valid exactly when it carries no errors. The brand is
/// reported whenever detection succeeded, even if other checks failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    brand: Option<CardBrand>,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn rejected(error: ValidationError) -> Self {
        Self {
            brand: None,
            errors: vec![error],
        }
    }

    /// Returns true if every check passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The detected brand, if any rule matched.
    #[inline]
    pub fn brand(&self) -> Option<CardBrand> {
        self.brand
    }

    /// All failures, in pipeline order.
    #[inline]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Human-readable descriptions of [`errors`](Self::errors).
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("brand", &self.brand)?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

/// Validates a raw card number string.
///
/// # Example
///
/// ```
/// use cardcheck::{validate_card, CardBrand};
///
/// let result = validate_card("4111-1111-1111-1111");
/// assert!(result.is_valid());
/// assert_eq!(result.brand(), Some(CardBrand::Visa));
///
/// // Wrong checksum: brand is still reported
/// let result = validate_card("4111111111111112");
/// assert!(!result.is_valid());
/// assert_eq!(result.brand(), Some(CardBrand::Visa));
/// ```
pub fn validate_card(raw: &str) -> ValidationResult {
    let number = match normalize(raw) {
        Ok(number) => number,
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(%error, "card number rejected during normalization");
            return ValidationResult::rejected(error);
        }
    };

    let mut errors = Vec::new();
    let length = number.length();
    let rule = detect_rule(number.digits());

    match rule {
        None => errors.push(ValidationError::UnknownBrand),
        Some(rule) if !rule.accepts_length(length) => {
            errors.push(ValidationError::InvalidLengthForBrand {
                brand: rule.brand(),
                length,
                valid_lengths: rule.lengths(),
            });
        }
        Some(_) => {}
    }

    if !luhn_check(&number) {
        errors.push(ValidationError::InvalidChecksum);
    }

    let result = ValidationResult {
        brand: rule.map(BrandRule::brand),
        errors,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        brand = ?result.brand,
        length,
        errors = result.errors.len(),
        "card number validated"
    );

    result
}

/// Quickly checks if a card number is valid.
///
/// # Example
///
/// ```
/// use cardcheck::is_valid;
///
/// assert!(is_valid("4111-1111-1111-1111"));
/// assert!(!is_valid("4111-1111-1111-1112"));
/// ```
#[inline]
pub fn is_valid(raw: &str) -> bool {
    validate_card(raw).is_valid()
}

/// Checks only the Luhn checksum of a raw card number.
///
/// Inputs that fail normalization do not pass.
///
/// # Example
///
/// ```
/// use cardcheck::passes_luhn;
///
/// assert!(passes_luhn("1234 5678 9012 3452"));
/// assert!(!passes_luhn("4111111111111112"));
/// assert!(!passes_luhn("41a1"));
/// ```
#[inline]
pub fn passes_luhn(raw: &str) -> bool {
    normalize(raw).map_or(false, |number| luhn_check(&number))
}

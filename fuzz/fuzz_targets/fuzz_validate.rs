//! Fuzz target for card validation.
//!
//! validate_card() must never panic and its result must stay consistent
//! with the individual pipeline stages.

#![no_main]

use cardcheck::{detect_brand, luhn_check, normalize, validate_card, ValidationError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let result = validate_card(data);
    assert_eq!(result.is_valid(), result.errors().is_empty());

    match normalize(data) {
        Ok(number) => {
            assert_eq!(result.brand(), detect_brand(&number));
            assert_eq!(
                result.errors().contains(&ValidationError::InvalidChecksum),
                !luhn_check(&number)
            );
        }
        Err(err) => {
            assert!(err.is_normalization());
            assert_eq!(result.errors(), &[err][..]);
        }
    }
});

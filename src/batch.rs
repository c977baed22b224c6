//! Batch validation of many card numbers.
//!
//! Every call to [`validate_card`] is independent and the brand table is
//! immutable, so batches can be split across threads freely. Parallel
//! variants require the `parallel` feature (rayon).

use crate::validate::{validate_card, ValidationResult};

/// Validates a slice of card numbers, keeping input order.
///
/// # Example
///
/// ```
/// use cardcheck::batch::validate_batch;
///
/// let cards = ["4111111111111111", "41a1"];
/// let results = validate_batch(&cards);
/// assert!(results[0].is_valid());
/// assert!(!results[1].is_valid());
/// ```
#[inline]
pub fn validate_batch<S: AsRef<str>>(cards: &[S]) -> Vec<ValidationResult> {
    cards.iter().map(|c| validate_card(c.as_ref())).collect()
}

/// Validates a slice of card numbers in parallel, keeping input order.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn validate_batch_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> Vec<ValidationResult> {
    use rayon::prelude::*;
    cards.par_iter().map(|c| validate_card(c.as_ref())).collect()
}

/// Counts valid and invalid cards in a batch.
///
/// # Returns
///
/// Tuple of (valid_count, invalid_count)
///
/// # Example
///
/// ```
/// use cardcheck::batch::count_valid;
///
/// let cards = ["4111111111111111", "1234567890123456", "5500000000000004"];
/// let (valid, invalid) = count_valid(&cards);
/// assert_eq!(valid, 2);
/// assert_eq!(invalid, 1);
/// ```
#[inline]
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    let valid = cards
        .iter()
        .filter(|c| validate_card(c.as_ref()).is_valid())
        .count();

    (valid, cards.len() - valid)
}

/// Counts valid and invalid cards in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let valid = cards
        .par_iter()
        .filter(|c| validate_card(c.as_ref()).is_valid())
        .count();

    (valid, cards.len() - valid)
}

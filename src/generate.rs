//! Card number generation for testing purposes.
//!
//! Generated numbers pass Luhn, carry a prefix that the detector resolves to
//! the requested brand, and have one of the brand's valid lengths. They are
//! not connected to real accounts.
//!
//! # Example
//!
//! ```
//! use cardcheck::generate::generate_card_deterministic;
//! use cardcheck::{validate_card, CardBrand};
//!
//! let number = generate_card_deterministic(CardBrand::Hipercard);
//! let result = validate_card(&number);
//! assert!(result.is_valid());
//! assert_eq!(result.brand(), Some(CardBrand::Hipercard));
//! ```

use crate::brand::PrefixRange;
use crate::detect::detect_rule;
use crate::luhn;
use crate::CardBrand;

#[cfg(feature = "generate")]
use rand::Rng;

/// Length used for generated numbers: 16 where the brand allows it.
pub fn default_length(brand: CardBrand) -> usize {
    let lengths = brand.valid_lengths();
    if brand.is_valid_length(16) {
        16
    } else {
        lengths[0] as usize
    }
}

/// Writes `value` as exactly `width` digits.
fn prefix_digits(value: u32, width: usize) -> Vec<u8> {
    let mut digits = vec![0u8; width];
    let mut rest = value;
    for slot in digits.iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }
    digits
}

/// Prefix ranges of `brand` that are not shadowed by an earlier table entry.
fn reachable_ranges(brand: CardBrand) -> Vec<PrefixRange> {
    brand
        .rule()
        .prefixes()
        .iter()
        .filter(|range| {
            let lowest = prefix_digits(range.low(), range.width());
            detect_rule(&lowest).map(|rule| rule.brand()) == Some(brand)
        })
        .copied()
        .collect()
}

/// Pads `digits` up to `length - 1` with `fill` and appends the check digit.
fn complete(mut digits: Vec<u8>, length: usize, mut fill: impl FnMut() -> u8) -> String {
    while digits.len() + 1 < length {
        digits.push(fill());
    }
    digits.push(luhn::generate_check_digit(&digits));
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Returns the lowest prefix of `brand` that detects as `brand`.
///
/// # Example
///
/// ```
/// use cardcheck::generate::prefix_for_brand;
/// use cardcheck::CardBrand;
///
/// assert_eq!(prefix_for_brand(CardBrand::Mastercard), "51");
/// // 3841 belongs to Diners Club's 38 range, so Hipercard uses 606282
/// assert_eq!(prefix_for_brand(CardBrand::Hipercard), "606282");
/// ```
pub fn prefix_for_brand(brand: CardBrand) -> String {
    let range = reachable_ranges(brand)
        .into_iter()
        .next()
        .unwrap_or(brand.rule().prefixes()[0]);
    format!("{:0width$}", range.low(), width = range.width())
}

/// Generates a valid card number deterministically (no randomness).
///
/// Fills the digits between prefix and check digit with zeros.
///
/// # Example
///
/// ```
/// use cardcheck::generate::generate_card_deterministic;
/// use cardcheck::CardBrand;
///
/// let card = generate_card_deterministic(CardBrand::Amex);
/// assert_eq!(card, "340000000000009");
/// assert_eq!(card, generate_card_deterministic(CardBrand::Amex));
/// ```
pub fn generate_card_deterministic(brand: CardBrand) -> String {
    let digits = prefix_for_brand(brand)
        .bytes()
        .map(|b| b - b'0')
        .collect();
    complete(digits, default_length(brand), || 0)
}

/// Generates a random valid card number for the given brand.
///
/// Requires the `generate` feature (which enables the `rand` dependency).
///
/// # Example
///
/// ```
/// use cardcheck::generate::generate_card;
/// use cardcheck::{validate_card, CardBrand};
///
/// let card = generate_card(CardBrand::Discover);
/// assert_eq!(validate_card(&card).brand(), Some(CardBrand::Discover));
/// ```
#[cfg(feature = "generate")]
pub fn generate_card(brand: CardBrand) -> String {
    let mut rng = rand::thread_rng();
    generate_card_with_rng(brand, &mut rng)
}

/// Generates a random valid card number using a provided RNG.
///
/// The prefix, the length (among the brand's valid lengths), and the body
/// digits are all drawn from `rng`, so a seeded RNG gives reproducible output.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(brand: CardBrand, rng: &mut R) -> String {
    let ranges = reachable_ranges(brand);
    let range = match ranges.len() {
        0 => brand.rule().prefixes()[0],
        n => ranges[rng.gen_range(0..n)],
    };

    let lengths = brand.valid_lengths();
    let length = lengths[rng.gen_range(0..lengths.len())] as usize;

    let prefix = rng.gen_range(range.low()..=range.high());
    complete(prefix_digits(prefix, range.width()), length, || {
        rng.gen_range(0..10)
    })
}

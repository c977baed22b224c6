//! # cardcheck
//!
//! Payment card number validation for Rust.
//!
//! A card number goes through four steps:
//!
//! 1. **Normalization**: whitespace and hyphens are stripped, anything else
//!    that is not a digit is rejected
//! 2. **Brand detection**: the leading digits are matched against an ordered
//!    table of prefix ranges
//! 3. **Length check**: the digit count must be one the brand issues
//! 4. **Luhn checksum**
//!
//! Steps 2-4 do not stop at the first failure; a [`ValidationResult`] lists
//! every reason a number was rejected.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardcheck::{validate_card, CardBrand, ValidationError};
//!
//! let result = validate_card("4111-1111-1111-1111");
//! assert!(result.is_valid());
//! assert_eq!(result.brand(), Some(CardBrand::Visa));
//!
//! // Unknown prefix and bad checksum are both reported
//! let result = validate_card("1234567890123");
//! assert_eq!(result.brand(), None);
//! assert_eq!(
//!     result.errors(),
//!     &[ValidationError::UnknownBrand, ValidationError::InvalidChecksum]
//! );
//!
//! // Non-digit input stops early with a single error
//! let result = validate_card("41a1");
//! assert_eq!(result.errors().len(), 1);
//! ```
//!
//! ## Building Blocks
//!
//! ```rust
//! use cardcheck::{detect_brand, luhn_check, normalize, CardBrand};
//!
//! let number = normalize("3782 822463 10005").unwrap();
//! assert_eq!(detect_brand(&number), Some(CardBrand::Amex));
//! assert!(luhn_check(&number));
//! ```
//!
//! ## Supported Card Brands
//!
//! Rules are checked top to bottom; the first match wins.
//!
//! | Brand | Prefix | Length |
//! |-------|--------|--------|
//! | Visa | 4 | 13, 16 |
//! | Mastercard | 51-55, 2221-2720 | 16 |
//! | American Express | 34, 37 | 15 |
//! | Diners Club | 300-305, 36, 38 | 14 |
//! | Discover | 6011, 65, 644-649, 622126-622925 | 16 |
//! | JCB | 3528-3589 | 16 |
//! | EnRoute | 2014, 2149 | 15 |
//! | Voyager | 8699 | 15 |
//! | Hipercard | 3841, 606282, 637 | 13, 16, 19 |
//! | Aura | 50 | 16 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for results, brands, and errors |
//! | `parallel` | Rayon-based batch validation |
//! | `generate` | Random test card generation |
//! | `tracing` | Debug events from the validator |
//! | `cli` | Command-line tool |
//!
//! ## Security
//!
//! - Card numbers are never stored or transmitted
//! - [`NormalizedNumber`] zeroes its digits when dropped and masks `Debug`
//! - Log events never include digits
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod brand;
pub mod detect;
pub mod error;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod normalize;
pub mod validate;

// Re-export main types at crate root
pub use brand::{BrandRule, CardBrand, PrefixRange, BRAND_TABLE};
pub use detect::detect_brand;
pub use error::ValidationError;
pub use luhn::luhn_check;
pub use normalize::{normalize, NormalizedNumber};
pub use validate::{is_valid, passes_luhn, validate_card, ValidationResult};

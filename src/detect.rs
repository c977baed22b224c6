//! Card brand detection using IIN prefix matching.
//!
//! The Issuer Identification Number (IIN) is the leading run of digits of a
//! card number. Detection walks [`BRAND_TABLE`] in order and returns the
//! first brand whose prefix ranges accept the number. An unrecognized prefix
//! is an ordinary outcome and is reported as `None`.

use crate::brand::{BrandRule, BRAND_TABLE};
use crate::normalize::NormalizedNumber;
use crate::CardBrand;

/// Detects the card brand of a normalized number.
///
/// # Example
///
/// ```
/// use cardcheck::{detect_brand, normalize, CardBrand};
///
/// let visa = normalize("4111 1111 1111 1111").unwrap();
/// assert_eq!(detect_brand(&visa), Some(CardBrand::Visa));
///
/// let unknown = normalize("1234567890123").unwrap();
/// assert_eq!(detect_brand(&unknown), None);
/// ```
#[inline]
pub fn detect_brand(number: &NormalizedNumber) -> Option<CardBrand> {
    detect_rule(number.digits()).map(BrandRule::brand)
}

/// Returns the first rule in the table whose prefixes match `digits`.
///
/// `digits` holds digit values (0-9). Partial numbers work as long as they
/// are long enough to carry the prefix.
///
/// # Example
///
/// ```
/// use cardcheck::detect::detect_rule;
/// use cardcheck::CardBrand;
///
/// let rule = detect_rule(&[3, 7, 8, 2]).unwrap();
/// assert_eq!(rule.brand(), CardBrand::Amex);
/// assert_eq!(rule.lengths(), &[15]);
/// ```
#[inline]
pub fn detect_rule(digits: &[u8]) -> Option<&'static BrandRule> {
    BRAND_TABLE.iter().find(|rule| rule.matches(digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;

    fn detect(s: &str) -> Option<CardBrand> {
        detect_brand(&normalize(s).unwrap())
    }

    #[test]
    fn test_visa_detection() {
        assert_eq!(detect("4111111111111111"), Some(CardBrand::Visa));
        assert_eq!(detect("4222222222222"), Some(CardBrand::Visa));
        assert_eq!(detect("4"), Some(CardBrand::Visa));
    }

    #[test]
    fn test_mastercard_detection() {
        // 51-55 range
        assert_eq!(detect("5100000000000000"), Some(CardBrand::Mastercard));
        assert_eq!(detect("5500000000000000"), Some(CardBrand::Mastercard));
        assert_eq!(detect("5600000000000000"), None);
        // 2221-2720 range
        assert_eq!(detect("2221000000000000"), Some(CardBrand::Mastercard));
        assert_eq!(detect("2500000000000000"), Some(CardBrand::Mastercard));
        assert_eq!(detect("2720000000000000"), Some(CardBrand::Mastercard));
        assert_eq!(detect("2220000000000000"), None);
        assert_eq!(detect("2721000000000000"), None);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(detect("340000000000000"), Some(CardBrand::Amex));
        assert_eq!(detect("378282246310005"), Some(CardBrand::Amex));
        assert_eq!(detect("350000000000000"), None);
    }

    #[test]
    fn test_diners_club_detection() {
        assert_eq!(detect("30000000000000"), Some(CardBrand::DinersClub));
        assert_eq!(detect("30569309025904"), Some(CardBrand::DinersClub));
        assert_eq!(detect("36000000000000"), Some(CardBrand::DinersClub));
        assert_eq!(detect("38520000023237"), Some(CardBrand::DinersClub));
        assert_eq!(detect("30600000000000"), None);
    }

    #[test]
    fn test_discover_detection() {
        assert_eq!(detect("6011000000000000"), Some(CardBrand::Discover));
        assert_eq!(detect("6500000000000000"), Some(CardBrand::Discover));
        assert_eq!(detect("6440000000000000"), Some(CardBrand::Discover));
        assert_eq!(detect("6490000000000000"), Some(CardBrand::Discover));
        assert_eq!(detect("6221260000000000"), Some(CardBrand::Discover));
        assert_eq!(detect("6229250000000000"), Some(CardBrand::Discover));
        assert_eq!(detect("6221250000000000"), None);
        assert_eq!(detect("6229260000000000"), None);
        assert_eq!(detect("6430000000000000"), None);
    }

    #[test]
    fn test_jcb_detection() {
        assert_eq!(detect("3528000000000000"), Some(CardBrand::Jcb));
        assert_eq!(detect("3589000000000000"), Some(CardBrand::Jcb));
        assert_eq!(detect("3527000000000000"), None);
        assert_eq!(detect("3590000000000000"), None);
    }

    #[test]
    fn test_regional_brands() {
        assert_eq!(detect("201400000000000"), Some(CardBrand::EnRoute));
        assert_eq!(detect("214900000000000"), Some(CardBrand::EnRoute));
        assert_eq!(detect("869900000000000"), Some(CardBrand::Voyager));
        assert_eq!(detect("6062820000000000"), Some(CardBrand::Hipercard));
        assert_eq!(detect("6370000000000000"), Some(CardBrand::Hipercard));
        assert_eq!(detect("5000000000000000"), Some(CardBrand::Aura));
    }

    #[test]
    fn test_first_match_wins_for_3841() {
        // Diners Club's 38 precedes Hipercard's 3841 in the table
        assert_eq!(detect("3841000000000000"), Some(CardBrand::DinersClub));
    }

    #[test]
    fn test_prefix_longer_than_number() {
        // "622" could start a Discover 622126 prefix but is too short to match
        assert_eq!(detect("622"), None);
        assert_eq!(detect("60628"), None);
        assert_eq!(detect("606282"), Some(CardBrand::Hipercard));
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(detect("0000000000000000"), None);
        assert_eq!(detect("1234567890123"), None);
        assert_eq!(detect("9000000000000000"), None);
    }

    #[test]
    fn test_detect_rule_empty_input() {
        assert!(detect_rule(&[]).is_none());
    }
}

//! Card brands and the prefix/length rule table that identifies them.
//!
//! Every brand is described by a [`BrandRule`]: a list of fixed-width numeric
//! prefix ranges plus the set of digit counts the network issues. The rules
//! live in [`BRAND_TABLE`], a compile-time constant that is scanned in order
//! by the detector, so the first matching rule wins.

use std::fmt;

/// Supported card brands/networks.
///
/// Variant order matches the order of [`BRAND_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardBrand {
    /// Visa - Prefix 4, lengths 13, 16
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, length 16
    Mastercard,
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Diners Club - Prefix 300-305, 36, 38, length 14
    DinersClub,
    /// Discover - Prefix 6011, 65, 644-649, 622126-622925, length 16
    Discover,
    /// JCB - Prefix 3528-3589, length 16
    Jcb,
    /// enRoute - Prefix 2014, 2149, length 15
    EnRoute,
    /// Voyager - Prefix 8699, length 15
    Voyager,
    /// Hipercard (Brazil) - Prefix 3841, 606282, 637, lengths 13, 16, 19
    Hipercard,
    /// Aura (Brazil) - Prefix 50, length 16
    Aura,
}

impl CardBrand {
    /// All brands, in table order.
    pub const ALL: [CardBrand; 10] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::DinersClub,
        Self::Discover,
        Self::Jcb,
        Self::EnRoute,
        Self::Voyager,
        Self::Hipercard,
        Self::Aura,
    ];

    /// Returns the rule that describes this brand.
    #[inline]
    pub fn rule(&self) -> &'static BrandRule {
        &BRAND_TABLE[*self as usize]
    }

    /// Returns the valid lengths for this card brand, in ascending order.
    #[inline]
    pub fn valid_lengths(&self) -> &'static [u8] {
        self.rule().lengths()
    }

    /// Returns true if the given length is valid for this brand.
    #[inline]
    pub fn is_valid_length(&self, length: usize) -> bool {
        self.rule().accepts_length(length)
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::DinersClub => "Diners Club",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::EnRoute => "EnRoute",
            Self::Voyager => "Voyager",
            Self::Hipercard => "Hipercard",
            Self::Aura => "Aura",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardBrand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// An inclusive range of fixed-width numeric prefixes.
///
/// `PrefixRange::new(4, 2221, 2720)` matches any number whose first four
/// digits, read as an integer, fall in `2221..=2720`. A number with fewer
/// digits than the range width never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRange {
    width: u8,
    low: u32,
    high: u32,
}

impl PrefixRange {
    /// Creates a range over prefixes of `width` digits.
    pub const fn new(width: u8, low: u32, high: u32) -> Self {
        Self { width, low, high }
    }

    /// Creates a range matching exactly one prefix.
    pub const fn exact(width: u8, value: u32) -> Self {
        Self::new(width, value, value)
    }

    /// Number of leading digits this range inspects.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    /// Lowest prefix in the range.
    #[inline]
    pub const fn low(&self) -> u32 {
        self.low
    }

    /// Highest prefix in the range.
    #[inline]
    pub const fn high(&self) -> u32 {
        self.high
    }

    /// Returns true if the leading digits of `digits` fall in this range.
    ///
    /// `digits` holds digit values (0-9), not ASCII.
    #[inline]
    pub fn matches(&self, digits: &[u8]) -> bool {
        let width = self.width();
        if digits.len() < width {
            return false;
        }

        let prefix = digits[..width]
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + d as u32);
        (self.low..=self.high).contains(&prefix)
    }

    /// Returns true if some digit string is matched by both ranges.
    pub fn overlaps(&self, other: &PrefixRange) -> bool {
        let width = self.width.max(other.width);
        let (a_low, a_high) = self.widened(width);
        let (b_low, b_high) = other.widened(width);
        a_low <= b_high && b_low <= a_high
    }

    /// The same range expressed over `width` digits.
    fn widened(&self, width: u8) -> (u32, u32) {
        let scale = 10u32.pow((width - self.width) as u32);
        (self.low * scale, (self.high + 1) * scale - 1)
    }
}

/// The prefix and length rule for one brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandRule {
    brand: CardBrand,
    prefixes: &'static [PrefixRange],
    lengths: &'static [u8],
}

impl BrandRule {
    /// Creates a rule. `lengths` must be non-empty and sorted ascending.
    pub const fn new(
        brand: CardBrand,
        prefixes: &'static [PrefixRange],
        lengths: &'static [u8],
    ) -> Self {
        Self {
            brand,
            prefixes,
            lengths,
        }
    }

    /// The brand this rule identifies.
    #[inline]
    pub const fn brand(&self) -> CardBrand {
        self.brand
    }

    /// The prefix ranges owned by this brand.
    #[inline]
    pub const fn prefixes(&self) -> &'static [PrefixRange] {
        self.prefixes
    }

    /// The valid digit counts, in ascending order.
    #[inline]
    pub const fn lengths(&self) -> &'static [u8] {
        self.lengths
    }

    /// Returns true if any of the brand's prefix ranges matches `digits`.
    #[inline]
    pub fn matches(&self, digits: &[u8]) -> bool {
        self.prefixes.iter().any(|range| range.matches(digits))
    }

    /// Returns true if `length` is one of the brand's valid lengths.
    #[inline]
    pub fn accepts_length(&self, length: usize) -> bool {
        self.lengths.iter().any(|&l| l as usize == length)
    }

    /// Returns true if some number could satisfy both rules' prefixes.
    pub fn overlaps(&self, other: &BrandRule) -> bool {
        self.prefixes
            .iter()
            .any(|a| other.prefixes.iter().any(|b| a.overlaps(b)))
    }
}

const VISA_PREFIXES: &[PrefixRange] = &[PrefixRange::exact(1, 4)];
const MASTERCARD_PREFIXES: &[PrefixRange] =
    &[PrefixRange::new(2, 51, 55), PrefixRange::new(4, 2221, 2720)];
const AMEX_PREFIXES: &[PrefixRange] = &[PrefixRange::exact(2, 34), PrefixRange::exact(2, 37)];
const DINERS_PREFIXES: &[PrefixRange] = &[
    PrefixRange::new(3, 300, 305),
    PrefixRange::exact(2, 36),
    PrefixRange::exact(2, 38),
];
const DISCOVER_PREFIXES: &[PrefixRange] = &[
    PrefixRange::exact(4, 6011),
    PrefixRange::exact(2, 65),
    PrefixRange::new(3, 644, 649),
    PrefixRange::new(6, 622126, 622925),
];
const JCB_PREFIXES: &[PrefixRange] = &[PrefixRange::new(4, 3528, 3589)];
const ENROUTE_PREFIXES: &[PrefixRange] = &[PrefixRange::exact(4, 2014), PrefixRange::exact(4, 2149)];
const VOYAGER_PREFIXES: &[PrefixRange] = &[PrefixRange::exact(4, 8699)];
const HIPERCARD_PREFIXES: &[PrefixRange] = &[
    PrefixRange::exact(4, 3841),
    PrefixRange::exact(6, 606282),
    PrefixRange::exact(3, 637),
];
const AURA_PREFIXES: &[PrefixRange] = &[PrefixRange::exact(2, 50)];

/// The brand rule table, scanned in order by the detector.
///
/// Diners Club's `38` range contains Hipercard's `3841`; since Diners Club
/// comes first, `3841...` numbers resolve to Diners Club.
pub static BRAND_TABLE: [BrandRule; 10] = [
    BrandRule::new(CardBrand::Visa, VISA_PREFIXES, &[13, 16]),
    BrandRule::new(CardBrand::Mastercard, MASTERCARD_PREFIXES, &[16]),
    BrandRule::new(CardBrand::Amex, AMEX_PREFIXES, &[15]),
    BrandRule::new(CardBrand::DinersClub, DINERS_PREFIXES, &[14]),
    BrandRule::new(CardBrand::Discover, DISCOVER_PREFIXES, &[16]),
    BrandRule::new(CardBrand::Jcb, JCB_PREFIXES, &[16]),
    BrandRule::new(CardBrand::EnRoute, ENROUTE_PREFIXES, &[15]),
    BrandRule::new(CardBrand::Voyager, VOYAGER_PREFIXES, &[15]),
    BrandRule::new(CardBrand::Hipercard, HIPERCARD_PREFIXES, &[13, 16, 19]),
    BrandRule::new(CardBrand::Aura, AURA_PREFIXES, &[16]),
];

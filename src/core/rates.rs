//! Built-in standard VAT rates per country.
//!
//! Snapshot of 2025 standard rates for EU member states, plus GB and NO.
//! Greece is listed under both its VAT prefix (EL) and ISO code (GR).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Standard rates keyed by upper-case country code. Sorted by code.
pub static EU_STANDARD_RATES: &[(&str, Decimal)] = &[
    ("AT", dec!(0.20)),
    ("BE", dec!(0.21)),
    ("BG", dec!(0.20)),
    ("CY", dec!(0.19)),
    ("CZ", dec!(0.21)),
    ("DE", dec!(0.19)),
    ("DK", dec!(0.25)),
    ("EE", dec!(0.24)),
    ("EL", dec!(0.24)),
    ("ES", dec!(0.21)),
    ("FI", dec!(0.255)),
    ("FR", dec!(0.20)),
    ("GB", dec!(0.20)),
    ("GR", dec!(0.24)),
    ("HR", dec!(0.25)),
    ("HU", dec!(0.27)),
    ("IE", dec!(0.23)),
    ("IT", dec!(0.22)),
    ("LT", dec!(0.21)),
    ("LU", dec!(0.17)),
    ("LV", dec!(0.21)),
    ("MT", dec!(0.18)),
    ("NL", dec!(0.21)),
    ("NO", dec!(0.25)),
    ("PL", dec!(0.23)),
    ("PT", dec!(0.23)),
    ("RO", dec!(0.21)),
    ("SE", dec!(0.25)),
    ("SI", dec!(0.22)),
    ("SK", dec!(0.23)),
];

/// Read-only country code to rate mapping.
///
/// The table borrows static data, so copies are free and the calculator
/// never owns the dataset. Lookups ignore ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateTable {
    entries: &'static [(&'static str, Decimal)],
}

impl RateTable {
    /// Wrap a custom dataset.
    pub const fn new(entries: &'static [(&'static str, Decimal)]) -> Self {
        Self { entries }
    }

    /// The built-in [`EU_STANDARD_RATES`].
    pub const fn eu() -> Self {
        Self::new(EU_STANDARD_RATES)
    }

    /// The rate for `country`, if listed.
    pub fn get(&self, country: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(country))
            .map(|&(_, rate)| rate)
    }

    /// The rate for `country`, zero when unlisted.
    pub fn rate(&self, country: &str) -> Decimal {
        self.get(country).unwrap_or(Decimal::ZERO)
    }

    /// All `(country, rate)` entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Decimal)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of listed countries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table lists no country.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::eu()
    }
}

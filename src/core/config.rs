//! Configuration sources consulted for per-country rate overrides.
//!
//! Overrides live under `vat_calculator.rules.<COUNTRY_CODE>`. A source only
//! has to answer two questions: does a key exist, and what rate does it hold.

use std::collections::BTreeMap;
use std::convert::Infallible;

use rust_decimal::Decimal;

#[cfg(feature = "json")]
use super::error::ConfigError;

/// Prefix shared by every rate override key.
pub const RULE_KEY_PREFIX: &str = "vat_calculator.rules.";

/// Build the override key for `country`, keeping its case as given.
pub fn rule_key(country: &str) -> String {
    format!("{RULE_KEY_PREFIX}{country}")
}

/// Key-value lookup used by the calculator for rate overrides.
pub trait ConfigSource {
    /// Error raised by the underlying store.
    type Error;

    /// Whether `key` is present.
    fn has(&self, key: &str) -> Result<bool, Self::Error>;

    /// The rate stored under `key`, or `default` when absent.
    fn get(&self, key: &str, default: Decimal) -> Result<Decimal, Self::Error>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    type Error = T::Error;

    fn has(&self, key: &str) -> Result<bool, Self::Error> {
        (**self).has(key)
    }

    fn get(&self, key: &str, default: Decimal) -> Result<Decimal, Self::Error> {
        (**self).get(key, default)
    }
}

/// In-memory rate overrides keyed by full configuration key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    entries: BTreeMap<String, Decimal>,
}

impl Rules {
    /// An empty rule set; every lookup falls through to the rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override for `country` (key case preserved).
    pub fn with_rule(mut self, country: &str, rate: Decimal) -> Self {
        self.entries.insert(rule_key(country), rate);
        self
    }

    /// Store `rate` under an arbitrary full key.
    pub fn insert(&mut self, key: impl Into<String>, rate: Decimal) -> Option<Decimal> {
        self.entries.insert(key.into(), rate)
    }

    /// Number of stored overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no override is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigSource for Rules {
    type Error = Infallible;

    fn has(&self, key: &str) -> Result<bool, Infallible> {
        Ok(self.entries.contains_key(key))
    }

    fn get(&self, key: &str, default: Decimal) -> Result<Decimal, Infallible> {
        Ok(self.entries.get(key).copied().unwrap_or(default))
    }
}

/// Configuration backed by a JSON document with dotted-key access.
///
/// `vat_calculator.rules.DE` resolves to `{"vat_calculator": {"rules": {"DE": ..}}}`.
/// Rates may be JSON numbers or numeric strings.
#[cfg(feature = "json")]
#[derive(Debug, Clone, PartialEq)]
pub struct JsonConfig {
    root: serde_json::Value,
}

#[cfg(feature = "json")]
impl JsonConfig {
    /// Wrap an already parsed document.
    pub fn from_value(root: serde_json::Value) -> Self {
        Self { root }
    }

    /// Parse a JSON document.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_value(serde_json::from_str(input)?))
    }

    fn lookup(&self, key: &str) -> Option<&serde_json::Value> {
        key.split('.').try_fold(&self.root, |node, segment| node.get(segment))
    }
}

#[cfg(feature = "json")]
impl ConfigSource for JsonConfig {
    type Error = ConfigError;

    fn has(&self, key: &str) -> Result<bool, ConfigError> {
        Ok(self.lookup(key).is_some())
    }

    fn get(&self, key: &str, default: Decimal) -> Result<Decimal, ConfigError> {
        use serde_json::Value;

        match self.lookup(key) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Number(n)) => parse_rate(key, &n.to_string()),
            Some(Value::String(s)) => parse_rate(key, s.trim()),
            Some(other) => Err(ConfigError::invalid_rate(key, other.to_string())),
        }
    }
}

#[cfg(feature = "json")]
fn parse_rate(key: &str, raw: &str) -> Result<Decimal, ConfigError> {
    use std::str::FromStr;

    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| ConfigError::invalid_rate(key, raw))
}

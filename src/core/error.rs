use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the bundled configuration sources.
///
/// [`VatCalculator::get_tax_rate_for_country`](crate::vat::VatCalculator::get_tax_rate_for_country)
/// returns them as-is; `calculate` carries them untouched in [`CalculateError::Config`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration document is not valid JSON.
    #[cfg(feature = "json")]
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule entry exists but does not hold a decimal rate.
    #[error("invalid rate for '{key}': {value}")]
    InvalidRate {
        /// Full configuration key (e.g. "vat_calculator.rules.DE").
        key: String,
        /// The offending value as found in the source.
        value: String,
    },
}

impl ConfigError {
    /// Create an [`ConfigError::InvalidRate`] for `key`.
    pub fn invalid_rate(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidRate {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Errors returned by [`VatCalculator::calculate`](crate::vat::VatCalculator::calculate).
///
/// Configuration failures are carried as-is in [`CalculateError::Config`].
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalculateError<E> {
    /// The configuration source failed.
    #[error("configuration lookup failed")]
    Config(#[source] E),

    /// Tax value or gross total exceeds the decimal range.
    #[error("arithmetic overflow computing tax for net {net} at rate {rate}")]
    Overflow {
        /// Net amount of the failed call.
        net: Decimal,
        /// Rate that was applied.
        rate: Decimal,
    },
}

impl<E> CalculateError<E> {
    /// The configuration error, if this is one.
    pub fn into_config(self) -> Option<E> {
        match self {
            Self::Config(err) => Some(err),
            Self::Overflow { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_rate_display() {
        let err = ConfigError::invalid_rate("vat_calculator.rules.DE", "\"abc\"");
        assert_eq!(
            err.to_string(),
            "invalid rate for 'vat_calculator.rules.DE': \"abc\""
        );
    }

    #[test]
    fn overflow_display() {
        let err: CalculateError<std::convert::Infallible> = CalculateError::Overflow {
            net: Decimal::MAX,
            rate: Decimal::new(19, 2),
        };
        assert!(err.to_string().starts_with("arithmetic overflow"));
        assert_eq!(err.into_config(), None);
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = parse.into();
        assert!(err.to_string().starts_with("malformed configuration"));
    }
}

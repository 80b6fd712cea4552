//! Net-to-gross VAT calculation.
//!
//! Rate resolution order for a private customer with a known country:
//! configuration override, then the built-in [`RateTable`], then zero.
//! Business customers (reverse charge) and calls without a country are
//! always taxed at zero and never touch the configuration.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::{CalculateError, ConfigSource, RateTable, rule_key};
use crate::obs;

/// Where the rate of a calculation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Business customer; the buyer accounts for VAT.
    ReverseCharge,
    /// No country code was known.
    NoCountry,
    /// A `vat_calculator.rules.<CC>` configuration entry.
    Configuration,
    /// The built-in rate table (zero for unlisted countries).
    BuiltIn,
}

impl RateSource {
    /// Stable label for logs and serialized output.
    pub const fn as_str(self) -> &'static str {
        match self {
            RateSource::ReverseCharge => "reverse_charge",
            RateSource::NoCountry => "no_country",
            RateSource::Configuration => "configuration",
            RateSource::BuiltIn => "built_in",
        }
    }
}

impl fmt::Display for RateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of one [`VatCalculator::calculate`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    /// Net amount as passed in.
    pub net: Decimal,
    /// Effective country code, if any.
    pub country_code: Option<String>,
    /// Effective company (reverse charge) flag.
    pub company: bool,
    /// Applied rate as a fraction (0.19 = 19 %).
    pub tax_rate: Decimal,
    /// `net * tax_rate`, rounded to cents.
    pub tax_value: Decimal,
    /// `net + tax_value`.
    pub gross: Decimal,
    /// Where `tax_rate` came from.
    pub source: RateSource,
}

/// Stateful VAT calculator.
///
/// Holds a preset country code and company flag used when a call does not
/// pass its own, and remembers the last calculation for inspection.
///
/// # Example
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use vat_calculator::{Rules, VatCalculator};
///
/// let mut calc = VatCalculator::new(Rules::new());
/// let gross = calc.calculate(dec!(24.00), Some("DE"), None).unwrap();
/// assert_eq!(gross, dec!(28.56));
/// assert_eq!(calc.tax_rate(), dec!(0.19));
/// assert_eq!(calc.tax_value(), dec!(4.56));
/// ```
#[derive(Debug, Clone)]
pub struct VatCalculator<C> {
    config: C,
    rates: RateTable,
    country_code: Option<String>,
    company: bool,
    last: Option<Calculation>,
}

impl<C: ConfigSource> VatCalculator<C> {
    /// Create a calculator over `config` using the built-in EU rates.
    pub fn new(config: C) -> Self {
        Self {
            config,
            rates: RateTable::eu(),
            country_code: None,
            company: false,
            last: None,
        }
    }

    /// Replace the built-in rate table.
    pub fn with_rate_table(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    /// Preset the country code for calls that do not pass one. Not validated.
    pub fn set_country_code(&mut self, country_code: impl Into<String>) {
        self.country_code = Some(country_code.into());
    }

    /// Preset the company flag for calls that do not pass one.
    pub fn set_company(&mut self, company: bool) {
        self.company = company;
    }

    /// The preset country code, if any.
    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    /// The preset company flag.
    pub fn is_company(&self) -> bool {
        self.company
    }

    /// Compute the gross amount for `net`.
    ///
    /// `country_code` and `company` override the presets for this call only;
    /// an empty country code counts as absent. The stored rate and value are
    /// updated only when the call succeeds. Configuration errors come back in
    /// [`CalculateError::Config`] unchanged; results outside the decimal
    /// range yield [`CalculateError::Overflow`].
    pub fn calculate(
        &mut self,
        net: Decimal,
        country_code: Option<&str>,
        company: Option<bool>,
    ) -> Result<Decimal, CalculateError<C::Error>> {
        let _span = obs::CalculationSpan::new(net).entered();

        let country_code = country_code
            .filter(|code| !code.is_empty())
            .map(str::to_owned)
            .or_else(|| self.country_code.clone().filter(|code| !code.is_empty()));
        let company = company.unwrap_or(self.company);

        let (tax_rate, source) = match (company, country_code.as_deref()) {
            (true, _) => (Decimal::ZERO, RateSource::ReverseCharge),
            (false, None) => (Decimal::ZERO, RateSource::NoCountry),
            (false, Some(code)) => self.resolve_rate(code).map_err(CalculateError::Config)?,
        };

        let overflow = || CalculateError::<C::Error>::Overflow { net, rate: tax_rate };
        let tax_value = round_to_cents(net.checked_mul(tax_rate).ok_or_else(overflow)?);
        let gross = net.checked_add(tax_value).ok_or_else(overflow)?;
        let calculation = Calculation {
            net,
            country_code,
            company,
            tax_rate,
            tax_value,
            gross,
            source,
        };
        obs::calculated(&calculation);

        self.last = Some(calculation);
        Ok(gross)
    }

    /// The rate that applies to `country_code`.
    ///
    /// Companies get zero without any configuration lookup. Otherwise an
    /// override is detected with the upper-cased key but read with the key
    /// as given, so `"de"` only picks up an override stored as `.de` when
    /// `.DE` also exists.
    pub fn get_tax_rate_for_country(
        &self,
        country_code: &str,
        company: bool,
    ) -> Result<Decimal, C::Error> {
        if company {
            obs::rate_resolved(country_code, RateSource::ReverseCharge, Decimal::ZERO);
            return Ok(Decimal::ZERO);
        }
        self.resolve_rate(country_code).map(|(rate, _)| rate)
    }

    fn resolve_rate(&self, country_code: &str) -> Result<(Decimal, RateSource), C::Error> {
        let (rate, source) = if self
            .config
            .has(&rule_key(&country_code.to_uppercase()))?
        {
            let rate = self.config.get(&rule_key(country_code), Decimal::ZERO)?;
            (rate, RateSource::Configuration)
        } else {
            (self.rates.rate(country_code), RateSource::BuiltIn)
        };
        obs::rate_resolved(country_code, source, rate);
        Ok((rate, source))
    }
}

impl<C> VatCalculator<C> {
    /// Rate of the last calculation; zero before the first one.
    pub fn tax_rate(&self) -> Decimal {
        self.last.as_ref().map_or(Decimal::ZERO, |c| c.tax_rate)
    }

    /// Tax amount of the last calculation; zero before the first one.
    pub fn tax_value(&self) -> Decimal {
        self.last.as_ref().map_or(Decimal::ZERO, |c| c.tax_value)
    }

    /// Full record of the last successful calculation.
    pub fn last_calculation(&self) -> Option<&Calculation> {
        self.last.as_ref()
    }

    /// The injected configuration source.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// The rate table consulted when no override exists.
    pub fn rate_table(&self) -> RateTable {
        self.rates
    }
}

fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

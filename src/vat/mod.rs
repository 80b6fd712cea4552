//! VAT calculation for net amounts.
//!
//! Resolves the applicable rate for a country (configuration override,
//! built-in table, or zero), then computes tax value and gross total.
//!
//! # Example
//!
//! ```ignore
//! use vat_calculator::vat::*;
//!
//! let mut calc = VatCalculator::new(Rules::new().with_rule("DE", dec!(0.50)));
//! assert_eq!(calc.calculate(dec!(24.00), Some("DE"), None)?, dec!(36.00));
//!
//! // Business customers are taxed via reverse charge
//! assert_eq!(calc.calculate(dec!(24.00), Some("DE"), Some(true))?, dec!(24.00));
//! ```

mod calculator;

pub use calculator::{Calculation, RateSource, VatCalculator};

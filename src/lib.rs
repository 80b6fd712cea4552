//! # vat-calculator
//!
//! Computes Value-Added Tax for a net amount from a country code and a
//! business/private flag, with per-country rates overridable through an
//! injected configuration source.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Tax values are rounded to cents, half away from zero.
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use vat_calculator::*;
//!
//! let rules = Rules::new().with_rule("DE", dec!(0.50));
//! let mut calc = VatCalculator::new(rules);
//!
//! assert_eq!(calc.calculate(dec!(24.00), Some("DE"), None).unwrap(), dec!(36.00));
//! assert_eq!(calc.tax_value(), dec!(12.00));
//!
//! calc.set_company(true);
//! assert_eq!(calc.calculate(dec!(24.00), Some("DE"), None).unwrap(), dec!(24.00));
//! assert_eq!(calc.tax_rate(), dec!(0));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `json` (default) | [`JsonConfig`] source over a JSON document |
//! | `tracing` | Debug spans and events for every calculation |

pub mod core;
mod obs;
pub mod vat;

// Re-export the public API at crate root for convenience
pub use crate::core::*;
pub use crate::vat::*;

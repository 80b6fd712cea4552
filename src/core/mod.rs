//! Configuration sources, rate data, and error types.
//!
//! This module provides what the calculator consumes: the
//! [`ConfigSource`] capability for overrides and the static [`RateTable`].

mod config;
mod error;
pub mod rates;

pub use config::*;
pub use error::*;
pub use rates::{EU_STANDARD_RATES, RateTable};

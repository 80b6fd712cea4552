//! Optional `tracing` instrumentation.
//!
//! Enable the `tracing` feature to emit a `vat_calculator.calculate` debug span
//! per calculation and debug events for every resolved rate. Without it the
//! hooks compile to nothing.

use rust_decimal::Decimal;

use crate::vat::{Calculation, RateSource};

/// Span wrapper that degrades to a no-op when tracing is disabled.
#[derive(Clone, Debug)]
pub(crate) struct CalculationSpan {
    #[cfg(feature = "tracing")]
    span: tracing::Span,
}

impl CalculationSpan {
    pub(crate) fn new(net: Decimal) -> Self {
        #[cfg(feature = "tracing")]
        {
            let span = tracing::debug_span!("vat_calculator.calculate", %net);

            Self { span }
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = net;

            Self {}
        }
    }

    pub(crate) fn entered(self) -> CalculationSpanGuard {
        #[cfg(feature = "tracing")]
        {
            CalculationSpanGuard {
                _guard: self.span.entered(),
            }
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = self;

            CalculationSpanGuard {}
        }
    }
}

/// Guard returned by [`CalculationSpan::entered`].
pub(crate) struct CalculationSpanGuard {
    #[cfg(feature = "tracing")]
    _guard: tracing::span::EnteredSpan,
}

pub(crate) fn rate_resolved(country: &str, source: RateSource, rate: Decimal) {
    #[cfg(feature = "tracing")]
    tracing::debug!(country, source = source.as_str(), %rate, "tax rate resolved");
    #[cfg(not(feature = "tracing"))]
    let _ = (country, source, rate);
}

pub(crate) fn calculated(calculation: &Calculation) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        country = calculation.country_code.as_deref().unwrap_or(""),
        company = calculation.company,
        source = calculation.source.as_str(),
        tax_rate = %calculation.tax_rate,
        tax_value = %calculation.tax_value,
        gross = %calculation.gross,
        "vat calculated"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = calculation;
}

//! Exchange rate types for the currency converter
//!
//! This module defines the directed rate edge, the raw rate line handed over
//! by the input parser, and the conversion request read from the first line.

use super::currency::CurrencyCode;
use rust_decimal::Decimal;

/// Number of fractional digits kept for every rate and running product
pub const RATE_SCALE: u32 = 4;

/// Directed exchange rate from one currency to another
///
/// Two edges are created per input rate line: the forward edge and its
/// reciprocal. The rate is always strictly positive and carries at most
/// [`RATE_SCALE`] fractional digits.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Currency being converted from
    pub from: CurrencyCode,

    /// Currency being converted to
    pub to: CurrencyCode,

    /// Units of `to` obtained for one unit of `from`
    pub rate: Decimal,
}

impl Edge {
    pub fn new(from: impl Into<CurrencyCode>, to: impl Into<CurrencyCode>, rate: Decimal) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            rate,
        }
    }
}

/// Unparsed rate line: `currencyA;currencyB;rate`
///
/// The rate text is kept verbatim so that graph construction can report a
/// malformed rate against the line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLine {
    /// 0-indexed position of the line in the input
    pub line: usize,

    pub from: CurrencyCode,

    pub to: CurrencyCode,

    /// Rate as written in the input, using `.` as decimal separator
    pub rate_text: String,
}

impl RateLine {
    pub fn new(
        line: usize,
        from: impl Into<CurrencyCode>,
        to: impl Into<CurrencyCode>,
        rate_text: impl Into<String>,
    ) -> Self {
        RateLine {
            line,
            from: from.into(),
            to: to.into(),
            rate_text: rate_text.into(),
        }
    }
}

/// Conversion request read from the first input line
///
/// `sourceCurrency;amount;targetCurrency`, amount strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub source: CurrencyCode,

    pub amount: u64,

    pub target: CurrencyCode,
}

impl ConversionRequest {
    pub fn new(source: impl Into<CurrencyCode>, amount: u64, target: impl Into<CurrencyCode>) -> Self {
        ConversionRequest {
            source: source.into(),
            amount,
            target: target.into(),
        }
    }
}

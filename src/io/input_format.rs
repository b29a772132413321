//! Input line format handling
//!
//! The input is a `;`-separated text file:
//!
//! ```text
//! EUR;550;JPY        <- line 0: sourceCurrency;amount;targetCurrency
//! 6                  <- line 1: number of rate lines
//! AUD;CHF;0.9661     <- lines 2..: currencyA;currencyB;rate
//! ```
//!
//! This module converts individual csv records into domain types, attaching
//! the 0-indexed line number to every failure. All functions are pure (no I/O)
//! for easy testing.

use crate::types::{ConversionError, ConversionRequest, RateLine};
use csv::StringRecord;
use serde::Deserialize;

pub const REQUEST_FORMAT: &str =
    "Required format is 'startCurrency;amountToConvert;targetCurrency' (e.g 'EUR;550;JPY')";

pub const COUNT_FORMAT: &str = "Required format is 'numberOfExchangeRate' (e.g '6')";

pub const RATE_FORMAT: &str =
    "Required format is 'startCurrency;targetCurrency;exchangeRate' (e.g 'AUD;CHF;0.9661')";

/// First line fields
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RequestRecord {
    pub source: String,
    pub amount: String,
    pub target: String,
}

/// Rate line fields
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RateRecord {
    pub from: String,
    pub to: String,
    pub rate: String,
}

/// Deserialize the first three fields of a record
///
/// Returns `None` if the record has fewer than three fields. Extra trailing
/// fields are ignored.
fn leading_fields<'de, T: Deserialize<'de>>(record: &'de StringRecord) -> Option<T> {
    if record.len() < 3 {
        return None;
    }
    record.deserialize(None).ok()
}

/// Parse the request line
///
/// # Errors
///
/// Returns `MalformedRequestLine` if the line has fewer than 3 fields, an
/// empty currency, or an amount that is not a positive integer.
pub fn parse_request(line: usize, record: &StringRecord) -> Result<ConversionRequest, ConversionError> {
    let fields: StringRecord = record.iter().take(3).collect();
    let request: RequestRecord =
        leading_fields(&fields).ok_or_else(|| ConversionError::malformed_request(line, REQUEST_FORMAT))?;

    if request.source.is_empty() || request.target.is_empty() {
        return Err(ConversionError::malformed_request(line, REQUEST_FORMAT));
    }

    let amount: i64 = request.amount.parse().map_err(|_| {
        ConversionError::malformed_request(
            line,
            format!("Amount '{}' is not a valid integer", request.amount),
        )
    })?;

    if amount <= 0 {
        return Err(ConversionError::malformed_request(
            line,
            "Amount must be greater than 0",
        ));
    }

    Ok(ConversionRequest::new(
        request.source,
        amount.unsigned_abs(),
        request.target,
    ))
}

/// Parse the rate count line
///
/// # Errors
///
/// Returns `MalformedCountLine` if the line is empty, not a single integer,
/// or not strictly positive.
pub fn parse_count(line: usize, record: &StringRecord) -> Result<usize, ConversionError> {
    let text = match record.iter().collect::<Vec<_>>().as_slice() {
        [text] if !text.is_empty() => *text,
        _ => return Err(ConversionError::malformed_count(line, COUNT_FORMAT)),
    };

    let count: i64 = text.parse().map_err(|_| {
        ConversionError::malformed_count(
            line,
            format!("Number of exchange rates '{}' is not a valid integer", text),
        )
    })?;

    if count <= 0 {
        return Err(ConversionError::malformed_count(
            line,
            "Number of exchange rates must be greater than 0",
        ));
    }

    usize::try_from(count).map_err(|_| {
        ConversionError::malformed_count(line, format!("Number of exchange rates '{}' is too large", text))
    })
}

/// Parse a rate line
///
/// Only the field layout is checked here; the rate text is validated when
/// the rate table is built.
///
/// # Errors
///
/// Returns `MalformedRateLine` if the line has fewer than 3 fields or an
/// empty currency.
pub fn parse_rate_line(line: usize, record: &StringRecord) -> Result<RateLine, ConversionError> {
    let fields: StringRecord = record.iter().take(3).collect();
    let rate: RateRecord =
        leading_fields(&fields).ok_or_else(|| ConversionError::malformed_rate(line, RATE_FORMAT))?;

    if rate.from.is_empty() || rate.to.is_empty() {
        return Err(ConversionError::malformed_rate(line, RATE_FORMAT));
    }

    Ok(RateLine::new(line, rate.from, rate.to, rate.rate))
}

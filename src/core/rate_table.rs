//! Rate table construction
//!
//! Turns the raw rate lines of one input file into the directed edge list
//! (the graph). Every line `A;B;r` produces the forward edge `A -> B` with
//! `round(r, 4)` and the reciprocal edge `B -> A` with `round(1 / r, 4)`.
//!
//! # Rounding
//!
//! Rounding uses `Decimal::round_dp`, which rounds midpoints to the nearest
//! even digit (banker's rounding). The reciprocal is computed from the parsed
//! rate, not from the already rounded one.
//!
//! A large rate can have a reciprocal that rounds to 0 (from 20000.5 up). The
//! line is still accepted and the zero-rate edge is kept; only a conversion
//! whose path goes through that edge fails, see `ConversionEngine::multiplier`.

use crate::types::{ConversionError, Edge, RateLine, RATE_SCALE};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Directed edges built from one input file, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    edges: Vec<Edge>,
}

impl RateTable {
    /// Build the table from raw rate lines
    ///
    /// # Errors
    ///
    /// Returns `MalformedRateLine` (with the line index) if a rate is not a
    /// decimal number, is not strictly positive, or rounds to zero.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, ConversionError>
    where
        I: IntoIterator<Item = &'a RateLine>,
    {
        let lines = lines.into_iter();
        let mut edges = Vec::with_capacity(lines.size_hint().0 * 2);

        for line in lines {
            let (forward, reverse) = rate_pair(line)?;
            edges.push(Edge::new(line.from.clone(), line.to.clone(), forward));
            edges.push(Edge::new(line.to.clone(), line.from.clone(), reverse));
        }

        Ok(RateTable { edges })
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Parse a rate line into its rounded forward and reciprocal rates
fn rate_pair(line: &RateLine) -> Result<(Decimal, Decimal), ConversionError> {
    let text = line.rate_text.trim();
    let rate = Decimal::from_str(text).map_err(|_| {
        ConversionError::malformed_rate(line.line, format!("Invalid exchange rate '{}'", text))
    })?;

    if rate <= Decimal::ZERO {
        return Err(ConversionError::malformed_rate(
            line.line,
            format!("Exchange rate must be greater than 0, got '{}'", text),
        ));
    }

    let forward = rate.round_dp(RATE_SCALE);
    if forward.is_zero() {
        return Err(ConversionError::malformed_rate(
            line.line,
            format!("Exchange rate '{}' rounds to 0", text),
        ));
    }

    let reverse = Decimal::ONE
        .checked_div(rate)
        .ok_or_else(|| ConversionError::arithmetic_overflow("reciprocal rate"))?
        .round_dp(RATE_SCALE);

    Ok((forward, reverse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn test_each_line_yields_forward_and_reciprocal_edges() {
        let lines = vec![
            RateLine::new(2, "AUD", "CHF", "0.9661"),
            RateLine::new(3, "EUR", "CHF", "1.2053"),
        ];

        let table = RateTable::from_lines(&lines).unwrap();

        assert_eq!(
            table.edges(),
            &[
                Edge::new("AUD", "CHF", dec("0.9661")),
                Edge::new("CHF", "AUD", dec("1.0351")),
                Edge::new("EUR", "CHF", dec("1.2053")),
                Edge::new("CHF", "EUR", dec("0.8297")),
            ]
        );
    }

    #[rstest]
    #[case::already_scaled("122.559", "122.559", "0.0082")]
    #[case::rounds_up("1.23456", "1.2346", "0.81")]
    #[case::midpoint_to_even_down("2.00005", "2.0000", "0.5")]
    #[case::midpoint_to_even_up("2.00015", "2.0002", "0.5")]
    #[case::integer_rate("3", "3", "0.3333")]
    #[case::reciprocal_rounds_to_zero("25000", "25000", "0")]
    fn test_rounding(#[case] text: &str, #[case] forward: &str, #[case] reverse: &str) {
        let lines = vec![RateLine::new(2, "A", "B", text)];
        let table = RateTable::from_lines(&lines).unwrap();

        assert_eq!(table.edges()[0].rate, dec(forward));
        assert_eq!(table.edges()[1].rate, dec(reverse));
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-1.5")]
    #[case::not_a_number("abc")]
    #[case::empty("")]
    #[case::comma_separator("1,5")]
    #[case::rounds_to_zero("0.00001")]
    fn test_malformed_rates_fail_with_line(#[case] text: &str) {
        let lines = vec![
            RateLine::new(2, "A", "B", "1.5"),
            RateLine::new(3, "B", "C", text),
        ];

        let result = RateTable::from_lines(&lines);

        assert!(
            matches!(result, Err(ConversionError::MalformedRateLine { line: 3, .. })),
            "expected MalformedRateLine at line 3 for '{}', got {:?}",
            text,
            result
        );
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let table = RateTable::from_lines(&Vec::<RateLine>::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}

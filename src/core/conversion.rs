//! Conversion engine
//!
//! Composes the rates of a resolved path into a single multiplier and applies
//! it to an amount. The running product starts at 1 and is rounded to 4
//! fractional digits after every multiplication, so long paths can differ in
//! the last digits from a product rounded once. The converted amount is
//! rounded up to the next whole unit.

use crate::types::{ConversionError, Edge, RATE_SCALE};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Stateless rate composition
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionEngine;

impl ConversionEngine {
    /// Product of the path rates, rounded after each step
    ///
    /// An empty path yields 1.
    ///
    /// # Errors
    ///
    /// - `ZeroRate` if an edge of the path has a rate of 0
    /// - `ArithmeticOverflow` if the product overflows
    pub fn multiplier(&self, path: &[Edge]) -> Result<Decimal, ConversionError> {
        path.iter().try_fold(Decimal::ONE, |product, edge| {
            if edge.rate.is_zero() {
                return Err(ConversionError::zero_rate(
                    edge.from.as_str(),
                    edge.to.as_str(),
                ));
            }
            product
                .checked_mul(edge.rate)
                .map(|product| product.round_dp(RATE_SCALE))
                .ok_or_else(|| ConversionError::arithmetic_overflow("rate composition"))
        })
    }

    /// `ceil(amount * multiplier)` as a whole number
    pub fn apply(&self, amount: u64, multiplier: Decimal) -> Result<u64, ConversionError> {
        Decimal::from(amount)
            .checked_mul(multiplier)
            .map(|converted| converted.ceil())
            .and_then(|converted| converted.to_u64())
            .ok_or_else(|| ConversionError::arithmetic_overflow("amount conversion"))
    }

    /// Convert `amount` along `path`
    pub fn convert(&self, amount: u64, path: &[Edge]) -> Result<u64, ConversionError> {
        let multiplier = self.multiplier(path)?;
        self.apply(amount, multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    fn path(rates: &[&str]) -> Vec<Edge> {
        rates
            .iter()
            .enumerate()
            .map(|(i, rate)| Edge::new(format!("C{}", i), format!("C{}", i + 1), dec(rate)))
            .collect()
    }

    #[test]
    fn test_eur_to_jpy_path() {
        let engine = ConversionEngine;
        let path = path(&["1.2053", "1.0351", "86.0305"]);

        assert_eq!(engine.multiplier(&path).unwrap(), dec("107.3317"));
        assert_eq!(engine.convert(550, &path).unwrap(), 59033);
    }

    #[test]
    fn test_running_product_is_rounded_each_step() {
        let engine = ConversionEngine;
        // 0.3333 * 0.3333 = 0.11108889 -> 0.1111, * 9 = 0.9999
        // A single rounding at the end would give 0.99980001 -> 0.9998
        let path = path(&["0.3333", "0.3333", "9"]);

        assert_eq!(engine.multiplier(&path).unwrap(), dec("0.9999"));
    }

    #[rstest]
    #[case::empty_path(&[], 550, 550)]
    #[case::exact(&["2"], 21, 42)]
    #[case::rounds_up(&["0.0116"], 100, 2)]
    #[case::rounds_up_tiny_fraction(&["1.0001"], 1, 2)]
    fn test_convert(#[case] rates: &[&str], #[case] amount: u64, #[case] expected: u64) {
        let engine = ConversionEngine;
        assert_eq!(engine.convert(amount, &path(rates)).unwrap(), expected);
    }

    #[test]
    fn test_zero_rate_edge_is_rejected() {
        let engine = ConversionEngine;
        let path = path(&["1.2053", "0", "86.0305"]);

        assert_eq!(
            engine.multiplier(&path),
            Err(ConversionError::zero_rate("C1", "C2"))
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let engine = ConversionEngine;
        let path = path(&["79228162514264337593543950335", "10"]);

        assert!(matches!(
            engine.multiplier(&path),
            Err(ConversionError::ArithmeticOverflow { .. })
        ));
    }
}

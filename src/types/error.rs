//! Error types for the currency converter
//!
//! This module defines all error types that can occur while reading the input
//! file, building the rate graph and resolving a conversion.
//!
//! # Error Categories
//!
//! - **Invocation Errors**: Missing input path, file not found
//! - **Input Errors**: Malformed request, count or rate lines (carry a 0-indexed line number)
//! - **Resolution Errors**: Unknown currency, no path between currencies
//! - **Arithmetic Errors**: Overflow while composing rates, zero-rate edges on
//!   the resolved path
//!
//! Every error is fatal to the request: there is no partial-result mode.

use thiserror::Error;

/// Main error type for the currency converter
///
/// Each variant includes the context needed to render a diagnostic.
/// Input errors carry the 0-indexed line they originate from; resolution and
/// arithmetic errors are not tied to a single line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// No input path was given
    #[error("A file path is required as sole argument")]
    MissingArgument,

    /// Input file not found at the specified path
    #[error("File path `{path}` does not exist")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the input or writing the result
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// First line is missing fields or carries an invalid amount
    #[error("Malformed request at line {line}: {message}")]
    MalformedRequestLine {
        /// Line index (always 0)
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// Second line is missing, non-numeric or non-positive
    #[error("Malformed exchange rate count at line {line}: {message}")]
    MalformedCountLine {
        /// Line index (always 1)
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// A rate line has fewer than 3 fields or an invalid rate
    #[error("Malformed exchange rate at line {line}: {message}")]
    MalformedRateLine {
        /// Line index of the offending rate line
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// Currency never declared as an edge endpoint
    #[error("Unknown currency '{currency}'")]
    UnknownCurrency {
        /// The currency code that was looked up
        currency: String,
    },

    /// Traversal completed without discovering the target currency
    #[error("No conversion path from {from} to {to}")]
    NoPath {
        /// Source currency
        from: String,
        /// Target currency
        to: String,
    },

    /// The resolved path uses an edge whose rounded rate is 0
    #[error("Exchange rate from {from} to {to} rounds to 0")]
    ZeroRate {
        /// Source currency of the edge
        from: String,
        /// Target currency of the edge
        to: String,
    },

    /// Decimal arithmetic overflowed
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },
}

impl From<std::io::Error> for ConversionError {
    fn from(error: std::io::Error) -> Self {
        ConversionError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ConversionError {
    fn from(error: csv::Error) -> Self {
        ConversionError::Io {
            message: error.to_string(),
        }
    }
}

impl ConversionError {
    /// Line the error originates from, if it is tied to one input line
    pub fn line(&self) -> Option<usize> {
        match self {
            ConversionError::MalformedRequestLine { line, .. }
            | ConversionError::MalformedCountLine { line, .. }
            | ConversionError::MalformedRateLine { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Human-readable message without the line prefix
    pub fn message(&self) -> String {
        match self {
            ConversionError::MalformedRequestLine { message, .. }
            | ConversionError::MalformedCountLine { message, .. }
            | ConversionError::MalformedRateLine { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        ConversionError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a MalformedRequestLine error
    pub fn malformed_request(line: usize, message: impl Into<String>) -> Self {
        ConversionError::MalformedRequestLine {
            line,
            message: message.into(),
        }
    }

    /// Create a MalformedCountLine error
    pub fn malformed_count(line: usize, message: impl Into<String>) -> Self {
        ConversionError::MalformedCountLine {
            line,
            message: message.into(),
        }
    }

    /// Create a MalformedRateLine error
    pub fn malformed_rate(line: usize, message: impl Into<String>) -> Self {
        ConversionError::MalformedRateLine {
            line,
            message: message.into(),
        }
    }

    /// Create an UnknownCurrency error
    pub fn unknown_currency(currency: &str) -> Self {
        ConversionError::UnknownCurrency {
            currency: currency.to_string(),
        }
    }

    /// Create a NoPath error
    pub fn no_path(from: &str, to: &str) -> Self {
        ConversionError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create a ZeroRate error
    pub fn zero_rate(from: &str, to: &str) -> Self {
        ConversionError::ZeroRate {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        ConversionError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::missing_argument(
        ConversionError::MissingArgument,
        "A file path is required as sole argument"
    )]
    #[case::file_not_found(
        ConversionError::FileNotFound { path: "rates.txt".to_string() },
        "File path `rates.txt` does not exist"
    )]
    #[case::io_error(
        ConversionError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::malformed_request(
        ConversionError::MalformedRequestLine { line: 0, message: "Amount must be greater than 0".to_string() },
        "Malformed request at line 0: Amount must be greater than 0"
    )]
    #[case::malformed_count(
        ConversionError::MalformedCountLine { line: 1, message: "missing".to_string() },
        "Malformed exchange rate count at line 1: missing"
    )]
    #[case::malformed_rate(
        ConversionError::MalformedRateLine { line: 4, message: "bad rate".to_string() },
        "Malformed exchange rate at line 4: bad rate"
    )]
    #[case::unknown_currency(
        ConversionError::UnknownCurrency { currency: "XYZ".to_string() },
        "Unknown currency 'XYZ'"
    )]
    #[case::no_path(
        ConversionError::NoPath { from: "EUR".to_string(), to: "JPY".to_string() },
        "No conversion path from EUR to JPY"
    )]
    #[case::zero_rate(
        ConversionError::ZeroRate { from: "VND".to_string(), to: "EUR".to_string() },
        "Exchange rate from VND to EUR rounds to 0"
    )]
    #[case::arithmetic_overflow(
        ConversionError::ArithmeticOverflow { operation: "rate composition".to_string() },
        "Arithmetic overflow in rate composition"
    )]
    fn test_error_display(#[case] error: ConversionError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::request(ConversionError::malformed_request(0, "x"), Some(0))]
    #[case::count(ConversionError::malformed_count(1, "x"), Some(1))]
    #[case::rate(ConversionError::malformed_rate(7, "x"), Some(7))]
    #[case::unknown_currency(ConversionError::unknown_currency("XYZ"), None)]
    #[case::no_path(ConversionError::no_path("EUR", "JPY"), None)]
    #[case::zero_rate(ConversionError::zero_rate("VND", "EUR"), None)]
    #[case::missing_argument(ConversionError::MissingArgument, None)]
    fn test_line_context(#[case] error: ConversionError, #[case] expected: Option<usize>) {
        assert_eq!(error.line(), expected);
    }

    #[test]
    fn test_message_strips_line_prefix() {
        let error = ConversionError::malformed_rate(3, "Rate must be greater than 0");
        assert_eq!(error.message(), "Rate must be greater than 0");

        let error = ConversionError::no_path("EUR", "JPY");
        assert_eq!(error.message(), "No conversion path from EUR to JPY");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: ConversionError = io_error.into();
        assert!(matches!(error, ConversionError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}

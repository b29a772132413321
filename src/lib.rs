//! Currency Converter Library
//! # Overview
//!
//! This library converts an amount from one currency to another using a flat
//! table of pairwise exchange rates.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (CurrencyCode, Edge, ConversionRequest, errors)
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`core`] - Conversion logic:
//!   - [`core::rate_table`] - Edge construction (forward and reciprocal rates)
//!   - [`core::adjacency`] - Outgoing edges grouped by currency
//!   - [`core::path_resolver`] - Traversal and path reconstruction
//!   - [`core::conversion`] - Rate composition and rounding
//!   - [`core::converter`] - Conversion orchestration
//! - [`io`] - Input file reading and line format handling
//! - [`pipeline`] - One input file to one result
//!
//! # Input Format
//!
//! ```text
//! EUR;550;JPY
//! 6
//! AUD;CHF;0.9661
//! JPY;KWD;13.1151
//! EUR;CHF;1.2053
//! AUD;JPY;86.0305
//! EUR;USD;1.2989
//! JPY;INR;0.6571
//! ```
//!
//! # Conversion Rules
//!
//! - Every rate line yields both directions; the reverse rate is the reciprocal
//! - Rates and the running product keep 4 fractional digits (banker's rounding)
//! - The path is the first one found by the traversal, not the best-rate one
//! - The converted amount is rounded up to a whole unit

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{
    AdjacencyIndex, Conversion, ConversionEngine, ConverterConfig, CurrencyConverter,
    PathResolver, RateTable, TraversalOrder,
};
pub use crate::io::InputReader;
pub use pipeline::{convert_file, run};
pub use types::{ConversionError, ConversionRequest, CurrencyCode, Edge, RateLine};

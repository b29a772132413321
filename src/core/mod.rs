//! Core conversion logic module
//!
//! This module contains the graph and arithmetic components:
//! - `rate_table` - Directed edge construction from rate lines
//! - `adjacency` - Per-currency grouping of outgoing edges
//! - `path_resolver` - Traversal and path reconstruction
//! - `conversion` - Rate composition and final rounding
//! - `converter` - Conversion orchestration

pub mod adjacency;
pub mod conversion;
pub mod converter;
pub mod path_resolver;
pub mod rate_table;

pub use adjacency::AdjacencyIndex;
pub use conversion::ConversionEngine;
pub use converter::{Conversion, ConverterConfig, CurrencyConverter};
pub use path_resolver::{PathResolver, PredecessorEntry, PredecessorMap, TraversalOrder};
pub use rate_table::RateTable;

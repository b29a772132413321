//! Currency conversion orchestration
//!
//! This module provides the CurrencyConverter that resolves one conversion
//! request by coordinating the core components:
//!
//! 1. `RateTable` builds the directed edges from the rate lines
//! 2. `AdjacencyIndex` groups them by source currency
//! 3. `PathResolver` finds a path from source to target
//! 4. `ConversionEngine` composes the path rates and applies them
//!
//! All structures are built per request and dropped afterwards; nothing is
//! shared between conversions.

use crate::core::adjacency::AdjacencyIndex;
use crate::core::conversion::ConversionEngine;
use crate::core::path_resolver::{PathResolver, TraversalOrder};
use crate::core::rate_table::RateTable;
use crate::types::{ConversionError, ConversionRequest, Edge, RateLine};
use rust_decimal::Decimal;
use tracing::debug;

/// Converter settings
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConverterConfig {
    /// Visit order used by the path resolver
    pub order: TraversalOrder,

    /// Reject inputs whose declared rate count differs from the actual one
    pub strict_count: bool,
}

impl ConverterConfig {
    pub fn new(order: TraversalOrder, strict_count: bool) -> Self {
        ConverterConfig {
            order,
            strict_count,
        }
    }
}

/// Outcome of one conversion
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Edges followed from source to target
    pub path: Vec<Edge>,

    /// Composed rate of the path
    pub multiplier: Decimal,

    /// Converted amount, rounded up
    pub amount: u64,
}

/// Resolves conversion requests against a set of rate lines
#[derive(Debug, Clone, Default)]
pub struct CurrencyConverter {
    config: ConverterConfig,
    engine: ConversionEngine,
}

impl CurrencyConverter {
    pub fn new(config: ConverterConfig) -> Self {
        CurrencyConverter {
            config,
            engine: ConversionEngine,
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert the requested amount using the given rate lines
    ///
    /// # Errors
    ///
    /// - `MalformedRateLine` if a rate cannot be turned into an edge
    /// - `UnknownCurrency` if source or target never appear in the rates
    /// - `NoPath` if the target is not reachable from the source
    /// - `ZeroRate` if the resolved path uses a rate that rounds to 0
    /// - `ArithmeticOverflow` if composing the rates overflows
    pub fn convert(
        &self,
        request: &ConversionRequest,
        rate_lines: &[RateLine],
    ) -> Result<Conversion, ConversionError> {
        let table = RateTable::from_lines(rate_lines)?;
        let index = AdjacencyIndex::new(&table);
        debug!(
            edges = table.len(),
            currencies = index.len(),
            "built rate graph"
        );

        let resolver = PathResolver::new(&index, self.config.order);
        let path = resolver.resolve(request.source.as_str(), request.target.as_str())?;
        debug!(
            order = ?self.config.order,
            path = %describe_path(request, &path),
            "resolved conversion path"
        );

        let multiplier = self.engine.multiplier(&path)?;
        let amount = self.engine.apply(request.amount, multiplier)?;
        debug!(%multiplier, amount, "converted amount");

        Ok(Conversion {
            path,
            multiplier,
            amount,
        })
    }
}

fn describe_path(request: &ConversionRequest, path: &[Edge]) -> String {
    let mut description = request.source.to_string();
    for edge in path {
        description.push_str(" -> ");
        description.push_str(edge.to.as_str());
    }
    description
}

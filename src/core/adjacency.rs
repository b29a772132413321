//! Adjacency index over a rate table
//!
//! Groups the edges of a [`RateTable`] by source currency, keeping the order
//! in which edges were added. The index is a read-only view: it is derived
//! from one table and never mutated on its own.

use crate::core::rate_table::RateTable;
use crate::types::{ConversionError, CurrencyCode, Edge};
use std::collections::HashMap;

/// Outgoing edges per currency
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    neighbors: HashMap<CurrencyCode, Vec<Edge>>,
}

impl AdjacencyIndex {
    pub fn new(table: &RateTable) -> Self {
        let mut neighbors: HashMap<CurrencyCode, Vec<Edge>> = HashMap::new();

        for edge in table.edges() {
            neighbors
                .entry(edge.from.clone())
                .or_default()
                .push(edge.clone());
        }

        AdjacencyIndex { neighbors }
    }

    /// Outgoing edges of `currency`, in insertion order
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if the currency never appears as an edge
    /// endpoint, so that a missing currency is not mistaken for an isolated one.
    pub fn neighbors(&self, currency: &str) -> Result<&[Edge], ConversionError> {
        self.neighbors
            .get(currency)
            .map(Vec::as_slice)
            .ok_or_else(|| ConversionError::unknown_currency(currency))
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.neighbors.contains_key(currency)
    }

    /// Number of distinct currencies
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

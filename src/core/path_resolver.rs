//! Path resolution over the adjacency index
//!
//! The resolver performs an unweighted traversal from a source currency and
//! records, for each currency, the edge through which it was first reached.
//! These predecessor entries form a spanning tree rooted at the source; the
//! path to a target is read back from that tree.
//!
//! # Traversal Order
//!
//! - **DepthFirst** (default): stack based, the last discovered currency is
//!   visited next. When several paths exist, this decides which one is
//!   returned.
//! - **BreadthFirst**: queue based, returns a path with the fewest edges.
//!
//! Neither order looks at rates: the returned path is the first one found,
//! not the one with the best rate.

use crate::core::adjacency::AdjacencyIndex;
use crate::types::{ConversionError, CurrencyCode, Edge};
use clap::ValueEnum;
use rust_decimal::Decimal;
use std::collections::{HashMap, VecDeque};
use tracing::trace;

/// Order in which discovered currencies are visited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TraversalOrder {
    /// Last discovered, first visited
    #[default]
    #[value(name = "dfs")]
    DepthFirst,

    /// First discovered, first visited
    #[value(name = "bfs")]
    BreadthFirst,
}

/// How a currency was first reached during traversal
#[derive(Debug, Clone, PartialEq)]
pub struct PredecessorEntry {
    pub to: CurrencyCode,

    /// `None` for the traversal root
    pub from: Option<CurrencyCode>,

    pub rate: Decimal,
}

/// Spanning tree produced by one traversal
///
/// Each currency appears at most once: the first discovery wins.
#[derive(Debug, Clone)]
pub struct PredecessorMap {
    root: CurrencyCode,
    entries: HashMap<CurrencyCode, PredecessorEntry>,
    discovery: Vec<CurrencyCode>,
}

impl PredecessorMap {
    fn new(root: CurrencyCode) -> Self {
        let sentinel = PredecessorEntry {
            to: root.clone(),
            from: None,
            rate: Decimal::ONE,
        };

        PredecessorMap {
            entries: HashMap::from([(root.clone(), sentinel)]),
            discovery: vec![root.clone()],
            root,
        }
    }

    /// Record `edge.to` as reached through `edge`, unless already discovered
    ///
    /// Returns whether the entry was recorded.
    fn record(&mut self, edge: &Edge) -> bool {
        if self.entries.contains_key(&edge.to) {
            return false;
        }

        self.entries.insert(
            edge.to.clone(),
            PredecessorEntry {
                to: edge.to.clone(),
                from: Some(edge.from.clone()),
                rate: edge.rate,
            },
        );
        self.discovery.push(edge.to.clone());
        true
    }

    pub fn root(&self) -> &CurrencyCode {
        &self.root
    }

    pub fn get(&self, currency: &str) -> Option<&PredecessorEntry> {
        self.entries.get(currency)
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.entries.contains_key(currency)
    }

    /// Currencies in the order they were discovered, root first
    pub fn discovery_order(&self) -> &[CurrencyCode] {
        &self.discovery
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ordered edge sequence from the root to `target`
    ///
    /// Walks predecessor entries back from the target until the root sentinel,
    /// then reverses them. The path to the root itself is empty.
    ///
    /// # Errors
    ///
    /// Returns `NoPath` if `target` was never discovered.
    pub fn path_to(&self, target: &str) -> Result<Vec<Edge>, ConversionError> {
        let mut path = Vec::new();
        let mut current = self
            .entries
            .get(target)
            .ok_or_else(|| ConversionError::no_path(self.root.as_str(), target))?;

        while let Some(from) = &current.from {
            path.push(Edge::new(from.clone(), current.to.clone(), current.rate));
            current = self
                .entries
                .get(from)
                .ok_or_else(|| ConversionError::no_path(self.root.as_str(), target))?;
        }

        path.reverse();
        Ok(path)
    }
}

/// Frontier of currencies waiting to be visited
struct Frontier {
    order: TraversalOrder,
    pending: VecDeque<CurrencyCode>,
}

impl Frontier {
    fn new(order: TraversalOrder, root: CurrencyCode) -> Self {
        Frontier {
            order,
            pending: VecDeque::from([root]),
        }
    }

    fn push(&mut self, currency: CurrencyCode) {
        self.pending.push_back(currency);
    }

    fn pop(&mut self) -> Option<CurrencyCode> {
        match self.order {
            TraversalOrder::DepthFirst => self.pending.pop_back(),
            TraversalOrder::BreadthFirst => self.pending.pop_front(),
        }
    }
}

/// Resolves conversion paths over one adjacency index
pub struct PathResolver<'a> {
    index: &'a AdjacencyIndex,
    order: TraversalOrder,
}

impl<'a> PathResolver<'a> {
    pub fn new(index: &'a AdjacencyIndex, order: TraversalOrder) -> Self {
        PathResolver { index, order }
    }

    /// Traverse every currency reachable from `source`
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if `source` is not in the index.
    pub fn traverse(&self, source: &str) -> Result<PredecessorMap, ConversionError> {
        self.traverse_until(source, None)
    }

    /// Resolve the edge sequence converting `source` into `target`
    ///
    /// Traversal stops as soon as `target` is discovered; since the first
    /// discovery wins, the result is the same as after a full traversal.
    ///
    /// # Errors
    ///
    /// - `UnknownCurrency` if `source` or `target` is not in the index
    /// - `NoPath` if `target` is not reachable from `source`
    pub fn resolve(&self, source: &str, target: &str) -> Result<Vec<Edge>, ConversionError> {
        if !self.index.contains(target) {
            return Err(ConversionError::unknown_currency(target));
        }

        let predecessors = self.traverse_until(source, Some(target))?;
        predecessors.path_to(target)
    }

    fn traverse_until(
        &self,
        source: &str,
        target: Option<&str>,
    ) -> Result<PredecessorMap, ConversionError> {
        // Fails on an unknown source before any state is built
        self.index.neighbors(source)?;

        let root = CurrencyCode::from(source);
        let mut predecessors = PredecessorMap::new(root.clone());
        let mut frontier = Frontier::new(self.order, root);

        if target == Some(source) {
            return Ok(predecessors);
        }

        while let Some(currency) = frontier.pop() {
            trace!(currency = %currency, "visiting");

            for edge in self.index.neighbors(currency.as_str())? {
                if !predecessors.record(edge) {
                    continue;
                }

                if target == Some(edge.to.as_str()) {
                    return Ok(predecessors);
                }
                frontier.push(edge.to.clone());
            }
        }

        Ok(predecessors)
    }
}

//! Similarity Graph
//!
//! Simple undirected weighted graph over entity records. Storage is a
//! petgraph adjacency list keyed by `NodeIndex`; a side map resolves
//! identifiers to indices.
//!
//! # Invariants
//!
//! 1. Node indices follow insertion order (node `i` is the `i`-th record)
//! 2. Identifiers are unique
//! 3. No self-loops, no parallel edges, every weight is `> 0`

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::HashMap;

use super::record::EntityRecord;
use crate::errors::{DinegraphError, Result};

/// Materialized similarity edge (identifier view)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Weighted undirected similarity graph
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraph {
    graph: UnGraph<EntityRecord, f64>,
    index: HashMap<String, NodeIndex>,
}

impl SimilarityGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph sized for `nodes` records and `edges` edges
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            index: HashMap::with_capacity(nodes),
        }
    }

    /// Insert a record as a new node
    ///
    /// Fails with `DuplicateIdentifier` if the identifier is already present.
    pub fn add_record(&mut self, record: EntityRecord) -> Result<NodeIndex> {
        if let Some(existing) = self.index.get(&record.identifier) {
            return Err(DinegraphError::DuplicateIdentifier {
                identifier: record.identifier,
                first_index: existing.index(),
                second_index: self.graph.node_count(),
            });
        }

        let identifier = record.identifier.clone();
        let idx = self.graph.add_node(record);
        self.index.insert(identifier, idx);
        Ok(idx)
    }

    /// Connect two distinct nodes with a positive weight
    ///
    /// Callers guarantee each unordered pair is added at most once.
    pub(crate) fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, weight: f64) {
        debug_assert!(a != b, "self-loop on {:?}", a);
        debug_assert!(weight > 0.0, "non-positive weight {}", weight);
        self.graph.add_edge(a, b, weight);
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Record stored at a node index
    pub fn record(&self, idx: NodeIndex) -> Option<&EntityRecord> {
        self.graph.node_weight(idx)
    }

    /// Resolve an identifier to its node index
    pub fn node_index(&self, identifier: &str) -> Option<NodeIndex> {
        self.index.get(identifier).copied()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &EntityRecord> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Weight of the edge between two identifiers, if materialized
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let a = self.node_index(a)?;
        let b = self.node_index(b)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Neighbors of a node with the connecting edge weight
    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph.edges(idx).map(move |edge| {
            let other = if edge.source() == idx {
                edge.target()
            } else {
                edge.source()
            };
            (other, *edge.weight())
        })
    }

    /// Sum of the weights of all edges touching a node
    pub fn total_weight(&self, idx: NodeIndex) -> f64 {
        self.neighbors(idx).map(|(_, weight)| weight).sum()
    }

    /// All edges in insertion order, as identifier pairs
    pub fn edges(&self) -> Vec<SimilarityEdge> {
        self.graph
            .edge_references()
            .map(|edge| SimilarityEdge {
                source: self.graph[edge.source()].identifier.clone(),
                target: self.graph[edge.target()].identifier.clone(),
                weight: *edge.weight(),
            })
            .collect()
    }

    /// Underlying petgraph storage
    pub fn as_petgraph(&self) -> &UnGraph<EntityRecord, f64> {
        &self.graph
    }
}

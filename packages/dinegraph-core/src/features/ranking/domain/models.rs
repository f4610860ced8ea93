//! Core Domain Models

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One ranked entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntity {
    /// Entity identifier (graph node label)
    pub identifier: String,

    /// Centrality score (0.0-1.0, all scores sum to 1.0)
    pub score: f64,
}

impl RankedEntity {
    pub fn new(identifier: impl Into<String>, score: f64) -> Self {
        Self {
            identifier: identifier.into(),
            score,
        }
    }

    /// Ranking order: descending score, ties by ascending identifier
    pub fn rank_order(a: &RankedEntity, b: &RankedEntity) -> Ordering {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.identifier.cmp(&b.identifier))
    }
}

/// Rank Result - ordered centrality scores for one graph
///
/// Immutable once built.
///
/// # Invariants
///
/// 1. `entries` are sorted by [`RankedEntity::rank_order`]
/// 2. Scores sum to ~1.0 when non-empty
/// 3. `converged` is false only if the iteration cap was hit first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankResult {
    entries: Vec<RankedEntity>,

    /// Whether power iteration reached the tolerance
    pub converged: bool,

    /// Iterations actually run
    pub iterations: usize,

    /// L1 change of the last iteration
    pub l1_delta: f64,
}

impl RankResult {
    /// Sort `entries` and wrap them with convergence diagnostics
    pub fn new(mut entries: Vec<RankedEntity>, converged: bool, iterations: usize, l1_delta: f64) -> Self {
        entries.sort_by(RankedEntity::rank_order);
        Self {
            entries,
            converged,
            iterations,
            l1_delta,
        }
    }

    /// Result for a graph with no nodes
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            converged: true,
            iterations: 0,
            l1_delta: 0.0,
        }
    }

    pub fn entries(&self) -> &[RankedEntity] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RankedEntity> {
        self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedEntity> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First `k` entries (fewer if the result is shorter)
    pub fn top(&self, k: usize) -> &[RankedEntity] {
        &self.entries[..k.min(self.entries.len())]
    }

    /// Score of an identifier
    pub fn score_of(&self, identifier: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.identifier == identifier)
            .map(|e| e.score)
    }

    /// Zero-based position of an identifier
    pub fn position_of(&self, identifier: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.identifier == identifier)
    }

    /// Sum of all scores
    pub fn total_score(&self) -> f64 {
        self.entries.iter().map(|e| e.score).sum()
    }

    /// (identifier, score) pairs in rank order
    pub fn pairs(&self) -> Vec<(String, f64)> {
        self.entries
            .iter()
            .map(|e| (e.identifier.clone(), e.score))
            .collect()
    }
}

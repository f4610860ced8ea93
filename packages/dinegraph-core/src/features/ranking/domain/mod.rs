//! Domain Models for ranking
//!
//! Pure business logic, no infrastructure dependencies.

pub mod models;

pub use models::{RankResult, RankedEntity};

use crate::features::similarity_graph::SimilarityGraph;

/// Centrality ranking over a similarity graph
///
/// Implementations return every node exactly once, in rank order.
pub trait CentralityRanker: Send + Sync {
    fn rank(&self, graph: &SimilarityGraph) -> RankResult;
}

//! Graph Builder - O(n²) pairwise construction of the similarity graph
//!
//! # Algorithm
//! 1. Validate every record and insert it as a node (rejects duplicates)
//! 2. Score every unordered pair (i, j), i < j, in input order
//! 3. Insert an edge for each pair whose weight is > 0
//!
//! Pair scoring reads only the two records involved, so rows of the pair
//! matrix are scored on the rayon pool for large inputs. Edges are always
//! inserted by the calling thread in (i, j) order; the parallel and
//! sequential paths produce the same graph.

use petgraph::graph::NodeIndex;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::Result;
use crate::features::similarity_graph::domain::{
    CuisineMatch, EntityRecord, SimilarityGraph, SimilarityScorer,
};
use crate::shared::parallel::should_parallelize;

/// Similarity graph configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimilaritySettings {
    /// Cuisine comparison strategy
    pub cuisine_match: CuisineMatch,

    /// Minimum record count before pair scoring runs on the rayon pool (0 = never)
    pub parallel_threshold: usize,
}

impl Default for SimilaritySettings {
    fn default() -> Self {
        Self {
            cuisine_match: CuisineMatch::Overlap,
            parallel_threshold: 256,
        }
    }
}

/// Candidate edge produced by pair scoring
type ScoredPair = (usize, usize, f64);

/// Similarity graph builder
///
/// # Example
/// ```ignore
/// let builder = SimilarityGraphBuilder::new(&SimilaritySettings::default());
/// let graph = builder.build(&records)?;
/// ```
#[derive(Debug, Clone)]
pub struct SimilarityGraphBuilder {
    settings: SimilaritySettings,
    scorer: SimilarityScorer,
}

impl SimilarityGraphBuilder {
    /// Create a new graph builder
    pub fn new(settings: &SimilaritySettings) -> Self {
        Self {
            settings: settings.clone(),
            scorer: SimilarityScorer::new(settings.cuisine_match),
        }
    }

    pub fn settings(&self) -> &SimilaritySettings {
        &self.settings
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Build the similarity graph over `records`
    ///
    /// An empty slice yields an empty graph.
    pub fn build(&self, records: &[EntityRecord]) -> Result<SimilarityGraph> {
        let n = records.len();
        let mut graph = SimilarityGraph::with_capacity(n, 0);

        for record in records {
            record.validate()?;
            graph.add_record(record.clone())?;
        }

        let pairs = if should_parallelize(self.settings.parallel_threshold, n) {
            debug!("build: scoring {} records on rayon pool", n);
            self.score_pairs_parallel(records)
        } else {
            self.score_pairs_sequential(records)
        };

        let candidate_pairs = n * n.saturating_sub(1) / 2;
        for (i, j, weight) in pairs {
            graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), weight);
        }

        info!(
            "Built similarity graph: {} nodes, {} edges ({} pairs scored, {:?} cuisine match)",
            graph.node_count(),
            graph.edge_count(),
            candidate_pairs,
            self.settings.cuisine_match
        );

        Ok(graph)
    }

    /// Positive-weight pairs for row `i` of the upper triangle
    fn score_row(&self, records: &[EntityRecord], i: usize) -> Vec<ScoredPair> {
        let left = &records[i];
        records[i + 1..]
            .iter()
            .enumerate()
            .filter_map(|(offset, right)| {
                let weight = self.scorer.similarity(left, right);
                if weight > 0.0 {
                    Some((i, i + 1 + offset, weight))
                } else {
                    None
                }
            })
            .collect()
    }

    fn score_pairs_sequential(&self, records: &[EntityRecord]) -> Vec<ScoredPair> {
        (0..records.len())
            .flat_map(|i| self.score_row(records, i))
            .collect()
    }

    fn score_pairs_parallel(&self, records: &[EntityRecord]) -> Vec<ScoredPair> {
        // Indexed collect keeps rows in order
        let rows: Vec<Vec<ScoredPair>> = (0..records.len())
            .into_par_iter()
            .map(|i| self.score_row(records, i))
            .collect();

        rows.into_iter().flatten().collect()
    }
}

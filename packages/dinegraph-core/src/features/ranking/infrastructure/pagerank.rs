//! PageRank Engine - Centrality scoring over the similarity graph
//!
//! Weighted PageRank by power iteration. Each node splits its mass across its
//! neighbors in proportion to edge weight; a damping factor mixes this with a
//! uniform restart.
//!
//! # Algorithm
//! ```text
//! PR(v) = (1-d)/N + d * ( Σ PR(u) * w(u,v) / W(u)  +  D/N )
//!                         u~v
//!
//! where:
//!   d    = damping factor (0.85)
//!   N    = number of nodes
//!   W(u) = Σ w(u,x), total edge weight at u
//!   D    = Σ PR(u) over dangling nodes (W(u) == 0)
//! ```
//!
//! Dangling (isolated) nodes hand their whole mass back uniformly, so no rank
//! sinks and the scores keep summing to 1.
//!
//! Iteration stops once the L1 change `Σ|PR_new - PR_old|` drops below
//! `tolerance * N`, or at `max_iterations`. Hitting the cap is not an error:
//! the scores at the cap are returned with `converged = false`.
//!
//! # Performance
//! - **Complexity**: O(E * iterations) where E = edges
//! - **Memory**: O(N + E) for the adjacency and two score buffers

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::features::ranking::domain::{CentralityRanker, RankResult, RankedEntity};
use crate::features::similarity_graph::SimilarityGraph;
use crate::shared::parallel::should_parallelize;

/// PageRank configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageRankSettings {
    /// Damping factor (typically 0.85)
    pub damping: f64,

    /// Maximum iterations
    pub max_iterations: usize,

    /// Per-node convergence tolerance (compared against L1 change / N)
    pub tolerance: f64,

    /// Minimum node count before the per-node update runs on the rayon pool (0 = never)
    pub parallel_threshold: usize,
}

impl Default for PageRankSettings {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
            parallel_threshold: 256,
        }
    }
}

/// Index-keyed weighted adjacency, snapshot of a similarity graph
#[derive(Debug, Clone)]
struct WeightedAdjacency {
    /// neighbors[v] = (u, w(u,v)), sorted by u
    neighbors: Vec<Vec<(usize, f64)>>,

    /// out_weight[u] = W(u)
    out_weight: Vec<f64>,

    /// Nodes with W(u) == 0
    dangling: Vec<usize>,
}

impl WeightedAdjacency {
    fn from_graph(graph: &SimilarityGraph) -> Self {
        let petgraph = graph.as_petgraph();

        let neighbors: Vec<Vec<(usize, f64)>> = petgraph
            .node_indices()
            .map(|idx| {
                let mut adjacent: Vec<(usize, f64)> = graph
                    .neighbors(idx)
                    .map(|(other, weight)| (other.index(), weight))
                    .collect();
                adjacent.sort_by_key(|(u, _)| *u);
                adjacent
            })
            .collect();

        let out_weight: Vec<f64> = neighbors
            .iter()
            .map(|adjacent| adjacent.iter().map(|(_, w)| w).sum())
            .collect();

        let dangling = out_weight
            .iter()
            .enumerate()
            .filter(|(_, &w)| w <= 0.0)
            .map(|(u, _)| u)
            .collect();

        Self {
            neighbors,
            out_weight,
            dangling,
        }
    }

    fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Σ scores[u] * w(u,v) / W(u) over the neighbors of v
    fn incoming_mass(&self, v: usize, scores: &[f64]) -> f64 {
        self.neighbors[v]
            .iter()
            .map(|&(u, weight)| scores[u] * weight / self.out_weight[u])
            .sum()
    }
}

/// Outcome of power iteration before labels are attached
#[derive(Debug, Clone)]
struct PowerIteration {
    scores: Vec<f64>,
    iterations: usize,
    converged: bool,
    l1_delta: f64,
}

/// PageRank engine
///
/// # Example
/// ```ignore
/// let settings = PageRankSettings::default();
/// let engine = PageRankEngine::new(&settings);
///
/// let ranking = engine.compute_pagerank(&graph);
/// for entry in ranking.top(10) {
///     println!("{} {:.4}", entry.identifier, entry.score);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PageRankEngine {
    settings: PageRankSettings,
}

impl PageRankEngine {
    /// Create a new PageRank engine
    pub fn new(settings: &PageRankSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    pub fn settings(&self) -> &PageRankSettings {
        &self.settings
    }

    /// Compute PageRank scores and order them
    ///
    /// # Returns
    /// Every node once, by descending score, ties by identifier.
    /// Empty graph → empty result.
    pub fn compute_pagerank(&self, graph: &SimilarityGraph) -> RankResult {
        if graph.is_empty() {
            return RankResult::empty();
        }

        let adjacency = WeightedAdjacency::from_graph(graph);
        let outcome = self.power_iteration(&adjacency);

        if outcome.converged {
            debug!(
                "PageRank converged in {} iterations (delta: {:e})",
                outcome.iterations, outcome.l1_delta
            );
        } else {
            warn!(
                "PageRank hit the iteration cap ({}) without converging (delta: {:e})",
                outcome.iterations, outcome.l1_delta
            );
        }

        let entries: Vec<RankedEntity> = graph
            .records()
            .zip(outcome.scores)
            .map(|(record, score)| RankedEntity::new(record.identifier.clone(), score))
            .collect();

        info!(
            "Computed PageRank for {} nodes ({} dangling)",
            entries.len(),
            adjacency.dangling.len()
        );

        RankResult::new(
            entries,
            outcome.converged,
            outcome.iterations,
            outcome.l1_delta,
        )
    }

    /// Power iteration with double-buffered score vectors
    fn power_iteration(&self, adjacency: &WeightedAdjacency) -> PowerIteration {
        let n = adjacency.len();
        let n_f64 = n as f64;
        let damping = self.settings.damping;
        let teleport = (1.0 - damping) / n_f64;
        let threshold = self.settings.tolerance * n_f64;
        let parallel = should_parallelize(self.settings.parallel_threshold, n);

        let mut scores = vec![1.0 / n_f64; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut converged = false;
        let mut l1_delta = f64::INFINITY;

        for _ in 0..self.settings.max_iterations {
            let dangling_sum: f64 = adjacency.dangling.iter().map(|&u| scores[u]).sum();
            let base = teleport + damping * dangling_sum / n_f64;

            if parallel {
                let current = &scores;
                next.par_iter_mut().enumerate().for_each(|(v, slot)| {
                    *slot = base + damping * adjacency.incoming_mass(v, current);
                });
            } else {
                for (v, slot) in next.iter_mut().enumerate() {
                    *slot = base + damping * adjacency.incoming_mass(v, &scores);
                }
            }

            l1_delta = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);
            iterations += 1;

            if l1_delta < threshold {
                converged = true;
                break;
            }
        }

        normalize_scores(&mut scores);

        PowerIteration {
            scores,
            iterations,
            converged,
            l1_delta,
        }
    }
}

impl CentralityRanker for PageRankEngine {
    fn rank(&self, graph: &SimilarityGraph) -> RankResult {
        self.compute_pagerank(graph)
    }
}

/// Rescale scores to sum to 1 (removes floating-point drift)
fn normalize_scores(scores: &mut [f64]) {
    let total: f64 = scores.iter().sum();

    if total > 0.0 {
        for score in scores.iter_mut() {
            *score /= total;
        }
    }
}

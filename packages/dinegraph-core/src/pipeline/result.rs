//! Pipeline result types

use crate::features::ranking::RankResult;
use crate::features::report::RecommendationReport;
use crate::features::similarity_graph::SimilarityGraph;

/// Counts and timings for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    /// Rows that reached the pipeline
    pub loaded: usize,

    /// Rows the loader skipped as malformed
    pub skipped: usize,

    /// Rows left after the preference filter
    pub filtered: usize,

    /// Rows dropped as repeated names
    pub deduplicated: usize,

    pub nodes: usize,
    pub edges: usize,
    pub iterations: usize,
    pub converged: bool,

    pub load_ms: f64,
    pub filter_ms: f64,
    pub build_ms: f64,
    pub rank_ms: f64,
}

impl PipelineStats {
    pub fn total_ms(&self) -> f64 {
        self.load_ms + self.filter_ms + self.build_ms + self.rank_ms
    }
}

/// Everything one run produces
#[derive(Debug, Clone)]
pub struct RecommendationOutput {
    pub graph: SimilarityGraph,
    pub ranking: RankResult,
    pub report: RecommendationReport,
    pub stats: PipelineStats,
}

//! Ranking UseCase Implementation

use std::time::Instant;
use tracing::info;

use crate::errors::Result;
use crate::features::ranking::domain::{CentralityRanker, RankResult};
use crate::features::ranking::infrastructure::{PageRankEngine, PageRankSettings};
use crate::features::similarity_graph::{
    EntityRecord, SimilarityGraph, SimilarityGraphBuilder, SimilaritySettings,
};

/// Input for ranking: the already-filtered candidates
pub struct RankingInput<'a> {
    pub records: &'a [EntityRecord],
    pub similarity: Option<SimilaritySettings>,
    pub pagerank: Option<PageRankSettings>,
}

impl<'a> RankingInput<'a> {
    /// Input with default settings
    pub fn new(records: &'a [EntityRecord]) -> Self {
        Self {
            records,
            similarity: None,
            pagerank: None,
        }
    }
}

/// Output from ranking
#[derive(Debug, Clone)]
pub struct RankingOutput {
    pub graph: SimilarityGraph,
    pub ranking: RankResult,
    pub stats: RankingStats,
}

/// Ranking statistics
#[derive(Debug, Clone, Default)]
pub struct RankingStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub pagerank_iterations: usize,
    pub converged: bool,
    pub build_ms: f64,
    pub rank_ms: f64,
}

/// Ranking UseCase Trait
pub trait RankingUseCase: Send + Sync {
    fn rank_records(&self, input: RankingInput) -> Result<RankingOutput>;
}

/// Ranking UseCase Implementation
#[derive(Debug, Default)]
pub struct RankingUseCaseImpl;

impl RankingUseCaseImpl {
    pub fn new() -> Self {
        Self
    }
}

impl RankingUseCase for RankingUseCaseImpl {
    fn rank_records(&self, input: RankingInput) -> Result<RankingOutput> {
        let similarity = input.similarity.unwrap_or_default();
        let pagerank = input.pagerank.unwrap_or_default();

        let build_start = Instant::now();
        let graph = SimilarityGraphBuilder::new(&similarity).build(input.records)?;
        let build_ms = build_start.elapsed().as_secs_f64() * 1000.0;

        let rank_start = Instant::now();
        let ranking = PageRankEngine::new(&pagerank).rank(&graph);
        let rank_ms = rank_start.elapsed().as_secs_f64() * 1000.0;

        info!(
            "Ranked {} candidates over {} edges in {:.2}ms",
            graph.node_count(),
            graph.edge_count(),
            build_ms + rank_ms
        );

        Ok(RankingOutput {
            stats: RankingStats {
                total_nodes: graph.node_count(),
                total_edges: graph.edge_count(),
                pagerank_iterations: ranking.iterations,
                converged: ranking.converged,
                build_ms,
                rank_ms,
            },
            graph,
            ranking,
        })
    }
}

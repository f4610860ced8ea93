/*
 * Dinegraph - restaurant similarity graph and centrality ranking
 *
 * Feature-First Architecture:
 * - features/    : similarity_graph → ranking, plus loader / preference / report
 * - pipeline/    : load → filter → dedupe → build → rank → report
 * - config/      : versioned YAML configuration with validation
 * - shared/      : rayon pool setup
 *
 * Performance:
 * - Rayon work-stealing for pair scoring and the rank update
 * - Identical results on the sequential and parallel paths
 */

pub mod config;
pub mod errors;
pub mod features;
pub mod pipeline;
pub mod shared;

pub use config::{ConfigError, RecommenderConfig, Validatable};
pub use errors::{DinegraphError, Result};
pub use features::loader::{CsvRestaurantLoader, LoadOutcome, LoaderSettings, RestaurantRow};
pub use features::preference::Preferences;
pub use features::ranking::{
    CentralityRanker, PageRankEngine, PageRankSettings, RankResult, RankedEntity,
};
pub use features::report::{GraphExport, RecommendationReport, ReportFormat, ReportSettings};
pub use features::similarity_graph::{
    CuisineMatch, EntityRecord, SimilarityGraph, SimilarityGraphBuilder, SimilaritySettings,
};
pub use pipeline::{DuplicatePolicy, PipelineStats, RecommendationOutput, RecommendationPipeline};

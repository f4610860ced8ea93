//! Recommendation pipeline

use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use super::dedupe::dedupe_rows;
use super::result::{PipelineStats, RecommendationOutput};
use crate::config::{RecommenderConfig, Validatable};
use crate::errors::Result;
use crate::features::loader::{CsvRestaurantLoader, LoadOutcome, RestaurantRow};
use crate::features::preference::{filter, Preferences};
use crate::features::ranking::{RankingInput, RankingUseCase, RankingUseCaseImpl};
use crate::features::report::RecommendationReport;
use crate::features::similarity_graph::EntityRecord;

/// Load → filter → dedupe → build → rank → report
///
/// # Example
/// ```ignore
/// let pipeline = RecommendationPipeline::new(RecommenderConfig::default())?;
/// let output = pipeline.run_from_path("zomato.csv", &Preferences::new().cuisine("cafe"))?;
/// print!("{}", output.report.render_text());
/// ```
pub struct RecommendationPipeline {
    config: RecommenderConfig,
    ranking: Box<dyn RankingUseCase>,
}

impl RecommendationPipeline {
    /// Validates `config` up front
    pub fn new(config: RecommenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ranking: Box::new(RankingUseCaseImpl::new()),
        })
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Load a CSV file and run every stage
    pub fn run_from_path(
        &self,
        path: impl AsRef<Path>,
        prefs: &Preferences,
    ) -> Result<RecommendationOutput> {
        let start = Instant::now();
        let LoadOutcome { rows, skipped } =
            CsvRestaurantLoader::new(&self.config.loader).load_path(path)?;
        let load_ms = start.elapsed().as_secs_f64() * 1000.0;

        let mut output = self.run(rows, prefs)?;
        output.stats.skipped = skipped;
        output.stats.load_ms = load_ms;
        Ok(output)
    }

    /// Run every stage after loading
    pub fn run(&self, rows: Vec<RestaurantRow>, prefs: &Preferences) -> Result<RecommendationOutput> {
        let mut stats = PipelineStats {
            loaded: rows.len(),
            ..Default::default()
        };

        let start = Instant::now();
        let candidates = filter(&rows, prefs);
        stats.filtered = candidates.len();
        let (candidates, dropped) = dedupe_rows(candidates, self.config.duplicates);
        stats.deduplicated = dropped;
        stats.filter_ms = start.elapsed().as_secs_f64() * 1000.0;

        if candidates.is_empty() {
            warn!(
                "No restaurants match {:?} ({} rows considered)",
                prefs, stats.loaded
            );
        }

        let records: Vec<EntityRecord> = candidates.iter().map(RestaurantRow::to_entity).collect();
        let ranked = self.ranking.rank_records(RankingInput {
            records: &records,
            similarity: Some(self.config.similarity.clone()),
            pagerank: Some(self.config.pagerank.clone()),
        })?;

        stats.nodes = ranked.stats.total_nodes;
        stats.edges = ranked.stats.total_edges;
        stats.iterations = ranked.stats.pagerank_iterations;
        stats.converged = ranked.stats.converged;
        stats.build_ms = ranked.stats.build_ms;
        stats.rank_ms = ranked.stats.rank_ms;

        let report = RecommendationReport::from_rank(&ranked.ranking, self.config.report.top_k);

        info!(
            "Recommended {} of {} candidates ({} loaded, {} duplicates dropped)",
            report.entries.len(),
            stats.nodes,
            stats.loaded,
            stats.deduplicated
        );

        Ok(RecommendationOutput {
            graph: ranked.graph,
            ranking: ranked.ranking,
            report,
            stats,
        })
    }
}

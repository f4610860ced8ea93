//! Configuration
//!
//! - `error`: [`ConfigError`] and [`ConfigResult`]
//! - `validation`: the [`Validatable`] trait, one impl per section
//! - `io`: YAML schema v1
//! - `recommender_config`: [`RecommenderConfig`] with builder closures and YAML loading

pub mod error;
pub mod io;
pub mod recommender_config;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, SUPPORTED_VERSIONS};
pub use recommender_config::RecommenderConfig;
pub use validation::Validatable;

/// Section aliases matching the YAML keys
pub type PageRankConfig = crate::features::ranking::PageRankSettings;
pub type SimilarityConfig = crate::features::similarity_graph::SimilaritySettings;
pub type LoaderConfig = crate::features::loader::LoaderSettings;
pub type ReportConfig = crate::features::report::ReportSettings;
pub use crate::shared::parallel::ParallelConfig;

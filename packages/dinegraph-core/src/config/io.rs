//! Configuration I/O (YAML schema)
//!
//! Defines the YAML schema types. Conversion to and from
//! [`RecommenderConfig`](super::RecommenderConfig) lives in
//! `recommender_config.rs`.

use serde::{Deserialize, Serialize};

use crate::features::loader::LoaderSettings;
use crate::features::ranking::PageRankSettings;
use crate::features::report::ReportSettings;
use crate::features::similarity_graph::SimilaritySettings;
use crate::pipeline::DuplicatePolicy;
use crate::shared::parallel::ParallelConfig;

/// Schema versions this build understands
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
///
/// Every section is optional; absent sections keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (required, always 1 for v1)
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<SimilaritySettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagerank: Option<PageRankSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader: Option<LoaderSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicates: Option<DuplicatePolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<ParallelConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_optional() {
        let export: ConfigExportV1 = serde_yaml::from_str("version: 1\n").unwrap();

        assert_eq!(export.version, Some(1));
        assert!(export.pagerank.is_none());
        assert!(export.loader.is_none());
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        let result: Result<ConfigExportV1, _> = serde_yaml::from_str("version: 1\npreset: fast\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_section_field_rejected() {
        let yaml = "version: 1\npagerank:\n  dampening: 0.9\n";
        let result: Result<ConfigExportV1, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let yaml = "version: 1\npagerank:\n  damping: 0.9\n";
        let export: ConfigExportV1 = serde_yaml::from_str(yaml).unwrap();
        let pagerank = export.pagerank.unwrap();

        assert_eq!(pagerank.damping, 0.9);
        assert_eq!(pagerank.max_iterations, PageRankSettings::default().max_iterations);
    }
}

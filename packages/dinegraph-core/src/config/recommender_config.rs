//! Recommender configuration
//!
//! One struct gathers every tunable section. Sections can be overridden
//! with builder closures or loaded from a versioned YAML file:
//!
//! ```yaml
//! version: 1
//! pagerank:
//!   damping: 0.9
//! report:
//!   top_k: 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, SUPPORTED_VERSIONS};
use super::validation::Validatable;
use crate::features::loader::LoaderSettings;
use crate::features::ranking::PageRankSettings;
use crate::features::report::ReportSettings;
use crate::features::similarity_graph::SimilaritySettings;
use crate::pipeline::DuplicatePolicy;
use crate::shared::parallel::ParallelConfig;

/// Complete recommender configuration
///
/// # Example
/// ```ignore
/// let config = RecommenderConfig::default()
///     .pagerank(|p| PageRankSettings { damping: 0.9, ..p })
///     .report(|r| ReportSettings { top_k: 5, ..r });
/// config.validate()?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    pub similarity: SimilaritySettings,
    pub pagerank: PageRankSettings,
    pub loader: LoaderSettings,
    pub report: ReportSettings,
    pub duplicates: DuplicatePolicy,
    pub parallel: ParallelConfig,
}

impl RecommenderConfig {
    /// Override similarity settings
    pub fn similarity<F>(mut self, f: F) -> Self
    where
        F: FnOnce(SimilaritySettings) -> SimilaritySettings,
    {
        self.similarity = f(self.similarity);
        self
    }

    /// Override PageRank settings
    pub fn pagerank<F>(mut self, f: F) -> Self
    where
        F: FnOnce(PageRankSettings) -> PageRankSettings,
    {
        self.pagerank = f(self.pagerank);
        self
    }

    /// Override loader settings
    pub fn loader<F>(mut self, f: F) -> Self
    where
        F: FnOnce(LoaderSettings) -> LoaderSettings,
    {
        self.loader = f(self.loader);
        self
    }

    /// Override report settings
    pub fn report<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ReportSettings) -> ReportSettings,
    {
        self.report = f(self.report);
        self
    }

    /// Override thread pool settings
    pub fn parallel<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ParallelConfig) -> ParallelConfig,
    {
        self.parallel = f(self.parallel);
        self
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Load and validate a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!("from_yaml: loaded {}", path.display());
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let defaults = Self::default();
        let config = Self {
            similarity: export.similarity.unwrap_or(defaults.similarity),
            pagerank: export.pagerank.unwrap_or(defaults.pagerank),
            loader: export.loader.unwrap_or(defaults.loader),
            report: export.report.unwrap_or(defaults.report),
            duplicates: export.duplicates.unwrap_or(defaults.duplicates),
            parallel: export.parallel.unwrap_or(defaults.parallel),
        };

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML schema v1 with every section present
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            similarity: Some(self.similarity.clone()),
            pagerank: Some(self.pagerank.clone()),
            loader: Some(self.loader.clone()),
            report: Some(self.report.clone()),
            duplicates: Some(self.duplicates),
            parallel: Some(self.parallel.clone()),
        };

        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Validatable for RecommenderConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.similarity.validate()?;
        self.pagerank.validate()?;
        self.loader.validate()?;
        self.report.validate()?;
        self.parallel.validate()?;
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "recommender"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::similarity_graph::CuisineMatch;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builder_closures() {
        let config = RecommenderConfig::default()
            .pagerank(|p| PageRankSettings { damping: 0.9, ..p })
            .similarity(|s| SimilaritySettings {
                cuisine_match: CuisineMatch::Exact,
                ..s
            })
            .report(|r| ReportSettings { top_k: 3, ..r })
            .duplicates(DuplicatePolicy::Reject);

        assert_eq!(config.pagerank.damping, 0.9);
        assert_eq!(config.pagerank.max_iterations, 100);
        assert_eq!(config.similarity.cuisine_match, CuisineMatch::Exact);
        assert_eq!(config.report.top_k, 3);
        assert_eq!(config.duplicates, DuplicatePolicy::Reject);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = RecommenderConfig::default()
            .pagerank(|p| PageRankSettings { tolerance: 1e-8, ..p })
            .report(|r| ReportSettings { top_k: 25, ..r });

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("top_k: 25"));

        let parsed = RecommenderConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
similarity:
  cuisine_match: exact
pagerank:
  damping: 0.9
  max_iterations: 50
duplicates: reject
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml_content.as_bytes()).unwrap();

        let config = RecommenderConfig::from_yaml(file.path()).unwrap();
        assert_eq!(config.similarity.cuisine_match, CuisineMatch::Exact);
        assert_eq!(config.pagerank.damping, 0.9);
        assert_eq!(config.pagerank.max_iterations, 50);
        assert_eq!(config.duplicates, DuplicatePolicy::Reject);
        assert_eq!(config.report, ReportSettings::default());
    }

    #[test]
    fn test_missing_version() {
        let result = RecommenderConfig::from_yaml_str("pagerank:\n  damping: 0.9\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_unsupported_version() {
        let result = RecommenderConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_out_of_range_rejected_on_load() {
        let result = RecommenderConfig::from_yaml_str("version: 1\npagerank:\n  damping: 1.5\n");
        assert!(matches!(result, Err(ConfigError::Range { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = RecommenderConfig::from_yaml("/nonexistent/dinegraph.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}

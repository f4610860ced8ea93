//! Configuration validation
//!
//! Every config section implements [`Validatable`]; `RecommenderConfig`
//! validates all of them before a pipeline is built.

use super::error::{ConfigError, ConfigResult};
use crate::features::loader::LoaderSettings;
use crate::features::ranking::PageRankSettings;
use crate::features::report::ReportSettings;
use crate::features::similarity_graph::SimilaritySettings;

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// fn build_stage<C: Validatable>(config: C) -> Result<Stage, ConfigError> {
///     config.validate()?;
///     // ... build stage
/// }
/// ```
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Section name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

impl<T: Validatable> Validatable for Option<T> {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            Some(config) => config.validate(),
            None => Ok(()),
        }
    }
}

impl Validatable for SimilaritySettings {
    // Every cuisine mode and threshold is legal
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "similarity"
    }
}

impl Validatable for PageRankSettings {
    fn validate(&self) -> ConfigResult<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::range_with_hint(
                "pagerank.damping",
                self.damping,
                "0 (exclusive)",
                "1 (exclusive)",
                "Typical value is 0.85",
            ));
        }

        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(ConfigError::range_with_hint(
                "pagerank.tolerance",
                self.tolerance,
                "0 (exclusive)",
                "finite",
                "Typical value is 1e-6",
            ));
        }

        if self.max_iterations < 1 {
            return Err(ConfigError::range_with_hint(
                "pagerank.max_iterations",
                self.max_iterations,
                1,
                usize::MAX,
                "At least one iteration is required",
            ));
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "pagerank"
    }
}

impl Validatable for LoaderSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_field_bytes < 1 {
            return Err(ConfigError::range_with_hint(
                "loader.max_field_bytes",
                self.max_field_bytes,
                1,
                usize::MAX,
                "Fields larger than this are skipped",
            ));
        }

        let columns = &self.columns;
        let mapped = [
            ("loader.columns.name", columns.name.as_str()),
            ("loader.columns.cuisines", columns.cuisines.as_str()),
            ("loader.columns.cost", columns.cost.as_str()),
            ("loader.columns.rating", columns.rating.as_str()),
        ];
        if let Some((field, _)) = mapped.iter().find(|(_, header)| header.trim().is_empty()) {
            return Err(ConfigError::Validation(format!("{} must name a header", field)));
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "loader"
    }
}

impl Validatable for ReportSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.top_k < 1 {
            return Err(ConfigError::range_with_hint(
                "report.top_k",
                self.top_k,
                1,
                usize::MAX,
                "Report at least one restaurant",
            ));
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "report"
    }
}

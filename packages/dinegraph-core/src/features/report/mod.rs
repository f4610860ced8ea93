//! Recommendation reporting
//!
//! ```text
//! RankResult ──► RecommendationReport ──► text table | JSON
//! SimilarityGraph (+ RankResult) ──► GraphExport ──► JSON
//! ```

pub mod export;
pub mod models;

pub use export::{ExportNode, GraphExport};
pub use models::{RecommendationReport, ReportEntry, ReportFormat, ReportSettings};

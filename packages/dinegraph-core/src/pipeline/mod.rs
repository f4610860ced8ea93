//! Pipeline orchestration
//!
//! ```text
//! CSV ─► load ─► filter ─► dedupe ─► build graph ─► PageRank ─► report
//! ```

pub mod dedupe;
pub mod recommendation;
pub mod result;

pub use dedupe::{dedupe_rows, DuplicatePolicy};
pub use recommendation::RecommendationPipeline;
pub use result::{PipelineStats, RecommendationOutput};

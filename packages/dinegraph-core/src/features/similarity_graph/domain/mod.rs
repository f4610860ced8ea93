//! Domain Models for the similarity graph
//!
//! Pure business logic, no infrastructure dependencies.

pub mod graph;
pub mod record;
pub mod scoring;

pub use graph::{SimilarityEdge, SimilarityGraph};
pub use record::{parse_cuisine_tags, EntityRecord};
pub use scoring::{
    cost_score, rating_score, CuisineMatch, SimilarityBreakdown, SimilarityScorer,
    COST_WEIGHT, CUISINE_WEIGHT, RATING_SCALE, RATING_WEIGHT,
};

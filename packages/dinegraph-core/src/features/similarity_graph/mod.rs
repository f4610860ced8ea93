//! Similarity Graph - pairwise restaurant similarity
//!
//! Turns a filtered candidate list into a weighted undirected graph whose
//! edge weights encode cuisine, rating and cost closeness.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Similarity Graph Feature                │
//! ├─────────────────────────────────────────────────────────┤
//! │  Domain:                                                │
//! │    - EntityRecord (fixed-shape candidate)               │
//! │    - SimilarityScorer (0.5 / 0.3 / 0.2 weighted sum)    │
//! │    - SimilarityGraph (petgraph UnGraph + id index)      │
//! ├─────────────────────────────────────────────────────────┤
//! │  Infrastructure:                                        │
//! │    - SimilarityGraphBuilder (O(n²), rayon row scoring)  │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{
    parse_cuisine_tags, CuisineMatch, EntityRecord, SimilarityBreakdown, SimilarityEdge,
    SimilarityGraph, SimilarityScorer,
};
pub use infrastructure::{SimilarityGraphBuilder, SimilaritySettings};

//! Infrastructure Layer for the similarity graph

pub mod graph_builder;

pub use graph_builder::{SimilarityGraphBuilder, SimilaritySettings};

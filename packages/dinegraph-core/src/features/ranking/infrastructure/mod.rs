//! Infrastructure Layer for ranking

pub mod pagerank;

pub use pagerank::{PageRankEngine, PageRankSettings};

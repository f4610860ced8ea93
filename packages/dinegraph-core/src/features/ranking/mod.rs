//! Ranking - centrality scoring of similar restaurants
//!
//! Orders the nodes of a similarity graph by weighted PageRank.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Ranking Feature                     │
//! ├─────────────────────────────────────────────────────────┤
//! │  Domain:                                                │
//! │    - RankResult / RankedEntity (ordered, immutable)     │
//! │    - CentralityRanker (trait)                           │
//! ├─────────────────────────────────────────────────────────┤
//! │  Infrastructure:                                        │
//! │    - PageRankEngine (weighted power iteration)          │
//! ├─────────────────────────────────────────────────────────┤
//! │  Application:                                           │
//! │    - RankingUseCase (records → graph → ranking)         │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod application; // UseCase layer
pub mod domain;
pub mod infrastructure;

// Re-export application layer (primary interface)
pub use application::{RankingInput, RankingOutput, RankingStats, RankingUseCase, RankingUseCaseImpl};

// Re-export domain types
pub use domain::{CentralityRanker, RankResult, RankedEntity};

pub use infrastructure::{PageRankEngine, PageRankSettings};

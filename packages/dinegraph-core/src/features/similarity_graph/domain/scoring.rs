//! Similarity Scoring
//!
//! Pairwise similarity between two entity records:
//!
//! ```text
//! weight = 0.5 * cuisine + 0.3 * rating + 0.2 * cost
//!
//! cuisine = 1 if the tag sets match (see CuisineMatch), else 0
//! rating  = 1 - |r1 - r2| / 5
//! cost    = 0                               if max(c1, c2) == 0
//!           1 - |c1 - c2| / max(c1, c2)     otherwise
//! ```
//!
//! None of the components are clamped. `rating` goes negative when two
//! ratings are more than 5 apart; the weight is left as computed so that
//! out-of-range inputs still order the same way relative to each other.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::record::EntityRecord;

/// Coefficient of the cuisine component
pub const CUISINE_WEIGHT: f64 = 0.5;

/// Coefficient of the rating component
pub const RATING_WEIGHT: f64 = 0.3;

/// Coefficient of the cost component
pub const COST_WEIGHT: f64 = 0.2;

/// Width of the rating scale used to normalize rating differences
pub const RATING_SCALE: f64 = 5.0;

/// How two cuisine tag sets are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CuisineMatch {
    /// At least one shared tag (tolerates multi-cuisine listings)
    #[default]
    Overlap,

    /// Identical, non-empty tag sets
    Exact,
}

impl CuisineMatch {
    /// Binary cuisine score for two tag sets
    pub fn score(self, a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
        let matched = match self {
            CuisineMatch::Overlap => a.intersection(b).next().is_some(),
            CuisineMatch::Exact => !a.is_empty() && a == b,
        };

        if matched {
            1.0
        } else {
            0.0
        }
    }
}

impl std::str::FromStr for CuisineMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overlap" => Ok(CuisineMatch::Overlap),
            "exact" => Ok(CuisineMatch::Exact),
            other => Err(format!(
                "unknown cuisine match '{}' (expected overlap or exact)",
                other
            )),
        }
    }
}

/// Rating closeness: `1 - |r1 - r2| / 5`, unclamped
pub fn rating_score(r1: f64, r2: f64) -> f64 {
    1.0 - (r1 - r2).abs() / RATING_SCALE
}

/// Cost closeness relative to the larger cost
///
/// Two zero-cost entities score 0, not 1.
pub fn cost_score(c1: f64, c2: f64) -> f64 {
    let max_cost = c1.max(c2);
    if max_cost == 0.0 {
        return 0.0;
    }
    1.0 - (c1 - c2).abs() / max_cost
}

/// Per-component similarity scores for one pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityBreakdown {
    pub cuisine: f64,
    pub rating: f64,
    pub cost: f64,
}

impl SimilarityBreakdown {
    /// Weighted sum of the components
    pub fn weight(&self) -> f64 {
        CUISINE_WEIGHT * self.cuisine + RATING_WEIGHT * self.rating + COST_WEIGHT * self.cost
    }
}

/// Pairwise similarity scorer
///
/// Every method is symmetric in its two arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer {
    cuisine_match: CuisineMatch,
}

impl SimilarityScorer {
    pub fn new(cuisine_match: CuisineMatch) -> Self {
        Self { cuisine_match }
    }

    pub fn cuisine_match(&self) -> CuisineMatch {
        self.cuisine_match
    }

    /// Component scores for a pair
    pub fn breakdown(&self, a: &EntityRecord, b: &EntityRecord) -> SimilarityBreakdown {
        SimilarityBreakdown {
            cuisine: self.cuisine_match.score(&a.cuisine_tags, &b.cuisine_tags),
            rating: rating_score(a.rating, b.rating),
            cost: cost_score(a.cost, b.cost),
        }
    }

    /// Final similarity weight for a pair
    pub fn similarity(&self, a: &EntityRecord, b: &EntityRecord) -> f64 {
        self.breakdown(a, b).weight()
    }
}

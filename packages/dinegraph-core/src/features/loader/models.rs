//! Loader Models

use serde::{Deserialize, Serialize};

use crate::features::similarity_graph::EntityRecord;

/// One cleaned row of the restaurant table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRow {
    /// Restaurant name (becomes the entity identifier)
    pub name: String,

    /// Raw comma-separated cuisine field
    pub cuisines: String,

    /// Approximate cost for two, thousands separators removed
    pub cost: f64,

    /// Aggregate rating
    pub rating: f64,

    /// Number of votes behind the rating
    pub votes: u64,
}

impl RestaurantRow {
    pub fn new(
        name: impl Into<String>,
        cuisines: impl Into<String>,
        cost: f64,
        rating: f64,
        votes: u64,
    ) -> Self {
        Self {
            name: name.into(),
            cuisines: cuisines.into(),
            cost,
            rating,
            votes,
        }
    }

    /// Convert to the fixed-shape record the similarity graph consumes
    pub fn to_entity(&self) -> EntityRecord {
        EntityRecord::from_cuisine_field(self.name.clone(), &self.cuisines, self.rating, self.cost)
    }
}

/// Result of loading one table
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Rows that parsed cleanly, in file order
    pub rows: Vec<RestaurantRow>,

    /// Data rows that were skipped as malformed
    pub skipped: usize,
}

impl LoadOutcome {
    /// Data rows seen (kept + skipped)
    pub fn total(&self) -> usize {
        self.rows.len() + self.skipped
    }
}

//! Entity Record - the fixed-shape input to graph construction

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::errors::{DinegraphError, Result};

/// A candidate restaurant as seen by the similarity graph
///
/// # Invariants
///
/// 1. `identifier` is unique within one graph build (checked by the builder)
/// 2. `cuisine_tags` never contains empty or untrimmed strings
/// 3. `rating` and `cost` are finite; `cost >= 0` (checked by [`EntityRecord::validate`])
///
/// `rating` is expected in `[0, 5]` but is deliberately not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Unique key, used as the graph node label
    pub identifier: String,

    /// Cuisine tags (ordered for deterministic iteration)
    pub cuisine_tags: BTreeSet<String>,

    /// Aggregate rating
    pub rating: f64,

    /// Approximate cost; unit is opaque
    pub cost: f64,
}

impl EntityRecord {
    /// Create a record from already-split tags
    ///
    /// Tags are trimmed and empty tags are dropped.
    pub fn new<I, S>(identifier: impl Into<String>, cuisine_tags: I, rating: f64, cost: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            identifier: identifier.into(),
            cuisine_tags: cuisine_tags
                .into_iter()
                .filter_map(|tag| normalize_tag(tag.as_ref()))
                .collect(),
            rating,
            cost,
        }
    }

    /// Create a record from a comma-separated cuisine field (e.g. `"North Indian, Chinese"`)
    pub fn from_cuisine_field(
        identifier: impl Into<String>,
        cuisines: &str,
        rating: f64,
        cost: f64,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            cuisine_tags: parse_cuisine_tags(cuisines),
            rating,
            cost,
        }
    }

    /// Reject attributes that would corrupt similarity scores
    pub fn validate(&self) -> Result<()> {
        if !self.rating.is_finite() {
            return Err(DinegraphError::invalid_attribute(
                &self.identifier,
                "rating",
                self.rating,
            ));
        }

        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(DinegraphError::invalid_attribute(
                &self.identifier,
                "cost",
                self.cost,
            ));
        }

        Ok(())
    }

    /// Check whether the record lists the given cuisine tag
    pub fn has_cuisine(&self, tag: &str) -> bool {
        self.cuisine_tags.contains(tag)
    }
}

/// Split a comma-separated cuisine field into trimmed, non-empty tags
pub fn parse_cuisine_tags(field: &str) -> BTreeSet<String> {
    field.split(',').filter_map(normalize_tag).collect()
}

fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim();
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    }
}

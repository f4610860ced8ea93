//! Preference Filter

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::features::loader::RestaurantRow;

/// What the diner is looking for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Case-insensitive substring of the raw cuisines field
    pub cuisine: Option<String>,

    /// Inclusive lower bound on rating
    pub min_rating: Option<f64>,

    /// Inclusive upper bound on cost for two
    pub max_cost: Option<f64>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn max_cost(mut self, cost: f64) -> Self {
        self.max_cost = Some(cost);
        self
    }

    /// True when no criterion is set
    pub fn is_unconstrained(&self) -> bool {
        self.cuisine.is_none() && self.min_rating.is_none() && self.max_cost.is_none()
    }

    /// Whether a single row satisfies every set criterion
    pub fn matches(&self, row: &RestaurantRow) -> bool {
        let cuisine_ok = match &self.cuisine {
            Some(wanted) => row
                .cuisines
                .to_lowercase()
                .contains(&wanted.trim().to_lowercase()),
            None => true,
        };

        cuisine_ok
            && self.min_rating.map_or(true, |min| row.rating >= min)
            && self.max_cost.map_or(true, |max| row.cost <= max)
    }
}

/// Keep the rows matching `prefs`, preserving order
pub fn filter(rows: &[RestaurantRow], prefs: &Preferences) -> Vec<RestaurantRow> {
    let kept: Vec<RestaurantRow> = rows.iter().filter(|row| prefs.matches(row)).cloned().collect();

    debug!(
        "filter: {} of {} rows match {:?}",
        kept.len(),
        rows.len(),
        prefs
    );

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RestaurantRow> {
        vec![
            RestaurantRow::new("Jalsa", "North Indian, Mughlai, Chinese", 800.0, 4.1, 775),
            RestaurantRow::new("Cafe Mocha", "Cafe, Continental", 500.0, 3.8, 40),
            RestaurantRow::new("Dragon Bowl", "Chinese, Thai", 1200.0, 4.4, 310),
            RestaurantRow::new("Chai Point", "Cafe", 200.0, 3.2, 95),
        ]
    }

    fn names(rows: &[RestaurantRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_unconstrained_keeps_everything() {
        let prefs = Preferences::new();
        assert!(prefs.is_unconstrained());
        assert_eq!(filter(&rows(), &prefs).len(), 4);
    }

    #[test]
    fn test_cuisine_is_case_insensitive_substring() {
        let kept = filter(&rows(), &Preferences::new().cuisine("CHINESE"));
        assert_eq!(names(&kept), vec!["Jalsa", "Dragon Bowl"]);

        let kept = filter(&rows(), &Preferences::new().cuisine("conti"));
        assert_eq!(names(&kept), vec!["Cafe Mocha"]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let prefs = Preferences::new().min_rating(3.8).max_cost(800.0);
        let kept = filter(&rows(), &prefs);
        assert_eq!(names(&kept), vec!["Jalsa", "Cafe Mocha"]);
    }

    #[test]
    fn test_combined_criteria() {
        let prefs = Preferences::new().cuisine("cafe").min_rating(3.5);
        let kept = filter(&rows(), &prefs);
        assert_eq!(names(&kept), vec!["Cafe Mocha"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let kept = filter(&rows(), &Preferences::new().cuisine("Ethiopian"));
        assert!(kept.is_empty());
    }
}

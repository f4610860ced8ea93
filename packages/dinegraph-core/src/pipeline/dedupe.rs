//! Duplicate name handling
//!
//! Restaurant exports list chains once per branch, so the same name shows up
//! many times. The graph requires unique identifiers; this stage decides
//! what happens before it is built.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::features::loader::RestaurantRow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first row per name, drop the rest
    #[default]
    KeepFirst,

    /// Pass rows through; the graph build fails on the first repeat
    Reject,
}

/// Apply `policy`, returning the surviving rows and how many were dropped
pub fn dedupe_rows(rows: Vec<RestaurantRow>, policy: DuplicatePolicy) -> (Vec<RestaurantRow>, usize) {
    match policy {
        DuplicatePolicy::Reject => (rows, 0),
        DuplicatePolicy::KeepFirst => {
            let before = rows.len();
            let mut seen = HashSet::with_capacity(before);
            let kept: Vec<RestaurantRow> = rows
                .into_iter()
                .filter(|row| {
                    let first = seen.insert(row.name.clone());
                    if !first {
                        debug!("dedupe: dropping repeated '{}'", row.name);
                    }
                    first
                })
                .collect();

            let dropped = before - kept.len();
            (kept, dropped)
        }
    }
}

//! Record builders

use dinegraph_core::{EntityRecord, RestaurantRow};

/// Build an entity from a comma-separated cuisine field
pub fn record(id: &str, cuisines: &str, rating: f64, cost: f64) -> EntityRecord {
    EntityRecord::from_cuisine_field(id, cuisines, rating, cost)
}

/// The three-restaurant scenario: A and B identical, C unlike both
pub fn reference_records() -> Vec<EntityRecord> {
    vec![
        record("A", "Indian", 4.0, 500.0),
        record("B", "Indian", 4.0, 500.0),
        record("C", "Chinese", 2.0, 1000.0),
    ]
}

/// `n` records cycling through a few cuisines, ratings and costs
pub fn synthetic_records(n: usize) -> Vec<EntityRecord> {
    const CUISINES: [&str; 6] = [
        "North Indian, Chinese",
        "Cafe, Italian",
        "South Indian",
        "Chinese, Thai",
        "Pizza, Cafe",
        "Biryani, North Indian",
    ];

    (0..n)
        .map(|i| {
            record(
                &format!("restaurant-{:05}", i),
                CUISINES[i % CUISINES.len()],
                2.5 + (i % 26) as f64 / 10.0,
                200.0 + ((i * 37) % 20) as f64 * 100.0,
            )
        })
        .collect()
}

pub fn row(name: &str, cuisines: &str, cost: f64, rating: f64) -> RestaurantRow {
    RestaurantRow::new(name, cuisines, cost, rating, 0)
}

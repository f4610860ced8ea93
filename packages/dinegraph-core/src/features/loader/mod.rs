//! Restaurant table loading
//!
//! Turns a headered CSV export into cleaned [`RestaurantRow`]s. Rows that
//! fail to parse are counted and dropped; the graph never sees them.

pub mod csv_loader;
pub mod models;

pub use csv_loader::{ColumnMapping, CsvRestaurantLoader, LoaderSettings};
pub use models::{LoadOutcome, RestaurantRow};

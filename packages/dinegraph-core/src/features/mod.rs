//! Feature modules
//!
//! Each feature keeps the layout it needs:
//! - domain/         - Pure types and scoring
//! - infrastructure/ - Algorithms and external formats
//! - application/    - Use cases

pub mod similarity_graph;
pub mod ranking;

// Collaborators around the core: CSV in, preferences, reports out
pub mod loader;
pub mod preference;
pub mod report;

//! Preference filtering
//!
//! Narrows loaded rows to the candidates a diner asked for before the
//! similarity graph is built. Unset criteria always pass.

pub mod filter;

pub use filter::{filter, Preferences};

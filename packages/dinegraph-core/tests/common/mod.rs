//! Common test utilities for dinegraph-core
//!
//! Shared fixtures, assertions, and builders for integration tests.

#![allow(dead_code)]

mod assertions;
mod builders;
mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

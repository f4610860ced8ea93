//! Shared module - helpers used by more than one feature

pub mod parallel;

pub use parallel::{init_thread_pool, should_parallelize, ParallelConfig};

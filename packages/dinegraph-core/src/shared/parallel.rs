//! Parallel Processing Helpers
//!
//! Rayon thread pool setup and the size gate that decides whether a stage
//! fans out across workers or stays on the calling thread.
//!
//! Both stages that use rayon (pair scoring and the per-node rank update)
//! produce identical results on either path, so the gate is purely a
//! throughput decision.

use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{ConfigError, ConfigResult, Validatable};

/// Thread pool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallelConfig {
    /// Number of workers (0=auto, 1..=256)
    pub num_workers: usize,

    /// Thread stack size in MB (1..=64)
    pub stack_size_mb: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: 0,
            stack_size_mb: 8,
        }
    }
}

impl Validatable for ParallelConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.num_workers > 256 {
            return Err(ConfigError::range_with_hint(
                "parallel.num_workers",
                self.num_workers,
                0,
                256,
                "Number of workers must be reasonable (0=auto)",
            ));
        }

        if self.stack_size_mb < 1 || self.stack_size_mb > 64 {
            return Err(ConfigError::range_with_hint(
                "parallel.stack_size_mb",
                self.stack_size_mb,
                1,
                64,
                "Stack size is given in megabytes",
            ));
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "parallel"
    }
}

impl ParallelConfig {
    /// Resolve the worker count (0 = 75% of available cores, at least one)
    pub fn effective_workers(&self) -> usize {
        if self.num_workers > 0 {
            self.num_workers
        } else {
            std::cmp::max(1, (num_cpus::get() * 3) / 4)
        }
    }
}

/// Configure the global Rayon thread pool
///
/// Rayon's global pool can only be built once per process; later calls keep
/// the existing pool and return `false`.
pub fn init_thread_pool(config: &ParallelConfig) -> bool {
    let threads = config.effective_workers();

    match ThreadPoolBuilder::new()
        .num_threads(threads)
        .stack_size(config.stack_size_mb * 1024 * 1024)
        .thread_name(|i| format!("dinegraph-worker-{}", i))
        .build_global()
    {
        Ok(()) => {
            info!(threads, "rayon pool configured");
            true
        }
        Err(e) => {
            warn!("rayon pool already configured: {}", e);
            false
        }
    }
}

/// Whether a workload of `size` items should run on the rayon pool
///
/// A threshold of 0 keeps the stage sequential. Without the `parallel`
/// feature everything stays sequential.
pub fn should_parallelize(threshold: usize, size: usize) -> bool {
    cfg!(feature = "parallel") && threshold > 0 && size >= threshold
}

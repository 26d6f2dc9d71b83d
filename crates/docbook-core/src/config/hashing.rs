//! Credential hashing configuration.

use serde::{Deserialize, Serialize};

/// Argon2id parameters used by the credential provisioner.
///
/// `default_cost` is the work factor (Argon2 time cost) applied when a
/// caller does not pass one explicitly. Memory cost and parallelism are
/// fixed per deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Default work factor (iterations).
    #[serde(default = "default_cost")]
    pub default_cost: u32,
    /// Memory cost in KiB.
    #[serde(default = "default_memory_cost")]
    pub memory_cost_kib: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            default_cost: default_cost(),
            memory_cost_kib: default_memory_cost(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_cost() -> u32 {
    10
}

fn default_memory_cost() -> u32 {
    19 * 1024
}

fn default_parallelism() -> u32 {
    1
}

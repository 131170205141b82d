//! Configuration for the cache simulator.
//!
//! This module defines the structures that parameterize a simulation run.
//! It provides:
//! 1. **Defaults:** Baseline constants matching the reference behavior
//!    (64 MiB address space, 64 KiB cache, one million accesses).
//! 2. **Structures:** [`SimConfig`] for the run-level knobs and
//!    [`CacheGeometry`] for the per-simulator line size and associativity.
//!
//! Configuration is built in code (`SimConfig::default()`) or deserialized
//! from JSON; there is no configuration file surface.

use serde::Deserialize;

use crate::error::GeometryError;

/// Default configuration constants for the simulator.
///
/// These values define the reference workload when not explicitly
/// overridden in code.
pub(crate) mod defaults {
    /// Total simulated physical address space (64 MiB).
    ///
    /// Streams that span the full range wrap at this boundary. The engine
    /// itself never assumes addresses stay below it; decomposition is done
    /// per access regardless of the address's origin.
    pub const ADDRESS_SPACE: u32 = 64 * 1024 * 1024;

    /// Total cache capacity in bytes (64 KiB).
    pub const CACHE_CAPACITY: u32 = 64 * 1024;

    /// Number of accesses drawn per experiment.
    pub const ITERATIONS: u64 = 1_000_000;

    /// Working-set size of the localized-random stream (24 KiB).
    pub const LOCALIZED_RANGE: u32 = 24 * 1024;

    /// Buffer size of the small sequential stream (4 KiB).
    pub const SMALL_BUFFER: u32 = 4 * 1024;

    /// Buffer size of the medium sequential stream (64 KiB).
    pub const MEDIUM_BUFFER: u32 = 64 * 1024;

    /// Step of the strided stream in bytes.
    pub const STRIDE_STEP: u32 = 32;

    /// Wrap window of the strided stream (256 KiB).
    pub const STRIDE_WRAP: u32 = 256 * 1024;
}

/// Run-level simulation settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use cachesim_core::config::SimConfig;
///
/// let config = SimConfig::default();
/// assert_eq!(config.address_space, 64 * 1024 * 1024);
/// assert_eq!(config.cache_capacity, 64 * 1024);
/// assert_eq!(config.iterations, 1_000_000);
/// ```
///
/// Deserializing from JSON, with omitted fields falling back to defaults
/// (typical for scaled-down test runs):
///
/// ```
/// use cachesim_core::config::SimConfig;
///
/// let json = r#"{ "cache_capacity": 4096, "iterations": 10000 }"#;
/// let config: SimConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.cache_capacity, 4096);
/// assert_eq!(config.iterations, 10_000);
/// assert_eq!(config.address_space, 64 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    /// Total simulated address space in bytes.
    #[serde(default = "SimConfig::default_address_space")]
    pub address_space: u32,

    /// Total cache capacity in bytes.
    #[serde(default = "SimConfig::default_cache_capacity")]
    pub cache_capacity: u32,

    /// Number of stream draws per experiment.
    #[serde(default = "SimConfig::default_iterations")]
    pub iterations: u64,
}

impl SimConfig {
    /// Returns the default simulated address space in bytes.
    fn default_address_space() -> u32 {
        defaults::ADDRESS_SPACE
    }

    /// Returns the default cache capacity in bytes.
    fn default_cache_capacity() -> u32 {
        defaults::CACHE_CAPACITY
    }

    /// Returns the default per-experiment access count.
    fn default_iterations() -> u64 {
        defaults::ITERATIONS
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            address_space: defaults::ADDRESS_SPACE,
            cache_capacity: defaults::CACHE_CAPACITY,
            iterations: defaults::ITERATIONS,
        }
    }
}

/// Geometry of one simulated cache: line size and associativity.
///
/// The set count is derived, never stored: `capacity / (line_bytes * ways)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheGeometry {
    /// Line size in bytes (address units covered by one way).
    pub line_bytes: u32,
    /// Associativity (number of ways per set).
    pub ways: u32,
}

impl CacheGeometry {
    /// Derives the set count for a cache of `capacity` bytes.
    ///
    /// Fails when either dimension is zero or when the capacity is not an
    /// exact multiple of `line_bytes * ways`; truncating the division would
    /// silently misrepresent the intended geometry.
    pub fn sets_for(&self, capacity: u32) -> Result<u32, GeometryError> {
        if self.line_bytes == 0 {
            return Err(GeometryError::ZeroLineSize);
        }
        if self.ways == 0 {
            return Err(GeometryError::ZeroWays);
        }
        if capacity == 0 {
            return Err(GeometryError::ZeroCapacity);
        }
        let span = u64::from(self.line_bytes) * u64::from(self.ways);
        if u64::from(capacity) % span != 0 {
            return Err(GeometryError::UnevenCapacity {
                capacity,
                line_bytes: self.line_bytes,
                ways: self.ways,
            });
        }
        Ok((u64::from(capacity) / span) as u32)
    }
}

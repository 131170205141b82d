//! Set-associative cache hit-ratio simulator library.
//!
//! This crate models a set-associative hardware cache under synthetic
//! memory-access traces and provides the following:
//! 1. **Engine:** Address decomposition, way-order hit scan, and two-phase
//!    replacement (fill invalid ways first, then rotate through victims).
//! 2. **Streams:** Six synthetic address generators (sequential, strided,
//!    uniform-random, localized-random) behind one capability trait.
//! 3. **Harness:** An experiment runner that aggregates hit ratios over
//!    configurable iteration counts, a golden-trace harness that checks
//!    exact hit/miss sequences, and the reference batch sweeps.
//! 4. **Reporting:** Line-oriented report sinks and hit/miss statistics.

/// Cache engine (decomposition, hit scan, rotation replacement).
pub mod cache;
/// Simulation configuration (defaults, geometry, serde structures).
pub mod config;
/// Error types for invalid geometry and generator seeds.
pub mod error;
/// Report sinks (stdout, capture buffers).
pub mod report;
/// Multiply-with-carry pseudo-random generator.
pub mod rng;
/// Harness layer (experiments, golden traces, batch sweeps).
pub mod sim;
/// Hit/miss statistics aggregation.
pub mod stats;
/// Synthetic address streams and their factory.
pub mod stream;

/// Access outcome and the cache engine; construct with [`CacheSim::new`].
pub use crate::cache::{AccessKind, CacheSim};
/// Geometry and run configuration; use `SimConfig::default()` or deserialize from JSON.
pub use crate::config::{CacheGeometry, SimConfig};
/// Construction-time geometry violations.
pub use crate::error::GeometryError;

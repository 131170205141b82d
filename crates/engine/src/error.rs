//! Error types for construction-time contract violations.
//!
//! The engine has exactly two failure surfaces, both caught before any
//! access runs: an invalid cache geometry and an invalid generator seed.
//! Count mismatches in golden traces are verdicts, not errors.

use thiserror::Error;

/// Invalid cache geometry, rejected at simulator construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The line size is zero; block decomposition would divide by zero.
    #[error("line size must be non-zero")]
    ZeroLineSize,

    /// The associativity is zero; the rotation cursor has no range.
    #[error("associativity (ways) must be non-zero")]
    ZeroWays,

    /// The cache capacity is zero; no sets can be derived.
    #[error("cache capacity must be non-zero")]
    ZeroCapacity,

    /// The capacity is not an exact multiple of `line_bytes * ways`.
    #[error(
        "cache capacity {capacity} is not divisible by line size {line_bytes} x ways {ways}"
    )]
    UnevenCapacity {
        /// Configured total cache capacity in bytes.
        capacity: u32,
        /// Configured line size in bytes.
        line_bytes: u32,
        /// Configured associativity.
        ways: u32,
    },
}

/// Invalid multiply-with-carry seed, rejected at generator construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeedError {
    /// A seed word of zero collapses the generator to a constant stream.
    #[error("seed word must not be zero")]
    Zero,

    /// One of the two degenerate seed words the generator cannot escape.
    #[error("seed word {0:#010x} is degenerate for this generator")]
    Degenerate(u32),
}

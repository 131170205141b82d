//! Harness layer: drives the engine over streams and literal traces.

/// Hit-ratio experiments over synthetic streams.
pub mod experiment;
/// Golden-trace correctness harness.
pub mod golden;
/// Batch sweeps reproducing the reference experiment sets.
pub mod suite;

pub use experiment::ExperimentRunner;
pub use golden::{TraceReport, TraceSpec, TraceStep};

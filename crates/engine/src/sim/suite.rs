//! Batch sweeps over stream kinds and geometries.
//!
//! Reproduces the two reference experiment batches: one varying the line
//! size at a fixed set count, one varying the associativity at a fixed line
//! size, each across all six stream kinds. A configuration with an invalid
//! geometry is reported and skipped; its siblings still run.

use super::ExperimentRunner;
use crate::config::{CacheGeometry, SimConfig};
use crate::report::ReportSink;
use crate::stream::StreamKind;

/// Line sizes exercised by the line-size sweep.
pub const SWEEP_LINE_SIZES: [u32; 4] = [16, 32, 64, 128];

/// Way counts exercised by the associativity sweep.
pub const SWEEP_WAYS: [u32; 5] = [1, 2, 4, 8, 16];

/// Set count held fixed by the line-size sweep.
const FIXED_SETS: u32 = 4;

/// Line size held fixed by the associativity sweep.
const FIXED_LINE_BYTES: u32 = 64;

/// Separator emitted between stream kinds.
const SEPARATOR: &str = "--------------------------";

/// Varies the line size while holding the set count at four; the way count
/// is derived as `capacity / (line_bytes * 4)`.
pub fn line_size_sweep(config: &SimConfig, sink: &mut dyn ReportSink) {
    let runner = ExperimentRunner::new(config.clone());
    sink.emit("===== Experiment 1: Varying Line Size (Fixed Sets = 4) =====");
    for kind in StreamKind::ALL {
        for line_bytes in SWEEP_LINE_SIZES {
            let ways = config.cache_capacity / (line_bytes * FIXED_SETS);
            run_one(&runner, kind, CacheGeometry { line_bytes, ways }, sink);
        }
        sink.emit(SEPARATOR);
    }
}

/// Varies the associativity while holding the line size at 64 bytes.
pub fn ways_sweep(config: &SimConfig, sink: &mut dyn ReportSink) {
    let runner = ExperimentRunner::new(config.clone());
    sink.emit("===== Experiment 2: Varying Ways (Line Size = 64) =====");
    for kind in StreamKind::ALL {
        for ways in SWEEP_WAYS {
            let geometry = CacheGeometry {
                line_bytes: FIXED_LINE_BYTES,
                ways,
            };
            run_one(&runner, kind, geometry, sink);
        }
        sink.emit(SEPARATOR);
    }
}

/// Runs one configuration; a geometry error becomes a report line so the
/// batch keeps going.
fn run_one(
    runner: &ExperimentRunner,
    kind: StreamKind,
    geometry: CacheGeometry,
    sink: &mut dyn ReportSink,
) {
    if let Err(err) = runner.run(&kind.to_string(), kind, geometry, sink) {
        sink.emit(&format!(
            "{kind} | Line Size: {} | Ways: {} | skipped: {err}",
            geometry.line_bytes, geometry.ways
        ));
    }
}

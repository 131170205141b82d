//! Hit-ratio experiments over synthetic streams.

use tracing::debug;

use crate::cache::CacheSim;
use crate::config::{CacheGeometry, SimConfig};
use crate::error::GeometryError;
use crate::report::ReportSink;
use crate::stats::AccessStats;
use crate::stream::StreamKind;

/// Drives one fresh [`CacheSim`] per (stream, geometry) pair and reports
/// the aggregate hit ratio.
#[derive(Debug, Clone)]
pub struct ExperimentRunner {
    config: SimConfig,
}

impl ExperimentRunner {
    /// Creates a runner with the given run-level configuration.
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Runs `config.iterations` draws of a fresh `kind` stream against a
    /// fresh simulator, emits one report line, and returns the hit ratio in
    /// percent.
    ///
    /// An invalid geometry propagates as an error for this configuration
    /// only; the caller decides whether sibling configurations continue.
    pub fn run(
        &self,
        label: &str,
        kind: StreamKind,
        geometry: CacheGeometry,
        sink: &mut dyn ReportSink,
    ) -> Result<f64, GeometryError> {
        let mut sim = CacheSim::new(geometry, self.config.cache_capacity)?;
        let mut stream = kind.build(&self.config);
        debug!(
            %kind,
            line_bytes = geometry.line_bytes,
            ways = geometry.ways,
            sets = sim.num_sets(),
            iterations = self.config.iterations,
            "experiment start"
        );

        let mut stats = AccessStats::default();
        for _ in 0..self.config.iterations {
            stats.record(sim.access(stream.next_addr()));
        }

        let ratio = stats.hit_ratio_percent();
        sink.emit(&format!(
            "{label} | Line Size: {} | Ways: {} | Hit Ratio: {ratio:.2}%",
            geometry.line_bytes, geometry.ways
        ));
        Ok(ratio)
    }
}

//! Golden-Trace Correctness Harness.
//!
//! Replays a literal, hand-constructed address sequence against a fresh
//! simulator and checks the exact hit/miss counts. The per-access outcome
//! sequence is part of the report so a test can assert on step-level
//! behavior ("access #5 is a Hit in set 2"), not just aggregates. A count
//! mismatch is a FAIL verdict, never a panic.

use tracing::debug;

use crate::cache::{AccessKind, CacheSim};
use crate::config::CacheGeometry;
use crate::error::GeometryError;
use crate::report::ReportSink;
use crate::stats::AccessStats;

/// A literal trace with its expected aggregate outcome.
#[derive(Debug, Clone)]
pub struct TraceSpec {
    /// Name used in the summary line.
    pub label: String,
    /// The addresses to replay, in order.
    pub addresses: Vec<u32>,
    /// Geometry of the simulator under test.
    pub geometry: CacheGeometry,
    /// Expected number of hits over the whole trace.
    pub expected_hits: u64,
    /// Expected number of misses over the whole trace.
    pub expected_misses: u64,
}

/// One replayed access: address, outcome, and the set it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceStep {
    /// The address accessed.
    pub addr: u32,
    /// Hit or miss.
    pub outcome: AccessKind,
    /// Set index the address decomposed to.
    pub set_index: u32,
}

/// Result of replaying one trace.
#[derive(Debug, Clone)]
pub struct TraceReport {
    /// Per-access outcomes, in trace order.
    pub steps: Vec<TraceStep>,
    /// Aggregate hit/miss counts.
    pub stats: AccessStats,
    /// Whether the counts matched the expectation.
    pub passed: bool,
}

impl TraceSpec {
    /// Replays the trace against a fresh simulator of `capacity` bytes.
    ///
    /// Emits one line per access plus a summary line with actual vs
    /// expected counts and the PASS/FAIL verdict. Only an invalid geometry
    /// is an error.
    pub fn verify(
        &self,
        capacity: u32,
        sink: &mut dyn ReportSink,
    ) -> Result<TraceReport, GeometryError> {
        let mut sim = CacheSim::new(self.geometry, capacity)?;
        let mut stats = AccessStats::default();
        let mut steps = Vec::with_capacity(self.addresses.len());

        for &addr in &self.addresses {
            let (set_index, _) = sim.decompose(addr);
            let outcome = sim.access(addr);
            stats.record(outcome);
            sink.emit(&format!("  {addr:#010x} -> {outcome} (set {set_index})"));
            steps.push(TraceStep {
                addr,
                outcome,
                set_index,
            });
        }

        let passed = stats.hits == self.expected_hits && stats.misses == self.expected_misses;
        let verdict = if passed { "PASS" } else { "FAIL" };
        sink.emit(&format!(
            "{}: hits {}/{} | misses {}/{} -> {verdict}",
            self.label, stats.hits, self.expected_hits, stats.misses, self.expected_misses
        ));
        if !passed {
            debug!(label = %self.label, ?stats, "golden trace mismatch");
        }

        Ok(TraceReport {
            steps,
            stats,
            passed,
        })
    }
}

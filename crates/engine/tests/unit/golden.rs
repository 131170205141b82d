//! Golden-Trace Harness Unit Tests.
//!
//! Exercises the two reference traces step by step and the FAIL path for a
//! deliberately wrong expectation.

use pretty_assertions::assert_eq;

use cachesim_core::cache::AccessKind;
use cachesim_core::config::CacheGeometry;
use cachesim_core::sim::golden::TraceSpec;

const CAPACITY: u32 = 64 * 1024;

/// line=64, ways=4 over 64 KiB -> 256 sets; blocks 256 apart share set 0.
fn eviction_trace() -> TraceSpec {
    let set_stride = 256 * 64;
    TraceSpec {
        label: "set0-rotation-eviction".to_owned(),
        addresses: vec![0, set_stride, 2 * set_stride, 3 * set_stride, 4 * set_stride, 0],
        geometry: CacheGeometry { line_bytes: 64, ways: 4 },
        expected_hits: 0,
        expected_misses: 6,
    }
}

#[test]
fn eviction_trace_is_all_misses_in_set_zero() {
    let mut lines: Vec<String> = Vec::new();
    let report = eviction_trace().verify(CAPACITY, &mut lines).unwrap();

    assert!(report.passed);
    assert_eq!(report.stats.hits, 0);
    assert_eq!(report.stats.misses, 6);
    assert_eq!(report.steps.len(), 6);
    for step in &report.steps {
        assert_eq!(step.outcome, AccessKind::Miss);
        assert_eq!(step.set_index, 0);
    }
}

#[test]
fn single_block_trace_hits_after_first_access() {
    let spec = TraceSpec {
        label: "single-block-residency".to_owned(),
        addresses: (0..16).collect(),
        geometry: CacheGeometry { line_bytes: 16, ways: 4 },
        expected_hits: 15,
        expected_misses: 1,
    };
    let mut lines: Vec<String> = Vec::new();
    let report = spec.verify(CAPACITY, &mut lines).unwrap();

    assert!(report.passed);
    assert_eq!(report.steps[0].outcome, AccessKind::Miss);
    assert!(report.steps[1..].iter().all(|s| s.outcome == AccessKind::Hit));
}

#[test]
fn emits_one_line_per_access_plus_summary() {
    let spec = eviction_trace();
    let mut lines: Vec<String> = Vec::new();
    let _ = spec.verify(CAPACITY, &mut lines).unwrap();

    assert_eq!(lines.len(), spec.addresses.len() + 1);
    assert!(lines[0].contains("Miss"));
    assert!(lines[0].contains("(set 0)"));
    assert_eq!(
        lines.last().unwrap(),
        "set0-rotation-eviction: hits 0/0 | misses 6/6 -> PASS"
    );
}

#[test]
fn count_mismatch_is_a_fail_verdict_not_an_error() {
    let mut spec = eviction_trace();
    spec.expected_hits = 2;
    spec.expected_misses = 4;

    let mut lines: Vec<String> = Vec::new();
    let report = spec.verify(CAPACITY, &mut lines).unwrap();

    assert!(!report.passed);
    assert!(lines.last().unwrap().ends_with("FAIL"));
}

#[test]
fn invalid_geometry_propagates_as_error() {
    let mut spec = eviction_trace();
    spec.geometry = CacheGeometry { line_bytes: 48, ways: 4 };
    let mut lines: Vec<String> = Vec::new();
    assert!(spec.verify(CAPACITY, &mut lines).is_err());
}

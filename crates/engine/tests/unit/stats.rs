//! Statistics Unit Tests.

use pretty_assertions::assert_eq;

use cachesim_core::cache::AccessKind;
use cachesim_core::stats::AccessStats;

#[test]
fn records_hits_and_misses_separately() {
    let mut stats = AccessStats::default();
    stats.record(AccessKind::Miss);
    stats.record(AccessKind::Hit);
    stats.record(AccessKind::Hit);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.total(), 3);
}

#[test]
fn hit_ratio_is_percent_of_total() {
    let stats = AccessStats { hits: 25, misses: 75 };
    assert!((stats.hit_ratio_percent() - 25.0).abs() < f64::EPSILON);
}

#[test]
fn empty_run_has_zero_ratio() {
    assert_eq!(AccessStats::default().hit_ratio_percent(), 0.0);
}

//! Cache Engine Unit Tests.
//!
//! Verifies address decomposition, the way-order hit scan, and the
//! two-phase replacement policy (fill invalid ways first, then round-robin
//! eviction). Geometries are kept small so set and tag arithmetic can be
//! checked by hand.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use cachesim_core::cache::{AccessKind, CacheSim};
use cachesim_core::config::CacheGeometry;
use cachesim_core::error::GeometryError;

/// Shorthand for a geometry literal.
fn geom(line_bytes: u32, ways: u32) -> CacheGeometry {
    CacheGeometry { line_bytes, ways }
}

// ──────────────────────────────────────────────────────────
// Construction and set derivation
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(64, 4, 65_536, 256)]
#[case(16, 4, 65_536, 1_024)]
#[case(64, 1, 64, 1)]
#[case(32, 2, 256, 4)]
fn set_count_derivation(
    #[case] line_bytes: u32,
    #[case] ways: u32,
    #[case] capacity: u32,
    #[case] sets: u32,
) {
    let sim = CacheSim::new(geom(line_bytes, ways), capacity).unwrap();
    assert_eq!(sim.num_sets(), sets);
}

#[rstest]
#[case(geom(0, 4), 65_536, GeometryError::ZeroLineSize)]
#[case(geom(64, 0), 65_536, GeometryError::ZeroWays)]
#[case(geom(64, 4), 0, GeometryError::ZeroCapacity)]
#[case(geom(48, 4), 65_536, GeometryError::UnevenCapacity { capacity: 65_536, line_bytes: 48, ways: 4 })]
#[case(geom(64, 2), 64, GeometryError::UnevenCapacity { capacity: 64, line_bytes: 64, ways: 2 })]
fn invalid_geometry_fails_at_construction(
    #[case] geometry: CacheGeometry,
    #[case] capacity: u32,
    #[case] expected: GeometryError,
) {
    assert_eq!(CacheSim::new(geometry, capacity).unwrap_err(), expected);
}

// ──────────────────────────────────────────────────────────
// Hit scan
// ──────────────────────────────────────────────────────────

#[test]
fn miss_then_hit_on_repeat() {
    let mut sim = CacheSim::new(geom(64, 2), 256).unwrap();
    assert_eq!(sim.access(0x1000), AccessKind::Miss);
    assert_eq!(sim.access(0x1000), AccessKind::Hit);
    // Hits are idempotent.
    assert_eq!(sim.access(0x1000), AccessKind::Hit);
}

#[test]
fn same_line_different_offset_hits() {
    let mut sim = CacheSim::new(geom(64, 2), 256).unwrap();
    assert_eq!(sim.access(0x1000), AccessKind::Miss);
    assert_eq!(sim.access(0x1000 + 32), AccessKind::Hit);
    assert_eq!(sim.access(0x1000 + 63), AccessKind::Hit);
}

#[test]
fn single_block_trace_misses_once() {
    // 16-byte lines: addresses 0..16 all truncate to block 0.
    let mut sim = CacheSim::new(geom(16, 4), 65_536).unwrap();
    let outcomes: Vec<_> = (0..16).map(|addr| sim.access(addr)).collect();
    assert_eq!(outcomes[0], AccessKind::Miss);
    assert!(outcomes[1..].iter().all(|&o| o == AccessKind::Hit));
}

// ──────────────────────────────────────────────────────────
// Two-phase replacement
// ──────────────────────────────────────────────────────────

/// Cold fill: distinct tags in one set fill every way before anything is
/// evicted.
#[test]
fn cold_fill_covers_invalid_ways_first() {
    // capacity 256, line 64, ways 4 -> one set; tag == block.
    let mut sim = CacheSim::new(geom(64, 4), 256).unwrap();
    for addr in [0, 64, 128, 192] {
        assert_eq!(sim.access(addr), AccessKind::Miss);
    }
    // All four remain resident: no eviction happened during the fill.
    for addr in [0, 64, 128, 192] {
        assert_eq!(sim.access(addr), AccessKind::Hit);
    }
}

/// Filling invalid ways must not advance the rotation cursor: the first
/// eviction after a cold fill is way 0, not wherever the fills ended.
#[test]
fn first_eviction_after_cold_fill_is_way_zero() {
    // capacity 256, line 64, ways 2 -> 2 sets. Set 0 collides every 128 bytes.
    let mut sim = CacheSim::new(geom(64, 2), 256).unwrap();
    let (a, b, c) = (0u32, 128u32, 256u32);

    assert_eq!(sim.access(a), AccessKind::Miss); // fills way 0
    assert_eq!(sim.access(b), AccessKind::Miss); // fills way 1
    assert_eq!(sim.access(c), AccessKind::Miss); // evicts way 0 (a)

    assert_eq!(sim.access(b), AccessKind::Hit, "survivor stays resident");
    assert_eq!(sim.access(a), AccessKind::Miss, "evicted block is gone");
}

/// After the first eviction the cursor rotates: the next victim is way 1.
#[test]
fn rotation_advances_per_eviction() {
    let mut sim = CacheSim::new(geom(64, 2), 256).unwrap();
    let (a, b, c, d) = (0u32, 128u32, 256u32, 384u32);

    sim.access(a); // way 0
    sim.access(b); // way 1
    sim.access(c); // evicts way 0, cursor -> 1
    assert_eq!(sim.access(d), AccessKind::Miss); // evicts way 1 (b), cursor -> 0

    assert_eq!(sim.access(c), AccessKind::Hit);
    assert_eq!(sim.access(b), AccessKind::Miss);
}

/// Reference scenario: five distinct tags into a 4-way set evict the first
/// block, so a final re-access of address 0 misses too (0 hits, 6 misses).
#[test]
fn five_tags_into_four_ways_evict_the_first() {
    let mut sim = CacheSim::new(geom(64, 4), 65_536).unwrap();
    assert_eq!(sim.num_sets(), 256);
    let set_stride = 256 * 64;

    let trace = [0, set_stride, 2 * set_stride, 3 * set_stride, 4 * set_stride, 0];
    let outcomes: Vec<_> = trace.iter().map(|&addr| sim.access(addr)).collect();
    assert!(outcomes.iter().all(|&o| o == AccessKind::Miss));
}

// ──────────────────────────────────────────────────────────
// Decomposition properties
// ──────────────────────────────────────────────────────────

/// Geometries that evenly divide a 64 KiB capacity.
const GEOMETRIES: [CacheGeometry; 5] = [
    CacheGeometry { line_bytes: 16, ways: 4 },
    CacheGeometry { line_bytes: 64, ways: 4 },
    CacheGeometry { line_bytes: 32, ways: 2 },
    CacheGeometry { line_bytes: 64, ways: 1 },
    CacheGeometry { line_bytes: 128, ways: 8 },
];

proptest! {
    /// `(set, tag)` always partitions the block address space: the set index
    /// is in range and `tag * num_sets + set` reconstructs the block.
    #[test]
    fn decomposition_partitions_blocks(addr in any::<u32>(), idx in 0usize..GEOMETRIES.len()) {
        let geometry = GEOMETRIES[idx];
        let sim = CacheSim::new(geometry, 65_536).unwrap();
        let (set, tag) = sim.decompose(addr);
        prop_assert!(set < sim.num_sets());
        prop_assert_eq!(tag * sim.num_sets() + set, addr / geometry.line_bytes);
    }

    /// Whatever the first outcome, an immediate repeat of the same address
    /// is a hit.
    #[test]
    fn repeat_access_always_hits(addr in any::<u32>(), idx in 0usize..GEOMETRIES.len()) {
        let mut sim = CacheSim::new(GEOMETRIES[idx], 65_536).unwrap();
        let _ = sim.access(addr);
        prop_assert_eq!(sim.access(addr), AccessKind::Hit);
    }
}

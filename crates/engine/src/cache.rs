//! Set-Associative Cache Engine.
//!
//! This module implements the hit/miss model at the heart of the simulator:
//! address decomposition by integer division, a way-order hit scan, and a
//! two-phase replacement policy. On a miss the engine first claims the
//! lowest-index invalid way; only once every way in the set is valid does it
//! evict at a per-set rotation cursor and advance the cursor. The rotation
//! is a fixed round-robin over way indices and deliberately does not track
//! recency; nothing here is LRU.

use std::fmt;

use crate::config::CacheGeometry;
use crate::error::GeometryError;

/// Outcome of a single cache access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// The block was resident in its set.
    Hit,
    /// The block was absent; one way of the set was (re)populated.
    Miss,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => write!(f, "Hit"),
            Self::Miss => write!(f, "Miss"),
        }
    }
}

/// One way within a set: resident tag plus validity.
///
/// While `valid` is false the tag is meaningless and is never compared.
#[derive(Debug, Clone, Default)]
struct CacheLine {
    tag: u32,
    valid: bool,
}

/// Set-associative cache simulator with rotation replacement.
///
/// Lines are stored flat, `index = set * ways + way`. Each set additionally
/// carries one rotation cursor naming the next way to evict once the set is
/// full. The simulator models tags only; there is no data storage and no
/// write policy.
#[derive(Debug)]
pub struct CacheSim {
    lines: Vec<CacheLine>,
    /// Per-set rotation cursor. Advances only when a valid line is evicted,
    /// never when a miss is satisfied by filling an invalid way.
    next_victim: Vec<u32>,
    num_sets: u32,
    geometry: CacheGeometry,
}

impl CacheSim {
    /// Creates a simulator for the given geometry and total capacity.
    ///
    /// Fails fast on a zero dimension or a capacity that `line_bytes * ways`
    /// does not divide evenly; see [`CacheGeometry::sets_for`].
    pub fn new(geometry: CacheGeometry, capacity: u32) -> Result<Self, GeometryError> {
        let num_sets = geometry.sets_for(capacity)?;
        let total_lines = num_sets as usize * geometry.ways as usize;
        Ok(Self {
            lines: vec![CacheLine::default(); total_lines],
            next_victim: vec![0; num_sets as usize],
            num_sets,
            geometry,
        })
    }

    /// Number of sets derived from the geometry.
    pub fn num_sets(&self) -> u32 {
        self.num_sets
    }

    /// Splits an address into `(set_index, tag)`.
    ///
    /// The block address is `addr / line_bytes` (truncating the byte offset
    /// within the line); the set index is the block modulo the set count and
    /// the tag is the remaining quotient. The engine performs this
    /// decomposition for every address it is handed, whatever range the
    /// producing stream drew it from.
    pub fn decompose(&self, addr: u32) -> (u32, u32) {
        let block = addr / self.geometry.line_bytes;
        (block % self.num_sets, block / self.num_sets)
    }

    /// Performs one access, returning whether it hit.
    ///
    /// At most one line's `valid`/`tag` and the owning set's rotation cursor
    /// are mutated; a hit mutates nothing, so repeated accesses to a
    /// resident block are idempotent.
    pub fn access(&mut self, addr: u32) -> AccessKind {
        let (set, tag) = self.decompose(addr);
        let ways = self.geometry.ways as usize;
        let base = set as usize * ways;

        // Hit scan in way order.
        for line in &self.lines[base..base + ways] {
            if line.valid && line.tag == tag {
                return AccessKind::Hit;
            }
        }

        // Cold fill: claim the first invalid way. The rotation cursor is
        // untouched in this branch.
        if let Some(line) = self.lines[base..base + ways].iter_mut().find(|l| !l.valid) {
            line.valid = true;
            line.tag = tag;
            return AccessKind::Miss;
        }

        // Set full: evict at the rotation cursor, then advance it.
        let cursor = self.next_victim[set as usize];
        let line = &mut self.lines[base + cursor as usize];
        line.tag = tag;
        self.next_victim[set as usize] = (cursor + 1) % self.geometry.ways;
        AccessKind::Miss
    }
}

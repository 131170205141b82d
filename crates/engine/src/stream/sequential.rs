//! Cursor-based sequential and strided streams.
//!
//! Each stream owns its cursor; independent instances of the same kind do
//! not share state.

use super::AddressStream;

/// Sequential stream: yields the cursor, then advances it by one modulo the
/// buffer size. The first address is always 0.
#[derive(Debug, Clone)]
pub struct SequentialStream {
    cursor: u32,
    wrap: u32,
}

impl SequentialStream {
    /// Creates a sequential stream over `[0, wrap)`.
    pub fn new(wrap: u32) -> Self {
        debug_assert!(wrap > 0, "sequential wrap must be non-zero");
        Self { cursor: 0, wrap }
    }
}

impl AddressStream for SequentialStream {
    fn next_addr(&mut self) -> u32 {
        let addr = self.cursor;
        self.cursor = (self.cursor + 1) % self.wrap;
        addr
    }
}

/// Strided stream: advances the cursor by a fixed step modulo the wrap
/// window, then yields it. The first address is one step past 0, matching
/// the reference generator.
#[derive(Debug, Clone)]
pub struct StridedStream {
    cursor: u32,
    stride: u32,
    wrap: u32,
}

impl StridedStream {
    /// Creates a strided stream stepping by `stride` over `[0, wrap)`.
    pub fn new(stride: u32, wrap: u32) -> Self {
        debug_assert!(wrap > 0, "strided wrap must be non-zero");
        Self {
            cursor: 0,
            stride,
            wrap,
        }
    }
}

impl AddressStream for StridedStream {
    fn next_addr(&mut self) -> u32 {
        self.cursor = (self.cursor + self.stride) % self.wrap;
        self.cursor
    }
}

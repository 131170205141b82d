//! Generator-backed uniform random streams.

use super::AddressStream;
use crate::rng::MwcRng;

/// Uniform-random stream over `[0, range)`, backed by an owned generator.
///
/// Range reduction is by modulo, which is slightly biased whenever `range`
/// does not divide 2^32. The reference behavior carries that bias and it is
/// preserved here for output parity.
#[derive(Debug, Clone)]
pub struct RandomStream {
    rng: MwcRng,
    range: u32,
}

impl RandomStream {
    /// Creates a random stream drawing from `rng`, reduced modulo `range`.
    pub fn new(rng: MwcRng, range: u32) -> Self {
        debug_assert!(range > 0, "random range must be non-zero");
        Self { rng, range }
    }
}

impl AddressStream for RandomStream {
    fn next_addr(&mut self) -> u32 {
        self.rng.next_u32() % self.range
    }
}

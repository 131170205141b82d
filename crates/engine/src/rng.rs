//! Multiply-with-carry pseudo-random generator.
//!
//! Reproduces the reference generator bit for bit: two 32-bit words of
//! state, each stepped as `x = k * (x & 0xFFFF) + (x >> 16)`, combined as
//! `(z << 16) + w`. The state is an explicit object rather than process
//! globals so every stream that owns a generator is independently
//! reproducible.

use crate::error::SeedError;

/// Default seed for the `w` word.
const DEFAULT_W: u32 = 0xABAB_AB55;
/// Default seed for the `z` word.
const DEFAULT_Z: u32 = 0x0508_0902;
/// Degenerate `w` seed: the `w` step maps it to itself.
const DEGENERATE_W: u32 = 0x464F_FFFF;
/// Degenerate `z` seed: the `z` step maps it to itself.
const DEGENERATE_Z: u32 = 0x9068_FFFF;

/// Multiply-with-carry generator over two `u32` state words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MwcRng {
    w: u32,
    z: u32,
}

impl Default for MwcRng {
    /// Creates a generator with the documented fixed seed, making default
    /// generators reproduce the same sequence in every run.
    fn default() -> Self {
        Self {
            w: DEFAULT_W,
            z: DEFAULT_Z,
        }
    }
}

impl MwcRng {
    /// Creates a generator from explicit seed words.
    ///
    /// Rejects zero and the two degenerate words (`0x464F_FFFF` for `w`,
    /// `0x9068_FFFF` for `z`) that the generator never leaves.
    pub fn with_seed(w: u32, z: u32) -> Result<Self, SeedError> {
        for (word, degenerate) in [(w, DEGENERATE_W), (z, DEGENERATE_Z)] {
            if word == 0 {
                return Err(SeedError::Zero);
            }
            if word == degenerate {
                return Err(SeedError::Degenerate(word));
            }
        }
        Ok(Self { w, z })
    }

    /// Draws the next 32-bit value and advances both state words.
    pub fn next_u32(&mut self) -> u32 {
        self.z = 36969u32
            .wrapping_mul(self.z & 0xFFFF)
            .wrapping_add(self.z >> 16);
        self.w = 18000u32
            .wrapping_mul(self.w & 0xFFFF)
            .wrapping_add(self.w >> 16);
        (self.z << 16).wrapping_add(self.w)
    }
}

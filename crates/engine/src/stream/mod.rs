//! Synthetic Address Streams.
//!
//! Each stream is a cheap (O(1), allocation-free per draw) producer of
//! 32-bit addresses behind the [`AddressStream`] capability. Six concrete
//! variants cover the reference access patterns; [`StreamKind`] names them
//! and builds them against a [`SimConfig`].

/// Generator-backed uniform random streams.
pub mod random;
/// Cursor-based sequential and strided streams.
pub mod sequential;

pub use random::RandomStream;
pub use sequential::{SequentialStream, StridedStream};

use std::fmt;

use serde::Deserialize;

use crate::config::{SimConfig, defaults};
use crate::rng::MwcRng;

/// Capability to produce the next address of a possibly-infinite trace.
pub trait AddressStream {
    /// Yields the next 32-bit address.
    fn next_addr(&mut self) -> u32;
}

/// The six reference access patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum StreamKind {
    /// Strictly sequential through the entire address space.
    SequentialFull,
    /// Uniformly random within a 24 KiB working set.
    LocalizedRandom,
    /// Uniformly random over the entire address space.
    FullRandom,
    /// Strictly sequential, confined to a 4 KiB buffer.
    SequentialSmall,
    /// Strictly sequential, confined to a 64 KiB buffer.
    SequentialMedium,
    /// Strided by 32 bytes, wrapped modulo 256 KiB.
    Strided,
}

impl StreamKind {
    /// All variants, in reference order.
    pub const ALL: [Self; 6] = [
        Self::SequentialFull,
        Self::LocalizedRandom,
        Self::FullRandom,
        Self::SequentialSmall,
        Self::SequentialMedium,
        Self::Strided,
    ];

    /// Builds a fresh stream of this kind.
    ///
    /// Random variants own their generator, seeded with the documented
    /// fixed seed, so every built stream replays the same sequence.
    pub fn build(self, config: &SimConfig) -> Box<dyn AddressStream> {
        match self {
            Self::SequentialFull => Box::new(SequentialStream::new(config.address_space)),
            Self::LocalizedRandom => {
                Box::new(RandomStream::new(MwcRng::default(), defaults::LOCALIZED_RANGE))
            }
            Self::FullRandom => {
                Box::new(RandomStream::new(MwcRng::default(), config.address_space))
            }
            Self::SequentialSmall => Box::new(SequentialStream::new(defaults::SMALL_BUFFER)),
            Self::SequentialMedium => Box::new(SequentialStream::new(defaults::MEDIUM_BUFFER)),
            Self::Strided => {
                Box::new(StridedStream::new(defaults::STRIDE_STEP, defaults::STRIDE_WRAP))
            }
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SequentialFull => "sequential-full",
            Self::LocalizedRandom => "localized-random",
            Self::FullRandom => "full-random",
            Self::SequentialSmall => "sequential-small",
            Self::SequentialMedium => "sequential-medium",
            Self::Strided => "strided",
        };
        write!(f, "{label}")
    }
}

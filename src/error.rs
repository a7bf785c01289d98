// Licensed under the MIT license.

//! Error types.
use std::io;

use thiserror::Error;

/// Errors returned when building a filter or loading words into it.
#[derive(Debug, Error)]
pub enum Error {
    /// The filter was configured with no bits.
    #[error("array size must be greater than zero")]
    ZeroArraySize,

    /// The filter was configured with no hash probes.
    #[error("hash count must be greater than zero")]
    ZeroHashCount,

    /// The hash count does not fit in the seed space.
    #[error("hash count {count} does not fit in a u32 seed")]
    TooManyHashes {
        /// The requested hash count.
        count: usize,
    },

    /// The bit array could not be allocated.
    #[error("failed to allocate {bytes} bytes for the bit array")]
    Allocation {
        /// Number of bytes requested.
        bytes: usize,
    },

    /// Reading words from a source failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// A result with the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

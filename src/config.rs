// Licensed under the MIT license.

//! Filter parameters.
use crate::bitvec;
use crate::error::{Error, Result};

/// Default size of the bit array, in bits.
pub const DEFAULT_ARRAY_SIZE: usize = 1 << 20;

/// Default number of hash probes per operation.
pub const DEFAULT_HASH_COUNT: usize = 3;

/// Size and hash count of a Bloom filter. Both are fixed once a filter is
/// built from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of addressable bits.
    pub array_size: usize,
    /// Number of hash probes per insertion or query.
    pub hash_count: usize,
}

impl Config {
    /// Create a validated configuration.
    pub fn new(array_size: usize, hash_count: usize) -> Result<Self> {
        let config = Self {
            array_size,
            hash_count,
        };
        config.validate()?;

        Ok(config)
    }

    /// Set the number of bits.
    pub fn with_array_size(mut self, array_size: usize) -> Self {
        self.array_size = array_size;
        self
    }

    /// Set the number of hash probes.
    pub fn with_hash_count(mut self, hash_count: usize) -> Self {
        self.hash_count = hash_count;
        self
    }

    /// Check that the parameters can back a filter.
    pub fn validate(&self) -> Result<()> {
        if self.array_size == 0 {
            return Err(Error::ZeroArraySize);
        }
        if self.hash_count == 0 {
            return Err(Error::ZeroHashCount);
        }
        if u32::try_from(self.hash_count).is_err() {
            return Err(Error::TooManyHashes {
                count: self.hash_count,
            });
        }
        Ok(())
    }

    /// Length of the packed bit array, in bytes.
    pub fn byte_len(&self) -> usize {
        bitvec::byte_len(self.array_size)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            array_size: DEFAULT_ARRAY_SIZE,
            hash_count: DEFAULT_HASH_COUNT,
        }
    }
}

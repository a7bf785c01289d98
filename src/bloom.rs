// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A Bloom filter probed by seeded SHA-256 hashes.

use std::fmt;

use crate::bitvec::BitVec;
use crate::config::Config;
use crate::error::Result;
use crate::hash;

/// A Bloom filter over byte sequences.
///
/// Each insertion and query probes `hash_count` bits, one per seed in
/// `1..=hash_count`. Bits are only ever set, so an inserted element is
/// always reported as present.
///
/// # Concurrency
///
/// [`BloomFilter::insert`] takes `&mut self` and [`BloomFilter::contains`]
/// takes `&self`, so sharing a filter across threads requires external
/// synchronization, eg. an `RwLock`. Under such a lock a query only sees
/// insertions that completed before it acquired the lock.
#[derive(Clone, PartialEq, Eq)]
pub struct BloomFilter {
    bits: BitVec,
    config: Config,
}

impl BloomFilter {
    /// Return a new, empty Bloom filter with the given configuration.
    ///
    /// Fails if the configuration is invalid or the bit array can't be allocated.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            bits: BitVec::new(config.array_size)?,
            config,
        })
    }

    /// Return a new Bloom filter with `array_size` bits and `hash_count` probes.
    pub fn with_params(array_size: usize, hash_count: usize) -> Result<Self> {
        Self::new(Config::new(array_size, hash_count)?)
    }

    /// Set an item in the Bloom filter. This operation is idempotent with regards
    /// to each unique item.
    pub fn insert<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T) {
        for index in probes(item.as_ref(), self.config) {
            self.bits.set(index);
        }
    }

    /// Return whether or not a given item is likely in the Bloom filter or not. There is a
    /// possibility of a false positive, but a false negative will never occur.
    pub fn contains<T: AsRef<[u8]> + ?Sized>(&self, item: &T) -> bool {
        probes(item.as_ref(), self.config).all(|index| self.bits.is_set(index))
    }

    /// Return the number of bits in this filter.
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hashes used (`k` parameter).
    pub fn hashes(&self) -> usize {
        self.config.hash_count
    }

    /// The configuration this filter was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of bits set to `1`.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set to `1`.
    pub fn fill_ratio(&self) -> f64 {
        self.bits.count_ones() as f64 / self.bits.len() as f64
    }

    /// Probability that a query for an item never inserted returns `true`,
    /// given the current fill ratio.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powf(self.hashes() as f64)
    }

    /// Count the approximate number of items in the filter.
    ///
    /// Saturates at `usize::MAX` once every bit is set.
    pub fn count(&self) -> usize {
        let nbits = self.bits.len() as f64;
        let nbits_set = self.bits.count_ones() as f64;
        let nhashes = self.hashes() as f64;
        let count = -(nbits / nhashes) * (1. - (nbits_set / nbits)).ln();

        count.round() as usize
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_bytes()
    }
}

/// Expected fraction of bits set after `items` distinct insertions into a filter
/// of `array_size` bits with `hash_count` probes.
pub fn expected_fill_ratio(array_size: usize, hash_count: usize, items: usize) -> f64 {
    let m = array_size as f64;
    let kn = (hash_count as f64) * (items as f64);

    1. - (1. - 1. / m).powf(kn)
}

/// Bit indexes probed for `item`, in seed order.
fn probes(item: &[u8], config: Config) -> impl Iterator<Item = usize> + '_ {
    let nbits = config.array_size as u64;
    // Validated configs keep the hash count within `u32`.
    let nhashes = config.hash_count as u32;

    (1..=nhashes).map(move |seed| (hash::seeded(item, seed) % nbits) as usize)
}

impl AsRef<[u8]> for BloomFilter {
    fn as_ref(&self) -> &[u8] {
        self.bits.as_bytes()
    }
}

impl fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("bits", &self.bits())
            .field("hashes", &self.hashes())
            .field("ones", &self.count_ones())
            .finish()
    }
}

//! A Bloom filter over byte sequences, probed by seeded SHA-256 hashes.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives.
//!
//! Filters are built from an explicit [`Config`]: the number of bits in the
//! array and the number of hash probes `k`. Neither changes afterwards, and
//! filters with different parameters can live side by side.
//!
//! # Seeded Hashing
//!
//! Each of the `k` probes uses the same primitive, SHA-256, perturbed by a
//! seed. Probe `i` hashes the seed `i + 1` as four big-endian bytes followed
//! by the element, folds the digest into a `u64`, and reduces it modulo the
//! number of bits:
//!
//! g<sub>i</sub>(x) = fold(SHA-256(be32(i + 1) || x)) mod m
//!
//! See [`hash`] for details on the fold.
//!
//! # Example
//!
//! ```
//! use shabloom::BloomFilter;
//!
//! let mut filter = BloomFilter::with_params(1000, 3).unwrap();
//!
//! filter.insert("foo");
//! filter.insert(b"bar");
//!
//! filter.contains("foo"); // true
//! filter.contains("bar"); // true
//! filter.contains("baz"); // false
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod config;
pub mod error;
pub mod hash;
pub mod words;

pub use bloom::BloomFilter;
pub use config::Config;
pub use error::{Error, Result};

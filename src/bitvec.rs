// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Bit vector functionality.
use std::fmt::Debug;

use crate::error::{Error, Result};

/// A packed bit vector. Bits can be set but never cleared.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVec {
    bytes: Vec<u8>,
    nbits: usize,
}

impl BitVec {
    /// Create a new zeroed bit vector of the given capacity, in bits.
    ///
    /// Returns [`Error::Allocation`] if the backing storage can't be reserved.
    pub fn new(capacity: usize) -> Result<Self> {
        let byte_length = byte_len(capacity);
        let mut bytes = Vec::new();

        bytes
            .try_reserve_exact(byte_length)
            .map_err(|_| Error::Allocation { bytes: byte_length })?;
        bytes.resize(byte_length, 0);

        Ok(Self {
            nbits: capacity,
            bytes,
        })
    }

    /// Get the length in bits of the vector.
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Check whether this vector is empty, ie. has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Set a single bit to `1`.
    pub fn set(&mut self, index: usize) {
        let (byte_index, mask) = self.locate(index);

        self.bytes[byte_index] |= mask;
    }

    /// Check whether a bit is set.
    pub fn is_set(&self, index: usize) -> bool {
        let (byte_index, mask) = self.locate(index);

        self.bytes[byte_index] & mask == mask
    }

    /// Count the number of `1` bits.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Count the number of `0` bits.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Map a bit index to its byte offset and in-byte mask.
    fn locate(&self, index: usize) -> (usize, u8) {
        if index >= self.len() {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index,
            )
        }
        (index / 8, 0x01 << (index % 8))
    }
}

/// Number of bytes needed to hold `nbits` bits.
pub fn byte_len(nbits: usize) -> usize {
    if nbits % 8 == 0 {
        nbits / 8
    } else {
        1 + nbits / 8
    }
}

impl Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.nbits > 64 {
            return write!(f, "BitVec({} bits, {} set)", self.nbits, self.count_ones());
        }
        let bits: String = (0..self.nbits)
            .map(|i| if self.is_set(i) { '1' } else { '0' })
            .collect();
        write!(f, "BitVec({})", bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitvec_with_length() {
        let bitvec = BitVec::new(1).unwrap();
        assert_eq!(1, bitvec.len());
        assert_eq!(1, bitvec.as_bytes().len());

        let bitvec = BitVec::new(8).unwrap();
        assert_eq!(8, bitvec.len());
        assert_eq!(1, bitvec.as_bytes().len());

        let bitvec = BitVec::new(9).unwrap();
        assert_eq!(9, bitvec.len());
        assert_eq!(2, bitvec.as_bytes().len());

        let bitvec = BitVec::new(1000).unwrap();
        assert_eq!(125, bitvec.as_bytes().len());
        assert!(bitvec.as_bytes().iter().all(|b| *b == 0));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn allocation_failure_is_reported() {
        let result = BitVec::new(usize::MAX);

        assert!(matches!(
            result,
            Err(Error::Allocation { bytes }) if bytes == byte_len(usize::MAX)
        ));
    }

    #[test]
    fn locate_maps_to_byte_and_mask() {
        let bitvec = BitVec::new(24).unwrap();

        assert_eq!(bitvec.locate(0), (0, 0b0000_0001));
        assert_eq!(bitvec.locate(7), (0, 0b1000_0000));
        assert_eq!(bitvec.locate(8), (1, 0b0000_0001));
        assert_eq!(bitvec.locate(19), (2, 0b0000_1000));
    }

    #[test]
    fn set_first_bit_only() {
        let mut bitvec = BitVec::new(3).unwrap();
        bitvec.set(0);
        assert_eq!(true, bitvec.is_set(0));
        assert_eq!(false, bitvec.is_set(1));
        assert_eq!(false, bitvec.is_set(2));
        assert_eq!(bitvec.as_bytes(), &[0b0000_0001u8]);
    }

    #[test]
    fn set_last_bit_only() {
        let mut bitvec = BitVec::new(9).unwrap();
        bitvec.set(8);
        for i in 0..8 {
            assert_eq!(false, bitvec.is_set(i));
        }
        assert_eq!(true, bitvec.is_set(8));
        assert_eq!(bitvec.as_bytes(), &[0u8, 0b0000_0001]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn must_set_with_correct_index() {
        BitVec::new(5).unwrap().set(5);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn must_get_with_correct_index() {
        BitVec::new(12).unwrap().is_set(12);
    }

    #[test]
    fn set_is_idempotent() {
        let mut bitvec = BitVec::new(16).unwrap();
        bitvec.set(3);
        let once = bitvec.clone();

        bitvec.set(3);
        bitvec.set(3);
        assert_eq!(once, bitvec);
        assert_eq!(1, bitvec.count_ones());
    }

    #[test]
    fn set_each_bit_one_by_one() {
        let mut bitvec = BitVec::new(9).unwrap();
        assert_eq!(0, bitvec.count_ones());
        assert_eq!(9, bitvec.count_zeros());

        for i in 0..9 {
            bitvec.set(i);
            assert_eq!(true, bitvec.is_set(i));
            assert_eq!(i + 1, bitvec.count_ones());
            assert_eq!(8 - i, bitvec.count_zeros());
        }
    }

    #[test]
    fn debug_output() {
        let mut bitvec = BitVec::new(4).unwrap();
        bitvec.set(1);
        assert_eq!(format!("{:?}", bitvec), "BitVec(0100)");

        let mut bitvec = BitVec::new(100).unwrap();
        bitvec.set(99);
        assert_eq!(format!("{:?}", bitvec), "BitVec(100 bits, 1 set)");
    }
}

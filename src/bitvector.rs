//! BitVector - Fixed-width, LSB-first operand vector.
//!
//! This module provides the operand type consumed and produced by the
//! ripple-carry adder: an ordered sequence of [`Bit`]s, least significant
//! bit first, with a fixed capacity of [`WIDTH`] positions backed by a
//! single packed 32-bit word.
//!
//! # Design
//!
//! - Uses `BitVec<u32, Lsb0>` for storage, so WIDTH bits occupy exactly
//!   one word and integer conversion is a word-level load/store
//! - Position 0 is the least significant bit
//! - A logical length records how many low positions a conversion
//!   populated; every position at or beyond it reads [`Bit::Lo`] because
//!   the storage is zeroed at construction
//! - Capacity violations surface as [`NandcoreError`], never as silent
//!   truncation
//!
//! # Examples
//!
//! ```
//! use nandcore::{Bit, BitVector};
//!
//! let v = BitVector::from_int(149);
//! assert_eq!(v.len(), 8);
//! assert_eq!(v.get(0), Bit::Hi);
//! assert_eq!(v.to_int(), 149);
//! ```

use crate::bit::Bit;
use crate::error::{NandcoreError, Result};
use bitvec::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed operand width in bits, shared by every vector and the adder.
///
/// Matches the 32-bit storage word, so every `u32` has an exact vector
/// representation and vice versa.
pub const WIDTH: usize = 32;

/// Fixed-width, LSB-first sequence of logic signals.
///
/// Unused high positions are always [`Bit::Lo`], which is what lets the
/// adder treat every operand as a full WIDTH-bit value regardless of how
/// many bits its conversion produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BitVector {
    /// Packed storage, always exactly WIDTH bits
    bv: BitVec<u32, Lsb0>,
    /// Number of low positions populated by conversion or `set`
    len: usize,
}

impl BitVector {
    /// Create a zeroed vector with logical length 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use nandcore::{Bit, BitVector, WIDTH};
    ///
    /// let v = BitVector::new();
    /// assert!(v.is_empty());
    /// assert_eq!(v.get(WIDTH - 1), Bit::Lo);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            bv: BitVec::repeat(false, WIDTH),
            len: 0,
        }
    }

    /// Convert a non-negative integer to its vector representation.
    ///
    /// Extracts bits least-significant-first by repeated halving until the
    /// value is exhausted; the logical length is the number of bits
    /// produced. Total over `u32` because the operand width matches the
    /// integer width exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use nandcore::BitVector;
    ///
    /// assert_eq!(BitVector::from_int(0).len(), 0);
    /// assert_eq!(BitVector::from_int(5).len(), 3);
    /// ```
    pub fn from_int(n: u32) -> Self {
        let mut v = Self::new();
        let mut n = n;
        let mut i = 0;
        while n > 0 {
            if n % 2 == 1 {
                v.bv.set(i, true);
            }
            i += 1;
            n /= 2;
        }
        v.len = i;
        v
    }

    /// Checked conversion from a wider integer.
    ///
    /// # Errors
    ///
    /// Returns [`NandcoreError::ValueTooWide`] if `n` needs more than
    /// [`WIDTH`] bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use nandcore::BitVector;
    ///
    /// assert!(BitVector::try_from_int(u32::MAX as u64).is_ok());
    /// assert!(BitVector::try_from_int(1 << 32).is_err());
    /// ```
    pub fn try_from_int(n: u64) -> Result<Self> {
        if n >> WIDTH != 0 {
            return Err(NandcoreError::ValueTooWide {
                value: n,
                width: WIDTH,
            });
        }
        Ok(Self::from_int(n as u32))
    }

    /// Build a vector from a slice of signals, least significant first.
    ///
    /// # Errors
    ///
    /// Returns [`NandcoreError::CapacityExceeded`] if the slice holds more
    /// than [`WIDTH`] signals.
    pub fn from_bits(bits: &[Bit]) -> Result<Self> {
        if bits.len() > WIDTH {
            return Err(NandcoreError::CapacityExceeded {
                requested: bits.len(),
                capacity: WIDTH,
            });
        }
        let mut v = Self::new();
        for (i, &bit) in bits.iter().enumerate() {
            v.bv.set(i, bit.is_hi());
        }
        v.len = bits.len();
        Ok(v)
    }

    /// Read the vector back as an integer.
    ///
    /// Word-level load: the packed storage of a WIDTH-bit vector is
    /// exactly one `u32` in LSB-first order.
    #[inline]
    pub fn to_int(&self) -> u32 {
        self.bv.as_raw_slice()[0]
    }

    // =========================================================================
    // Position Access
    // =========================================================================

    /// Get the signal at position `i`.
    ///
    /// Positions at or beyond the logical length read [`Bit::Lo`].
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `i >= WIDTH`.
    #[inline]
    pub fn get(&self, i: usize) -> Bit {
        debug_assert!(i < WIDTH, "position {} out of bounds (width: {})", i, WIDTH);
        Bit::from(self.bv[i])
    }

    /// Set the signal at position `i`, extending the logical length to
    /// cover it.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `i >= WIDTH`.
    #[inline]
    pub fn set(&mut self, i: usize, bit: Bit) {
        debug_assert!(i < WIDTH, "position {} out of bounds (width: {})", i, WIDTH);
        self.bv.set(i, bit.is_hi());
        if i >= self.len {
            self.len = i + 1;
        }
    }

    /// Reset every position to [`Bit::Lo`] and the logical length to 0.
    pub fn clear_all(&mut self) {
        self.bv.fill(false);
        self.len = 0;
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Logical length: the number of low positions populated so far.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no position has been populated.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Count positions holding [`Bit::Hi`] (population count).
    #[inline]
    pub fn count_hi(&self) -> usize {
        self.bv.count_ones()
    }

    /// Iterate over all [`WIDTH`] positions, least significant first.
    pub fn bits(&self) -> impl Iterator<Item = Bit> + '_ {
        self.bv.iter().by_vals().map(Bit::from)
    }

    // =========================================================================
    // Random Patterns
    // =========================================================================

    /// Generate a random operand.
    ///
    /// # Examples
    ///
    /// ```
    /// use nandcore::BitVector;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let v = BitVector::random(&mut rng);
    /// assert_eq!(BitVector::from_int(v.to_int()), v);
    /// ```
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_int(rng.gen())
    }
}

impl Default for BitVector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<u32> for BitVector {
    fn from(n: u32) -> Self {
        Self::from_int(n)
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl PartialEq for BitVector {
    /// Compare signal content word-for-word.
    ///
    /// The logical length is conversion bookkeeping and does not
    /// participate in equality: an adder result of full width equals the
    /// conversion of the same integer.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bv.as_raw_slice() == other.bv.as_raw_slice()
    }
}

impl Eq for BitVector {}

// =============================================================================
// Formatting
// =============================================================================

impl fmt::Display for BitVector {
    /// Render all WIDTH positions most-significant-first, the conventional
    /// reading order for binary numerals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..WIDTH).rev() {
            write!(f, "{}", self.get(i))?;
        }
        Ok(())
    }
}

//! Ripple-carry adder - chains full-adder cells across fixed-width vectors.
//!
//! The adder walks both operands least-significant-first, feeding each
//! position through one [`FullAdderCell`] and threading the carry from
//! each cell into the next. After the last cell the carry line holds the
//! overflow bit, returned alongside the sum.
//!
//! # Examples
//!
//! ```
//! use nandcore::{add, Bit, BitVector, RippleCarryAdder};
//!
//! let a = BitVector::from_int(149);
//! let b = BitVector::from_int(150);
//! assert_eq!(add(&a, &b).sum.to_int(), 299);
//!
//! // Overflow wraps and raises the carry line
//! let out = RippleCarryAdder::nand_only().add(
//!     &BitVector::from_int(u32::MAX),
//!     &BitVector::from_int(1),
//! );
//! assert_eq!(out.sum.to_int(), 0);
//! assert_eq!(out.carry, Bit::Hi);
//! ```

use crate::bit::Bit;
use crate::bitvector::{BitVector, WIDTH};
use crate::cell::{ComposedCell, FullAdderCell, NandCell};
use serde::{Deserialize, Serialize};

/// Result of a ripple-carry addition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOutput {
    /// The WIDTH-bit sum, wrapped modulo 2^WIDTH on overflow.
    pub sum: BitVector,
    /// Final carry-out of the most significant cell. [`Bit::Hi`] exactly
    /// when the true sum did not fit in WIDTH bits.
    pub carry: Bit,
}

/// Ripple-carry adder over a pluggable full-adder cell.
///
/// Both cell wirings satisfy the same contract, so the choice never
/// affects results, only the gate structure being simulated.
#[derive(Clone, Copy, Debug, Default)]
pub struct RippleCarryAdder<C: FullAdderCell> {
    cell: C,
}

impl RippleCarryAdder<ComposedCell> {
    /// Adder driven by the derived-gate cell.
    pub fn composed() -> Self {
        Self::new(ComposedCell)
    }
}

impl RippleCarryAdder<NandCell> {
    /// Adder driven by the flat NAND cell.
    pub fn nand_only() -> Self {
        Self::new(NandCell)
    }
}

impl<C: FullAdderCell> RippleCarryAdder<C> {
    /// Create an adder from any cell implementation.
    pub fn new(cell: C) -> Self {
        Self { cell }
    }

    /// Add two operands.
    ///
    /// The carry line starts at [`Bit::Lo`] and is threaded through all
    /// WIDTH cells in sequence; positions beyond either operand's logical
    /// length read as [`Bit::Lo`], so short operands behave as
    /// zero-extended. Overflow truncates silently, as in hardware; it is
    /// observable only through the returned carry.
    pub fn add(&self, a: &BitVector, b: &BitVector) -> AddOutput {
        let mut sum = BitVector::new();
        let mut carry = Bit::Lo;
        for i in 0..WIDTH {
            let (s, c) = self.cell.add(a.get(i), b.get(i), carry);
            sum.set(i, s);
            carry = c;
        }
        AddOutput { sum, carry }
    }
}

/// Add two operands with the derived-gate adder.
///
/// Convenience for callers that do not care which cell wiring runs.
pub fn add(a: &BitVector, b: &BitVector) -> AddOutput {
    RippleCarryAdder::composed().add(a, b)
}

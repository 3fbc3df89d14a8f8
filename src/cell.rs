//! Full-adder cells - one sum bit and one carry bit from three inputs.
//!
//! A full adder combines two addend bits and a carry-in into a sum bit and
//! a carry-out. This module provides the [`FullAdderCell`] trait and two
//! interchangeable wirings of it: [`ComposedCell`] spells the logic out
//! with derived gates, [`NandCell`] collapses the same circuit into a flat
//! NAND sequence. Either can drive [`crate::RippleCarryAdder`].
//!
//! # Design
//!
//! The carry is threaded by value: a cell takes `carry_in` and returns
//! `carry_out` instead of touching shared state, so cells are stateless,
//! reentrant and testable in isolation. The chain in the ripple-carry loop
//! is the only place carries connect.
//!
//! # Examples
//!
//! ```
//! use nandcore::{Bit, ComposedCell, FullAdderCell, NandCell};
//!
//! let (sum, carry) = ComposedCell.add(Bit::Hi, Bit::Hi, Bit::Lo);
//! assert_eq!((sum, carry), (Bit::Lo, Bit::Hi));
//!
//! // Both wirings agree on every input combination
//! for a in Bit::ALL {
//!     for b in Bit::ALL {
//!         for c in Bit::ALL {
//!             assert_eq!(ComposedCell.add(a, b, c), NandCell.add(a, b, c));
//!         }
//!     }
//! }
//! ```

use crate::bit::Bit;
use crate::gates::{and, nand, or, xor};

/// One-bit full adder.
///
/// Implementations must match the textbook truth table for all eight input
/// combinations:
///
/// ```text
/// sum       = a XOR b XOR carry_in
/// carry_out = (a AND b) OR (carry_in AND (a XOR b))
/// ```
pub trait FullAdderCell {
    /// Combine `a`, `b` and `carry_in` into `(sum, carry_out)`.
    fn add(&self, a: Bit, b: Bit, carry_in: Bit) -> (Bit, Bit);
}

/// Full adder wired from derived AND/OR/XOR gates.
///
/// The readable wiring: a half-adder pass over `carry_in` and `a` produces
/// the intermediate `x`, then a second pass folds `b` into both the sum
/// and the carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComposedCell;

impl FullAdderCell for ComposedCell {
    fn add(&self, a: Bit, b: Bit, carry_in: Bit) -> (Bit, Bit) {
        let x = xor(carry_in, a);
        let carry_out = or(and(a, carry_in), and(b, x));
        let sum = xor(b, x);
        (sum, carry_out)
    }
}

/// Full adder wired as a flat NAND sequence.
///
/// Gate-count optimized form of [`ComposedCell`] with the derived-gate
/// calls fused away. The local carry line is rewritten twice mid-sequence;
/// after the first rewrite it holds `NAND(carry_in, a)`, which doubles as
/// an input to both the sum and the final carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NandCell;

impl FullAdderCell for NandCell {
    fn add(&self, a: Bit, b: Bit, carry_in: Bit) -> (Bit, Bit) {
        let mut carry = carry_in;
        let x = nand(a, a);
        let y = nand(carry, carry);
        carry = nand(carry, a);
        let x = nand(nand(x, y), carry);
        let y = nand(x, x);
        carry = nand(carry, nand(y, b));
        let s = nand(nand(x, nand(b, b)), nand(b, y));
        (nand(s, s), carry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Truth-table oracle over plain booleans.
    fn oracle(a: bool, b: bool, c: bool) -> (bool, bool) {
        (a ^ b ^ c, (a && b) || (c && (a ^ b)))
    }

    #[test]
    fn test_composed_cell_truth_table() {
        for a in Bit::ALL {
            for b in Bit::ALL {
                for c in Bit::ALL {
                    let (sum, carry) = ComposedCell.add(a, b, c);
                    let (es, ec) = oracle(a.into(), b.into(), c.into());
                    assert_eq!(
                        (bool::from(sum), bool::from(carry)),
                        (es, ec),
                        "inputs a={a:?} b={b:?} c={c:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_nand_cell_truth_table() {
        for a in Bit::ALL {
            for b in Bit::ALL {
                for c in Bit::ALL {
                    let (sum, carry) = NandCell.add(a, b, c);
                    let (es, ec) = oracle(a.into(), b.into(), c.into());
                    assert_eq!(
                        (bool::from(sum), bool::from(carry)),
                        (es, ec),
                        "inputs a={a:?} b={b:?} c={c:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_variants_agree() {
        for a in Bit::ALL {
            for b in Bit::ALL {
                for c in Bit::ALL {
                    assert_eq!(ComposedCell.add(a, b, c), NandCell.add(a, b, c));
                }
            }
        }
    }
}

//! Logic gates built from a single universal NAND primitive.
//!
//! This module provides the irreducible [`nand`] gate and the derived
//! [`and`], [`or`] and [`xor`] gates. Every derived gate is a fixed
//! composition of NAND calls.
//!
//! # Design
//!
//! - `nand` is the only function in the crate that inspects raw [`Bit`]
//!   values
//! - Derived gates never short-circuit on booleans; their NAND wiring is
//!   the contract, not just their truth table
//! - All gates are pure functions of two signals to one signal
//!
//! # Examples
//!
//! ```
//! use nandcore::gates::{and, nand, or, xor};
//! use nandcore::Bit;
//!
//! assert_eq!(nand(Bit::Hi, Bit::Hi), Bit::Lo);
//! assert_eq!(and(Bit::Hi, Bit::Hi), Bit::Hi);
//! assert_eq!(or(Bit::Lo, Bit::Hi), Bit::Hi);
//! assert_eq!(xor(Bit::Hi, Bit::Hi), Bit::Lo);
//! ```

use crate::bit::Bit;

/// Universal NAND gate.
///
/// Returns [`Bit::Lo`] only when both inputs are [`Bit::Hi`].
#[inline]
pub fn nand(a: Bit, b: Bit) -> Bit {
    match (a, b) {
        (Bit::Hi, Bit::Hi) => Bit::Lo,
        _ => Bit::Hi,
    }
}

/// AND gate: a NAND followed by a NAND-wired inversion.
#[inline]
pub fn and(a: Bit, b: Bit) -> Bit {
    let n = nand(a, b);
    nand(n, n)
}

/// OR gate: NAND over the NAND-inverted inputs.
#[inline]
pub fn or(a: Bit, b: Bit) -> Bit {
    nand(nand(a, a), nand(b, b))
}

/// XOR gate: six-NAND lattice.
///
/// The inner `nand(p, q)` yields the inverted difference signal; the final
/// self-NAND inverts it back.
#[inline]
pub fn xor(a: Bit, b: Bit) -> Bit {
    let x = nand(a, a);
    let y = nand(b, b);
    let p = nand(a, b);
    let q = nand(x, y);
    let r = nand(p, q);
    nand(r, r)
}

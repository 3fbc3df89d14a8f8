//! Truth-table tests for the gate layer.
//!
//! Every gate's input space is two bits, so the tables are enumerated
//! exhaustively rather than sampled.

use itertools::iproduct;
use nandcore::gates::{and, nand, or, xor};
use nandcore::Bit;

// =============================================================================
// Primitive Gate
// =============================================================================

#[test]
fn test_nand_low_only_for_both_high() {
    for (a, b) in iproduct!(Bit::ALL, Bit::ALL) {
        let expected = !(a.is_hi() && b.is_hi());
        assert_eq!(
            nand(a, b).is_hi(),
            expected,
            "nand({a:?}, {b:?})"
        );
    }
}

// =============================================================================
// Derived Gates
// =============================================================================

#[test]
fn test_and_matches_boolean_and() {
    for (a, b) in iproduct!(Bit::ALL, Bit::ALL) {
        assert_eq!(and(a, b).is_hi(), a.is_hi() && b.is_hi(), "and({a:?}, {b:?})");
    }
}

#[test]
fn test_or_matches_boolean_or() {
    for (a, b) in iproduct!(Bit::ALL, Bit::ALL) {
        assert_eq!(or(a, b).is_hi(), a.is_hi() || b.is_hi(), "or({a:?}, {b:?})");
    }
}

#[test]
fn test_xor_matches_boolean_xor() {
    for (a, b) in iproduct!(Bit::ALL, Bit::ALL) {
        assert_eq!(xor(a, b).is_hi(), a.is_hi() ^ b.is_hi(), "xor({a:?}, {b:?})");
    }
}

// =============================================================================
// De Morgan Identities
// =============================================================================

#[test]
fn test_nand_inverts_and() {
    for (a, b) in iproduct!(Bit::ALL, Bit::ALL) {
        assert_ne!(nand(a, b), and(a, b));
    }
}

#[test]
fn test_or_from_inverted_inputs() {
    // or(a, b) == nand(!a, !b) with inversion expressed as self-NAND
    for (a, b) in iproduct!(Bit::ALL, Bit::ALL) {
        assert_eq!(or(a, b), nand(nand(a, a), nand(b, b)));
    }
}

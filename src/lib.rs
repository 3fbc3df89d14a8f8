//! Nandcore - Logic-Gate Binary Arithmetic from a Universal NAND
//!
//! Nandcore simulates a hardware binary adder purely out of logic-gate
//! primitives, bottoming out in a single universal gate. Every derived
//! gate, every full-adder cell and ultimately every addition is a fixed
//! composition of NAND calls, demonstrating that all boolean logic and
//! arithmetic reduces to one primitive.
//!
//! # Architecture
//!
//! The crate is layered leaves-first:
//!
//! - **Bit**: a genuine two-valued signal type, making invalid signals
//!   unrepresentable
//! - **Gates**: the [`gates::nand`] primitive and the derived
//!   [`gates::and`], [`gates::or`], [`gates::xor`] compositions
//! - **Cells**: the [`FullAdderCell`] trait with two interchangeable
//!   wirings, [`ComposedCell`] (derived gates) and [`NandCell`] (a flat
//!   NAND sequence)
//! - **Adder**: [`RippleCarryAdder`], chaining WIDTH cells with a threaded
//!   carry line
//! - **BitVector**: the fixed-width, LSB-first operand type with integer
//!   conversions
//!
//! # Examples
//!
//! ```
//! use nandcore::{add, Bit, BitVector, RippleCarryAdder};
//!
//! let a = BitVector::from_int(149);
//! let b = BitVector::from_int(150);
//!
//! let out = add(&a, &b);
//! assert_eq!(out.sum.to_int(), 299);
//! assert_eq!(out.carry, Bit::Lo);
//!
//! // The all-NAND adder is a drop-in substitute
//! let out2 = RippleCarryAdder::nand_only().add(&a, &b);
//! assert_eq!(out, out2);
//! ```
//!
//! # Scope
//!
//! Nandcore is an educational simulator, not a synthesis tool: there is no
//! gate-delay modeling and no circuit beyond addition. Addition wraps
//! modulo 2^[`WIDTH`] exactly as a hardware adder truncates, with the
//! final carry-out returned so callers can observe overflow.

// Module declarations
pub mod adder;
pub mod bit;
pub mod bitvector;
pub mod cell;
pub mod error;
pub mod gates;

// Re-exports for convenient access
pub use adder::{add, AddOutput, RippleCarryAdder};
pub use bit::Bit;
pub use bitvector::{BitVector, WIDTH};
pub use cell::{ComposedCell, FullAdderCell, NandCell};
pub use error::{NandcoreError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Nandcore";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

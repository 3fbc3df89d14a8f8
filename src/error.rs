//! Error types for the nandcore crate.
//!
//! The gate, cell and adder layers are total over their inputs and never
//! fail; errors exist only at the integer-conversion boundary, where a
//! value genuinely may not fit in the fixed operand width. Uses the
//! `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for nandcore operations.
#[derive(Error, Debug)]
pub enum NandcoreError {
    /// Integer does not fit in the fixed operand width
    #[error("value {value} does not fit in {width} bits")]
    ValueTooWide {
        /// The value that was converted
        value: u64,
        /// The operand width in bits
        width: usize,
    },

    /// More bits supplied than a vector can hold
    #[error("vector capacity exceeded: requested {requested} bits, capacity {capacity}")]
    CapacityExceeded {
        /// Number of bits requested
        requested: usize,
        /// The fixed vector capacity
        capacity: usize,
    },
}

/// A specialized `Result` type for nandcore operations.
pub type Result<T> = std::result::Result<T, NandcoreError>;

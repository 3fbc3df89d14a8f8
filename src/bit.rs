//! Bit - Two-valued logic signal type.
//!
//! This module provides the `Bit` enum, the only value type that flows
//! through the gate layer. It is a genuine two-state type rather than a
//! `bool` wrapper so that invalid signal values are unrepresentable and no
//! boolean operators apply to it; combining signals is the job of the gate
//! functions in [`crate::gates`].
//!
//! # Examples
//!
//! ```
//! use nandcore::Bit;
//!
//! assert_eq!(Bit::default(), Bit::Lo);
//! assert_eq!(Bit::from(true), Bit::Hi);
//! assert_eq!(format!("{}", Bit::Hi), "1");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-valued logic signal.
///
/// `Lo` is the default, matching the zero-initialized state of a freshly
/// constructed [`crate::BitVector`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bit {
    /// Logic low (0).
    #[default]
    Lo,
    /// Logic high (1).
    Hi,
}

impl Bit {
    /// Both signal values, for exhaustive truth-table enumeration.
    pub const ALL: [Bit; 2] = [Bit::Lo, Bit::Hi];

    /// Returns `true` if the signal is high.
    #[inline(always)]
    pub fn is_hi(self) -> bool {
        self == Bit::Hi
    }
}

impl From<bool> for Bit {
    #[inline(always)]
    fn from(v: bool) -> Self {
        if v {
            Bit::Hi
        } else {
            Bit::Lo
        }
    }
}

impl From<Bit> for bool {
    #[inline(always)]
    fn from(b: Bit) -> Self {
        b.is_hi()
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_hi() { "1" } else { "0" })
    }
}

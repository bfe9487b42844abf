// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the container conversions.
//!
//! Iteration itself never fails: exhaustion is `None`, and contract
//! violations panic. These errors only cover length and bounds conditions
//! of the fallible container operations. They are `Copy` and implement
//! `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by fallible operations on [`Vec`](crate::Vec) and
/// [`Array`](crate::Array).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The source produced more items than the destination can hold.
    ///
    /// Returned by [`Array::try_from_iter`](crate::Array::try_from_iter).
    Full,
    /// An index or position was out of the current logical bounds.
    OutOfBounds,
    /// The source produced fewer items than the destination requires.
    InvalidLen,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::InvalidLen => f.write_str("invalid length"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds);
        assert!(s.contains("out of bounds"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::Full.to_string(), "capacity exceeded");
        assert_eq!(Error::InvalidLen.to_string(), "invalid length");
    }
}

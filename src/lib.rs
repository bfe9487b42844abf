// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `affine-iter`
//!
//! A `no_std` (plus `alloc`) framework of lazy, pull-based iterators,
//! **with no `unsafe`**.
//!
//! Everything is built around one trait, [`Iterator`](iter::Iterator):
//! implement `next()` and you get the eager operations (`fold`, `count`,
//! `find`, `position`, `all`, `collect`, ...) and the adaptor factories
//! (`map`, `filter`, `zip`, `chain`, `peekable`, `flatten`, ...) for free.
//! Adaptors are lazy: building one does no work and pulls nothing.
//!
//! ## Capabilities
//!
//! Iterators opt into extra capabilities, and adaptors carry them through
//! whenever their inputs have them:
//!
//! - [`DoubleEndedIterator`](iter::DoubleEndedIterator): can be consumed
//!   from the back; enables `rev()`.
//! - [`ExactSizeIterator`](iter::ExactSizeIterator): the size hint is exact.
//! - [`TrustedLen`](iter::TrustedLen): the size hint is exact and can be
//!   relied upon for pre-allocation.
//! - [`FusedIterator`](iter::FusedIterator): keeps returning `None` once it
//!   has returned `None`.
//!
//! Asking for a capability an iterator does not have is a compile error,
//! not a runtime one: `rev()` on a `filter()` over a forward-only source
//! does not type-check.
//!
//! ## Size hints
//!
//! Every iterator reports a [`SizeHint`]: a lower bound and an optional
//! upper bound on the number of remaining items. Adaptors derive theirs
//! from their inputs (a `filter` keeps the upper bound and drops the lower
//! one to zero, a `zip` takes the minimum of both sides, ...).
//!
//! ## Slices and containers
//!
//! - [`Slice`] / [`SliceMut`] are borrowed views with element iteration,
//!   chunking, windows and predicate splitting.
//! - [`Vec`] is a growable, heap-backed container and [`Array`] a fixed
//!   length, inline one. Both hand out the crate's iterators and can be
//!   built with `collect()`.
//!
//! ## Interop with `core::iter`
//!
//! The traits in [`prelude`] deliberately share their names with the
//! `core` ones and shadow them when glob-imported. Use
//! [`from_std`](iter::from_std) to adapt a `core` iterator, and
//! [`into_std`](iter::Iterator::into_std) to hand one of ours to a `for`
//! loop or to `core` APIs.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for [`Vec<T>`] (any sequence)
//!     and [`Array<T, N>`] (exactly `N` elements).
//!
//! ## Example
//!
//! ```rust
//! use affine_iter::prelude::*;
//! use affine_iter::{iter::from_std, SizeHint, Slice, Vec};
//!
//! let data = [3, 1, 4, 1, 5, 9, 2, 6];
//!
//! let it = Slice::new(&data).iter().copied().filter(|x| x % 2 == 1);
//! assert_eq!(it.size_hint(), SizeHint::new(0, Some(8)));
//!
//! let odds: Vec<i32> = it.collect();
//! assert_eq!(odds.as_slice(), &[3, 1, 1, 5, 9]);
//!
//! let pairs: Vec<(usize, &[i32])> = Slice::new(&data).chunks(3).enumerate().rev().collect();
//! assert_eq!(pairs.as_slice(), &[(2, &[2, 6][..]), (1, &[1, 5, 9][..]), (0, &[3, 1, 4][..])]);
//!
//! let total: i32 = from_std(1..=4).zip(odds.iter()).map(|(a, b)| a * b).sum();
//! assert_eq!(total, 3 + 2 + 3 + 20);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
pub mod array;
mod error;
mod index;
pub mod iter;
#[cfg(feature = "serde")]
mod serde;
mod size_hint;
pub mod slice;
pub mod vec;

// Public exports (crate API surface)
pub use array::Array;
pub use error::Error;
pub use size_hint::SizeHint;
pub use slice::{Slice, SliceMut};
pub use vec::Vec;

/// The iterator traits, for glob import.
///
/// Importing these shadows the `core` prelude traits of the same names.
pub mod prelude {
    pub use crate::iter::{
        DoubleEndedIterator, ExactSizeIterator, FromIterator, FusedIterator, IntoIterator,
        Iterator, TrustedLen,
    };
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::prelude::*;
    use crate::{iter::from_std, Array, Error, SizeHint, Slice, Vec};

    #[test]
    fn test_pipeline_across_modules() {
        let data = Vec::from([1, 2, 3, 4, 5, 6]);
        let out: Vec<i32> = data
            .iter()
            .copied()
            .rev()
            .step_by(2)
            .chain(from_std(10..12))
            .collect();
        assert_eq!(out.as_slice(), &[6, 4, 2, 10, 11]);
    }

    #[test]
    fn test_array_collect_and_errors() {
        let a: Array<u8, 3> = Array::try_from_iter(Slice::new(&[7, 8, 9]).iter().copied()).unwrap();
        assert_eq!(a.iter().copied().sum::<u8>(), 24);
        assert_eq!(
            Array::<u8, 3>::try_from_iter(a.iter().copied().take(2)),
            Err(Error::InvalidLen)
        );
    }

    #[test]
    fn test_size_hint_through_adaptors() {
        let v = Vec::from([1, 2, 3, 4]);
        let it = v.iter().zip(from_std(0..10)).skip(1);
        assert_eq!(it.size_hint(), SizeHint::exact(3));
        assert_eq!(it.exact_size_hint(), 3);
    }
}

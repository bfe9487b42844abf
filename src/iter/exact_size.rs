// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::iter::Iterator;

/// An iterator that knows exactly how many items it has left.
///
/// Implementors must report the same count through
/// [`size_hint`](Iterator::size_hint) as both bounds; the default
/// [`exact_size_hint`](ExactSizeIterator::exact_size_hint) checks this in
/// debug builds.
pub trait ExactSizeIterator: Iterator {
    /// Returns the exact number of items left.
    #[inline]
    fn exact_size_hint(&self) -> usize {
        let hint = self.size_hint();
        debug_assert_eq!(
            hint.upper,
            Some(hint.lower),
            "exact-size iterator reported an inexact size hint"
        );
        hint.lower
    }

    /// Returns `true` if no items are left.
    #[inline]
    fn is_empty(&self) -> bool {
        self.exact_size_hint() == 0
    }
}

/// Marker for iterators whose [`size_hint`](Iterator::size_hint) is exact
/// and can be trusted to pre-size storage.
///
/// The upper bound is `None` only when the true length exceeds `usize::MAX`.
pub trait TrustedLen: Iterator {}

/// Marker for iterators that keep returning `None` once exhausted.
pub trait FusedIterator: Iterator {}

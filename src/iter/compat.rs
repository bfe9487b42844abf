// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bridges between this crate's iterator traits and `core::iter`.
//!
//! - [`from_std`] turns anything `core` can iterate (ranges, `alloc`
//!   collections, `core` adaptors) into an [`Iterator`].
//! - [`StdIter`], built by [`Iterator::into_std`], goes the other way so the
//!   crate's iterators work in `for` loops.
//!
//! Capabilities are carried across in both directions: double-ended,
//! exact-size, and fused iterators stay so.

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator},
    size_hint::SizeHint,
};

/// An [`Iterator`] over a `core::iter::Iterator`.
///
/// This `struct` is created by [`from_std`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FromStd<I> {
    iter: I,
}

/// Adapts any `core::iter::IntoIterator` into this crate's [`Iterator`].
///
/// ```rust
/// use affine_iter::prelude::*;
/// use affine_iter::iter::from_std;
///
/// let squares: Vec<u32> = from_std(1..=3).map(|x| x * x).collect();
/// assert_eq!(squares, [1, 4, 9]);
/// ```
#[inline]
pub fn from_std<I: core::iter::IntoIterator>(iter: I) -> FromStd<I::IntoIter> {
    FromStd {
        iter: core::iter::IntoIterator::into_iter(iter),
    }
}

impl<I> FromStd<I> {
    /// Returns the wrapped standard iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: core::iter::Iterator> Iterator for FromStd<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        core::iter::Iterator::next(&mut self.iter)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        core::iter::Iterator::size_hint(&self.iter).into()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Item> {
        core::iter::Iterator::nth(&mut self.iter, n)
    }
}

impl<I: core::iter::DoubleEndedIterator> DoubleEndedIterator for FromStd<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        core::iter::DoubleEndedIterator::next_back(&mut self.iter)
    }
}

impl<I: core::iter::ExactSizeIterator> ExactSizeIterator for FromStd<I> {
    #[inline]
    fn exact_size_hint(&self) -> usize {
        core::iter::ExactSizeIterator::len(&self.iter)
    }
}

impl<I: core::iter::FusedIterator> FusedIterator for FromStd<I> {}

/// A `core::iter::Iterator` over one of this crate's iterators.
///
/// This `struct` is created by [`Iterator::into_std`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct StdIter<I> {
    iter: I,
}

impl<I> StdIter<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Returns the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator> core::iter::Iterator for StdIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        Iterator::next(&mut self.iter)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        Iterator::size_hint(&self.iter).into()
    }
}

impl<I: DoubleEndedIterator> core::iter::DoubleEndedIterator for StdIter<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        DoubleEndedIterator::next_back(&mut self.iter)
    }
}

impl<I: ExactSizeIterator> core::iter::ExactSizeIterator for StdIter<I> {}

impl<I: FusedIterator> core::iter::FusedIterator for StdIter<I> {}

#[cfg(test)]
mod tests {
    // Imports
    use super::from_std;
    use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};
    use crate::size_hint::SizeHint;
    use alloc::vec::Vec;

    #[test]
    fn test_from_std_carries_capabilities() {
        let mut it = from_std(0..5);
        assert_eq!(it.size_hint(), SizeHint::exact(5));
        assert_eq!(it.exact_size_hint(), 5);
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.nth(1), Some(1));
        assert_eq!(it.into_inner(), 2..4);
    }

    #[test]
    fn test_into_std_in_for_loop() {
        let mut seen = Vec::new();
        for x in from_std([1, 2, 3]).map(|x| x * 2).into_std() {
            seen.push(x);
        }
        assert_eq!(seen, [2, 4, 6]);

        let reversed = core::iter::Iterator::rev(from_std([1, 2, 3]).into_std());
        let back: Vec<i32> = core::iter::Iterator::collect(reversed);
        assert_eq!(back, [3, 2, 1]);
    }

    #[test]
    fn test_into_std_reports_len() {
        let it = from_std([1, 2, 3]).into_std();
        assert_eq!(core::iter::ExactSizeIterator::len(&it), 3);
        assert_eq!(core::iter::Iterator::size_hint(&it), (3, Some(3)));
    }
}

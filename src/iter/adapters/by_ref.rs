// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

/// An iterator that forwards to a mutably borrowed iterator.
///
/// Adaptors built on a `ByRef` consume items from the borrowed iterator,
/// which can be used again once the borrow ends.
///
/// This `struct` is created by [`Iterator::by_ref`].
///
/// ```rust
/// use affine_iter::prelude::*;
/// use affine_iter::iter::from_std;
///
/// let mut it = from_std(1..=6);
/// let head: i32 = it.by_ref().take(3).sum();
/// let tail: i32 = it.sum();
/// assert_eq!((head, tail), (6, 15));
/// ```
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ByRef<'a, I: ?Sized> {
    iter: &'a mut I,
}

impl<'a, I: ?Sized> ByRef<'a, I> {
    pub(crate) fn new(iter: &'a mut I) -> Self {
        Self { iter }
    }
}

impl<I: Iterator + ?Sized> Iterator for ByRef<'_, I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Item> {
        self.iter.nth(n)
    }
}

impl<I: DoubleEndedIterator + ?Sized> DoubleEndedIterator for ByRef<'_, I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.next_back()
    }
}

impl<I: ExactSizeIterator + ?Sized> ExactSizeIterator for ByRef<'_, I> {
    #[inline]
    fn exact_size_hint(&self) -> usize {
        self.iter.exact_size_hint()
    }
}

impl<I: TrustedLen + ?Sized> TrustedLen for ByRef<'_, I> {}
impl<I: FusedIterator + ?Sized> FusedIterator for ByRef<'_, I> {}

// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

/// A double-ended iterator with its ends swapped.
///
/// This `struct` is created by [`Iterator::rev`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Rev<I> {
    iter: I,
}

impl<I> Rev<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: DoubleEndedIterator> Iterator for Rev<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next_back()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<I::Item> {
        self.iter.nth_back(n)
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        self.iter.rfold(init, f)
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Rev<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<I::Item> {
        self.iter.nth(n)
    }

    fn rfold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        self.iter.fold(init, f)
    }
}

impl<I: DoubleEndedIterator + ExactSizeIterator> ExactSizeIterator for Rev<I> {
    #[inline]
    fn exact_size_hint(&self) -> usize {
        self.iter.exact_size_hint()
    }
}

impl<I: DoubleEndedIterator + TrustedLen> TrustedLen for Rev<I> {}
impl<I: DoubleEndedIterator + FusedIterator> FusedIterator for Rev<I> {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{DoubleEndedIterator, Iterator};
    use crate::slice::Slice;
    use alloc::vec::Vec;

    #[test]
    fn test_rev_swaps_ends() {
        let data = [1, 2, 3, 4];
        let v: Vec<&i32> = Slice::new(&data).iter().rev().collect();
        assert_eq!(v, [&4, &3, &2, &1]);

        let data = [1, 2, 3, 4, 5];
        let mut it = Slice::new(&data).iter().rev();
        assert_eq!(it.nth(1), Some(&4));
        assert_eq!(it.next_back(), Some(&1));
        assert_eq!(it.rev().fold(0, |acc, x| acc * 10 + x), 23);
    }
}

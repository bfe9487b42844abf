// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Take`]: stops after at most `n` items.

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

/// An iterator that yields at most `n` items of its inner iterator.
///
/// This `struct` is created by [`Iterator::take`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Take<I> {
    iter: I,
    n: usize,
}

impl<I> Take<I> {
    pub(crate) fn new(iter: I, n: usize) -> Self {
        Self { iter, n }
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.n == 0 {
            return None;
        }
        self.n -= 1;
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        if self.n == 0 {
            return SizeHint::EMPTY;
        }
        self.iter.size_hint().clamp_to(self.n)
    }

    fn nth(&mut self, n: usize) -> Option<I::Item> {
        if self.n > n {
            self.n -= n + 1;
            self.iter.nth(n)
        } else {
            if self.n > 0 {
                self.iter.nth(self.n - 1);
                self.n = 0;
            }
            None
        }
    }
}

impl<I> DoubleEndedIterator for Take<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    fn next_back(&mut self) -> Option<I::Item> {
        if self.n == 0 {
            return None;
        }
        // Items past the first `n` are discarded from the back first.
        let skip = self.iter.exact_size_hint().saturating_sub(self.n);
        self.n -= 1;
        self.iter.nth_back(skip)
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Take<I> {
    #[inline]
    fn exact_size_hint(&self) -> usize {
        self.iter.exact_size_hint().min(self.n)
    }
}

impl<I: TrustedLen> TrustedLen for Take<I> {}
impl<I: FusedIterator> FusedIterator for Take<I> {}

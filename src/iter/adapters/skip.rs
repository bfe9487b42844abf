// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator},
    size_hint::SizeHint,
};

// Core imports
use core::{fmt, mem};

/// An iterator that discards the first `n` items of its inner iterator.
///
/// The discarding happens lazily, on the first call to `next()`.
///
/// This `struct` is created by [`Iterator::skip`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Skip<I> {
    iter: I,
    n: usize,
}

impl<I> Skip<I> {
    pub(crate) fn new(iter: I, n: usize) -> Self {
        Self { iter, n }
    }
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.n > 0 {
            self.iter.nth(mem::take(&mut self.n))
        } else {
            self.iter.next()
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint().saturating_sub(self.n)
    }
}

impl<I> DoubleEndedIterator for Skip<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    fn next_back(&mut self) -> Option<I::Item> {
        if self.exact_size_hint() > 0 {
            self.iter.next_back()
        } else {
            None
        }
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Skip<I> {
    #[inline]
    fn exact_size_hint(&self) -> usize {
        self.iter.exact_size_hint().saturating_sub(self.n)
    }
}

impl<I: FusedIterator> FusedIterator for Skip<I> {}

/// An iterator that discards items while a predicate holds, then yields
/// everything after.
///
/// This `struct` is created by [`Iterator::skip_while`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SkipWhile<I, P> {
    iter: I,
    pred: Option<P>,
}

impl<I, P> SkipWhile<I, P> {
    pub(crate) fn new(iter: I, pred: P) -> Self {
        Self {
            iter,
            pred: Some(pred),
        }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for SkipWhile<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipWhile")
            .field("iter", &self.iter)
            .field("skipping", &self.pred.is_some())
            .finish()
    }
}

impl<I: Iterator, P> Iterator for SkipWhile<I, P>
where
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.pred.take() {
            Some(mut pred) => self.iter.find(|x| !pred(x)),
            None => self.iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        match self.pred {
            Some(_) => self.iter.size_hint().with_zero_lower(),
            None => self.iter.size_hint(),
        }
    }
}

impl<I: FusedIterator, P> FusedIterator for SkipWhile<I, P> where P: FnMut(&I::Item) -> bool {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{from_std, DoubleEndedIterator, ExactSizeIterator, Iterator};
    use crate::size_hint::SizeHint;
    use alloc::vec::Vec;

    #[test]
    fn test_skip_discards_prefix() {
        let v: Vec<i32> = from_std(0..6).skip(4).collect();
        assert_eq!(v, [4, 5]);
        assert_eq!(from_std(0..3).skip(5).next(), None);
        assert_eq!(from_std(0..6).skip(4).size_hint(), SizeHint::exact(2));
    }

    #[test]
    fn test_skip_from_back_never_enters_prefix() {
        let mut it = from_std(0..5).skip(3);
        assert_eq!(it.exact_size_hint(), 2);
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_skip_while_checks_prefix_only() {
        let mut it = from_std([1, 2, 5, 1, 2]).skip_while(|x| *x < 3);
        assert_eq!(it.size_hint(), SizeHint::new(0, Some(5)));
        assert_eq!(it.next(), Some(5));
        assert_eq!(it.size_hint(), SizeHint::exact(2));
        let rest: Vec<i32> = it.collect();
        assert_eq!(rest, [1, 2]);
    }
}

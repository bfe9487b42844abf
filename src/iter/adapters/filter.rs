// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Filter`] and [`FilterMap`]: drop the items a predicate rejects.

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, FusedIterator, Iterator},
    size_hint::SizeHint,
};

// Core imports
use core::fmt;

/// An iterator that yields only the items accepted by a predicate.
///
/// This `struct` is created by [`Iterator::filter`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
    iter: I,
    pred: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(iter: I, pred: P) -> Self {
        Self { iter, pred }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("iter", &self.iter).finish()
    }
}

impl<I: Iterator, P> Iterator for Filter<I, P>
where
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.find(&mut self.pred)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        // The predicate may reject everything.
        self.iter.size_hint().with_zero_lower()
    }
}

impl<I: DoubleEndedIterator, P> DoubleEndedIterator for Filter<I, P>
where
    P: FnMut(&I::Item) -> bool,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.rfind(&mut self.pred)
    }
}

impl<I: FusedIterator, P> FusedIterator for Filter<I, P> where P: FnMut(&I::Item) -> bool {}

/// An iterator that filters and maps in one pass.
///
/// This `struct` is created by [`Iterator::filter_map`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FilterMap<I, F> {
    iter: I,
    f: F,
}

impl<I, F> FilterMap<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self { iter, f }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for FilterMap<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterMap").field("iter", &self.iter).finish()
    }
}

impl<B, I: Iterator, F> Iterator for FilterMap<I, F>
where
    F: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.iter.find_map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint().with_zero_lower()
    }
}

impl<B, I: DoubleEndedIterator, F> DoubleEndedIterator for FilterMap<I, F>
where
    F: FnMut(I::Item) -> Option<B>,
{
    fn next_back(&mut self) -> Option<B> {
        while let Some(x) = self.iter.next_back() {
            if let Some(y) = (self.f)(x) {
                return Some(y);
            }
        }
        None
    }
}

impl<B, I: FusedIterator, F> FusedIterator for FilterMap<I, F> where F: FnMut(I::Item) -> Option<B> {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{from_std, DoubleEndedIterator, Iterator};
    use crate::size_hint::SizeHint;
    use crate::slice::Slice;
    use alloc::vec::Vec;

    #[test]
    fn test_filter_size_hint_only_shrinks() {
        let data = [1, 2, 3, 4, 5];
        let it = Slice::new(&data).iter().filter(|x| **x > 2);
        assert_eq!(it.size_hint(), SizeHint::new(0, Some(5)));
        let kept: Vec<&i32> = it.collect();
        assert_eq!(kept, [&3, &4, &5]);
    }

    #[test]
    fn test_filter_from_back_and_front_meet() {
        let data = [1, 2, 3, 4, 5, 6];
        let mut it = Slice::new(&data).iter().filter(|x| **x % 2 == 0);
        assert_eq!(it.next_back(), Some(&6));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_filter_rejecting_everything() {
        let mut calls = 0;
        let mut it = from_std(0..10).filter(|_| {
            calls += 1;
            false
        });
        assert_eq!(it.next(), None);
        drop(it);
        assert_eq!(calls, 10);
    }

    #[test]
    fn test_filter_map_both_directions() {
        let words = ["1", "two", "3", "four", "5"];
        let mut it = Slice::new(&words).iter().filter_map(|s| s.parse::<i32>().ok());
        assert_eq!(it.size_hint(), SizeHint::new(0, Some(5)));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(5));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), None);
    }
}

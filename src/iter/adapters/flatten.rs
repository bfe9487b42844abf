// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Flatten`] and [`FlatMap`].
//!
//! Both keep one partially drained inner iterator per end. Items already
//! pulled into the back inner iterator are still reachable from the front
//! once the outer iterator runs dry, and vice versa, so mixing `next()` and
//! `next_back()` never loses or repeats an item.

// Crate imports
use crate::{
    iter::{
        adapters::Map, and_then_or_clear, DoubleEndedIterator, FusedIterator, IntoIterator,
        Iterator,
    },
    size_hint::SizeHint,
};

// Core imports
use core::fmt;

/// Shared state machine of [`Flatten`] and [`FlatMap`].
#[derive(Clone, Debug)]
struct FlattenCore<I, U> {
    iter: I,
    front: Option<U>,
    back: Option<U>,
}

impl<I, U> FlattenCore<I, U>
where
    I: Iterator,
    I::Item: IntoIterator<IntoIter = U, Item = U::Item>,
    U: Iterator,
{
    fn new(iter: I) -> Self {
        Self {
            iter,
            front: None,
            back: None,
        }
    }

    fn next(&mut self) -> Option<U::Item> {
        loop {
            if let x @ Some(_) = and_then_or_clear(&mut self.front, Iterator::next) {
                return x;
            }
            match self.iter.next() {
                Some(inner) => self.front = Some(inner.into_iter()),
                None => break,
            }
        }
        // The outer iterator is dry; drain what the back end already holds.
        and_then_or_clear(&mut self.back, Iterator::next)
    }

    fn size_hint(&self) -> SizeHint {
        let front = self.front.as_ref().map_or(SizeHint::EMPTY, Iterator::size_hint);
        let back = self.back.as_ref().map_or(SizeHint::EMPTY, Iterator::size_hint);
        let in_hand = front.saturating_add(back);
        if self.iter.size_hint().upper == Some(0) {
            in_hand
        } else {
            // More outer items may expand into any number of inner items.
            SizeHint::new(in_hand.lower, None)
        }
    }
}

impl<I, U> FlattenCore<I, U>
where
    I: DoubleEndedIterator,
    I::Item: IntoIterator<IntoIter = U, Item = U::Item>,
    U: DoubleEndedIterator,
{
    fn next_back(&mut self) -> Option<U::Item> {
        loop {
            if let x @ Some(_) = and_then_or_clear(&mut self.back, DoubleEndedIterator::next_back) {
                return x;
            }
            match self.iter.next_back() {
                Some(inner) => self.back = Some(inner.into_iter()),
                None => break,
            }
        }
        and_then_or_clear(&mut self.front, DoubleEndedIterator::next_back)
    }
}

/// An iterator that concatenates an iterator of iterables.
///
/// This `struct` is created by [`Iterator::flatten`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    inner: FlattenCore<I, <I::Item as IntoIterator>::IntoIter>,
}

impl<I> Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    pub(crate) fn new(iter: I) -> Self {
        Self {
            inner: FlattenCore::new(iter),
        }
    }
}

impl<I> Clone for Flatten<I>
where
    I: Iterator + Clone,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<I> fmt::Debug for Flatten<I>
where
    I: Iterator + fmt::Debug,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten").field("inner", &self.inner).finish()
    }
}

impl<I> Iterator for Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    type Item = <I::Item as IntoIterator>::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

impl<I> DoubleEndedIterator for Flatten<I>
where
    I: DoubleEndedIterator,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: DoubleEndedIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<I> FusedIterator for Flatten<I>
where
    I: FusedIterator,
    I::Item: IntoIterator,
{
}

/// An iterator that maps each item to an iterable and concatenates them.
///
/// This `struct` is created by [`Iterator::flat_map`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FlatMap<I, U: IntoIterator, F> {
    inner: FlattenCore<Map<I, F>, U::IntoIter>,
}

impl<I, U, F> FlatMap<I, U, F>
where
    I: Iterator,
    U: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self {
            inner: FlattenCore::new(Map::new(iter, f)),
        }
    }
}

impl<I: Clone, U, F: Clone> Clone for FlatMap<I, U, F>
where
    U: IntoIterator,
    U::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<I: fmt::Debug, U, F> fmt::Debug for FlatMap<I, U, F>
where
    U: IntoIterator,
    U::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap").field("inner", &self.inner).finish()
    }
}

impl<I, U, F> Iterator for FlatMap<I, U, F>
where
    I: Iterator,
    U: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U::Item;

    #[inline]
    fn next(&mut self) -> Option<U::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

impl<I, U, F> DoubleEndedIterator for FlatMap<I, U, F>
where
    I: DoubleEndedIterator,
    U: IntoIterator,
    U::IntoIter: DoubleEndedIterator,
    F: FnMut(I::Item) -> U,
{
    #[inline]
    fn next_back(&mut self) -> Option<U::Item> {
        self.inner.next_back()
    }
}

impl<I, U, F> FusedIterator for FlatMap<I, U, F>
where
    I: FusedIterator,
    U: IntoIterator,
    F: FnMut(I::Item) -> U,
{
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{from_std, DoubleEndedIterator, Iterator};
    use crate::size_hint::SizeHint;
    use crate::slice::Slice;
    use alloc::{vec, vec::Vec};

    #[test]
    fn test_flatten_concatenates_and_skips_empties() {
        let nested = vec![vec![1, 2], vec![], vec![3], vec![], vec![4, 5]];
        let flat: Vec<i32> = from_std(nested).map(from_std).flatten().collect();
        assert_eq!(flat, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_flatten_front_and_back_meet_inside_one_inner() {
        let rows = [[1, 2, 3], [4, 5, 6]];
        let mut it = Slice::new(&rows).iter().flatten();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&6));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next_back(), Some(&4));
        // The outer iterator is now empty; the back end falls into the
        // front's partially drained row.
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_flatten_front_reaches_back_reserved_items() {
        let rows = [[1, 2], [3, 4]];
        let mut it = Slice::new(&rows).iter().flatten();
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_flatten_size_hint() {
        let rows = [[1, 2, 3], [4, 5, 6]];
        let mut it = Slice::new(&rows).iter().flatten();
        assert_eq!(it.size_hint(), SizeHint::new(0, None));
        it.next();
        assert_eq!(it.size_hint(), SizeHint::new(2, None));
        it.next_back();
        // Both rows are in hand and the outer iterator is empty.
        assert_eq!(it.size_hint(), SizeHint::exact(4));
    }

    #[test]
    fn test_flat_map_expands_each_item() {
        let out: Vec<u32> = from_std(1..4_u32)
            .flat_map(|n| from_std(0..n))
            .collect();
        assert_eq!(out, [0, 0, 1, 0, 1, 2]);

        let back: Vec<u32> = from_std(1..4_u32)
            .flat_map(|n| from_std(0..n))
            .rev()
            .collect();
        assert_eq!(back, [2, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_flat_map_over_options() {
        let data = ["1", "x", "3"];
        let parsed: Vec<i32> = Slice::new(&data)
            .iter()
            .flat_map(|s| s.parse::<i32>().ok())
            .collect();
        assert_eq!(parsed, [1, 3]);
    }
}

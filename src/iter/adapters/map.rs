// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Map`]: applies a function to each item.

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

// Core imports
use core::fmt;

/// An iterator that applies a closure to every item.
///
/// This `struct` is created by [`Iterator::map`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self { iter, f }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("iter", &self.iter).finish()
    }
}

impl<B, I: Iterator, F> Iterator for Map<I, F>
where
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.iter.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }

    fn fold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, B) -> Acc,
    {
        let mut f = self.f;
        self.iter.fold(init, move |acc, x| g(acc, f(x)))
    }
}

impl<B, I: DoubleEndedIterator, F> DoubleEndedIterator for Map<I, F>
where
    F: FnMut(I::Item) -> B,
{
    #[inline]
    fn next_back(&mut self) -> Option<B> {
        self.iter.next_back().map(&mut self.f)
    }
}

impl<B, I: ExactSizeIterator, F> ExactSizeIterator for Map<I, F>
where
    F: FnMut(I::Item) -> B,
{
    #[inline]
    fn exact_size_hint(&self) -> usize {
        self.iter.exact_size_hint()
    }
}

impl<B, I: TrustedLen, F> TrustedLen for Map<I, F> where F: FnMut(I::Item) -> B {}
impl<B, I: FusedIterator, F> FusedIterator for Map<I, F> where F: FnMut(I::Item) -> B {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{from_std, DoubleEndedIterator, ExactSizeIterator, Iterator};
    use crate::size_hint::SizeHint;
    use crate::slice::Slice;
    use alloc::{string::String, vec::Vec};

    #[test]
    fn test_map_preserves_cardinality() {
        let data = [1, 2, 3, 4];
        let it = Slice::new(&data).iter().map(|x| x * 2);
        assert_eq!(it.size_hint(), SizeHint::exact(4));
        assert_eq!(it.exact_size_hint(), 4);
        assert_eq!(it.count(), Slice::new(&data).iter().count());
    }

    #[test]
    fn test_map_both_ends() {
        let data = [1, 2, 3];
        let mut it = Slice::new(&data).iter().map(|x| x + 100);
        assert_eq!(it.next_back(), Some(103));
        assert_eq!(it.next(), Some(101));
        assert_eq!(it.next_back(), Some(102));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_map_moves_items_out() {
        let words = alloc::vec![String::from("a"), String::from("bc")];
        let lens: Vec<usize> = from_std(words).map(|s| s.len()).collect();
        assert_eq!(lens, [1, 2]);
    }

    #[test]
    fn test_map_fold_calls_closure_in_order() {
        let mut order = Vec::new();
        let sum = from_std([1, 2, 3])
            .map(|x| {
                order.push(x);
                x * 10
            })
            .fold(0, |acc, x| acc + x);
        assert_eq!(sum, 60);
        assert_eq!(order, [1, 2, 3]);
    }
}

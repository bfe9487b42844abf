// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{FusedIterator, Iterator},
    size_hint::SizeHint,
};

// Core imports
use core::fmt;

/// An iterator that yields items while a predicate holds.
///
/// The predicate is dropped the first time it rejects an item (or the inner
/// iterator runs out); from then on the adaptor only returns `None`. The
/// rejected item is consumed.
///
/// This `struct` is created by [`Iterator::take_while`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct TakeWhile<I, P> {
    iter: I,
    pred: Option<P>,
}

impl<I, P> TakeWhile<I, P> {
    pub(crate) fn new(iter: I, pred: P) -> Self {
        Self {
            iter,
            pred: Some(pred),
        }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for TakeWhile<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("iter", &self.iter)
            .field("done", &self.pred.is_none())
            .finish()
    }
}

impl<I: Iterator, P> Iterator for TakeWhile<I, P>
where
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let pred = self.pred.as_mut()?;
        match self.iter.next() {
            Some(x) if pred(&x) => Some(x),
            _ => {
                self.pred = None;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        match self.pred {
            Some(_) => self.iter.size_hint().with_zero_lower(),
            None => SizeHint::EMPTY,
        }
    }
}

impl<I: Iterator, P> FusedIterator for TakeWhile<I, P> where P: FnMut(&I::Item) -> bool {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{from_fn, from_std, Iterator};
    use crate::size_hint::SizeHint;
    use alloc::vec::Vec;

    #[test]
    fn test_take_while_stops_at_first_rejection() {
        let mut it = from_std([1, 2, 5, 1, 2]).take_while(|x| *x < 3);
        assert_eq!(it.size_hint(), SizeHint::new(0, Some(5)));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        // Later items that would pass are never reached.
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), SizeHint::EMPTY);
    }

    #[test]
    fn test_take_while_stays_done_on_resuming_inner() {
        let mut n = 0;
        let taken: Vec<i32> = from_fn(move || {
            n += 1;
            (n != 3).then_some(n)
        })
        .take_while(|_| true)
        .take(10)
        .collect();
        assert_eq!(taken, [1, 2]);
    }
}

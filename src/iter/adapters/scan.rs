// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`MapWhile`] and [`Scan`]: mappings that can end the sequence early.

// Crate imports
use crate::{
    iter::{FusedIterator, Iterator},
    size_hint::SizeHint,
};

// Core imports
use core::fmt;

/// An iterator that maps items until the closure returns `None`.
///
/// After the first `None` the closure is dropped and the adaptor only
/// returns `None`.
///
/// This `struct` is created by [`Iterator::map_while`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct MapWhile<I, P> {
    iter: I,
    f: Option<P>,
}

impl<I, P> MapWhile<I, P> {
    pub(crate) fn new(iter: I, f: P) -> Self {
        Self { iter, f: Some(f) }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for MapWhile<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapWhile").field("iter", &self.iter).finish()
    }
}

impl<B, I: Iterator, P> Iterator for MapWhile<I, P>
where
    P: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        let f = self.f.as_mut()?;
        let out = self.iter.next().and_then(f);
        if out.is_none() {
            self.f = None;
        }
        out
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        match self.f {
            Some(_) => self.iter.size_hint().with_zero_lower(),
            None => SizeHint::EMPTY,
        }
    }
}

impl<B, I: Iterator, P> FusedIterator for MapWhile<I, P> where P: FnMut(I::Item) -> Option<B> {}

/// An iterator that threads mutable state through a mapping.
///
/// This `struct` is created by [`Iterator::scan`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Scan<I, St, F> {
    iter: I,
    state: St,
    f: F,
}

impl<I, St, F> Scan<I, St, F> {
    pub(crate) fn new(iter: I, state: St, f: F) -> Self {
        Self { iter, state, f }
    }
}

impl<I: fmt::Debug, St: fmt::Debug, F> fmt::Debug for Scan<I, St, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scan")
            .field("iter", &self.iter)
            .field("state", &self.state)
            .finish()
    }
}

impl<B, I: Iterator, St, F> Iterator for Scan<I, St, F>
where
    F: FnMut(&mut St, I::Item) -> Option<B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        let item = self.iter.next()?;
        (self.f)(&mut self.state, item)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint().with_zero_lower()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{from_std, Iterator};
    use crate::size_hint::SizeHint;
    use alloc::vec::Vec;

    #[test]
    fn test_map_while_stops_for_good() {
        let mut it = from_std([2, 4, 5, 6]).map_while(|x| (x % 2 == 0).then_some(x / 2));
        assert_eq!(it.size_hint(), SizeHint::new(0, Some(4)));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), SizeHint::EMPTY);
    }

    #[test]
    fn test_scan_running_sum() {
        let sums: Vec<i32> = from_std([1, 2, 3, 4])
            .scan(0, |acc, x| {
                *acc += x;
                Some(*acc)
            })
            .collect();
        assert_eq!(sums, [1, 3, 6, 10]);

        let capped: Vec<i32> = from_std([5, 5, 5])
            .scan(0, |acc, x| {
                *acc += x;
                (*acc <= 10).then_some(*acc)
            })
            .collect();
        assert_eq!(capped, [5, 10]);
    }
}

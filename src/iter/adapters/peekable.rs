// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Peekable`]: one item of lookahead, with the end of input cached too.

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

// Core imports
use core::mem;

/// What a [`Peekable`] has already pulled from its inner iterator.
#[derive(Clone, Debug)]
enum Peeked<T> {
    /// Nothing is cached.
    NotPeeked,
    /// The inner iterator returned `None` when peeked.
    Exhausted,
    /// The inner iterator returned this item when peeked.
    Item(T),
}

/// An iterator with a one-item lookahead.
///
/// At most one item is buffered. A peeked `None` is remembered, so the
/// inner iterator is not polled again until that `None` has been returned
/// by [`next`](Iterator::next).
///
/// This `struct` is created by [`Iterator::peekable`].
///
/// # Examples
///
/// ```rust
/// use affine_iter::prelude::*;
/// use affine_iter::iter::from_std;
///
/// let mut it = from_std([1, 2, 3]).peekable();
/// assert_eq!(it.peek(), Some(&1));
/// assert_eq!(it.next_if(|x| *x > 1), None);
/// assert_eq!(it.next_if_eq(&1), Some(1));
/// assert_eq!(it.next(), Some(2));
/// ```
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Peekable<I: Iterator> {
    iter: I,
    peeked: Peeked<I::Item>,
}

impl<I: Iterator> Peekable<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            peeked: Peeked::NotPeeked,
        }
    }

    fn fill(&mut self) {
        if let Peeked::NotPeeked = self.peeked {
            self.peeked = match self.iter.next() {
                Some(x) => Peeked::Item(x),
                None => Peeked::Exhausted,
            };
        }
    }

    /// Returns a reference to the next item without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.fill();
        match &self.peeked {
            Peeked::Item(x) => Some(x),
            Peeked::NotPeeked | Peeked::Exhausted => None,
        }
    }

    /// Returns a mutable reference to the next item without consuming it.
    ///
    /// Changes made through the reference are seen by the next call to
    /// [`next`](Iterator::next).
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut I::Item> {
        self.fill();
        match &mut self.peeked {
            Peeked::Item(x) => Some(x),
            Peeked::NotPeeked | Peeked::Exhausted => None,
        }
    }

    /// Consumes and returns the next item if `pred` accepts it.
    ///
    /// A rejected item stays buffered and is returned by the next call to
    /// [`next`](Iterator::next).
    pub fn next_if<P>(&mut self, pred: P) -> Option<I::Item>
    where
        P: FnOnce(&I::Item) -> bool,
    {
        match self.next() {
            Some(x) if pred(&x) => Some(x),
            Some(x) => {
                self.peeked = Peeked::Item(x);
                None
            }
            None => {
                self.peeked = Peeked::Exhausted;
                None
            }
        }
    }

    /// Consumes and returns the next item if it equals `expected`.
    #[inline]
    pub fn next_if_eq<T>(&mut self, expected: &T) -> Option<I::Item>
    where
        T: ?Sized,
        I::Item: PartialEq<T>,
    {
        self.next_if(|x| x == expected)
    }
}

impl<I: Iterator> Iterator for Peekable<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        match mem::replace(&mut self.peeked, Peeked::NotPeeked) {
            Peeked::Item(x) => Some(x),
            Peeked::Exhausted => None,
            Peeked::NotPeeked => self.iter.next(),
        }
    }

    fn size_hint(&self) -> SizeHint {
        match self.peeked {
            Peeked::NotPeeked => self.iter.size_hint(),
            Peeked::Exhausted => SizeHint::EMPTY,
            Peeked::Item(_) => self.iter.size_hint().saturating_add(SizeHint::exact(1)),
        }
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Peekable<I> {
    fn next_back(&mut self) -> Option<I::Item> {
        match self.peeked {
            Peeked::NotPeeked => self.iter.next_back(),
            Peeked::Exhausted => None,
            Peeked::Item(_) => match self.iter.next_back() {
                Some(x) => Some(x),
                // The buffered front item is the last one left.
                None => match mem::replace(&mut self.peeked, Peeked::Exhausted) {
                    Peeked::Item(x) => Some(x),
                    Peeked::NotPeeked | Peeked::Exhausted => None,
                },
            },
        }
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Peekable<I> {
    fn exact_size_hint(&self) -> usize {
        match self.peeked {
            Peeked::NotPeeked => self.iter.exact_size_hint(),
            Peeked::Exhausted => 0,
            Peeked::Item(_) => self.iter.exact_size_hint() + 1,
        }
    }
}

impl<I: TrustedLen> TrustedLen for Peekable<I> {}
impl<I: FusedIterator> FusedIterator for Peekable<I> {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{from_fn, from_std, DoubleEndedIterator, ExactSizeIterator, Iterator};
    use crate::size_hint::SizeHint;
    use crate::slice::Slice;

    #[test]
    fn test_peek_does_not_consume() {
        let data = [1, 2, 3];
        let mut it = Slice::new(&data).iter().peekable();
        let before = it.size_hint();
        for _ in 0..5 {
            assert_eq!(it.peek(), Some(&&1));
        }
        assert_eq!(it.size_hint(), before);
        assert_eq!(it.exact_size_hint(), 3);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.size_hint(), SizeHint::exact(2));
    }

    #[test]
    fn test_peek_mut_changes_next_item() {
        let mut it = from_std([1, 2]).peekable();
        if let Some(x) = it.peek_mut() {
            *x = 10;
        }
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.peek_mut(), None);
    }

    #[test]
    fn test_peeked_exhaustion_is_remembered() {
        // Resumes after its first `None`.
        let mut n = 0;
        let mut it = from_fn(move || {
            n += 1;
            (n != 2).then_some(n)
        })
        .peekable();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.peek(), None);
        assert_eq!(it.peek(), None);
        assert_eq!(it.size_hint(), SizeHint::EMPTY);
        // The cached `None` is handed out once, then polling resumes.
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), Some(3));
    }

    #[test]
    fn test_next_if_leaves_rejected_item() {
        let mut it = from_std([1, 2, 3]).peekable();
        assert_eq!(it.next_if(|x| *x == 1), Some(1));
        assert_eq!(it.next_if(|x| *x == 5), None);
        assert_eq!(it.next_if_eq(&2), Some(2));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next_if(|_| true), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_next_back_does_not_skip_peeked_item() {
        let data = [1, 2, 3];
        let mut it = Slice::new(&data).iter().peekable();
        assert_eq!(it.peek(), Some(&&1));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next_back(), Some(&2));
        assert_eq!(it.next_back(), Some(&1));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }
}

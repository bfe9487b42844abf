// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{and_then_or_clear, DoubleEndedIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

/// An iterator that yields the items of one iterator and then another.
///
/// Each half is held in an `Option` and dropped once it is exhausted from
/// the end it is consumed from: the first half going forward, the second
/// half going backward. Mixing directions can clear both.
///
/// There is no [`ExactSizeIterator`](crate::iter::ExactSizeIterator) impl
/// since the combined length can overflow `usize`.
///
/// This `struct` is created by [`Iterator::chain`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<A, B> {
    a: Option<A>,
    b: Option<B>,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
        }
    }
}

impl<A, B> Iterator for Chain<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        and_then_or_clear(&mut self.a, Iterator::next).or_else(|| self.b.as_mut()?.next())
    }

    fn size_hint(&self) -> SizeHint {
        match (&self.a, &self.b) {
            (Some(a), Some(b)) => a.size_hint().saturating_add(b.size_hint()),
            (Some(a), None) => a.size_hint(),
            (None, Some(b)) => b.size_hint(),
            (None, None) => SizeHint::EMPTY,
        }
    }
}

impl<A, B> DoubleEndedIterator for Chain<A, B>
where
    A: DoubleEndedIterator,
    B: DoubleEndedIterator<Item = A::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<A::Item> {
        and_then_or_clear(&mut self.b, DoubleEndedIterator::next_back)
            .or_else(|| self.a.as_mut()?.next_back())
    }
}

impl<A, B> TrustedLen for Chain<A, B>
where
    A: TrustedLen,
    B: TrustedLen<Item = A::Item>,
{
}

impl<A, B> FusedIterator for Chain<A, B>
where
    A: FusedIterator,
    B: FusedIterator<Item = A::Item>,
{
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{empty, from_std, once, repeat, DoubleEndedIterator, Iterator};
    use crate::size_hint::SizeHint;
    use alloc::vec::Vec;

    #[test]
    fn test_chain_forward_and_backward() {
        let v: Vec<i32> = from_std([1, 2]).chain(from_std([3, 4])).collect();
        assert_eq!(v, [1, 2, 3, 4]);
        let r: Vec<i32> = from_std([1, 2]).chain(from_std([3, 4])).rev().collect();
        assert_eq!(r, [4, 3, 2, 1]);
    }

    #[test]
    fn test_chain_mixed_directions_meet_in_first_half() {
        let mut it = from_std([1, 2, 3]).chain(once(4));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_chain_size_hint() {
        let it = from_std([1, 2]).chain(from_std([3]));
        assert_eq!(it.size_hint(), SizeHint::exact(3));
        let endless = empty::<i32>().chain(repeat(1));
        assert_eq!(endless.size_hint(), SizeHint::new(usize::MAX, None));
        let mut done = empty::<i32>().chain(empty());
        assert_eq!(done.next(), None);
        assert_eq!(done.size_hint(), SizeHint::EMPTY);
    }
}

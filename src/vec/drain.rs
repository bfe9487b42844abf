// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
    slice::resolve_range,
    vec::Vec,
};

// Alloc imports
use alloc::vec::Drain as AllocDrain;

// Core imports
use core::{fmt, ops::RangeBounds};

/// Iterator returned by [`Vec::drain`].
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - The drained range is gone from the vector once the iterator is
///   dropped, whether or not every item was consumed.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Drain<'a, T> {
    iter: AllocDrain<'a, T>,
}

impl<T> Drain<'_, T> {
    /// Returns the drained elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.iter.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.as_slice()).finish()
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        core::iter::Iterator::next(&mut self.iter)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.iter.as_slice().len())
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        core::iter::Iterator::nth(&mut self.iter, n)
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        core::iter::DoubleEndedIterator::next_back(&mut self.iter)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<T> {
        core::iter::DoubleEndedIterator::nth_back(&mut self.iter, n)
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> TrustedLen for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Vec<T> {
    /// Removes the elements in `range` and returns them as an iterator.
    ///
    /// The tail of the vector is shifted left to fill the gap. `start ==
    /// end` is allowed and produces an empty iterator.
    ///
    /// # Panics
    ///
    /// Panics if the range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    ///
    /// # Examples
    /// ```
    /// # use affine_iter::prelude::*;
    /// # use affine_iter::Vec;
    /// let mut v = Vec::from([1, 2, 3, 4]);
    /// let drained: Vec<_> = v.drain(1..3).collect();
    /// assert_eq!(drained.as_slice(), &[2, 3]);
    /// assert_eq!(v.as_slice(), &[1, 4]);
    /// ```
    #[track_caller]
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = resolve_range(range, self.len(), "drain");
        Drain {
            iter: self.buf.drain(start..end),
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{DoubleEndedIterator, Iterator};
    use crate::{SizeHint, Vec};
    use core::ops::{Bound, RangeBounds};

    #[test]
    fn test_drain_middle_range() {
        let mut v = Vec::from([1, 2, 3, 4, 5]);
        let drained: Vec<i32> = v.drain(1..4).collect();
        assert_eq!(drained.as_slice(), &[2, 3, 4]);
        assert_eq!(v.as_slice(), &[1, 5]);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_drain_full_range() {
        let mut v = Vec::from([10, 20, 30, 40]);
        let drained: Vec<i32> = v.drain(..).collect();
        assert_eq!(drained.as_slice(), &[10, 20, 30, 40]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_drain_empty_range_is_noop_on_data() {
        let mut v = Vec::from([1, 2, 3, 4, 5]);
        let drained: Vec<i32> = v.drain(2..2).collect();
        assert!(drained.is_empty());
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_drain_prefix_and_suffix() {
        let mut v = Vec::from([1, 2, 3, 4, 5]);
        let prefix: Vec<i32> = v.drain(..2).collect();
        assert_eq!(prefix.as_slice(), &[1, 2]);
        assert_eq!(v.as_slice(), &[3, 4, 5]);

        let suffix: Vec<i32> = v.drain(1..).collect();
        assert_eq!(suffix.as_slice(), &[4, 5]);
        assert_eq!(v.as_slice(), &[3]);
    }

    #[test]
    fn test_drain_double_ended_iteration() {
        let mut v = Vec::from([1, 2, 3, 4, 5]);
        {
            let mut it = v.drain(1..4);
            assert_eq!(it.next_back(), Some(4));
            assert_eq!(it.next(), Some(2));
            assert_eq!(it.next(), Some(3));
            assert_eq!(it.next_back(), None);
        }
        assert_eq!(v.as_slice(), &[1, 5]);
    }

    #[test]
    fn test_drain_size_hint_tracks_consumption() {
        let mut v = Vec::from([1, 2, 3, 4, 5]);
        {
            let mut it = v.drain(1..4);
            assert_eq!(it.size_hint(), SizeHint::exact(3));
            assert_eq!(it.next(), Some(2));
            assert_eq!(it.size_hint(), SizeHint::exact(2));
            assert_eq!(it.next_back(), Some(4));
            assert_eq!(it.as_slice(), &[3]);
            assert_eq!(it.next(), Some(3));
            assert_eq!(it.size_hint(), SizeHint::EMPTY);
            assert_eq!(it.next(), None);
        }
        assert_eq!(v.as_slice(), &[1, 5]);
    }

    #[test]
    fn test_drain_dropped_early_still_removes_range() {
        let mut v = Vec::from([1, 2, 3, 4, 5]);
        let mut it = v.drain(1..4);
        assert_eq!(it.next(), Some(2));
        drop(it);
        assert_eq!(v.as_slice(), &[1, 5]);
    }

    #[test]
    fn test_drain_nth_and_nth_back() {
        let mut v = Vec::from([1, 2, 3, 4, 5, 6]);
        let mut it = v.drain(..);
        assert_eq!(it.nth(1), Some(2));
        assert_eq!(it.nth_back(1), Some(5));
        assert_eq!(it.nth(5), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    #[should_panic(expected = "drain range end 10 exceeds length 4")]
    fn test_drain_end_out_of_bounds_panics() {
        let mut v = Vec::from([1, 2, 3, 4]);
        let _ = v.drain(2..10);
    }

    #[test]
    #[should_panic(expected = "drain range start > end: 3 > 1")]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_drain_start_greater_than_end_panics() {
        let mut v = Vec::from([1, 2, 3, 4]);
        let _ = v.drain(3..1);
    }

    #[test]
    fn test_drain_inclusive_end_and_excluded_start() {
        let mut v = Vec::from([1, 2, 3, 4, 5]);
        let drained: Vec<i32> = v.drain(1..=2).collect();
        assert_eq!(drained.as_slice(), &[2, 3]);

        struct ExcludedStart;
        impl RangeBounds<usize> for ExcludedStart {
            fn start_bound(&self) -> Bound<&usize> {
                Bound::Excluded(&0)
            }
            fn end_bound(&self) -> Bound<&usize> {
                Bound::Unbounded
            }
        }
        let drained: Vec<i32> = v.drain(ExcludedStart).collect();
        assert_eq!(drained.as_slice(), &[4, 5]);
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn test_drain_zst() {
        let mut v = Vec::from([(), (), (), ()]);
        let drained: Vec<()> = v.drain(1..3).collect();
        assert_eq!(drained.len(), 2);
        assert_eq!(v.len(), 2);
    }
}

// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

// Alloc imports
use alloc::vec::{IntoIter as AllocIntoIter, Vec as AllocVec};

// Core imports
use core::fmt;

/// Owned iterator returned by `Vec::into_iter()`.
///
/// Yields the elements by value from front to back, and from the back via
/// [`DoubleEndedIterator`]. Elements not yielded are dropped with the
/// iterator.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    iter: AllocIntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: AllocVec<T>) -> Self {
        Self {
            iter: core::iter::IntoIterator::into_iter(buf),
        }
    }

    /// Returns the elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.iter.as_slice()
    }

    /// Returns the elements not yet yielded, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.iter.as_mut_slice()
    }
}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        Self::new(self.as_slice().to_vec())
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
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

    #[inline]
    fn count(self) -> usize {
        self.iter.as_slice().len()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        core::iter::DoubleEndedIterator::next_back(&mut self.iter)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<T> {
        core::iter::DoubleEndedIterator::nth_back(&mut self.iter, n)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> TrustedLen for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{DoubleEndedIterator, ExactSizeIterator, IntoIterator, Iterator};
    use crate::{SizeHint, Vec};
    use alloc::string::{String, ToString};

    #[test]
    fn test_double_ended_and_nth() {
        let v = Vec::from([10, 20, 30, 40]);
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.nth(1), Some(30));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iter_nth_back_sequence() {
        let v = Vec::from([1, 2, 3, 4, 5]);
        let mut it = v.into_iter();
        assert_eq!(it.nth_back(0), Some(5));
        assert_eq!(it.nth_back(1), Some(3));
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let v = Vec::from([10, 20, 30, 40]);
        let mut it = v.into_iter();
        assert_eq!(it.size_hint(), SizeHint::exact(4));
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.exact_size_hint(), 3);
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.as_slice(), &[20, 30]);
        assert_eq!(it.nth(0), Some(20));
        assert_eq!(it.size_hint(), SizeHint::exact(1));
        assert_eq!(it.next(), Some(30));
        assert!(it.is_empty());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_nth_past_the_end_exhausts() {
        let v = Vec::from([1, 2, 3]);
        let mut it = v.into_iter();
        assert_eq!(it.nth(3), None);
        assert_eq!(it.next_back(), None);

        let mut it = Vec::from([1, 2, 3]).into_iter();
        assert_eq!(it.nth_back(usize::MAX), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_owned_items_and_partial_drop() {
        let v = Vec::from([String::from("a"), "b".to_string(), "c".to_string()]);
        let mut it = v.into_iter();
        assert_eq!(it.next().as_deref(), Some("a"));
        let rest = it.clone();
        assert_eq!(rest.count(), 2);
        // The remaining two strings are dropped with `it`.
        drop(it);
    }
}

// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

// Core imports
use core::{fmt, mem};

/// An iterator over shared references to the elements of a slice.
///
/// Created by [`Slice::iter`](crate::Slice::iter) or by iterating a `&[T]`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SliceIter<'a, T> {
    v: &'a [T],
}

impl<'a, T> SliceIter<'a, T> {
    pub(crate) fn new(v: &'a [T]) -> Self {
        Self { v }
    }

    /// Returns the elements not yet yielded from either end.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.v
    }
}

impl<T> Clone for SliceIter<'_, T> {
    fn clone(&self) -> Self {
        Self { v: self.v }
    }
}

impl<T> Default for SliceIter<'_, T> {
    fn default() -> Self {
        Self { v: &[] }
    }
}

impl<T: fmt::Debug> fmt::Debug for SliceIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SliceIter").field(&self.v).finish()
    }
}

impl<'a, T> Iterator for SliceIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let (first, rest) = self.v.split_first()?;
        self.v = rest;
        Some(first)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.v.len())
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.v.len() {
            self.v = &[];
            None
        } else {
            let item = &self.v[n];
            self.v = &self.v[n + 1..];
            Some(item)
        }
    }

    #[inline]
    fn count(self) -> usize {
        self.v.len()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.v.last()
    }
}

impl<'a, T> DoubleEndedIterator for SliceIter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        let (last, rest) = self.v.split_last()?;
        self.v = rest;
        Some(last)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.v.len() {
            self.v = &[];
            None
        } else {
            let end = self.v.len() - 1 - n;
            let item = &self.v[end];
            self.v = &self.v[..end];
            Some(item)
        }
    }
}

impl<T> ExactSizeIterator for SliceIter<'_, T> {
    #[inline]
    fn exact_size_hint(&self) -> usize {
        self.v.len()
    }
}

impl<T> TrustedLen for SliceIter<'_, T> {}
impl<T> FusedIterator for SliceIter<'_, T> {}

/// An iterator over mutable references to the elements of a slice.
///
/// Created by [`SliceMut::iter_mut`](crate::SliceMut::iter_mut) or by
/// iterating a `&mut [T]`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SliceIterMut<'a, T> {
    v: &'a mut [T],
}

impl<'a, T> SliceIterMut<'a, T> {
    pub(crate) fn new(v: &'a mut [T]) -> Self {
        Self { v }
    }

    /// Returns the elements not yet yielded from either end.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.v
    }

    /// Returns the elements not yet yielded, for the iterator's full
    /// lifetime.
    #[inline]
    pub fn into_slice(self) -> &'a mut [T] {
        self.v
    }
}

impl<T> Default for SliceIterMut<'_, T> {
    fn default() -> Self {
        Self { v: &mut [] }
    }
}

impl<T: fmt::Debug> fmt::Debug for SliceIterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SliceIterMut").field(&self.v).finish()
    }
}

impl<'a, T> Iterator for SliceIterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        let (first, rest) = mem::take(&mut self.v).split_first_mut()?;
        self.v = rest;
        Some(first)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.v.len())
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a mut T> {
        let v = mem::take(&mut self.v);
        if n >= v.len() {
            return None;
        }
        let (item, rest) = v[n..].split_first_mut()?;
        self.v = rest;
        Some(item)
    }

    #[inline]
    fn count(self) -> usize {
        self.v.len()
    }
}

impl<'a, T> DoubleEndedIterator for SliceIterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        let (last, rest) = mem::take(&mut self.v).split_last_mut()?;
        self.v = rest;
        Some(last)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a mut T> {
        let v = mem::take(&mut self.v);
        if n >= v.len() {
            return None;
        }
        let end = v.len() - n;
        let (item, rest) = v[..end].split_last_mut()?;
        self.v = rest;
        Some(item)
    }
}

impl<T> ExactSizeIterator for SliceIterMut<'_, T> {
    #[inline]
    fn exact_size_hint(&self) -> usize {
        self.v.len()
    }
}

impl<T> TrustedLen for SliceIterMut<'_, T> {}
impl<T> FusedIterator for SliceIterMut<'_, T> {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};
    use crate::size_hint::SizeHint;
    use crate::slice::{Slice, SliceMut};

    #[test]
    fn test_slice_iter_both_ends_never_cross() {
        let data = [1, 2, 3, 4, 5];
        let mut it = Slice::new(&data).iter();
        assert_eq!(it.exact_size_hint(), 5);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.as_slice(), &[2, 3, 4]);
        assert_eq!(it.size_hint(), SizeHint::exact(3));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
        assert!(it.is_empty());
    }

    #[test]
    fn test_slice_iter_nth_and_nth_back() {
        let data = [1, 2, 3, 4, 5];
        let mut it = Slice::new(&data).iter();
        assert_eq!(it.nth(1), Some(&2));
        assert_eq!(it.nth_back(1), Some(&4));
        assert_eq!(it.as_slice(), &[3]);
        assert_eq!(it.nth(1), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_slice_iter_empty() {
        let data: [u8; 0] = [];
        let mut it = Slice::new(&data).iter();
        assert_eq!(it.size_hint(), SizeHint::EMPTY);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_slice_iter_mut_writes_through() {
        let mut data = [1, 2, 3, 4];
        let mut it = SliceMut::new(&mut data).iter_mut();
        if let Some(x) = it.next() {
            *x = 10;
        }
        if let Some(x) = it.next_back() {
            *x = 40;
        }
        assert_eq!(it.as_slice(), &[2, 3]);
        if let Some(x) = it.nth(1) {
            *x = 30;
        }
        assert_eq!(it.next(), None);
        assert_eq!(data, [10, 2, 30, 40]);
    }

    #[test]
    fn test_slice_iter_mut_nth_back_and_into_slice() {
        let mut data = [1, 2, 3, 4, 5];
        let mut it = SliceMut::new(&mut data).iter_mut();
        assert_eq!(it.nth_back(1).map(|x| *x), Some(4));
        assert_eq!(it.nth_back(9), None);
        assert!(it.into_slice().is_empty());
    }
}

// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

// Core imports
use core::fmt;

/// An iterator over every overlapping window of `size` elements.
///
/// A slice shorter than `size` has no windows.
///
/// This `struct` is created by [`Slice::windows`](crate::Slice::windows).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Windows<'a, T> {
    v: &'a [T],
    size: usize,
}

impl<'a, T> Windows<'a, T> {
    #[track_caller]
    pub(crate) fn new(v: &'a [T], size: usize) -> Self {
        assert!(size != 0, "window size must be non-zero");
        Self { v, size }
    }
}

impl<T> Clone for Windows<'_, T> {
    fn clone(&self) -> Self {
        Self {
            v: self.v,
            size: self.size,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Windows<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Windows")
            .field("v", &self.v)
            .field("size", &self.size)
            .finish()
    }
}

impl<'a, T> Iterator for Windows<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<&'a [T]> {
        if self.size > self.v.len() {
            return None;
        }
        let window = &self.v[..self.size];
        debug_assert_eq!(window.len(), self.size);
        self.v = &self.v[1..];
        Some(window)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.v.len().checked_sub(self.size).map_or(0, |n| n + 1))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a [T]> {
        match n.checked_add(self.size) {
            Some(end) if end <= self.v.len() => {
                let window = &self.v[n..end];
                self.v = &self.v[n + 1..];
                Some(window)
            }
            _ => {
                self.v = &[];
                None
            }
        }
    }

    #[inline]
    fn last(self) -> Option<&'a [T]> {
        let start = self.v.len().checked_sub(self.size)?;
        Some(&self.v[start..])
    }
}

impl<'a, T> DoubleEndedIterator for Windows<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a [T]> {
        let start = self.v.len().checked_sub(self.size)?;
        let window = &self.v[start..];
        debug_assert_eq!(window.len(), self.size);
        self.v = &self.v[..self.v.len() - 1];
        Some(window)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a [T]> {
        match self.v.len().checked_sub(n) {
            Some(end) if end >= self.size => {
                let window = &self.v[end - self.size..end];
                self.v = &self.v[..end - 1];
                Some(window)
            }
            _ => {
                self.v = &[];
                None
            }
        }
    }
}

impl<T> ExactSizeIterator for Windows<'_, T> {
    #[inline]
    fn exact_size_hint(&self) -> usize {
        self.size_hint().lower
    }
}

impl<T> TrustedLen for Windows<'_, T> {}
impl<T> FusedIterator for Windows<'_, T> {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};
    use crate::slice::Slice;
    use alloc::vec::Vec;

    #[test]
    fn test_windows_overlap() {
        let data = [1, 2, 3, 4];
        let s = Slice::new(&data);
        let v: Vec<&[i32]> = s.windows(2).collect();
        assert_eq!(v, [&[1, 2][..], &[2, 3], &[3, 4]]);
        let v: Vec<&[i32]> = s.windows(2).rev().collect();
        assert_eq!(v, [&[3, 4][..], &[2, 3], &[1, 2]]);
        assert_eq!(s.windows(3).last(), Some(&[2, 3, 4][..]));
    }

    #[test]
    fn test_windows_size_boundaries() {
        let data = [1, 2, 3];
        let s = Slice::new(&data);

        let mut it = s.windows(3);
        assert_eq!(it.exact_size_hint(), 1);
        assert_eq!(it.next(), Some(&[1, 2, 3][..]));
        assert_eq!(it.next(), None);

        let mut it = s.windows(4);
        assert_eq!(it.exact_size_hint(), 0);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        assert_eq!(s.windows(4).last(), None);
    }

    #[test]
    fn test_windows_nth_from_both_ends() {
        let data = [1, 2, 3, 4, 5, 6];
        let mut it = Slice::new(&data).windows(2);
        assert_eq!(it.nth(1), Some(&[2, 3][..]));
        assert_eq!(it.nth_back(1), Some(&[4, 5][..]));
        assert_eq!(it.exact_size_hint(), 1);
        assert_eq!(it.next(), Some(&[3, 4][..]));
        assert_eq!(it.nth_back(0), None);
    }

    #[test]
    fn test_windows_spanning_whole_slice() {
        let data = [1, 2, 3];
        let s = Slice::new(&data);

        let mut it = s.windows(3);
        assert_eq!(it.next_back(), Some(&data[..]));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);

        let mut it = s.windows(1);
        assert_eq!(it.next_back(), Some(&[3][..]));
        assert_eq!(it.next(), Some(&[1][..]));
        assert_eq!(it.next(), Some(&[2][..]));
        assert_eq!(it.next_back(), None);

        let mut it = s.windows(4);
        assert_eq!(it.nth(0), None);
        assert_eq!(it.nth_back(0), None);

        let empty: [i32; 0] = [];
        assert_eq!(Slice::new(&empty).windows(1).next(), None);
    }

    #[test]
    #[should_panic(expected = "window size must be non-zero")]
    fn test_zero_window_size_panics() {
        let data = [1, 2, 3];
        let _ = Slice::new(&data).windows(0);
    }
}

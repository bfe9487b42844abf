// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed-length [`Array`] container.
//!
//! `Array<T, N>` always holds exactly `N` initialized elements, stored
//! inline. Building one from an iterator is fallible: the iterator must
//! yield exactly `N` items.

// Crate imports
use crate::{
    error::Error,
    iter::{
        DoubleEndedIterator, ExactSizeIterator, FusedIterator, IntoIterator, Iterator, TrustedLen,
    },
    size_hint::SizeHint,
    slice::{Slice, SliceIter, SliceIterMut, SliceMut},
};

// Alloc imports
use alloc::vec::Vec as AllocVec;

// Core imports
use core::{array, fmt};

/// A fixed-length, inline sequence of exactly `N` `T`s.
///
/// # Examples
///
/// ```rust
/// use affine_iter::prelude::*;
/// use affine_iter::{Array, Error};
///
/// let squares: Array<u32, 4> = Array::from_fn(|i| (i * i) as u32);
/// assert_eq!(squares.as_slice(), &[0, 1, 4, 9]);
///
/// let evens = Array::<u32, 3>::try_from_iter(squares.iter().copied().filter(|x| x % 2 == 0));
/// assert_eq!(evens, Err(Error::InvalidLen));
///
/// let total: u32 = squares.into_iter().sum();
/// assert_eq!(total, 14);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Array<T, const N: usize> {
    buf: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    /// Wraps `buf`.
    #[inline]
    pub const fn new(buf: [T; N]) -> Self {
        Self { buf }
    }

    /// Builds the array by calling `f` with each index in order.
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            buf: array::from_fn(f),
        }
    }

    /// Builds the array from the first `N` items of `iter`.
    ///
    /// Returns [`Error::InvalidLen`] if `iter` runs out before `N` items, and
    /// [`Error::Full`] if it has an `N + 1`-th item. At most `N + 1` items
    /// are pulled.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let mut items = AllocVec::with_capacity(N);
        while items.len() < N {
            match iter.next() {
                Some(x) => items.push(x),
                None => return Err(Error::InvalidLen),
            }
        }
        if iter.next().is_some() {
            return Err(Error::Full);
        }
        let buf = <[T; N]>::try_from(items).map_err(|_| Error::InvalidLen)?;
        Ok(Self { buf })
    }

    /// Returns `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns `Some(&T)` if `index < N`, otherwise `None`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Returns `Some(&mut T)` if `index < N`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Returns a shared [`Slice`] view.
    #[inline]
    pub fn slice(&self) -> Slice<'_, T> {
        Slice::new(&self.buf)
    }

    /// Returns an exclusive [`SliceMut`] view.
    #[inline]
    pub fn slice_mut(&mut self) -> SliceMut<'_, T> {
        SliceMut::new(&mut self.buf)
    }

    #[inline]
    pub fn iter(&self) -> SliceIter<'_, T> {
        SliceIter::new(&self.buf)
    }

    #[inline]
    pub fn iter_mut(&mut self) -> SliceIterMut<'_, T> {
        SliceIterMut::new(&mut self.buf)
    }

    /// Unwraps the underlying array.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.buf
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Array<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.buf, f)
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(buf: [T; N]) -> Self {
        Self { buf }
    }
}

impl<T, const N: usize> AsRef<[T]> for Array<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for Array<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Owned iterator returned by `Array::into_iter()`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoIter<T, const N: usize> {
    iter: array::IntoIter<T, N>,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.iter.as_slice()
    }
}

impl<T: Clone, const N: usize> Clone for IntoIter<T, N> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
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

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        core::iter::DoubleEndedIterator::next_back(&mut self.iter)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<T> {
        core::iter::DoubleEndedIterator::nth_back(&mut self.iter, n)
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}
impl<T, const N: usize> TrustedLen for IntoIter<T, N> {}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> IntoIter<T, N> {
        IntoIter {
            iter: core::iter::IntoIterator::into_iter(self.buf),
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = SliceIter<'a, T>;

    #[inline]
    fn into_iter(self) -> SliceIter<'a, T> {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
    type Item = &'a mut T;
    type IntoIter = SliceIterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> SliceIterMut<'a, T> {
        self.iter_mut()
    }
}

// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions into iterators and collecting out of them.
//!
//! [`IntoIterator`] is the entry point used by adaptors that accept "anything
//! iterable" ([`zip`](crate::iter::Iterator::zip),
//! [`chain`](crate::iter::Iterator::chain), [`flatten`](crate::iter::Iterator::flatten)).
//! [`FromIterator`] is the capability [`collect`](crate::iter::Iterator::collect)
//! forwards to.

// Crate imports
use crate::{
    iter::{sources::Once, Iterator},
    size_hint::SizeHint,
    slice::{SliceIter, SliceIterMut},
};

// Alloc imports
use alloc::{string::String, vec::Vec as AllocVec};

/// Conversion into an [`Iterator`].
///
/// Every iterator converts into itself.
pub trait IntoIterator {
    /// The type of the elements being iterated over.
    type Item;
    /// The iterator this value turns into.
    type IntoIter: Iterator<Item = Self::Item>;

    /// Creates an iterator from a value.
    fn into_iter(self) -> Self::IntoIter;
}

impl<I: Iterator> IntoIterator for I {
    type Item = I::Item;
    type IntoIter = I;

    #[inline]
    fn into_iter(self) -> I {
        self
    }
}

/// Building a collection by draining an iterator.
///
/// Implementations should use `size_hint().lower` only as a reservation
/// hint, and keep accepting items past it.
pub trait FromIterator<A>: Sized {
    /// Creates a value from an iterator, consuming all of it.
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self;
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = Once<T>;

    #[inline]
    fn into_iter(self) -> Once<T> {
        Once::from_option(self)
    }
}

impl<'a, T> IntoIterator for &'a [T] {
    type Item = &'a T;
    type IntoIter = SliceIter<'a, T>;

    #[inline]
    fn into_iter(self) -> SliceIter<'a, T> {
        SliceIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a mut [T] {
    type Item = &'a mut T;
    type IntoIter = SliceIterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> SliceIterMut<'a, T> {
        SliceIterMut::new(self)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a [T; N] {
    type Item = &'a T;
    type IntoIter = SliceIter<'a, T>;

    #[inline]
    fn into_iter(self) -> SliceIter<'a, T> {
        SliceIter::new(self)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut [T; N] {
    type Item = &'a mut T;
    type IntoIter = SliceIterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> SliceIterMut<'a, T> {
        SliceIterMut::new(self)
    }
}

impl<T> FromIterator<T> for AllocVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut iter = iter.into_iter();
        let mut out = AllocVec::with_capacity(iter.size_hint().lower);
        while let Some(x) = iter.next() {
            out.push(x);
        }
        out
    }
}

impl FromIterator<char> for String {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut iter = iter.into_iter();
        let mut out = String::with_capacity(iter.size_hint().lower);
        while let Some(c) = iter.next() {
            out.push(c);
        }
        out
    }
}

/// Yields the `Ok` values of `iter` and parks the first `Err` in `residual`.
///
/// Ends, and stays ended, as soon as an error is seen.
struct ResultShunt<'r, I, E> {
    iter: I,
    residual: &'r mut Option<E>,
}

impl<T, E, I> Iterator for ResultShunt<'_, I, E>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.residual.is_some() {
            return None;
        }
        match self.iter.next()? {
            Ok(x) => Some(x),
            Err(e) => {
                *self.residual = Some(e);
                None
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        if self.residual.is_some() {
            SizeHint::EMPTY
        } else {
            self.iter.size_hint().with_zero_lower()
        }
    }
}

impl<A, E, V> FromIterator<Result<A, E>> for Result<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(iter: I) -> Self {
        let mut residual = None;
        let collected = V::from_iter(ResultShunt {
            iter: iter.into_iter(),
            residual: &mut residual,
        });
        match residual {
            Some(e) => Err(e),
            None => Ok(collected),
        }
    }
}

/// Yields the `Some` values of `iter` and records whether a `None` was seen.
struct OptionShunt<'r, I> {
    iter: I,
    found_none: &'r mut bool,
}

impl<T, I> Iterator for OptionShunt<'_, I>
where
    I: Iterator<Item = Option<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if *self.found_none {
            return None;
        }
        match self.iter.next()? {
            Some(x) => Some(x),
            None => {
                *self.found_none = true;
                None
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        if *self.found_none {
            SizeHint::EMPTY
        } else {
            self.iter.size_hint().with_zero_lower()
        }
    }
}

impl<A, V> FromIterator<Option<A>> for Option<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Option<A>>>(iter: I) -> Self {
        let mut found_none = false;
        let collected = V::from_iter(OptionShunt {
            iter: iter.into_iter(),
            found_none: &mut found_none,
        });
        if found_none {
            None
        } else {
            Some(collected)
        }
    }
}

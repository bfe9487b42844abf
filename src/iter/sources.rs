// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterators that produce items from nothing but a value or a closure.

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

// Core imports
use core::{fmt, marker::PhantomData};

/// An iterator that yields nothing.
///
/// This `struct` is created by [`empty`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Creates an iterator that yields nothing.
#[inline]
pub const fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Iterator for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::EMPTY
    }
}

impl<T> DoubleEndedIterator for Empty<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        None
    }
}

impl<T> ExactSizeIterator for Empty<T> {}
impl<T> TrustedLen for Empty<T> {}
impl<T> FusedIterator for Empty<T> {}

/// An iterator that yields an item exactly once.
///
/// This `struct` is created by [`once`], and by converting an `Option`
/// into an iterator.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Once<T> {
    item: Option<T>,
}

/// Creates an iterator that yields `value` once.
#[inline]
pub fn once<T>(value: T) -> Once<T> {
    Once { item: Some(value) }
}

impl<T> Once<T> {
    pub(crate) fn from_option(item: Option<T>) -> Self {
        Self { item }
    }
}

impl<T> Iterator for Once<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.item.take()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(usize::from(self.item.is_some()))
    }
}

impl<T> DoubleEndedIterator for Once<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for Once<T> {}
impl<T> TrustedLen for Once<T> {}
impl<T> FusedIterator for Once<T> {}

/// An iterator that yields the result of a closure once.
///
/// This `struct` is created by [`once_with`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct OnceWith<F> {
    make: Option<F>,
}

/// Creates an iterator that lazily calls `make` once and yields its result.
#[inline]
pub fn once_with<T, F: FnOnce() -> T>(make: F) -> OnceWith<F> {
    OnceWith { make: Some(make) }
}

impl<F> fmt::Debug for OnceWith<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnceWith")
            .field("pending", &self.make.is_some())
            .finish()
    }
}

impl<T, F: FnOnce() -> T> Iterator for OnceWith<F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let make = self.make.take()?;
        Some(make())
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(usize::from(self.make.is_some()))
    }
}

impl<T, F: FnOnce() -> T> DoubleEndedIterator for OnceWith<F> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.next()
    }
}

impl<T, F: FnOnce() -> T> ExactSizeIterator for OnceWith<F> {}
impl<T, F: FnOnce() -> T> FusedIterator for OnceWith<F> {}

/// An iterator that yields clones of one value forever.
///
/// This `struct` is created by [`repeat`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Repeat<T> {
    value: T,
}

/// Creates an endless iterator of clones of `value`.
#[inline]
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some(self.value.clone())
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::new(usize::MAX, None)
    }

    #[inline]
    fn nth(&mut self, _n: usize) -> Option<T> {
        Some(self.value.clone())
    }
}

impl<T: Clone> DoubleEndedIterator for Repeat<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        Some(self.value.clone())
    }
}

impl<T: Clone> FusedIterator for Repeat<T> {}
impl<T: Clone> TrustedLen for Repeat<T> {}

/// An iterator that calls a closure for every item, forever.
///
/// This `struct` is created by [`repeat_with`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RepeatWith<F> {
    make: F,
}

/// Creates an endless iterator that yields `make()` on every call.
#[inline]
pub fn repeat_with<T, F: FnMut() -> T>(make: F) -> RepeatWith<F> {
    RepeatWith { make }
}

impl<F> fmt::Debug for RepeatWith<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepeatWith").finish_non_exhaustive()
    }
}

impl<T, F: FnMut() -> T> Iterator for RepeatWith<F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some((self.make)())
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::new(usize::MAX, None)
    }
}

impl<T, F: FnMut() -> T> FusedIterator for RepeatWith<F> {}
impl<T, F: FnMut() -> T> TrustedLen for RepeatWith<F> {}

/// An iterator driven entirely by a closure.
///
/// This `struct` is created by [`from_fn`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FromFn<F> {
    f: F,
}

/// Creates an iterator whose `next()` calls `f`.
///
/// ```rust
/// use affine_iter::prelude::*;
/// use affine_iter::iter::from_fn;
///
/// let mut n = 0;
/// let counted: Vec<i32> = from_fn(|| {
///     n += 1;
///     (n <= 3).then_some(n)
/// })
/// .collect();
/// assert_eq!(counted, [1, 2, 3]);
/// ```
#[inline]
pub fn from_fn<T, F: FnMut() -> Option<T>>(f: F) -> FromFn<F> {
    FromFn { f }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<T, F: FnMut() -> Option<T>> Iterator for FromFn<F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        (self.f)()
    }
}

/// An iterator where each item is computed from the previous one.
///
/// This `struct` is created by [`successors`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Successors<T, F> {
    next: Option<T>,
    succ: F,
}

/// Creates an iterator starting at `first` and applying `succ` to the last
/// item to get the next one, until `succ` returns `None`.
#[inline]
pub fn successors<T, F: FnMut(&T) -> Option<T>>(first: Option<T>, succ: F) -> Successors<T, F> {
    Successors { next: first, succ }
}

impl<T: fmt::Debug, F> fmt::Debug for Successors<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Successors")
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

impl<T, F: FnMut(&T) -> Option<T>> Iterator for Successors<T, F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let item = self.next.take()?;
        self.next = (self.succ)(&item);
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        if self.next.is_some() {
            SizeHint::new(1, None)
        } else {
            SizeHint::EMPTY
        }
    }
}

impl<T, F: FnMut(&T) -> Option<T>> FusedIterator for Successors<T, F> {}

#[cfg(test)]
mod tests {
    // Imports
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_empty_and_once() {
        assert_eq!(empty::<u8>().next(), None);
        assert_eq!(empty::<u8>().size_hint(), SizeHint::EMPTY);

        let mut it = once(7);
        assert_eq!(it.exact_size_hint(), 1);
        assert_eq!(it.next_back(), Some(7));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_once_with_is_lazy() {
        let mut called = false;
        let mut it = once_with(|| {
            called = true;
            5
        });
        assert_eq!(it.size_hint(), SizeHint::exact(1));
        assert_eq!(it.next(), Some(5));
        assert_eq!(it.next(), None);
        drop(it);
        assert!(called);
    }

    #[test]
    fn test_repeat_and_repeat_with_are_endless() {
        let v: Vec<char> = repeat('x').take(3).collect();
        assert_eq!(v, ['x', 'x', 'x']);

        let mut n = 1;
        let powers: Vec<u32> = repeat_with(|| {
            let cur = n;
            n *= 2;
            cur
        })
        .take(5)
        .collect();
        assert_eq!(powers, [1, 2, 4, 8, 16]);
        assert_eq!(repeat(1).size_hint(), SizeHint::new(usize::MAX, None));
    }

    #[test]
    fn test_successors_stops_on_none() {
        let v: Vec<u32> = successors(Some(1_u32), |x| x.checked_mul(10).filter(|y| *y < 10_000))
            .collect();
        assert_eq!(v, [1, 10, 100, 1000]);
        assert_eq!(successors(None::<u8>, |_| Some(1)).next(), None);
    }
}

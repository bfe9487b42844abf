// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Cloned`], [`Copied`] and [`Moved`]: turning references into values.

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

// Core imports
use core::mem;

macro_rules! impl_by_value {
    ($Name:ident, <$a:lifetime, $T:ident: $bound:path>, $Ref:ty, $conv:expr) => {
        impl<$a, I, $T> Iterator for $Name<I>
        where
            I: Iterator<Item = $Ref>,
            $T: $a + $bound,
        {
            type Item = $T;

            #[inline]
            fn next(&mut self) -> Option<$T> {
                self.iter.next().map($conv)
            }

            #[inline]
            fn size_hint(&self) -> SizeHint {
                self.iter.size_hint()
            }
        }

        impl<$a, I, $T> DoubleEndedIterator for $Name<I>
        where
            I: DoubleEndedIterator<Item = $Ref>,
            $T: $a + $bound,
        {
            #[inline]
            fn next_back(&mut self) -> Option<$T> {
                self.iter.next_back().map($conv)
            }
        }

        impl<$a, I, $T> ExactSizeIterator for $Name<I>
        where
            I: ExactSizeIterator<Item = $Ref>,
            $T: $a + $bound,
        {
            #[inline]
            fn exact_size_hint(&self) -> usize {
                self.iter.exact_size_hint()
            }
        }

        impl<$a, I, $T> TrustedLen for $Name<I>
        where
            I: TrustedLen<Item = $Ref>,
            $T: $a + $bound,
        {
        }

        impl<$a, I, $T> FusedIterator for $Name<I>
        where
            I: FusedIterator<Item = $Ref>,
            $T: $a + $bound,
        {
        }
    };
}

/// An iterator that clones the values behind `&T` items.
///
/// This `struct` is created by [`Iterator::cloned`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Cloned<I> {
    iter: I,
}

impl<I> Cloned<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl_by_value!(Cloned, <'a, T: Clone>, &'a T, T::clone);

/// An iterator that copies the values behind `&T` items.
///
/// This `struct` is created by [`Iterator::copied`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Copied<I> {
    iter: I,
}

impl<I> Copied<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl_by_value!(Copied, <'a, T: Copy>, &'a T, |x: &T| *x);

/// An iterator that moves the values out of `&mut T` items, leaving
/// `T::default()` in each slot.
///
/// This `struct` is created by [`Iterator::moved`].
///
/// ```rust
/// use affine_iter::prelude::*;
/// use affine_iter::Vec;
///
/// let mut names = Vec::new();
/// names.push(String::from("ada"));
/// names.push(String::from("grace"));
/// let taken: std::vec::Vec<String> = names.iter_mut().moved().collect();
/// assert_eq!(taken, ["ada", "grace"]);
/// assert!(names.iter().all(|s| s.is_empty()));
/// ```
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Moved<I> {
    iter: I,
}

impl<I> Moved<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl_by_value!(Moved, <'a, T: Default>, &'a mut T, mem::take);

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{DoubleEndedIterator, ExactSizeIterator, Iterator};
    use crate::slice::{Slice, SliceMut};
    use alloc::{string::String, vec::Vec};

    #[test]
    fn test_cloned_and_copied() {
        let words = [String::from("x"), String::from("yz")];
        let owned: Vec<String> = Slice::new(&words).iter().cloned().collect();
        assert_eq!(owned, words);

        let nums = [1, 2, 3];
        let mut it = Slice::new(&nums).iter().copied();
        assert_eq!(it.exact_size_hint(), 3);
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), Some(1));
    }

    #[test]
    fn test_moved_leaves_defaults_behind() {
        let mut words = [String::from("a"), String::from("b"), String::from("c")];
        let mut it = SliceMut::new(&mut words).iter_mut().moved();
        assert_eq!(it.next_back(), Some(String::from("c")));
        assert_eq!(it.next(), Some(String::from("a")));
        drop(it);
        assert_eq!(words, [String::new(), String::from("b"), String::new()]);
    }
}

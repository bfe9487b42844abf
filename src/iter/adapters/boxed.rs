// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{iter::Iterator, size_hint::SizeHint};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::fmt;

/// A heap-allocated iterator with its concrete type erased.
///
/// Useful for returning different adaptor chains from the branches of one
/// function, or for storing an iterator in a struct without naming its type.
///
/// Only the [`Iterator`] capability survives the erasure.
///
/// This `struct` is created by [`Iterator::boxed`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Boxed<'a, T> {
    iter: Box<dyn Iterator<Item = T> + 'a>,
}

impl<'a, T> Boxed<'a, T> {
    pub(crate) fn new<I: Iterator<Item = T> + 'a>(iter: I) -> Self {
        Self {
            iter: Box::new(iter),
        }
    }
}

impl<T> fmt::Debug for Boxed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boxed")
            .field("size_hint", &self.iter.size_hint())
            .finish_non_exhaustive()
    }
}

impl<T> Iterator for Boxed<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        self.iter.nth(n)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Boxed;
    use crate::iter::{from_std, once, Iterator};
    use crate::size_hint::SizeHint;
    use alloc::vec::Vec;

    fn evens_or_one(evens: bool) -> Boxed<'static, u32> {
        if evens {
            from_std(0..10_u32).filter(|x| x % 2 == 0).boxed()
        } else {
            once(1).boxed()
        }
    }

    #[test]
    fn test_boxed_branches_share_a_type() {
        let a: Vec<u32> = evens_or_one(true).collect();
        assert_eq!(a, [0, 2, 4, 6, 8]);
        let b = evens_or_one(false);
        assert_eq!(b.size_hint(), SizeHint::exact(1));
        assert_eq!(b.collect::<Vec<_>>(), [1]);
    }
}

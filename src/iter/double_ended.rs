// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::iter::Iterator;

/// An iterator that can also yield items from the back.
///
/// `next()` and `next_back()` consume the same remaining range from opposite
/// ends. No item is ever yielded twice, and once the two ends meet both
/// return `None`.
pub trait DoubleEndedIterator: Iterator {
    /// Removes and returns an item from the back.
    fn next_back(&mut self) -> Option<Self::Item>;

    /// Returns the `n`th item from the back (zero-based), discarding the
    /// ones after it.
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        for _ in 0..n {
            self.next_back()?;
        }
        self.next_back()
    }

    /// Folds every item into an accumulator, back to front.
    #[inline]
    fn rfold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(x) = self.next_back() {
            acc = f(acc, x);
        }
        acc
    }

    /// Returns the last item matching `pred`, searching from the back.
    fn rfind<P>(&mut self, mut pred: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(x) = self.next_back() {
            if pred(&x) {
                return Some(x);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{DoubleEndedIterator, Iterator};
    use crate::slice::Slice;

    #[test]
    fn test_nth_back_and_rfold() {
        let data = [1, 2, 3, 4, 5];
        let mut it = Slice::new(&data).iter();
        assert_eq!(it.nth_back(1), Some(&4));
        assert_eq!(it.next(), Some(&1));
        let rest = it.rfold(0, |acc, x| acc * 10 + x);
        assert_eq!(rest, 32);
    }

    #[test]
    fn test_rfind_from_back() {
        let data = [1, 2, 3, 4, 5];
        let mut it = Slice::new(&data).iter();
        assert_eq!(it.rfind(|x| **x % 2 == 0), Some(&4));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.rfind(|x| **x > 10), None);
        assert_eq!(it.next(), None);
    }
}

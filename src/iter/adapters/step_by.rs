// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator},
    size_hint::SizeHint,
};

/// An iterator that yields the first item and then every `step`th one.
///
/// This `struct` is created by [`Iterator::step_by`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct StepBy<I> {
    iter: I,
    // Items skipped between two yields, i.e. `step - 1`.
    gap: usize,
    first_take: bool,
}

impl<I> StepBy<I> {
    pub(crate) fn new(iter: I, step: usize) -> Self {
        assert!(step != 0, "step_by: step must be non-zero");
        Self {
            iter,
            gap: step - 1,
            first_take: true,
        }
    }
}

impl<I: ExactSizeIterator> StepBy<I> {
    /// How many items to skip from the back so the next one is on the
    /// forward stride.
    fn next_back_index(&self) -> usize {
        let rem = self.iter.exact_size_hint() % (self.gap + 1);
        if self.first_take {
            if rem == 0 {
                self.gap
            } else {
                rem - 1
            }
        } else {
            rem
        }
    }
}

impl<I: Iterator> Iterator for StepBy<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.first_take {
            self.first_take = false;
            self.iter.next()
        } else {
            self.iter.nth(self.gap)
        }
    }

    fn size_hint(&self) -> SizeHint {
        let step = self.gap + 1;
        let SizeHint { lower, upper } = self.iter.size_hint();
        if self.first_take {
            let first_size = |n: usize| if n == 0 { 0 } else { 1 + (n - 1) / step };
            SizeHint::new(first_size(lower), upper.map(first_size))
        } else {
            let other_size = |n: usize| n / step;
            SizeHint::new(other_size(lower), upper.map(other_size))
        }
    }
}

impl<I> DoubleEndedIterator for StepBy<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let n = self.next_back_index();
        self.iter.nth_back(n)
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for StepBy<I> {}
impl<I: FusedIterator> FusedIterator for StepBy<I> {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{from_std, DoubleEndedIterator, ExactSizeIterator, Iterator};
    use alloc::vec::Vec;

    #[test]
    fn test_step_by_forward() {
        let v: Vec<i32> = from_std(0..10).step_by(3).collect();
        assert_eq!(v, [0, 3, 6, 9]);
        assert_eq!(from_std(0..10).step_by(3).exact_size_hint(), 4);
        assert_eq!(from_std(0..0).step_by(3).exact_size_hint(), 0);
    }

    #[test]
    fn test_step_by_backward_matches_forward_stride() {
        let v: Vec<i32> = from_std(0..11).step_by(3).rev().collect();
        assert_eq!(v, [9, 6, 3, 0]);

        let mut it = from_std(0..11).step_by(3);
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(9));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next_back(), Some(6));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_step_by_one_is_identity() {
        let v: Vec<i32> = from_std(0..4).step_by(1).collect();
        assert_eq!(v, [0, 1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "step must be non-zero")]
    fn test_step_by_zero_panics() {
        let _ = from_std(0..4).step_by(0);
    }
}

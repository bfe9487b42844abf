// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

/// An iterator that pairs each item with its index.
///
/// This `struct` is created by [`Iterator::enumerate`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Enumerate<I> {
    iter: I,
    count: usize,
}

impl<I> Enumerate<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter, count: 0 }
    }
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = (usize, I::Item);

    #[inline]
    fn next(&mut self) -> Option<(usize, I::Item)> {
        let item = self.iter.next()?;
        let i = self.count;
        self.count += 1;
        Some((i, item))
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }
}

impl<I> DoubleEndedIterator for Enumerate<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<(usize, I::Item)> {
        let item = self.iter.next_back()?;
        // Indices stay the ones the front would have handed out.
        let len = self.iter.exact_size_hint();
        Some((self.count + len, item))
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Enumerate<I> {
    #[inline]
    fn exact_size_hint(&self) -> usize {
        self.iter.exact_size_hint()
    }
}

impl<I: TrustedLen> TrustedLen for Enumerate<I> {}
impl<I: FusedIterator> FusedIterator for Enumerate<I> {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{DoubleEndedIterator, Iterator};
    use crate::slice::Slice;

    #[test]
    fn test_enumerate_indices_are_stable_from_both_ends() {
        let data = ['a', 'b', 'c', 'd'];
        let mut it = Slice::new(&data).iter().enumerate();
        assert_eq!(it.next(), Some((0, &'a')));
        assert_eq!(it.next_back(), Some((3, &'d')));
        assert_eq!(it.next_back(), Some((2, &'c')));
        assert_eq!(it.next(), Some((1, &'b')));
        assert_eq!(it.next(), None);
    }
}

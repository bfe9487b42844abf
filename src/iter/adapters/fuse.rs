// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{
        and_then_or_clear, DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator,
        TrustedLen,
    },
    size_hint::SizeHint,
};

/// An iterator that returns `None` forever once its inner iterator has
/// returned `None` once.
///
/// The inner iterator is dropped at that point and never polled again.
///
/// This `struct` is created by [`Iterator::fuse`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Fuse<I> {
    iter: Option<I>,
}

impl<I> Fuse<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter: Some(iter) }
    }
}

impl<I: Iterator> Iterator for Fuse<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        and_then_or_clear(&mut self.iter, Iterator::next)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.as_ref().map_or(SizeHint::EMPTY, Iterator::size_hint)
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Fuse<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        and_then_or_clear(&mut self.iter, DoubleEndedIterator::next_back)
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Fuse<I> {
    #[inline]
    fn exact_size_hint(&self) -> usize {
        self.iter.as_ref().map_or(0, ExactSizeIterator::exact_size_hint)
    }
}

impl<I: TrustedLen> TrustedLen for Fuse<I> {}
impl<I: Iterator> FusedIterator for Fuse<I> {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::iter::{from_fn, DoubleEndedIterator, Iterator};
    use crate::size_hint::SizeHint;
    use crate::slice::Slice;

    // Yields `None` on every third call and `Some` otherwise, forever.
    fn flaky() -> impl Iterator<Item = u32> {
        let mut n = 0;
        from_fn(move || {
            n += 1;
            (n % 3 != 0).then_some(n)
        })
    }

    #[test]
    fn test_unfused_iterator_resumes() {
        let mut it = flaky();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), Some(4));
    }

    #[test]
    fn test_fuse_stays_exhausted() {
        let mut it = flaky().fuse();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        for _ in 0..10 {
            assert_eq!(it.next(), None);
        }
        assert_eq!(it.size_hint(), SizeHint::EMPTY);
    }

    #[test]
    fn test_fuse_back_end() {
        let data = [1, 2];
        let mut it = Slice::new(&data).iter().fuse();
        assert_eq!(it.size_hint(), SizeHint::exact(2));
        assert_eq!(it.next_back(), Some(&2));
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }
}

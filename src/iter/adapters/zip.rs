// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lock-step iteration over two to six iterators.
//!
//! Each step pulls one item from *every* inner iterator, left to right,
//! before checking whether any of them ran out. An iterator that comes after
//! an exhausted one in that order is still advanced on the final step, and
//! the items pulled on that step are dropped.

// Crate imports
use crate::{
    iter::{ExactSizeIterator, FusedIterator, IntoIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

/// An iterator that yields tuples of items from a tuple of iterators.
///
/// This `struct` is created by [`Iterator::zip`] (for two iterators) and by
/// [`zip`] (for two to six).
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Zip<T> {
    iters: T,
}

impl<T> Zip<T> {
    pub(crate) fn new(iters: T) -> Self {
        Self { iters }
    }
}

/// A tuple of iterables that [`zip`] can walk in lock-step.
///
/// Implemented for tuples of two to six [`IntoIterator`]s.
pub trait IntoZip {
    /// The tuple of iterators produced from the iterables.
    type Iters;

    /// Turns every element into its iterator.
    fn into_zip(self) -> Zip<Self::Iters>;
}

/// Walks a tuple of iterables in lock-step, yielding tuples of their items.
///
/// The result has as many items as the shortest input.
///
/// ```rust
/// use affine_iter::prelude::*;
/// use affine_iter::iter::{from_std, zip};
///
/// let triples: Vec<(i32, char, bool)> = zip((
///     from_std([1, 2, 3]),
///     from_std(['a', 'b', 'c', 'd', 'e']),
///     from_std([true, false]),
/// ))
/// .collect();
/// assert_eq!(triples, [(1, 'a', true), (2, 'b', false)]);
/// ```
#[inline]
pub fn zip<T: IntoZip>(iterables: T) -> Zip<T::Iters> {
    iterables.into_zip()
}

// Identity of `SizeHint::min`: any lower bound is smaller, and an unknown
// upper bound defers to the other side.
const NO_LIMIT: SizeHint = SizeHint {
    lower: usize::MAX,
    upper: None,
};

macro_rules! impl_zip {
    ($($T:ident $t:ident),+) => {
        impl<$($T: IntoIterator),+> IntoZip for ($($T,)+) {
            type Iters = ($($T::IntoIter,)+);

            #[inline]
            fn into_zip(self) -> Zip<Self::Iters> {
                let ($($t,)+) = self;
                Zip::new(($($t.into_iter(),)+))
            }
        }

        impl<$($T: Iterator),+> Iterator for Zip<($($T,)+)> {
            type Item = ($($T::Item,)+);

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                let ($($t,)+) = &mut self.iters;
                // Pull from all of them first; see the module docs.
                $(let $t = $t.next();)+
                Some(($($t?,)+))
            }

            fn size_hint(&self) -> SizeHint {
                let ($($t,)+) = &self.iters;
                let mut hint = NO_LIMIT;
                $(hint = hint.min($t.size_hint());)+
                hint
            }
        }

        impl<$($T: ExactSizeIterator),+> ExactSizeIterator for Zip<($($T,)+)> {
            fn exact_size_hint(&self) -> usize {
                let ($($t,)+) = &self.iters;
                let mut n = usize::MAX;
                $(n = n.min($t.exact_size_hint());)+
                n
            }
        }

        impl<$($T: TrustedLen),+> TrustedLen for Zip<($($T,)+)> {}
        impl<$($T: FusedIterator),+> FusedIterator for Zip<($($T,)+)> {}
    };
}

impl_zip!(A a, B b);
impl_zip!(A a, B b, C c);
impl_zip!(A a, B b, C c, D d);
impl_zip!(A a, B b, C c, D d, E e);
impl_zip!(A a, B b, C c, D d, E e, F f);

#[cfg(test)]
mod tests {
    // Imports
    use super::zip;
    use crate::iter::{from_std, repeat, ExactSizeIterator, Iterator};
    use crate::size_hint::SizeHint;
    use crate::slice::Slice;
    use alloc::vec::Vec;

    #[test]
    fn test_zip_truncates_to_shortest() {
        let a = [1, 2, 3];
        let b = [10, 20, 30, 40, 50];
        let c = [100, 200];
        let it = zip((Slice::new(&a).iter(), Slice::new(&b).iter(), Slice::new(&c).iter()));
        assert_eq!(it.size_hint(), SizeHint::exact(2));
        assert_eq!(it.exact_size_hint(), 2);
        assert_eq!(it.count(), 2);
    }

    #[test]
    fn test_zip_method_pairs_items() {
        let names = ["a", "b"];
        let pairs: Vec<(&&str, u32)> = Slice::new(&names).iter().zip(from_std(1..)).collect();
        assert_eq!(pairs, [(&"a", 1), (&"b", 2)]);
    }

    #[test]
    fn test_zip_size_hint_with_unbounded_members() {
        let data = [1, 2, 3];
        let it = zip((repeat(0), Slice::new(&data).iter(), repeat('x')));
        assert_eq!(it.size_hint(), SizeHint::exact(3));

        let endless = zip((repeat(0), repeat(1)));
        assert_eq!(endless.size_hint(), SizeHint::new(usize::MAX, None));
    }

    #[test]
    fn test_zip_advances_every_iterator_on_last_step() {
        let short = [1];
        let long = [1, 2, 3];
        let mut left = Slice::new(&short).iter();
        let mut right = Slice::new(&long).iter();
        {
            let mut it = zip((left.by_ref(), right.by_ref()));
            assert_eq!(it.next(), Some((&1, &1)));
            assert_eq!(it.next(), None);
        }
        assert_eq!(left.next(), None);
        // The second item of `right` was pulled on the failing step.
        assert_eq!(right.next(), Some(&3));
    }

    #[test]
    fn test_zip_six_wide() {
        let row = zip((
            from_std([1]),
            from_std([2]),
            from_std([3]),
            from_std([4]),
            from_std([5]),
            from_std([6]),
        ))
        .next();
        assert_eq!(row, Some((1, 2, 3, 4, 5, 6)));
    }
}

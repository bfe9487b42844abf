// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{Iterator, TrustedLen},
    size_hint::SizeHint,
};

/// An iterator that restarts from a saved clone every time it runs out.
///
/// An empty inner iterator makes the cycle empty too.
///
/// This `struct` is created by [`Iterator::cycle`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Cycle<I> {
    orig: I,
    iter: I,
}

impl<I: Clone> Cycle<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            orig: iter.clone(),
            iter,
        }
    }
}

impl<I: Iterator + Clone> Iterator for Cycle<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        match self.iter.next() {
            None => {
                self.iter = self.orig.clone();
                self.iter.next()
            }
            y => y,
        }
    }

    fn size_hint(&self) -> SizeHint {
        match self.orig.size_hint() {
            SizeHint::EMPTY => SizeHint::EMPTY,
            SizeHint { lower: 0, .. } => SizeHint::unbounded(),
            _ => SizeHint::new(usize::MAX, None),
        }
    }
}

impl<I: TrustedLen + Clone> TrustedLen for Cycle<I> {}

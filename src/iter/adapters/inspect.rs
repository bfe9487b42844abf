// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

// Core imports
use core::fmt;

/// An iterator that calls a closure on a reference to each item before
/// passing it on unchanged.
///
/// This `struct` is created by [`Iterator::inspect`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Inspect<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Inspect<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self { iter, f }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Inspect<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspect").field("iter", &self.iter).finish()
    }
}

impl<I: Iterator, F> Inspect<I, F>
where
    F: FnMut(&I::Item),
{
    #[inline]
    fn observe(&mut self, item: Option<I::Item>) -> Option<I::Item> {
        if let Some(x) = &item {
            (self.f)(x);
        }
        item
    }
}

impl<I: Iterator, F> Iterator for Inspect<I, F>
where
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next();
        self.observe(item)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }
}

impl<I: DoubleEndedIterator, F> DoubleEndedIterator for Inspect<I, F>
where
    F: FnMut(&I::Item),
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let item = self.iter.next_back();
        self.observe(item)
    }
}

impl<I: ExactSizeIterator, F> ExactSizeIterator for Inspect<I, F>
where
    F: FnMut(&I::Item),
{
    #[inline]
    fn exact_size_hint(&self) -> usize {
        self.iter.exact_size_hint()
    }
}

impl<I: TrustedLen, F> TrustedLen for Inspect<I, F> where F: FnMut(&I::Item) {}
impl<I: FusedIterator, F> FusedIterator for Inspect<I, F> where F: FnMut(&I::Item) {}

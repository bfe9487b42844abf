// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, FusedIterator, Iterator},
    size_hint::SizeHint,
    slice::SliceIter,
};

// Core imports
use core::{cmp, fmt, mem};

/// A split iterator that can hand out everything it has not split yet as
/// one final item.
pub(crate) trait SplitIter: DoubleEndedIterator {
    /// Marks the iterator as finished and returns the unsplit rest, or
    /// `None` if it was already finished.
    fn finish(&mut self) -> Option<Self::Item>;
}

/// Size hint shared by the non-inclusive splitters: one item for an
/// unmatched slice, one more than the length if every element matches.
#[inline]
fn split_hint(finished: bool, len: usize) -> SizeHint {
    if finished {
        SizeHint::EMPTY
    } else {
        SizeHint::new(1, len.checked_add(1))
    }
}

/// An iterator over the sub-slices separated by elements matching a
/// predicate. Separators are not yielded.
///
/// A slice with `k` matching elements yields `k + 1` sub-slices, some of
/// them possibly empty.
///
/// This `struct` is created by [`Slice::split`](crate::Slice::split).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Split<'a, T, P> {
    v: &'a [T],
    pred: P,
    finished: bool,
}

impl<'a, T, P: FnMut(&T) -> bool> Split<'a, T, P> {
    pub(crate) fn new(v: &'a [T], pred: P) -> Self {
        Self {
            v,
            pred,
            finished: false,
        }
    }

    /// Returns the part of the slice not yet split off.
    pub fn as_slice(&self) -> &'a [T] {
        if self.finished {
            &[]
        } else {
            self.v
        }
    }
}

impl<T, P: Clone> Clone for Split<'_, T, P> {
    fn clone(&self) -> Self {
        Self {
            v: self.v,
            pred: self.pred.clone(),
            finished: self.finished,
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for Split<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Split")
            .field("v", &self.v)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<'a, T, P: FnMut(&T) -> bool> Iterator for Split<'a, T, P> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<&'a [T]> {
        if self.finished {
            return None;
        }
        match SliceIter::new(self.v).position(|x| (self.pred)(x)) {
            None => self.finish(),
            Some(idx) => {
                let head = &self.v[..idx];
                self.v = &self.v[idx + 1..];
                Some(head)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        split_hint(self.finished, self.v.len())
    }
}

impl<'a, T, P: FnMut(&T) -> bool> DoubleEndedIterator for Split<'a, T, P> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a [T]> {
        if self.finished {
            return None;
        }
        match SliceIter::new(self.v).rposition(|x| (self.pred)(x)) {
            None => self.finish(),
            Some(idx) => {
                let tail = &self.v[idx + 1..];
                self.v = &self.v[..idx];
                Some(tail)
            }
        }
    }
}

impl<T, P: FnMut(&T) -> bool> SplitIter for Split<'_, T, P> {
    #[inline]
    fn finish(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            self.finished = true;
            Some(self.v)
        }
    }
}

impl<T, P: FnMut(&T) -> bool> FusedIterator for Split<'_, T, P> {}

/// Mutable counterpart of [`Split`].
///
/// This `struct` is created by [`SliceMut::split_mut`](crate::SliceMut::split_mut).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SplitMut<'a, T, P> {
    v: &'a mut [T],
    pred: P,
    finished: bool,
}

impl<'a, T, P: FnMut(&T) -> bool> SplitMut<'a, T, P> {
    pub(crate) fn new(v: &'a mut [T], pred: P) -> Self {
        Self {
            v,
            pred,
            finished: false,
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for SplitMut<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitMut")
            .field("v", &self.v)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<'a, T, P: FnMut(&T) -> bool> Iterator for SplitMut<'a, T, P> {
    type Item = &'a mut [T];

    #[inline]
    fn next(&mut self) -> Option<&'a mut [T]> {
        if self.finished {
            return None;
        }
        let found = SliceIter::new(&*self.v).position(|x| (self.pred)(x));
        match found {
            None => self.finish(),
            Some(idx) => {
                let (head, tail) = mem::take(&mut self.v).split_at_mut(idx);
                self.v = &mut tail[1..];
                Some(head)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        split_hint(self.finished, self.v.len())
    }
}

impl<'a, T, P: FnMut(&T) -> bool> DoubleEndedIterator for SplitMut<'a, T, P> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut [T]> {
        if self.finished {
            return None;
        }
        let found = SliceIter::new(&*self.v).rposition(|x| (self.pred)(x));
        match found {
            None => self.finish(),
            Some(idx) => {
                let (head, tail) = mem::take(&mut self.v).split_at_mut(idx);
                self.v = head;
                Some(&mut tail[1..])
            }
        }
    }
}

impl<T, P: FnMut(&T) -> bool> SplitIter for SplitMut<'_, T, P> {
    #[inline]
    fn finish(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            self.finished = true;
            Some(mem::take(&mut self.v))
        }
    }
}

impl<T, P: FnMut(&T) -> bool> FusedIterator for SplitMut<'_, T, P> {}

/// An iterator over the sub-slices separated by elements matching a
/// predicate, with each separator kept at the end of the sub-slice it
/// closes.
///
/// A trailing separator does not produce an empty final sub-slice, and an
/// empty slice yields nothing.
///
/// This `struct` is created by [`Slice::split_inclusive`](crate::Slice::split_inclusive).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SplitInclusive<'a, T, P> {
    v: &'a [T],
    pred: P,
    finished: bool,
}

impl<'a, T, P: FnMut(&T) -> bool> SplitInclusive<'a, T, P> {
    pub(crate) fn new(v: &'a [T], pred: P) -> Self {
        Self {
            finished: v.is_empty(),
            v,
            pred,
        }
    }
}

impl<T, P: Clone> Clone for SplitInclusive<'_, T, P> {
    fn clone(&self) -> Self {
        Self {
            v: self.v,
            pred: self.pred.clone(),
            finished: self.finished,
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for SplitInclusive<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitInclusive")
            .field("v", &self.v)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<'a, T, P: FnMut(&T) -> bool> Iterator for SplitInclusive<'a, T, P> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<&'a [T]> {
        if self.finished {
            return None;
        }
        let idx = SliceIter::new(self.v)
            .position(|x| (self.pred)(x))
            .map_or(self.v.len(), |idx| idx + 1);
        if idx == self.v.len() {
            self.finished = true;
        }
        let (head, tail) = self.v.split_at(idx);
        self.v = tail;
        Some(head)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        if self.finished {
            SizeHint::EMPTY
        } else {
            SizeHint::new(1, Some(cmp::max(1, self.v.len())))
        }
    }
}

impl<'a, T, P: FnMut(&T) -> bool> DoubleEndedIterator for SplitInclusive<'a, T, P> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a [T]> {
        if self.finished {
            return None;
        }
        // The last element closes the final sub-slice whether it matches or
        // not, so the search starts one before it.
        let searched = &self.v[..self.v.len().saturating_sub(1)];
        let idx = SliceIter::new(searched)
            .rposition(|x| (self.pred)(x))
            .map_or(0, |idx| idx + 1);
        if idx == 0 {
            self.finished = true;
        }
        let (head, tail) = self.v.split_at(idx);
        self.v = head;
        Some(tail)
    }
}

impl<T, P: FnMut(&T) -> bool> FusedIterator for SplitInclusive<'_, T, P> {}

/// Mutable counterpart of [`SplitInclusive`].
///
/// This `struct` is created by
/// [`SliceMut::split_inclusive_mut`](crate::SliceMut::split_inclusive_mut).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SplitInclusiveMut<'a, T, P> {
    v: &'a mut [T],
    pred: P,
    finished: bool,
}

impl<'a, T, P: FnMut(&T) -> bool> SplitInclusiveMut<'a, T, P> {
    pub(crate) fn new(v: &'a mut [T], pred: P) -> Self {
        Self {
            finished: v.is_empty(),
            v,
            pred,
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for SplitInclusiveMut<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitInclusiveMut")
            .field("v", &self.v)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<'a, T, P: FnMut(&T) -> bool> Iterator for SplitInclusiveMut<'a, T, P> {
    type Item = &'a mut [T];

    #[inline]
    fn next(&mut self) -> Option<&'a mut [T]> {
        if self.finished {
            return None;
        }
        let idx = SliceIter::new(&*self.v)
            .position(|x| (self.pred)(x))
            .map_or(self.v.len(), |idx| idx + 1);
        if idx == self.v.len() {
            self.finished = true;
        }
        let (head, tail) = mem::take(&mut self.v).split_at_mut(idx);
        self.v = tail;
        Some(head)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        if self.finished {
            SizeHint::EMPTY
        } else {
            SizeHint::new(1, Some(cmp::max(1, self.v.len())))
        }
    }
}

impl<'a, T, P: FnMut(&T) -> bool> DoubleEndedIterator for SplitInclusiveMut<'a, T, P> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut [T]> {
        if self.finished {
            return None;
        }
        let searched = &self.v[..self.v.len().saturating_sub(1)];
        let idx = SliceIter::new(searched)
            .rposition(|x| (self.pred)(x))
            .map_or(0, |idx| idx + 1);
        if idx == 0 {
            self.finished = true;
        }
        let (head, tail) = mem::take(&mut self.v).split_at_mut(idx);
        self.v = head;
        Some(tail)
    }
}

impl<T, P: FnMut(&T) -> bool> FusedIterator for SplitInclusiveMut<'_, T, P> {}

/// Like [`Split`], but walking from the back.
///
/// This `struct` is created by [`Slice::rsplit`](crate::Slice::rsplit).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RSplit<'a, T, P> {
    inner: Split<'a, T, P>,
}

impl<'a, T, P: FnMut(&T) -> bool> RSplit<'a, T, P> {
    pub(crate) fn new(v: &'a [T], pred: P) -> Self {
        Self {
            inner: Split::new(v, pred),
        }
    }
}

impl<T, P: Clone> Clone for RSplit<'_, T, P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for RSplit<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RSplit")
            .field("v", &self.inner.v)
            .field("finished", &self.inner.finished)
            .finish_non_exhaustive()
    }
}

impl<'a, T, P: FnMut(&T) -> bool> Iterator for RSplit<'a, T, P> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<&'a [T]> {
        self.inner.next_back()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

impl<'a, T, P: FnMut(&T) -> bool> DoubleEndedIterator for RSplit<'a, T, P> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a [T]> {
        self.inner.next()
    }
}

impl<T, P: FnMut(&T) -> bool> SplitIter for RSplit<'_, T, P> {
    #[inline]
    fn finish(&mut self) -> Option<Self::Item> {
        self.inner.finish()
    }
}

impl<T, P: FnMut(&T) -> bool> FusedIterator for RSplit<'_, T, P> {}

/// Mutable counterpart of [`RSplit`].
///
/// This `struct` is created by [`SliceMut::rsplit_mut`](crate::SliceMut::rsplit_mut).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RSplitMut<'a, T, P> {
    inner: SplitMut<'a, T, P>,
}

impl<'a, T, P: FnMut(&T) -> bool> RSplitMut<'a, T, P> {
    pub(crate) fn new(v: &'a mut [T], pred: P) -> Self {
        Self {
            inner: SplitMut::new(v, pred),
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for RSplitMut<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RSplitMut")
            .field("v", &self.inner.v)
            .field("finished", &self.inner.finished)
            .finish_non_exhaustive()
    }
}

impl<'a, T, P: FnMut(&T) -> bool> Iterator for RSplitMut<'a, T, P> {
    type Item = &'a mut [T];

    #[inline]
    fn next(&mut self) -> Option<&'a mut [T]> {
        self.inner.next_back()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

impl<'a, T, P: FnMut(&T) -> bool> DoubleEndedIterator for RSplitMut<'a, T, P> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut [T]> {
        self.inner.next()
    }
}

impl<T, P: FnMut(&T) -> bool> SplitIter for RSplitMut<'_, T, P> {
    #[inline]
    fn finish(&mut self) -> Option<Self::Item> {
        self.inner.finish()
    }
}

impl<T, P: FnMut(&T) -> bool> FusedIterator for RSplitMut<'_, T, P> {}

/// Caps a splitter at `count` items, the last being the unsplit rest.
#[derive(Clone, Debug)]
struct GenericSplitN<I> {
    iter: I,
    count: usize,
}

impl<I: SplitIter> GenericSplitN<I> {
    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        match self.count {
            0 => None,
            1 => {
                self.count -= 1;
                self.iter.finish()
            }
            _ => {
                self.count -= 1;
                self.iter.next()
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let hint = self.iter.size_hint();
        SizeHint::new(
            cmp::min(self.count, hint.lower),
            hint.upper.map(|upper| cmp::min(self.count, upper)),
        )
    }
}

macro_rules! splitn_iter {
    ($(#[$attr:meta])* $name:ident<$a:lifetime, $T:ident>, $inner:ident, $item:ty) => {
        $(#[$attr])*
        #[must_use = "iterators are lazy and do nothing unless consumed"]
        pub struct $name<$a, $T, P> {
            inner: GenericSplitN<$inner<$a, $T, P>>,
        }

        impl<$a, $T, P: FnMut(&$T) -> bool> $name<$a, $T, P> {
            pub(crate) fn new(iter: $inner<$a, $T, P>, count: usize) -> Self {
                Self {
                    inner: GenericSplitN { iter, count },
                }
            }
        }

        impl<$T: fmt::Debug, P> fmt::Debug for $name<'_, $T, P> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("inner", &self.inner.iter)
                    .field("count", &self.inner.count)
                    .finish()
            }
        }

        impl<$a, $T, P: FnMut(&$T) -> bool> Iterator for $name<$a, $T, P> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<$item> {
                self.inner.next()
            }

            #[inline]
            fn size_hint(&self) -> SizeHint {
                self.inner.size_hint()
            }
        }

        impl<$T, P: FnMut(&$T) -> bool> FusedIterator for $name<'_, $T, P> {}
    };
}

splitn_iter! {
    /// Like [`Split`], but yielding at most `n` sub-slices; the last one is
    /// the unsplit rest of the slice.
    ///
    /// This `struct` is created by [`Slice::splitn`](crate::Slice::splitn).
    SplitN<'a, T>, Split, &'a [T]
}

splitn_iter! {
    /// Like [`RSplit`], but yielding at most `n` sub-slices.
    ///
    /// This `struct` is created by [`Slice::rsplitn`](crate::Slice::rsplitn).
    RSplitN<'a, T>, RSplit, &'a [T]
}

splitn_iter! {
    /// Mutable counterpart of [`SplitN`].
    ///
    /// This `struct` is created by [`SliceMut::splitn_mut`](crate::SliceMut::splitn_mut).
    SplitNMut<'a, T>, SplitMut, &'a mut [T]
}

splitn_iter! {
    /// Mutable counterpart of [`RSplitN`].
    ///
    /// This `struct` is created by [`SliceMut::rsplitn_mut`](crate::SliceMut::rsplitn_mut).
    RSplitNMut<'a, T>, RSplitMut, &'a mut [T]
}

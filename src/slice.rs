// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Borrowed views over contiguous storage, and the iterators that walk them.
//!
//! [`Slice`] is a shared, `Copy` view; [`SliceMut`] is an exclusive one.
//! Both expose the same storage capability: a length, checked access
//! ([`Slice::at`]), access that is only checked in debug builds
//! ([`Slice::at_unchecked`]), and narrowing to a sub-view ([`Slice::sub`]).
//!
//! The traversal iterators borrow the storage for their whole lifetime, so
//! the owning collection cannot be pushed to, reallocated or dropped while
//! one is alive. Items are sub-slices (`&'a [T]` / `&'a mut [T]`) or element
//! references.
//!
//! Zero chunk and window sizes are rejected with a panic.

mod chunks;
mod iter;
mod split;
mod windows;

pub use chunks::{
    Chunks, ChunksExact, ChunksExactMut, ChunksMut, RChunks, RChunksExact, RChunksExactMut,
    RChunksMut,
};
pub use iter::{SliceIter, SliceIterMut};
pub use split::{
    RSplit, RSplitMut, RSplitN, RSplitNMut, Split, SplitInclusive, SplitInclusiveMut, SplitMut,
    SplitN, SplitNMut,
};
pub use windows::Windows;

// Crate imports
use crate::iter::IntoIterator;

// Core imports
use core::{
    fmt,
    ops::{Bound, RangeBounds},
};

/// Resolves `range` against a sequence of length `len` into `start..end`.
///
/// # Panics
///
/// Panics if `start > end` or `end > len`. `what` names the operation in the
/// message.
pub(crate) fn resolve_range<R>(range: R, len: usize, what: &str) -> (usize, usize)
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i
            .checked_add(1)
            .unwrap_or_else(|| panic!("{what} range start overflows usize")),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i
            .checked_add(1)
            .unwrap_or_else(|| panic!("{what} range end overflows usize")),
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };

    if start > end {
        panic!("{} range start > end: {} > {}", what, start, end);
    }
    if end > len {
        panic!("{} range end {} exceeds length {}", what, end, len);
    }
    (start, end)
}

#[cold]
#[track_caller]
fn out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index {} out of bounds for length {}", index, len)
}

/// A shared view of a contiguous run of `T`s.
///
/// `Slice` is `Copy`; narrowing it or iterating it never touches the
/// elements. Iterators created from it borrow the underlying storage for
/// `'a`, not the view.
///
/// # Examples
///
/// ```rust
/// use affine_iter::prelude::*;
/// use affine_iter::Slice;
///
/// let data = [1, 2, 3, 4, 5, 6, 7];
/// let s = Slice::new(&data);
/// assert_eq!(*s.at(2), 3);
/// assert_eq!(s.sub(2..5).as_raw(), &[3, 4, 5]);
///
/// let chunks: Vec<&[i32]> = s.chunks(3).collect();
/// assert_eq!(chunks, [&[1, 2, 3][..], &[4, 5, 6], &[7]]);
/// ```
pub struct Slice<'a, T> {
    inner: &'a [T],
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<T> Default for Slice<'_, T> {
    fn default() -> Self {
        Self { inner: &[] }
    }
}

impl<T: fmt::Debug> fmt::Debug for Slice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.inner, f)
    }
}

impl<T: PartialEq> PartialEq for Slice<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for Slice<'_, T> {}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(inner: &'a [T]) -> Self {
        Self { inner }
    }
}

impl<'a, T> Slice<'a, T> {
    /// Creates a view over `inner`.
    #[inline]
    pub const fn new(inner: &'a [T]) -> Self {
        Self { inner }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    #[track_caller]
    pub fn at(self, index: usize) -> &'a T {
        match self.inner.get(index) {
            Some(x) => x,
            None => out_of_bounds(index, self.len()),
        }
    }

    /// Returns the element at `index`; the caller guarantees
    /// `index < self.len()`.
    ///
    /// The guarantee is asserted in debug builds only.
    #[inline]
    #[track_caller]
    pub fn at_unchecked(self, index: usize) -> &'a T {
        debug_assert!(
            index < self.len(),
            "at_unchecked: index {} out of bounds for length {}",
            index,
            self.len()
        );
        &self.inner[index]
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(self, index: usize) -> Option<&'a T> {
        self.inner.get(index)
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    pub fn first(self) -> Option<&'a T> {
        self.inner.first()
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    pub fn last(self) -> Option<&'a T> {
        self.inner.last()
    }

    /// Narrows the view to `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or reaches past `self.len()`.
    #[track_caller]
    pub fn sub<R: RangeBounds<usize>>(self, range: R) -> Self {
        let (start, end) = resolve_range(range, self.len(), "sub");
        Self::new(&self.inner[start..end])
    }

    /// Splits the view into `[0, mid)` and `[mid, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > self.len()`.
    #[inline]
    #[track_caller]
    pub fn split_at(self, mid: usize) -> (Self, Self) {
        let (a, b) = self.inner.split_at(mid);
        (Self::new(a), Self::new(b))
    }

    /// Returns the underlying slice.
    #[inline]
    pub const fn as_raw(self) -> &'a [T] {
        self.inner
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(self) -> SliceIter<'a, T> {
        SliceIter::new(self.inner)
    }

    /// Returns an iterator over `chunk_size`-element sub-slices, starting at
    /// the front. The last chunk is shorter if `chunk_size` does not divide
    /// the length.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[inline]
    #[track_caller]
    pub fn chunks(self, chunk_size: usize) -> Chunks<'a, T> {
        Chunks::new(self.inner, chunk_size)
    }

    /// Like [`chunks`](Slice::chunks) but never yields a short chunk; the
    /// left-over tail is available from [`ChunksExact::remainder`].
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[inline]
    #[track_caller]
    pub fn chunks_exact(self, chunk_size: usize) -> ChunksExact<'a, T> {
        ChunksExact::new(self.inner, chunk_size)
    }

    /// Like [`chunks`](Slice::chunks) but anchored at the end: the short
    /// chunk, if any, is the front of the slice and comes last.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[inline]
    #[track_caller]
    pub fn rchunks(self, chunk_size: usize) -> RChunks<'a, T> {
        RChunks::new(self.inner, chunk_size)
    }

    /// Like [`rchunks`](Slice::rchunks) but never yields a short chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[inline]
    #[track_caller]
    pub fn rchunks_exact(self, chunk_size: usize) -> RChunksExact<'a, T> {
        RChunksExact::new(self.inner, chunk_size)
    }

    /// Returns an iterator over every overlapping window of `size`
    /// elements.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[inline]
    #[track_caller]
    pub fn windows(self, size: usize) -> Windows<'a, T> {
        Windows::new(self.inner, size)
    }

    /// Returns an iterator over the sub-slices separated by elements
    /// matching `pred`. Separators are not included.
    #[inline]
    pub fn split<P>(self, pred: P) -> Split<'a, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        Split::new(self.inner, pred)
    }

    /// Like [`split`](Slice::split) but each separator ends the sub-slice
    /// before it.
    #[inline]
    pub fn split_inclusive<P>(self, pred: P) -> SplitInclusive<'a, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        SplitInclusive::new(self.inner, pred)
    }

    /// Like [`split`](Slice::split) but starting from the back.
    #[inline]
    pub fn rsplit<P>(self, pred: P) -> RSplit<'a, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        RSplit::new(self.inner, pred)
    }

    /// Like [`split`](Slice::split) but yields at most `n` sub-slices; the
    /// last one is the unsplit rest.
    #[inline]
    pub fn splitn<P>(self, n: usize, pred: P) -> SplitN<'a, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        SplitN::new(Split::new(self.inner, pred), n)
    }

    /// Like [`splitn`](Slice::splitn) but starting from the back.
    #[inline]
    pub fn rsplitn<P>(self, n: usize, pred: P) -> RSplitN<'a, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        RSplitN::new(RSplit::new(self.inner, pred), n)
    }
}

impl<'a, T> IntoIterator for Slice<'a, T> {
    type Item = &'a T;
    type IntoIter = SliceIter<'a, T>;

    #[inline]
    fn into_iter(self) -> SliceIter<'a, T> {
        self.iter()
    }
}

/// An exclusive view of a contiguous run of `T`s.
///
/// The `*_mut` iterator constructors consume the view and borrow the storage
/// for `'a`. Use [`reborrow`](SliceMut::reborrow) to keep the view.
pub struct SliceMut<'a, T> {
    inner: &'a mut [T],
}

impl<T> Default for SliceMut<'_, T> {
    fn default() -> Self {
        Self { inner: &mut [] }
    }
}

impl<T: fmt::Debug> fmt::Debug for SliceMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl<'a, T> From<&'a mut [T]> for SliceMut<'a, T> {
    fn from(inner: &'a mut [T]) -> Self {
        Self { inner }
    }
}

impl<'a, T> SliceMut<'a, T> {
    /// Creates a view over `inner`.
    #[inline]
    pub fn new(inner: &'a mut [T]) -> Self {
        Self { inner }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns a shorter-lived view over the same elements.
    #[inline]
    pub fn reborrow(&mut self) -> SliceMut<'_, T> {
        SliceMut::new(self.inner)
    }

    /// Returns a shared view over the same elements.
    #[inline]
    pub fn as_slice(&self) -> Slice<'_, T> {
        Slice::new(self.inner)
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        self.as_slice().at(index)
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        let len = self.inner.len();
        match self.inner.get_mut(index) {
            Some(x) => x,
            None => out_of_bounds(index, len),
        }
    }

    /// Returns the element at `index`; the caller guarantees
    /// `index < self.len()`.
    ///
    /// The guarantee is asserted in debug builds only.
    #[inline]
    #[track_caller]
    pub fn at_unchecked(&self, index: usize) -> &T {
        self.as_slice().at_unchecked(index)
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Returns the element at `index` mutably, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.inner.get_mut(index)
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.inner.first()
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.inner.last()
    }

    /// Narrows the view to `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or reaches past `self.len()`.
    #[track_caller]
    pub fn sub<R: RangeBounds<usize>>(self, range: R) -> Self {
        let (start, end) = resolve_range(range, self.len(), "sub");
        Self::new(&mut self.inner[start..end])
    }

    /// Splits the view into `[0, mid)` and `[mid, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > self.len()`.
    #[inline]
    #[track_caller]
    pub fn split_at(self, mid: usize) -> (Self, Self) {
        let (a, b) = self.inner.split_at_mut(mid);
        (Self::new(a), Self::new(b))
    }

    /// Returns the underlying slice.
    #[inline]
    pub fn as_raw(&self) -> &[T] {
        self.inner
    }

    /// Returns the underlying mutable slice, consuming the view.
    #[inline]
    pub fn into_raw(self) -> &'a mut [T] {
        self.inner
    }

    /// Returns an iterator over shared references to the elements.
    #[inline]
    pub fn iter(&self) -> SliceIter<'_, T> {
        SliceIter::new(self.inner)
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(self) -> SliceIterMut<'a, T> {
        SliceIterMut::new(self.inner)
    }

    /// Mutable counterpart of [`Slice::chunks`].
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[inline]
    #[track_caller]
    pub fn chunks_mut(self, chunk_size: usize) -> ChunksMut<'a, T> {
        ChunksMut::new(self.inner, chunk_size)
    }

    /// Mutable counterpart of [`Slice::chunks_exact`].
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[inline]
    #[track_caller]
    pub fn chunks_exact_mut(self, chunk_size: usize) -> ChunksExactMut<'a, T> {
        ChunksExactMut::new(self.inner, chunk_size)
    }

    /// Mutable counterpart of [`Slice::rchunks`].
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[inline]
    #[track_caller]
    pub fn rchunks_mut(self, chunk_size: usize) -> RChunksMut<'a, T> {
        RChunksMut::new(self.inner, chunk_size)
    }

    /// Mutable counterpart of [`Slice::rchunks_exact`].
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    #[inline]
    #[track_caller]
    pub fn rchunks_exact_mut(self, chunk_size: usize) -> RChunksExactMut<'a, T> {
        RChunksExactMut::new(self.inner, chunk_size)
    }

    /// Mutable counterpart of [`Slice::split`].
    #[inline]
    pub fn split_mut<P>(self, pred: P) -> SplitMut<'a, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        SplitMut::new(self.inner, pred)
    }

    /// Mutable counterpart of [`Slice::split_inclusive`].
    #[inline]
    pub fn split_inclusive_mut<P>(self, pred: P) -> SplitInclusiveMut<'a, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        SplitInclusiveMut::new(self.inner, pred)
    }

    /// Mutable counterpart of [`Slice::rsplit`].
    #[inline]
    pub fn rsplit_mut<P>(self, pred: P) -> RSplitMut<'a, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        RSplitMut::new(self.inner, pred)
    }

    /// Mutable counterpart of [`Slice::splitn`].
    #[inline]
    pub fn splitn_mut<P>(self, n: usize, pred: P) -> SplitNMut<'a, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        SplitNMut::new(SplitMut::new(self.inner, pred), n)
    }

    /// Mutable counterpart of [`Slice::rsplitn`].
    #[inline]
    pub fn rsplitn_mut<P>(self, n: usize, pred: P) -> RSplitNMut<'a, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        RSplitNMut::new(RSplitMut::new(self.inner, pred), n)
    }
}

impl<'a, T> IntoIterator for SliceMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = SliceIterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> SliceIterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{resolve_range, Slice, SliceMut};
    use crate::iter::Iterator;

    #[test]
    fn test_storage_capability() {
        let data = [10, 20, 30, 40];
        let s = Slice::new(&data);
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());
        assert_eq!(*s.at(3), 40);
        assert_eq!(*s.at_unchecked(0), 10);
        assert_eq!(s.get(4), None);
        assert_eq!(s.first(), Some(&10));
        assert_eq!(s.last(), Some(&40));
        assert!(Slice::<u8>::default().is_empty());
    }

    #[test]
    fn test_sub_views() {
        let data = [1, 2, 3, 4, 5];
        let s = Slice::new(&data);
        assert_eq!(s.sub(1..3).as_raw(), &[2, 3]);
        assert_eq!(s.sub(..=1).as_raw(), &[1, 2]);
        assert_eq!(s.sub(3..).as_raw(), &[4, 5]);
        assert_eq!(s.sub(..).as_raw(), &data);
        assert!(s.sub(5..5).is_empty());
        let (a, b) = s.split_at(2);
        assert_eq!((a.len(), b.len()), (2, 3));
    }

    #[test]
    #[should_panic(expected = "index 4 out of bounds for length 4")]
    fn test_at_out_of_bounds_panics() {
        let data = [1, 2, 3, 4];
        Slice::new(&data).at(4);
    }

    #[test]
    #[should_panic(expected = "sub range start > end: 3 > 2")]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverted_sub_panics() {
        let data = [1, 2, 3, 4];
        Slice::new(&data).sub(3..2);
    }

    #[test]
    #[should_panic(expected = "sub range end 5 exceeds length 4")]
    fn test_sub_past_end_panics() {
        let data = [1, 2, 3, 4];
        Slice::new(&data).sub(..5);
    }

    #[test]
    fn test_resolve_range_forms() {
        use core::ops::Bound;
        assert_eq!(resolve_range(.., 7, "t"), (0, 7));
        assert_eq!(resolve_range(2..=4, 7, "t"), (2, 5));
        assert_eq!(resolve_range((Bound::Excluded(1), Bound::Unbounded), 7, "t"), (2, 7));
    }

    #[test]
    fn test_slice_mut_access() {
        let mut data = [1, 2, 3, 4];
        let mut s = SliceMut::new(&mut data);
        *s.at_mut(0) = 10;
        if let Some(x) = s.get_mut(3) {
            *x = 40;
        }
        assert_eq!(*s.at(0), 10);
        for x in s.reborrow().sub(1..3).iter_mut().into_std() {
            *x *= 100;
        }
        assert_eq!(s.as_raw(), &[10, 200, 300, 40]);
        let (a, b) = s.split_at(1);
        assert_eq!(a.into_raw(), &mut [10]);
        assert_eq!(b.len(), 3);
    }

    #[test]
    #[should_panic(expected = "index 9 out of bounds for length 2")]
    fn test_at_mut_out_of_bounds_panics() {
        let mut data = [1, 2];
        SliceMut::new(&mut data).at_mut(9);
    }
}

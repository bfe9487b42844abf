// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator, Iterator, TrustedLen},
    size_hint::SizeHint,
};

// Core imports
use core::{cmp, fmt, mem};

#[inline]
#[track_caller]
fn check_chunk_size(chunk_size: usize) {
    assert!(chunk_size != 0, "chunk size must be non-zero");
}

/// Every chunk iterator knows its exact length; derive the remaining
/// capabilities from `size_hint`.
macro_rules! impl_exact_chunks {
    ($($name:ident),* $(,)?) => {$(
        impl<T> ExactSizeIterator for $name<'_, T> {
            #[inline]
            fn exact_size_hint(&self) -> usize {
                self.size_hint().lower
            }
        }

        impl<T> TrustedLen for $name<'_, T> {}
        impl<T> FusedIterator for $name<'_, T> {}
    )*};
}

impl_exact_chunks!(
    Chunks,
    ChunksMut,
    ChunksExact,
    ChunksExactMut,
    RChunks,
    RChunksMut,
    RChunksExact,
    RChunksExactMut,
);

/// An iterator over non-overlapping sub-slices of `chunk_size` elements,
/// starting at the front. The last chunk may be shorter.
///
/// This `struct` is created by [`Slice::chunks`](crate::Slice::chunks).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chunks<'a, T> {
    v: &'a [T],
    chunk_size: usize,
}

impl<'a, T> Chunks<'a, T> {
    #[track_caller]
    pub(crate) fn new(v: &'a [T], chunk_size: usize) -> Self {
        check_chunk_size(chunk_size);
        Self { v, chunk_size }
    }
}

impl<T> Clone for Chunks<'_, T> {
    fn clone(&self) -> Self {
        Self {
            v: self.v,
            chunk_size: self.chunk_size,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Chunks<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunks")
            .field("v", &self.v)
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<&'a [T]> {
        if self.v.is_empty() {
            return None;
        }
        let size = cmp::min(self.v.len(), self.chunk_size);
        let (head, tail) = self.v.split_at(size);
        debug_assert!(!head.is_empty() && head.len() <= self.chunk_size);
        self.v = tail;
        Some(head)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.v.len().div_ceil(self.chunk_size))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a [T]> {
        match n.checked_mul(self.chunk_size) {
            Some(start) if start < self.v.len() => {
                let end = start
                    .checked_add(self.chunk_size)
                    .map_or(self.v.len(), |end| cmp::min(end, self.v.len()));
                let chunk = &self.v[start..end];
                self.v = &self.v[end..];
                Some(chunk)
            }
            _ => {
                self.v = &[];
                None
            }
        }
    }

    #[inline]
    fn last(self) -> Option<&'a [T]> {
        if self.v.is_empty() {
            None
        } else {
            let start = (self.v.len() - 1) / self.chunk_size * self.chunk_size;
            Some(&self.v[start..])
        }
    }
}

impl<'a, T> DoubleEndedIterator for Chunks<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a [T]> {
        if self.v.is_empty() {
            return None;
        }
        let rem = self.v.len() % self.chunk_size;
        let size = if rem == 0 { self.chunk_size } else { rem };
        let (head, tail) = self.v.split_at(self.v.len() - size);
        self.v = head;
        Some(tail)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a [T]> {
        let len = self.exact_size_hint();
        if n >= len {
            self.v = &[];
            None
        } else {
            let start = (len - 1 - n) * self.chunk_size;
            let end = cmp::min(start + self.chunk_size, self.v.len());
            let chunk = &self.v[start..end];
            self.v = &self.v[..start];
            Some(chunk)
        }
    }
}

/// Mutable counterpart of [`Chunks`].
///
/// This `struct` is created by [`SliceMut::chunks_mut`](crate::SliceMut::chunks_mut).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ChunksMut<'a, T> {
    v: &'a mut [T],
    chunk_size: usize,
}

impl<'a, T> ChunksMut<'a, T> {
    #[track_caller]
    pub(crate) fn new(v: &'a mut [T], chunk_size: usize) -> Self {
        check_chunk_size(chunk_size);
        Self { v, chunk_size }
    }
}

impl<T: fmt::Debug> fmt::Debug for ChunksMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunksMut")
            .field("v", &self.v)
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}

impl<'a, T> Iterator for ChunksMut<'a, T> {
    type Item = &'a mut [T];

    #[inline]
    fn next(&mut self) -> Option<&'a mut [T]> {
        let v = mem::take(&mut self.v);
        if v.is_empty() {
            return None;
        }
        let size = cmp::min(v.len(), self.chunk_size);
        let (head, tail) = v.split_at_mut(size);
        self.v = tail;
        Some(head)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.v.len().div_ceil(self.chunk_size))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a mut [T]> {
        let v = mem::take(&mut self.v);
        let start = n.checked_mul(self.chunk_size).filter(|&s| s < v.len())?;
        let end = start
            .checked_add(self.chunk_size)
            .map_or(v.len(), |end| cmp::min(end, v.len()));
        let (head, tail) = v.split_at_mut(end);
        self.v = tail;
        Some(&mut head[start..])
    }
}

impl<'a, T> DoubleEndedIterator for ChunksMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut [T]> {
        let v = mem::take(&mut self.v);
        if v.is_empty() {
            return None;
        }
        let rem = v.len() % self.chunk_size;
        let size = if rem == 0 { self.chunk_size } else { rem };
        let at = v.len() - size;
        let (head, tail) = v.split_at_mut(at);
        self.v = head;
        Some(tail)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a mut [T]> {
        let len = self.exact_size_hint();
        let v = mem::take(&mut self.v);
        if n >= len {
            return None;
        }
        let start = (len - 1 - n) * self.chunk_size;
        let end = cmp::min(start + self.chunk_size, v.len());
        let (head, _) = v.split_at_mut(end);
        let (head, chunk) = head.split_at_mut(start);
        self.v = head;
        Some(chunk)
    }
}

/// An iterator over non-overlapping sub-slices of exactly `chunk_size`
/// elements, starting at the front.
///
/// The elements that do not fill a whole chunk are never yielded; they are
/// available from [`remainder`](ChunksExact::remainder).
///
/// This `struct` is created by [`Slice::chunks_exact`](crate::Slice::chunks_exact).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ChunksExact<'a, T> {
    v: &'a [T],
    rem: &'a [T],
    chunk_size: usize,
}

impl<'a, T> ChunksExact<'a, T> {
    #[track_caller]
    pub(crate) fn new(v: &'a [T], chunk_size: usize) -> Self {
        check_chunk_size(chunk_size);
        let fst_len = v.len() - v.len() % chunk_size;
        let (v, rem) = v.split_at(fst_len);
        debug_assert_eq!(v.len() % chunk_size, 0, "exact chunks must tile the body");
        Self { v, rem, chunk_size }
    }

    /// Returns the trailing elements that do not fill a whole chunk.
    ///
    /// The remainder is fixed at construction and does not change as the
    /// iterator is consumed.
    #[inline]
    pub fn remainder(&self) -> &'a [T] {
        self.rem
    }
}

impl<T> Clone for ChunksExact<'_, T> {
    fn clone(&self) -> Self {
        Self {
            v: self.v,
            rem: self.rem,
            chunk_size: self.chunk_size,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ChunksExact<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunksExact")
            .field("v", &self.v)
            .field("rem", &self.rem)
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}

impl<'a, T> Iterator for ChunksExact<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<&'a [T]> {
        if self.v.len() < self.chunk_size {
            return None;
        }
        let (head, tail) = self.v.split_at(self.chunk_size);
        self.v = tail;
        Some(head)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.v.len() / self.chunk_size)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a [T]> {
        match n.checked_mul(self.chunk_size) {
            Some(start) if start < self.v.len() => {
                self.v = &self.v[start..];
                self.next()
            }
            _ => {
                self.v = &[];
                None
            }
        }
    }
}

impl<'a, T> DoubleEndedIterator for ChunksExact<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a [T]> {
        if self.v.len() < self.chunk_size {
            return None;
        }
        let (head, tail) = self.v.split_at(self.v.len() - self.chunk_size);
        self.v = head;
        Some(tail)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a [T]> {
        let len = self.exact_size_hint();
        if n >= len {
            self.v = &[];
            None
        } else {
            let start = (len - 1 - n) * self.chunk_size;
            let chunk = &self.v[start..start + self.chunk_size];
            self.v = &self.v[..start];
            Some(chunk)
        }
    }
}

/// Mutable counterpart of [`ChunksExact`].
///
/// This `struct` is created by
/// [`SliceMut::chunks_exact_mut`](crate::SliceMut::chunks_exact_mut).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ChunksExactMut<'a, T> {
    v: &'a mut [T],
    rem: &'a mut [T],
    chunk_size: usize,
}

impl<'a, T> ChunksExactMut<'a, T> {
    #[track_caller]
    pub(crate) fn new(v: &'a mut [T], chunk_size: usize) -> Self {
        check_chunk_size(chunk_size);
        let fst_len = v.len() - v.len() % chunk_size;
        let (v, rem) = v.split_at_mut(fst_len);
        debug_assert_eq!(v.len() % chunk_size, 0, "exact chunks must tile the body");
        Self { v, rem, chunk_size }
    }

    /// Returns the trailing elements that do not fill a whole chunk.
    #[inline]
    pub fn remainder(&self) -> &[T] {
        self.rem
    }

    /// Returns the trailing elements for the iterator's full lifetime.
    #[inline]
    pub fn into_remainder(self) -> &'a mut [T] {
        self.rem
    }
}

impl<T: fmt::Debug> fmt::Debug for ChunksExactMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunksExactMut")
            .field("v", &self.v)
            .field("rem", &self.rem)
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}

impl<'a, T> Iterator for ChunksExactMut<'a, T> {
    type Item = &'a mut [T];

    #[inline]
    fn next(&mut self) -> Option<&'a mut [T]> {
        if self.v.len() < self.chunk_size {
            return None;
        }
        let (head, tail) = mem::take(&mut self.v).split_at_mut(self.chunk_size);
        self.v = tail;
        Some(head)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.v.len() / self.chunk_size)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a mut [T]> {
        let v = mem::take(&mut self.v);
        let start = n.checked_mul(self.chunk_size).filter(|&s| s < v.len())?;
        self.v = &mut v[start..];
        self.next()
    }
}

impl<'a, T> DoubleEndedIterator for ChunksExactMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut [T]> {
        if self.v.len() < self.chunk_size {
            return None;
        }
        let v = mem::take(&mut self.v);
        let at = v.len() - self.chunk_size;
        let (head, tail) = v.split_at_mut(at);
        self.v = head;
        Some(tail)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a mut [T]> {
        let len = self.exact_size_hint();
        let v = mem::take(&mut self.v);
        if n >= len {
            return None;
        }
        let start = (len - 1 - n) * self.chunk_size;
        let (head, _) = v.split_at_mut(start + self.chunk_size);
        let (head, chunk) = head.split_at_mut(start);
        self.v = head;
        Some(chunk)
    }
}

/// An iterator over non-overlapping sub-slices of `chunk_size` elements,
/// starting at the back. The last chunk yielded, taken from the front of
/// the slice, may be shorter.
///
/// This `struct` is created by [`Slice::rchunks`](crate::Slice::rchunks).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RChunks<'a, T> {
    v: &'a [T],
    chunk_size: usize,
}

impl<'a, T> RChunks<'a, T> {
    #[track_caller]
    pub(crate) fn new(v: &'a [T], chunk_size: usize) -> Self {
        check_chunk_size(chunk_size);
        Self { v, chunk_size }
    }
}

impl<T> Clone for RChunks<'_, T> {
    fn clone(&self) -> Self {
        Self {
            v: self.v,
            chunk_size: self.chunk_size,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RChunks<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RChunks")
            .field("v", &self.v)
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}

impl<'a, T> Iterator for RChunks<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<&'a [T]> {
        if self.v.is_empty() {
            return None;
        }
        let size = cmp::min(self.v.len(), self.chunk_size);
        let (head, tail) = self.v.split_at(self.v.len() - size);
        self.v = head;
        Some(tail)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.v.len().div_ceil(self.chunk_size))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a [T]> {
        match n.checked_mul(self.chunk_size) {
            Some(skip) if skip < self.v.len() => {
                let end = self.v.len() - skip;
                let start = end.saturating_sub(self.chunk_size);
                let chunk = &self.v[start..end];
                self.v = &self.v[..start];
                Some(chunk)
            }
            _ => {
                self.v = &[];
                None
            }
        }
    }

    #[inline]
    fn last(self) -> Option<&'a [T]> {
        if self.v.is_empty() {
            None
        } else {
            let rem = self.v.len() % self.chunk_size;
            let end = if rem == 0 { self.chunk_size } else { rem };
            Some(&self.v[..end])
        }
    }
}

impl<'a, T> DoubleEndedIterator for RChunks<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a [T]> {
        if self.v.is_empty() {
            return None;
        }
        let rem = self.v.len() % self.chunk_size;
        let size = if rem == 0 { self.chunk_size } else { rem };
        let (head, tail) = self.v.split_at(size);
        self.v = tail;
        Some(head)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a [T]> {
        let len = self.exact_size_hint();
        if n >= len {
            self.v = &[];
            None
        } else {
            let end = self.v.len() - (len - 1 - n) * self.chunk_size;
            let start = end.saturating_sub(self.chunk_size);
            let chunk = &self.v[start..end];
            self.v = &self.v[end..];
            Some(chunk)
        }
    }
}

/// Mutable counterpart of [`RChunks`].
///
/// This `struct` is created by [`SliceMut::rchunks_mut`](crate::SliceMut::rchunks_mut).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RChunksMut<'a, T> {
    v: &'a mut [T],
    chunk_size: usize,
}

impl<'a, T> RChunksMut<'a, T> {
    #[track_caller]
    pub(crate) fn new(v: &'a mut [T], chunk_size: usize) -> Self {
        check_chunk_size(chunk_size);
        Self { v, chunk_size }
    }
}

impl<T: fmt::Debug> fmt::Debug for RChunksMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RChunksMut")
            .field("v", &self.v)
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}

impl<'a, T> Iterator for RChunksMut<'a, T> {
    type Item = &'a mut [T];

    #[inline]
    fn next(&mut self) -> Option<&'a mut [T]> {
        let v = mem::take(&mut self.v);
        if v.is_empty() {
            return None;
        }
        let at = v.len() - cmp::min(v.len(), self.chunk_size);
        let (head, tail) = v.split_at_mut(at);
        self.v = head;
        Some(tail)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.v.len().div_ceil(self.chunk_size))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a mut [T]> {
        let v = mem::take(&mut self.v);
        let skip = n.checked_mul(self.chunk_size).filter(|&s| s < v.len())?;
        let end = v.len() - skip;
        let start = end.saturating_sub(self.chunk_size);
        let (head, _) = v.split_at_mut(end);
        let (head, chunk) = head.split_at_mut(start);
        self.v = head;
        Some(chunk)
    }
}

impl<'a, T> DoubleEndedIterator for RChunksMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut [T]> {
        let v = mem::take(&mut self.v);
        if v.is_empty() {
            return None;
        }
        let rem = v.len() % self.chunk_size;
        let size = if rem == 0 { self.chunk_size } else { rem };
        let (head, tail) = v.split_at_mut(size);
        self.v = tail;
        Some(head)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a mut [T]> {
        let len = self.exact_size_hint();
        let v = mem::take(&mut self.v);
        if n >= len {
            return None;
        }
        let end = v.len() - (len - 1 - n) * self.chunk_size;
        let start = end.saturating_sub(self.chunk_size);
        let (head, tail) = v.split_at_mut(end);
        self.v = tail;
        Some(&mut head[start..])
    }
}

/// An iterator over non-overlapping sub-slices of exactly `chunk_size`
/// elements, starting at the back.
///
/// The leading elements that do not fill a whole chunk are available from
/// [`remainder`](RChunksExact::remainder).
///
/// This `struct` is created by [`Slice::rchunks_exact`](crate::Slice::rchunks_exact).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RChunksExact<'a, T> {
    v: &'a [T],
    rem: &'a [T],
    chunk_size: usize,
}

impl<'a, T> RChunksExact<'a, T> {
    #[track_caller]
    pub(crate) fn new(v: &'a [T], chunk_size: usize) -> Self {
        check_chunk_size(chunk_size);
        let (rem, v) = v.split_at(v.len() % chunk_size);
        debug_assert_eq!(v.len() % chunk_size, 0, "exact chunks must tile the body");
        Self { v, rem, chunk_size }
    }

    /// Returns the leading elements that do not fill a whole chunk.
    #[inline]
    pub fn remainder(&self) -> &'a [T] {
        self.rem
    }
}

impl<T> Clone for RChunksExact<'_, T> {
    fn clone(&self) -> Self {
        Self {
            v: self.v,
            rem: self.rem,
            chunk_size: self.chunk_size,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RChunksExact<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RChunksExact")
            .field("v", &self.v)
            .field("rem", &self.rem)
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}

impl<'a, T> Iterator for RChunksExact<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<&'a [T]> {
        if self.v.len() < self.chunk_size {
            return None;
        }
        let (head, tail) = self.v.split_at(self.v.len() - self.chunk_size);
        self.v = head;
        Some(tail)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.v.len() / self.chunk_size)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a [T]> {
        match n.checked_mul(self.chunk_size) {
            Some(skip) if skip < self.v.len() => {
                self.v = &self.v[..self.v.len() - skip];
                self.next()
            }
            _ => {
                self.v = &[];
                None
            }
        }
    }
}

impl<'a, T> DoubleEndedIterator for RChunksExact<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a [T]> {
        if self.v.len() < self.chunk_size {
            return None;
        }
        let (head, tail) = self.v.split_at(self.chunk_size);
        self.v = tail;
        Some(head)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a [T]> {
        let len = self.exact_size_hint();
        if n >= len {
            self.v = &[];
            None
        } else {
            let end = self.v.len() - (len - 1 - n) * self.chunk_size;
            let chunk = &self.v[end - self.chunk_size..end];
            self.v = &self.v[end..];
            Some(chunk)
        }
    }
}

/// Mutable counterpart of [`RChunksExact`].
///
/// This `struct` is created by
/// [`SliceMut::rchunks_exact_mut`](crate::SliceMut::rchunks_exact_mut).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RChunksExactMut<'a, T> {
    v: &'a mut [T],
    rem: &'a mut [T],
    chunk_size: usize,
}

impl<'a, T> RChunksExactMut<'a, T> {
    #[track_caller]
    pub(crate) fn new(v: &'a mut [T], chunk_size: usize) -> Self {
        check_chunk_size(chunk_size);
        let at = v.len() % chunk_size;
        let (rem, v) = v.split_at_mut(at);
        debug_assert_eq!(v.len() % chunk_size, 0, "exact chunks must tile the body");
        Self { v, rem, chunk_size }
    }

    /// Returns the leading elements that do not fill a whole chunk.
    #[inline]
    pub fn remainder(&self) -> &[T] {
        self.rem
    }

    /// Returns the leading elements for the iterator's full lifetime.
    #[inline]
    pub fn into_remainder(self) -> &'a mut [T] {
        self.rem
    }
}

impl<T: fmt::Debug> fmt::Debug for RChunksExactMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RChunksExactMut")
            .field("v", &self.v)
            .field("rem", &self.rem)
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}

impl<'a, T> Iterator for RChunksExactMut<'a, T> {
    type Item = &'a mut [T];

    #[inline]
    fn next(&mut self) -> Option<&'a mut [T]> {
        if self.v.len() < self.chunk_size {
            return None;
        }
        let v = mem::take(&mut self.v);
        let at = v.len() - self.chunk_size;
        let (head, tail) = v.split_at_mut(at);
        self.v = head;
        Some(tail)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.v.len() / self.chunk_size)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a mut [T]> {
        let v = mem::take(&mut self.v);
        let skip = n.checked_mul(self.chunk_size).filter(|&s| s < v.len())?;
        let end = v.len() - skip;
        self.v = &mut v[..end];
        self.next()
    }
}

impl<'a, T> DoubleEndedIterator for RChunksExactMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut [T]> {
        if self.v.len() < self.chunk_size {
            return None;
        }
        let (head, tail) = mem::take(&mut self.v).split_at_mut(self.chunk_size);
        self.v = tail;
        Some(head)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a mut [T]> {
        let len = self.exact_size_hint();
        let v = mem::take(&mut self.v);
        if n >= len {
            return None;
        }
        let end = v.len() - (len - 1 - n) * self.chunk_size;
        let (head, tail) = v.split_at_mut(end);
        self.v = tail;
        let start = end - self.chunk_size;
        Some(&mut head[start..])
    }
}

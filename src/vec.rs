// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The growable [`Vec`] container and its iterators.
//!
//! `Vec<T>` owns a heap buffer of `T`s and hands out the crate's iterators:
//! [`iter`](Vec::iter) / [`iter_mut`](Vec::iter_mut) borrow it,
//! [`into_iter`](IntoIterator::into_iter) consumes it and
//! [`drain`](Vec::drain) removes a range while iterating.
//!
//! Borrowing iterators hold the vector's borrow for their whole lifetime, so
//! it cannot be pushed to (and thus reallocated) while one is alive.
//!
//! Indexing and range arguments follow slice semantics and panic when out of
//! bounds. Position arguments of the fallible operations return
//! [`Error::OutOfBounds`] instead.

mod drain;
mod into_iter;

pub use drain::Drain;
pub use into_iter::IntoIter;

// Crate imports
use crate::{
    error::Error,
    iter::{FromIterator, IntoIterator, Iterator},
    slice::{Slice, SliceIter, SliceIterMut, SliceMut},
};

// Alloc imports
use alloc::vec::Vec as AllocVec;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// A contiguous, growable, heap-allocated sequence of `T`s.
///
/// # Examples
///
/// ```rust
/// use affine_iter::prelude::*;
/// use affine_iter::Vec;
///
/// let mut v = Vec::new();
/// v.push(1);
/// v.extend_from_slice(&[2, 3, 4]);
/// assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
///
/// let doubled: Vec<i32> = v.iter().map(|x| x * 2).collect();
/// assert_eq!(doubled.as_slice(), &[2, 4, 6, 8]);
///
/// let drained: Vec<i32> = v.drain(1..3).collect();
/// assert_eq!(drained.as_slice(), &[2, 3]);
/// assert_eq!(v.as_slice(), &[1, 4]);
/// ```
#[derive(Clone, Default)]
pub struct Vec<T> {
    pub(crate) buf: AllocVec<T>,
}

impl<T> Vec<T> {
    /// Creates an empty vector without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: AllocVec::new(),
        }
    }

    /// Creates an empty vector with room for at least `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: AllocVec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the vector can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Appends `value` at the back.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.buf.push(value);
    }

    /// Removes and returns the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Inserts `value` at `index`, shifting everything after it one slot to
    /// the right.
    ///
    /// Returns [`Error::OutOfBounds`] if `index > len`; the vector is left
    /// unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len() {
            return Err(Error::OutOfBounds);
        }
        self.buf.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.len()).then(|| self.buf.remove(index))
    }

    /// Fallible variant of [`remove`](Vec::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfBounds)
    }

    /// Removes the element at `index` and fills the hole with the last
    /// element. `O(1)`, but does not preserve order.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        (index < self.len()).then(|| self.buf.swap_remove(index))
    }

    /// Shortens the vector to `new_len`; a no-op if it is already shorter.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        self.buf.truncate(new_len);
    }

    /// Removes every element, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Keeps only the elements for which `keep` returns `true`, preserving
    /// their order.
    #[inline]
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.buf.retain(keep);
    }

    /// Splits off `[at, len)` into a new vector, leaving `[0, at)`.
    ///
    /// Returns [`Error::OutOfBounds`] if `at > len`; the vector is left
    /// unchanged.
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        if at > self.len() {
            return Err(Error::OutOfBounds);
        }
        Ok(Self {
            buf: self.buf.split_off(at),
        })
    }

    /// Returns `Some(&T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Returns `Some(&mut T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.buf.first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.buf.last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.buf.first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.buf.last_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.buf.contains(x)
    }

    /// Appends every item of `iter`.
    ///
    /// Reserves the iterator's lower size bound up front and keeps growing
    /// past it if the iterator yields more.
    pub fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        self.buf.reserve(iter.size_hint().lower);
        while let Some(x) = iter.next() {
            self.buf.push(x);
        }
    }

    /// Appends clones of every element of `other`.
    #[inline]
    pub fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        self.buf.extend_from_slice(other);
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Returns a shared [`Slice`] view, for chunked, windowed or split
    /// traversal.
    #[inline]
    pub fn slice(&self) -> Slice<'_, T> {
        Slice::new(&self.buf)
    }

    /// Returns an exclusive [`SliceMut`] view.
    #[inline]
    pub fn slice_mut(&mut self) -> SliceMut<'_, T> {
        SliceMut::new(&mut self.buf)
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> SliceIter<'_, T> {
        SliceIter::new(&self.buf)
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> SliceIterMut<'_, T> {
        SliceIterMut::new(&mut self.buf)
    }

    /// Unwraps the underlying `alloc` vector.
    #[inline]
    pub fn into_inner(self) -> AllocVec<T> {
        self.buf
    }
}

impl<T: fmt::Debug> fmt::Debug for Vec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec")
            .field("len", &self.len())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Vec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for Vec<T> {}
impl<T: Ord> Ord for Vec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for Vec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for Vec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> From<AllocVec<T>> for Vec<T> {
    fn from(buf: AllocVec<T>) -> Self {
        Self { buf }
    }
}

impl<T, const N: usize> From<[T; N]> for Vec<T> {
    fn from(arr: [T; N]) -> Self {
        Self {
            buf: AllocVec::from(arr),
        }
    }
}

impl<T: Clone> From<&[T]> for Vec<T> {
    fn from(s: &[T]) -> Self {
        Self { buf: s.to_vec() }
    }
}

impl<T> AsRef<[T]> for Vec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for Vec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for Vec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for Vec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> FromIterator<T> for Vec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T> IntoIterator for Vec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.buf)
    }
}

impl<'a, T> IntoIterator for &'a Vec<T> {
    type Item = &'a T;
    type IntoIter = SliceIter<'a, T>;

    #[inline]
    fn into_iter(self) -> SliceIter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vec<T> {
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
    use super::Vec;
    use crate::iter::{from_std, IntoIterator, Iterator};
    use crate::{Error, SizeHint};
    use alloc::string::{String, ToString};
    use alloc::vec;

    fn vec_of(xs: &[i32]) -> Vec<i32> {
        Vec::from(xs)
    }

    #[test]
    fn test_push_pop() {
        let mut v = Vec::new();
        v.push(1);
        v.push(2);
        assert_eq!(v.len(), 2);
        assert_eq!(v.pop(), Some(2));
        assert_eq!(v.pop(), Some(1));
        assert_eq!(v.pop(), None);
        assert!(v.is_empty());
    }

    #[test]
    fn test_with_capacity() {
        let v: Vec<u8> = Vec::with_capacity(16);
        assert!(v.capacity() >= 16);
        assert!(v.is_empty());
    }

    #[test]
    fn test_insert_remove_and_swap_remove() {
        let mut v = vec_of(&[10, 20, 30]);
        v.insert(1, 15).unwrap();
        assert_eq!(v.as_slice(), &[10, 15, 20, 30]);
        v.insert(4, 35).unwrap();
        assert_eq!(v.as_slice(), &[10, 15, 20, 30, 35]);
        assert_eq!(v.insert(9, 0), Err(Error::OutOfBounds));
        assert_eq!(v.len(), 5);

        let mut r = Vec::from([1, 2, 3, 4, 5]);
        assert_eq!(r.remove(2), Some(3));
        assert_eq!(r.as_slice(), &[1, 2, 4, 5]);
        assert_eq!(r.remove(4), None);
        assert_eq!(r.try_remove(8), Err(Error::OutOfBounds));

        let mut s = Vec::from([1, 2, 3, 4, 5]);
        assert_eq!(s.swap_remove(1), Some(2));
        assert_eq!(s.as_slice(), &[1, 5, 3, 4]);
        assert_eq!(s.swap_remove(10), None);
    }

    #[test]
    fn test_truncate_clear_retain() {
        let mut v = vec_of(&[1, 2, 3, 4, 5, 6]);
        v.retain(|x| x % 2 == 0);
        assert_eq!(v.as_slice(), &[2, 4, 6]);
        v.truncate(10);
        assert_eq!(v.len(), 3);
        v.truncate(1);
        assert_eq!(v.as_slice(), &[2]);
        v.clear();
        assert!(v.is_empty());
    }

    #[test]
    fn test_split_off() {
        let mut v = vec_of(&[1, 2, 3, 4]);
        let tail = v.split_off(1).unwrap();
        assert_eq!(v.as_slice(), &[1]);
        assert_eq!(tail.as_slice(), &[2, 3, 4]);
        assert!(v.split_off(1).unwrap().is_empty());
        assert_eq!(v.split_off(5), Err(Error::OutOfBounds));
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn test_contains_and_getters() {
        let mut v = vec_of(&[7, 8, 9]);
        assert!(v.contains(&7));
        assert!(!v.contains(&10));
        assert_eq!(v.first(), Some(&7));
        assert_eq!(v.last(), Some(&9));
        assert_eq!(v.get(1), Some(&8));
        assert_eq!(v.get(3), None);
        *v.get_mut(1).unwrap() = 80;
        *v.first_mut().unwrap() = 70;
        *v.last_mut().unwrap() = 90;
        assert_eq!(v.as_slice(), &[70, 80, 90]);
    }

    #[test]
    fn test_extend_grows_past_an_undercounting_hint() {
        let mut v = vec_of(&[1]);
        let mut n = 1;
        // Reports a lower bound of zero but yields three items.
        let src = crate::iter::from_fn(move || {
            n += 1;
            (n <= 4).then_some(n)
        });
        assert_eq!(src.size_hint(), SizeHint::unbounded());
        v.extend(src);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_collect_from_adaptor_chain() {
        let v: Vec<i32> = from_std(1..=10).filter(|x| x % 3 == 0).collect();
        assert_eq!(v.as_slice(), &[3, 6, 9]);
        let w: Vec<i32> = v.iter().rev().copied().collect();
        assert_eq!(w.as_slice(), &[9, 6, 3]);
    }

    #[test]
    fn test_iter_and_iter_mut() {
        let mut v = vec_of(&[1, 2, 3]);
        for x in v.iter_mut().into_std() {
            *x *= 10;
        }
        assert_eq!(v.iter().copied().sum::<i32>(), 60);
        let mut total = 0;
        for x in (&v).into_iter().into_std() {
            total += x;
        }
        assert_eq!(total, 60);
        (&mut v).into_iter().for_each(|x| *x += 1);
        assert_eq!(v.as_slice(), &[11, 21, 31]);
    }

    #[test]
    fn test_slice_views() {
        let mut v = vec_of(&[1, 2, 3, 4, 5]);
        let pairs: Vec<&[i32]> = v.slice().chunks(2).collect();
        assert_eq!(pairs.len(), 3);
        for w in v.slice_mut().chunks_exact_mut(2).into_std() {
            w.swap(0, 1);
        }
        assert_eq!(v.as_slice(), &[2, 1, 4, 3, 5]);
    }

    #[test]
    fn test_eq_ord_hash_via_slice() {
        use core::hash::{Hash, Hasher};

        struct Sum(u64);
        impl Hasher for Sum {
            fn finish(&self) -> u64 {
                self.0
            }
            fn write(&mut self, bytes: &[u8]) {
                for b in bytes {
                    self.0 = self.0.wrapping_mul(31).wrapping_add(u64::from(*b));
                }
            }
        }
        fn hash_of<H: Hash + ?Sized>(x: &H) -> u64 {
            let mut h = Sum(0);
            x.hash(&mut h);
            h.finish()
        }

        let a = vec_of(&[1, 2, 3]);
        let b = vec_of(&[1, 2, 4]);
        assert!(a < b);
        assert_eq!(a.cmp(&a.clone()), core::cmp::Ordering::Equal);
        assert_ne!(a, b);
        assert_eq!(hash_of(&a), hash_of(&[1, 2, 3][..]));
    }

    #[test]
    fn test_debug_structure() {
        let v = vec_of(&[1, 2]);
        let s = alloc::format!("{:?}", v);
        assert_eq!(s, "Vec { len: 2, elements: [1, 2] }");
        assert_eq!(Error::OutOfBounds.to_string(), String::from("index out of bounds"));
    }

    #[test]
    fn test_conversions() {
        let v: Vec<i32> = Vec::from(vec![1, 2, 3]);
        let s: &[i32] = v.as_ref();
        assert_eq!(s, &[1, 2, 3]);
        assert_eq!(v.into_inner(), vec![1, 2, 3]);
    }
}

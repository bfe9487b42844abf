// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`Vec`](crate::Vec) and [`Array`](crate::Array).
//!
//! Both containers index like the slice they hold:
//! - panics on out-of-bounds;
//! - supports every standard range form, including inclusive ranges;
//! - `Vec` views are restricted to `[0..len)`.

// Crate imports
use crate::{array::Array, vec::Vec};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for Vec<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vec<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for Array<T, N> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for Array<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

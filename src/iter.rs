// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pull-based iterators and the adaptors built on them.
//!
//! - [`Iterator`] is the composition root: implement `next()` (and ideally
//!   `size_hint()`) and every eager operation and adaptor factory comes for
//!   free.
//! - [`DoubleEndedIterator`], [`ExactSizeIterator`], [`TrustedLen`] and
//!   [`FusedIterator`] are capabilities an iterator opts into. Adaptors carry
//!   them over whenever their inner iterators have them, so `rev()` on a
//!   `map()` over a slice compiles, and `rev()` on a `filter()` over a
//!   forward-only source does not.
//! - [`IntoIterator`] and [`FromIterator`] connect iterators to collections.
//! - [`from_std`] and [`Iterator::into_std`] cross over to `core::iter`.

pub mod adapters;
mod collect;
mod compat;
mod double_ended;
mod exact_size;
mod iterator;
mod sources;

pub use adapters::{
    zip, Boxed, ByRef, Chain, Cloned, Copied, Cycle, Enumerate, Filter, FilterMap, FlatMap,
    Flatten, Fuse, Inspect, IntoZip, Map, MapWhile, Moved, Peekable, Rev, Scan, Skip, SkipWhile,
    StepBy, Take, TakeWhile, Zip,
};
pub use collect::{FromIterator, IntoIterator};
pub use compat::{from_std, FromStd, StdIter};
pub use double_ended::DoubleEndedIterator;
pub use exact_size::{ExactSizeIterator, FusedIterator, TrustedLen};
pub use iterator::Iterator;
pub use sources::{
    empty, from_fn, once, once_with, repeat, repeat_with, successors, Empty, FromFn, Once,
    OnceWith, Repeat, RepeatWith, Successors,
};

/// Applies `f` to the iterator in `opt` and drops the iterator once it
/// returns `None`.
///
/// Used by adaptors that keep an inner iterator in an `Option` so that it is
/// never polled again after running out.
#[inline]
pub(crate) fn and_then_or_clear<T, U>(
    opt: &mut Option<T>,
    f: impl FnOnce(&mut T) -> Option<U>,
) -> Option<U> {
    let x = f(opt.as_mut()?);
    if x.is_none() {
        *opt = None;
    }
    x
}

// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`Iterator`] trait and every operation derived from `next()`.

// Crate imports
use crate::{
    iter::{
        adapters::{
            Boxed, ByRef, Chain, Cloned, Copied, Cycle, Enumerate, Filter, FilterMap, FlatMap,
            Flatten, Fuse, Inspect, Map, MapWhile, Moved, Peekable, Rev, Scan, Skip, SkipWhile,
            StepBy, Take, TakeWhile, Zip,
        },
        compat::StdIter,
        DoubleEndedIterator, ExactSizeIterator, FromIterator, IntoIterator,
    },
    size_hint::SizeHint,
};

// Core imports
use core::cmp::Ordering;

/// A pull-based, single-threaded state machine yielding a sequence of items.
///
/// Implementors provide [`next`](Iterator::next) and, when they can do
/// better than "anything from zero to unbounded", [`size_hint`](Iterator::size_hint).
/// Everything else is derived: eager consumers such as [`fold`](Iterator::fold)
/// and [`collect`](Iterator::collect), and lazy factories such as
/// [`map`](Iterator::map) that wrap `self` in an adaptor.
///
/// Every factory takes `self` by value. The receiver is moved into the
/// adaptor it returns, so the consumed binding cannot be used again.
///
/// Once `next()` returns `None`, later calls may return `None` or may
/// resume; use [`fuse`](Iterator::fuse) when that matters.
///
/// # Examples
///
/// ```rust
/// use affine_iter::prelude::*;
/// use affine_iter::Slice;
///
/// let data = [1, 2, 3, 4, 5, 6];
/// let evens: Vec<i32> = Slice::new(&data)
///     .iter()
///     .copied()
///     .filter(|x| x % 2 == 0)
///     .map(|x| x * 10)
///     .collect();
/// assert_eq!(evens, [20, 40, 60]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub trait Iterator {
    /// The type of the elements being iterated over.
    type Item;

    /// Advances the iterator and returns the next value, or `None` once the
    /// sequence is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Returns bounds on the number of items left.
    ///
    /// The default is [`SizeHint::unbounded`], which is correct for any
    /// iterator.
    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::unbounded()
    }

    /// Consumes the iterator, counting the items it yields.
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |n, _| n + 1)
    }

    /// Consumes the iterator, returning the last item.
    #[inline]
    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.fold(None, |_, x| Some(x))
    }

    /// Returns the `n`th item (zero-based), discarding the ones before it.
    ///
    /// Returns `None` if fewer than `n + 1` items remain; those are consumed.
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        for _ in 0..n {
            self.next()?;
        }
        self.next()
    }

    /// Folds every item into an accumulator, front to back.
    #[inline]
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(x) = self.next() {
            acc = f(acc, x);
        }
        acc
    }

    /// Like [`fold`](Iterator::fold), but stops at the first `Err`.
    ///
    /// Items after the failing one are left in the iterator.
    #[inline]
    fn try_fold<B, E, F>(&mut self, init: B, mut f: F) -> Result<B, E>
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> Result<B, E>,
    {
        let mut acc = init;
        while let Some(x) = self.next() {
            acc = f(acc, x)?;
        }
        Ok(acc)
    }

    /// Calls `f` on every item, front to back.
    #[inline]
    fn for_each<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.fold((), |(), x| f(x));
    }

    /// Calls `f` on every item until it returns an `Err`.
    #[inline]
    fn try_for_each<E, F>(&mut self, mut f: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        self.try_fold((), |(), x| f(x))
    }

    /// Returns `true` if `pred` holds for every item. Short-circuits on the
    /// first `false`; an empty iterator yields `true`.
    fn all<F>(&mut self, mut pred: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        while let Some(x) = self.next() {
            if !pred(x) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if `pred` holds for any item. Short-circuits on the
    /// first `true`; an empty iterator yields `false`.
    fn any<F>(&mut self, mut pred: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        while let Some(x) = self.next() {
            if pred(x) {
                return true;
            }
        }
        false
    }

    /// Returns the first item matching `pred`.
    fn find<P>(&mut self, mut pred: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(x) = self.next() {
            if pred(&x) {
                return Some(x);
            }
        }
        None
    }

    /// Returns the first `Some` produced by `f`.
    fn find_map<B, F>(&mut self, mut f: F) -> Option<B>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        while let Some(x) = self.next() {
            if let Some(b) = f(x) {
                return Some(b);
            }
        }
        None
    }

    /// Returns the index of the first item matching `pred`.
    fn position<P>(&mut self, mut pred: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        let mut i = 0;
        while let Some(x) = self.next() {
            if pred(x) {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    /// Searches from the back, returning the front-based index of the last
    /// item matching `pred`.
    fn rposition<P>(&mut self, mut pred: P) -> Option<usize>
    where
        Self: Sized + ExactSizeIterator + DoubleEndedIterator,
        P: FnMut(Self::Item) -> bool,
    {
        let mut i = self.exact_size_hint();
        while let Some(x) = self.next_back() {
            i -= 1;
            if pred(x) {
                return Some(i);
            }
        }
        None
    }

    /// Folds the items using the first one as the initial accumulator.
    fn reduce<F>(mut self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let first = self.next()?;
        Some(self.fold(first, f))
    }

    /// Returns the maximum item; the last one wins on ties.
    fn max(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.max_by(Ord::cmp)
    }

    /// Returns the minimum item; the first one wins on ties.
    fn min(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.min_by(Ord::cmp)
    }

    /// Returns the maximum item under `compare`; the last one wins on ties.
    fn max_by<F>(self, mut compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|a, b| match compare(&a, &b) {
            Ordering::Greater => a,
            Ordering::Less | Ordering::Equal => b,
        })
    }

    /// Returns the minimum item under `compare`; the first one wins on ties.
    fn min_by<F>(self, mut compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|a, b| match compare(&a, &b) {
            Ordering::Greater => b,
            Ordering::Less | Ordering::Equal => a,
        })
    }

    /// Returns the item with the maximum key.
    fn max_by_key<K, F>(self, mut f: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|x| (f(&x), x))
            .max_by(|(a, _), (b, _)| Ord::cmp(a, b))
            .map(|(_, x)| x)
    }

    /// Returns the item with the minimum key.
    fn min_by_key<K, F>(self, mut f: F) -> Option<Self::Item>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.map(|x| (f(&x), x))
            .min_by(|(a, _), (b, _)| Ord::cmp(a, b))
            .map(|(_, x)| x)
    }

    /// Sums the items through [`core::iter::Sum`].
    fn sum<S>(self) -> S
    where
        Self: Sized,
        S: core::iter::Sum<Self::Item>,
    {
        S::sum(self.into_std())
    }

    /// Multiplies the items through [`core::iter::Product`].
    fn product<P>(self) -> P
    where
        Self: Sized,
        P: core::iter::Product<Self::Item>,
    {
        P::product(self.into_std())
    }

    /// Returns `true` if both sequences have the same length and pairwise
    /// equal items.
    fn eq<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoIterator,
        Self::Item: PartialEq<I::Item>,
    {
        let mut this = self;
        let mut other = other.into_iter();
        loop {
            match (this.next(), other.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => {}
                _ => return false,
            }
        }
    }

    /// Lexicographically compares two sequences.
    fn cmp<I>(self, other: I) -> Ordering
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        let mut this = self;
        let mut other = other.into_iter();
        loop {
            match (this.next(), other.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) => match Ord::cmp(&a, &b) {
                    Ordering::Equal => {}
                    non_eq => return non_eq,
                },
            }
        }
    }

    /// Returns `true` if every item is `<=` the next one. Incomparable
    /// neighbours make the sequence unsorted.
    fn is_sorted(self) -> bool
    where
        Self: Sized,
        Self::Item: PartialOrd,
    {
        let mut this = self;
        let mut last = match this.next() {
            Some(x) => x,
            None => return true,
        };
        while let Some(x) = this.next() {
            match last.partial_cmp(&x) {
                Some(Ordering::Less | Ordering::Equal) => last = x,
                Some(Ordering::Greater) | None => return false,
            }
        }
        true
    }

    /// Builds a collection from the items; see [`FromIterator`].
    #[inline]
    fn collect<B>(self) -> B
    where
        Self: Sized,
        B: FromIterator<Self::Item>,
    {
        B::from_iter(self)
    }

    /// Collects `Ok` values, stopping at and returning the first `Err`.
    #[inline]
    fn try_collect<T, E, C>(self) -> Result<C, E>
    where
        Self: Sized + Iterator<Item = Result<T, E>>,
        C: FromIterator<T>,
    {
        <Result<C, E> as FromIterator<Result<T, E>>>::from_iter(self)
    }

    // Adaptor factories. Each one moves `self` into the returned adaptor.

    /// Applies `f` to every item.
    #[inline]
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Yields only the items for which `pred` returns `true`.
    #[inline]
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Filters and maps in one pass: yields the `Some` values of `f`.
    #[inline]
    fn filter_map<B, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        FilterMap::new(self, f)
    }

    /// Maps every item to an iterable and yields all of their items in turn.
    #[inline]
    fn flat_map<U, F>(self, f: F) -> FlatMap<Self, U, F>
    where
        Self: Sized,
        U: IntoIterator,
        F: FnMut(Self::Item) -> U,
    {
        FlatMap::new(self, f)
    }

    /// Concatenates an iterator of iterables.
    #[inline]
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: IntoIterator,
    {
        Flatten::new(self)
    }

    /// Guarantees `None` forever after the first `None`.
    #[inline]
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Calls `f` with a reference to each item as it passes through.
    #[inline]
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        Inspect::new(self, f)
    }

    /// Allows looking at the next item without consuming it.
    #[inline]
    fn peekable(self) -> Peekable<Self>
    where
        Self: Sized,
    {
        Peekable::new(self)
    }

    /// Yields at most `n` items.
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Yields items while `pred` holds, then stops for good.
    #[inline]
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, pred)
    }

    /// Discards the first `n` items.
    #[inline]
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Discards items while `pred` holds, then yields everything else.
    #[inline]
    fn skip_while<P>(self, pred: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, pred)
    }

    /// Walks two iterators in lock-step, yielding pairs.
    ///
    /// For more than two iterators, see [`zip`](crate::iter::zip).
    #[inline]
    fn zip<U>(self, other: U) -> Zip<(Self, U::IntoIter)>
    where
        Self: Sized,
        U: IntoIterator,
    {
        Zip::new((self, other.into_iter()))
    }

    /// Borrows the iterator so an adaptor can be applied without giving it
    /// up.
    #[inline]
    fn by_ref(&mut self) -> ByRef<'_, Self>
    where
        Self: Sized,
    {
        ByRef::new(self)
    }

    /// Yields all items of `self`, then all items of `other`.
    #[inline]
    fn chain<U>(self, other: U) -> Chain<Self, U::IntoIter>
    where
        Self: Sized,
        U: IntoIterator<Item = Self::Item>,
    {
        Chain::new(self, other.into_iter())
    }

    /// Pairs each item with its zero-based index.
    #[inline]
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Yields the first item, then every `step`th item after it.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    #[inline]
    fn step_by(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        StepBy::new(self, step)
    }

    /// Clones each referenced item.
    #[inline]
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sized + Iterator<Item = &'a T>,
        T: 'a + Clone,
    {
        Cloned::new(self)
    }

    /// Copies each referenced item.
    #[inline]
    fn copied<'a, T>(self) -> Copied<Self>
    where
        Self: Sized + Iterator<Item = &'a T>,
        T: 'a + Copy,
    {
        Copied::new(self)
    }

    /// Moves each value out of its `&mut` slot, leaving `T::default()`.
    #[inline]
    fn moved<'a, T>(self) -> Moved<Self>
    where
        Self: Sized + Iterator<Item = &'a mut T>,
        T: 'a + Default,
    {
        Moved::new(self)
    }

    /// Reverses the direction of iteration.
    #[inline]
    fn rev(self) -> Rev<Self>
    where
        Self: Sized + DoubleEndedIterator,
    {
        Rev::new(self)
    }

    /// Maps items while `f` returns `Some`, then stops for good.
    #[inline]
    fn map_while<B, P>(self, f: P) -> MapWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> Option<B>,
    {
        MapWhile::new(self, f)
    }

    /// Threads mutable state through a mapping; stops when `f` returns `None`.
    #[inline]
    fn scan<St, B, F>(self, initial_state: St, f: F) -> Scan<Self, St, F>
    where
        Self: Sized,
        F: FnMut(&mut St, Self::Item) -> Option<B>,
    {
        Scan::new(self, initial_state, f)
    }

    /// Repeats the sequence endlessly by cloning a saved copy of the iterator.
    #[inline]
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized + Clone,
    {
        Cycle::new(self)
    }

    /// Erases the concrete iterator type behind a heap allocation.
    #[inline]
    fn boxed<'a>(self) -> Boxed<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Boxed::new(self)
    }

    /// Wraps the iterator so it implements [`core::iter::Iterator`], for use
    /// in `for` loops and with APIs that expect standard iterators.
    #[inline]
    fn into_std(self) -> StdIter<Self>
    where
        Self: Sized,
    {
        StdIter::new(self)
    }
}

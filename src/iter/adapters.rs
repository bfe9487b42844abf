// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adaptor types returned by the factory methods of
//! [`Iterator`](crate::iter::Iterator).
//!
//! Each adaptor owns the iterator it wraps and implements
//! [`DoubleEndedIterator`](crate::iter::DoubleEndedIterator),
//! [`ExactSizeIterator`](crate::iter::ExactSizeIterator),
//! [`TrustedLen`](crate::iter::TrustedLen) and
//! [`FusedIterator`](crate::iter::FusedIterator) whenever its inner
//! iterators (and its own semantics) allow it.

mod boxed;
mod by_ref;
mod chain;
mod cloned;
mod cycle;
mod enumerate;
mod filter;
mod flatten;
mod fuse;
mod inspect;
mod map;
mod peekable;
mod rev;
mod scan;
mod skip;
mod step_by;
mod take;
mod take_while;
mod zip;

pub use boxed::Boxed;
pub use by_ref::ByRef;
pub use chain::Chain;
pub use cloned::{Cloned, Copied, Moved};
pub use cycle::Cycle;
pub use enumerate::Enumerate;
pub use filter::{Filter, FilterMap};
pub use flatten::{FlatMap, Flatten};
pub use fuse::Fuse;
pub use inspect::Inspect;
pub use map::Map;
pub use peekable::Peekable;
pub use rev::Rev;
pub use scan::{MapWhile, Scan};
pub use skip::{Skip, SkipWhile};
pub use step_by::StepBy;
pub use take::Take;
pub use take_while::TakeWhile;
pub use zip::{zip, IntoZip, Zip};

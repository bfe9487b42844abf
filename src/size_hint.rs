// This file is part of affine-iter.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounds on the number of items an iterator has left.
//!
//! A [`SizeHint`] is advisory: consumers such as `collect()` use it to
//! pre-size storage, and must tolerate an iterator yielding more than the
//! lower bound.

/// A `(lower, upper)` bound on the remaining item count.
///
/// `lower <= remaining <= upper` holds whenever `upper` is `Some`. An
/// `upper` of `None` means no bound is known, or it does not fit in a
/// `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeHint {
    /// Minimum number of items left.
    pub lower: usize,
    /// Maximum number of items left, if known.
    pub upper: Option<usize>,
}

impl SizeHint {
    /// The hint of an iterator with nothing left.
    pub const EMPTY: SizeHint = SizeHint::exact(0);

    /// Builds a hint from its two bounds.
    #[inline]
    pub const fn new(lower: usize, upper: Option<usize>) -> Self {
        Self { lower, upper }
    }

    /// A hint that knows the remaining count precisely.
    #[inline]
    pub const fn exact(n: usize) -> Self {
        Self::new(n, Some(n))
    }

    /// A hint that knows nothing: `(0, None)`.
    #[inline]
    pub const fn unbounded() -> Self {
        Self::new(0, None)
    }

    /// Returns `true` if both bounds agree.
    #[inline]
    pub const fn is_exact(&self) -> bool {
        matches!(self.upper, Some(u) if u == self.lower)
    }

    /// Hint for two sequences yielded one after the other.
    ///
    /// The lower bound saturates; the upper bound becomes unknown on
    /// overflow or when either side is unknown.
    #[inline]
    pub fn saturating_add(self, other: SizeHint) -> SizeHint {
        let lower = self.lower.saturating_add(other.lower);
        let upper = match (self.upper, other.upper) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        SizeHint::new(lower, upper)
    }

    /// Hint for two sequences consumed in lock-step.
    ///
    /// The shorter side bounds the result, so an unknown upper bound on one
    /// side defers to the other side's.
    #[inline]
    pub fn min(self, other: SizeHint) -> SizeHint {
        let lower = self.lower.min(other.lower);
        let upper = match (self.upper, other.upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        };
        SizeHint::new(lower, upper)
    }

    /// Caps both bounds at `n`.
    #[inline]
    pub fn clamp_to(self, n: usize) -> SizeHint {
        let upper = match self.upper {
            Some(u) => u.min(n),
            None => n,
        };
        SizeHint::new(self.lower.min(n), Some(upper))
    }

    /// Removes `n` items from both bounds, stopping at zero.
    #[inline]
    pub fn saturating_sub(self, n: usize) -> SizeHint {
        SizeHint::new(
            self.lower.saturating_sub(n),
            self.upper.map(|u| u.saturating_sub(n)),
        )
    }

    /// Keeps the upper bound but drops the lower bound to zero.
    #[inline]
    pub fn with_zero_lower(self) -> SizeHint {
        SizeHint::new(0, self.upper)
    }

    /// Applies `f` to both bounds.
    #[inline]
    pub fn map_bounds(self, mut f: impl FnMut(usize) -> usize) -> SizeHint {
        SizeHint::new(f(self.lower), self.upper.map(f))
    }
}

impl Default for SizeHint {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl From<(usize, Option<usize>)> for SizeHint {
    fn from((lower, upper): (usize, Option<usize>)) -> Self {
        Self::new(lower, upper)
    }
}

impl From<SizeHint> for (usize, Option<usize>) {
    fn from(hint: SizeHint) -> Self {
        (hint.lower, hint.upper)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::SizeHint;

    #[test]
    fn test_saturating_add_overflow_loses_upper() {
        let a = SizeHint::exact(usize::MAX);
        let b = SizeHint::exact(1);
        assert_eq!(a.saturating_add(b), SizeHint::new(usize::MAX, None));
        assert_eq!(
            SizeHint::exact(2).saturating_add(SizeHint::new(1, Some(4))),
            SizeHint::new(3, Some(6))
        );
    }

    #[test]
    fn test_min_prefers_defined_upper() {
        let known = SizeHint::new(1, Some(3));
        let unknown = SizeHint::new(5, None);
        assert_eq!(known.min(unknown), SizeHint::new(1, Some(3)));
        assert_eq!(unknown.min(known), SizeHint::new(1, Some(3)));
        assert_eq!(unknown.min(unknown), SizeHint::new(5, None));
    }

    #[test]
    fn test_clamp_and_sub() {
        assert_eq!(SizeHint::new(10, None).clamp_to(4), SizeHint::exact(4));
        assert_eq!(SizeHint::new(1, Some(2)).clamp_to(4), SizeHint::new(1, Some(2)));
        assert_eq!(SizeHint::new(1, Some(5)).saturating_sub(3), SizeHint::new(0, Some(2)));
    }

    #[test]
    fn test_tuple_conversions() {
        let h: SizeHint = (2, Some(7)).into();
        assert!(!h.is_exact());
        let t: (usize, Option<usize>) = SizeHint::EMPTY.into();
        assert_eq!(t, (0, Some(0)));
        assert!(SizeHint::EMPTY.is_exact());
        assert_eq!(SizeHint::default(), SizeHint::unbounded());
    }
}

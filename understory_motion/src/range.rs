// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbolic ranges and their element-wise resolution to pixels.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::Size;

use crate::units::{SymbolicLength, resolve};

/// A `[start, end]` interval whose bounds are [`SymbolicLength`]s.
///
/// No ordering is enforced: `start <= end` is the caller's responsibility.
/// Tuples of anything convertible into [`SymbolicLength`] convert into a
/// `SymbolicRange`, so `(0, "50vh")` and `(100.0, 200.0)` are both ranges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SymbolicRange {
    /// Start of the interval.
    pub start: SymbolicLength,
    /// End of the interval.
    pub end: SymbolicLength,
}

impl SymbolicRange {
    /// Creates a range from its two bounds.
    #[must_use]
    pub fn new(start: impl Into<SymbolicLength>, end: impl Into<SymbolicLength>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Resolves both bounds against `viewport`. See [`resolve_range`].
    #[must_use]
    pub fn resolve(&self, viewport: Size) -> Range<f64> {
        resolve_range(viewport, self)
    }
}

impl<A, B> From<(A, B)> for SymbolicRange
where
    A: Into<SymbolicLength>,
    B: Into<SymbolicLength>,
{
    fn from((start, end): (A, B)) -> Self {
        Self::new(start, end)
    }
}

impl From<Range<f64>> for SymbolicRange {
    fn from(range: Range<f64>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Resolves a symbolic range into a pixel range.
///
/// This is a pure element-wise map of [`resolve`]; the result is not sorted,
/// clamped, or validated.
#[must_use]
pub fn resolve_range(viewport: Size, range: &SymbolicRange) -> Range<f64> {
    resolve(viewport, range.start)..resolve(viewport, range.end)
}

/// Resolves every range in `ranges`, preserving order.
#[must_use]
pub fn resolve_ranges<'a, I>(viewport: Size, ranges: I) -> Vec<Range<f64>>
where
    I: IntoIterator<Item = &'a SymbolicRange>,
{
    ranges
        .into_iter()
        .map(|range| resolve_range(viewport, range))
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Size;

    use super::{SymbolicRange, resolve_range, resolve_ranges};
    use crate::SymbolicLength;

    #[test]
    fn resolves_element_wise() {
        let viewport = Size::new(1000.0, 800.0);
        let range = SymbolicRange::from(("50vh", "100vh"));
        assert_eq!(resolve_range(viewport, &range), 400.0..800.0);

        let mixed = SymbolicRange::from((100, "10vw"));
        assert_eq!(mixed.resolve(viewport), 100.0..100.0);
    }

    #[test]
    fn does_not_reorder_inverted_ranges() {
        let range = SymbolicRange::new(300.0, 100.0);
        assert_eq!(range.resolve(Size::ZERO), 300.0..100.0);
    }

    #[test]
    fn malformed_bounds_become_zero() {
        let range = SymbolicRange::from(("nope", 20));
        assert_eq!(range.start, SymbolicLength::ZERO);
        assert_eq!(range.resolve(Size::new(10.0, 10.0)), 0.0..20.0);
    }

    #[test]
    fn resolves_lists_in_order() {
        let ranges = [
            SymbolicRange::from(("100vh", "200vh")),
            SymbolicRange::from((0, "100vh")),
        ];
        let viewport = Size::new(640.0, 480.0);
        assert_eq!(
            resolve_ranges(viewport, &ranges),
            vec![480.0..960.0, 0.0..480.0]
        );
    }
}

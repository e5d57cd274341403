// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segments and the preprocessing pass that sorts and gap-fills them.
//!
//! A [`Segment`] pairs a [`SymbolicRange`] with a [`SegmentFn`]. The raw,
//! caller-supplied list is turned into a [`SegmentList`] once, by [`preprocess`]:
//! sorted ascending by (unresolved) start, with zero-valued filler segments
//! inserted wherever one segment's end is not the next segment's start.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use kurbo::Size;
use smallvec::SmallVec;

use crate::range::SymbolicRange;

/// Inline capacity for processed segment lists.
///
/// Typical scroll choreography uses a handful of ranges; fillers can double
/// that in the worst case.
const INLINE_SEGMENTS: usize = 4;

/// A mapping from a segment-local position to an output delta.
///
/// The input is relative to the segment's resolved start (`value - start`), so
/// a well-behaved function returns `0.0` at `0.0`; that is what keeps the
/// composite output continuous across seams.
///
/// `SegmentFn` is a cheaply clonable, single-threaded handle.
#[derive(Clone)]
pub struct SegmentFn(Rc<dyn Fn(f64) -> f64>);

impl SegmentFn {
    /// Wraps a closure.
    #[must_use]
    pub fn new(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// The function that always returns `0.0`, used for gap fillers.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(|_| 0.0)
    }

    /// Evaluates the function at a segment-local position.
    #[must_use]
    #[inline]
    pub fn call(&self, local: f64) -> f64 {
        (self.0)(local)
    }
}

impl fmt::Debug for SegmentFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SegmentFn").finish_non_exhaustive()
    }
}

/// A range paired with the function active over it.
#[derive(Clone, Debug)]
pub struct Segment {
    range: SymbolicRange,
    function: SegmentFn,
    filler: bool,
}

impl Segment {
    /// Creates a caller-defined segment.
    #[must_use]
    pub fn new(range: impl Into<SymbolicRange>, function: SegmentFn) -> Self {
        Self {
            range: range.into(),
            function,
            filler: false,
        }
    }

    /// Creates a zero-valued filler segment covering a gap.
    #[must_use]
    pub fn filler(range: SymbolicRange) -> Self {
        Self {
            range,
            function: SegmentFn::zero(),
            filler: true,
        }
    }

    /// The unresolved range of this segment.
    #[must_use]
    pub fn range(&self) -> SymbolicRange {
        self.range
    }

    /// The function active over this segment.
    #[must_use]
    pub fn function(&self) -> &SegmentFn {
        &self.function
    }

    /// Returns `true` if this segment was synthesized by [`preprocess`].
    #[must_use]
    pub fn is_filler(&self) -> bool {
        self.filler
    }

    /// Resolves the range against `viewport`.
    #[must_use]
    pub fn resolve(&self, viewport: Size) -> Range<f64> {
        self.range.resolve(viewport)
    }

    /// Evaluates the function at a segment-local position.
    #[must_use]
    #[inline]
    pub fn apply(&self, local: f64) -> f64 {
        self.function.call(local)
    }

    /// The segment's output at its own full width, `f(end - start)`.
    ///
    /// This is the value a segment contributes once the input has moved past it.
    #[must_use]
    pub fn terminal(&self, viewport: Size) -> f64 {
        let range = self.resolve(viewport);
        self.apply(range.end - range.start)
    }
}

/// A sorted, gap-filled list of segments.
///
/// Built once by [`preprocess`] (or [`SegmentList::from_pairs`]) and never
/// re-sorted. Adjacent segments share their seam:
/// `segments[i].range().end == segments[i + 1].range().start`.
#[derive(Clone, Debug, Default)]
pub struct SegmentList {
    segments: SmallVec<[Segment; INLINE_SEGMENTS]>,
}

impl SegmentList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts and gap-fills `pairs`. Equivalent to [`preprocess`].
    #[must_use]
    pub fn from_pairs<I, R>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (R, SegmentFn)>,
        R: Into<SymbolicRange>,
    {
        preprocess(pairs)
    }

    /// Number of segments, fillers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments in evaluation order.
    #[must_use]
    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over the segments in evaluation order.
    pub fn iter(&self) -> core::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns `true` if any resolved range is inverted or runs past the start
    /// of its successor.
    ///
    /// Overlaps are never rejected; this is a diagnostic for callers that want
    /// to check their ranges.
    #[must_use]
    pub fn has_overlaps(&self, viewport: Size) -> bool {
        let resolved: Vec<Range<f64>> = self.iter().map(|s| s.resolve(viewport)).collect();
        resolved.iter().any(|r| r.start > r.end)
            || resolved.windows(2).any(|w| w[0].end > w[1].start)
    }
}

impl<'a> IntoIterator for &'a SegmentList {
    type Item = &'a Segment;
    type IntoIter = core::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sorts `pairs` by range start and fills the gaps between them.
///
/// 1. Pairs are stably sorted ascending by their unresolved start, using
///    [`SymbolicLength::total_cmp`](crate::SymbolicLength::total_cmp).
///    Keep starts of one kind (all pixels, or all `vh`) for a meaningful order.
/// 2. Wherever a segment's end differs from the next segment's start (compared
///    unresolved), a [filler](Segment::filler) spanning the two is inserted.
///
/// The first and last segments are not extended; values outside the declared
/// domain are handled at evaluation time. Overlapping input is accepted as-is.
#[must_use]
pub fn preprocess<I, R>(pairs: I) -> SegmentList
where
    I: IntoIterator<Item = (R, SegmentFn)>,
    R: Into<SymbolicRange>,
{
    let mut sorted: Vec<Segment> = pairs
        .into_iter()
        .map(|(range, function)| Segment::new(range, function))
        .collect();
    sorted.sort_by(|a, b| a.range.start.total_cmp(&b.range.start));

    let mut segments = SmallVec::with_capacity(sorted.len() * 2);
    let mut sorted = sorted.into_iter().peekable();
    while let Some(segment) = sorted.next() {
        let end = segment.range.end;
        segments.push(segment);
        if let Some(next) = sorted.peek()
            && end != next.range.start
        {
            log::debug!("filling gap between {end} and {}", next.range.start);
            segments.push(Segment::filler(SymbolicRange {
                start: end,
                end: next.range.start,
            }));
        }
    }
    SegmentList { segments }
}

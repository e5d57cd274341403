// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise evaluation over a processed segment list.
//!
//! Evaluation is a single linear scan from the first segment. Each segment the
//! input has moved past contributes its terminal value (its function at full
//! width) to an accumulator, and the segment containing the input adds its own
//! local output on top. Because each function is evaluated relative to its
//! segment's start, the composite output is continuous at every seam.
//!
//! The scan state is an explicit [`ScanState`] value advanced by
//! [`ScanState::step`], so a single step can be tested in isolation.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::Size;

use crate::range::SymbolicRange;
use crate::segment::{Segment, SegmentFn, SegmentList, preprocess};

/// Scan state threaded through one evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScanState {
    /// Output carried over from segments the input has fully passed.
    pub accumulated: f64,
}

/// Result of advancing a [`ScanState`] by one segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScanStep {
    /// The input lies beyond this segment; keep scanning with the new state.
    Continue(ScanState),
    /// The scan is finished with this output.
    Done(f64),
}

impl ScanState {
    /// Advances the scan over `segment`.
    ///
    /// - `value < start`: the input never reached this segment. The output
    ///   locks in at the previous segment's terminal value (or stays at the
    ///   current accumulator when there is no previous segment) and the scan
    ///   ends. Later segments start even higher, so none of them can contain
    ///   the input either.
    /// - `start <= value <= end`: the output is `f(value - start)` plus the
    ///   accumulator.
    /// - `value > end`: the segment's terminal value is added to the
    ///   accumulator and the scan continues.
    #[must_use]
    pub fn step(
        self,
        viewport: Size,
        previous: Option<&Segment>,
        segment: &Segment,
        value: f64,
    ) -> ScanStep {
        let range = segment.resolve(viewport);
        if value < range.start {
            let locked = previous.map_or(self.accumulated, |prev| prev.terminal(viewport));
            ScanStep::Done(locked)
        } else if value <= range.end {
            ScanStep::Done(segment.apply(value - range.start) + self.accumulated)
        } else {
            ScanStep::Continue(Self {
                accumulated: self.accumulated + segment.apply(range.end - range.start),
            })
        }
    }
}

/// A piecewise transform: a processed segment list plus its evaluator.
///
/// Evaluation is a pure function of the input value and the viewport size;
/// ranges are resolved on every call, so viewport changes take effect on the
/// next evaluation.
///
/// # Example
///
/// ```
/// use kurbo::Size;
/// use understory_motion::{PiecewiseTransform, speed};
///
/// // Half speed for the first screen, pinned for the second.
/// let transform = PiecewiseTransform::from_pairs([
///     (("0vh", "100vh"), speed(0.5)),
///     (("100vh", "200vh"), speed(1.0)),
/// ]);
///
/// let viewport = Size::new(800.0, 600.0);
/// assert_eq!(transform.evaluate(viewport, 300.0), -150.0);
/// // Past the first segment its terminal value (-300) is carried forward.
/// assert_eq!(transform.evaluate(viewport, 700.0), -400.0);
/// // Beyond the last segment everything is locked in.
/// assert_eq!(transform.evaluate(viewport, 5000.0), -900.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PiecewiseTransform {
    segments: SegmentList,
}

impl PiecewiseTransform {
    /// Wraps an already processed segment list.
    #[must_use]
    pub fn new(segments: SegmentList) -> Self {
        Self { segments }
    }

    /// Preprocesses `pairs` (see [`preprocess`]) and wraps the result.
    #[must_use]
    pub fn from_pairs<I, R>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (R, SegmentFn)>,
        R: Into<SymbolicRange>,
    {
        Self::new(preprocess(pairs))
    }

    /// The processed segments.
    #[must_use]
    pub fn segments(&self) -> &SegmentList {
        &self.segments
    }

    /// Evaluates the transform at `value`.
    ///
    /// An empty transform always returns `0.0`. Values past the last segment
    /// return the sum of every terminal value; values before the first segment
    /// return `0.0`.
    #[must_use]
    pub fn evaluate(&self, viewport: Size, value: f64) -> f64 {
        let mut state = ScanState::default();
        let mut previous = None;
        for segment in &self.segments {
            match state.step(viewport, previous, segment, value) {
                ScanStep::Continue(next) => state = next,
                ScanStep::Done(output) => return output,
            }
            previous = Some(segment);
        }
        state.accumulated
    }

    /// Snapshot of the resolved segments for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self, viewport: Size) -> PiecewiseDebugInfo {
        PiecewiseDebugInfo {
            viewport,
            segments: self
                .segments
                .iter()
                .map(|segment| SegmentDebugInfo {
                    range: segment.resolve(viewport),
                    terminal: segment.terminal(viewport),
                    filler: segment.is_filler(),
                })
                .collect(),
            has_overlaps: self.segments.has_overlaps(viewport),
        }
    }
}

/// Debug snapshot of a [`PiecewiseTransform`] at one viewport size.
#[derive(Clone, Debug)]
pub struct PiecewiseDebugInfo {
    /// Viewport size the ranges were resolved against.
    pub viewport: Size,
    /// Resolved segments in evaluation order.
    pub segments: Vec<SegmentDebugInfo>,
    /// See [`SegmentList::has_overlaps`].
    pub has_overlaps: bool,
}

/// One resolved segment inside a [`PiecewiseDebugInfo`].
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentDebugInfo {
    /// Resolved pixel range.
    pub range: Range<f64>,
    /// Output contributed once the input has passed this segment.
    pub terminal: f64,
    /// Whether the segment was synthesized to fill a gap.
    pub filler: bool,
}

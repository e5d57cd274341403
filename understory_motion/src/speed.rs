// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Speed-based segment functions and the sticky convenience.

use crate::range::SymbolicRange;
use crate::segment::{SegmentFn, SegmentList, preprocess};

/// Speed factor that exactly cancels input motion.
///
/// A segment with this speed outputs `-(value - start)`, so an element offset by
/// the output stays visually pinned while the input moves through the range.
pub const STICKY_FACTOR: f64 = 1.0;

/// Proportional counter-motion: `v -> -v * factor`.
///
/// ```
/// use understory_motion::speed;
///
/// assert_eq!(speed(2.0).call(10.0), -20.0);
/// assert_eq!(speed(0.0).call(10.0), 0.0);
/// ```
#[must_use]
pub fn speed(factor: f64) -> SegmentFn {
    SegmentFn::new(move |v| -v * factor)
}

/// How a segment moves: a speed factor or an arbitrary function.
#[derive(Clone, Debug)]
pub enum SegmentMotion {
    /// Proportional counter-motion, see [`speed`].
    Speed(f64),
    /// A caller-supplied function.
    Map(SegmentFn),
}

impl SegmentMotion {
    /// Converts into the segment function it describes.
    #[must_use]
    pub fn into_fn(self) -> SegmentFn {
        match self {
            Self::Speed(factor) => speed(factor),
            Self::Map(function) => function,
        }
    }
}

impl From<f64> for SegmentMotion {
    fn from(factor: f64) -> Self {
        Self::Speed(factor)
    }
}

impl From<SegmentFn> for SegmentMotion {
    fn from(function: SegmentFn) -> Self {
        Self::Map(function)
    }
}

/// Preprocesses `(range, motion)` pairs where each motion is a speed factor or
/// a function.
#[must_use]
pub fn speed_segments<I, R, M>(pairs: I) -> SegmentList
where
    I: IntoIterator<Item = (R, M)>,
    R: Into<SymbolicRange>,
    M: Into<SegmentMotion>,
{
    preprocess(
        pairs
            .into_iter()
            .map(|(range, motion)| (range, motion.into().into_fn())),
    )
}

/// Preprocesses `ranges` as pinned segments, each moving at [`STICKY_FACTOR`].
///
/// Gaps between the ranges are filled with stationary segments, so the output
/// holds its locked value between and after the sticky ranges.
#[must_use]
pub fn sticky_segments<I, R>(ranges: I) -> SegmentList
where
    I: IntoIterator<Item = R>,
    R: Into<SymbolicRange>,
{
    speed_segments(ranges.into_iter().map(|range| (range, STICKY_FACTOR)))
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-driven transforms built on [`MotionValue`].

use alloc::vec::Vec;
use core::cell::RefCell;
use core::ops::{Range, RangeInclusive};

use understory_motion::{
    Direction, DirectionTrigger, PiecewiseTransform, SegmentFn, SegmentList, SegmentMotion,
    SymbolicRange, preprocess, resolve_range, speed_segments, sticky_segments,
};

use crate::value::{MotionValue, ReactiveValue, Subscription};
use crate::viewport::ViewportSource;

/// Flips the sign of `input`: `v -> -v`.
///
/// Scroll sources commonly report offsets that decrease as content moves
/// forward (e.g. the top of an element relative to the viewport). The
/// transforms in this module expect a _positive offset_, one that increases as
/// the content moves forward.
#[must_use]
pub fn positive_offset(input: &MotionValue) -> MotionValue {
    input.map(|v| -v)
}

/// Derives a value that evaluates `segments` at `offset`.
///
/// Ranges are resolved against `viewport` on every change of `offset`.
#[must_use]
pub fn piecewise_transform<V>(
    offset: &MotionValue,
    viewport: &V,
    segments: SegmentList,
) -> MotionValue
where
    V: ViewportSource + Clone + 'static,
{
    let transform = PiecewiseTransform::new(segments);
    let viewport = viewport.clone();
    offset.map(move |v| transform.evaluate(viewport.size(), v))
}

/// Derives a value moving at a per-range speed or function.
///
/// Each pair is a range and either a speed factor (`v -> -v * factor`) or a
/// [`SegmentFn`].
///
/// ```
/// use kurbo::Size;
/// use understory_scroll::{MotionValue, speed_transform};
///
/// let offset = MotionValue::new(0.0);
/// let viewport = Size::new(800.0, 600.0);
/// let slow = speed_transform(&offset, &viewport, [(("0vh", "100vh"), 0.5)]);
///
/// offset.set(300.0);
/// assert_eq!(slow.get(), -150.0);
/// ```
#[must_use]
pub fn speed_transform<V, I, R, M>(offset: &MotionValue, viewport: &V, pairs: I) -> MotionValue
where
    V: ViewportSource + Clone + 'static,
    I: IntoIterator<Item = (R, M)>,
    R: Into<SymbolicRange>,
    M: Into<SegmentMotion>,
{
    piecewise_transform(offset, viewport, speed_segments(pairs))
}

/// Derives a value that exactly cancels the motion of `offset` inside each
/// range, keeping an element pinned there.
///
/// Outside the ranges the output holds whatever it had locked in.
#[must_use]
pub fn sticky_transform<V, I, R>(offset: &MotionValue, viewport: &V, ranges: I) -> MotionValue
where
    V: ViewportSource + Clone + 'static,
    I: IntoIterator<Item = R>,
    R: Into<SymbolicRange>,
{
    piecewise_transform(offset, viewport, sticky_segments(ranges))
}

/// Derives a value from arbitrary per-range functions.
#[must_use]
pub fn parallax_transform<V, I, R>(offset: &MotionValue, viewport: &V, pairs: I) -> MotionValue
where
    V: ViewportSource + Clone + 'static,
    I: IntoIterator<Item = (R, SegmentFn)>,
    R: Into<SymbolicRange>,
{
    piecewise_transform(offset, viewport, preprocess(pairs))
}

/// Calls `callback` whenever `offset` changes direction inside `range`.
///
/// Values outside the range are ignored. The direction is reported on change
/// only; see [`DirectionTrigger`]. The trigger is active until the returned
/// [`Subscription`] is dropped.
///
/// A [`MotionValue`] set from inside `callback` delivers the new value to the
/// trigger after the current notification. Sources that notify re-entrantly
/// instead have that change skipped by the trigger.
pub fn trigger_on(
    offset: &impl ReactiveValue,
    range: RangeInclusive<f64>,
    callback: impl FnMut(Direction) + 'static,
) -> Subscription {
    let trigger = RefCell::new(DirectionTrigger::new(range, callback));
    offset.subscribe(move |v| {
        let Ok(mut trigger) = trigger.try_borrow_mut() else {
            log::warn!("re-entrant offset change to {v} skipped by trigger");
            return;
        };
        trigger.observe(v);
    })
}

/// Resolves `range` against the current viewport size.
#[must_use]
pub fn viewport_range<V>(viewport: &V, range: impl Into<SymbolicRange>) -> Range<f64>
where
    V: ViewportSource + ?Sized,
{
    resolve_range(viewport.size(), &range.into())
}

/// Resolves each of `ranges` against the current viewport size.
#[must_use]
pub fn viewport_ranges<V, I, R>(viewport: &V, ranges: I) -> Vec<Range<f64>>
where
    V: ViewportSource + ?Sized,
    I: IntoIterator<Item = R>,
    R: Into<SymbolicRange>,
{
    let size = viewport.size();
    ranges
        .into_iter()
        .map(|range| resolve_range(size, &range.into()))
        .collect()
}

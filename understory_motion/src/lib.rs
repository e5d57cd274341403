// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_motion --heading-base-level=0

//! Understory Motion: piecewise scroll-driven value transforms.
//!
//! This crate maps a continuously changing scalar (typically a scroll offset)
//! through a sequence of sub-functions, each active over its own interval, and
//! produces a continuous composite output. It is the headless core behind
//! parallax, sticky, and speed effects.
//!
//! The core concepts are:
//!
//! - [`SymbolicLength`]: an absolute pixel length or a viewport percentage
//!   (`"50vh"`, `"90vw"`), resolved late against a [`kurbo::Size`] with
//!   [`resolve`].
//! - [`SymbolicRange`]: a `[start, end]` pair of symbolic lengths, resolved
//!   element-wise with [`resolve_range`].
//! - [`Segment`] / [`SegmentList`]: a range paired with a [`SegmentFn`];
//!   [`preprocess`] sorts raw segments by start and fills gaps with
//!   zero-valued segments so the declared domain is fully covered.
//! - [`PiecewiseTransform`]: evaluates a processed list at an input value.
//!   Each segment's function sees the input relative to the segment start, and
//!   segments the input has passed contribute their terminal value, which keeps
//!   the output continuous at every seam.
//! - [`speed`], [`SegmentMotion`], [`sticky_segments`]: helpers for the common
//!   proportional and pinned motions.
//! - [`DirectionTrigger`]: reports changes in the direction of movement while
//!   the input is inside a range.
//!
//! This crate deliberately does **not** own any reactive value, subscribe to
//! events, or know about windows. All state is explicit ([`ScanState`],
//! [`TriggerState`]) and the viewport size is passed in on every call. Hosts
//! wire these pieces to their own change notifications (see
//! `understory_scroll` for a small single-threaded binding).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_motion::{PiecewiseTransform, sticky_segments};
//!
//! // Pin an element while the page scrolls from 100px to 200px.
//! let transform = PiecewiseTransform::new(sticky_segments([(100, 200)]));
//! let viewport = Size::new(1280.0, 720.0);
//!
//! assert_eq!(transform.evaluate(viewport, 50.0), 0.0);
//! assert_eq!(transform.evaluate(viewport, 150.0), -50.0);
//! assert_eq!(transform.evaluate(viewport, 400.0), -100.0);
//! ```
//!
//! ## Ordering and gaps
//!
//! Segments are sorted by their _unresolved_ start, so keep the starts of one
//! kind (all pixels or all `vh`) for a meaningful order. Gaps are detected on
//! unresolved bounds as well: `500` and `"50vh"` are different bounds and get a
//! filler between them even when they resolve to the same pixel. Overlapping
//! ranges are accepted; [`SegmentList::has_overlaps`] reports them.
//!
//! ## Features
//!
//! - `std` (default): use the standard library's float functions.
//! - `libm`: use `libm` through Kurbo for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod piecewise;
mod range;
mod segment;
mod speed;
mod trigger;
mod units;

pub use piecewise::{
    PiecewiseDebugInfo, PiecewiseTransform, ScanState, ScanStep, SegmentDebugInfo,
};
pub use range::{SymbolicRange, resolve_range, resolve_ranges};
pub use segment::{Segment, SegmentFn, SegmentList, preprocess};
pub use speed::{STICKY_FACTOR, SegmentMotion, speed, speed_segments, sticky_segments};
pub use trigger::{Direction, DirectionTrigger, TriggerState};
pub use units::{ParseLengthError, SymbolicLength, ViewportUnit, resolve};

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll --heading-base-level=0

//! Understory Scroll: reactive bindings for scroll-driven motion.
//!
//! This crate wires the headless transforms of `understory_motion` to a small,
//! single-threaded reactive value so hosts can drive speed, sticky, parallax,
//! and trigger effects straight from a scroll position.
//!
//! The core pieces are:
//!
//! - [`MotionValue`]: a push-based observable `f64`. [`MotionValue::map`]
//!   derives new values, and [`MotionValue::subscribe`] registers listeners
//!   whose lifetime is tied to a [`Subscription`].
//! - [`ReactiveValue`]: the `get`/`subscribe` seam that [`trigger_on`] is
//!   generic over; [`MotionValue`] implements it.
//! - [`ViewportSource`] / [`Viewport`]: the viewport size used to resolve
//!   `vw`/`vh` lengths. The host updates a [`Viewport`] from its resize
//!   handler; a fixed [`kurbo::Size`] also works.
//! - Transforms: [`positive_offset`], [`speed_transform`],
//!   [`sticky_transform`], [`parallax_transform`], and the lower-level
//!   [`piecewise_transform`].
//! - [`trigger_on`]: direction-change callbacks inside a range.
//! - [`viewport_range`] / [`viewport_ranges`]: resolve symbolic ranges against
//!   the current viewport size, e.g. to build trigger ranges.
//!
//! All computation happens synchronously inside [`MotionValue::set`], in
//! emission order. Nothing here is `Send`; the model is the single-threaded
//! event loop of a UI host.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_scroll::{MotionValue, Viewport, positive_offset, sticky_transform};
//!
//! let viewport = Viewport::new(Size::new(1280.0, 800.0));
//!
//! // The host reports the element's top edge relative to the viewport.
//! let top = MotionValue::new(0.0);
//! let offset = positive_offset(&top);
//!
//! // Keep the element pinned for the second screen of scrolling.
//! let y = sticky_transform(&offset, &viewport, [("100vh", "200vh")]);
//!
//! top.set(-1000.0);
//! assert_eq!(y.get(), -200.0);
//! top.set(-2400.0);
//! assert_eq!(y.get(), -800.0);
//! ```
//!
//! ## Triggers
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use kurbo::Size;
//! use understory_motion::Direction;
//! use understory_scroll::{MotionValue, trigger_on, viewport_range};
//!
//! let viewport = Size::new(1280.0, 800.0);
//! let offset = MotionValue::new(0.0);
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! let range = viewport_range(&viewport, ("50vh", "150vh"));
//! let _trigger = trigger_on(&offset, range.start..=range.end, move |direction| {
//!     sink.borrow_mut().push(direction);
//! });
//!
//! for v in [500.0, 700.0, 650.0] {
//!     offset.set(v);
//! }
//! assert_eq!(*seen.borrow(), [Direction::Forward, Direction::Backward]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to Kurbo and Understory Motion.
//! - `libm`: `no_std` float functions through Kurbo.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod transform;
mod value;
mod viewport;

pub use transform::{
    parallax_transform, piecewise_transform, positive_offset, speed_transform, sticky_transform,
    trigger_on, viewport_range, viewport_ranges,
};
pub use value::{MotionValue, ReactiveValue, Subscription};
pub use viewport::{Viewport, ViewportSource};

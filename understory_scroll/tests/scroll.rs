// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_scroll` crate.
//!
//! These drive the public transforms the way a host would: a single scroll
//! value feeding several derived values, a viewport that gets resized, and
//! triggers that come and go.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Size;
use understory_motion::{Direction, SegmentFn, SegmentMotion};
use understory_scroll::{
    MotionValue, Viewport, parallax_transform, positive_offset, speed_transform,
    sticky_transform, trigger_on, viewport_range, viewport_ranges,
};

fn record() -> (Rc<RefCell<Vec<Direction>>>, impl FnMut(Direction) + 'static) {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&fired);
    (fired, move |d| sink.borrow_mut().push(d))
}

#[test]
fn scroll_drives_several_effects() {
    let viewport = Viewport::new(Size::new(1000.0, 500.0));
    let top = MotionValue::new(0.0);
    let offset = positive_offset(&top);

    let pinned = sticky_transform(&offset, &viewport, [(100, 200)]);
    let slow = speed_transform(&offset, &viewport, [(("0vh", "100vh"), 0.5)]);
    let fade = parallax_transform(
        &offset,
        &viewport,
        [(("0vh", "50vh"), SegmentFn::new(|v| v / 250.0))],
    );

    top.set(-150.0);
    assert_eq!(offset.get(), 150.0);
    assert_eq!(pinned.get(), -50.0);
    assert_eq!(slow.get(), -75.0);
    assert_eq!(fade.get(), 0.6);

    top.set(-800.0);
    assert_eq!(pinned.get(), -100.0);
    assert_eq!(slow.get(), -250.0);
    assert_eq!(fade.get(), 1.0);

    // Back above every range.
    top.set(20.0);
    assert_eq!(pinned.get(), 0.0);
    assert_eq!(slow.get(), 0.0);
    assert_eq!(fade.get(), 0.0);
}

#[test]
fn sticky_output_is_full_inverse_motion() {
    let offset = MotionValue::new(0.0);
    let pinned = sticky_transform(&offset, &Size::ZERO, [(100, 200)]);
    for step in 0..=100 {
        let v = 100.0 + f64::from(step);
        offset.set(v);
        assert_eq!(pinned.get(), -(v - 100.0));
    }
    offset.set(1_000.0);
    assert_eq!(pinned.get(), -100.0);
    offset.set(-1_000.0);
    assert_eq!(pinned.get(), 0.0);
}

#[test]
fn gaps_between_speed_ranges_hold_output() {
    let offset = MotionValue::new(0.0);
    let out = speed_transform(
        &offset,
        &Size::ZERO,
        [
            ((300, 400), SegmentMotion::Speed(1.0)),
            ((0, 100), SegmentMotion::Speed(0.5)),
        ],
    );
    offset.set(200.0);
    assert_eq!(out.get(), -50.0);
    offset.set(250.0);
    assert_eq!(out.get(), -50.0);
    offset.set(350.0);
    assert_eq!(out.get(), -100.0);
}

#[test]
fn seams_are_continuous_through_a_derived_value() {
    let viewport = Viewport::new(Size::new(1200.0, 700.0));
    let offset = MotionValue::new(0.0);
    let out = speed_transform(
        &offset,
        &viewport,
        [
            (("0vh", "40vh"), 0.3),
            (("40vh", "100vh"), 1.0),
            (("120vh", "200vh"), -0.5),
        ],
    );
    let covered = viewport_ranges(
        &viewport,
        [("0vh", "40vh"), ("40vh", "100vh"), ("100vh", "120vh")],
    );
    for seam in covered.into_iter().map(|r| r.end) {
        offset.set(seam);
        let at_seam = out.get();
        offset.set(seam + 1e-9);
        let after = out.get();
        assert!((at_seam - after).abs() < 1e-6, "jump at {seam}");
    }
}

#[test]
fn empty_transform_is_always_zero() {
    let offset = MotionValue::new(0.0);
    let out = parallax_transform(&offset, &Size::ZERO, Vec::<((i32, i32), SegmentFn)>::new());
    for v in [-10.0, 5.0, 1e6] {
        offset.set(v);
        assert_eq!(out.get(), 0.0);
    }
}

#[test]
fn trigger_debounces_monotonic_motion() {
    let offset = MotionValue::new(0.0);
    let (fired, callback) = record();
    let _trigger = trigger_on(&offset, 0.0..=1_000.0, callback);
    for step in 1..50 {
        offset.set(f64::from(step) * 10.0);
    }
    assert_eq!(*fired.borrow(), [Direction::Forward]);
    assert_eq!(fired.borrow()[0].signum(), -1);
}

#[test]
fn trigger_fires_on_every_reversal() {
    let offset = MotionValue::new(0.0);
    let (fired, callback) = record();
    let _trigger = trigger_on(&offset, 0.0..=100.0, callback);
    let values = [10.0, 20.0, 15.0, 25.0, 5.0, 30.0];
    for v in values {
        offset.set(v);
    }
    assert_eq!(
        *fired.borrow(),
        [
            Direction::Forward,
            Direction::Backward,
            Direction::Forward,
            Direction::Backward,
            Direction::Forward,
        ]
    );
}

#[test]
fn trigger_flat_input_fires_once() {
    let offset = MotionValue::new(0.0);
    let (fired, callback) = record();
    let _trigger = trigger_on(&offset, 0.0..=100.0, callback);
    for _ in 0..10 {
        offset.set(42.0);
    }
    assert_eq!(*fired.borrow(), [Direction::Forward]);
}

#[test]
fn trigger_ignores_values_outside_its_range() {
    let viewport = Size::new(1000.0, 1000.0);
    let offset = MotionValue::new(0.0);
    let (fired, callback) = record();
    let range = viewport_range(&viewport, ("50vh", "100vh"));
    let _trigger = trigger_on(&offset, range.start..=range.end, callback);
    for v in [100.0, 300.0, 200.0, 1_500.0, 1_200.0] {
        offset.set(v);
    }
    assert!(fired.borrow().is_empty());
    offset.set(600.0);
    offset.set(700.0);
    assert_eq!(*fired.borrow(), [Direction::Forward]);
}

#[test]
fn dropping_effects_releases_listeners() {
    let offset = MotionValue::new(0.0);
    let viewport = Viewport::new(Size::new(100.0, 100.0));
    let pinned = sticky_transform(&offset, &viewport, [(0, 10)]);
    let (_fired, callback) = record();
    let trigger = trigger_on(&offset, 0.0..=10.0, callback);
    assert_eq!(offset.listener_count(), 2);

    drop(pinned);
    drop(trigger);
    assert_eq!(offset.listener_count(), 0);
}

#[test]
fn feedback_from_listeners_keeps_emission_order() {
    let source = MotionValue::new(0.0);
    let handle = source.clone();
    // Snaps back whenever the value overshoots.
    let _snap = source.subscribe(move |v| {
        if v > 50.0 {
            handle.set(50.0);
        }
    });
    let derived = source.map(|v| v * 2.0);
    let (fired, callback) = record();
    let _trigger = trigger_on(&source, 0.0..=100.0, callback);

    source.set(80.0);
    assert_eq!(source.get(), 50.0);
    assert_eq!(derived.get(), 100.0);
    assert_eq!(*fired.borrow(), [Direction::Forward, Direction::Backward]);

    source.set(20.0);
    assert_eq!(derived.get(), 40.0);
    assert_eq!(*fired.borrow(), [Direction::Forward, Direction::Backward]);
}

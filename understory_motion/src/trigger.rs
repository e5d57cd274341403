// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction-change triggers inside a bounded range.
//!
//! A trigger watches a stream of values and reports when the direction of
//! movement changes while the value is inside its range. Repeated movement in
//! the same direction is debounced: only the change itself is reported.
//!
//! ## Minimal example
//!
//! ```
//! use understory_motion::{Direction, DirectionTrigger};
//!
//! let mut fired = Vec::new();
//! let mut trigger = DirectionTrigger::new(100.0..=200.0, |d| fired.push(d));
//!
//! for v in [50.0, 120.0, 130.0, 140.0, 135.0, 250.0] {
//!     trigger.observe(v);
//! }
//! drop(trigger);
//! assert_eq!(fired, [Direction::Forward, Direction::Backward]);
//! ```

use core::fmt;
use core::ops::RangeInclusive;

/// Direction of movement between two observed values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The value decreased.
    Backward,
    /// The value did not change.
    #[default]
    Still,
    /// The value increased.
    Forward,
}

impl Direction {
    /// Direction of movement from `from` to `to`.
    ///
    /// Incomparable values (NaN) count as [`Direction::Still`].
    #[must_use]
    pub fn between(from: f64, to: f64) -> Self {
        if to < from {
            Self::Backward
        } else if to > from {
            Self::Forward
        } else {
            Self::Still
        }
    }

    /// Sign of `last - current`: `1` for backward, `0` for still, `-1` for forward.
    #[must_use]
    pub const fn signum(self) -> i8 {
        match self {
            Self::Backward => 1,
            Self::Still => 0,
            Self::Forward => -1,
        }
    }
}

/// Trigger state threaded through successive observations.
///
/// Starts at value `0.0` with no direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerState {
    /// Last value observed inside the range.
    pub last_value: f64,
    /// Direction reported (or suppressed) for the last in-range observation.
    pub last_direction: Direction,
}

impl TriggerState {
    /// Observes `value`, returning the next state and the direction to report.
    ///
    /// Values outside `range` leave the state untouched and
    /// report nothing. Inside the range, a direction is reported only when it
    /// differs from the previous one.
    #[must_use]
    pub fn step(self, range: &RangeInclusive<f64>, value: f64) -> (Self, Option<Direction>) {
        if !range.contains(&value) {
            return (self, None);
        }
        let direction = Direction::between(self.last_value, value);
        let next = Self {
            last_value: value,
            last_direction: direction,
        };
        let fired = (direction != self.last_direction).then_some(direction);
        (next, fired)
    }
}

/// A [`TriggerState`] bound to a range and a callback.
pub struct DirectionTrigger<F> {
    range: RangeInclusive<f64>,
    state: TriggerState,
    callback: F,
}

impl<F: FnMut(Direction)> DirectionTrigger<F> {
    /// Creates a trigger over `range`.
    pub fn new(range: RangeInclusive<f64>, callback: F) -> Self {
        Self {
            range,
            state: TriggerState::default(),
            callback,
        }
    }

    /// The watched range.
    #[must_use]
    pub fn range(&self) -> &RangeInclusive<f64> {
        &self.range
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Observes a value, invoking the callback on a direction change.
    ///
    /// Returns the direction that was reported, if any. Panics from the
    /// callback are not caught.
    pub fn observe(&mut self, value: f64) -> Option<Direction> {
        let (next, fired) = self.state.step(&self.range, value);
        self.state = next;
        if let Some(direction) = fired {
            log::trace!("trigger {:?} fired {direction:?} at {value}", self.range);
            (self.callback)(direction);
        }
        fired
    }

    /// Forgets the observation history.
    pub fn reset(&mut self) {
        self.state = TriggerState::default();
    }
}

impl<F> fmt::Debug for DirectionTrigger<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionTrigger")
            .field("range", &self.range)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

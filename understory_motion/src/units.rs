// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbolic lengths and their resolution against a viewport size.
//!
//! A [`SymbolicLength`] is either an absolute pixel value or a percentage of the
//! viewport width/height (`"90vw"`, `"50vh"`). Resolution happens late, against
//! whatever viewport size is current at evaluation time, so that resizes are
//! picked up on the next input change.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::Size;

/// Which viewport axis a percentage length refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewportUnit {
    /// Percentage of the viewport width.
    Vw,
    /// Percentage of the viewport height.
    Vh,
}

impl ViewportUnit {
    /// The CSS-style suffix for this unit.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Vw => "vw",
            Self::Vh => "vh",
        }
    }

    /// Returns the viewport extent along this unit's axis.
    #[must_use]
    pub fn extent(self, viewport: Size) -> f64 {
        match self {
            Self::Vw => viewport.width,
            Self::Vh => viewport.height,
        }
    }
}

/// A length that is either absolute or relative to the viewport.
///
/// Lengths are compared _unresolved_: `Px(500.0)` and `Viewport(50, Vh)` are
/// different values even when the viewport is 1000px tall.
///
/// # Example
///
/// ```
/// use kurbo::Size;
/// use understory_motion::{SymbolicLength, ViewportUnit};
///
/// let viewport = Size::new(1000.0, 500.0);
///
/// let wide: SymbolicLength = "90vw".parse().unwrap();
/// assert_eq!(wide, SymbolicLength::Viewport(90, ViewportUnit::Vw));
/// assert_eq!(wide.resolve(viewport), 900.0);
///
/// assert_eq!(SymbolicLength::from(200.0).resolve(viewport), 200.0);
/// assert_eq!(SymbolicLength::parse_lenient("bogus").resolve(viewport), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SymbolicLength {
    /// An absolute length in pixels.
    Px(f64),
    /// A whole-number percentage of a viewport axis.
    Viewport(u32, ViewportUnit),
}

impl SymbolicLength {
    /// The zero-pixel length.
    pub const ZERO: Self = Self::Px(0.0);

    /// Percentage of the viewport width.
    #[must_use]
    pub const fn vw(percent: u32) -> Self {
        Self::Viewport(percent, ViewportUnit::Vw)
    }

    /// Percentage of the viewport height.
    #[must_use]
    pub const fn vh(percent: u32) -> Self {
        Self::Viewport(percent, ViewportUnit::Vh)
    }

    /// Parses `s`, falling back to [`SymbolicLength::ZERO`] when it is malformed.
    ///
    /// Anything that does not match `<digits>vw` or `<digits>vh` resolves to
    /// zero pixels rather than failing. Use [`str::parse`] when malformed input
    /// should be reported instead.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|err| {
            log::warn!("malformed length {s:?} ({err}), using 0px");
            Self::ZERO
        })
    }

    /// Resolves this length to pixels for the given viewport size.
    ///
    /// See [`resolve`].
    #[must_use]
    pub fn resolve(self, viewport: Size) -> f64 {
        resolve(viewport, self)
    }

    /// Total order over unresolved lengths.
    ///
    /// Lengths of the same kind compare by amount (pixels with
    /// [`f64::total_cmp`]). Across kinds, pixels sort before `vw`, which sort
    /// before `vh`. The cross-kind order is arbitrary but deterministic; it does
    /// not reflect resolved magnitudes.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Px(a), Self::Px(b)) => a.total_cmp(b),
            (Self::Px(_), Self::Viewport(..)) => Ordering::Less,
            (Self::Viewport(..), Self::Px(_)) => Ordering::Greater,
            (Self::Viewport(a, unit_a), Self::Viewport(b, unit_b)) => {
                unit_a.cmp(unit_b).then(a.cmp(b))
            }
        }
    }
}

impl Default for SymbolicLength {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for SymbolicLength {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl From<i32> for SymbolicLength {
    fn from(px: i32) -> Self {
        Self::Px(f64::from(px))
    }
}

/// Lenient conversion, see [`SymbolicLength::parse_lenient`].
impl From<&str> for SymbolicLength {
    fn from(s: &str) -> Self {
        Self::parse_lenient(s)
    }
}

impl fmt::Display for SymbolicLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}"),
            Self::Viewport(percent, unit) => write!(f, "{percent}{}", unit.suffix()),
        }
    }
}

/// Reasons a string is not a viewport-relative length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseLengthError {
    /// The input was empty.
    #[error("empty length")]
    Empty,
    /// The input had no unit suffix (plain numbers are not accepted as strings).
    #[error("missing `vw` or `vh` unit")]
    MissingUnit,
    /// The suffix was not `vw` or `vh`.
    #[error("unknown unit, expected `vw` or `vh`")]
    UnknownUnit,
    /// The percentage was missing, not a whole number, or out of range.
    #[error("invalid percentage")]
    InvalidPercent,
}

impl FromStr for SymbolicLength {
    type Err = ParseLengthError;

    /// Parses `<digits>vw` or `<digits>vh`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseLengthError::Empty);
        }
        let split = s
            .find(|c: char| !c.is_ascii_digit())
            .ok_or(ParseLengthError::MissingUnit)?;
        let (digits, suffix) = s.split_at(split);
        let unit = match suffix {
            "vw" => ViewportUnit::Vw,
            "vh" => ViewportUnit::Vh,
            _ => return Err(ParseLengthError::UnknownUnit),
        };
        if digits.is_empty() {
            return Err(ParseLengthError::InvalidPercent);
        }
        let percent = digits
            .parse::<u32>()
            .map_err(|_| ParseLengthError::InvalidPercent)?;
        Ok(Self::Viewport(percent, unit))
    }
}

/// Resolves a symbolic length to pixels.
///
/// - `Px(n)` is returned unchanged.
/// - `Viewport(p, unit)` is `round(p / 100 * extent)` where `extent` is the
///   viewport width for `vw` and the height for `vh`.
#[must_use]
pub fn resolve(viewport: Size, value: SymbolicLength) -> f64 {
    match value {
        SymbolicLength::Px(px) => px,
        SymbolicLength::Viewport(percent, unit) => {
            (f64::from(percent) / 100.0 * unit.extent(viewport)).round()
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport size providers.

use alloc::rc::Rc;
use core::cell::Cell;

use kurbo::Size;

/// Something that knows the current viewport size.
///
/// Transforms read the size on every evaluation, so implementations should be
/// cheap. A plain [`Size`] is a fixed viewport; [`Viewport`] is a shared handle
/// the host updates on resize.
pub trait ViewportSource {
    /// The current viewport size in pixels.
    fn size(&self) -> Size;
}

impl ViewportSource for Size {
    fn size(&self) -> Size {
        *self
    }
}

/// A shared, resizable viewport size.
///
/// Clones share the same size. The host calls [`Viewport::set_size`] from its
/// resize handler; transforms see the new size on their next evaluation, which
/// happens on the next input change.
#[derive(Clone, Debug, Default)]
pub struct Viewport {
    size: Rc<Cell<Size>>,
}

impl Viewport {
    /// Creates a viewport of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size: Rc::new(Cell::new(size)),
        }
    }

    /// The current size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size.get()
    }

    /// Replaces the size, returning `true` if it changed.
    pub fn set_size(&self, size: Size) -> bool {
        let changed = self.size.replace(size) != size;
        if changed {
            log::debug!("viewport resized to {}x{}", size.width, size.height);
        }
        changed
    }
}

impl ViewportSource for Viewport {
    fn size(&self) -> Size {
        Self::size(self)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{Viewport, ViewportSource};

    #[test]
    fn clones_share_size() {
        let viewport = Viewport::new(Size::new(800.0, 600.0));
        let reader = viewport.clone();
        assert!(viewport.set_size(Size::new(1024.0, 768.0)));
        assert_eq!(ViewportSource::size(&reader), Size::new(1024.0, 768.0));
        assert!(!viewport.set_size(Size::new(1024.0, 768.0)));
    }

    #[test]
    fn fixed_size_source() {
        let fixed = Size::new(10.0, 20.0);
        assert_eq!(ViewportSource::size(&fixed), fixed);
    }
}

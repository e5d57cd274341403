// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A push-based observable number and its subscriptions.
//!
//! [`MotionValue`] holds a current `f64` and notifies listeners synchronously
//! when it changes. Derived values created with [`MotionValue::map`] keep their
//! source alive, while a source only holds a weak link to what is derived from
//! it; dropping a derived value therefore unsubscribes it.

use alloc::collections::VecDeque;
use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};
use core::fmt;

use smallvec::SmallVec;

type Listener = Rc<dyn Fn(f64)>;

/// Listener lists are usually tiny: one derived value and maybe a trigger.
const INLINE_LISTENERS: usize = 2;

struct Shared {
    current: Cell<f64>,
    listeners: RefCell<SmallVec<[(u64, Listener); INLINE_LISTENERS]>>,
    next_id: Cell<u64>,
    upstream: RefCell<Option<Upstream>>,
    dispatching: Cell<bool>,
    /// Values set while listeners were being notified, in emission order.
    pending: RefCell<VecDeque<f64>>,
}

/// Ends a dispatch, even when a listener panics.
struct DispatchGuard<'a>(&'a Shared);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.dispatching.set(false);
        self.0.pending.borrow_mut().clear();
    }
}

/// Link from a derived value back to its source.
struct Upstream {
    // Unsubscribe before releasing the source.
    _subscription: Subscription,
    _source: MotionValue,
}

/// A readable number that notifies listeners when it changes.
///
/// [`trigger_on`](crate::trigger_on) is generic over this trait, so hosts with
/// their own value type can drive triggers by wrapping a [`MotionValue`].
pub trait ReactiveValue {
    /// The current value.
    fn get(&self) -> f64;

    /// Registers `listener` for every future change, until the returned
    /// [`Subscription`] is dropped.
    fn subscribe(&self, listener: impl Fn(f64) + 'static) -> Subscription;
}

/// A single-threaded observable number.
///
/// Cloning a `MotionValue` clones the handle; all clones observe and update the
/// same value.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use understory_scroll::MotionValue;
///
/// let scroll = MotionValue::new(0.0);
/// let doubled = scroll.map(|v| v * 2.0);
///
/// let seen = Rc::new(Cell::new(0.0));
/// let sink = seen.clone();
/// let _sub = doubled.subscribe(move |v| sink.set(v));
///
/// scroll.set(21.0);
/// assert_eq!(doubled.get(), 42.0);
/// assert_eq!(seen.get(), 42.0);
/// ```
#[derive(Clone)]
pub struct MotionValue {
    shared: Rc<Shared>,
}

impl MotionValue {
    /// Creates a value with no listeners.
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self {
            shared: Rc::new(Shared {
                current: Cell::new(initial),
                listeners: RefCell::new(SmallVec::new()),
                next_id: Cell::new(0),
                upstream: RefCell::new(None),
                dispatching: Cell::new(false),
                pending: RefCell::new(VecDeque::new()),
            }),
        }
    }

    /// The current value.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.shared.current.get()
    }

    /// Updates the value and notifies listeners in subscription order.
    ///
    /// Setting the value it already holds notifies nobody. Listeners are
    /// snapshotted before dispatch, so they may subscribe or unsubscribe while
    /// being notified.
    ///
    /// A value set from inside a listener is queued. It becomes current and is
    /// delivered to every listener once the round in progress has finished, so
    /// all listeners see values in emission order.
    pub fn set(&self, value: f64) {
        let shared = &*self.shared;
        if shared.dispatching.get() {
            let mut pending = shared.pending.borrow_mut();
            let latest = pending.back().copied().unwrap_or(shared.current.get());
            if latest != value {
                pending.push_back(value);
            }
            return;
        }
        if shared.current.get() == value {
            return;
        }

        shared.dispatching.set(true);
        let _guard = DispatchGuard(shared);
        let mut next = Some(value);
        while let Some(value) = next {
            shared.current.set(value);
            let listeners: SmallVec<[Listener; INLINE_LISTENERS]> = shared
                .listeners
                .borrow()
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            for listener in listeners {
                listener(value);
            }
            next = shared.pending.borrow_mut().pop_front();
        }
    }

    /// Registers `listener` for every future change.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe(&self, listener: impl Fn(f64) + 'static) -> Subscription {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            source: Rc::downgrade(&self.shared),
            id,
        }
    }

    /// Creates a value that tracks `f` applied to this one.
    ///
    /// The derived value is computed immediately and recomputed on every change
    /// of `self`. It keeps `self` alive; dropping every handle to the derived
    /// value removes its listener from `self`.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64 + 'static) -> Self {
        let derived = Self::new(f(self.get()));
        let target: Weak<Shared> = Rc::downgrade(&derived.shared);
        let subscription = self.subscribe(move |v| {
            if let Some(shared) = target.upgrade() {
                Self { shared }.set(f(v));
            }
        });
        *derived.shared.upstream.borrow_mut() = Some(Upstream {
            _subscription: subscription,
            _source: self.clone(),
        });
        derived
    }

    /// Number of registered listeners, derived values included.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }
}

impl ReactiveValue for MotionValue {
    fn get(&self) -> f64 {
        Self::get(self)
    }

    fn subscribe(&self, listener: impl Fn(f64) + 'static) -> Subscription {
        Self::subscribe(self, listener)
    }
}

impl Default for MotionValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for MotionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionValue")
            .field("current", &self.get())
            .field("listeners", &self.listener_count())
            .field("derived", &self.shared.upstream.borrow().is_some())
            .finish_non_exhaustive()
    }
}

/// Registration of a listener on a [`MotionValue`].
///
/// Dropping the subscription removes the listener. Subscriptions do not keep
/// the value alive.
#[must_use = "dropping a Subscription removes its listener"]
pub struct Subscription {
    source: Weak<Shared>,
    id: u64,
}

impl Subscription {
    /// Returns `true` while the observed value is alive.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.source.strong_count() > 0
    }

    /// Removes the listener now. Equivalent to dropping the subscription.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.source.upgrade() {
            // Release the listener outside the borrow; dropping it may drop
            // other subscriptions on the same value.
            let removed = {
                let mut listeners = shared.listeners.borrow_mut();
                listeners
                    .iter()
                    .position(|(id, _)| *id == self.id)
                    .map(|index| listeners.remove(index))
            };
            drop(removed);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

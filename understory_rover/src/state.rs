// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Rover state hook: a shared handle over a [`Registry`].

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use understory_props::{SealedInitialState, StateBundle, StateKeys};

use crate::navigation::{Direction, Orientation};
use crate::registry::{Registry, Rejected, Stop};

/// Initial configuration for [`use_rover_state`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoverInitialState<K> {
    /// Which arrow keys move the tab stop.
    pub orientation: Orientation,
    /// The stop that should own the tab stop once it registers.
    pub focused_id: Option<K>,
    /// Stops registered up front, enabled, in this order.
    pub focusable_ids: Vec<K>,
    /// Whether next/previous loop around the ends.
    pub wrap: bool,
}

impl<K> Default for RoverInitialState<K> {
    fn default() -> Self {
        Self {
            orientation: Orientation::Both,
            focused_id: None,
            focusable_ids: Vec::new(),
            wrap: false,
        }
    }
}

impl<K> RoverInitialState<K> {
    /// Set the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the initially focused stop.
    #[must_use]
    pub fn with_focused_id(mut self, id: K) -> Self {
        self.focused_id = Some(id);
        self
    }

    /// Set the stops registered up front.
    #[must_use]
    pub fn with_focusable_ids(mut self, ids: impl IntoIterator<Item = K>) -> Self {
        self.focusable_ids = ids.into_iter().collect();
        self
    }

    /// Set looping.
    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

/// Build a Rover state bundle from a sealed initial configuration.
///
/// Plain roving groups do not loop unless configured to.
pub fn use_rover_state<K: Copy + Eq>(
    initial: impl Into<SealedInitialState<RoverInitialState<K>>>,
) -> RoverStateReturn<K> {
    let config = initial.into().resolve();
    let mut registry = Registry::new(config.wrap)
        .with_orientation(config.orientation)
        .with_initial_id(config.focused_id);
    for id in config.focusable_ids {
        registry.register(Stop::new(id));
    }
    RoverStateReturn {
        registry: Rc::new(RefCell::new(registry)),
    }
}

/// Shared Rover state and actions.
///
/// Clones share one registry. Actions borrow the registry only while they run,
/// so they can be called from any callback as long as the caller does not hold
/// a [`RoverStateReturn::with_registry`] borrow at the same time.
pub struct RoverStateReturn<K> {
    registry: Rc<RefCell<Registry<K>>>,
}

impl<K> Clone for RoverStateReturn<K> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for RoverStateReturn<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RoverStateReturn")
            .field(&self.registry.borrow())
            .finish()
    }
}

impl<K> StateBundle for RoverStateReturn<K> {
    const KEYS: StateKeys = StateKeys::new(&[
        "orientation",
        "stops",
        "current_id",
        "past_id",
        "wrap",
        "register",
        "unregister",
        "set_disabled",
        "move_to",
        "next",
        "previous",
        "first",
        "last",
        "set_current_id",
        "reset",
        "orientate",
    ]);
}

impl<K: Copy + Eq> RoverStateReturn<K> {
    /// Read the registry.
    pub fn with_registry<R>(&self, f: impl FnOnce(&Registry<K>) -> R) -> R {
        f(&self.registry.borrow())
    }

    /// The stop that owns the tab stop.
    pub fn current_id(&self) -> Option<K> {
        self.registry.borrow().current_id()
    }

    /// The previous owner of the tab stop.
    pub fn past_id(&self) -> Option<K> {
        self.registry.borrow().past_id()
    }

    /// Whether `id` owns the tab stop.
    pub fn is_current(&self, id: K) -> bool {
        self.registry.borrow().is_current(id)
    }

    /// Which arrow keys move the tab stop.
    pub fn orientation(&self) -> Orientation {
        self.registry.borrow().orientation()
    }

    /// Whether next/previous loop around the ends.
    pub fn wraps(&self) -> bool {
        self.registry.borrow().wraps()
    }

    /// A snapshot of the registered stops in order.
    pub fn stops(&self) -> Vec<Stop<K>> {
        self.registry.borrow().stops().to_vec()
    }

    /// Insert or update a stop.
    pub fn register(&self, stop: Stop<K>) {
        self.registry.borrow_mut().register(stop);
    }

    /// Remove a stop.
    pub fn unregister(&self, id: K) -> bool {
        self.registry.borrow_mut().unregister(id)
    }

    /// Enable or disable a stop.
    pub fn set_disabled(&self, id: K, disabled: bool) -> Result<(), Rejected> {
        self.registry.borrow_mut().set_disabled(id, disabled)
    }

    /// Move the tab stop.
    pub fn move_to(&self, direction: Direction) -> Option<K> {
        self.registry.borrow_mut().move_to(direction)
    }

    /// Move to the next enabled stop.
    pub fn next(&self) -> Option<K> {
        self.move_to(Direction::Next)
    }

    /// Move to the previous enabled stop.
    pub fn previous(&self) -> Option<K> {
        self.move_to(Direction::Previous)
    }

    /// Move to the first enabled stop.
    pub fn first(&self) -> Option<K> {
        self.move_to(Direction::First)
    }

    /// Move to the last enabled stop.
    pub fn last(&self) -> Option<K> {
        self.move_to(Direction::Last)
    }

    /// Jump directly to `id`.
    pub fn set_current_id(&self, id: K) -> Result<(), Rejected> {
        self.registry.borrow_mut().set_current_id(id)
    }

    /// Return the tab stop to its initial owner.
    pub fn reset(&self) {
        self.registry.borrow_mut().reset();
    }

    /// Change which arrow keys move the tab stop.
    pub fn orientate(&self, orientation: Orientation) {
        self.registry.borrow_mut().orientate(orientation);
    }

    /// Register `stop` for as long as the returned guard lives.
    ///
    /// Hosts create the guard when a member mounts and drop it when the member
    /// unmounts.
    pub fn mount(&self, stop: Stop<K>) -> Registration<K> {
        let id = stop.id;
        let token = self.registry.borrow_mut().mount(stop);
        Registration {
            id,
            token,
            registry: Rc::downgrade(&self.registry),
        }
    }
}

/// Keeps one stop registered; unregisters it on drop.
///
/// The guard does not keep the group alive: if the state bundle is gone, dropping
/// the guard does nothing. If the same id has been mounted again since, the newer
/// mount owns the stop and dropping this guard leaves it registered.
pub struct Registration<K: Copy + Eq> {
    id: K,
    token: u64,
    registry: Weak<RefCell<Registry<K>>>,
}

impl<K: Copy + Eq> Registration<K> {
    /// The registered id.
    pub fn id(&self) -> K {
        self.id
    }

    /// Update the registered stop's disabled flag.
    pub fn set_disabled(&self, disabled: bool) -> Result<(), Rejected> {
        match self.registry.upgrade() {
            Some(registry) => registry.borrow_mut().set_disabled(self.id, disabled),
            None => Err(Rejected::UnknownStop),
        }
    }
}

impl<K: Copy + Eq> Drop for Registration<K> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().release(self.id, self.token);
        }
    }
}

impl<K: Copy + Eq + core::fmt::Debug> core::fmt::Debug for Registration<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The roving tab stop registry.

use core::cmp::Ordering;

use smallvec::SmallVec;

use crate::navigation::{Direction, Orientation};

/// One navigable member of a roving group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop<K> {
    /// Identifier for this stop.
    pub id: K,
    /// Optional explicit ordering key.
    ///
    /// Stops with a key are ordered by it and come before stops without one.
    /// Stops without a key keep their registration order. Hosts with a layout
    /// tree pass the document position here so that out-of-order mounts still
    /// navigate in visual order.
    pub order: Option<i32>,
    /// Disabled stops stay registered but are skipped by every move.
    pub disabled: bool,
}

impl<K> Stop<K> {
    /// An enabled stop without an explicit order.
    pub fn new(id: K) -> Self {
        Self {
            id,
            order: None,
            disabled: false,
        }
    }

    /// Set the ordering key.
    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether moves may land on this stop.
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}

/// Why a direct jump or update left the registry unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    /// No stop is registered under the id.
    #[error("no stop is registered under this id")]
    UnknownStop,
    /// The stop exists but is disabled.
    #[error("the stop is disabled")]
    DisabledStop,
}

#[derive(Copy, Clone)]
enum Step {
    Forward,
    Backward,
}

fn compare_order(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ordered stops plus the id that currently owns the roving tab stop.
///
/// Whenever at least one registered stop is enabled, [`Registry::current_id`]
/// names a registered, enabled stop. When the current stop is unregistered or
/// disabled, the tab stop moves to the next enabled stop in order, then the
/// previous one, and otherwise to none.
///
/// Invalid requests never panic: moves with no eligible target return `None`
/// and direct jumps return [`Rejected`], both leaving the registry unchanged.
#[derive(Clone, Debug)]
pub struct Registry<K> {
    stops: SmallVec<[Stop<K>; 8]>,
    current_id: Option<K>,
    past_id: Option<K>,
    initial_id: Option<K>,
    initial_claimed: bool,
    mounts: SmallVec<[(K, u64); 8]>,
    next_mount: u64,
    wrap: bool,
    orientation: Orientation,
}

impl<K: Copy + Eq> Registry<K> {
    /// An empty registry. `wrap` makes next/previous loop around the ends.
    pub fn new(wrap: bool) -> Self {
        Self {
            stops: SmallVec::new(),
            current_id: None,
            past_id: None,
            initial_id: None,
            initial_claimed: false,
            mounts: SmallVec::new(),
            next_mount: 0,
            wrap,
            orientation: Orientation::default(),
        }
    }

    /// Set the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Prefer `id` as the tab stop once it registers, and on [`Registry::reset`].
    #[must_use]
    pub fn with_initial_id(mut self, id: Option<K>) -> Self {
        self.initial_id = id;
        self
    }

    /// Registered stops in navigation order.
    pub fn stops(&self) -> &[Stop<K>] {
        &self.stops
    }

    /// Number of registered stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether no stop is registered.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The stop that owns the tab stop.
    pub fn current_id(&self) -> Option<K> {
        self.current_id
    }

    /// The previous owner of the tab stop. It may have been unregistered since.
    pub fn past_id(&self) -> Option<K> {
        self.past_id
    }

    /// Whether `id` owns the tab stop.
    pub fn is_current(&self, id: K) -> bool {
        self.current_id == Some(id)
    }

    /// Whether next/previous loop around the ends.
    pub fn wraps(&self) -> bool {
        self.wrap
    }

    /// Which arrow keys move the tab stop.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Look up a stop.
    pub fn get(&self, id: K) -> Option<&Stop<K>> {
        self.stops.iter().find(|s| s.id == id)
    }

    fn position(&self, id: K) -> Option<usize> {
        self.stops.iter().position(|s| s.id == id)
    }

    fn first_enabled(&self) -> Option<K> {
        self.stops.iter().find(|s| s.is_enabled()).map(|s| s.id)
    }

    fn last_enabled(&self) -> Option<K> {
        self.stops.iter().rev().find(|s| s.is_enabled()).map(|s| s.id)
    }

    /// Insert or update a stop, keeping stops in order.
    ///
    /// Registering an id that is already present replaces its order and
    /// disabled flag. The first enabled stop becomes current when nothing is;
    /// the configured initial id takes the tab stop the first time it registers.
    pub fn register(&mut self, stop: Stop<K>) {
        if let Some(pos) = self.position(stop.id) {
            self.stops.remove(pos);
        }
        let at = self
            .stops
            .partition_point(|s| compare_order(s.order, stop.order) != Ordering::Greater);
        self.stops.insert(at, stop);
        tracing::trace!(index = at, len = self.stops.len(), "stop registered");

        if stop.is_enabled() {
            self.adopt(stop.id);
        } else if self.is_current(stop.id) {
            self.reassign(at + 1, at);
        }
    }

    /// Remove a stop. Returns `false` if it was not registered.
    pub fn unregister(&mut self, id: K) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        self.stops.remove(pos);
        self.mounts.retain(|(mounted, _)| *mounted != id);
        tracing::trace!(index = pos, len = self.stops.len(), "stop unregistered");
        if self.is_current(id) {
            self.reassign(pos, pos);
        }
        true
    }

    /// Register `stop` and return a token naming this particular mount.
    ///
    /// Mounting an id again supersedes any earlier token for it.
    pub(crate) fn mount(&mut self, stop: Stop<K>) -> u64 {
        let token = self.next_mount;
        self.next_mount += 1;
        let id = stop.id;
        self.register(stop);
        self.mounts.retain(|(mounted, _)| *mounted != id);
        self.mounts.push((id, token));
        token
    }

    /// Unregister `id` if `token` is still its latest mount.
    ///
    /// A superseded token leaves the stop alone and returns `false`.
    pub(crate) fn release(&mut self, id: K, token: u64) -> bool {
        if !self.mounts.contains(&(id, token)) {
            tracing::trace!(token, "superseded mount released; stop kept");
            return false;
        }
        self.unregister(id)
    }

    /// Enable or disable a registered stop in place.
    pub fn set_disabled(&mut self, id: K, disabled: bool) -> Result<(), Rejected> {
        let pos = self.position(id).ok_or(Rejected::UnknownStop)?;
        self.stops[pos].disabled = disabled;
        if !disabled {
            self.adopt(id);
        } else if self.is_current(id) {
            self.reassign(pos + 1, pos);
        }
        Ok(())
    }

    /// Move the tab stop. Returns the new owner, or `None` if no stop is eligible.
    ///
    /// With no current stop, [`Direction::Next`] behaves like [`Direction::First`]
    /// and [`Direction::Previous`] like [`Direction::Last`].
    pub fn move_to(&mut self, direction: Direction) -> Option<K> {
        let target = match direction {
            Direction::First => self.first_enabled(),
            Direction::Last => self.last_enabled(),
            Direction::Next => match self.current_id.and_then(|id| self.position(id)) {
                Some(pos) => self.scan(pos, Step::Forward),
                None => self.first_enabled(),
            },
            Direction::Previous => match self.current_id.and_then(|id| self.position(id)) {
                Some(pos) => self.scan(pos, Step::Backward),
                None => self.last_enabled(),
            },
        };
        match target {
            Some(id) => {
                self.set_current(Some(id));
                Some(id)
            }
            None => {
                tracing::trace!(?direction, "no eligible stop; move ignored");
                None
            }
        }
    }

    /// Jump directly to `id`.
    pub fn set_current_id(&mut self, id: K) -> Result<(), Rejected> {
        match self.get(id).map(|s| s.disabled) {
            None => Err(Rejected::UnknownStop),
            Some(true) => Err(Rejected::DisabledStop),
            Some(false) => {
                self.set_current(Some(id));
                Ok(())
            }
        }
    }

    /// Return the tab stop to the initial id if it is registered and enabled,
    /// otherwise to the first enabled stop, and forget the past id.
    pub fn reset(&mut self) {
        let initial = self
            .initial_id
            .filter(|id| self.get(*id).is_some_and(Stop::is_enabled));
        self.current_id = initial.or_else(|| self.first_enabled());
        self.past_id = None;
    }

    /// Change which arrow keys move the tab stop.
    pub fn orientate(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    fn adopt(&mut self, id: K) {
        if !self.initial_claimed && self.initial_id == Some(id) {
            self.initial_claimed = true;
            self.set_current(Some(id));
        } else if self.current_id.is_none() {
            self.set_current(Some(id));
        }
    }

    /// Pick the first enabled stop at or after `after`, else the nearest enabled
    /// stop before `before`.
    fn reassign(&mut self, after: usize, before: usize) {
        let next = self.stops[after..]
            .iter()
            .find(|s| s.is_enabled())
            .or_else(|| self.stops[..before].iter().rev().find(|s| s.is_enabled()))
            .map(|s| s.id);
        tracing::debug!(found = next.is_some(), "tab stop reassigned");
        self.set_current(next);
    }

    fn scan(&self, pos: usize, step: Step) -> Option<K> {
        let len = self.stops.len();
        (1..len)
            .filter_map(|offset| match step {
                Step::Forward if pos + offset < len => Some(pos + offset),
                Step::Backward if offset <= pos => Some(pos - offset),
                Step::Forward if self.wrap => Some((pos + offset) % len),
                Step::Backward if self.wrap => Some(pos + len - offset),
                _ => None,
            })
            .map(|i| &self.stops[i])
            .find(|s| s.is_enabled())
            .map(|s| s.id)
    }

    fn set_current(&mut self, next: Option<K>) {
        if next != self.current_id {
            self.past_id = self.current_id;
            self.current_id = next;
        }
    }
}

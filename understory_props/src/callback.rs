// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shareable event callbacks and value setters.

use alloc::rc::Rc;
use smallvec::SmallVec;

use crate::event::Event;

type Handler = Rc<dyn Fn(&Event)>;

/// An event callback attached to [`ElementProps`](crate::ElementProps).
///
/// A `Callback` is a chain of one or more handlers. Cloning is cheap and shares
/// the handlers. Chaining two callbacks produces one that runs every handler of
/// the first, then every handler of the second.
#[derive(Clone)]
pub struct Callback {
    chain: SmallVec<[Handler; 2]>,
}

impl Callback {
    /// Wrap a single handler.
    pub fn new(handler: impl Fn(&Event) + 'static) -> Self {
        let mut chain = SmallVec::new();
        chain.push(Rc::new(handler) as Handler);
        Self { chain }
    }

    /// Run every handler in order.
    pub fn call(&self, event: &Event) {
        for handler in &self.chain {
            handler(event);
        }
    }

    /// Append `next` so that it runs after this callback.
    #[must_use]
    pub fn then(mut self, next: Self) -> Self {
        self.chain.extend(next.chain);
        self
    }

    /// Combine two optional callbacks so that both fire, `first` before `second`.
    pub fn chain(first: Option<Self>, second: Option<Self>) -> Option<Self> {
        match (first, second) {
            (Some(a), Some(b)) => Some(a.then(b)),
            (a, None) => a,
            (None, b) => b,
        }
    }

    /// Number of handlers in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether the chain holds no handlers.
    ///
    /// Every constructor adds a handler, so this is `false` for any callback
    /// built through the public API.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl core::fmt::Debug for Callback {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callback")
            .field("handlers", &self.chain.len())
            .finish()
    }
}

impl<F: Fn(&Event) + 'static> From<F> for Callback {
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

/// A shareable setter for a value of type `T`, such as a selection.
pub struct Setter<T> {
    set: Rc<dyn Fn(T)>,
}

impl<T> Setter<T> {
    /// Wrap a setter function.
    pub fn new(set: impl Fn(T) + 'static) -> Self {
        Self { set: Rc::new(set) }
    }

    /// Write `value`.
    pub fn set(&self, value: T) {
        (self.set)(value);
    }
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        Self {
            set: self.set.clone(),
        }
    }
}

impl<T> core::fmt::Debug for Setter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Setter").finish_non_exhaustive()
    }
}

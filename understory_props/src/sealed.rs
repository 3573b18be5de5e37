// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sealed initial state.
//!
//! A state hook takes its initial configuration exactly once. The configuration
//! is either a value or a producer that runs on first use. After that the
//! configuration is sealed: later calls cannot swap it out between renders.
//!
//! ```rust
//! use understory_props::{SealedInitialState, SealedState};
//!
//! let slot: SealedState<u32> = SealedState::new();
//! assert_eq!(*slot.seal(SealedInitialState::lazy(|| 3_u32)), 3);
//!
//! // A later render passes something else; the sealed value stays.
//! assert_eq!(*slot.seal(5_u32), 3);
//! ```

use alloc::boxed::Box;
use core::cell::OnceCell;

/// An initial configuration: a value, or a producer run on first use.
pub enum SealedInitialState<S> {
    /// A ready value.
    Value(S),
    /// A producer, run at most once.
    Lazy(Box<dyn FnOnce() -> S>),
}

impl<S> SealedInitialState<S> {
    /// Wrap a producer.
    pub fn lazy(producer: impl FnOnce() -> S + 'static) -> Self {
        Self::Lazy(Box::new(producer))
    }

    /// Consume into the configuration value, running the producer if needed.
    pub fn resolve(self) -> S {
        match self {
            Self::Value(value) => value,
            Self::Lazy(producer) => producer(),
        }
    }
}

impl<S: Default> Default for SealedInitialState<S> {
    fn default() -> Self {
        Self::Value(S::default())
    }
}

impl<S> From<S> for SealedInitialState<S> {
    fn from(value: S) -> Self {
        Self::Value(value)
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for SealedInitialState<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// Per-instance slot holding a sealed configuration.
#[derive(Debug)]
pub struct SealedState<S> {
    sealed: OnceCell<S>,
}

impl<S> Default for SealedState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> SealedState<S> {
    /// An unsealed slot.
    pub const fn new() -> Self {
        Self {
            sealed: OnceCell::new(),
        }
    }

    /// The sealed configuration, if any.
    pub fn get(&self) -> Option<&S> {
        self.sealed.get()
    }

    /// Whether the slot has been sealed.
    pub fn is_sealed(&self) -> bool {
        self.sealed.get().is_some()
    }
}

impl<S: PartialEq> SealedState<S> {
    /// Seal `initial` on first call and return the sealed configuration.
    ///
    /// Later calls keep the first configuration. A later value that differs from
    /// it is reported with a warning; a later producer is dropped without running.
    pub fn seal(&self, initial: impl Into<SealedInitialState<S>>) -> &S {
        if let Some(sealed) = self.sealed.get() {
            match initial.into() {
                SealedInitialState::Value(value) if value != *sealed => {
                    tracing::warn!("initial state already sealed; ignoring a different value");
                }
                SealedInitialState::Value(_) => {}
                SealedInitialState::Lazy(_) => {
                    tracing::trace!("initial state already sealed; producer not run");
                }
            }
            return sealed;
        }
        self.sealed.get_or_init(|| initial.into().resolve())
    }
}

/// A state hook slot: the sealed configuration plus the bundle built from it.
///
/// Hosts that re-run a component function on every render keep one `StateHook`
/// per component instance and call [`StateHook::call`] each time; the bundle is
/// built once and cloned out afterwards.
///
/// ```rust
/// use understory_props::StateHook;
///
/// let hook: StateHook<u8, String> = StateHook::new();
/// let first = hook.call(2_u8, |n| "x".repeat(n.into()));
/// let again = hook.call(4_u8, |n| "y".repeat(n.into()));
/// assert_eq!(first, "xx");
/// assert_eq!(again, "xx");
/// ```
#[derive(Debug)]
pub struct StateHook<C, H> {
    config: SealedState<C>,
    bundle: OnceCell<H>,
}

impl<C, H> Default for StateHook<C, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, H> StateHook<C, H> {
    /// An unsealed slot.
    pub const fn new() -> Self {
        Self {
            config: SealedState::new(),
            bundle: OnceCell::new(),
        }
    }
}

impl<C: PartialEq + Clone, H: Clone> StateHook<C, H> {
    /// Seal `initial`, build the bundle on first call, and return a handle to it.
    pub fn call(
        &self,
        initial: impl Into<SealedInitialState<C>>,
        build: impl FnOnce(C) -> H,
    ) -> H {
        let config = self.config.seal(initial);
        self.bundle.get_or_init(|| build(config.clone())).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn first_seal_wins() {
        let slot: SealedState<u8> = SealedState::new();
        assert!(!slot.is_sealed());
        assert_eq!(*slot.seal(1_u8), 1);
        assert_eq!(*slot.seal(2_u8), 1);
        assert_eq!(slot.get(), Some(&1));
    }

    #[test]
    fn later_producers_never_run() {
        let runs = Rc::new(Cell::new(0));
        let slot: SealedState<u8> = SealedState::new();
        for _ in 0..3 {
            let runs = runs.clone();
            slot.seal(SealedInitialState::lazy(move || {
                runs.set(runs.get() + 1);
                7_u8
            }));
        }
        assert_eq!(runs.get(), 1, "producer should run exactly once");
        assert_eq!(slot.get(), Some(&7));
    }

    #[test]
    fn state_hook_builds_once() {
        let builds = Cell::new(0);
        let hook: StateHook<u8, u8> = StateHook::new();
        for initial in [1_u8, 1, 9] {
            let bundle = hook.call(initial, |c| {
                builds.set(builds.get() + 1);
                c * 2
            });
            assert_eq!(bundle, 2);
        }
        assert_eq!(builds.get(), 1, "bundle should be built once");
    }

    #[test]
    fn default_initial_state_is_default_value() {
        let initial: SealedInitialState<u8> = SealedInitialState::default();
        assert_eq!(initial.resolve(), 0);
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit key schemas for state bundles.

use alloc::string::String;
use hashbrown::HashMap;

/// The field names a state bundle contributes.
///
/// Composers use the schema to tell recognized state names apart from raw
/// element attributes when both arrive through the same channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StateKeys(&'static [&'static str]);

impl StateKeys {
    /// Declare a schema.
    pub const fn new(keys: &'static [&'static str]) -> Self {
        Self(keys)
    }

    /// The declared names, in declaration order.
    pub const fn as_slice(&self) -> &'static [&'static str] {
        self.0
    }

    /// Whether `name` belongs to this schema.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|key| *key == name)
    }

    /// Whether every key of `base` appears in this schema, in the same order, as a prefix.
    ///
    /// Composed bundles list the keys of the bundle they build on first.
    pub fn extends(&self, base: Self) -> bool {
        self.0.starts_with(base.0)
    }

    /// Split `attrs` into names recognized by this schema and pass-through attributes.
    pub fn split(
        &self,
        attrs: HashMap<String, String>,
    ) -> (HashMap<String, String>, HashMap<String, String>) {
        attrs.into_iter().partition(|(name, _)| self.contains(name))
    }
}

/// A state+actions bundle produced by a state hook.
pub trait StateBundle {
    /// Every field name this bundle contributes.
    const KEYS: StateKeys;
}

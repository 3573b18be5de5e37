// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rover --heading-base-level=0

//! Understory Rover: roving tabindex navigation state.
//!
//! A roving group makes exactly one of its members reachable with Tab. Arrow keys
//! move that single tab stop between members instead of relying on sequential tab
//! order. This crate models the group as:
//!
//! - A [`Registry`] of [`Stop`]s kept in a caller-declared order, the id that
//!   owns the tab stop, and the loop/orientation settings.
//! - Linear moves ([`Direction::Next`], [`Direction::Previous`],
//!   [`Direction::First`], [`Direction::Last`]) that skip disabled stops and
//!   are no-ops when nothing is eligible.
//! - A shared state handle, [`RoverStateReturn`], produced by the
//!   [`use_rover_state`] state hook from a sealed [`RoverInitialState`].
//! - The [`use_rover`] props hook, which gives each member its `tab_index` and
//!   the focus/key callbacks that drive the registry.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_rover::{Direction, Registry, Stop};
//!
//! let mut group = Registry::new(true);
//! group.register(Stop::new("one"));
//! group.register(Stop::new("two").with_disabled(true));
//! group.register(Stop::new("three"));
//!
//! // The first enabled stop owns the tab stop…
//! assert_eq!(group.current_id(), Some("one"));
//! // …next skips the disabled stop…
//! assert_eq!(group.move_to(Direction::Next), Some("three"));
//! // …and wraps back to the start.
//! assert_eq!(group.move_to(Direction::Next), Some("one"));
//! ```
//!
//! ## Driving members through props
//!
//! ```rust
//! use understory_props::{ElementProps, Key, TargetKind, dispatch};
//! use understory_rover::{RoverInitialState, RoverOptions, Stop, use_rover, use_rover_state};
//!
//! let rover = use_rover_state(RoverInitialState::default());
//! let _a = rover.mount(Stop::new("a"));
//! let _b = rover.mount(Stop::new("b"));
//!
//! let a: ElementProps = use_rover(&RoverOptions::new(&rover, "a"), ElementProps::new());
//! assert_eq!(a.tab_index, Some(0));
//!
//! dispatch::key_down(&a, Key::ArrowDown, TargetKind::Element);
//! assert_eq!(rover.current_id(), Some("b"));
//! ```
//!
//! The ids are generic over `K`, so callers can use any small, copyable handle
//! (for example a box tree node id or an interned string).
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `serde`: derives `Serialize`/`Deserialize` for [`Stop`], [`Direction`],
//!   [`Orientation`], and [`RoverInitialState`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod navigation;
mod props;
mod registry;
mod state;

pub use navigation::{Direction, Orientation};
pub use props::{RoverOptions, use_rover};
pub use registry::{Registry, Rejected, Stop};
pub use state::{Registration, RoverInitialState, RoverStateReturn, use_rover_state};

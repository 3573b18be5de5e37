// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_radio --heading-base-level=0

//! Understory Radio: single-selection radio group behavior.
//!
//! A radio group is a roving tabindex group (see [`understory_rover`]) plus one
//! selected value. This crate provides:
//!
//! - [`use_radio_state`]: the group state hook. It builds Rover state from the
//!   same configuration and adds the selection, returning a [`RadioStateReturn`].
//! - [`use_radio`]: the member props hook. It reports `checked` and
//!   `aria-checked`, selects on click or change, and composes
//!   [`use_rover`](understory_rover::use_rover) so
//!   arrows move the tab stop while Space selects.
//! - [`use_radio_group`]: the container props hook (`role="radiogroup"`).
//!
//! Moving the tab stop never changes the selection, and selecting never moves
//! the tab stop by itself: the two are independent.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_props::{ElementProps, Key, TargetKind, dispatch};
//! use understory_radio::{RadioInitialState, RadioOptions, use_radio, use_radio_state};
//!
//! let ids = ["a", "b", "c"];
//! let radio = use_radio_state(RadioInitialState::default().with_focusable_ids(ids));
//! let render = || -> Vec<ElementProps<&str>> {
//!     ids.iter()
//!         .map(|id| use_radio(&RadioOptions::new(&radio, *id, *id), ElementProps::new()))
//!         .collect()
//! };
//!
//! // Nothing is selected; the first member owns the tab stop.
//! let members = render();
//! assert!(members.iter().all(|m| !m.is_checked()));
//! assert_eq!(members[0].tab_index, Some(0));
//!
//! // Arrow to `b`, then select it with Space.
//! dispatch::key_down(&members[0], Key::ArrowDown, TargetKind::Element);
//! let members = render();
//! dispatch::key_down(&members[1], Key::Space, TargetKind::Element);
//! assert_eq!(radio.state(), Some("b"));
//! assert!(render()[1].is_checked());
//! ```
//!
//! ## Keeping state across renders
//!
//! Hosts that re-run a component on every render keep one
//! [`StateHook`](understory_props::StateHook) per group. The first
//! configuration is sealed and the bundle is built once:
//!
//! ```rust
//! use understory_props::StateHook;
//! use understory_radio::{RadioInitialState, RadioStateReturn, use_radio_state};
//!
//! let hook: StateHook<RadioInitialState<u32, &str>, RadioStateReturn<u32, &str>> =
//!     StateHook::new();
//! let render = |initial: &'static str| {
//!     hook.call(RadioInitialState::default().with_state(initial), use_radio_state)
//! };
//!
//! assert_eq!(render("superman").state(), Some("superman"));
//! // A later render with a different initial value keeps the sealed one.
//! assert_eq!(render("batman").state(), Some("superman"));
//! ```
//!
//! ## Controlled members
//!
//! A member can ignore the group's selection: give it an explicit checked state
//! with [`RadioOptions::with_checked`] and handle `on_change` yourself.
//! [`RadioOptions::detached`] builds options that only share navigation.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `serde`: derives `Serialize`/`Deserialize` for [`RadioInitialState`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod group;
mod radio;
mod state;

pub use group::use_radio_group;
pub use radio::{RadioOptions, use_radio};
pub use state::{RadioInitialState, RadioStateReturn, use_radio_state};

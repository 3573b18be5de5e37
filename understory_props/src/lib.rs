// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_props --heading-base-level=0

//! Understory Props: the props-hook protocol shared by Understory widget behaviors.
//!
//! Widget behaviors in Understory are split into two kinds of pure functions:
//!
//! - **State hooks** take a sealed initial configuration and return a clonable
//!   state+actions bundle. The bundle lives for the widget's whole mounted
//!   lifetime. See [`SealedInitialState`], [`SealedState`], and [`StateHook`].
//! - **Props hooks** take options (usually including a state bundle) plus the
//!   incoming [`ElementProps`] and return merged [`ElementProps`] for one render
//!   pass.
//!
//! This crate does not render anything. The host reflects the returned
//! properties (`role`, `tab_index`, `aria-*`, `checked`, …) onto its focusable
//! elements and delivers input back through the [`Callback`]s on those
//! properties, typically via the helpers in [`dispatch`].
//!
//! ## Merge order
//!
//! A props hook builds its own layer and lays the incoming properties over it
//! with [`ElementProps::merge`]:
//!
//! - Scalar fields and attributes: the later layer wins when it sets a value.
//! - Callbacks: both fire, earlier layer first ([`Callback::chain`]).
//!
//! ```rust
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use understory_props::{Callback, ElementProps, Event, Role, TargetKind};
//!
//! let hits = Rc::new(Cell::new(0));
//! let (a, b) = (hits.clone(), hits.clone());
//!
//! let own = ElementProps::<()>::new()
//!     .with_role(Role::Radio)
//!     .with_tab_index(-1)
//!     .with_on_click(move |_| a.set(a.get() + 1));
//! let incoming = ElementProps::new()
//!     .with_tab_index(0)
//!     .with_on_click(move |_| b.set(b.get() + 10));
//!
//! let merged = own.merge(incoming);
//! assert_eq!(merged.role, Some(Role::Radio));
//! assert_eq!(merged.tab_index, Some(0));
//!
//! merged.on_click.as_ref().unwrap().call(&Event::click(TargetKind::Element));
//! assert_eq!(hits.get(), 11);
//! ```
//!
//! ## State key schemas
//!
//! Every state bundle declares the names of the fields it contributes through
//! [`StateBundle::KEYS`]. Props hooks use the schema to strip recognized state
//! names from pass-through attributes.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `tracing`.
//! - `serde`: derives `Serialize`/`Deserialize` for [`Key`], [`TargetKind`], and [`Role`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod callback;
pub mod dispatch;
mod event;
mod props;
mod schema;
mod sealed;

pub use callback::{Callback, Setter};
pub use event::{ClickKeys, Event, EventKind, Key, TargetKind};
pub use props::{ElementProps, InputType, Role};
pub use schema::{StateBundle, StateKeys};
pub use sealed::{SealedInitialState, SealedState, StateHook};

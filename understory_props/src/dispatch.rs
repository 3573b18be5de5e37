// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side delivery of input to an element's callbacks.
//!
//! Props hooks only attach callbacks. A host still has to deliver input to them
//! and apply its own default actions. These helpers model the defaults of a DOM
//! host so that behaviors can be driven (and tested) without one:
//!
//! - A click on a [`TargetKind::CheckableInput`] that is not yet checked is
//!   followed by a change, unless a click handler prevented the default.
//! - Space on a checkable input becomes a click, unless prevented.
//! - A key handler may call [`Event::request_click`] to activate a non-native
//!   element; the click is delivered after the key handlers return.
//!
//! Each helper returns the delivered event so callers can inspect default
//! prevention afterwards.
//!
//! ## Minimal example
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use understory_props::dispatch;
//! use understory_props::{ElementProps, TargetKind};
//!
//! let changes = Rc::new(Cell::new(0));
//! let seen = changes.clone();
//! let props: ElementProps = ElementProps::new()
//!     .with_checked(false)
//!     .with_on_change(move |_| seen.set(seen.get() + 1));
//!
//! // A native input fires change after click.
//! dispatch::click(&props, TargetKind::CheckableInput);
//! assert_eq!(changes.get(), 1);
//!
//! // A generic element does not.
//! dispatch::click(&props, TargetKind::Element);
//! assert_eq!(changes.get(), 1);
//! ```
//!
//! Hosts that honour native `disabled` suppress delivery to disabled inputs
//! before calling into these helpers.

use crate::callback::Callback;
use crate::event::{Event, Key, TargetKind};
use crate::props::ElementProps;

fn deliver(callback: Option<&Callback>, event: &Event) {
    if let Some(callback) = callback {
        callback.call(event);
    }
}

/// Deliver a click, then the host's change default for unchecked native inputs.
pub fn click<V>(props: &ElementProps<V>, target: TargetKind) -> Event {
    let event = Event::click(target);
    deliver(props.on_click.as_ref(), &event);
    if target == TargetKind::CheckableInput && !event.is_default_prevented() && !props.is_checked()
    {
        change(props, target);
    }
    event
}

/// Deliver a change.
pub fn change<V>(props: &ElementProps<V>, target: TargetKind) -> Event {
    let event = Event::change(target);
    deliver(props.on_change.as_ref(), &event);
    event
}

/// Deliver a key press, then any click it requested or implied.
pub fn key_down<V>(props: &ElementProps<V>, key: Key, target: TargetKind) -> Event {
    let event = Event::key_down(key, target);
    deliver(props.on_key_down.as_ref(), &event);
    let native_activation = target == TargetKind::CheckableInput
        && key == Key::Space
        && !event.is_default_prevented();
    if event.is_click_requested() || native_activation {
        tracing::trace!(?key, "key press activates element");
        click(props, target);
    }
    event
}

/// Deliver focus.
pub fn focus<V>(props: &ElementProps<V>, target: TargetKind) -> Event {
    let event = Event::focus(target);
    deliver(props.on_focus.as_ref(), &event);
    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn counting(props: ElementProps, clicks: &Rc<Cell<u32>>, changes: &Rc<Cell<u32>>) -> ElementProps {
        let (c, h) = (clicks.clone(), changes.clone());
        props
            .with_on_click(move |_| c.set(c.get() + 1))
            .with_on_change(move |_| h.set(h.get() + 1))
    }

    #[test]
    fn checked_native_input_does_not_change_again() {
        let (clicks, changes) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
        let props = counting(ElementProps::new().with_checked(true), &clicks, &changes);

        click(&props, TargetKind::CheckableInput);
        assert_eq!((clicks.get(), changes.get()), (1, 0));
    }

    #[test]
    fn prevented_click_skips_native_change() {
        let changes = Rc::new(Cell::new(0));
        let h = changes.clone();
        let props: ElementProps = ElementProps::new()
            .with_on_click(|e| e.prevent_default())
            .with_on_change(move |_| h.set(h.get() + 1));

        let event = click(&props, TargetKind::CheckableInput);
        assert!(event.is_default_prevented());
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn space_on_native_input_clicks_and_changes() {
        let (clicks, changes) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
        let props = counting(ElementProps::new(), &clicks, &changes);

        key_down(&props, Key::Space, TargetKind::CheckableInput);
        assert_eq!((clicks.get(), changes.get()), (1, 1));

        key_down(&props, Key::Enter, TargetKind::CheckableInput);
        assert_eq!((clicks.get(), changes.get()), (1, 1), "enter has no native default");
    }

    #[test]
    fn requested_click_reaches_generic_elements() {
        let (clicks, changes) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
        let props = counting(ElementProps::new(), &clicks, &changes)
            .merge(ElementProps::new().with_on_key_down(|e| e.request_click()));

        key_down(&props, Key::Enter, TargetKind::Element);
        assert_eq!((clicks.get(), changes.get()), (1, 0));

        key_down(&props, Key::Space, TargetKind::Element);
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn focus_reaches_the_callback() {
        let focused = Rc::new(Cell::new(false));
        let f = focused.clone();
        let props: ElementProps = ElementProps::new().with_on_focus(move |_| f.set(true));
        focus(&props, TargetKind::Element);
        assert!(focused.get());
    }
}

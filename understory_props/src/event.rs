// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events delivered to element callbacks.

use core::cell::Cell;

/// Keys recognized by Understory widget behaviors.
///
/// Hosts translate their native key codes into this set; anything else maps to
/// [`Key::Other`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// Any key without a dedicated meaning.
    Other,
}

/// The kind of element an event originated from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetKind {
    /// A native checkable input (radio or checkbox).
    ///
    /// Hosts fire a change after a click on these elements, and turn Space into a click.
    CheckableInput,
    /// Any other element, such as a generic container styled as a control.
    Element,
}

/// What happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer activation, or a click synthesized from a key.
    Click,
    /// The checked state of a native input changed.
    Change,
    /// A key was pressed while the element had focus.
    KeyDown(Key),
    /// The element received focus.
    Focus,
}

/// An input event as seen by element callbacks.
///
/// Callbacks receive `&Event`. Default prevention and click requests use interior
/// mutability so that every callback in a chain can observe and update them.
#[derive(Debug)]
pub struct Event {
    kind: EventKind,
    target: TargetKind,
    default_prevented: Cell<bool>,
    click_requested: Cell<bool>,
}

impl Event {
    /// Create an event of the given kind.
    pub fn new(kind: EventKind, target: TargetKind) -> Self {
        Self {
            kind,
            target,
            default_prevented: Cell::new(false),
            click_requested: Cell::new(false),
        }
    }

    /// A click on `target`.
    pub fn click(target: TargetKind) -> Self {
        Self::new(EventKind::Click, target)
    }

    /// A change on `target`.
    pub fn change(target: TargetKind) -> Self {
        Self::new(EventKind::Change, target)
    }

    /// A key press on `target`.
    pub fn key_down(key: Key, target: TargetKind) -> Self {
        Self::new(EventKind::KeyDown(key), target)
    }

    /// Focus arriving at `target`.
    pub fn focus(target: TargetKind) -> Self {
        Self::new(EventKind::Focus, target)
    }

    /// The event kind.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The kind of element the event originated from.
    pub fn target(&self) -> TargetKind {
        self.target
    }

    /// The pressed key, for key events.
    pub fn key(&self) -> Option<Key> {
        match self.kind {
            EventKind::KeyDown(key) => Some(key),
            _ => None,
        }
    }

    /// Suppress the host's default action for this event.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    /// Whether a callback suppressed the default action.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Ask the host to deliver a click to the element once the current callbacks return.
    ///
    /// Key handlers use this to activate non-native elements, mirroring
    /// `element.click()` in a DOM host.
    pub fn request_click(&self) {
        self.click_requested.set(true);
    }

    /// Whether a callback requested a synthesized click.
    pub fn is_click_requested(&self) -> bool {
        self.click_requested.get()
    }
}

bitflags::bitflags! {
    /// Keys that activate (click) a non-native element.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ClickKeys: u8 {
        /// Enter activates.
        const ENTER = 0b0000_0001;
        /// Space activates.
        const SPACE = 0b0000_0010;
    }
}

impl ClickKeys {
    /// Whether `key` is one of the activation keys in this set.
    pub fn accepts(self, key: Key) -> bool {
        match key {
            Key::Enter => self.contains(Self::ENTER),
            Key::Space => self.contains(Self::SPACE),
            _ => false,
        }
    }
}

impl Default for ClickKeys {
    fn default() -> Self {
        Self::ENTER | Self::SPACE
    }
}

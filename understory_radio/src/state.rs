// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The radio state hook: a selection composed on top of Rover state.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::ops::Deref;

use understory_props::{SealedInitialState, Setter, StateBundle, StateKeys};
use understory_rover::{Orientation, RoverInitialState, RoverStateReturn, use_rover_state};

/// Initial configuration for [`use_radio_state`].
///
/// `state` and `wrap` belong to the radio group; the remaining fields are
/// handed to Rover unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadioInitialState<K, T> {
    /// The value selected before any interaction.
    pub state: Option<T>,
    /// Whether next/previous loop around the ends. Radio groups loop by default.
    pub wrap: bool,
    /// Which arrow keys move the tab stop.
    pub orientation: Orientation,
    /// The member that should own the tab stop once it registers.
    pub focused_id: Option<K>,
    /// Members registered up front, enabled, in this order.
    pub focusable_ids: Vec<K>,
}

impl<K, T> Default for RadioInitialState<K, T> {
    fn default() -> Self {
        Self {
            state: None,
            wrap: true,
            orientation: Orientation::Both,
            focused_id: None,
            focusable_ids: Vec::new(),
        }
    }
}

impl<K, T> RadioInitialState<K, T> {
    /// Pre-select `value`.
    #[must_use]
    pub fn with_state(mut self, value: T) -> Self {
        self.state = Some(value);
        self
    }

    /// Set looping.
    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the initially focused member.
    #[must_use]
    pub fn with_focused_id(mut self, id: K) -> Self {
        self.focused_id = Some(id);
        self
    }

    /// Set the members registered up front.
    #[must_use]
    pub fn with_focusable_ids(mut self, ids: impl IntoIterator<Item = K>) -> Self {
        self.focusable_ids = ids.into_iter().collect();
        self
    }

    fn into_parts(self) -> (Option<T>, RoverInitialState<K>) {
        let rover = RoverInitialState {
            orientation: self.orientation,
            focused_id: self.focused_id,
            focusable_ids: self.focusable_ids,
            wrap: self.wrap,
        };
        (self.state, rover)
    }
}

/// Build a radio state bundle from a sealed initial configuration.
///
/// ```rust
/// use understory_radio::{RadioInitialState, use_radio_state};
///
/// let radio = use_radio_state(RadioInitialState::<u32, _>::default().with_state("superman"));
/// assert_eq!(radio.state(), Some("superman"));
/// assert!(radio.wraps(), "radio groups loop by default");
/// ```
pub fn use_radio_state<K, T>(
    initial: impl Into<SealedInitialState<RadioInitialState<K, T>>>,
) -> RadioStateReturn<K, T>
where
    K: Copy + Eq,
{
    let (selected, rover) = initial.into().resolve().into_parts();
    RadioStateReturn {
        rover: use_rover_state(rover),
        selected: Rc::new(RefCell::new(selected)),
    }
}

/// Shared radio state: Rover state and actions plus the selected value.
///
/// Rover's fields and actions are reachable through `Deref`, so a radio bundle
/// can be used wherever Rover state is expected. Selection and the tab stop are
/// independent: a group can have a tab stop with nothing selected.
pub struct RadioStateReturn<K, T> {
    rover: RoverStateReturn<K>,
    selected: Rc<RefCell<Option<T>>>,
}

impl<K, T> Clone for RadioStateReturn<K, T> {
    fn clone(&self) -> Self {
        Self {
            rover: self.rover.clone(),
            selected: self.selected.clone(),
        }
    }
}

impl<K: core::fmt::Debug, T: core::fmt::Debug> core::fmt::Debug for RadioStateReturn<K, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RadioStateReturn")
            .field("rover", &self.rover)
            .field("state", &self.selected.borrow())
            .finish()
    }
}

impl<K, T> Deref for RadioStateReturn<K, T> {
    type Target = RoverStateReturn<K>;

    fn deref(&self) -> &Self::Target {
        &self.rover
    }
}

impl<K, T> StateBundle for RadioStateReturn<K, T> {
    // Starts with `RoverStateReturn::KEYS`, in the same order.
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
        "state",
        "set_state",
    ]);
}

impl<K, T: Clone> RadioStateReturn<K, T> {
    /// The Rover half of the bundle.
    pub fn rover(&self) -> &RoverStateReturn<K> {
        &self.rover
    }

    /// The selected value.
    pub fn state(&self) -> Option<T> {
        self.selected.borrow().clone()
    }

    /// Replace the selection.
    pub fn set_state(&self, value: Option<T>) {
        *self.selected.borrow_mut() = value;
        tracing::trace!("selection updated");
    }

    /// Replace the selection with a value computed from the current one.
    pub fn update(&self, f: impl FnOnce(Option<&T>) -> Option<T>) {
        let next = f(self.selected.borrow().as_ref());
        self.set_state(next);
    }

    /// Whether `value` is the selected value.
    pub fn is_selected(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.selected.borrow().as_ref() == Some(value)
    }
}

impl<K, T: Clone + 'static> RadioStateReturn<K, T> {
    /// A setter that selects the value it is given.
    pub fn setter(&self) -> Setter<T> {
        let selected = self.selected.clone();
        Setter::new(move |value| {
            *selected.borrow_mut() = Some(value);
            tracing::trace!("selection updated");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_props::StateHook;
    use understory_rover::Stop;

    #[test]
    fn radio_keys_extend_rover_keys() {
        let radio = <RadioStateReturn<u8, u8> as StateBundle>::KEYS;
        let rover = <RoverStateReturn<u8> as StateBundle>::KEYS;
        assert!(radio.extends(rover), "rover keys must come first");
        assert_eq!(radio.as_slice().len(), rover.as_slice().len() + 2);
        assert!(radio.contains("state"));
        assert!(radio.contains("set_state"));
    }

    #[test]
    fn defaults_loop_with_nothing_selected() {
        let radio: RadioStateReturn<&str, &str> = use_radio_state(RadioInitialState::default());
        assert!(radio.wraps());
        assert_eq!(radio.state(), None);
        assert_eq!(radio.current_id(), None);
    }

    #[test]
    fn rover_fields_pass_through() {
        let radio = use_radio_state(
            RadioInitialState::default()
                .with_state(2_u32)
                .with_wrap(false)
                .with_orientation(Orientation::Vertical)
                .with_focusable_ids(["x", "y"])
                .with_focused_id("y"),
        );
        assert_eq!(radio.state(), Some(2));
        assert!(!radio.wraps());
        assert_eq!(radio.orientation(), Orientation::Vertical);
        assert_eq!(radio.current_id(), Some("y"));
        assert_eq!(radio.next(), None, "no loop, y is last");
    }

    #[test]
    fn selection_is_independent_of_the_tab_stop() {
        let radio = use_radio_state(RadioInitialState::default().with_focusable_ids(["a", "b"]));
        radio.set_state(Some("b"));
        assert_eq!(radio.current_id(), Some("a"));
        assert!(radio.is_selected(&"b"));
        radio.register(Stop::new("c"));
        assert_eq!(radio.state(), Some("b"));
    }

    #[test]
    fn state_hook_keeps_the_first_configuration() {
        let hook: StateHook<RadioInitialState<u8, &str>, RadioStateReturn<u8, &str>> =
            StateHook::new();
        let first = hook.call(
            RadioInitialState::default().with_state("superman"),
            use_radio_state,
        );
        let again = hook.call(
            RadioInitialState::default()
                .with_state("batman")
                .with_wrap(false),
            use_radio_state,
        );
        assert_eq!(again.state(), Some("superman"), "later configurations are ignored");
        assert!(again.wraps());

        again.set_state(Some("batman"));
        assert_eq!(first.state(), Some("batman"), "both calls share one bundle");
    }

    #[test]
    fn setter_and_update_share_the_selection() {
        let radio: RadioStateReturn<u8, &str> = use_radio_state(RadioInitialState::default());
        let clone = radio.clone();
        radio.setter().set("batman");
        assert_eq!(clone.state(), Some("batman"));
        clone.update(|prev| prev.map(|_| "robin"));
        assert_eq!(radio.state(), Some("robin"));
        radio.set_state(None);
        assert!(!radio.is_selected(&"robin"));
    }
}

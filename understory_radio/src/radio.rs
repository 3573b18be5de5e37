// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The radio member props hook.

use understory_props::{
    Callback, ClickKeys, ElementProps, Event, InputType, Role, Setter, TargetKind,
};
use understory_rover::{RoverOptions, RoverStateReturn, use_rover};

use crate::state::RadioStateReturn;

/// Options for [`use_radio`].
#[derive(Clone, Debug)]
pub struct RadioOptions<K, T> {
    /// The member's stop id.
    pub id: K,
    /// The value this member selects.
    pub value: T,
    /// Explicit checked state. When set, the group's selection is not consulted.
    pub checked: Option<bool>,
    /// Disabled members are skipped by navigation and never write the selection.
    pub disabled: bool,
    /// The group's selected value.
    pub state: Option<T>,
    /// Writes the group's selection.
    pub set_state: Option<Setter<T>>,
    /// The group's shared Rover state.
    pub rover: RoverStateReturn<K>,
}

impl<K: Copy + Eq, T: Clone + 'static> RadioOptions<K, T> {
    /// Options for a member of the group behind `radio`, wired to its selection.
    pub fn new(radio: &RadioStateReturn<K, T>, id: K, value: T) -> Self {
        Self {
            id,
            value,
            checked: None,
            disabled: false,
            state: radio.state(),
            set_state: Some(radio.setter()),
            rover: radio.rover().clone(),
        }
    }
}

impl<K, T> RadioOptions<K, T> {
    /// Options for a member that only shares the group's navigation.
    ///
    /// Selection is left to the caller, typically through
    /// [`RadioOptions::with_checked`] and an incoming `on_change`.
    pub fn detached(rover: &RoverStateReturn<K>, id: K, value: T) -> Self {
        Self {
            id,
            value,
            checked: None,
            disabled: false,
            state: None,
            set_state: None,
            rover: rover.clone(),
        }
    }

    /// Force the checked state.
    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Merge radio behavior into `props`.
///
/// - `checked` / `aria-checked`: the explicit `checked` option if given, else
///   whether the group's selection equals `value`.
/// - `on_change`: the incoming `on_change` runs first, always; then, unless the
///   member is disabled, the selection is set to `value`.
/// - `on_click`: ignored for native checkable inputs (their change event
///   follows); otherwise runs the same path as `on_change`. The incoming
///   `on_click` is chained after it.
/// - `role="radio"`, `type="radio"`, and `value`.
///
/// The incoming props are laid over this layer, and the result goes through
/// [`use_rover`] with Space as the only activation key: arrows move the tab stop
/// and never select.
pub fn use_radio<K, T>(options: &RadioOptions<K, T>, props: ElementProps<T>) -> ElementProps<T>
where
    K: Copy + Eq + 'static,
    T: Clone + PartialEq + 'static,
{
    let mut props = props;
    let html_on_change = props.on_change.take();
    let html_on_click = props.on_click.take();

    let checked = options
        .checked
        .unwrap_or_else(|| options.state.as_ref() == Some(&options.value));

    let disabled = options.disabled;
    let set_state = options.set_state.clone();
    let value = options.value.clone();
    let on_change = Callback::new(move |event: &Event| {
        if let Some(external) = &html_on_change {
            external.call(event);
        }
        if disabled {
            return;
        }
        if let Some(set_state) = &set_state {
            set_state.set(value.clone());
        }
    });

    let change = on_change.clone();
    let on_click = Callback::new(move |event: &Event| {
        if event.target() == TargetKind::CheckableInput {
            return;
        }
        change.call(event);
    });

    let mut own = ElementProps::new()
        .with_role(Role::Radio)
        .with_checked(checked)
        .with_value(options.value.clone());
    own.input_type = Some(InputType::Radio);
    own.on_change = Some(on_change);
    own.on_click = Callback::chain(Some(on_click), html_on_click);

    let rover = RoverOptions::new(&options.rover, options.id)
        .with_disabled(options.disabled)
        .with_click_keys(ClickKeys::SPACE);
    use_rover(&rover, own.merge(props))
}

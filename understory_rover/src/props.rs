// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Rover member props hook.

use understory_props::{Callback, ClickKeys, ElementProps, Event, TargetKind};

use crate::state::RoverStateReturn;

/// Options for [`use_rover`].
#[derive(Clone, Debug)]
pub struct RoverOptions<K> {
    /// The member's stop id.
    pub id: K,
    /// Disabled members are skipped by navigation and ignore focus and keys.
    pub disabled: bool,
    /// Keys that activate a non-native member.
    pub click_keys: ClickKeys,
    /// The group's shared Rover state.
    pub state: RoverStateReturn<K>,
}

impl<K> RoverOptions<K> {
    /// Options for member `id` of the group behind `state`.
    pub fn new(state: &RoverStateReturn<K>, id: K) -> Self {
        Self {
            id,
            disabled: false,
            click_keys: ClickKeys::default(),
            state: state.clone(),
        }
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Replace the activation keys.
    #[must_use]
    pub fn with_click_keys(mut self, click_keys: ClickKeys) -> Self {
        self.click_keys = click_keys;
        self
    }
}

/// Merge roving tab stop behavior into `props`.
///
/// Own layer, with `props` laid over it ([`ElementProps::merge`]):
///
/// - `tab_index`: `0` if this member owns the tab stop, `-1` otherwise.
/// - `disabled` / `aria-disabled` for disabled members. The option is written
///   through to the member's registered [`Stop`](crate::Stop), so moves skip it
///   and it hands the tab stop on if it held it.
/// - `on_focus`: the focused member takes the tab stop.
/// - `on_key_down`: arrows (per the group's orientation) and `Home`/`End` move
///   the tab stop and prevent the default; a click key on a non-native element
///   requests a click.
///
/// The host keeps the member registered while it is mounted (see
/// [`RoverStateReturn::mount`]) and moves DOM focus to whichever member reports
/// `tab_index == 0` after a keyboard move.
pub fn use_rover<K, V>(options: &RoverOptions<K>, props: ElementProps<V>) -> ElementProps<V>
where
    K: Copy + Eq + 'static,
{
    let (state, id) = (&options.state, options.id);
    let stale = state.with_registry(|r| {
        r.get(id)
            .is_some_and(|stop| stop.disabled != options.disabled)
    });
    if stale && state.set_disabled(id, options.disabled).is_ok() {
        tracing::trace!(disabled = options.disabled, "disabled flag written to the registry");
    }
    let tab_index = if !options.disabled && state.is_current(id) {
        0
    } else {
        -1
    };
    let mut own = ElementProps::new().with_tab_index(tab_index);

    if options.disabled {
        own.disabled = Some(true);
        own.aria_disabled = Some(true);
        return own.merge(props);
    }

    let (state, id) = (options.state.clone(), options.id);
    own.on_focus = Some(Callback::new(move |_| {
        if let Err(reason) = state.set_current_id(id) {
            tracing::debug!(%reason, "focus did not move the tab stop");
        }
    }));

    let (state, click_keys) = (options.state.clone(), options.click_keys);
    own.on_key_down = Some(Callback::new(move |event: &Event| {
        let Some(key) = event.key() else {
            return;
        };
        if let Some(direction) = state.orientation().direction_for(key) {
            event.prevent_default();
            state.move_to(direction);
        } else if click_keys.accepts(key) && event.target() != TargetKind::CheckableInput {
            event.prevent_default();
            event.request_click();
        }
    }));

    own.merge(props)
}

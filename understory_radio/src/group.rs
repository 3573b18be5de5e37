// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The radio group container props hook.

use understory_props::{ElementProps, Role, StateBundle};

use crate::state::RadioStateReturn;

/// Merge radio group container behavior into `props`.
///
/// Sets `role="radiogroup"` and, for single-axis groups, `aria-orientation`.
/// Labeling and other pass-through attributes (`aria-label`, `aria-labelledby`,
/// `class`, …) are forwarded; attributes named after radio state fields are
/// dropped so that a bundle spread into the container never leaks onto it.
pub fn use_radio_group<K, T, V>(
    radio: &RadioStateReturn<K, T>,
    props: ElementProps<V>,
) -> ElementProps<V>
where
    K: Copy + Eq,
{
    let mut props = props;
    let (state_names, attrs) = RadioStateReturn::<K, T>::KEYS.split(props.attrs);
    if !state_names.is_empty() {
        tracing::trace!(dropped = state_names.len(), "state names removed from group attributes");
    }
    props.attrs = attrs;

    let mut own = ElementProps::new().with_role(Role::RadioGroup);
    if let Some(token) = radio.orientation().aria_token() {
        own = own.with_attr("aria-orientation", token);
    }
    own.merge(props)
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Randomized interaction sequences against a rendered radio group.

use proptest::prelude::*;
use understory_props::{ElementProps, Key, TargetKind, dispatch};
use understory_radio::{RadioInitialState, RadioOptions, RadioStateReturn, use_radio, use_radio_state};

#[derive(Clone, Debug)]
enum Action {
    Click(usize, TargetKind),
    Key(usize, Key),
    Focus(usize),
    Disable(usize, bool),
}

fn target() -> impl Strategy<Value = TargetKind> {
    prop_oneof![Just(TargetKind::CheckableInput), Just(TargetKind::Element)]
}

fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::ArrowUp),
        Just(Key::ArrowDown),
        Just(Key::ArrowLeft),
        Just(Key::ArrowRight),
        Just(Key::Home),
        Just(Key::End),
        Just(Key::Space),
        Just(Key::Enter),
    ]
}

fn action(len: usize) -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..len, target()).prop_map(|(i, t)| Action::Click(i, t)),
        (0..len, key()).prop_map(|(i, k)| Action::Key(i, k)),
        (0..len).prop_map(Action::Focus),
        (0..len, any::<bool>()).prop_map(|(i, d)| Action::Disable(i, d)),
    ]
}

fn scenario() -> impl Strategy<Value = (usize, Vec<Action>)> {
    (1_usize..6).prop_flat_map(|len| (Just(len), prop::collection::vec(action(len), 0..40)))
}

struct Group {
    radio: RadioStateReturn<usize, usize>,
    disabled: Vec<bool>,
}

impl Group {
    fn new(len: usize, wrap: bool) -> Self {
        let radio = use_radio_state(
            RadioInitialState::default()
                .with_focusable_ids(0..len)
                .with_wrap(wrap),
        );
        Self {
            radio,
            disabled: vec![false; len],
        }
    }

    fn render(&self) -> Vec<ElementProps<usize>> {
        self.disabled
            .iter()
            .enumerate()
            .map(|(id, disabled)| {
                let options = RadioOptions::new(&self.radio, id, id).with_disabled(*disabled);
                use_radio(&options, ElementProps::new())
            })
            .collect()
    }

    fn apply(&mut self, action: &Action) {
        let members = self.render();
        match *action {
            Action::Click(i, target) => {
                dispatch::click(&members[i], target);
            }
            Action::Key(i, key) => {
                dispatch::key_down(&members[i], key, TargetKind::Element);
            }
            Action::Focus(i) => {
                dispatch::focus(&members[i], TargetKind::Element);
            }
            Action::Disable(i, disabled) => {
                // The flag reaches the group only through the member's options;
                // a host re-renders after the change.
                self.disabled[i] = disabled;
                self.render();
            }
        }
    }
}

proptest! {
    #[test]
    fn at_most_one_member_is_checked((len, actions) in scenario()) {
        let mut group = Group::new(len, true);
        for action in &actions {
            group.apply(action);
            let checked: Vec<usize> = group
                .render()
                .iter()
                .filter(|m| m.is_checked())
                .filter_map(|m| m.value)
                .collect();
            prop_assert!(checked.len() <= 1, "checked members: {checked:?}");
            prop_assert_eq!(checked.first().copied(), group.radio.state());
        }
    }

    #[test]
    fn exactly_one_tab_stop_while_any_member_is_enabled((len, actions) in scenario()) {
        let mut group = Group::new(len, true);
        for action in &actions {
            group.apply(action);
            let stops = group.render().iter().filter(|m| m.is_tab_stop()).count();
            let any_enabled = group.disabled.iter().any(|d| !d);
            prop_assert_eq!(stops, usize::from(any_enabled));
        }
    }

    #[test]
    fn clicking_an_enabled_member_selects_it(
        (len, actions) in scenario(),
        pick in any::<prop::sample::Index>(),
        target in target(),
    ) {
        let mut group = Group::new(len, true);
        for action in &actions {
            group.apply(action);
        }
        let i = pick.index(len);
        prop_assume!(!group.disabled[i]);
        let before = group.radio.state();

        dispatch::click(&group.render()[i], target);
        prop_assert_eq!(group.radio.state(), Some(i));
        prop_assert!(group.render()[i].is_checked());

        dispatch::click(&group.render()[i], target);
        prop_assert_eq!(group.radio.state(), Some(i), "reselecting is idempotent (was {:?})", before);
    }

    #[test]
    fn next_from_last_wraps_only_when_looping(len in 2_usize..6, wrap in any::<bool>()) {
        let group = Group::new(len, wrap);
        prop_assert_eq!(group.radio.last(), Some(len - 1));
        let moved = group.radio.next();
        if wrap {
            prop_assert_eq!(moved, Some(0));
            prop_assert_eq!(group.radio.current_id(), Some(0));
        } else {
            prop_assert_eq!(moved, None);
            prop_assert_eq!(group.radio.current_id(), Some(len - 1));
        }
        prop_assert_eq!(group.radio.state(), None, "navigation never selects");
    }
}

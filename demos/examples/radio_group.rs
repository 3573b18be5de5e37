// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A radio group driven through a scripted keyboard and pointer session.
//!
//! This example shows how to combine:
//! - `understory_radio` for the group state and the member/container props hooks,
//! - `understory_rover` for mount-scoped registration of each member,
//! - `understory_props::dispatch` standing in for a host's event delivery.
//!
//! Each step re-renders the group and logs what a host would reflect onto its
//! elements.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p understory_demos --example radio_group`
//! - `RUST_LOG=trace` also shows the library's own tracing.

use tracing_subscriber::EnvFilter;
use understory_props::{ElementProps, Key, TargetKind, dispatch};
use understory_radio::{
    RadioInitialState, RadioOptions, RadioStateReturn, use_radio, use_radio_group, use_radio_state,
};
use understory_rover::{Orientation, Stop};

type Hero = &'static str;

const HEROES: [Hero; 4] = ["superman", "batman", "flash", "aquaman"];

/// Render the container and every member, logging the result.
fn render(radio: &RadioStateReturn<Hero, Hero>, disabled: &[Hero]) -> Vec<ElementProps<Hero>> {
    let group: ElementProps<Hero> = use_radio_group(
        radio,
        ElementProps::new().with_attr("aria-label", "Favourite hero"),
    );
    tracing::info!(
        role = group.role.map(|r| r.as_str()),
        orientation = group.attr("aria-orientation"),
        selected = ?radio.state(),
        "group"
    );

    HEROES
        .iter()
        .map(|hero| {
            let options = RadioOptions::new(radio, *hero, *hero).with_disabled(disabled.contains(hero));
            let props = use_radio(&options, ElementProps::new());
            tracing::info!(
                hero,
                tab_index = props.tab_index,
                checked = props.is_checked(),
                disabled = props.disabled.unwrap_or(false),
                "  member"
            );
            props
        })
        .collect()
}

fn index(hero: Hero) -> usize {
    HEROES.iter().position(|h| *h == hero).unwrap_or(0)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let radio = use_radio_state(
        RadioInitialState::default()
            .with_state("batman")
            .with_orientation(Orientation::Vertical),
    );

    // Members register as they mount; keep the guards alive for the session.
    // `flash` is disabled through its render options alone.
    let mut mounted: Vec<_> = HEROES
        .iter()
        .map(|hero| radio.mount(Stop::new(*hero)))
        .collect();
    let disabled = ["flash"];

    tracing::info!("initial render");
    let members = render(&radio, &disabled);

    tracing::info!("ArrowDown from superman");
    dispatch::key_down(&members[0], Key::ArrowDown, TargetKind::Element);
    let members = render(&radio, &disabled);

    tracing::info!("ArrowDown skips the disabled flash");
    let current = radio.current_id().map_or(0, index);
    dispatch::key_down(&members[current], Key::ArrowDown, TargetKind::Element);
    let members = render(&radio, &disabled);

    tracing::info!("Space selects the focused member");
    let current = radio.current_id().map_or(0, index);
    dispatch::key_down(&members[current], Key::Space, TargetKind::CheckableInput);
    let members = render(&radio, &disabled);

    tracing::info!("ArrowLeft is ignored in a vertical group");
    let current = radio.current_id().map_or(0, index);
    dispatch::key_down(&members[current], Key::ArrowLeft, TargetKind::Element);
    let members = render(&radio, &disabled);

    tracing::info!("clicking superman");
    dispatch::click(&members[0], TargetKind::Element);
    render(&radio, &disabled);

    tracing::info!("aquaman unmounts");
    mounted.pop();
    tracing::info!(current = ?radio.current_id(), past = ?radio.past_id(), "tab stop");
    render(&radio, &disabled);
}

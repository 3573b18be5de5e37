// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation intents and the keys that produce them.

use understory_props::Key;

/// A linear move of the roving tab stop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// The next enabled stop in order (wraps if the registry loops).
    Next,
    /// The previous enabled stop in order (wraps if the registry loops).
    Previous,
    /// The first enabled stop.
    First,
    /// The last enabled stop.
    Last,
}

/// Which arrow keys move the roving tab stop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Left and right arrows.
    Horizontal,
    /// Up and down arrows.
    Vertical,
    /// All four arrows.
    #[default]
    Both,
}

impl Orientation {
    /// The move a key press maps to under this orientation, if any.
    ///
    /// `Home` and `End` map to [`Direction::First`] and [`Direction::Last`]
    /// regardless of orientation.
    pub fn direction_for(self, key: Key) -> Option<Direction> {
        let horizontal = matches!(self, Self::Horizontal | Self::Both);
        let vertical = matches!(self, Self::Vertical | Self::Both);
        match key {
            Key::ArrowLeft if horizontal => Some(Direction::Previous),
            Key::ArrowRight if horizontal => Some(Direction::Next),
            Key::ArrowUp if vertical => Some(Direction::Previous),
            Key::ArrowDown if vertical => Some(Direction::Next),
            Key::Home => Some(Direction::First),
            Key::End => Some(Direction::Last),
            _ => None,
        }
    }

    /// The `aria-orientation` token, for orientations that have one.
    pub fn aria_token(self) -> Option<&'static str> {
        match self {
            Self::Horizontal => Some("horizontal"),
            Self::Vertical => Some("vertical"),
            Self::Both => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_ignores_vertical_arrows() {
        let o = Orientation::Horizontal;
        assert_eq!(o.direction_for(Key::ArrowRight), Some(Direction::Next));
        assert_eq!(o.direction_for(Key::ArrowLeft), Some(Direction::Previous));
        assert_eq!(o.direction_for(Key::ArrowDown), None);
        assert_eq!(o.direction_for(Key::ArrowUp), None);
    }

    #[test]
    fn vertical_ignores_horizontal_arrows() {
        let o = Orientation::Vertical;
        assert_eq!(o.direction_for(Key::ArrowDown), Some(Direction::Next));
        assert_eq!(o.direction_for(Key::ArrowUp), Some(Direction::Previous));
        assert_eq!(o.direction_for(Key::ArrowRight), None);
    }

    #[test]
    fn both_accepts_every_arrow_and_home_end() {
        let o = Orientation::default();
        assert_eq!(o, Orientation::Both);
        assert_eq!(o.direction_for(Key::ArrowDown), Some(Direction::Next));
        assert_eq!(o.direction_for(Key::ArrowLeft), Some(Direction::Previous));
        assert_eq!(o.direction_for(Key::Home), Some(Direction::First));
        assert_eq!(o.direction_for(Key::End), Some(Direction::Last));
        assert_eq!(o.direction_for(Key::Space), None);
        assert_eq!(o.direction_for(Key::Enter), None);
    }

    #[test]
    fn aria_tokens() {
        assert_eq!(Orientation::Horizontal.aria_token(), Some("horizontal"));
        assert_eq!(Orientation::Vertical.aria_token(), Some("vertical"));
        assert_eq!(Orientation::Both.aria_token(), None);
    }
}

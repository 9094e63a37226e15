//! Compass directions used to index a room's links.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A direction a link can be reached in from a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Direction {
    /// North (`n`).
    North,
    /// South (`s`).
    South,
    /// East (`e`).
    East,
    /// West (`w`).
    West,
    /// North-east (`ne`).
    NorthEast,
    /// North-west (`nw`).
    NorthWest,
    /// South-east (`se`).
    SouthEast,
    /// South-west (`sw`).
    SouthWest,
    /// Up (`u`).
    Up,
    /// Down (`d`).
    Down,
}

impl Direction {
    /// Every direction, in display order.
    pub const ALL: [Direction; 10] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::Up,
        Direction::Down,
    ];

    /// Parses a direction token, case-insensitively.
    ///
    /// Accepts both the abbreviation (`n`, `sw`, `u`) and the full word
    /// (`north`, `southwest`, `south-west`, `up`).
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let lowered = token.trim().to_ascii_lowercase();
        let dir = match lowered.as_str() {
            "n" | "north" => Self::North,
            "s" | "south" => Self::South,
            "e" | "east" => Self::East,
            "w" | "west" => Self::West,
            "ne" | "northeast" | "north-east" => Self::NorthEast,
            "nw" | "northwest" | "north-west" => Self::NorthWest,
            "se" | "southeast" | "south-east" => Self::SouthEast,
            "sw" | "southwest" | "south-west" => Self::SouthWest,
            "u" | "up" => Self::Up,
            "d" | "down" => Self::Down,
            _ => return None,
        };
        Some(dir)
    }

    /// The short token for this direction (`N`, `SW`, ...).
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "W",
            Self::NorthEast => "NE",
            Self::NorthWest => "NW",
            Self::SouthEast => "SE",
            Self::SouthWest => "SW",
            Self::Up => "U",
            Self::Down => "D",
        }
    }

    /// The lowercase full name (`north`, `south-west`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::NorthEast => "north-east",
            Self::NorthWest => "north-west",
            Self::SouthEast => "south-east",
            Self::SouthWest => "south-west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::NorthEast => Self::SouthWest,
            Self::NorthWest => Self::SouthEast,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::cannot_go(format!("{s} is not a direction")))
    }
}

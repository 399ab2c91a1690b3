//! Map square coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// A square on the map, addressed by integer column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Location of a unit that has not entered play yet.
    pub const UNPLACED: Position = Position { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_placed(&self) -> bool {
        *self != Self::UNPLACED
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::UNPLACED
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Writes `"x y"`, the form used in unit reports. Parsing uses `"x,y"`
/// instead, since that is what configuration values carry.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Parses `"x,y"`, tolerating whitespace around either coordinate.
impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| DomainError::parse(format!("Expected \"x,y\", got: {}", s)))?;
        let x = x
            .trim()
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid x coordinate: {}", x.trim())))?;
        let y = y
            .trim()
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid y coordinate: {}", y.trim())))?;
        Ok(Self { x, y })
    }
}

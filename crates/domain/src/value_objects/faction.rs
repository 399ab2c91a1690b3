//! Faction value object - the playable nations that field armies.
//!
//! Numeric ids are stable: England is 0, France is 1.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// A playable faction. Selects which unit factory builds its army.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    England,
    France,
}

impl Faction {
    /// Resolves a numeric faction id.
    pub fn from_id(id: i32) -> Result<Self, DomainError> {
        match id {
            0 => Ok(Self::England),
            1 => Ok(Self::France),
            other => Err(DomainError::unknown_faction(other)),
        }
    }

    /// Returns the stable numeric id.
    pub fn id(&self) -> i32 {
        match self {
            Self::England => 0,
            Self::France => 1,
        }
    }

    /// Returns the lowercase identifier (e.g., "england").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::England => "england",
            Self::France => "france",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::England => "England",
            Self::France => "France",
        }
    }

    /// Returns every faction in id order.
    pub fn all() -> [Faction; 2] {
        [Self::England, Self::France]
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Faction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<i32>() {
            return Self::from_id(id);
        }
        match s.to_lowercase().as_str() {
            "england" | "english" => Ok(Self::England),
            "france" | "french" => Ok(Self::France),
            _ => Err(DomainError::parse(format!("Unknown faction: {}", s))),
        }
    }
}

impl TryFrom<i32> for Faction {
    type Error = DomainError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

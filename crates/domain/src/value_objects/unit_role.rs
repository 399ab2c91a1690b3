//! Unit role value object - the branch of service a unit belongs to.
//!
//! The role fixes what every variant in the branch shares: combat distance
//! and the class skill. Numeric ids are stable: infantryman 0, archer 1,
//! knight 2.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Branch of service. Every concrete unit type belongs to exactly one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitRole {
    /// Foot soldier, melee
    Infantryman,
    /// Ranged foot soldier
    Archer,
    /// Mounted melee
    Knight,
}

impl UnitRole {
    /// Resolves a numeric unit type id.
    pub fn from_id(id: i32) -> Result<Self, DomainError> {
        match id {
            0 => Ok(Self::Infantryman),
            1 => Ok(Self::Archer),
            2 => Ok(Self::Knight),
            other => Err(DomainError::unknown_unit_role(other)),
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Self::Infantryman => 0,
            Self::Archer => 1,
            Self::Knight => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Infantryman => "infantryman",
            Self::Archer => "archer",
            Self::Knight => "knight",
        }
    }

    /// Maximum attack distance shared by every unit of this role.
    pub fn combat_distance(&self) -> i32 {
        match self {
            Self::Infantryman => 1,
            Self::Archer => 3,
            Self::Knight => 1,
        }
    }

    /// Skill shared by every unit of this role.
    pub fn class_skill(&self) -> &'static str {
        match self {
            Self::Infantryman => "InfantrymanSkill",
            Self::Archer => "ArcherSkill",
            Self::Knight => "KnightSkill",
        }
    }

    pub fn all() -> [UnitRole; 3] {
        [Self::Infantryman, Self::Archer, Self::Knight]
    }
}

impl fmt::Display for UnitRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<i32>() {
            return Self::from_id(id);
        }
        match s.to_lowercase().as_str() {
            "infantryman" | "infantry" => Ok(Self::Infantryman),
            "archer" | "bow" => Ok(Self::Archer),
            "knight" | "cavalry" => Ok(Self::Knight),
            _ => Err(DomainError::parse(format!("Unknown unit type: {}", s))),
        }
    }
}

impl TryFrom<i32> for UnitRole {
    type Error = DomainError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

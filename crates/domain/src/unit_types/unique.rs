//! Faction-unique unit types. Each replaces a standard type of the same role
//! in its faction's factory.

use super::UnitType;
use crate::value_objects::{BaseStats, UnitRole};

/// England's archer: standard archer body, one more point of damage.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglandArcher;

impl UnitType for EnglandArcher {
    fn type_id(&self) -> &str {
        "england_archer"
    }

    fn display_name(&self) -> &str {
        "English Longbowman"
    }

    fn role(&self) -> UnitRole {
        UnitRole::Archer
    }

    fn base_stats(&self) -> BaseStats {
        BaseStats::new(8, 3, 3)
    }

    fn special_skill(&self) -> &'static str {
        "EnglandArcherSkill"
    }
}

/// France's knight: tougher than the standard knight, one point slower.
#[derive(Debug, Clone, Copy, Default)]
pub struct FranceKnight;

impl UnitType for FranceKnight {
    fn type_id(&self) -> &str {
        "france_knight"
    }

    fn display_name(&self) -> &str {
        "French Gendarme"
    }

    fn role(&self) -> UnitRole {
        UnitRole::Knight
    }

    fn base_stats(&self) -> BaseStats {
        BaseStats::new(18, 6, 5)
    }

    fn special_skill(&self) -> &'static str {
        "FranceKnightSkill"
    }
}

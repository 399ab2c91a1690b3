//! Standard unit types, fielded by any faction without a unique replacement.

use super::UnitType;
use crate::value_objects::{BaseStats, UnitRole};

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardInfantryman;

impl UnitType for StandardInfantryman {
    fn type_id(&self) -> &str {
        "standard_infantryman"
    }

    fn display_name(&self) -> &str {
        "Infantryman"
    }

    fn role(&self) -> UnitRole {
        UnitRole::Infantryman
    }

    fn base_stats(&self) -> BaseStats {
        BaseStats::new(12, 4, 2)
    }

    fn special_skill(&self) -> &'static str {
        "StandardInfantrymanSkill"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardArcher;

impl UnitType for StandardArcher {
    fn type_id(&self) -> &str {
        "standard_archer"
    }

    fn display_name(&self) -> &str {
        "Archer"
    }

    fn role(&self) -> UnitRole {
        UnitRole::Archer
    }

    fn base_stats(&self) -> BaseStats {
        BaseStats::new(8, 2, 3)
    }

    fn special_skill(&self) -> &'static str {
        "StandardArcherSkill"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardKnight;

impl UnitType for StandardKnight {
    fn type_id(&self) -> &str {
        "standard_knight"
    }

    fn display_name(&self) -> &str {
        "Knight"
    }

    fn role(&self) -> UnitRole {
        UnitRole::Knight
    }

    fn base_stats(&self) -> BaseStats {
        BaseStats::new(15, 6, 6)
    }

    fn special_skill(&self) -> &'static str {
        "StandardKnightSkill"
    }
}

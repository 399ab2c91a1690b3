//! Unit stat lines.

use serde::{Deserialize, Serialize};

use super::UnitRole;

/// Stats a concrete unit type supplies on its own.
///
/// Combat distance comes from the role, see [`BaseStats::with_role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: i32,
    pub damage: i32,
    pub speed: i32,
}

impl BaseStats {
    pub const fn new(hp: i32, damage: i32, speed: i32) -> Self {
        Self { hp, damage, speed }
    }

    /// Completes the stat line with the role's combat distance.
    pub fn with_role(self, role: UnitRole) -> UnitStats {
        UnitStats {
            max_hp: self.hp,
            damage: self.damage,
            combat_distance: role.combat_distance(),
            speed: self.speed,
        }
    }
}

/// Full, immutable stat line of a unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStats {
    pub max_hp: i32,
    pub damage: i32,
    pub combat_distance: i32,
    pub speed: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_role_takes_distance_from_role() {
        let stats = BaseStats::new(8, 2, 3).with_role(UnitRole::Archer);
        assert_eq!(
            stats,
            UnitStats {
                max_hp: 8,
                damage: 2,
                combat_distance: 3,
                speed: 3,
            }
        );
    }
}

//! Unit entity - a single soldier or mounted warrior on the map
//!
//! A unit pairs a shared [`UnitType`] with the little state that belongs to
//! the instance: current hit points and location. Stats never change after
//! creation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::unit_types::UnitType;
use crate::value_objects::{Position, UnitRole, UnitStats};
use crate::UnitId;

/// A unit instance. Not `Clone`: each value is a distinct entity with its own id.
///
/// ```compile_fail
/// use muster_domain::{EnglandUnitFactory, UnitFactory};
///
/// let unit = EnglandUnitFactory::new().create_archer();
/// let _copy = unit.clone();
/// ```
#[derive(Debug)]
pub struct Unit {
    id: UnitId,
    kind: Arc<dyn UnitType>,
    hp: i32,
    location: Position,
}

impl Unit {
    /// Creates a unit at full health that has not entered play yet.
    pub fn new(kind: Arc<dyn UnitType>) -> Self {
        let hp = kind.stats().max_hp;
        Self {
            id: UnitId::new(),
            kind,
            hp,
            location: Position::UNPLACED,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn kind(&self) -> &dyn UnitType {
        self.kind.as_ref()
    }

    pub fn role(&self) -> UnitRole {
        self.kind.role()
    }

    pub fn stats(&self) -> UnitStats {
        self.kind.stats()
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.stats().max_hp
    }

    pub fn damage(&self) -> i32 {
        self.stats().damage
    }

    pub fn combat_distance(&self) -> i32 {
        self.stats().combat_distance
    }

    pub fn speed(&self) -> i32 {
        self.stats().speed
    }

    pub fn location(&self) -> Position {
        self.location
    }

    /// Sets the square on which the unit enters play.
    pub fn set_start_square(&mut self, square: Position) {
        self.location = square;
    }

    /// Movement is resolved elsewhere; the unit is left where it is.
    pub fn move_to(&mut self, _to: Position) {}

    /// Combat is resolved elsewhere; neither side is changed.
    pub fn attack(&mut self, _target: Position) {}

    pub fn class_skill(&self) -> &'static str {
        self.kind.class_skill()
    }

    pub fn special_skill(&self) -> &'static str {
        self.kind.special_skill()
    }

    /// Serializable view of the unit for output.
    pub fn snapshot(&self) -> UnitSnapshot {
        UnitSnapshot {
            id: self.id,
            type_id: self.kind.type_id().to_string(),
            display_name: self.kind.display_name().to_string(),
            role: self.role(),
            hp: self.hp,
            stats: self.stats(),
            location: self.location,
            class_skill: self.class_skill().to_string(),
            special_skill: self.special_skill().to_string(),
        }
    }
}

/// Point-in-time view of a [`Unit`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub id: UnitId,
    pub type_id: String,
    pub display_name: String,
    pub role: UnitRole,
    pub hp: i32,
    pub stats: UnitStats,
    pub location: Position,
    pub class_skill: String,
    pub special_skill: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit_types::{EnglandArcher, FranceKnight, StandardInfantryman};

    #[test]
    fn new_unit_is_unplaced_at_full_health() {
        let unit = Unit::new(Arc::new(FranceKnight));
        assert_eq!(unit.hp(), 18);
        assert_eq!(unit.max_hp(), 18);
        assert_eq!(unit.location(), Position::UNPLACED);
        assert!(!unit.location().is_placed());
    }

    #[test]
    fn accessors_follow_unit_type() {
        let unit = Unit::new(Arc::new(EnglandArcher));
        assert_eq!(unit.role(), UnitRole::Archer);
        assert_eq!(unit.damage(), 3);
        assert_eq!(unit.combat_distance(), 3);
        assert_eq!(unit.speed(), 3);
        assert_eq!(unit.kind().type_id(), "england_archer");
    }

    #[test]
    fn set_start_square_places_unit() {
        let mut unit = Unit::new(Arc::new(StandardInfantryman));
        unit.set_start_square(Position::new(5, 5));
        assert_eq!(unit.location(), Position::new(5, 5));
        assert!(unit.location().is_placed());
    }

    #[test]
    fn move_and_attack_leave_unit_unchanged() {
        let mut unit = Unit::new(Arc::new(StandardInfantryman));
        unit.set_start_square(Position::new(2, 3));
        let before = unit.snapshot();

        unit.move_to(Position::new(4, 4));
        unit.attack(Position::new(4, 5));

        assert_eq!(unit.snapshot(), before);
    }

    #[test]
    fn skills_dispatch_through_unit_type() {
        let unit = Unit::new(Arc::new(FranceKnight));
        assert_eq!(unit.class_skill(), "KnightSkill");
        assert_eq!(unit.special_skill(), "FranceKnightSkill");
    }

    #[test]
    fn each_unit_gets_its_own_id() {
        let kind: Arc<dyn UnitType> = Arc::new(StandardInfantryman);
        let a = Unit::new(kind.clone());
        let b = Unit::new(kind);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut unit = Unit::new(Arc::new(EnglandArcher));
        unit.set_start_square(Position::new(5, 5));

        let json = serde_json::to_value(unit.snapshot()).expect("serialize snapshot");
        assert_eq!(json["type_id"], "england_archer");
        assert_eq!(json["role"], "archer");
        assert_eq!(json["hp"], 8);
        assert_eq!(json["stats"]["damage"], 3);
        assert_eq!(json["stats"]["combat_distance"], 3);
        assert_eq!(json["location"]["x"], 5);
        assert_eq!(json["special_skill"], "EnglandArcherSkill");
    }
}

//! Unit type trait.
//!
//! A unit type is the "class" of a unit: its role, its base stats, and the
//! skills it can use. Roles supply what a whole branch shares; concrete
//! types supply stats and their own special skill.

use std::fmt;

use crate::value_objects::{BaseStats, UnitRole, UnitStats};

/// Core trait all unit types must implement.
pub trait UnitType: fmt::Debug + Send + Sync {
    /// Unique identifier for this unit type (e.g., "england_archer").
    fn type_id(&self) -> &str;

    /// Human-readable display name (e.g., "English Longbowman").
    fn display_name(&self) -> &str;

    /// Branch of service this type belongs to.
    fn role(&self) -> UnitRole;

    /// Hit points, damage, and speed of this type.
    fn base_stats(&self) -> BaseStats;

    /// Skill specific to this type.
    fn special_skill(&self) -> &'static str;

    /// Full stat line, with combat distance taken from the role.
    fn stats(&self) -> UnitStats {
        self.base_stats().with_role(self.role())
    }

    /// Skill shared by every type in the same role.
    fn class_skill(&self) -> &'static str {
        self.role().class_skill()
    }
}

//! Unit factory trait.
//!
//! One factory per faction. Callers ask for a role and get whichever concrete
//! type the faction fields for it, without knowing the faction's roster.

use crate::entities::Unit;
use crate::value_objects::{Faction, UnitRole};

/// Core trait all faction factories must implement.
#[cfg_attr(test, mockall::automock)]
pub trait UnitFactory: Send + Sync {
    /// Faction whose army this factory builds.
    fn faction(&self) -> Faction;

    fn create_infantryman(&self) -> Unit;

    fn create_archer(&self) -> Unit;

    fn create_knight(&self) -> Unit;
}

/// Builds a unit of the given role with any factory.
pub fn build_unit(factory: &dyn UnitFactory, role: UnitRole) -> Unit {
    match role {
        UnitRole::Infantryman => factory.create_infantryman(),
        UnitRole::Archer => factory.create_archer(),
        UnitRole::Knight => factory.create_knight(),
    }
}

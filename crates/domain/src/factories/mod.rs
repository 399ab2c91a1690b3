//! Per-faction unit factories.
//!
//! Each faction implements [`UnitFactory`] from `traits.rs`. A game picks its
//! factory once, from the faction id, and then builds every unit through it.
//!
//! # Supported Factions
//!
//! - England (`0`): unique archer
//! - France (`1`): unique knight

mod england;
mod france;
mod traits;

pub use england::EnglandUnitFactory;
pub use france::FranceUnitFactory;
pub use traits::{build_unit, UnitFactory};

#[cfg(test)]
pub use traits::MockUnitFactory;

use std::sync::Arc;

use crate::entities::Unit;
use crate::value_objects::{Faction, UnitRole};
use crate::DomainError;

/// Returns the built-in factory for a faction.
pub fn factory_for(faction: Faction) -> Arc<dyn UnitFactory> {
    match faction {
        Faction::England => Arc::new(EnglandUnitFactory::new()),
        Faction::France => Arc::new(FranceUnitFactory::new()),
    }
}

/// Creates the factory for a numeric faction id (England 0, France 1).
pub fn create_unit_factory(faction_id: i32) -> Result<Arc<dyn UnitFactory>, DomainError> {
    Ok(factory_for(Faction::try_from(faction_id)?))
}

/// Creates a unit from a numeric unit type id (infantryman 0, archer 1, knight 2).
pub fn create_unit(unit_id: i32, factory: &dyn UnitFactory) -> Result<Unit, DomainError> {
    Ok(build_unit(factory, UnitRole::try_from(unit_id)?))
}

/// Registry of available unit factories, at most one per faction.
pub struct UnitFactoryRegistry {
    factories: Vec<Arc<dyn UnitFactory>>,
}

impl Default for UnitFactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitFactoryRegistry {
    /// Create a new registry with all built-in factories.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for faction in Faction::all() {
            registry.register(factory_for(faction));
        }
        registry
    }

    /// Create an empty registry without built-in factories.
    pub fn empty() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Register a factory, replacing any earlier one for the same faction.
    pub fn register(&mut self, factory: Arc<dyn UnitFactory>) {
        let faction = factory.faction();
        self.factories.retain(|f| f.faction() != faction);
        self.factories.push(factory);
    }

    /// Get the factory for a faction.
    pub fn get(&self, faction: Faction) -> Option<Arc<dyn UnitFactory>> {
        self.factories
            .iter()
            .find(|f| f.faction() == faction)
            .cloned()
    }

    /// List all factions with a registered factory.
    pub fn factions(&self) -> Vec<Faction> {
        self.factories.iter().map(|f| f.faction()).collect()
    }

    /// Build a unit of `role` for `faction`.
    pub fn create_unit(&self, faction: Faction, role: UnitRole) -> Result<Unit, DomainError> {
        let factory = self.get(faction).ok_or_else(|| {
            DomainError::validation(format!("no factory registered for {}", faction.as_str()))
        })?;
        Ok(build_unit(factory.as_ref(), role))
    }
}

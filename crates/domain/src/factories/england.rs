//! England's army: standard infantry and knights, unique archers.

use std::sync::Arc;

use super::UnitFactory;
use crate::entities::Unit;
use crate::unit_types::{EnglandArcher, StandardInfantryman, StandardKnight};
use crate::value_objects::Faction;

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglandUnitFactory;

impl EnglandUnitFactory {
    pub fn new() -> Self {
        Self
    }
}

impl UnitFactory for EnglandUnitFactory {
    fn faction(&self) -> Faction {
        Faction::England
    }

    fn create_infantryman(&self) -> Unit {
        Unit::new(Arc::new(StandardInfantryman))
    }

    fn create_archer(&self) -> Unit {
        Unit::new(Arc::new(EnglandArcher))
    }

    fn create_knight(&self) -> Unit {
        Unit::new(Arc::new(StandardKnight))
    }
}

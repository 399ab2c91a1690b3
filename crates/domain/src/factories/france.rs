//! France's army: standard infantry and archers, unique knights.

use std::sync::Arc;

use super::UnitFactory;
use crate::entities::Unit;
use crate::unit_types::{FranceKnight, StandardArcher, StandardInfantryman};
use crate::value_objects::Faction;

#[derive(Debug, Clone, Copy, Default)]
pub struct FranceUnitFactory;

impl FranceUnitFactory {
    pub fn new() -> Self {
        Self
    }
}

impl UnitFactory for FranceUnitFactory {
    fn faction(&self) -> Faction {
        Faction::France
    }

    fn create_infantryman(&self) -> Unit {
        Unit::new(Arc::new(StandardInfantryman))
    }

    fn create_archer(&self) -> Unit {
        Unit::new(Arc::new(StandardArcher))
    }

    fn create_knight(&self) -> Unit {
        Unit::new(Arc::new(FranceKnight))
    }
}

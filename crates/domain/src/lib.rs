//! Muster Domain - unit hierarchy and per-faction unit factories.
//!
//! A game picks one [`UnitFactory`] per faction and builds every unit
//! through it. Units share a [`UnitType`] that decides their stats and
//! skills; the instance only tracks hit points and location.

pub mod entities;
pub mod error;
pub mod factories;
pub mod ids;
pub mod unit_types;
pub mod value_objects;

pub use entities::{Unit, UnitSnapshot};
pub use error::DomainError;
pub use factories::{
    build_unit, create_unit, create_unit_factory, factory_for, EnglandUnitFactory,
    FranceUnitFactory, UnitFactory, UnitFactoryRegistry,
};
pub use ids::UnitId;
pub use unit_types::{
    EnglandArcher, FranceKnight, StandardArcher, StandardInfantryman, StandardKnight, UnitType,
};
pub use value_objects::{BaseStats, Faction, Position, UnitRole, UnitStats};

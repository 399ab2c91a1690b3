//! Value objects - Immutable objects defined by their attributes

mod faction;
mod position;
mod stats;
mod unit_role;

pub use faction::Faction;
pub use position::Position;
pub use stats::{BaseStats, UnitStats};
pub use unit_role::UnitRole;

//! Unit type implementations.
//!
//! Each concrete type implements [`UnitType`] from `traits.rs`.
//!
//! # Available Types
//!
//! | Type | Role | HP | Damage | Speed |
//! |---|---|---|---|---|
//! | `StandardInfantryman` | infantryman | 12 | 4 | 2 |
//! | `StandardArcher` | archer | 8 | 2 | 3 |
//! | `StandardKnight` | knight | 15 | 6 | 6 |
//! | `EnglandArcher` | archer | 8 | 3 | 3 |
//! | `FranceKnight` | knight | 18 | 6 | 5 |

mod standard;
mod traits;
mod unique;

pub use standard::{StandardArcher, StandardInfantryman, StandardKnight};
pub use traits::UnitType;
pub use unique::{EnglandArcher, FranceKnight};

//! Domain entities - Objects with identity

mod unit;

pub use unit::{Unit, UnitSnapshot};

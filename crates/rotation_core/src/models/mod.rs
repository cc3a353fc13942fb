//! Domain models for the layer availability sheet.

mod faction;
mod layer;
mod unit;

pub use faction::Faction;
pub use layer::{Layer, LayerIndex, Level};
pub use unit::{TeamSide, Unit, DEFAULT_UNIT_TYPE};

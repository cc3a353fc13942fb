//! # rotation_core - Layer Sheet Parser and Rotation Generator
//!
//! Parses a game's layer availability sheet (a flat CSV export of maps,
//! layers, factions, and units) into an in-memory index, then enumerates
//! every admissible faction matchup per layer under optional map / layer /
//! game-mode / faction filters and an alliance eligibility rule.

pub mod alliance;
pub mod error;
pub mod models;
pub mod parser;
pub mod rotation;


pub use alliance::{alliance_of, Alliance};
pub use error::ParseError;
pub use models::{Faction, Layer, LayerIndex, Level, TeamSide, Unit, DEFAULT_UNIT_TYPE};
pub use parser::{parse_layer_index, parse_layer_index_from_reader};
pub use rotation::{can_play_against, generate_rotations, Rotation, RotationFilters};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

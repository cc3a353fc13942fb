//! Rotation generation.
//!
//! Enumerates every admissible faction matchup per layer, narrowed by
//! optional map / layer / game-mode / faction allow-lists and gated by the
//! alliance eligibility rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alliance::{alliance_of, Alliance};
use crate::models::{LayerIndex, TeamSide};

/// One candidate matchup of two factions on a layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rotation {
    pub layer: String,
    pub team_one: String,
    pub team_two: String,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.layer, self.team_one, self.team_two)
    }
}

/// Allow-lists narrowing the generated rotations. A field that is `None` or
/// an empty list places no restriction on its dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RotationFilters {
    pub maps: Option<Vec<String>>,
    pub layers: Option<Vec<String>>,
    pub game_modes: Option<Vec<String>>,
    pub factions: Option<Vec<String>>,
}

impl RotationFilters {
    fn allows(list: &Option<Vec<String>>, value: &str) -> bool {
        match list {
            Some(values) if !values.is_empty() => values.iter().any(|v| v == value),
            _ => true,
        }
    }

    pub fn allows_map(&self, level: &str) -> bool {
        Self::allows(&self.maps, level)
    }

    pub fn allows_layer(&self, layer: &str) -> bool {
        Self::allows(&self.layers, layer)
    }

    pub fn allows_game_mode(&self, layer_type: &str) -> bool {
        Self::allows(&self.game_modes, layer_type)
    }

    /// A pair passes the faction filter when either name is on the list.
    pub fn allows_faction_pair(&self, team_one: &str, team_two: &str) -> bool {
        match &self.factions {
            Some(values) if !values.is_empty() => {
                values.iter().any(|v| v == team_one || v == team_two)
            }
            _ => true,
        }
    }
}

/// Whether two factions may face each other. Self-play is never valid, and
/// factions of the same bloc only meet when that bloc is independent.
/// A faction outside the alliance table is unrestricted.
pub fn can_play_against(team_one: &str, team_two: &str) -> bool {
    if team_one == team_two {
        return false;
    }
    match (alliance_of(team_one), alliance_of(team_two)) {
        (Some(a), Some(b)) => a != b || a == Alliance::Independent,
        _ => true,
    }
}

/// Enumerate every admissible (layer, faction, faction) matchup in `index`,
/// narrowed by `filters`. Maps and layers are visited in name order so the
/// output is stable across runs; faction pairs follow the sheet's listing
/// order within each layer.
pub fn generate_rotations(index: &LayerIndex, filters: &RotationFilters) -> Vec<Rotation> {
    let mut rotations = Vec::new();

    let mut level_names: Vec<&String> =
        index.levels.keys().filter(|name| filters.allows_map(name)).collect();
    level_names.sort();

    for level_name in level_names {
        let level = &index.levels[level_name];
        let mut layer_names: Vec<&String> =
            level.layers.keys().filter(|name| filters.allows_layer(name)).collect();
        layer_names.sort();

        for layer_name in layer_names {
            let layer = &level.layers[layer_name];
            if !filters.allows_game_mode(&layer.layer_type) {
                continue;
            }

            let side_one: Vec<_> =
                layer.factions.iter().filter(|f| f.can_field(TeamSide::One)).collect();
            let side_two: Vec<_> =
                layer.factions.iter().filter(|f| f.can_field(TeamSide::Two)).collect();

            for one in &side_one {
                for two in &side_two {
                    if !filters.allows_faction_pair(&one.name, &two.name) {
                        continue;
                    }
                    if !can_play_against(&one.name, &two.name) {
                        continue;
                    }
                    rotations.push(Rotation {
                        layer: layer.name.clone(),
                        team_one: one.restricted_to(TeamSide::One).name,
                        team_two: two.restricted_to(TeamSide::Two).name,
                    });
                }
            }
        }
    }

    log::debug!("Generated {} rotations", rotations.len());
    rotations
}

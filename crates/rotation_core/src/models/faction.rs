use serde::{Deserialize, Serialize};

use super::{TeamSide, Unit};

/// A playable force and its unit roster, as listed for one layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faction {
    pub name: String,
    pub units: Vec<Unit>,
}

impl Faction {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), units: Vec::new() }
    }

    /// Whether this faction has at least one unit it can field on `side`.
    pub fn can_field(&self, side: TeamSide) -> bool {
        self.units.iter().any(|u| u.available_on_team.allows(side))
    }

    /// Copy of this faction with the roster narrowed to units usable on `side`.
    pub fn restricted_to(&self, side: TeamSide) -> Faction {
        Faction {
            name: self.name.clone(),
            units: self
                .units
                .iter()
                .filter(|u| u.available_on_team.allows(side))
                .cloned()
                .collect(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Unit classification used when the sheet leaves the type column blank.
pub const DEFAULT_UNIT_TYPE: &str = "CombinedArms";

/// Which team slot(s) a unit may be fielded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSide {
    #[serde(rename = "Team1")]
    One,
    #[serde(rename = "Team2")]
    Two,
    #[serde(rename = "Team1 / Team2")]
    Both,
}

impl TeamSide {
    /// Parse the availability label as it appears in the sheet.
    /// Anything outside the three recognized labels is rejected.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Team1" => Some(TeamSide::One),
            "Team2" => Some(TeamSide::Two),
            "Team1 / Team2" => Some(TeamSide::Both),
            _ => None,
        }
    }

    /// Canonical sheet label.
    pub fn label(&self) -> &'static str {
        match self {
            TeamSide::One => "Team1",
            TeamSide::Two => "Team2",
            TeamSide::Both => "Team1 / Team2",
        }
    }

    /// Whether a unit with this availability can be fielded on `side`.
    pub fn allows(&self, side: TeamSide) -> bool {
        *self == side || *self == TeamSide::Both
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub available_on_team: TeamSide,
}

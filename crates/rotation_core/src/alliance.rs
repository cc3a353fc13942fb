//! Faction alliance table.
//!
//! Factions belong to one of four blocs; the bloc decides which matchups
//! the rotation generator may emit. The table is a fixed reverse index
//! built once on first use.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alliance {
    #[serde(rename = "BLUFOR")]
    Blufor,
    #[serde(rename = "REDFOR")]
    Redfor,
    #[serde(rename = "PAC")]
    Pac,
    #[serde(rename = "INDEPENDENT")]
    Independent,
}

impl Alliance {
    /// Canonical bloc code string.
    pub fn code(&self) -> &'static str {
        match self {
            Alliance::Blufor => "BLUFOR",
            Alliance::Redfor => "REDFOR",
            Alliance::Pac => "PAC",
            Alliance::Independent => "INDEPENDENT",
        }
    }
}

const BLUFOR_FACTIONS: &[&str] = &["ADF", "BAF", "CAF", "USA", "USMC"];
const REDFOR_FACTIONS: &[&str] = &["RGF", "VDV"];
const PAC_FACTIONS: &[&str] = &["PLA", "PLAAGF", "PLANMC"];
const INDEPENDENT_FACTIONS: &[&str] = &["IMF", "INS", "MEA", "MEI", "TLF", "WPMC"];

static FACTION_ALLIANCES: Lazy<FxHashMap<&'static str, Alliance>> = Lazy::new(|| {
    let groups = [
        (Alliance::Blufor, BLUFOR_FACTIONS),
        (Alliance::Redfor, REDFOR_FACTIONS),
        (Alliance::Pac, PAC_FACTIONS),
        (Alliance::Independent, INDEPENDENT_FACTIONS),
    ];
    let mut table = FxHashMap::default();
    for (alliance, factions) in groups {
        for name in factions {
            table.insert(*name, alliance);
        }
    }
    table
});

/// Bloc of a faction, or `None` for factions outside the table.
pub fn alliance_of(faction: &str) -> Option<Alliance> {
    FACTION_ALLIANCES.get(faction).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_factions_resolve() {
        assert_eq!(alliance_of("BAF"), Some(Alliance::Blufor));
        assert_eq!(alliance_of("USMC"), Some(Alliance::Blufor));
        assert_eq!(alliance_of("VDV"), Some(Alliance::Redfor));
        assert_eq!(alliance_of("PLANMC"), Some(Alliance::Pac));
        assert_eq!(alliance_of("WPMC"), Some(Alliance::Independent));
        assert_eq!(alliance_of("MEI"), Some(Alliance::Independent));
    }

    #[test]
    fn test_unknown_factions_have_no_alliance() {
        assert_eq!(alliance_of("ZZZ"), None);
        assert_eq!(alliance_of(""), None);
        assert_eq!(alliance_of("baf"), None);
    }

    #[test]
    fn test_codes() {
        assert_eq!(Alliance::Blufor.code(), "BLUFOR");
        assert_eq!(Alliance::Redfor.code(), "REDFOR");
        assert_eq!(Alliance::Pac.code(), "PAC");
        assert_eq!(Alliance::Independent.code(), "INDEPENDENT");
    }

    #[test]
    fn test_every_listed_faction_is_indexed() {
        let all = BLUFOR_FACTIONS
            .iter()
            .chain(REDFOR_FACTIONS)
            .chain(PAC_FACTIONS)
            .chain(INDEPENDENT_FACTIONS);
        for name in all {
            assert!(alliance_of(name).is_some(), "missing from index: {}", name);
        }
        assert_eq!(FACTION_ALLIANCES.len(), 16);
    }
}

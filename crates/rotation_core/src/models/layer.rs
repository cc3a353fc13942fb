use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::Faction;

/// One playable configuration of a map, identified by `Level_GameMode_Version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub level: String,
    pub layer_type: String,
    pub version: String,
    pub factions: Vec<Faction>,
}

impl Layer {
    /// Build a layer from its sheet name, decomposing `Level_GameMode_Version`
    /// on underscores. Missing segments default to empty strings; the name
    /// itself is kept verbatim.
    pub fn from_name(name: &str) -> Self {
        let mut segments = name.split('_');
        let level = segments.next().unwrap_or_default().to_string();
        let layer_type = segments.next().unwrap_or_default().to_string();
        let version = segments.next().unwrap_or_default().to_string();
        Layer { name: name.to_string(), level, layer_type, version, factions: Vec::new() }
    }
}

/// A map and the layers defined on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub layers: FxHashMap<String, Layer>,
}

/// Runtime index of every parsed map, keyed by level name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerIndex {
    pub levels: FxHashMap<String, Level>,
}

impl LayerIndex {
    pub fn new() -> Self {
        Self { levels: FxHashMap::default() }
    }

    /// Look up a map by level name.
    pub fn get(&self, level: &str) -> Option<&Level> {
        self.levels.get(level)
    }

    /// Number of maps.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Total number of layers across all maps.
    pub fn layer_count(&self) -> usize {
        self.levels.values().map(|level| level.layers.len()).sum()
    }
}

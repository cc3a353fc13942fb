//! Streaming parser for the layer availability sheet.
//!
//! The sheet is a flat comma-separated export. Title rows come first, then
//! an all-empty sentinel row, then data rows that interleave map, layer,
//! faction, and unit declarations at their respective column depths. A
//! single row may carry several of those signals at once; the accumulator
//! below replays them in the fixed order the format requires.

use std::io;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::error::ParseError;
use crate::models::{Faction, Layer, LayerIndex, Level, TeamSide, Unit, DEFAULT_UNIT_TYPE};

// Column layout of the export; column 0 is reserved.
const COL_LEVEL: usize = 1;
const COL_LAYER: usize = 2;
const COL_FACTION: usize = 3;
const COL_UNIT_TYPE: usize = 4;
const COL_UNIT_NAME: usize = 5;
const COL_TEAM: usize = 6;

/// Parse a layer sheet from disk into a [`LayerIndex`].
pub fn parse_layer_index(path: &Path) -> Result<LayerIndex, ParseError> {
    let reader = sheet_reader().from_path(path)?;
    parse_records(reader)
}

/// Parse a layer sheet from any byte stream into a [`LayerIndex`].
pub fn parse_layer_index_from_reader<R: io::Read>(input: R) -> Result<LayerIndex, ParseError> {
    let reader = sheet_reader().from_reader(input);
    parse_records(reader)
}

/// The sheet has no header row and no quoting; rows may have ragged widths.
fn sheet_reader() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true).quoting(false);
    builder
}

fn parse_records<R: io::Read>(mut reader: csv::Reader<R>) -> Result<LayerIndex, ParseError> {
    let mut index = LayerIndex::new();
    let mut acc = Accumulator::default();
    let mut started = false;
    let mut records = 0u64;

    for result in reader.records() {
        let record = result?;
        if !started {
            // Everything up to the first all-empty record is title rows;
            // the empty record itself is a start-of-data sentinel.
            started = record.iter().all(|field| field.is_empty());
            continue;
        }
        records += 1;
        acc.apply(&record, records, &mut index)?;
    }

    let (factions, units) = (acc.factions_seen, acc.units_seen);
    acc.finish(&mut index);

    log::debug!(
        "Parsed {} maps, {} layers, {} factions, {} units from {} data records",
        index.len(),
        index.layer_count(),
        factions,
        units,
        records
    );

    Ok(index)
}

/// Single-pass parse state. The level name, layer, and faction in progress
/// move out of the accumulator at their commit points, so ownership of every
/// partially-built value is explicit.
#[derive(Default)]
struct Accumulator {
    level_name: Option<String>,
    current_layer: Option<Layer>,
    current_faction: Option<Faction>,
    layers: FxHashMap<String, Layer>,
    factions_seen: u64,
    units_seen: u64,
}

impl Accumulator {
    /// Apply one data record. Signals are replayed in the order faction,
    /// unit, layer, level: a row that opens a new layer together with its
    /// first faction must attach the previous faction to the previous layer
    /// before the layer switch, and a new level must close out everything
    /// belonging to the old one.
    fn apply(
        &mut self,
        record: &csv::StringRecord,
        line: u64,
        index: &mut LayerIndex,
    ) -> Result<(), ParseError> {
        let field = |idx: usize| record.get(idx).unwrap_or("");
        let level = field(COL_LEVEL);
        let layer = field(COL_LAYER);
        let faction = field(COL_FACTION);
        let unit_type = field(COL_UNIT_TYPE);
        let unit_name = field(COL_UNIT_NAME);
        let team_label = field(COL_TEAM);

        if !faction.is_empty() {
            self.flush_faction();
            self.current_faction = Some(Faction::new(faction));
            self.factions_seen += 1;
        }

        if !unit_name.is_empty() {
            let side = TeamSide::parse(team_label).ok_or_else(|| {
                ParseError::MalformedTeamLabel { label: team_label.to_string(), line }
            })?;
            let unit_type = if unit_type.is_empty() { DEFAULT_UNIT_TYPE } else { unit_type };
            match self.current_faction.as_mut() {
                Some(current) => {
                    current.units.push(Unit {
                        name: unit_name.to_string(),
                        unit_type: unit_type.to_string(),
                        available_on_team: side,
                    });
                    self.units_seen += 1;
                }
                None => {
                    log::warn!("Record {}: unit {:?} precedes any faction, dropped", line, unit_name)
                }
            }
        }

        if !layer.is_empty() {
            self.commit_layer();
            self.current_layer = Some(Layer::from_name(layer));
        }

        if !level.is_empty() {
            self.flush_faction();
            self.commit_layer();
            self.commit_level(index);
            self.level_name = Some(level.to_string());
        }

        Ok(())
    }

    /// Attach the faction in progress to the layer in progress.
    fn flush_faction(&mut self) {
        if let Some(faction) = self.current_faction.take() {
            match self.current_layer.as_mut() {
                Some(layer) => layer.factions.push(faction),
                None => {
                    log::warn!("Faction {:?} has no layer to attach to, dropped", faction.name)
                }
            }
        }
    }

    /// Move the layer in progress into the current level's layer map.
    fn commit_layer(&mut self) {
        if let Some(layer) = self.current_layer.take() {
            self.layers.insert(layer.name.clone(), layer);
        }
    }

    /// Close out the current level. Layers seen before any level record have
    /// no home and are dropped.
    fn commit_level(&mut self, index: &mut LayerIndex) {
        let layers = std::mem::take(&mut self.layers);
        match self.level_name.take() {
            Some(name) => {
                index.levels.insert(name.clone(), Level { name, layers });
            }
            None if !layers.is_empty() => {
                log::warn!("{} layers precede any map record, dropped", layers.len());
            }
            None => {}
        }
    }

    /// Flush everything still in progress at end of input, so a sheet that
    /// ends mid-layer keeps its trailing faction and layer.
    fn finish(mut self, index: &mut LayerIndex) {
        self.flush_faction();
        self.commit_layer();
        self.commit_level(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    fn parse(sheet: &str) -> LayerIndex {
        parse_layer_index_from_reader(sheet.as_bytes()).expect("sheet should parse")
    }

    #[test]
    fn test_rows_before_sentinel_are_ignored() {
        let sheet = "\
Layer Availability Export,,,,,,
,Narva,Narva_RAAS_v1,USA,,1st Infantry Division,Team1
,,,,,,
,Skorpo,,,,,
,,Skorpo_RAAS_v1,RGF,,49th Combined Arms Army,Team1 / Team2
";
        let index = parse(sheet);
        assert_eq!(index.len(), 1);
        assert!(index.get("Narva").is_none());
        assert!(index.get("Skorpo").is_some());
    }

    #[test]
    fn test_trailing_layer_survives_end_of_input() {
        let sheet = "\
,,,,,,
,Skorpo,,,,,
,,Skorpo_RAAS_v1,USA,,1st Infantry Division,Team1 / Team2
,,,RGF,Armored,4th Guards Tank Division,Team1 / Team2
";
        let index = parse(sheet);
        let level = index.get("Skorpo").expect("level committed at end of input");
        let layer = &level.layers["Skorpo_RAAS_v1"];
        assert_eq!(layer.factions.len(), 2);
        assert_eq!(layer.factions[1].name, "RGF");
        assert_eq!(layer.factions[1].units.len(), 1);
    }

    #[test]
    fn test_blank_unit_type_defaults() {
        let sheet = "\
,,,,,,
,Skorpo,,,,,
,,Skorpo_RAAS_v1,USA,,1st Infantry Division,Team1
,,,,Armored,1st Cavalry Regiment,Team1
";
        let index = parse(sheet);
        let units = &index.get("Skorpo").unwrap().layers["Skorpo_RAAS_v1"].factions[0].units;
        assert_eq!(units[0].unit_type, "CombinedArms");
        assert_eq!(units[1].unit_type, "Armored");
    }

    #[test]
    fn test_layer_row_carries_its_first_faction() {
        // A row can close the previous layer and open the next one while
        // introducing that layer's first faction and unit.
        let sheet = "\
,,,,,,
,Skorpo,,,,,
,,Skorpo_RAAS_v1,USA,,1st Infantry Division,Team1 / Team2
,,Skorpo_TC_v1,RGF,,49th Combined Arms Army,Team1 / Team2
,,,PLA,,118th Combined Arms Brigade,Team1 / Team2
";
        let index = parse(sheet);
        let level = index.get("Skorpo").unwrap();
        let raas = &level.layers["Skorpo_RAAS_v1"];
        let tc = &level.layers["Skorpo_TC_v1"];
        assert_eq!(
            raas.factions.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            vec!["USA"],
        );
        assert_eq!(
            tc.factions.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            vec!["RGF", "PLA"],
        );
    }

    #[test]
    fn test_multiple_levels() {
        let sheet = "\
,,,,,,
,Skorpo,,,,,
,,Skorpo_RAAS_v1,USA,,1st Infantry Division,Team1 / Team2
,Yehorivka,,,,,
,,Yehorivka_RAAS_v1,RGF,,49th Combined Arms Army,Team1 / Team2
";
        let index = parse(sheet);
        assert_eq!(index.len(), 2);
        assert_eq!(index.layer_count(), 2);
        assert_eq!(index.get("Skorpo").unwrap().layers["Skorpo_RAAS_v1"].factions.len(), 1);
        assert_eq!(index.get("Yehorivka").unwrap().layers["Yehorivka_RAAS_v1"].factions.len(), 1);
    }

    #[test]
    fn test_unknown_team_label_is_fatal() {
        let sheet = "\
,,,,,,
,Skorpo,,,,,
,,Skorpo_RAAS_v1,USA,,1st Infantry Division,Team3
";
        let err = parse_layer_index_from_reader(sheet.as_bytes()).unwrap_err();
        match err {
            ParseError::MalformedTeamLabel { label, line } => {
                assert_eq!(label, "Team3");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_team_label_is_fatal() {
        let sheet = "\
,,,,,,
,Skorpo,,,,,
,,Skorpo_RAAS_v1,USA,,1st Infantry Division,
";
        let err = parse_layer_index_from_reader(sheet.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::MalformedTeamLabel { ref label, .. } if label.is_empty()));
    }

    #[test]
    fn test_layers_without_a_level_are_dropped() {
        let sheet = "\
,,,,,,
,,Orphan_RAAS_v1,USA,,1st Infantry Division,Team1
,Skorpo,,,,,
,,Skorpo_RAAS_v1,RGF,,49th Combined Arms Army,Team1 / Team2
";
        let index = parse(sheet);
        assert_eq!(index.len(), 1);
        let level = index.get("Skorpo").unwrap();
        assert!(!level.layers.contains_key("Orphan_RAAS_v1"));
        assert!(level.layers.contains_key("Skorpo_RAAS_v1"));
    }

    #[test]
    fn test_empty_sheet_yields_empty_index() {
        assert!(parse(",,,,,,\n").is_empty());
        assert!(parse("title only, no sentinel\n").is_empty());
        assert!(parse("").is_empty());
    }
}

//! Rotation CLI
//!
//! Layer availability sheet → rotation list. Parses the sheet, applies the
//! requested filters, and writes one rotation per line (or JSON) to stdout
//! or a file. Progress and summaries go to stderr so stdout stays a clean
//! data stream.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rotation_core::{generate_rotations, parse_layer_index, RotationFilters};

#[derive(Parser)]
#[command(name = "rotation_cli")]
#[command(about = "Generate faction rotations from a layer availability sheet", long_about = None)]
struct Cli {
    /// Input layer sheet CSV
    #[arg(long, default_value = "layerinfo.csv")]
    input: PathBuf,

    /// Write rotations to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Comma-separated map names to include
    #[arg(long, value_delimiter = ',')]
    maps: Option<Vec<String>>,

    /// Comma-separated layer names to include
    #[arg(long, value_delimiter = ',')]
    layers: Option<Vec<String>>,

    /// Comma-separated game modes to include (e.g. "RAAS,Invasion")
    #[arg(long = "game-modes", value_delimiter = ',')]
    game_modes: Option<Vec<String>>,

    /// Comma-separated faction names to include
    #[arg(long, value_delimiter = ',')]
    factions: Option<Vec<String>>,

    /// Emit the rotation list as pretty JSON instead of plain lines
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let index = parse_layer_index(&cli.input)
        .with_context(|| format!("Failed to parse layer sheet: {}", cli.input.display()))?;
    log::debug!("Loaded {} maps, {} layers", index.len(), index.layer_count());

    let filters = RotationFilters {
        maps: cli.maps,
        layers: cli.layers,
        game_modes: cli.game_modes,
        factions: cli.factions,
    };
    let rotations = generate_rotations(&index, &filters);

    let body = if cli.json {
        let mut json =
            serde_json::to_string_pretty(&rotations).context("Failed to serialize rotations")?;
        json.push('\n');
        json
    } else {
        rotations.iter().map(|rotation| format!("{rotation}\n")).collect()
    };

    match &cli.out {
        Some(path) => {
            fs::write(path, body)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            eprintln!("✅ {} rotations written to {}", rotations.len(), path.display());
        }
        None => {
            print!("{body}");
            eprintln!("✅ {} rotations", rotations.len());
        }
    }

    Ok(())
}

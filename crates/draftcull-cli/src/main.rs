//! draftcull CLI - overlap and culling reports for drawing scenes
//!
//! Reads a scene of named boxes and reports which ones overlap, either
//! pairwise or against a single view box, and formats dimension values the
//! way drawing annotations print them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use draftcull_obb::{overlapping_pairs, overlapping_with};
use draftcull_units::{format_distance, FormatOptions, UnitSettings};

mod logger;
mod scene;

use scene::Scene;

#[derive(Parser)]
#[command(name = "draftcull")]
#[command(about = "Box overlap and culling for technical drawings", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List overlapping objects in a scene file
    Overlaps {
        /// Scene file (.json)
        scene: PathBuf,
        /// Only list objects overlapping the named view box
        #[arg(long)]
        view: Option<String>,
    },
    /// Format a distance for a drawing annotation
    Format {
        /// Value in scene units
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Unit settings file (.toml); metric adaptive when omitted
        #[arg(long)]
        units: Option<PathBuf>,
        /// Format an area instead of a length
        #[arg(long)]
        area: bool,
        /// Print unit suffixes
        #[arg(long)]
        show_units: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    match cli.command {
        Commands::Overlaps { scene, view } => {
            let text = fs::read_to_string(&scene)
                .with_context(|| format!("reading {}", scene.display()))?;
            let scene = Scene::from_json(&text)?;
            for line in overlap_report(&scene, view.as_deref())? {
                println!("{line}");
            }
        }
        Commands::Format {
            value,
            units,
            area,
            show_units,
        } => {
            let settings = match units {
                Some(path) => load_units(&path)?,
                None => UnitSettings::default(),
            };
            let options = FormatOptions {
                area,
                hide_units: !show_units,
            };
            println!("{}", format_distance(value, &settings, options));
        }
    }

    Ok(())
}

/// One line per overlapping pair (`a\tb`), or one name per object overlapping
/// the view box when `view` is given.
fn overlap_report(scene: &Scene, view: Option<&str>) -> Result<Vec<String>> {
    let boxes = scene.boxes()?;
    log::info!("loaded {} objects", boxes.len());

    let lines = match view {
        Some(name) => {
            let view = scene
                .index_of(name)
                .with_context(|| format!("no object named {name:?} in scene"))?;
            overlapping_with(&boxes[view], &boxes)
                .into_iter()
                .filter(|&i| i != view)
                .map(|i| scene.objects[i].name.clone())
                .collect()
        }
        None => overlapping_pairs(&boxes)
            .into_iter()
            .map(|(i, j)| format!("{}\t{}", scene.objects[i].name, scene.objects[j].name))
            .collect(),
    };
    Ok(lines)
}

fn load_units(path: &Path) -> Result<UnitSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let settings: UnitSettings = toml::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    settings.validate()?;
    Ok(settings)
}

//! HAB CLI - run the lake bloom pipeline headlessly.
//!
//! Useful for eyeballing the filter/predict output and for piping the map
//! scene JSON into other tools without spinning up the dashboard.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use hab_core::labels::{distinct_depth_labels, distinct_origin_labels, distinct_regions};
use hab_core::{parse_lakes_csv, Observation};
use hab_model::LogLinearModel;
use hab_pipeline::{run_pipeline, Selection, NITROGEN_DEFAULT};

// Same embedded survey the dashboard ships with.
const LAKES_CSV: &str = include_str!("../../fixtures/lakes.csv");

#[derive(Parser)]
#[command(name = "hab-cli", version, about = "Lake bloom prediction toolkit")]
struct Cli {
    /// Path to a lake survey CSV (defaults to the embedded survey)
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the observed label domains (origins, depths, regions)
    Labels,

    /// Run filter + predict and print the map scene as JSON
    Predict {
        /// Nitrogen level to broadcast, in ug/L
        #[arg(short, long, default_value_t = NITROGEN_DEFAULT)]
        nitrogen: f64,

        /// Origin labels to keep (repeatable; default: all observed)
        #[arg(long = "origin")]
        origins: Vec<String>,

        /// Depth labels to keep (repeatable; default: all observed)
        #[arg(long = "depth")]
        depths: Vec<String>,
    },
}

fn load_dataset(path: &Option<PathBuf>) -> anyhow::Result<Vec<Observation>> {
    let csv_data = match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => LAKES_CSV.to_string(),
    };
    let dataset = parse_lakes_csv(&csv_data).context("parsing lake survey CSV")?;
    log::info!("loaded {} lake observations", dataset.len());
    Ok(dataset)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let dataset = load_dataset(&cli.dataset)?;

    match cli.command {
        Command::Labels => {
            println!("origins: {}", distinct_origin_labels(&dataset).join(", "));
            println!("depths:  {}", distinct_depth_labels(&dataset).join(", "));
            println!("regions: {}", distinct_regions(&dataset).join(", "));
        }
        Command::Predict {
            nitrogen,
            origins,
            depths,
        } => {
            let mut selection = Selection::all(&dataset);
            selection.nitrogen_ugl = nitrogen;
            if !origins.is_empty() {
                selection.origins = origins.into_iter().collect::<BTreeSet<String>>();
            }
            if !depths.is_empty() {
                selection.depths = depths.into_iter().collect::<BTreeSet<String>>();
            }

            let model = LogLinearModel::embedded()?;
            let scene = run_pipeline(&dataset, &model, &selection)?;
            println!("{}", serde_json::to_string_pretty(&scene)?);
        }
    }
    Ok(())
}

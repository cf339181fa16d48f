//! Palletizer CLI

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use palletizer_cli::{
    load_multi_input, load_single_input, parse_dimensions, print_multi_report,
    print_single_report, ExportPayload, DEFAULT_EXPORT_FILE,
};
use palletizer_core::{Dimensions, LoadSummary, Solver};
use palletizer_layer::{
    MultiTypeAllocator, MultiTypeInput, SingleBoxInput, SingleBoxSolver, DEFAULT_BOX,
    DEFAULT_MAX_TOTAL_HEIGHT, DEFAULT_PALLET,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "palletizer")]
#[command(about = "Pallet loading calculator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a pallet with a single box size
    Single {
        /// Pallet dimensions as LxWxH in mm
        #[arg(long, value_parser = parse_dimensions, default_value_t = DEFAULT_PALLET)]
        pallet: Dimensions,

        /// Box dimensions as LxWxH in mm
        #[arg(long = "box", value_parser = parse_dimensions, default_value_t = DEFAULT_BOX)]
        box_dims: Dimensions,

        /// Maximum height of pallet plus load in mm
        #[arg(long, default_value_t = DEFAULT_MAX_TOTAL_HEIGHT)]
        max_height: f64,

        /// Only evaluate the LxW orientation
        #[arg(long)]
        no_rotation: bool,

        /// Overhang allowed past each pallet edge in mm
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        overhang: f64,

        /// Read the request from a JSON file instead of the flags above
        #[arg(short, long, conflicts_with_all = ["pallet", "box_dims", "max_height", "no_rotation", "overhang"])]
        input: Option<PathBuf>,

        /// Include positioned box instances in the export
        #[arg(long)]
        instances: bool,

        /// Write the JSON export (default file name if no path is given)
        #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_EXPORT_FILE)]
        output: Option<PathBuf>,
    },

    /// Load a pallet with several box types sharing the height budget
    Multi {
        /// JSON request file (the default two-type request if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Write the JSON export (default file name if no path is given)
        #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_EXPORT_FILE)]
        output: Option<PathBuf>,
    },

    /// Print the default requests as JSON
    Defaults,
}

#[derive(Serialize)]
struct Defaults {
    single: SingleBoxInput,
    multi: MultiTypeInput,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Single {
            pallet,
            box_dims,
            max_height,
            no_rotation,
            overhang,
            input,
            instances,
            output,
        } => {
            let input = match input {
                Some(path) => load_single_input(&path)?,
                None => SingleBoxInput::new(pallet, box_dims, max_height)
                    .with_rotation(!no_rotation)
                    .with_overhang(overhang),
            };

            let solver = SingleBoxSolver::new();
            let result = solver.solve(&input);
            print_single_report(&input, &result)?;

            let summary = LoadSummary::from(&result);
            if let Some(path) = output {
                let boxes = instances.then(|| solver.instantiate(&input, &result));
                let mut payload = ExportPayload::new(input, result.clone());
                if let Some(boxes) = boxes {
                    payload = payload.with_boxes(boxes);
                }
                payload.save_json(&path)?;
                println!("Layout saved to: {}", path.display());
            }

            if summary.error_count > 0 {
                bail!("{} validation error(s)", summary.error_count);
            }
        }

        Commands::Multi { input, output } => {
            let input = match input {
                Some(path) => load_multi_input(&path)?,
                None => MultiTypeInput::default(),
            };

            let result = MultiTypeAllocator::default_config().solve(&input);
            print_multi_report(&input, &result)?;

            let summary = LoadSummary::from(&result);
            if let Some(path) = output {
                ExportPayload::new(input, result).save_json(&path)?;
                println!("Layout saved to: {}", path.display());
            }

            if summary.error_count > 0 {
                bail!("{} validation error(s)", summary.error_count);
            }
        }

        Commands::Defaults => {
            let defaults = Defaults {
                single: SingleBoxInput::default(),
                multi: MultiTypeInput::default(),
            };
            println!("{}", serde_json::to_string_pretty(&defaults)?);
        }
    }

    Ok(())
}

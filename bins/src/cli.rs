use std::path::PathBuf;

use clap::{Parser, Subcommand};
use model::{field::Field, variant::Variant};

#[derive(Parser, Debug)]
#[command(name = "treningownik")]
#[command(about = "Track daily workouts", long_about = None)]
pub struct Cli {
    /// Layout to work on: `days` or `calendar`
    #[arg(short, long, global = true)]
    pub variant: Option<Variant>,

    /// Directory holding saved record sets
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show all days
    List,
    /// Mark a day as done, or undo it
    Toggle { index: usize },
    /// Set a field, e.g. `set 3 running.distance 5.2`
    Set {
        index: usize,
        /// running.distance, running.time, running.calories, strength.calories or note
        field: Field,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Sum the tracked metrics
    Totals,
    /// Write the days as CSV
    Export {
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

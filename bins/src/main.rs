mod cli;
mod view;

use std::fs;

use clap::Parser as _;
use cli::{Cli, Command};
use eyre::Context;
use ledger::Ledger;
use log::info;
use storage::Storage;

fn main() -> eyre::Result<()> {
    let env = env::Env::load()?;
    pretty_env_logger::init();
    color_eyre::install()?;

    let cli = Cli::parse();
    let variant = cli.variant.unwrap_or_else(|| env.variant());
    let data_dir = cli.data_dir.unwrap_or_else(|| env.data_dir().clone());

    info!("Using {} in {}", variant, data_dir.display());
    let ledger = Ledger::new(Storage::file(data_dir), variant);
    let days = &ledger.days;
    let mut set = days.initialize(time::today())?;

    match cli.command {
        Command::List => print!("{}", view::render(&set)?),
        Command::Toggle { index } => {
            if days.toggle(&mut set, index)? {
                print!("{}", view::render(&set)?);
            } else {
                println!("No day at {}", index);
            }
        }
        Command::Set {
            index,
            field,
            value,
        } => {
            if days.update_field(&mut set, index, field, value)? {
                print!("{}", view::render(&set)?);
            } else {
                println!("No day at {}", index);
            }
        }
        Command::Totals => println!("{}", view::render_totals(&days.aggregate(&set))),
        Command::Export { output } => {
            let csv = ledger.export_csv(&set)?;
            match output {
                Some(path) => {
                    fs::write(&path, format!("{}\n", csv))
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Exported {} days to {}", set.records().count(), path.display());
                }
                None => println!("{}", csv),
            }
        }
    }

    Ok(())
}

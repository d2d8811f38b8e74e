use clap::Parser;

use hangar_assets::BuyMode;
use hangar_cli::{Cli, Command, commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    hangar_observability::init(cli.log_format);

    let output = match cli.command {
        Command::State { captures, state_dir } => {
            tracing::info!(characters = captures.len(), dir = %state_dir.display(), "saving state");
            commands::state(&captures, &state_dir)?
        }
        Command::Check { captures, baseline } => {
            tracing::info!(characters = captures.len(), baseline = %baseline.path.display(), "checking");
            commands::check(&captures, &baseline.path)?
        }
        Command::Buy {
            captures,
            baseline,
            replenish,
        } => {
            let mode = if replenish {
                BuyMode::ReplenishFromOthers
            } else {
                BuyMode::Strict
            };
            tracing::info!(characters = captures.len(), ?mode, "building buy list");
            commands::buy(&captures, &baseline.path, mode)?
        }
        Command::Filter { capture, needle } => commands::filter(&capture, &needle)?,
    };

    println!("{output}");
    Ok(())
}

//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use hangar_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "hangar", version, about = "Track ship and hangar contents against a requirement baseline")]
pub struct Cli {
    /// Log output format (`pretty` or `json`).
    #[arg(long, env = "HANGAR_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Save the current state of every character as YAML.
    State {
        #[arg(required = true)]
        captures: Vec<PathBuf>,

        /// Directory receiving `{character}.yaml`.
        #[arg(long, env = "HANGAR_STATE_DIR", default_value = "states")]
        state_dir: PathBuf,
    },
    /// List what each container is missing.
    Check {
        #[arg(required = true)]
        captures: Vec<PathBuf>,

        #[command(flatten)]
        baseline: BaselineArgs,
    },
    /// Print a multibuy of everything missing across all characters.
    Buy {
        #[arg(required = true)]
        captures: Vec<PathBuf>,

        #[command(flatten)]
        baseline: BaselineArgs,

        /// Let surplus in one container cover deficits in another.
        #[arg(long)]
        replenish: bool,
    },
    /// Print the current state of containers whose label contains NEEDLE.
    Filter { capture: PathBuf, needle: String },
}

#[derive(Debug, Clone, Args)]
pub struct BaselineArgs {
    /// Requirement baseline document.
    #[arg(long = "baseline", env = "HANGAR_BASELINE")]
    pub path: PathBuf,
}

//! `hangar` command-line front end.
//!
//! Drives the asset engine from captured API responses on disk.

pub mod capture;
pub mod commands;
pub mod config;

pub use capture::Capture;
pub use config::{BaselineArgs, Cli, Command};

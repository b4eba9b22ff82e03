//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "parkpasses-constants")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Look up and export the Park Passes front-end constants")]
pub(crate) struct Cli {
    /// Config file with `[overrides]` applied before any lookup
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Log filter, e.g. `parkpasses_constants=trace`; `RUST_LOG` applies when omitted
    #[arg(long, global = true)]
    pub(crate) log: Option<String>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the value of a flat key (e.g. `GST`)
    Get { key: String },
    /// Print an error message (`NETWORK`, `SYSTEM` or `CRITICAL`)
    Error { kind: String },
    /// Print every constant as a JSON object
    Export {
        #[arg(short, long)]
        pretty: bool,
    },
    /// List the flat keys
    Keys,
}

mod args;
mod commands;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use parkpasses_constants::ConstantsRegistry;
use parkpasses_constants::config::load_config;
use parkpasses_logger::{LevelFilter, Logger};
use std::io::Write;
use tracing::{debug, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = Logger::builder(env!("CARGO_PKG_NAME")).level(LevelFilter::WARN);
    if let Some(filter) = &cli.log {
        logger = logger.env_filter(filter);
    }
    let _log = logger.init()?;

    let registry = match &cli.config {
        Some(path) => {
            let cfg = load_config(Some(path)).context("Critical: Configuration is malformed")?;
            info!(
                path = %path.display(),
                overrides = cfg.overrides.len(),
                "applying constants config"
            );
            ConstantsRegistry::builder().config(&cfg).build()?
        },
        None => {
            debug!("using built-in constants");
            ConstantsRegistry::global().clone()
        },
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Get { key } => commands::get(&registry, &key, &mut out)?,
        Command::Error { kind } => commands::error(&registry, &kind, &mut out)?,
        Command::Export { pretty } => commands::export(&registry, pretty, &mut out)?,
        Command::Keys => commands::keys(&registry, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

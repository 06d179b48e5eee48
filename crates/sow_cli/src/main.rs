use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing::{debug, info};

use sow_cli::cli::Cli;
use sow_cli::commands::{self, Session};
use sow_cli::config::Config;
use sow_cli::data::load_catalog;
use sow_cli::init_tracing;

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    init_tracing(cli.log_level.as_deref(), config.log_level.as_deref());
    debug!(?config, "configuration loaded");

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.clone());
    let catalog = load_catalog(catalog_path.as_deref())?;
    info!("sow starting | plants in catalog: {}.", catalog.len());

    commands::run(&Session::new(config, catalog), cli.command)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "❌ Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

//! Subcommand handlers.
//!
//! Each handler resolves defaults from the [`Config`], calls into `sow`, and prints a report
//! built by a `render_*` function so the text can be tested without a terminal.
pub mod calendar;
pub mod companions;
pub mod harvest;
pub mod plan;
pub mod visualize;

use anyhow::Result;
use sow::prelude::*;

use crate::cli::Command;
use crate::config::Config;

/// Loaded configuration and catalog shared by every command.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub catalog: Catalog,
}

impl Session {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self { config, catalog }
    }

    /// `plants` if any were given, otherwise the configured defaults.
    pub fn plants_or_default(&self, plants: &[String]) -> Vec<String> {
        if plants.iter().any(|p| !p.trim().is_empty()) {
            plants.to_vec()
        } else {
            self.config.default_plants.clone()
        }
    }
}

pub fn run(session: &Session, command: Command) -> Result<()> {
    match command {
        Command::Plan(plot) => plan::run(session, &plot),
        Command::Calendar {
            zone,
            start_date,
            plants,
        } => calendar::run(session, zone.as_deref(), start_date, &plants),
        Command::Companions { plant } => companions::run(session, plant.as_deref()),
        Command::Yield { plants, area } => harvest::run(session, &plants, area),
        Command::Visualize {
            format,
            output,
            plot,
        } => visualize::run(session, format, output.as_deref(), &plot),
    }
}

/// Short date as used in every report, e.g. "Apr 07".
pub fn short_date(date: chrono::NaiveDate) -> String {
    date.format("%b %d").to_string()
}

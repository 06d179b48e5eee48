//! CLI argument parsing for sow

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "sow")]
#[command(author, version, about = "Companion-aware garden planner", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Plant catalog (RON) to use instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Plot size and plant selection shared by `plan` and `visualize`.
#[derive(Args, Debug, Clone, Default)]
pub struct PlotArgs {
    /// Plot width in feet
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Plot height in feet
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Plot size as WIDTHxHEIGHT, overrides --width/--height
    #[arg(short, long, value_parser = parse_size)]
    pub size: Option<(u32, u32)>,

    /// Comma-separated plant kinds
    #[arg(short, long, value_delimiter = ',')]
    pub plants: Vec<String>,
}

impl PlotArgs {
    /// Resolved plot dimensions, `--size` first, then the individual flags, then `fallback`.
    pub fn dimensions(&self, fallback: (u32, u32)) -> (u32, u32) {
        self.size.unwrap_or((
            self.width.unwrap_or(fallback.0),
            self.height.unwrap_or(fallback.1),
        ))
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum VisualFormat {
    #[default]
    Ascii,
    Html,
    Png,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lay out plants on a plot
    Plan(PlotArgs),

    /// Show sowing and harvest dates for a hardiness zone
    Calendar {
        /// USDA hardiness zone, e.g. 6a
        #[arg(short, long)]
        zone: Option<String>,

        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(short = 'd', long, value_parser = parse_date)]
        start_date: Option<NaiveDate>,

        /// Comma-separated plant kinds, defaults to the whole catalog
        #[arg(short, long, value_delimiter = ',')]
        plants: Vec<String>,
    },

    /// Show companion planting relationships
    Companions {
        /// Plant to look up; omit for general principles
        #[arg(short, long)]
        plant: Option<String>,
    },

    /// Estimate yield and value for plant quantities
    Yield {
        /// Plants with quantities, e.g. "tomato:4,lettuce:8"
        #[arg(short, long, required = true)]
        plants: String,

        /// Available area in square feet
        #[arg(short, long, default_value = "100")]
        area: f32,
    },

    /// Plan a plot and render it
    Visualize {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = VisualFormat::Ascii)]
        format: VisualFormat,

        /// Output file; required for html
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        plot: PlotArgs,
    },
}

/// Parse `"10x12"` (case-insensitive `x`) into `(width, height)`.
pub fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let lower = s.trim().to_ascii_lowercase();
    let (w, h) = lower
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| format!("invalid dimension '{part}' in '{s}'"))
    };
    Ok((parse(w)?, parse(h)?))
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))
}

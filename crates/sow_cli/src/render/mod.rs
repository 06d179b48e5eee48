//! Text and HTML renderers for plans and reports.
pub mod ascii;
pub mod html;
pub mod table;

use colored::{Color, Colorize};
use sow::prelude::*;

pub use table::Table;

/// Glyph for an empty cell.
pub const EMPTY_SYMBOL: &str = "⬜";
/// Glyph for plants without a symbol of their own.
pub const DEFAULT_SYMBOL: &str = "🌱";

/// Whether rendered text carries terminal colour codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Styling {
    #[default]
    Terminal,
    /// No escape codes, for files.
    Plain,
}

impl Styling {
    pub fn paint(self, text: &str, color: Color) -> String {
        match self {
            Styling::Terminal => text.color(color).to_string(),
            Styling::Plain => text.to_string(),
        }
    }

    pub fn dim(self, text: &str) -> String {
        match self {
            Styling::Terminal => text.dimmed().to_string(),
            Styling::Plain => text.to_string(),
        }
    }
}

/// Terminal glyph for `kind`.
pub fn symbol_for<'a>(catalog: &'a Catalog, kind: &str) -> &'a str {
    catalog
        .get(kind)
        .and_then(|plant| plant.symbol.as_deref())
        .unwrap_or(DEFAULT_SYMBOL)
}

/// Kinds on the grid with their glyph and display name, in order of first appearance.
pub fn legend<'a>(grid: &'a Grid, catalog: &'a Catalog) -> Vec<(&'a str, &'a str, &'a str)> {
    let mut seen: Vec<&str> = Vec::new();
    for (_, kind) in grid.occupied() {
        if !seen.contains(&kind) {
            seen.push(kind);
        }
    }
    seen.into_iter()
        .map(|kind| (kind, symbol_for(catalog, kind), catalog.display_name(kind)))
        .collect()
}

//! Emoji grid rendering for terminals.
use std::fmt::Write;

use colored::Color;
use sow::prelude::*;

use super::{legend, symbol_for, Styling, EMPTY_SYMBOL};

/// Grid with single-digit coordinate rulers along the top and left edges.
pub fn render_grid(grid: &Grid, catalog: &Catalog) -> String {
    let mut out = String::from("  ");
    for x in 0..grid.width() {
        let _ = write!(out, "{} ", x % 10);
    }
    out.push('\n');
    for (y, row) in grid.rows().enumerate() {
        let _ = write!(out, "{} ", y % 10);
        for cell in row {
            let symbol = cell
                .as_deref()
                .map(|kind| symbol_for(catalog, kind))
                .unwrap_or(EMPTY_SYMBOL);
            out.push_str(symbol);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

pub fn render_legend(grid: &Grid, catalog: &Catalog, styling: Styling) -> String {
    let mut out = format!("{}\n", styling.paint("🔧 Legend:", Color::Cyan));
    for (_, symbol, name) in legend(grid, catalog) {
        let _ = writeln!(out, "{symbol} {name}");
    }
    out
}

/// Full terminal visualization: grid, legend and plot statistics.
pub fn render_plan(plan: &GardenPlan, catalog: &Catalog, styling: Styling) -> String {
    let mut out = format!(
        "{}\n\n",
        styling.paint("🏡 Garden Layout Visualization", Color::Blue)
    );
    out.push_str(&render_grid(&plan.grid, catalog));
    out.push('\n');
    out.push_str(&render_legend(&plan.grid, catalog, styling));
    out.push('\n');

    let area = u64::from(plan.width) * u64::from(plan.height);
    let kinds = plan.grid.cells_by_kind().len();
    let stats = [
        "📊 Garden Statistics:".to_string(),
        format!("Size: {}x{} feet ({area} sq ft)", plan.width, plan.height),
        format!("Plants: {kinds} different types"),
        format!("Space utilization: {:.1}%", plan.space_utilization_percent),
    ];
    for line in stats {
        let _ = writeln!(out, "{}", styling.dim(&line));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_catalog;

    #[test]
    fn grid_uses_catalog_symbols() {
        let catalog = load_catalog(None).unwrap();
        let mut grid = Grid::new(3, 2);
        grid.fill_square(glam::UVec2::new(0, 0), 1, "tomato");
        grid.fill_square(glam::UVec2::new(2, 1), 1, "mystery");
        let out = render_grid(&grid, &catalog);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "  0 1 2 ");
        assert_eq!(lines[1], "0 🍅 ⬜ ⬜ ");
        assert_eq!(lines[2], "1 ⬜ ⬜ 🌱 ");
    }

    #[test]
    fn legend_lists_kinds_in_grid_order() {
        let catalog = load_catalog(None).unwrap();
        let plan = plan_garden(10, 10, &["tomato", "basil"], &catalog).unwrap();
        let out = render_legend(&plan.grid, &catalog, Styling::Plain);
        assert!(out.contains("🍅 Tomatoes"));
        assert!(out.contains("🌿 Basil"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn plan_view_reports_statistics() {
        let catalog = load_catalog(None).unwrap();
        let plan = plan_garden(10, 10, &["tomato", "basil"], &catalog).unwrap();
        let out = render_plan(&plan, &catalog, Styling::Terminal);
        assert!(out.contains("Size: 10x10 feet (100 sq ft)"));
        assert!(out.contains("Plants: 2 different types"));
        assert!(out.contains("Space utilization: 10.0%"));
    }

    #[test]
    fn plain_styling_has_no_escape_codes() {
        let catalog = load_catalog(None).unwrap();
        let plan = plan_garden(10, 10, &["tomato", "basil"], &catalog).unwrap();
        let out = render_plan(&plan, &catalog, Styling::Plain);
        assert!(!out.contains('\u{1b}'));
        assert!(out.starts_with("🏡 Garden Layout Visualization\n\n"));
        assert!(out.contains("🔧 Legend:\n"));
        assert!(out.contains("🍅 Tomatoes\n"));
    }
}

use std::fmt::Write;

use anyhow::{Context, Result};
use colored::Colorize;
use sow::prelude::*;
use tracing::info;

use super::Session;
use crate::cli::PlotArgs;
use crate::render::{ascii, Styling, Table};

pub fn run(session: &Session, plot: &PlotArgs) -> Result<()> {
    let (width, height) = plot.dimensions(session.config.default_size());
    let plants = session.plants_or_default(&plot.plants);

    println!("{}", "🏡 Planning your garden...\n".blue());
    println!(
        "{}",
        format!(
            "Garden size: {width}x{height} feet ({} sq ft)",
            u64::from(width) * u64::from(height)
        )
        .dimmed()
    );
    println!("{}\n", format!("Plants requested: {}", plants.join(", ")).dimmed());

    let plan = plan_garden(width, height, plants.as_slice(), &session.catalog)
        .context("Unable to create garden plan")?;
    info!(
        "Plan ready | placed: {} | conflicts: {}.",
        plan.stats().units_placed,
        plan.conflicts.len()
    );
    print!("{}", render_plan_report(&plan, &session.catalog));
    Ok(())
}

/// Summary table, grid with legend, warnings and utilisation.
pub fn render_plan_report(plan: &GardenPlan, catalog: &Catalog) -> String {
    let mut out = format!("{}\n\n", "✅ Garden plan created successfully!".green());

    let mut table = Table::new(["Plant", "Quantity", "Space Used", "Expected Yield"]);
    for plant in &plan.summary {
        table.push_row([
            plant.name.clone(),
            plant.quantity_placed.to_string(),
            format!("{} sq ft", plant.space_used),
            format!("{} {}", plant.expected_yield_display(), plant.yield_unit),
        ]);
    }
    let _ = writeln!(out, "{table}");

    let _ = writeln!(out, "{}\n", "📍 Garden Layout:".blue());
    out.push_str(&ascii::render_grid(&plan.grid, catalog));
    out.push('\n');
    out.push_str(&ascii::render_legend(&plan.grid, catalog, Styling::Terminal));

    if !plan.warnings.is_empty() {
        let _ = writeln!(out, "\n{}", "⚠️  Companion Plant Warnings:".yellow());
        for warning in &plan.warnings {
            let _ = writeln!(out, "{}", format!("  • {warning}").yellow());
        }
    }

    if !plan.shortfalls.is_empty() {
        let _ = writeln!(out, "\n{}", "🚧 Ran out of room:".yellow());
        for shortfall in &plan.shortfalls {
            let _ = writeln!(
                out,
                "{}",
                format!(
                    "  • {}: placed {} of {}",
                    catalog.display_name(&shortfall.kind),
                    shortfall.placed,
                    shortfall.requested
                )
                .yellow()
            );
        }
    }

    if !plan.skipped_kinds.is_empty() {
        let _ = writeln!(
            out,
            "\n{}",
            format!("Skipped unknown plants: {}", plan.skipped_kinds.join(", ")).dimmed()
        );
    }

    let area = u64::from(plan.width) * u64::from(plan.height);
    let _ = writeln!(
        out,
        "\n{}",
        format!(
            "📊 Space utilization: {}/{area} sq ft ({:.1}%)",
            plan.space_used(),
            plan.space_utilization_percent
        )
        .dimmed()
    );
    out
}

use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use sow::prelude::*;

use super::Session;
use crate::cli::{PlotArgs, VisualFormat};
use crate::render::{ascii, html, Styling};

pub fn run(
    session: &Session,
    format: VisualFormat,
    output: Option<&Path>,
    plot: &PlotArgs,
) -> Result<()> {
    if format == VisualFormat::Png {
        bail!("PNG output is not supported; use --format ascii or --format html");
    }
    if format == VisualFormat::Html && output.is_none() {
        bail!("HTML output requires a file path (-o)");
    }

    println!("{}", "🎨 Generating garden visualization...\n".blue());
    let (width, height) = plot.dimensions(session.config.default_size());
    let plants = session.plants_or_default(&plot.plants);
    let plan = plan_garden(width, height, plants.as_slice(), &session.catalog)
        .context("Unable to create garden plan")?;

    let Some(path) = output else {
        print!(
            "{}",
            ascii::render_plan(&plan, &session.catalog, Styling::Terminal)
        );
        return Ok(());
    };
    let content = render_to_file(&plan, &session.catalog, format);
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "{} Visualization saved to {}",
        "✅".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}

/// Render without terminal colour codes.
pub fn render_to_file(plan: &GardenPlan, catalog: &Catalog, format: VisualFormat) -> String {
    match format {
        VisualFormat::Html => html::render_html(plan, catalog),
        _ => ascii::render_plan(plan, catalog, Styling::Plain),
    }
}

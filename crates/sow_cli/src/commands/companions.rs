use std::fmt::Write;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use sow::catalog::report::CompanionReport;
use sow::catalog::spacing_hint;
use sow::prelude::*;

use super::Session;
use crate::render::Table;

/// Kinds shown in the quick reference matrix.
pub const QUICK_MATRIX_KINDS: [&str; 6] = ["tomato", "basil", "lettuce", "carrots", "onion", "beans"];

pub fn run(session: &Session, plant: Option<&str>) -> Result<()> {
    let out = match plant {
        Some(plant) => {
            let report = companions_for(&session.catalog, plant)
                .with_context(|| format!("No companion data for '{plant}'"))?;
            render_plant_companions(&report)
        }
        None => render_principles(&session.catalog),
    };
    print!("{out}");
    Ok(())
}

fn paint(relationship: CompanionRelationship, text: &str) -> ColoredString {
    match relationship {
        CompanionRelationship::Excellent => text.green(),
        CompanionRelationship::Good => text.blue(),
        CompanionRelationship::Neutral => text.normal(),
        CompanionRelationship::Avoid => text.yellow(),
        CompanionRelationship::Bad => text.red(),
    }
}

fn heading(relationship: CompanionRelationship) -> Option<&'static str> {
    match relationship {
        CompanionRelationship::Excellent => Some("✨ Excellent Companions (plant together):"),
        CompanionRelationship::Good => Some("👍 Good Companions:"),
        CompanionRelationship::Neutral => None,
        CompanionRelationship::Avoid => Some("⚠️  Avoid Planting Near:"),
        CompanionRelationship::Bad => Some("🚫 Never Plant With:"),
    }
}

/// Companions of one plant by relationship, followed by its growing facts.
pub fn render_plant_companions(report: &CompanionReport<'_>) -> String {
    let plant = report.plant;
    let mut out = format!(
        "{}\n\n",
        format!("🤝 Companion Plants for {}", plant.name).blue()
    );

    if report.is_empty() {
        let _ = writeln!(
            out,
            "{}\n",
            "No companion data available for this plant.".yellow()
        );
    }
    for relationship in CompanionRelationship::ALL {
        let (Some(title), names) = (heading(relationship), report.names(relationship)) else {
            continue;
        };
        if names.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}", paint(relationship, title));
        for name in names {
            let _ = writeln!(out, "  {} {name}", paint(relationship, "●"));
        }
        out.push('\n');
    }

    let (spacing, spacing_note) = spacing_hint(plant.space_per_plant);
    let mut info = vec![
        "📝 Plant Information:".to_string(),
        format!("  Category: {}", plant.category),
        format!(
            "  Space needed: {} sq ft per plant ({spacing})",
            plant.space_per_plant
        ),
        format!("  Days to maturity: {} days", plant.maturity_days()),
    ];
    if let Some(note) = spacing_note {
        info.push(format!("  {note}"));
    }
    if let Some(notes) = &plant.notes {
        info.push(format!("  Notes: {notes}"));
    }
    for line in info {
        let _ = writeln!(out, "{}", line.dimmed());
    }
    out
}

fn matrix_cell(relationship: Option<CompanionRelationship>) -> &'static str {
    match relationship {
        None => "-",
        Some(CompanionRelationship::Excellent) => "++",
        Some(CompanionRelationship::Good) => "+",
        Some(CompanionRelationship::Neutral) => "·",
        Some(CompanionRelationship::Avoid) => "x",
        Some(CompanionRelationship::Bad) => "xx",
    }
}

/// Legend, family principles, families in the catalog and a quick reference matrix.
pub fn render_principles(catalog: &Catalog) -> String {
    let matrix = catalog.companions();
    let mut out = format!("{}\n\n", "🤝 Companion Planting Principles".blue());

    let _ = writeln!(out, "{}", "Legend:".cyan());
    for (relationship, description) in &matrix.legend {
        let label = relationship.as_str().to_uppercase();
        let _ = writeln!(out, "  {}: {description}", paint(*relationship, &label));
    }

    if !matrix.principles.is_empty() {
        let _ = writeln!(out, "\n{}", "General Principles:".cyan());
        for (family, principle) in &matrix.principles {
            let _ = writeln!(out, "\n{}", format!("{}:", family.to_uppercase()).green());
            let _ = writeln!(out, "  {}", principle.description);
            let _ = writeln!(
                out,
                "  {} {}",
                "Works well with:".blue(),
                principle.good_with.join(", ")
            );
            let _ = writeln!(
                out,
                "  {} {}",
                "Avoid with:".yellow(),
                principle.avoid_with.join(", ")
            );
        }
    }

    let _ = writeln!(out, "\n{}", "Plant Families:".cyan());
    let mut table = Table::new(["Family", "Plants"]);
    for (family, names) in families(catalog) {
        table.push_row([family, names.join(", ")]);
    }
    let _ = writeln!(out, "{table}");

    let quick = quick_matrix(catalog, &QUICK_MATRIX_KINDS);
    if !quick.kinds.is_empty() {
        let _ = writeln!(out, "{}", "Quick Reference Matrix:".cyan());
        let mut table = Table::new(std::iter::once(String::new()).chain(quick.names.clone()));
        for (name, row) in quick.names.iter().zip(&quick.cells) {
            table.push_row(
                std::iter::once(name.clone())
                    .chain(row.iter().map(|cell| matrix_cell(*cell).to_string())),
            );
        }
        let _ = writeln!(out, "{table}");
        let _ = writeln!(
            out,
            "{}",
            "++ excellent  + good  · neutral  x avoid  xx bad".dimmed()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::session;

    #[test]
    fn plant_report_groups_partners() {
        let session = session();
        let report = companions_for(&session.catalog, "tomato").unwrap();
        let out = render_plant_companions(&report);
        assert!(out.contains("Companion Plants for Tomatoes"));
        assert!(out.contains("Excellent Companions"));
        assert!(out.contains("Basil"));
        assert!(out.contains("Avoid Planting Near"));
        assert!(out.contains("Sweet Corn"));
        assert!(out.contains("Space needed: 4 sq ft per plant (2 feet apart)"));
    }

    #[test]
    fn principles_include_matrix_and_families() {
        let session = session();
        let out = render_principles(&session.catalog);
        assert!(out.contains("EXCELLENT"));
        assert!(out.contains("NIGHTSHADES:"));
        assert!(out.contains("Plant Families:"));
        assert!(out.contains("Quick Reference Matrix:"));
        assert!(out.contains("Green Beans"));
    }

    #[test]
    fn unknown_plant_is_an_error() {
        let session = session();
        assert!(run(&session, Some("okra")).is_err());
    }
}

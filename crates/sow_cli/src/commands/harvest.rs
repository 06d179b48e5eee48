use std::fmt::Write;

use anyhow::{Context, Result};
use colored::Colorize;
use sow::prelude::*;

use super::{short_date, Session};
use crate::render::Table;

pub fn run(session: &Session, plants: &str, area: f32) -> Result<()> {
    let parsed = parse_yield_requests(&session.catalog, plants);
    for kind in &parsed.skipped {
        println!("{}", format!("⚠️  Unknown plant: {kind}").yellow());
    }
    let today = chrono::Local::now().date_naive();
    let report = estimate_yield(&session.catalog, &parsed.requests, area, today)
        .context("Unable to estimate yield")?;
    print!("{}", render_yield(&report));
    Ok(())
}

fn money(value: f32) -> String {
    format!("${value:.2}")
}

/// Per-plant table, totals, capacity advice and the harvest timeline.
pub fn render_yield(report: &YieldReport) -> String {
    let mut out = format!("{}\n\n", "📊 Yield Estimation".blue());

    let mut table = Table::new([
        "Plant",
        "Qty",
        "Space",
        "Total Yield",
        "Yield/sq ft",
        "Est. Value",
        "Days",
    ]);
    for e in &report.entries {
        table.push_row([
            e.name.clone(),
            e.quantity.to_string(),
            format!("{} sq ft", e.space_needed),
            format!("{:.1} {}", e.total_yield, e.yield_unit),
            format!("{:.2}", e.yield_per_area),
            money(e.estimated_value),
            e.days_to_maturity.to_string(),
        ]);
    }
    let _ = writeln!(out, "{table}");

    let _ = writeln!(out, "{}", "📋 Summary:".cyan());
    let _ = writeln!(out, "  Total space required: {} sq ft", report.total_space);
    let _ = writeln!(out, "  Available space: {} sq ft", report.area);
    let _ = writeln!(
        out,
        "  Space utilization: {:.1}%",
        report.space_utilization_percent()
    );
    let _ = writeln!(out, "  Estimated total value: {}", money(report.total_value));
    let _ = writeln!(out, "  Value per sq ft: {}", money(report.value_per_area()));

    if report.is_over_capacity() {
        let _ = writeln!(out, "\n{}", "⚠️  Space Exceeded!".red());
        let _ = writeln!(
            out,
            "You need {:.1} more sq ft. Suggested reductions:",
            report.total_space - report.area
        );
        for cut in report.reductions() {
            let _ = writeln!(out, "  • {}: {} → {} plants", cut.name, cut.from, cut.to);
        }
    } else if !report.additions().is_empty() {
        let _ = writeln!(
            out,
            "\n{}",
            format!(
                "💡 You have {:.1} sq ft available. Consider adding:",
                report.extra_space()
            )
            .green()
        );
        for add in report.additions() {
            let _ = writeln!(out, "  • {} {} ({})", add.quantity, add.name, add.benefit);
        }
    }

    let _ = writeln!(out, "\n{}", "📅 Harvest Timeline:".cyan());
    for t in report.harvest_timeline() {
        let _ = writeln!(
            out,
            "  {}. {}: {} ({} days)",
            t.order,
            t.name,
            short_date(t.first_harvest),
            t.days_to_maturity
        );
    }
    out
}

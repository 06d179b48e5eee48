use std::fmt::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use sow::prelude::*;

use super::{short_date, Session};
use crate::render::Table;

pub fn run(
    session: &Session,
    zone: Option<&str>,
    start_date: Option<NaiveDate>,
    plants: &[String],
) -> Result<()> {
    let zone = zone.unwrap_or(session.config.default_zone.as_str());
    let start_date = start_date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let filter = (!plants.is_empty()).then_some(plants);

    let calendar = build_calendar(&session.catalog, zone, start_date, filter)
        .with_context(|| format!("Unable to build a calendar for zone {zone}"))?;
    print!("{}", render_calendar(&calendar));
    Ok(())
}

/// Zone header, planting table, month-by-month view and succession sowings.
pub fn render_calendar(calendar: &PlantingCalendar) -> String {
    let mut out = format!(
        "{}\n\n",
        format!("📅 Planting Calendar for Zone {}", calendar.zone_id).blue()
    );
    let _ = writeln!(
        out,
        "{}",
        format!(
            "Last frost: {} | First frost: {} | Growing season: {} days\n",
            short_date(calendar.last_frost),
            short_date(calendar.first_frost),
            calendar.zone.growing_season
        )
        .dimmed()
    );

    let mut table = Table::new(["Plant", "Plant Date", "Harvest Start", "Harvest End", "Notes"]);
    for entry in &calendar.entries {
        let mut notes = entry.notes.clone().unwrap_or_default();
        if entry.frost_adjusted {
            if !notes.is_empty() {
                notes.push_str("; ");
            }
            notes.push_str("sown early to beat the first frost");
        }
        table.push_row([
            entry.name.clone(),
            short_date(entry.plant_date),
            short_date(entry.harvest_start),
            short_date(entry.harvest_end),
            notes,
        ]);
    }
    let _ = writeln!(out, "{table}");

    let _ = writeln!(out, "{}", "📆 Monthly Planting Schedule:".cyan());
    for month in calendar.monthly_schedule() {
        let _ = writeln!(out, "  {}: {}", month.label().bold(), month.plants.join(", "));
    }

    let succession = calendar.succession_suggestions();
    if !succession.is_empty() {
        let _ = writeln!(out, "\n{}", "🔄 Succession Planting:".cyan());
        for s in succession {
            let _ = writeln!(
                out,
                "  • {}: sow again on {}",
                s.name,
                short_date(s.replant_date)
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::session;

    #[test]
    fn calendar_report_has_table_months_and_succession() {
        let session = session();
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let plants = vec!["tomato".to_string(), "lettuce".to_string()];
        let calendar = build_calendar(&session.catalog, "6a", start, Some(&plants)).unwrap();
        let out = render_calendar(&calendar);
        // 6a: last frost Apr 15. Lettuce two weeks before, tomatoes two weeks after.
        assert!(out.contains("Last frost: Apr 15"));
        assert!(out.contains("Lettuce"));
        assert!(out.contains("Apr 01"));
        assert!(out.contains("Apr 29"));
        assert!(out.contains("April"));
        assert!(out.contains("Lettuce: sow again on Apr 15"));
        assert!(!out.contains("Tomatoes: sow again"));
    }

    #[test]
    fn unknown_zone_fails() {
        let session = session();
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(run(&session, Some("13z"), Some(start), &[]).is_err());
    }
}

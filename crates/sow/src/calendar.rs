//! Planting calendars derived from hardiness-zone frost dates.
//!
//! Each plant's sowing date comes from its [`PlantSeason`] relative to the zone's last frost.
//! Crops whose harvest would run past the first autumn frost are pulled earlier when that
//! still leaves the sowing date after the last spring frost.
use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, warn};

use crate::catalog::{normalize_kind, Catalog, HardinessZone, KindId, PlantSeason, PlantSpec};
use crate::error::{Error, Result};

/// Days between successive sowings of a succession crop.
pub const SUCCESSION_INTERVAL_DAYS: u64 = 14;

#[derive(Clone, Debug, PartialEq)]
pub struct CalendarEntry {
    pub kind: KindId,
    pub name: String,
    pub plant_date: NaiveDate,
    pub harvest_start: NaiveDate,
    pub harvest_end: NaiveDate,
    pub notes: Option<String>,
    pub succession: bool,
    /// Whether the sowing date was moved to beat the first frost.
    pub frost_adjusted: bool,
}

/// Plants sown within one calendar month.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyPlanting {
    pub year: i32,
    pub month: u32,
    pub plants: Vec<String>,
}

impl MonthlyPlanting {
    /// Full month name, e.g. "April".
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SuccessionSuggestion {
    pub kind: KindId,
    pub name: String,
    pub replant_date: NaiveDate,
}

#[derive(Clone, Debug)]
pub struct PlantingCalendar {
    pub zone_id: String,
    pub zone: HardinessZone,
    pub start_date: NaiveDate,
    pub last_frost: NaiveDate,
    pub first_frost: NaiveDate,
    /// Sorted by sowing date; plants sharing a date keep catalog order.
    pub entries: Vec<CalendarEntry>,
}

impl PlantingCalendar {
    /// Plant names grouped by sowing month, earliest month first.
    pub fn monthly_schedule(&self) -> Vec<MonthlyPlanting> {
        let mut months: Vec<MonthlyPlanting> = Vec::new();
        for entry in &self.entries {
            let (year, month) = (entry.plant_date.year(), entry.plant_date.month());
            match months.last_mut() {
                Some(last) if last.year == year && last.month == month => {
                    last.plants.push(entry.name.clone());
                }
                _ => months.push(MonthlyPlanting {
                    year,
                    month,
                    plants: vec![entry.name.clone()],
                }),
            }
        }
        months
    }

    /// Second sowings for succession crops, two weeks after the first.
    pub fn succession_suggestions(&self) -> Vec<SuccessionSuggestion> {
        self.entries
            .iter()
            .filter(|e| e.succession)
            .filter_map(|e| {
                e.plant_date
                    .checked_add_days(Days::new(SUCCESSION_INTERVAL_DAYS))
                    .map(|replant_date| SuccessionSuggestion {
                        kind: e.kind.clone(),
                        name: e.name.clone(),
                        replant_date,
                    })
            })
            .collect()
    }
}

fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| Error::InvalidDate(format!("{date} shifted by {days} days")))
}

/// Sowing date for `season` before any frost adjustment.
pub fn season_plant_date(
    season: PlantSeason,
    last_frost: NaiveDate,
    start_date: NaiveDate,
) -> Result<NaiveDate> {
    match season {
        PlantSeason::EarlySpring => shift(last_frost, -14),
        PlantSeason::Spring => shift(last_frost, 7),
        PlantSeason::LateSpring => shift(last_frost, 14),
        PlantSeason::Summer | PlantSeason::Fall => Ok(start_date),
    }
}

fn plant_entry(
    kind: &str,
    plant: &PlantSpec,
    start_date: NaiveDate,
    last_frost: NaiveDate,
    first_frost: NaiveDate,
) -> Result<CalendarEntry> {
    let maturity = plant.maturity_days() as i64;
    let growing = maturity + plant.harvest_days() as i64;

    let mut plant_date = season_plant_date(plant.plant_season, last_frost, start_date)?;
    let mut frost_adjusted = false;
    let harvest_start = shift(plant_date, maturity)?;
    let harvest_end = shift(plant_date, growing)?;
    if harvest_end > first_frost && harvest_start.year() == first_frost.year() {
        let adjusted = shift(first_frost, -growing)?;
        if adjusted > last_frost {
            debug!("Moving '{kind}' sowing from {plant_date} to {adjusted} to beat the first frost.");
            plant_date = adjusted;
            frost_adjusted = true;
        }
    }

    Ok(CalendarEntry {
        kind: kind.to_owned(),
        name: plant.name.clone(),
        plant_date,
        harvest_start: shift(plant_date, maturity)?,
        harvest_end: shift(plant_date, growing)?,
        notes: plant.notes.clone(),
        succession: plant.succession,
        frost_adjusted,
    })
}

/// Build a calendar for `zone_id`, optionally limited to the kinds in `plants`.
///
/// Frost dates are taken in the year of `start_date`. Unknown kinds in `plants` are ignored
/// with a warning; if nothing is left the call fails with [`Error::NoValidPlants`].
pub fn build_calendar(
    catalog: &Catalog,
    zone_id: &str,
    start_date: NaiveDate,
    plants: Option<&[String]>,
) -> Result<PlantingCalendar> {
    let zone = catalog.zone(zone_id)?.clone();
    let year = start_date.year();
    let last_frost = zone.last_frost.in_year(year)?;
    let first_frost = zone.first_frost.in_year(year)?;

    let filter: Option<BTreeSet<KindId>> =
        plants.map(|list| list.iter().map(|p| normalize_kind(p)).collect());
    if let Some(filter) = &filter {
        for kind in filter.iter().filter(|k| catalog.get(k).is_none()) {
            warn!("Plant '{kind}' not found in catalog; leaving it out of the calendar.");
        }
    }

    let mut entries = catalog
        .plants()
        .filter(|(key, _)| filter.as_ref().is_none_or(|f| f.contains(key.as_str())))
        .map(|(key, plant)| plant_entry(key, plant, start_date, last_frost, first_frost))
        .collect::<Result<Vec<_>>>()?;
    if entries.is_empty() {
        return Err(Error::NoValidPlants);
    }
    entries.sort_by_key(|e| e.plant_date);

    Ok(PlantingCalendar {
        zone_id: zone_id.trim().to_owned(),
        zone,
        start_date,
        last_frost,
        first_frost,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::catalog::{CompanionMatrix, FrostDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn season_offsets_follow_last_frost() {
        let frost = date(2025, 4, 21);
        let start = date(2025, 6, 1);
        assert_eq!(
            season_plant_date(PlantSeason::EarlySpring, frost, start).unwrap(),
            date(2025, 4, 7)
        );
        assert_eq!(
            season_plant_date(PlantSeason::Spring, frost, start).unwrap(),
            date(2025, 4, 28)
        );
        assert_eq!(
            season_plant_date(PlantSeason::LateSpring, frost, start).unwrap(),
            date(2025, 5, 5)
        );
        assert_eq!(
            season_plant_date(PlantSeason::Fall, frost, start).unwrap(),
            start
        );
    }

    #[test]
    fn leap_day_frost_builds_in_common_year() {
        let plants: Vec<(KindId, PlantSpec)> = sample_catalog()
            .plants()
            .map(|(k, p)| (k.clone(), p.clone()))
            .collect();
        let zones = vec![(
            "10b".to_string(),
            HardinessZone::new(FrostDate::new(2, 29), FrostDate::new(12, 15), 290),
        )];
        let catalog = Catalog::try_new(plants, CompanionMatrix::new(), zones).unwrap();
        let cal = build_calendar(&catalog, "10b", date(2025, 1, 10), None).unwrap();
        assert_eq!(cal.last_frost, date(2025, 2, 28));
        let lettuce = cal.entries.iter().find(|e| e.kind == "lettuce").unwrap();
        assert_eq!(lettuce.plant_date, date(2025, 2, 14));
    }

    #[test]
    fn entries_are_sorted_by_plant_date() {
        let catalog = sample_catalog();
        let cal = build_calendar(&catalog, "6a", date(2025, 3, 1), None).unwrap();
        assert_eq!(cal.entries.len(), 5);
        assert_eq!(cal.entries[0].kind, "lettuce");
        assert_eq!(cal.entries[0].plant_date, date(2025, 4, 7));
        assert!(cal
            .entries
            .windows(2)
            .all(|w| w[0].plant_date <= w[1].plant_date));

        let tomato = cal.entries.iter().find(|e| e.kind == "tomato").unwrap();
        assert_eq!(tomato.plant_date, date(2025, 5, 5));
        assert_eq!(tomato.harvest_start, date(2025, 7, 24));
        assert_eq!(tomato.harvest_end, date(2025, 8, 23));
        assert!(!tomato.frost_adjusted);
    }

    fn fall_catalog() -> Catalog {
        let plants = vec![
            (
                "fennel".to_string(),
                PlantSpec::new("Fennel", "herb", 1.0, 1.0, "bulbs", 90).with_season(PlantSeason::Fall),
            ),
            (
                "parsnip".to_string(),
                PlantSpec::new("Parsnips", "root", 0.5, 1.0, "lbs", 200).with_season(PlantSeason::Fall),
            ),
        ];
        let zones = vec![(
            "6a".to_string(),
            HardinessZone::new(FrostDate::new(4, 21), FrostDate::new(10, 15), 177),
        )];
        Catalog::try_new(plants, CompanionMatrix::new(), zones).unwrap()
    }

    #[test]
    fn late_sowing_is_pulled_before_first_frost() {
        let catalog = fall_catalog();
        let cal = build_calendar(&catalog, "6a", date(2025, 8, 20), None).unwrap();
        let fennel = cal.entries.iter().find(|e| e.kind == "fennel").unwrap();
        // 90 days to maturity plus 14 days of harvest, ending on October 15th.
        assert!(fennel.frost_adjusted);
        assert_eq!(fennel.plant_date, date(2025, 7, 3));
        assert_eq!(fennel.harvest_end, date(2025, 10, 15));
    }

    #[test]
    fn harvest_in_the_next_year_is_left_alone() {
        let catalog = fall_catalog();
        let cal = build_calendar(&catalog, "6a", date(2025, 8, 20), None).unwrap();
        let parsnip = cal.entries.iter().find(|e| e.kind == "parsnip").unwrap();
        assert!(!parsnip.frost_adjusted);
        assert_eq!(parsnip.plant_date, date(2025, 8, 20));
        assert_eq!(parsnip.harvest_start.year(), 2026);
    }

    #[test]
    fn filter_limits_and_validates_selection() {
        let catalog = sample_catalog();
        let wanted = vec!["Basil".to_string(), "okra".to_string()];
        let cal = build_calendar(&catalog, "6a", date(2025, 3, 1), Some(&wanted)).unwrap();
        assert_eq!(cal.entries.len(), 1);
        assert_eq!(cal.entries[0].kind, "basil");

        let none = vec!["okra".to_string()];
        assert_eq!(
            build_calendar(&catalog, "6a", date(2025, 3, 1), Some(&none)).unwrap_err(),
            Error::NoValidPlants
        );
    }

    #[test]
    fn unknown_zone_fails() {
        let catalog = sample_catalog();
        assert_eq!(
            build_calendar(&catalog, "99z", date(2025, 3, 1), None).unwrap_err(),
            Error::UnknownZone("99z".into())
        );
    }

    #[test]
    fn monthly_schedule_groups_consecutive_months() {
        let catalog = sample_catalog();
        let cal = build_calendar(&catalog, "6a", date(2025, 3, 1), None).unwrap();
        let months = cal.monthly_schedule();
        let labels: Vec<String> = months.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["April", "May"]);
        assert_eq!(months[0].plants, vec!["Lettuce", "Basil", "Fennel", "Summer Squash"]);
        assert_eq!(months[1].plants, vec!["Tomatoes"]);
    }

    #[test]
    fn succession_crops_get_a_second_sowing() {
        let catalog = sample_catalog();
        let cal = build_calendar(&catalog, "6a", date(2025, 3, 1), None).unwrap();
        let suggestions = cal.succession_suggestions();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, "lettuce");
        assert_eq!(suggestions[0].replant_date, date(2025, 4, 21));
    }
}

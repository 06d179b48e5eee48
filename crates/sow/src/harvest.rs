//! Yield and value estimates for explicit plant quantities.
use chrono::{Days, NaiveDate};
use tracing::warn;

use crate::catalog::{normalize_kind, Catalog, KindId};
use crate::error::{Error, Result};

/// Extra space below which no filler crops are suggested.
pub const MIN_FILLER_SPACE: f32 = 4.0;

/// Quick crops offered for leftover space, with the reason to grow them.
pub const FILLER_CROPS: [(&str, &str); 5] = [
    ("radish", "Quick harvest (25 days)"),
    ("lettuce", "Continuous harvest"),
    ("basil", "High value herb"),
    ("spinach", "Nutrient dense"),
    ("carrots", "Good storage crop"),
];

/// An explicit quantity of one kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YieldRequest {
    pub kind: KindId,
    pub quantity: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedYieldRequests {
    pub requests: Vec<YieldRequest>,
    /// Entries naming kinds the catalog does not know.
    pub skipped: Vec<String>,
}

/// Parse `"tomato:4,lettuce:8"`.
///
/// A missing, zero or unparsable quantity counts as 1. Unknown kinds are skipped with a
/// warning and listed in [`ParsedYieldRequests::skipped`].
pub fn parse_yield_requests(catalog: &Catalog, input: &str) -> ParsedYieldRequests {
    let mut out = ParsedYieldRequests::default();
    for item in input.split(',') {
        let mut parts = item.splitn(2, ':');
        let kind = normalize_kind(parts.next().unwrap_or_default());
        if kind.is_empty() {
            continue;
        }
        let quantity = parts
            .next()
            .and_then(|q| q.trim().parse::<u32>().ok())
            .filter(|&q| q > 0)
            .unwrap_or(1);
        if catalog.get(&kind).is_none() {
            warn!("Unknown plant: {kind}, skipping.");
            out.skipped.push(kind);
            continue;
        }
        out.requests.push(YieldRequest { kind, quantity });
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub struct YieldEstimate {
    pub kind: KindId,
    pub name: String,
    pub quantity: u32,
    pub space_needed: f32,
    pub total_yield: f32,
    pub yield_unit: String,
    pub yield_per_area: f32,
    pub estimated_value: f32,
    pub days_to_maturity: u32,
}

/// Scaled-down quantity that fits the available area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuantityReduction {
    pub kind: KindId,
    pub name: String,
    pub from: u32,
    pub to: u32,
}

/// Quick crop that would fit into the leftover space.
#[derive(Clone, Debug, PartialEq)]
pub struct FillerSuggestion {
    pub kind: KindId,
    pub name: String,
    pub quantity: u32,
    pub benefit: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    /// 1-based harvest order.
    pub order: usize,
    pub name: String,
    pub days_to_maturity: u32,
    pub first_harvest: NaiveDate,
}

#[derive(Clone, Debug)]
pub struct YieldReport {
    pub entries: Vec<YieldEstimate>,
    /// Available area.
    pub area: f32,
    pub total_space: f32,
    pub total_value: f32,
    /// Day the plants are assumed to go in.
    pub today: NaiveDate,
    fillers: Vec<FillerSuggestion>,
}

impl YieldReport {
    pub fn space_utilization_percent(&self) -> f32 {
        if self.area > 0.0 {
            self.total_space / self.area * 100.0
        } else {
            0.0
        }
    }

    pub fn value_per_area(&self) -> f32 {
        if self.total_space > 0.0 {
            self.total_value / self.total_space
        } else {
            0.0
        }
    }

    pub fn is_over_capacity(&self) -> bool {
        self.total_space > self.area
    }

    pub fn extra_space(&self) -> f32 {
        (self.area - self.total_space).max(0.0)
    }

    /// Quantities scaled by `area / total_space`, only for entries that shrink.
    pub fn reductions(&self) -> Vec<QuantityReduction> {
        if !self.is_over_capacity() {
            return Vec::new();
        }
        let scale = self.area / self.total_space;
        self.entries
            .iter()
            .filter_map(|e| {
                let to = (e.quantity as f32 * scale).floor() as u32;
                (to < e.quantity).then(|| QuantityReduction {
                    kind: e.kind.clone(),
                    name: e.name.clone(),
                    from: e.quantity,
                    to,
                })
            })
            .collect()
    }

    /// Filler crops for the leftover space; empty when over capacity or short on room.
    pub fn additions(&self) -> &[FillerSuggestion] {
        &self.fillers
    }

    /// Entries ordered by days to maturity, with their expected first harvest.
    pub fn harvest_timeline(&self) -> Vec<TimelineEntry> {
        let mut sorted: Vec<&YieldEstimate> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.days_to_maturity);
        sorted
            .into_iter()
            .enumerate()
            .map(|(i, e)| TimelineEntry {
                order: i + 1,
                name: e.name.clone(),
                days_to_maturity: e.days_to_maturity,
                first_harvest: self
                    .today
                    .checked_add_days(Days::new(e.days_to_maturity as u64))
                    .unwrap_or(NaiveDate::MAX),
            })
            .collect()
    }
}

fn filler_suggestions(catalog: &Catalog, extra_space: f32) -> Vec<FillerSuggestion> {
    if extra_space < MIN_FILLER_SPACE {
        return Vec::new();
    }
    FILLER_CROPS
        .iter()
        .filter_map(|&(kind, benefit)| {
            let plant = catalog.get(kind)?;
            let quantity = (extra_space / plant.space_per_plant).floor() as u32;
            (quantity > 0).then(|| FillerSuggestion {
                kind: kind.to_owned(),
                name: plant.name.clone(),
                quantity,
                benefit,
            })
        })
        .collect()
}

/// Estimate space, yield and market value for `requests` on `area` square feet.
pub fn estimate_yield(
    catalog: &Catalog,
    requests: &[YieldRequest],
    area: f32,
    today: NaiveDate,
) -> Result<YieldReport> {
    let mut entries = Vec::with_capacity(requests.len());
    for request in requests {
        let Some(plant) = catalog.get(&request.kind) else {
            warn!("Unknown plant: {}, skipping.", request.kind);
            continue;
        };
        let quantity = request.quantity as f32;
        let space_needed = plant.space_per_plant * quantity;
        let total_yield = plant.yield_per_plant * quantity;
        entries.push(YieldEstimate {
            kind: normalize_kind(&request.kind),
            name: plant.name.clone(),
            quantity: request.quantity,
            space_needed,
            total_yield,
            yield_unit: plant.yield_unit.clone(),
            yield_per_area: total_yield / space_needed,
            estimated_value: total_yield * plant.price(),
            days_to_maturity: plant.maturity_days(),
        });
    }
    if entries.is_empty() {
        return Err(Error::NoValidPlants);
    }

    let total_space: f32 = entries.iter().map(|e| e.space_needed).sum();
    let total_value: f32 = entries.iter().map(|e| e.estimated_value).sum();
    let fillers = if total_space > area {
        Vec::new()
    } else {
        filler_suggestions(catalog, area - total_space)
    };

    Ok(YieldReport {
        entries,
        area,
        total_space,
        total_value,
        today,
        fillers,
    })
}

//! Plant reference records.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Harvest window used when a plant does not declare one.
pub const DEFAULT_HARVEST_DURATION_DAYS: u32 = 14;

/// Days to maturity assumed for plants that declare zero.
pub const DEFAULT_DAYS_TO_MATURITY: u32 = 60;

/// Market price per yield unit assumed when a plant has none.
pub const DEFAULT_PRICE_PER_UNIT: f32 = 2.0;

/// When in the year a plant goes into the ground, relative to the local frost dates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlantSeason {
    /// Two weeks before the last frost.
    EarlySpring,
    /// One week after the last frost.
    #[default]
    Spring,
    /// Two weeks after the last frost.
    LateSpring,
    /// Sown on the calendar start date.
    Summer,
    /// Sown on the calendar start date.
    Fall,
}

/// Immutable facts about one plant kind.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct PlantSpec {
    /// Display name, e.g. "Tomatoes".
    pub name: String,
    /// Family or category tag, e.g. "nightshade".
    pub category: String,
    /// Footprint per individual plant in area units (sq ft).
    pub space_per_plant: f32,
    /// Expected yield per individual plant, in `yield_unit`.
    pub yield_per_plant: f32,
    pub yield_unit: String,
    pub days_to_maturity: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub harvest_duration: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub plant_season: PlantSeason,
    /// Whether the crop is worth re-sowing every couple of weeks.
    #[cfg_attr(feature = "serde", serde(default))]
    pub succession: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price_per_unit: Option<f32>,
    /// Glyph used by terminal renderers.
    #[cfg_attr(feature = "serde", serde(default))]
    pub symbol: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: Option<String>,
}

impl PlantSpec {
    /// Create a plant record with the required fields; optional fields start unset.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        space_per_plant: f32,
        yield_per_plant: f32,
        yield_unit: impl Into<String>,
        days_to_maturity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            space_per_plant,
            yield_per_plant,
            yield_unit: yield_unit.into(),
            days_to_maturity,
            harvest_duration: None,
            plant_season: PlantSeason::default(),
            succession: false,
            price_per_unit: None,
            symbol: None,
            notes: None,
        }
    }

    pub fn with_season(mut self, season: PlantSeason) -> Self {
        self.plant_season = season;
        self
    }

    pub fn with_harvest_duration(mut self, days: u32) -> Self {
        self.harvest_duration = Some(days);
        self
    }

    pub fn with_succession(mut self, succession: bool) -> Self {
        self.succession = succession;
        self
    }

    pub fn with_price_per_unit(mut self, price: f32) -> Self {
        self.price_per_unit = Some(price);
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Days from sowing to first harvest, substituting the default for zero.
    pub fn maturity_days(&self) -> u32 {
        if self.days_to_maturity == 0 {
            DEFAULT_DAYS_TO_MATURITY
        } else {
            self.days_to_maturity
        }
    }

    pub fn harvest_days(&self) -> u32 {
        self.harvest_duration.unwrap_or(DEFAULT_HARVEST_DURATION_DAYS)
    }

    pub fn price(&self) -> f32 {
        self.price_per_unit.unwrap_or(DEFAULT_PRICE_PER_UNIT)
    }
}

/// Spacing advice for a plant footprint, with an optional note for very large plants.
pub fn spacing_hint(space_per_plant: f32) -> (&'static str, Option<&'static str>) {
    let spacing = if space_per_plant <= 0.5 {
        "4 inches apart"
    } else if space_per_plant <= 1.0 {
        "12 inches apart"
    } else if space_per_plant <= 2.0 {
        "18 inches apart"
    } else if space_per_plant <= 4.0 {
        "2 feet apart"
    } else {
        "3+ feet apart"
    };
    let note = (space_per_plant > 4.0).then_some("Requires significant space");
    (spacing, note)
}

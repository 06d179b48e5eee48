//! Static reference data: plants, companion relationships and hardiness zones.
//!
//! A [`Catalog`] is built once (usually by deserializing a catalog file in the CLI) and then
//! passed by reference into the planner, calendar and yield estimators. The planner only
//! depends on the narrow [`CatalogProvider`] trait, so tests and embedders can supply their
//! own lookup tables.
use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Error, Result};

pub mod companion;
pub mod plant;
pub mod report;
pub mod zone;

pub use companion::{CompanionMatrix, CompanionRelationship, FamilyPrinciple};
pub use plant::{spacing_hint, PlantSeason, PlantSpec};
pub use zone::{FrostDate, HardinessZone};

pub type KindId = String;

/// Canonical form of a user-supplied kind identifier (trimmed, ASCII lowercase).
pub fn normalize_kind(kind: &str) -> KindId {
    kind.trim().to_ascii_lowercase()
}

/// Read-only lookups the placement engine needs from its reference data.
///
/// Kind ids passed in are expected to be normalized with [`normalize_kind`].
pub trait CatalogProvider {
    /// Plant facts for `kind`, if the kind is known.
    fn lookup(&self, kind: &str) -> Option<&PlantSpec>;

    /// Symmetric relationship between two kinds, `Neutral` when unrecorded.
    fn companion_relationship(&self, a: &str, b: &str) -> CompanionRelationship;

    /// Display name for `kind`, falling back to the id itself.
    fn display_name<'a>(&'a self, kind: &'a str) -> &'a str {
        self.lookup(kind).map(|p| p.name.as_str()).unwrap_or(kind)
    }
}

/// Footprint needed by a number of plants of one kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpaceRequirement {
    pub space_per_plant: f32,
    pub total_space: f32,
    pub quantity: u32,
}

/// In-memory catalog of plants, companion relationships and hardiness zones.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    plants: BTreeMap<KindId, PlantSpec>,
    companions: CompanionMatrix,
    zones: BTreeMap<String, HardinessZone>,
}

impl Catalog {
    /// Build and validate a catalog. Plant keys are normalized.
    pub fn try_new(
        plants: impl IntoIterator<Item = (KindId, PlantSpec)>,
        companions: CompanionMatrix,
        zones: impl IntoIterator<Item = (String, HardinessZone)>,
    ) -> Result<Self> {
        let mut normalized = BTreeMap::new();
        for (key, plant) in plants {
            let key = normalize_kind(&key);
            if key.is_empty() {
                return Err(Error::InvalidCatalog("empty plant key".into()));
            }
            if plant.name.trim().is_empty() {
                return Err(Error::InvalidCatalog(format!(
                    "plant '{key}' has an empty name"
                )));
            }
            if !plant.space_per_plant.is_finite() || plant.space_per_plant <= 0.0 {
                return Err(Error::InvalidCatalog(format!(
                    "plant '{key}' must have space_per_plant > 0, got {}",
                    plant.space_per_plant
                )));
            }
            if !plant.yield_per_plant.is_finite() || plant.yield_per_plant < 0.0 {
                return Err(Error::InvalidCatalog(format!(
                    "plant '{key}' must have a non-negative yield_per_plant"
                )));
            }
            if normalized.insert(key.clone(), plant).is_some() {
                return Err(Error::InvalidCatalog(format!("duplicate plant '{key}'")));
            }
        }

        for kind in companions.mentioned_kinds() {
            if !normalized.contains_key(kind.as_str()) {
                debug!("Companion matrix mentions '{kind}', which has no plant record.");
            }
        }

        Ok(Self {
            plants: normalized,
            companions,
            zones: zones.into_iter().collect(),
        })
    }

    /// Plant facts for `kind`; the key is normalized before lookup.
    pub fn get(&self, kind: &str) -> Option<&PlantSpec> {
        self.plants
            .get(kind)
            .or_else(|| self.plants.get(normalize_kind(kind).as_str()))
    }

    /// All plants in key order.
    pub fn plants(&self) -> impl Iterator<Item = (&KindId, &PlantSpec)> {
        self.plants.iter()
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn companions(&self) -> &CompanionMatrix {
        &self.companions
    }

    /// Hardiness zone by id (e.g. "6a").
    pub fn zone(&self, id: &str) -> Result<&HardinessZone> {
        self.zones
            .get(id.trim())
            .ok_or_else(|| Error::UnknownZone(id.to_string()))
    }

    pub fn zones(&self) -> impl Iterator<Item = (&String, &HardinessZone)> {
        self.zones.iter()
    }

    /// Find a plant by key, then by partial key or display-name match.
    pub fn find_by_name(&self, query: &str) -> Option<(&KindId, &PlantSpec)> {
        let needle = normalize_kind(query);
        if needle.is_empty() {
            return None;
        }
        if let Some(found) = self.plants.get_key_value(needle.as_str()) {
            return Some(found);
        }
        self.plants.iter().find(|(key, plant)| {
            plant.name.to_ascii_lowercase().contains(&needle) || key.contains(&needle)
        })
    }

    pub fn plants_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = (&'a KindId, &'a PlantSpec)> + 'a {
        self.plants
            .iter()
            .filter(move |(_, plant)| plant.category == category)
    }

    pub fn is_good_companion(&self, a: &str, b: &str) -> bool {
        self.companion_relationship(a, b).is_beneficial()
    }

    pub fn is_bad_companion(&self, a: &str, b: &str) -> bool {
        self.companion_relationship(a, b).is_harmful()
    }

    /// Space needed for `quantity` plants of `kind`.
    pub fn space_requirement(&self, kind: &str, quantity: u32) -> Result<SpaceRequirement> {
        let plant = self
            .get(kind)
            .ok_or_else(|| Error::UnknownKind(kind.to_string()))?;
        Ok(SpaceRequirement {
            space_per_plant: plant.space_per_plant,
            total_space: plant.space_per_plant * quantity as f32,
            quantity,
        })
    }
}

impl CatalogProvider for Catalog {
    fn lookup(&self, kind: &str) -> Option<&PlantSpec> {
        self.get(kind)
    }

    fn companion_relationship(&self, a: &str, b: &str) -> CompanionRelationship {
        self.companions.relationship(a, b)
    }
}

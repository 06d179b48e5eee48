//! Companion-planting reports derived from a [`Catalog`].
use std::collections::BTreeMap;

use crate::catalog::{normalize_kind, Catalog, CompanionRelationship, KindId, PlantSpec};
use crate::error::{Error, Result};

/// Companions of one plant, bucketed by relationship.
#[derive(Debug, Clone)]
pub struct CompanionReport<'a> {
    pub kind: KindId,
    pub plant: &'a PlantSpec,
    /// Display names per relationship, best relationship first.
    pub buckets: BTreeMap<CompanionRelationship, Vec<String>>,
}

impl CompanionReport<'_> {
    /// Names recorded with `relationship`, empty if none.
    pub fn names(&self, relationship: CompanionRelationship) -> &[String] {
        self.buckets
            .get(&relationship)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }
}

/// Bucket every recorded partner of `kind` by relationship.
pub fn companions_for<'a>(catalog: &'a Catalog, kind: &str) -> Result<CompanionReport<'a>> {
    let (key, plant) = catalog
        .find_by_name(kind)
        .ok_or_else(|| Error::UnknownKind(kind.to_string()))?;

    let mut buckets: BTreeMap<CompanionRelationship, Vec<String>> = BTreeMap::new();
    for (partner, relationship) in catalog.companions().partners_of(key) {
        let name = catalog
            .get(&partner)
            .map(|p| p.name.clone())
            .unwrap_or(partner);
        buckets.entry(relationship).or_default().push(name);
    }

    Ok(CompanionReport {
        kind: key.clone(),
        plant,
        buckets,
    })
}

/// Plant display names grouped by category.
pub fn families(catalog: &Catalog) -> BTreeMap<String, Vec<String>> {
    let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (_, plant) in catalog.plants() {
        out.entry(plant.category.clone())
            .or_default()
            .push(plant.name.clone());
    }
    out
}

/// Pairwise relationship grid for `kinds` that exist in the catalog.
///
/// The diagonal is `None`. Rows and columns follow the order of `kinds`.
#[derive(Debug, Clone)]
pub struct QuickMatrix {
    pub kinds: Vec<KindId>,
    pub names: Vec<String>,
    pub cells: Vec<Vec<Option<CompanionRelationship>>>,
}

pub fn quick_matrix(catalog: &Catalog, kinds: &[&str]) -> QuickMatrix {
    let present: Vec<(KindId, String)> = kinds
        .iter()
        .filter_map(|k| {
            let key = normalize_kind(k);
            catalog.get(&key).map(|plant| (key, plant.name.clone()))
        })
        .collect();

    let cells: Vec<Vec<Option<CompanionRelationship>>> = present
        .iter()
        .map(|(a, _)| {
            present
                .iter()
                .map(|(b, _)| (a != b).then(|| catalog.companions().relationship(a, b)))
                .collect()
        })
        .collect();

    let (kinds, names): (Vec<KindId>, Vec<String>) = present.into_iter().unzip();
    QuickMatrix {
        kinds,
        names,
        cells,
    }
}

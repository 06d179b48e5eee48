//! Per-call planting requests resolved against the catalog.
use crate::catalog::{normalize_kind, CatalogProvider, KindId, PlantSpec};

/// Footprint at or above which a plant counts as large.
pub const LARGE_FOOTPRINT: f32 = 4.0;
/// Footprint at or above which a plant counts as medium.
pub const MEDIUM_FOOTPRINT: f32 = 1.0;

pub const LARGE_QUANTITY: u32 = 2;
pub const MEDIUM_QUANTITY: u32 = 4;
pub const SMALL_QUANTITY: u32 = 8;

/// Target number of units for a plant with the given footprint.
pub fn default_quantity(footprint: f32) -> u32 {
    if footprint >= LARGE_FOOTPRINT {
        LARGE_QUANTITY
    } else if footprint >= MEDIUM_FOOTPRINT {
        MEDIUM_QUANTITY
    } else {
        SMALL_QUANTITY
    }
}

/// Edge length in cells of the square approximating `footprint`.
pub fn square_side(footprint: f32) -> u32 {
    (footprint.sqrt().ceil() as u32).max(1)
}

/// One kind to place, with its target and the running count of placed units.
#[derive(Debug, Clone)]
pub struct PlantRequest<'a> {
    pub kind: KindId,
    pub spec: &'a PlantSpec,
    /// Target number of units.
    pub quantity: u32,
    /// Footprint of one unit.
    pub footprint: f32,
    /// `footprint * quantity`.
    pub total_footprint: f32,
    /// Units actually placed so far.
    pub placed: u32,
}

impl<'a> PlantRequest<'a> {
    pub fn new(kind: impl Into<KindId>, spec: &'a PlantSpec) -> Self {
        let footprint = spec.space_per_plant;
        let quantity = default_quantity(footprint);
        Self {
            kind: kind.into(),
            spec,
            quantity,
            footprint,
            total_footprint: footprint * quantity as f32,
            placed: 0,
        }
    }

    pub fn side(&self) -> u32 {
        square_side(self.footprint)
    }

    pub fn remaining(&self) -> u32 {
        self.quantity.saturating_sub(self.placed)
    }

    pub fn is_complete(&self) -> bool {
        self.placed >= self.quantity
    }
}

/// Requests for the known kinds plus the normalized ids of the unknown ones.
#[derive(Debug, Clone, Default)]
pub struct ResolvedRequests<'a> {
    pub requests: Vec<PlantRequest<'a>>,
    pub skipped: Vec<KindId>,
}

impl ResolvedRequests<'_> {
    /// Sum of `total_footprint` across all requests.
    pub fn required_space(&self) -> f32 {
        self.requests.iter().map(|r| r.total_footprint).sum()
    }
}

/// Normalize and look up every requested kind. Order and duplicates are preserved.
pub fn resolve_requests<'a, P, S>(provider: &'a P, kinds: &[S]) -> ResolvedRequests<'a>
where
    P: CatalogProvider + ?Sized,
    S: AsRef<str>,
{
    let mut out = ResolvedRequests::default();
    for raw in kinds {
        let kind = normalize_kind(raw.as_ref());
        match provider.lookup(&kind) {
            Some(spec) => out.requests.push(PlantRequest::new(kind, spec)),
            None => out.skipped.push(kind),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    #[test]
    fn quantity_tiers_by_footprint() {
        assert_eq!(default_quantity(9.0), 2);
        assert_eq!(default_quantity(4.0), 2);
        assert_eq!(default_quantity(3.99), 4);
        assert_eq!(default_quantity(1.0), 4);
        assert_eq!(default_quantity(0.99), 8);
        assert_eq!(default_quantity(0.25), 8);
    }

    #[test]
    fn square_side_rounds_up() {
        assert_eq!(square_side(0.25), 1);
        assert_eq!(square_side(1.0), 1);
        assert_eq!(square_side(2.0), 2);
        assert_eq!(square_side(4.0), 2);
        assert_eq!(square_side(4.5), 3);
        assert_eq!(square_side(9.0), 3);
    }

    #[test]
    fn resolution_normalizes_and_skips_unknown() {
        let catalog = sample_catalog();
        let resolved = resolve_requests(&catalog, &[" Tomato", "unicorn-plant", "basil", "tomato"]);
        let kinds: Vec<&str> = resolved.requests.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, vec!["tomato", "basil", "tomato"]);
        assert_eq!(resolved.skipped, vec!["unicorn-plant".to_string()]);

        let tomato = &resolved.requests[0];
        assert_eq!(tomato.quantity, 2);
        assert_eq!(tomato.total_footprint, 8.0);
        assert_eq!(tomato.placed, 0);
        assert_eq!(tomato.side(), 2);
        assert_eq!(resolved.requests[1].quantity, 8);
        assert_eq!(resolved.required_space(), 8.0 + 2.0 + 8.0);
    }

    #[test]
    fn remaining_tracks_progress() {
        let catalog = sample_catalog();
        let mut req = PlantRequest::new("lettuce", catalog.get("lettuce").unwrap());
        assert_eq!(req.remaining(), 4);
        req.placed = 4;
        assert!(req.is_complete());
        assert_eq!(req.remaining(), 0);
    }
}

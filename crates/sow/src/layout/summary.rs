use crate::catalog::KindId;
use crate::layout::request::PlantRequest;

/// What a request actually produced.
#[derive(Clone, Debug, PartialEq)]
pub struct PlantSummary {
    pub kind: KindId,
    pub name: String,
    pub quantity_placed: u32,
    pub quantity_requested: u32,
    /// `footprint * quantity_placed`.
    pub space_used: f32,
    /// `yield_per_plant * quantity_placed`, unrounded.
    pub expected_yield: f32,
    pub yield_unit: String,
}

impl PlantSummary {
    /// Expected yield rounded to one decimal place.
    pub fn expected_yield_display(&self) -> f32 {
        (self.expected_yield * 10.0).round() / 10.0
    }

    pub fn is_partial(&self) -> bool {
        self.quantity_placed < self.quantity_requested
    }
}

/// One entry per request, in the order given.
pub fn summarize(requests: &[PlantRequest<'_>]) -> Vec<PlantSummary> {
    requests
        .iter()
        .map(|r| PlantSummary {
            kind: r.kind.clone(),
            name: r.spec.name.clone(),
            quantity_placed: r.placed,
            quantity_requested: r.quantity,
            space_used: r.footprint * r.placed as f32,
            expected_yield: r.spec.yield_per_plant * r.placed as f32,
            yield_unit: r.spec.yield_unit.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    #[test]
    fn uses_placed_not_requested_quantity() {
        let catalog = sample_catalog();
        let mut tomato = PlantRequest::new("tomato", catalog.get("tomato").unwrap());
        let mut basil = PlantRequest::new("basil", catalog.get("basil").unwrap());
        tomato.placed = 1;
        basil.placed = 8;

        let summary = summarize(&[tomato, basil]);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].name, "Tomatoes");
        assert_eq!(summary[0].quantity_placed, 1);
        assert_eq!(summary[0].quantity_requested, 2);
        assert!(summary[0].is_partial());
        assert_eq!(summary[0].space_used, 4.0);
        assert_eq!(summary[0].expected_yield, 10.0);
        assert_eq!(summary[1].space_used, 2.0);
        assert_eq!(summary[1].expected_yield, 4.0);
        assert_eq!(summary[1].yield_unit, "lbs");
        assert!(!summary[1].is_partial());
    }

    #[test]
    fn display_rounds_to_one_decimal() {
        let catalog = sample_catalog();
        let mut basil = PlantRequest::new("basil", catalog.get("basil").unwrap());
        basil.placed = 3;
        let summary = summarize(&[basil]);
        assert_eq!(summary[0].expected_yield, 1.5);

        let mut odd = summary[0].clone();
        odd.expected_yield = 2.345;
        assert_eq!(odd.expected_yield_display(), 2.3);
    }
}

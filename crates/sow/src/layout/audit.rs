//! Post-placement conflict audit.
use glam::UVec2;

use crate::catalog::{CatalogProvider, CompanionRelationship, KindId};
use crate::layout::grid::Grid;

/// Two harmful companions sharing an edge somewhere on the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct CompanionConflict {
    pub a: KindId,
    pub b: KindId,
    pub relationship: CompanionRelationship,
    /// First adjacent pair found, as `(cell of a, cell of b)`.
    pub at: (UVec2, UVec2),
    pub message: String,
}

/// Message shown for a conflicting pair of display names.
pub fn conflict_message(name_a: &str, name_b: &str) -> String {
    format!("{name_a} and {name_b} should not be planted adjacent to each other")
}

/// Every pair of harmful companions that touch orthogonally, pairs in sorted kind order.
pub fn audit_conflicts<P>(grid: &Grid, provider: &P) -> Vec<CompanionConflict>
where
    P: CatalogProvider + ?Sized,
{
    let by_kind = grid.cells_by_kind();
    let kinds: Vec<&str> = by_kind.keys().copied().collect();
    let mut conflicts = Vec::new();

    for (i, &a) in kinds.iter().enumerate() {
        for &b in &kinds[i + 1..] {
            let relationship = provider.companion_relationship(a, b);
            if !relationship.is_harmful() {
                continue;
            }
            let touching = by_kind[a].iter().find_map(|&cell| {
                grid.orthogonal_neighbors(cell)
                    .find(|&n| grid.get(n) == Some(b))
                    .map(|n| (cell, n))
            });
            if let Some(at) = touching {
                conflicts.push(CompanionConflict {
                    a: a.to_owned(),
                    b: b.to_owned(),
                    relationship,
                    at,
                    message: conflict_message(provider.display_name(a), provider.display_name(b)),
                });
            }
        }
    }
    conflicts
}

/// Conflict messages only.
pub fn audit<P>(grid: &Grid, provider: &P) -> Vec<String>
where
    P: CatalogProvider + ?Sized,
{
    audit_conflicts(grid, provider)
        .into_iter()
        .map(|c| c.message)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    fn grid_from(rows: &[&[Option<&str>]]) -> Grid {
        let mut grid = Grid::new(rows[0].len() as u32, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            for (x, kind) in row.iter().enumerate() {
                grid.set(UVec2::new(x as u32, y as u32), *kind);
            }
        }
        grid
    }

    #[test]
    fn adjacent_bad_pair_is_reported_once() {
        let catalog = sample_catalog();
        let grid = grid_from(&[
            &[Some("tomato"), Some("fennel"), Some("fennel")],
            &[Some("tomato"), Some("fennel"), None],
        ]);
        let warnings = audit(&grid, &catalog);
        assert_eq!(
            warnings,
            vec!["Fennel and Tomatoes should not be planted adjacent to each other".to_string()]
        );

        let conflicts = audit_conflicts(&grid, &catalog);
        assert_eq!(conflicts[0].relationship, CompanionRelationship::Bad);
        assert_eq!(conflicts[0].at, (UVec2::new(1, 0), UVec2::new(0, 0)));
    }

    #[test]
    fn diagonal_contact_is_not_a_conflict() {
        let catalog = sample_catalog();
        let grid = grid_from(&[&[Some("tomato"), None], &[None, Some("fennel")]]);
        assert!(audit(&grid, &catalog).is_empty());
    }

    #[test]
    fn beneficial_and_neutral_neighbours_pass() {
        let catalog = sample_catalog();
        let grid = grid_from(&[
            &[Some("tomato"), Some("basil"), Some("lettuce")],
            &[Some("squash"), Some("squash"), Some("basil")],
        ]);
        assert!(audit(&grid, &catalog).is_empty());
    }

    #[test]
    fn avoid_counts_as_harmful() {
        let catalog = sample_catalog();
        let grid = grid_from(&[&[Some("lettuce"), Some("fennel")]]);
        let conflicts = audit_conflicts(&grid, &catalog);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].a, "fennel");
        assert_eq!(conflicts[0].b, "lettuce");
        assert_eq!(conflicts[0].relationship, CompanionRelationship::Avoid);
    }

    #[test]
    fn separated_bad_pair_passes() {
        let catalog = sample_catalog();
        let grid = grid_from(&[&[Some("tomato"), None, Some("fennel")]]);
        assert!(audit(&grid, &catalog).is_empty());
    }

    #[test]
    fn unknown_kinds_fall_back_to_ids() {
        let catalog = sample_catalog();
        assert_eq!(
            conflict_message(catalog.display_name("marker"), catalog.display_name("tomato")),
            "marker and Tomatoes should not be planted adjacent to each other"
        );
    }
}

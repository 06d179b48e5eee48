//! Candidate scoring and position selection for a single unit.
use glam::{UVec2, Vec2};

use crate::catalog::CatalogProvider;
use crate::layout::grid::Grid;

/// A scored candidate must score strictly above this to be chosen.
pub const ACCEPTANCE_FLOOR: f32 = -1.0;

/// Distance from the grid centre at which the centrality bonus reaches zero.
pub const CENTRALITY_RADIUS: f32 = 5.0;

/// Chosen top-left cell for a unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub origin: UVec2,
    /// Score of the square, `None` when picked by the unscored fallback scan.
    pub score: Option<f32>,
}

/// `max(0, radius - |origin - centre|)`, with the centre at `(width / 2, height / 2)`.
pub fn centrality_bonus(origin: UVec2, width: u32, height: u32) -> f32 {
    let centre = Vec2::new(width as f32, height as f32) / 2.0;
    (CENTRALITY_RADIUS - origin.as_vec2().distance(centre)).max(0.0)
}

/// Sum of companion weights between `kind` and every occupied cell around the square.
pub fn neighbor_score<P>(grid: &Grid, origin: UVec2, side: u32, kind: &str, provider: &P) -> i32
where
    P: CatalogProvider + ?Sized,
{
    grid.surrounding(origin, side)
        .filter_map(|cell| grid.get(cell))
        .map(|other| provider.companion_relationship(kind, other).weight())
        .sum()
}

/// Companion score plus centrality bonus for placing `kind` at `origin`.
pub fn score_position<P>(grid: &Grid, origin: UVec2, side: u32, kind: &str, provider: &P) -> f32
where
    P: CatalogProvider + ?Sized,
{
    neighbor_score(grid, origin, side, kind, provider) as f32
        + centrality_bonus(origin, grid.width(), grid.height())
}

/// Every top-left cell whose square lies inside the grid, row-major (y outer, x inner).
pub fn origins(grid: &Grid, side: u32) -> impl Iterator<Item = UVec2> {
    let bounds = match (grid.width().checked_sub(side), grid.height().checked_sub(side)) {
        (Some(max_x), Some(max_y)) if side > 0 => Some(UVec2::new(max_x, max_y)),
        _ => None,
    };
    bounds.into_iter().flat_map(|max| {
        (0..=max.y).flat_map(move |y| (0..=max.x).map(move |x| UVec2::new(x, y)))
    })
}

/// Highest-scoring legal square above [`ACCEPTANCE_FLOOR`]; the first one found wins ties.
pub fn best_scored<P>(grid: &Grid, side: u32, kind: &str, provider: &P) -> Option<Candidate>
where
    P: CatalogProvider + ?Sized,
{
    let mut best: Option<Candidate> = None;
    let mut best_score = ACCEPTANCE_FLOOR;
    for origin in origins(grid, side) {
        if !grid.can_place(origin, side) {
            continue;
        }
        let score = score_position(grid, origin, side, kind, provider);
        if score > best_score {
            best_score = score;
            best = Some(Candidate {
                origin,
                score: Some(score),
            });
        }
    }
    best
}

/// First legal square in row-major order, ignoring scores.
pub fn first_fit(grid: &Grid, side: u32) -> Option<Candidate> {
    origins(grid, side)
        .find(|&origin| grid.can_place(origin, side))
        .map(|origin| Candidate {
            origin,
            score: None,
        })
}

/// Scored search, then the unscored fallback.
pub fn choose_position<P>(grid: &Grid, side: u32, kind: &str, provider: &P) -> Option<Candidate>
where
    P: CatalogProvider + ?Sized,
{
    best_scored(grid, side, kind, provider).or_else(|| first_fit(grid, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    #[test]
    fn centrality_peaks_at_centre() {
        assert_eq!(centrality_bonus(UVec2::new(5, 5), 10, 10), 5.0);
        assert_eq!(centrality_bonus(UVec2::new(0, 0), 10, 10), 0.0);
        let near = centrality_bonus(UVec2::new(4, 5), 10, 10);
        assert!((near - 4.0).abs() < 1e-6);
    }

    #[test]
    fn origins_are_row_major_and_bounded() {
        let grid = Grid::new(3, 2);
        let all: Vec<UVec2> = origins(&grid, 2).collect();
        assert_eq!(all, vec![UVec2::new(0, 0), UVec2::new(1, 0)]);
        assert_eq!(origins(&grid, 1).count(), 6);
        assert_eq!(origins(&grid, 3).count(), 0);
    }

    #[test]
    fn neighbor_score_uses_relationship_weights() {
        let catalog = sample_catalog();
        let mut grid = Grid::new(5, 5);
        grid.set(UVec2::new(0, 0), Some("basil"));
        grid.set(UVec2::new(2, 2), Some("fennel"));
        // tomato at (1,1) sees basil (+10) on the diagonal and fennel (-15) on the other.
        assert_eq!(neighbor_score(&grid, UVec2::new(1, 1), 1, "tomato", &catalog), -5);
        assert_eq!(neighbor_score(&grid, UVec2::new(4, 4), 1, "tomato", &catalog), 0);
    }

    #[test]
    fn empty_grid_prefers_the_centre() {
        let catalog = sample_catalog();
        let grid = Grid::new(10, 10);
        let pick = choose_position(&grid, 1, "basil", &catalog).unwrap();
        assert_eq!(pick.origin, UVec2::new(5, 5));
        assert_eq!(pick.score, Some(5.0));
    }

    #[test]
    fn first_found_wins_ties() {
        let catalog = sample_catalog();
        // The four middle cells of a 3x3 grid are equidistant from the centre.
        let mut grid = Grid::new(3, 3);
        let pick = best_scored(&grid, 1, "basil", &catalog).unwrap();
        assert_eq!(pick.origin, UVec2::new(1, 1));

        grid.set(UVec2::new(1, 1), Some("squash"));
        let pick = best_scored(&grid, 1, "basil", &catalog).unwrap();
        assert_eq!(pick.origin, UVec2::new(2, 1));
    }

    #[test]
    fn companions_pull_placement_toward_them() {
        let catalog = sample_catalog();
        let mut grid = Grid::new(20, 20);
        grid.set(UVec2::new(0, 0), Some("tomato"));
        let pick = choose_position(&grid, 1, "basil", &catalog).unwrap();
        assert_eq!(pick.origin, UVec2::new(1, 0));
        assert_eq!(pick.score, Some(10.0));
    }

    #[test]
    fn falls_back_when_every_candidate_is_below_the_floor() {
        let catalog = sample_catalog();
        let mut grid = Grid::new(2, 1);
        grid.set(UVec2::new(0, 0), Some("tomato"));
        // Only (1,0) is free; fennel next to tomato scores -15 + 4.5 centrality.
        assert!(best_scored(&grid, 1, "fennel", &catalog).is_none());
        let pick = choose_position(&grid, 1, "fennel", &catalog).unwrap();
        assert_eq!(pick.origin, UVec2::new(1, 0));
        assert_eq!(pick.score, None);
    }

    #[test]
    fn full_grid_has_no_candidate() {
        let catalog = sample_catalog();
        let mut grid = Grid::new(2, 2);
        grid.fill_square(UVec2::ZERO, 2, "squash");
        assert!(choose_position(&grid, 1, "basil", &catalog).is_none());
    }
}

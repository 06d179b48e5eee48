//! Occupancy grid for one planning call.
//!
//! A [`Grid`] is a fixed `width x height` array of unit cells. Each cell is either empty or
//! tagged with exactly one kind id; a multi-cell plant tags all of its cells with the same kind.
use std::collections::BTreeMap;

use glam::{IVec2, UVec2};

use crate::catalog::KindId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Option<KindId>>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![None; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, cell: UVec2) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    #[inline]
    fn index(&self, cell: UVec2) -> usize {
        (cell.y as usize) * (self.width as usize) + (cell.x as usize)
    }

    /// Kind occupying `cell`, or `None` when empty or out of bounds.
    pub fn get(&self, cell: UVec2) -> Option<&str> {
        if !self.contains(cell) {
            return None;
        }
        self.cells[self.index(cell)].as_deref()
    }

    pub fn is_occupied(&self, cell: UVec2) -> bool {
        self.get(cell).is_some()
    }

    /// Overwrite a single cell. Out-of-bounds cells are ignored.
    pub fn set(&mut self, cell: UVec2, kind: Option<&str>) {
        if self.contains(cell) {
            let idx = self.index(cell);
            self.cells[idx] = kind.map(str::to_owned);
        }
    }

    /// Whether a `side x side` square at `origin` fits inside the grid on empty cells only.
    pub fn can_place(&self, origin: UVec2, side: u32) -> bool {
        if side == 0 {
            return false;
        }
        let fits_x = origin.x.checked_add(side).is_some_and(|end| end <= self.width);
        let fits_y = origin.y.checked_add(side).is_some_and(|end| end <= self.height);
        if !fits_x || !fits_y {
            return false;
        }
        (origin.y..origin.y + side).all(|y| {
            (origin.x..origin.x + side).all(|x| self.cells[self.index(UVec2::new(x, y))].is_none())
        })
    }

    /// Tag every in-bounds cell of the square at `origin` with `kind`.
    pub fn fill_square(&mut self, origin: UVec2, side: u32, kind: &str) {
        for y in origin.y..origin.y.saturating_add(side).min(self.height) {
            for x in origin.x..origin.x.saturating_add(side).min(self.width) {
                let idx = self.index(UVec2::new(x, y));
                self.cells[idx] = Some(kind.to_owned());
            }
        }
    }

    /// In-bounds cells of the square at `origin` expanded by one cell on every side
    /// (diagonal corners included), row-major.
    pub fn surrounding(&self, origin: UVec2, side: u32) -> impl Iterator<Item = UVec2> + '_ {
        let start = origin.as_ivec2() - IVec2::ONE;
        let span = side as i32 + 2;
        (0..span).flat_map(move |dy| {
            (0..span).filter_map(move |dx| {
                let p = start + IVec2::new(dx, dy);
                if p.x < 0 || p.y < 0 {
                    return None;
                }
                let p = p.as_uvec2();
                self.contains(p).then_some(p)
            })
        })
    }

    /// Orthogonal (4-directional) in-bounds neighbours of `cell`.
    pub fn orthogonal_neighbors(&self, cell: UVec2) -> impl Iterator<Item = UVec2> + '_ {
        const OFFSETS: [IVec2; 4] = [IVec2::NEG_Y, IVec2::NEG_X, IVec2::X, IVec2::Y];
        OFFSETS.into_iter().filter_map(move |offset| {
            let p = cell.as_ivec2() + offset;
            if p.x < 0 || p.y < 0 {
                return None;
            }
            let p = p.as_uvec2();
            self.contains(p).then_some(p)
        })
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (UVec2, &str)> + '_ {
        let width = self.width.max(1);
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_deref().map(|kind| {
                let i = i as u32;
                (UVec2::new(i % width, i / width), kind)
            })
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Occupied cell coordinates grouped by kind, kinds in sorted order.
    pub fn cells_by_kind(&self) -> BTreeMap<&str, Vec<UVec2>> {
        let mut out: BTreeMap<&str, Vec<UVec2>> = BTreeMap::new();
        for (cell, kind) in self.occupied() {
            out.entry(kind).or_default().push(cell);
        }
        out
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<KindId>]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.area(), 12);
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.get(UVec2::new(3, 2)).is_none());
    }

    #[test]
    fn can_place_respects_bounds_and_occupancy() {
        let mut grid = Grid::new(4, 4);
        assert!(grid.can_place(UVec2::new(2, 2), 2));
        assert!(!grid.can_place(UVec2::new(3, 2), 2));
        assert!(!grid.can_place(UVec2::new(0, 0), 5));
        assert!(!grid.can_place(UVec2::new(0, 0), 0));

        grid.fill_square(UVec2::new(1, 1), 2, "tomato");
        assert!(!grid.can_place(UVec2::new(0, 0), 2));
        assert!(grid.can_place(UVec2::new(3, 0), 1));
        assert_eq!(grid.occupied_count(), 4);
        assert_eq!(grid.get(UVec2::new(2, 2)), Some("tomato"));
    }

    #[test]
    fn fill_square_clips_to_bounds() {
        let mut grid = Grid::new(3, 3);
        grid.fill_square(UVec2::new(2, 2), 2, "squash");
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn surrounding_includes_diagonals_and_clips() {
        let grid = Grid::new(5, 5);
        let inner: Vec<UVec2> = grid.surrounding(UVec2::new(1, 1), 1).collect();
        assert_eq!(inner.len(), 9);
        assert_eq!(inner[0], UVec2::new(0, 0));
        assert_eq!(inner[8], UVec2::new(2, 2));

        let corner: Vec<UVec2> = grid.surrounding(UVec2::new(0, 0), 2).collect();
        assert_eq!(corner.len(), 9);
        assert!(corner.iter().all(|p| p.x <= 2 && p.y <= 2));
    }

    #[test]
    fn orthogonal_neighbors_skip_out_of_bounds() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.orthogonal_neighbors(UVec2::new(0, 0)).count(), 2);
        assert_eq!(grid.orthogonal_neighbors(UVec2::new(1, 1)).count(), 4);
        assert_eq!(grid.orthogonal_neighbors(UVec2::new(2, 1)).count(), 3);
    }

    #[test]
    fn cells_by_kind_groups_in_sorted_order() {
        let mut grid = Grid::new(3, 2);
        grid.set(UVec2::new(0, 0), Some("tomato"));
        grid.set(UVec2::new(2, 1), Some("basil"));
        grid.set(UVec2::new(1, 0), Some("tomato"));
        grid.set(UVec2::new(9, 9), Some("ignored"));

        let groups = grid.cells_by_kind();
        let kinds: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(kinds, vec!["basil", "tomato"]);
        assert_eq!(groups["tomato"], vec![UVec2::new(0, 0), UVec2::new(1, 0)]);

        grid.set(UVec2::new(0, 0), None);
        assert_eq!(grid.occupied_count(), 2);
    }
}

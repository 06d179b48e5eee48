//! 3x3 partition of the grid.
//!
//! Zones are reported with the plan for renderers. They never restrict where a plant may go.
use glam::UVec2;

/// Number of zones along each axis.
pub const ZONES_PER_AXIS: u32 = 3;

/// Rectangular tile of the grid. `min` is inclusive, `max` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zone {
    /// Row-major index within the 3x3 partition.
    pub index: usize,
    pub min: UVec2,
    pub max: UVec2,
}

impl Zone {
    pub fn contains(&self, cell: UVec2) -> bool {
        cell.cmpge(self.min).all() && cell.cmplt(self.max).all()
    }

    pub fn size(&self) -> UVec2 {
        self.max - self.min
    }

    pub fn is_empty(&self) -> bool {
        self.size().x == 0 || self.size().y == 0
    }
}

/// Tile a `width x height` grid with `ceil(width/3) x ceil(height/3)` zones clamped to bounds.
///
/// Zones that would start beyond the grid edge (tiny grids) are dropped.
pub fn partition(width: u32, height: u32) -> Vec<Zone> {
    let tile = UVec2::new(
        width.div_ceil(ZONES_PER_AXIS),
        height.div_ceil(ZONES_PER_AXIS),
    );
    let bounds = UVec2::new(width, height);
    let mut zones = Vec::with_capacity((ZONES_PER_AXIS * ZONES_PER_AXIS) as usize);
    for zy in 0..ZONES_PER_AXIS {
        for zx in 0..ZONES_PER_AXIS {
            let min = (UVec2::new(zx, zy) * tile).min(bounds);
            let max = (min + tile).min(bounds);
            let zone = Zone {
                index: (zy * ZONES_PER_AXIS + zx) as usize,
                min,
                max,
            };
            if !zone.is_empty() {
                zones.push(zone);
            }
        }
    }
    zones
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_grid_splits_into_nine() {
        let zones = partition(9, 6);
        assert_eq!(zones.len(), 9);
        assert_eq!(zones[0].min, UVec2::ZERO);
        assert_eq!(zones[0].max, UVec2::new(3, 2));
        assert_eq!(zones[8].max, UVec2::new(9, 6));
    }

    #[test]
    fn uneven_grid_clamps_last_tiles() {
        let zones = partition(10, 10);
        assert_eq!(zones.len(), 9);
        assert_eq!(zones[2].min, UVec2::new(8, 0));
        assert_eq!(zones[2].size(), UVec2::new(2, 4));
        assert!(zones[4].contains(UVec2::new(5, 5)));
        assert!(!zones[4].contains(UVec2::new(8, 5)));
    }

    #[test]
    fn zones_cover_every_cell_once() {
        let (w, h) = (7, 5);
        let zones = partition(w, h);
        for y in 0..h {
            for x in 0..w {
                let hits = zones
                    .iter()
                    .filter(|z| z.contains(UVec2::new(x, y)))
                    .count();
                assert_eq!(hits, 1, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn tiny_grid_drops_empty_zones() {
        let zones = partition(1, 2);
        assert_eq!(zones.len(), 2);
        assert!(zones.iter().all(|z| !z.is_empty()));
    }
}

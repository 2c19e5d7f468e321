//! Ground-plane footprint rectangles in side-local cell coordinates

use serde::{Deserialize, Serialize};

/// Inclusive rectangle on the (lateral, along) ground plane.
///
/// `lateral` grows inland from the strait centre line, `along` runs with the
/// shore. Every land structure reports one of these so placement can be
/// tested once per candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    pub lateral_min: i32,
    pub lateral_max: i32,
    pub along_min: i32,
    pub along_max: i32,
}

impl Footprint {
    pub fn new(lateral: (i32, i32), along: (i32, i32)) -> Self {
        Self {
            lateral_min: lateral.0.min(lateral.1),
            lateral_max: lateral.0.max(lateral.1),
            along_min: along.0.min(along.1),
            along_max: along.0.max(along.1),
        }
    }

    /// Footprint shifted by a site offset
    pub fn translated(&self, lateral: i32, along: i32) -> Self {
        Self {
            lateral_min: self.lateral_min + lateral,
            lateral_max: self.lateral_max + lateral,
            along_min: self.along_min + along,
            along_max: self.along_max + along,
        }
    }

    /// Centre point in cells (may fall between cells)
    pub fn center(&self) -> (f32, f32) {
        (
            (self.lateral_min + self.lateral_max) as f32 * 0.5,
            (self.along_min + self.along_max) as f32 * 0.5,
        )
    }

    /// Largest distance from the centre to an edge, in cells
    pub fn half_extent(&self) -> f32 {
        let l = (self.lateral_max - self.lateral_min) as f32 * 0.5;
        let a = (self.along_max - self.along_min) as f32 * 0.5;
        l.max(a)
    }

    pub fn contains(&self, lateral: i32, along: i32) -> bool {
        lateral >= self.lateral_min && lateral <= self.lateral_max
            && along >= self.along_min && along <= self.along_max
    }

    /// Iterate every (lateral, along) cell of the footprint
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.lateral_min..=self.lateral_max)
            .flat_map(move |l| (self.along_min..=self.along_max).map(move |a| (l, a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_bounds() {
        let f = Footprint::new((5, -3), (2, 1));
        assert_eq!(f.lateral_min, -3);
        assert_eq!(f.lateral_max, 5);
        assert_eq!(f.along_min, 1);
        assert_eq!(f.along_max, 2);
    }

    #[test]
    fn test_center_and_half_extent() {
        let f = Footprint::new((0, 10), (-4, 4));
        assert_eq!(f.center(), (5.0, 0.0));
        assert_eq!(f.half_extent(), 5.0);
    }

    #[test]
    fn test_cells_covers_inclusive_rect() {
        let f = Footprint::new((0, 2), (0, 1));
        assert_eq!(f.cells().count(), 6);
        assert!(f.cells().all(|(l, a)| f.contains(l, a)));
    }

    #[test]
    fn test_translated() {
        let f = Footprint::new((0, 1), (0, 1)).translated(10, -5);
        assert!(f.contains(10, -5));
        assert!(f.contains(11, -4));
        assert!(!f.contains(0, 0));
    }
}

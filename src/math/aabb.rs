//! Axis-aligned bounding box over voxel grid cells

use crate::core::types::{IVec3, Vec3};

/// Axis-aligned bounding box defined by inclusive min and max grid cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aabb {
    pub min: IVec3,
    pub max: IVec3,
}

impl Aabb {
    /// Create AABB from inclusive min and max cells
    pub fn new(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    /// Degenerate AABB covering a single cell
    pub fn from_cell(cell: IVec3) -> Self {
        Self { min: cell, max: cell }
    }

    /// Number of cells along each axis
    pub fn size(&self) -> IVec3 {
        self.max - self.min + IVec3::ONE
    }

    /// Check if cell is inside AABB (inclusive)
    pub fn contains_cell(&self, c: IVec3) -> bool {
        c.x >= self.min.x && c.x <= self.max.x &&
        c.y >= self.min.y && c.y <= self.max.y &&
        c.z >= self.min.z && c.z <= self.max.z
    }

    /// Check if two AABBs share at least one cell
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Expand AABB to include cell
    pub fn expand(&mut self, cell: IVec3) {
        self.min = self.min.min(cell);
        self.max = self.max.max(cell);
    }

    /// Return merged AABB containing both
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// World-space extent, given the edge length of one cell
    pub fn world_extent(&self, cell_size: f32) -> (Vec3, Vec3) {
        (
            self.min.as_vec3() * cell_size,
            (self.max + IVec3::ONE).as_vec3() * cell_size,
        )
    }
}

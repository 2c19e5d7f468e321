//! Opaque / light stream partitioning

use super::set::VoxelSet;
use super::voxel::{Voxel, VoxelRole};

/// Voxels of one set split by render stream
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    pub opaque: VoxelSet,
    pub light: VoxelSet,
}

impl Partition {
    /// Total voxel count across both streams
    pub fn len(&self) -> usize {
        self.opaque.len() + self.light.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opaque.is_empty() && self.light.is_empty()
    }
}

/// Split a set by the role tag assigned at generation time.
///
/// Pure regrouping: positions and colors pass through untouched and the
/// relative order inside each stream matches the input.
pub fn partition(set: &VoxelSet) -> Partition {
    let (light, opaque): (Vec<Voxel>, Vec<Voxel>) =
        set.iter().partition(|v| v.role == VoxelRole::Light);
    Partition {
        opaque: VoxelSet::from_vec(opaque),
        light: VoxelSet::from_vec(light),
    }
}

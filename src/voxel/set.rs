//! Ordered voxel collections produced by one generator call

use std::collections::HashSet;

use crate::core::types::IVec3;
use crate::math::Aabb;

use super::voxel::{Voxel, VoxelRole};

/// Ordered, immutable sequence of voxels.
///
/// Order is stable across runs so two sets can be compared directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoxelSet {
    voxels: Vec<Voxel>,
}

impl VoxelSet {
    /// Empty set; renders as nothing
    pub fn empty() -> Self {
        Self { voxels: Vec::new() }
    }

    pub fn from_vec(voxels: Vec<Voxel>) -> Self {
        Self { voxels }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Voxel> {
        self.voxels.iter()
    }

    pub fn as_slice(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Number of voxels in the given stream
    pub fn count_role(&self, role: VoxelRole) -> usize {
        self.voxels.iter().filter(|v| v.role == role).count()
    }

    /// Set of occupied cells
    pub fn cells(&self) -> HashSet<IVec3> {
        self.voxels.iter().map(|v| v.cell).collect()
    }

    /// Copy reflected across x = 0, order preserved
    pub fn mirrored(&self) -> VoxelSet {
        self.voxels.iter().map(Voxel::mirrored).collect()
    }

    /// Grid bounds, or None for an empty set
    pub fn bounds(&self) -> Option<Aabb> {
        let mut iter = self.voxels.iter();
        let first = iter.next()?;
        let mut aabb = Aabb::from_cell(first.cell);
        for v in iter {
            aabb.expand(v.cell);
        }
        Some(aabb)
    }
}

impl FromIterator<Voxel> for VoxelSet {
    fn from_iter<I: IntoIterator<Item = Voxel>>(iter: I) -> Self {
        Self { voxels: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a VoxelSet {
    type Item = &'a Voxel;
    type IntoIter = std::slice::Iter<'a, Voxel>;

    fn into_iter(self) -> Self::IntoIter {
        self.voxels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::Rgb;

    fn sample() -> VoxelSet {
        VoxelSet::from_vec(vec![
            Voxel::opaque(IVec3::new(1, 0, 0), Rgb::hex(0xff0000)),
            Voxel::new(IVec3::new(-3, 4, 2), Rgb::hex(0xffff00), VoxelRole::Light),
            Voxel::opaque(IVec3::new(2, 1, -5), Rgb::hex(0x0000ff)),
        ])
    }

    #[test]
    fn test_empty_has_no_bounds() {
        let set = VoxelSet::empty();
        assert!(set.is_empty());
        assert!(set.bounds().is_none());
    }

    #[test]
    fn test_bounds() {
        let aabb = sample().bounds().unwrap();
        assert_eq!(aabb.min, IVec3::new(-3, 0, -5));
        assert_eq!(aabb.max, IVec3::new(2, 4, 2));
    }

    #[test]
    fn test_count_role() {
        let set = sample();
        assert_eq!(set.count_role(VoxelRole::Opaque), 2);
        assert_eq!(set.count_role(VoxelRole::Light), 1);
    }

    #[test]
    fn test_mirrored_twice_is_identity() {
        let set = sample();
        assert_ne!(set.mirrored(), set);
        assert_eq!(set.mirrored().mirrored(), set);
    }
}

//! Per-voxel instance record

use bytemuck::{Pod, Zeroable};

use crate::core::types::{Mat4, Quat, Vec3};
use crate::voxel::{Rgb, Voxel, VoxelSet, VOXEL_SCALE};

/// GPU-ready per-instance data (80 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    /// Cell transform, column major (offset 0)
    pub model: [[f32; 4]; 4],
    /// rgb in [0, 1]; w = 1.0 marks an emissive voxel (offset 64)
    pub color: [f32; 4],
}

impl InstanceData {
    pub fn new(model: Mat4, color: Rgb, emissive: bool) -> Self {
        let [r, g, b] = color.to_f32();
        Self {
            model: model.to_cols_array_2d(),
            color: [r, g, b, if emissive { 1.0 } else { 0.0 }],
        }
    }

    /// Unit cube at the voxel's grid position, scaled to one cell
    pub fn from_voxel(voxel: &Voxel) -> Self {
        let model = Mat4::from_scale_rotation_translation(
            Vec3::splat(VOXEL_SCALE),
            Quat::IDENTITY,
            voxel.position(),
        );
        Self::new(model, voxel.color, voxel.is_light())
    }

    /// Model matrix as a glam matrix
    #[inline]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    /// Translation column of the model matrix
    #[inline]
    pub fn translation(&self) -> Vec3 {
        let [x, y, z, _] = self.model[3];
        Vec3::new(x, y, z)
    }

    #[inline]
    pub fn is_emissive(&self) -> bool {
        self.color[3] > 0.5
    }
}

/// CPU-side instance array for one voxel set.
///
/// Capacity always equals the source set's length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstanceBuffer {
    instances: Vec<InstanceData>,
}

impl InstanceBuffer {
    pub fn from_instances(instances: Vec<InstanceData>) -> Self {
        Self { instances }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[InstanceData] {
        &self.instances
    }

    /// Raw bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

/// Lower a voxel set into instance records.
///
/// An empty set yields `None`: there is nothing to draw.
pub fn sync_instances(set: &VoxelSet) -> Option<InstanceBuffer> {
    if set.is_empty() {
        return None;
    }
    Some(InstanceBuffer::from_instances(
        set.iter().map(InstanceData::from_voxel).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IVec3;
    use crate::voxel::{Rgb, VoxelRole};

    #[test]
    fn test_instance_size() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 80);
    }

    #[test]
    fn test_transform_is_scaled_translation() {
        let v = Voxel::opaque(IVec3::new(8, 4, -16), Rgb::hex(0xff0000));
        let inst = InstanceData::from_voxel(&v);
        assert_eq!(inst.translation(), Vec3::new(1.0, 0.5, -2.0));
        assert_eq!(inst.model[0][0], VOXEL_SCALE);
        assert_eq!(inst.model[1][1], VOXEL_SCALE);
        assert_eq!(inst.model[2][2], VOXEL_SCALE);
        assert_eq!(inst.model[0][1], 0.0);
        assert_eq!(inst.color, [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_light_voxels_are_emissive() {
        let v = Voxel::new(IVec3::ZERO, Rgb::hex(0xfef08a), VoxelRole::Light);
        assert!(InstanceData::from_voxel(&v).is_emissive());
    }

    #[test]
    fn test_empty_set_has_no_buffer() {
        assert!(sync_instances(&VoxelSet::empty()).is_none());
    }

    #[test]
    fn test_capacity_matches_set() {
        let set: VoxelSet = (0..5)
            .map(|i| Voxel::opaque(IVec3::new(i, 0, 0), Rgb::hex(0x808080)))
            .collect();
        let buffer = sync_instances(&set).unwrap();
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.as_bytes().len(), 5 * 80);
        assert_eq!(buffer.instances()[3].translation().x, 3.0 * VOXEL_SCALE);
    }
}

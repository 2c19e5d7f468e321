//! Wind on the tower flag
//!
//! The flag's voxels never change; each frame produces fresh per-voxel
//! transforms that push cells out of the flag plane by a travelling wave
//! whose amplitude grows away from the pole.

use crate::core::types::{Mat4, Quat, Vec3};
use crate::generation::flag::FLAG_SCALE;
use crate::instancing::InstanceData;
use crate::voxel::{VoxelSet, VOXEL_SCALE};

/// World size of one flag cell
pub const FLAG_CELL: f32 = VOXEL_SCALE * FLAG_SCALE;

const WIND_SPEED: f32 = 4.0;

/// Out-of-plane displacement at `distance` world units from the pole
pub fn wave_offset(distance: f32, t: f32) -> f32 {
    let phase = t * WIND_SPEED;
    let amplitude = 0.05 + distance * 0.2;
    let wave = (distance * 8.0 - phase).sin() * amplitude;
    let flutter = (distance * 20.0 - phase * 2.0).sin() * amplitude * 0.2;
    wave + flutter
}

/// Per-voxel instances of a flag hoisted at `mount` at time `t`
pub fn flag_instances(flag: &VoxelSet, mount: Mat4, t: f32) -> Vec<InstanceData> {
    flag.iter()
        .map(|v| {
            let local = v.cell.as_vec3() * FLAG_CELL;
            let offset = wave_offset(local.x.abs(), t);
            let model = mount
                * Mat4::from_scale_rotation_translation(
                    Vec3::splat(FLAG_CELL),
                    Quat::IDENTITY,
                    local + Vec3::Z * offset,
                );
            InstanceData::new(model, v.color, v.is_light())
        })
        .collect()
}

//! Animated water surface
//!
//! Heights come from a closed-form sum of sines so any frame can be
//! evaluated directly. Colour bands follow the height: light crests,
//! deep troughs, turquoise in between.

use rayon::prelude::*;

use crate::core::types::{Mat4, Quat, Vec3};
use crate::generation::water::BASE;
use crate::instancing::InstanceData;
use crate::voxel::{Rgb, VoxelSet, VOXEL_SCALE};

/// Mean of [`wave_height`]; the generated surface sits at this level
pub const WAVE_REST: f32 = -0.3;

pub const CREST: Rgb = Rgb::hex(0x7dd3fc);
pub const TROUGH: Rgb = Rgb::hex(0x1e3a8a);

const CREST_ABOVE: f32 = -0.25;
const TROUGH_BELOW: f32 = -0.35;

/// Surface height at world `(x, z)` and time `t`
pub fn wave_height(x: f32, z: f32, t: f32) -> f32 {
    (x / 2.0 + t * 0.8).sin() * 0.1
        + (z / 1.5 + t * 0.5).cos() * 0.1
        + ((x + z) * 2.0 + t).sin() * 0.02
        + WAVE_REST
}

pub fn wave_color(height: f32) -> Rgb {
    if height > CREST_ABOVE {
        CREST
    } else if height < TROUGH_BELOW {
        TROUGH
    } else {
        BASE
    }
}

/// Instances of the water surface displaced for frame time `t`
pub fn surface_instances(surface: &VoxelSet, t: f32) -> Vec<InstanceData> {
    surface
        .as_slice()
        .par_iter()
        .map(|v| {
            let p = v.position();
            let h = wave_height(p.x, p.z, t);
            let model = Mat4::from_scale_rotation_translation(
                Vec3::splat(VOXEL_SCALE),
                Quat::IDENTITY,
                Vec3::new(p.x, p.y + h - WAVE_REST, p.z),
            );
            InstanceData::new(model, wave_color(h), false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{water, GenContext, Mode, Side};

    #[test]
    fn test_height_bounds() {
        for i in 0..50 {
            for j in 0..50 {
                let h = wave_height(i as f32 * 0.7 - 17.0, j as f32 * 1.3 - 30.0, i as f32 * 0.11);
                assert!((-0.52..=-0.08).contains(&h), "{}", h);
            }
        }
    }

    #[test]
    fn test_color_bands() {
        assert_eq!(wave_color(-0.2), CREST);
        assert_eq!(wave_color(-0.3), BASE);
        assert_eq!(wave_color(-0.4), TROUGH);
    }

    #[test]
    fn test_surface_keeps_order_and_columns() {
        let set = water::generate(&GenContext::default(), 0, Side::Asia, Mode::Day);
        let frame = surface_instances(&set, 1.25);
        assert_eq!(frame.len(), set.len());
        for (inst, v) in frame.iter().zip(set.iter()).step_by(997) {
            let p = inst.translation();
            let rest = v.position();
            assert_eq!((p.x, p.z), (rest.x, rest.z));
            assert!((p.y - rest.y).abs() <= 0.23);
            assert!(!inst.is_emissive());
        }
    }
}

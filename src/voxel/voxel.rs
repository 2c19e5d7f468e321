//! Voxel data type

use serde::{Deserialize, Serialize};

use crate::core::types::{IVec3, Vec3};

/// Edge length of one voxel in world units.
///
/// Every generator emits integer grid cells; world positions are always
/// `cell * VOXEL_SCALE`, so structures share a single grid.
pub const VOXEL_SCALE: f32 = 0.125;

/// 8-bit sRGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color from a `0xRRGGBB` literal
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Normalized `[r, g, b]` in `[0, 1]`
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Linear blend towards `other` by `t` in `[0, 1]`
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Render stream a voxel belongs to in the current mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoxelRole {
    /// Lit structure geometry
    #[default]
    Opaque,
    /// Emissive window, lantern or beacon
    Light,
}

/// A single colored cube on the shared grid.
///
/// Immutable once produced by a generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Voxel {
    /// Grid cell; world position is `cell * VOXEL_SCALE`
    pub cell: IVec3,
    pub color: Rgb,
    pub role: VoxelRole,
}

impl Voxel {
    pub fn new(cell: IVec3, color: Rgb, role: VoxelRole) -> Self {
        Self { cell, color, role }
    }

    pub fn opaque(cell: IVec3, color: Rgb) -> Self {
        Self::new(cell, color, VoxelRole::Opaque)
    }

    /// World-space position of the voxel centre's grid corner
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.cell.as_vec3() * VOXEL_SCALE
    }

    #[inline]
    pub fn is_light(&self) -> bool {
        self.role == VoxelRole::Light
    }

    /// Same voxel reflected across the x = 0 plane
    #[inline]
    pub fn mirrored(&self) -> Self {
        Self {
            cell: IVec3::new(-self.cell.x, self.cell.y, self.cell.z),
            ..*self
        }
    }
}

//! Flat water surface under the strait. Waves and their color bands are
//! applied per frame by the animation driver; the voxels only fix the grid.

use crate::voxel::{Rgb, VoxelSet};

use super::{GenContext, Mode, Seed, Side, VoxelBuilder};

/// Cells across the strait
pub const ROWS: i32 = 192;
/// Cells along the strait
pub const COLS: i32 = 480;
/// Rest height of the surface in cells
pub const SURFACE_Y: i32 = -8;

pub const BASE: Rgb = Rgb::hex(0x0ea5e9);

pub fn generate(_ctx: &GenContext, _seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let mut b = VoxelBuilder::new(side, mode);
    for x in -ROWS / 2..ROWS / 2 {
        for z in -COLS / 2..COLS / 2 {
            b.put(x, SURFACE_Y, z, BASE);
        }
    }
    b.finish()
}

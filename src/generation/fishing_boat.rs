//! Small fishing boat: pointed bow, wheelhouse forward, a pile of nets aft.

use crate::core::types::IVec3;
use crate::procgen::SeedStream;
use crate::voxel::{Rgb, VoxelSet};

use super::hull::{HullProfile, Taper};
use super::palette::{CABIN_WINDOW, NAV_LAMP};
use super::{GenContext, Mode, Seed, Side, VoxelBuilder};

const SALT: u64 = 0xf1;

pub const HULL: HullProfile = HullProfile {
    length: 26,
    beam: 8.0,
    bow: Some(Taper::new(5, 1.5, 1.0)),
    stern: None,
    min_width: 1.0,
};

const CABIN_Z: i32 = 2;
const CABIN_HALF_WIDTH: i32 = 2;
const CABIN_LENGTH: i32 = 5;
const MAST_Z: i32 = 1;
const MAST_HEIGHT: i32 = 14;

const HULL_WHITE: Rgb = Rgb::hex(0xf8fafc);
const DECK: Rgb = Rgb::hex(0xd97706);
const CABIN: Rgb = Rgb::hex(0xf1f5f9);
const MAST: Rgb = Rgb::hex(0xf59e0b);
const CRATE: Rgb = Rgb::hex(0xea580c);
const POLE: Rgb = Rgb::hex(0x94a3b8);
const FLAG_RED: Rgb = Rgb::hex(0xef4444);

/// Waterline stripe and cabin roof
pub const STRIPES: [Rgb; 3] = [Rgb::hex(0xdc2626), Rgb::hex(0x2563eb), Rgb::hex(0x0f766e)];
/// Net colors
pub const NETS: [Rgb; 2] = [Rgb::hex(0x064e3b), Rgb::hex(0x1e3a8a)];

pub fn generate(_ctx: &GenContext, seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let s = SeedStream::new(seed, SALT);
    let stripe = STRIPES[s.index(0, STRIPES.len())];
    let net = NETS[s.index(1, NETS.len())];
    let mut b = VoxelBuilder::new(side, mode);

    let bow = HULL.bow_z();
    for (z, hw) in HULL.stations() {
        for x in -hw..=hw {
            b.put(x, 0, z, stripe);
            if x.abs() == hw || z == bow {
                for y in 1..=3 {
                    b.put(x, y, z, HULL_WHITE);
                }
            } else if z < bow - 1 {
                b.put(x, 1, z, DECK);
            } else {
                b.put(x, 1, z, HULL_WHITE);
            }
        }
    }

    build_wheelhouse(&mut b, stripe);

    // Nets heaped on the after deck
    for x in -2..=2 {
        for z in -8..-4 {
            if s.cell(2, x, z) > 0.3 {
                b.put(x, 2, z, net);
                if s.cell(3, x, z) > 0.6 {
                    b.put(x, 3, z, net);
                }
            }
        }
    }
    b.fill(IVec3::new(0, 2, -2), IVec3::new(1, 2, -2), CRATE);
    b.put(0, 3, -2, CRATE);

    for y in 2..MAST_HEIGHT {
        b.put(0, y, MAST_Z, MAST);
    }
    b.put(-1, 10, MAST_Z, MAST);
    b.put(1, 10, MAST_Z, MAST);
    b.lit(0, MAST_HEIGHT, MAST_Z, NAV_LAMP);

    let flag_z = -12;
    for y in 2..8 {
        b.put(0, y, flag_z, POLE);
    }
    for y in 6..8 {
        for dz in 1..4 {
            let color = if y == 7 && dz == 2 { HULL_WHITE } else { FLAG_RED };
            b.put(0, y, flag_z - dz, color);
        }
    }

    b.finish()
}

fn build_wheelhouse(b: &mut VoxelBuilder, roof: Rgb) {
    let hw = CABIN_HALF_WIDTH;
    let (z0, z1) = (CABIN_Z, CABIN_Z + CABIN_LENGTH - 1);
    for y in 2..8 {
        for x in -hw..=hw {
            for z in z0..=z1 {
                let wall = x.abs() == hw || z == z0 || z == z1;
                if !wall {
                    if y == 7 {
                        b.put(x, y, z, roof);
                    }
                    continue;
                }
                let window = (4..=5).contains(&y)
                    && ((z == z1 && x.abs() < 2)
                        || (x.abs() == hw && (z - z0) % 2 != 0)
                        || (z == z0 && x == 0));
                if window {
                    b.lit(x, y, z, CABIN_WINDOW);
                } else {
                    b.put(x, y, z, CABIN);
                }
            }
        }
    }
}

//! Bridge traffic: small cars that ride the deck lanes.
//!
//! A car is built around its own origin with the bonnet toward +x; the
//! side mirror turns Europe-bound cars around. Placement on the deck is the
//! animation driver's job.

use crate::core::types::IVec3;
use crate::procgen::SeedStream;
use crate::voxel::{Rgb, VoxelSet};

use super::palette::{CAR_BODIES, HEADLIGHT, TAIL_LIGHT};
use super::{GenContext, Mode, Seed, Side, VoxelBuilder};

const SALT: u64 = 0x7c;

pub const HALF_WIDTH: i32 = 2;
const WHEEL: Rgb = Rgb::hex(0x0a0a0a);
const GLASS: Rgb = Rgb::hex(0x93c5fd);

/// Half length of the body for a seed: 5 or 6 cells
pub fn half_length(seed: Seed) -> i32 {
    SeedStream::new(seed, SALT).int(1, 5, 2)
}

pub fn generate(_ctx: &GenContext, seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let s = SeedStream::new(seed, SALT);
    let body = CAR_BODIES[s.index(0, CAR_BODIES.len())];
    let hl = half_length(seed);
    let mut b = VoxelBuilder::new(side, mode);

    b.fill(IVec3::new(-hl, 1, -HALF_WIDTH), IVec3::new(hl, 2, HALF_WIDTH), body);

    // Cabin sits back of centre; glass band around a solid roof
    let (c0, c1) = (-hl + 2, hl - 3);
    for x in c0..=c1 {
        for z in -HALF_WIDTH..=HALF_WIDTH {
            let edge = x == c0 || x == c1 || z.abs() == HALF_WIDTH;
            b.put(x, 3, z, if edge { GLASS } else { body });
            b.put(x, 4, z, body);
        }
    }

    for x in [-hl + 1, hl - 1] {
        for z in [-HALF_WIDTH, HALF_WIDTH] {
            b.put(x, 0, z, WHEEL);
        }
    }

    for z in [-HALF_WIDTH + 1, HALF_WIDTH - 1] {
        b.lit(hl, 2, z, HEADLIGHT);
        b.lit(-hl, 2, z, TAIL_LIGHT);
    }

    b.finish()
}

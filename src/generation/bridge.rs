//! Suspension bridge spanning the strait.
//!
//! Built in a single frame centred on the strait (x = lateral, z = along
//! relative to the configured bridge position). The structure is symmetric
//! about x = 0, so both sides produce the same cells.

use crate::core::types::IVec3;
use crate::voxel::{Rgb, VoxelSet};

use super::palette::BEACON;
use super::{GenContext, Mode, Seed, Side, VoxelBuilder};

pub const DECK_Y: i32 = 64;
pub const TOWER_HEIGHT: i32 = 176;
/// Pylons stand at x = ±TOWER_OFFSET
pub const TOWER_OFFSET: i32 = 96;
pub const DECK_HALF_LENGTH: i32 = 256;
pub const DECK_HALF_WIDTH: i32 = 18;
/// Lane dividers sit at z = ±LANE_DIVIDER
pub const LANE_DIVIDER: i32 = 9;
/// Lane centres across the deck, Europe-bound first
pub const LANES: [i32; 4] = [-13, -5, 5, 13];

const LEG_OFFSET: i32 = 20;
const CABLE_OFFSET: i32 = 19;
const CABLE_TOP: i32 = TOWER_HEIGHT - 8;
const CABLE_LOW: i32 = DECK_Y + 16;
const BACK_SPAN: i32 = 64;
const TRUSS_DEPTH: i32 = 8;
const TRUSS_Z: [i32; 3] = [-13, 0, 13];
const PILLAR_START: i32 = TOWER_OFFSET + 32;
const PILLAR_STEP: i32 = 48;

pub const STEEL: Rgb = Rgb::hex(0x64748b);
pub const DARK_STEEL: Rgb = Rgb::hex(0x475569);
pub const ROAD: Rgb = Rgb::hex(0x334155);
pub const LINE: Rgb = Rgb::hex(0xf8fafc);
pub const CABLE: Rgb = Rgb::hex(0x1e293b);
pub const SUSPENDER: Rgb = Rgb::hex(0x94a3b8);

/// Height of the main cable above the deck at x, within the main span
pub fn main_cable_y(x: i32) -> i32 {
    let p = x as f32 / TOWER_OFFSET as f32;
    CABLE_LOW + (p * p * (CABLE_TOP - CABLE_LOW) as f32).round() as i32
}

/// Height of a back-span cable `i` cells beyond its pylon
pub fn back_cable_y(i: i32) -> i32 {
    let t = i as f32 / BACK_SPAN as f32;
    CABLE_TOP - (t * (CABLE_TOP - DECK_Y) as f32).round() as i32
}

pub fn generate(ctx: &GenContext, _seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let origin = IVec3::new(0, 0, ctx.config.bridge_along);
    let mut b = VoxelBuilder::at(side, mode, origin);

    for tx in [-TOWER_OFFSET, TOWER_OFFSET] {
        build_pylon(&mut b, tx);
    }
    build_deck(&mut b);
    build_cables(&mut b);

    b.finish()
}

fn build_pylon(b: &mut VoxelBuilder, tx: i32) {
    for leg in [-LEG_OFFSET, LEG_OFFSET] {
        b.fill(
            IVec3::new(tx - 1, 0, leg - 1),
            IVec3::new(tx + 1, TOWER_HEIGHT - 1, leg + 1),
            STEEL,
        );
    }
    for cy in [DECK_Y - 16, DECK_Y + 32, TOWER_HEIGHT - 16] {
        b.fill(
            IVec3::new(tx - 1, cy, -LEG_OFFSET),
            IVec3::new(tx + 1, cy + 3, LEG_OFFSET),
            DARK_STEEL,
        );
    }
    b.lit(tx, TOWER_HEIGHT, -LEG_OFFSET, BEACON);
    b.lit(tx, TOWER_HEIGHT, LEG_OFFSET, BEACON);
}

fn build_deck(b: &mut VoxelBuilder) {
    for x in -DECK_HALF_LENGTH..=DECK_HALF_LENGTH {
        for z in -DECK_HALF_WIDTH..=DECK_HALF_WIDTH {
            let marked = z == 0 || z.abs() == LANE_DIVIDER;
            b.put(x, DECK_Y, z, if marked { LINE } else { ROAD });
        }
        b.put(x, DECK_Y + 1, -DECK_HALF_WIDTH, STEEL);
        b.put(x, DECK_Y + 1, DECK_HALF_WIDTH, STEEL);

        // Bottom chords run the full length, verticals every 8 cells
        let chord_y = DECK_Y - TRUSS_DEPTH;
        b.put(x, chord_y, TRUSS_Z[0], DARK_STEEL);
        b.put(x, chord_y, TRUSS_Z[2], DARK_STEEL);
        if x.rem_euclid(8) == 0 {
            for z in TRUSS_Z {
                for y in chord_y..DECK_Y {
                    b.put(x, y, z, DARK_STEEL);
                }
            }
        }

        // Approach viaduct pillars over land
        if x.abs() > PILLAR_START && x.abs() % PILLAR_STEP == 0 {
            b.fill(
                IVec3::new(x - 1, 0, -1),
                IVec3::new(x + 1, chord_y - 1, 1),
                DARK_STEEL,
            );
        }
    }
}

fn build_cables(b: &mut VoxelBuilder) {
    for z in [-CABLE_OFFSET, CABLE_OFFSET] {
        for x in -TOWER_OFFSET..=TOWER_OFFSET {
            let y = main_cable_y(x);
            // Close the step to the neighbour nearer midspan so the cable
            // reads solid and stays mirror-symmetric
            let inner = main_cable_y(x - x.signum());
            for cy in y.min(inner)..=y.max(inner) {
                b.put(x, cy, z, CABLE);
            }
            if x.rem_euclid(8) == 0 {
                for vy in DECK_Y + 1..y {
                    b.put(x, vy, z, SUSPENDER);
                }
            }
        }

        for dir in [-1, 1] {
            let mut prev = back_cable_y(0);
            for i in 0..BACK_SPAN {
                let y = back_cable_y(i);
                let x = dir * (TOWER_OFFSET + i);
                for cy in y.min(prev)..=y.max(prev) {
                    b.put(x, cy, z, CABLE);
                }
                prev = y;
            }
        }
    }
}

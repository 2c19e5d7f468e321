//! Crude tanker in transit: long parallel midbody, pipe spine, stern
//! superstructure with a bridge deck and integrated funnel.

use crate::procgen::SeedStream;
use crate::voxel::{Rgb, VoxelSet};

use super::hull::{HullProfile, Taper};
use super::palette::{CABIN_WINDOW, NAV_LAMP};
use super::{GenContext, Mode, Seed, Side, VoxelBuilder};

const SALT: u64 = 0x7a;

pub const HULL: HullProfile = HullProfile {
    length: 160,
    beam: 22.0,
    bow: Some(Taper::new(48, 2.0, 1.0)),
    stern: Some(Taper::new(64, 3.0, 0.5)),
    min_width: 2.0,
};
pub const HULL_HEIGHT: i32 = 12;

const HOUSE_LENGTH: i32 = 20;
const HOUSE_WIDTH: i32 = 18;
const HOUSE_LEVELS: i32 = 13;
/// Level of the wheelhouse windows and bridge wings
const BRIDGE_LEVEL: i32 = 8;
const FUNNEL_DEPTH: i32 = 6;

const DECK: Rgb = Rgb::hex(0x78350f);
const PIPES: Rgb = Rgb::hex(0x94a3b8);
const WHITE: Rgb = Rgb::hex(0xf1f5f9);
const CRANE: Rgb = Rgb::hex(0xfbbf24);

/// (bottom paint, topsides) pairs
pub const LIVERIES: [(Rgb, Rgb); 3] = [
    (Rgb::hex(0x9f1239), Rgb::hex(0x0f172a)),
    (Rgb::hex(0x9f1239), Rgb::hex(0x1e3a8a)),
    (Rgb::hex(0x7f1d1d), Rgb::hex(0x14532d)),
];

pub fn generate(_ctx: &GenContext, seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let s = SeedStream::new(seed, SALT);
    let (bottom, topsides) = LIVERIES[s.index(0, LIVERIES.len())];
    let mut b = VoxelBuilder::new(side, mode);

    let (stern, bow) = (HULL.stern_z(), HULL.bow_z());
    for (z, hw) in HULL.stations() {
        for x in -hw..=hw {
            for y in 0..3 {
                b.put(x, y, z, bottom);
            }
            b.put(x, HULL_HEIGHT, z, DECK);
            let outer = x.abs() == hw || z == stern || z == bow;
            if outer {
                for y in 3..=HULL_HEIGHT {
                    b.put(x, y, z, topsides);
                }
            }
        }
    }
    // Name board near the bow
    let name_z = bow - 9;
    let hw = HULL.half_width(name_z);
    b.put(-hw, HULL_HEIGHT - 2, name_z, WHITE);
    b.put(hw, HULL_HEIGHT - 2, name_z, WHITE);

    build_pipes(&mut b);
    build_house(&mut b, bottom);

    let crane_top = HULL_HEIGHT + 12;
    for y in HULL_HEIGHT..crane_top {
        b.put(0, y, 0, CRANE);
    }
    for z in 0..8 {
        b.put(0, HULL_HEIGHT + 10, z, CRANE);
    }
    b.lit(0, crane_top, 0, NAV_LAMP);

    b.finish()
}

fn build_pipes(b: &mut VoxelBuilder) {
    let y = HULL_HEIGHT + 1;
    let mut z = HULL.stern_z() + 25;
    while z < HULL.bow_z() - 19 {
        b.put(0, y, z, PIPES);
        b.put(0, y, z + 1, PIPES);
        if z.rem_euclid(16) == 0 {
            for x in -6..=6 {
                b.put(x, y, z, PIPES);
            }
        }
        z += 4;
    }
}

fn build_house(b: &mut VoxelBuilder, funnel: Rgb) {
    let z0 = HULL.stern_z() + 2;
    let z1 = z0 + HOUSE_LENGTH - 1;
    for level in 0..HOUSE_LEVELS {
        let y = HULL_HEIGHT + 1 + level;
        // The house narrows by one cell every other level
        let half = (HOUSE_WIDTH - level / 2) as f32 / 2.0;
        let roof = level == HOUSE_LEVELS - 1;
        let reach = HOUSE_WIDTH / 2 + 2;
        for z in z0..=z1 {
            for x in -reach..=reach {
                let ax = x.abs() as f32;
                let wing = level == BRIDGE_LEVEL && ax > half - 4.0 && ax < half + 3.0;
                if ax > half && !wing {
                    continue;
                }
                let wall = ax >= half - 1.0 || z == z0 || z == z1 || roof;
                let in_funnel = z < z0 + FUNNEL_DEPTH && x.abs() < 4;
                if !(wall || wing) {
                    if level > 9 && in_funnel {
                        b.put(x, y, z, funnel);
                    }
                    continue;
                }
                if in_funnel && level > 6 {
                    b.put(x, y, z, funnel);
                } else if level == BRIDGE_LEVEL && !roof && (z == z1 || (ax > half - 1.0 && ax <= half)) {
                    b.lit(x, y, z, CABIN_WINDOW);
                } else {
                    b.put(x, y, z, WHITE);
                }
            }
        }
    }
}

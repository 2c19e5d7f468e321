//! Commuter ferry: tapered twin-deck hull with a funnel and two masts.

use crate::procgen::SeedStream;
use crate::voxel::{Rgb, VoxelSet};

use super::hull::{HullProfile, Taper};
use super::palette::{CABIN_WINDOW, NAV_LAMP};
use super::{GenContext, Mode, Seed, Side, VoxelBuilder};

const SALT: u64 = 0xfe;

pub const HULL: HullProfile = HullProfile {
    length: 64,
    beam: 16.0,
    bow: Some(Taper::new(19, 1.5, 1.0)),
    stern: Some(Taper::new(19, 1.5, 1.0)),
    min_width: 2.0,
};

const UPPER_INSET: i32 = 2;
/// Stations aft of this are open upper deck
const OPEN_DECK_END: i32 = -10;

const WHITE: Rgb = Rgb::hex(0xf8fafc);
const DECK: Rgb = Rgb::hex(0xcbd5e1);
const YELLOW: Rgb = Rgb::hex(0xfacc15);
const ORANGE: Rgb = Rgb::hex(0xea580c);
const BLACK: Rgb = Rgb::hex(0x0f172a);
const RED: Rgb = Rgb::hex(0xdc2626);
const POLE: Rgb = Rgb::hex(0x94a3b8);

/// Waterline and funnel band colors of the city ferry lines
pub const LIVERIES: [(Rgb, Rgb); 3] = [
    (Rgb::hex(0x15803d), RED),
    (Rgb::hex(0x1e3a8a), Rgb::hex(0x1e40af)),
    (Rgb::hex(0x7f1d1d), YELLOW),
];

pub fn generate(_ctx: &GenContext, seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let s = SeedStream::new(seed, SALT);
    let (waterline, band) = LIVERIES[s.index(0, LIVERIES.len())];
    let mut b = VoxelBuilder::new(side, mode);

    for (z, hw) in HULL.stations() {
        let zn = z as f32 / HULL.half() as f32;
        for x in -hw..=hw {
            let side_wall = x.abs() == hw;
            b.put(x, 0, z, waterline);
            b.put(x, 1, z, waterline);

            if side_wall {
                for y in 2..=5 {
                    b.put(x, y, z, WHITE);
                }
                for y in 6..=10 {
                    if y == 7 && z.rem_euclid(12) == 0 && zn.abs() < 0.6 {
                        b.put(x, y, z, ORANGE);
                    } else if (8..=9).contains(&y) && z.rem_euclid(4) != 0 {
                        b.lit(x, y, z, CABIN_WINDOW);
                    } else {
                        b.put(x, y, z, WHITE);
                    }
                }
            } else {
                if x.rem_euclid(2) == 0 && z.rem_euclid(2) == 0 {
                    b.put(x, 2, z, DECK);
                }
                b.put(x, 6, z, WHITE);
                b.put(x, 11, z, WHITE);
            }

            let upper = hw - UPPER_INSET;
            if x.abs() > upper {
                continue;
            }
            let open_deck = z < OPEN_DECK_END;
            if x.abs() == upper {
                if open_deck {
                    b.put(x, 12, z, YELLOW);
                } else {
                    for y in 12..=16 {
                        if (13..=14).contains(&y) && z.rem_euclid(3) != 0 {
                            b.lit(x, y, z, CABIN_WINDOW);
                        } else {
                            b.put(x, y, z, WHITE);
                        }
                    }
                }
            } else if open_deck {
                b.put(x, 11, z, DECK);
                if x == 0 && z.rem_euclid(4) == 0 {
                    b.put(x, 12, z, ORANGE);
                }
            } else {
                b.put(x, 17, z, WHITE);
                if z == OPEN_DECK_END {
                    for y in 12..=16 {
                        b.put(x, y, z, WHITE);
                    }
                }
            }
        }
    }

    build_funnel(&mut b, band);
    build_mast(&mut b, 20, 20);
    build_mast(&mut b, OPEN_DECK_END, 12);
    for x in -1..=1 {
        b.put(x, 18, 24, BLACK);
    }
    build_stern_flag(&mut b);

    b.finish()
}

fn build_funnel(b: &mut VoxelBuilder, band: Rgb) {
    for y in 17..25 {
        for x in -2i32..=2 {
            for z in -2i32..=2 {
                if x.abs() + z.abs() >= 4 {
                    continue;
                }
                let color = if (19..=21).contains(&y) && x.abs() == 2 {
                    band
                } else if y > 22 {
                    BLACK
                } else {
                    WHITE
                };
                b.put(x, y, z, color);
            }
        }
    }
}

fn build_mast(b: &mut VoxelBuilder, z: i32, height: i32) {
    let top = 17 + height;
    for y in 17..top {
        b.put(0, y, z, YELLOW);
        if y == top - 4 {
            b.put(-1, y, z, YELLOW);
            b.put(1, y, z, YELLOW);
        }
    }
    b.lit(0, top, z, NAV_LAMP);
}

fn build_stern_flag(b: &mut VoxelBuilder) {
    let z = HULL.stern_z() + 3;
    for y in 5..16 {
        b.put(0, y, z, POLE);
    }
    for y in 12..15 {
        for dz in 1..5 {
            let color = if y == 13 && dz == 2 { WHITE } else { RED };
            b.put(0, y, z - dz, color);
        }
    }
}

//! Waterfront mosque: a square prayer hall under a shell dome, flanked by
//! two minarets with lamp-lit balconies.
//!
//! Local coordinates put the hall's near corner at the origin, so the hall
//! covers `0..HALL_WIDTH` in x and z.

use crate::core::types::IVec3;
use crate::math::Footprint;
use crate::procgen::Site;
use crate::voxel::{Rgb, VoxelSet};

use super::palette::{LightTint, MINARET_LAMP, PRAYER_HALL, SIDE_BAY};
use super::shoreline::ground_height;
use super::{EntityKind, GenContext, Mode, Seed, Side, VoxelBuilder};

pub const HALL_WIDTH: i32 = 24;
pub const HALL_HEIGHT: i32 = 16;
pub const WALL_THICKNESS: i32 = 2;
pub const DOME_RADIUS: f32 = 12.8;
pub const DOME_SHELL: f32 = 1.6;
pub const MINARET_HEIGHT: i32 = 48;
pub const BALCONY_LEVELS: [i32; 2] = [24, 36];
/// Minaret axes in hall-local cells
pub const MINARETS: [(i32, i32); 2] = [(-4, -4), (HALL_WIDTH + 2, -4)];

const WINDOW_BOTTOM: i32 = 5;
const WINDOW_TOP: i32 = 11;
const CENTRAL_HALF: f32 = 3.0;
const SIDE_CENTRE: f32 = 8.0;
const SIDE_HALF: f32 = 2.0;

const MARBLE: Rgb = Rgb::hex(0xf1f5f9);
const DOME: Rgb = Rgb::hex(0x94a3b8);
const MINARET: Rgb = Rgb::hex(0xf8fafc);
const BALCONY: Rgb = Rgb::hex(0xcbd5e1);
const CONE: Rgb = Rgb::hex(0x64748b);
const GOLD: Rgb = Rgb::hex(0xd97706);

/// Window bay class of a wall cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bay {
    /// Tall arched windows of the central prayer hall
    Central,
    Side,
}

impl Bay {
    pub fn tint(self) -> LightTint {
        match self {
            Bay::Central => PRAYER_HALL,
            Bay::Side => SIDE_BAY,
        }
    }
}

/// Window profile of a wall.
///
/// `u` is the cell's offset from the middle of the wall it belongs to. The
/// central bay is arched: its head rises toward the wall's middle.
pub fn bay_at(u: f32, y: i32) -> Option<Bay> {
    let a = u.abs();
    if a < CENTRAL_HALF {
        let head = WINDOW_TOP + ((CENTRAL_HALF - a) * 0.67).round() as i32;
        (WINDOW_BOTTOM..=head).contains(&y).then_some(Bay::Central)
    } else if (a - SIDE_CENTRE).abs() < SIDE_HALF {
        (WINDOW_BOTTOM..=WINDOW_TOP - 1).contains(&y).then_some(Bay::Side)
    } else {
        None
    }
}

/// Offset of a cell from the middle of a hall wall
#[inline]
fn wall_offset(t: i32) -> f32 {
    t as f32 - (HALL_WIDTH as f32 - 1.0) * 0.5
}

pub struct MosquePlan {
    pub site: Site,
    /// Side-local position of the hall's near corner
    pub origin: IVec3,
}

pub fn plan(ctx: &GenContext, seed: Seed) -> MosquePlan {
    let site = ctx.mosque_site(seed);
    let half = HALL_WIDTH / 2;
    let base = ground_height(ctx, site.lateral, site.along) + 1;
    MosquePlan {
        site,
        origin: IVec3::new(site.lateral - half, base, site.along - half),
    }
}

impl MosquePlan {
    pub fn footprint(&self) -> Footprint {
        Footprint::new((-6, HALL_WIDTH + 4), (-6, HALL_WIDTH))
            .translated(self.origin.x, self.origin.z)
    }
}

pub fn generate(ctx: &GenContext, seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let plan = plan(ctx, seed);
    if ctx.is_blocked(EntityKind::Mosque, &plan.footprint()) {
        return VoxelSet::empty();
    }
    let mut b = VoxelBuilder::at(side, mode, plan.origin);

    build_hall(&mut b);
    build_dome(&mut b);
    for (mx, mz) in MINARETS {
        build_minaret(&mut b, mx, mz);
    }

    b.finish()
}

fn build_hall(b: &mut VoxelBuilder) {
    let w = HALL_WIDTH;
    let t = WALL_THICKNESS;
    for x in 0..w {
        for z in 0..w {
            let x_wall = x < t || x >= w - t;
            let z_wall = z < t || z >= w - t;
            for y in 0..HALL_HEIGHT {
                let roof = y >= HALL_HEIGHT - t;
                if !x_wall && !z_wall && !roof {
                    continue;
                }
                // The shaft runs straight through the wall's thickness
                let bay = match (x_wall, z_wall) {
                    (true, false) => bay_at(wall_offset(z), y),
                    (false, true) => bay_at(wall_offset(x), y),
                    _ => None,
                };
                match bay {
                    Some(bay) if !roof => b.lit(x, y, z, bay.tint()),
                    _ => b.put(x, y, z, MARBLE),
                }
            }
        }
    }
}

fn build_dome(b: &mut VoxelBuilder) {
    let c = (HALL_WIDTH as f32 - 1.0) * 0.5;
    let r = DOME_RADIUS.ceil() as i32;
    let inner = DOME_RADIUS - DOME_SHELL;
    for y in 0..=r {
        for x in -r..=HALL_WIDTH + r {
            for z in -r..=HALL_WIDTH + r {
                let (dx, dz) = (x as f32 - c, z as f32 - c);
                let dist = (dx * dx + (y * y) as f32 + dz * dz).sqrt();
                if dist > inner && dist < DOME_RADIUS {
                    b.put(x, HALL_HEIGHT + y, z, DOME);
                }
            }
        }
    }
}

fn build_minaret(b: &mut VoxelBuilder, mx: i32, mz: i32) {
    for y in 0..MINARET_HEIGHT {
        // Thicker lower shaft up to the first balcony
        let r_sq = if y < BALCONY_LEVELS[0] { 2 } else { 1 };
        for dx in -1..=1 {
            for dz in -1..=1 {
                if dx * dx + dz * dz <= r_sq {
                    b.put(mx + dx, y, mz + dz, MINARET);
                }
            }
        }
        if BALCONY_LEVELS.contains(&y) {
            for dx in -2..=2 {
                for dz in -2..=2 {
                    if dx * dx + dz * dz <= 5 && !b.contains(mx + dx, y, mz + dz) {
                        b.put(mx + dx, y, mz + dz, BALCONY);
                    }
                }
            }
            for (dx, dz) in [(2, 0), (-2, 0), (0, 2), (0, -2)] {
                b.lit(mx + dx, y + 1, mz + dz, MINARET_LAMP);
            }
        }
    }
    for dy in 0..2 {
        b.put(mx, MINARET_HEIGHT + dy, mz, CONE);
    }
    b.put(mx, MINARET_HEIGHT + 2, mz, GOLD);
}

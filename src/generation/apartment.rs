//! Hillside apartment blocks on a jittered grid.
//!
//! A stone base levels the block on sloping ground, then 4-5 storeys with
//! `mod 5` window bays, optional balconies, an optional ground-floor shop
//! with an awning and either a hipped roof with chimney or a roof terrace.

use crate::core::types::IVec3;
use crate::math::Footprint;
use crate::procgen::SeedStream;
use crate::voxel::{Rgb, VoxelSet};

use super::palette::{Palette, APARTMENT, AWNINGS, NAV_LAMP, SHOP_WINDOW};
use super::shoreline::ground_height;
use super::{extent, EntityKind, GenContext, Mode, Seed, Side, VoxelBuilder};

const SALT: u64 = 0xa9;

pub const WIDTH: i32 = 14;
pub const DEPTH: i32 = 14;
pub const FLOOR_HEIGHT: i32 = 7;
/// Base courses above the highest ground point under the block
pub const BASE_HEIGHT: i32 = 5;
pub const ROOF_LAYERS: i32 = 6;
pub const BALCONY_DEPTH: i32 = 2;
pub const MAX_FLOORS: usize = 5;

const DOOR: Rgb = Rgb::hex(0x451a03);
const RAIL: Rgb = Rgb::hex(0x171717);
const CHIMNEY: Rgb = Rgb::hex(0x78350f);
const AWNING_STRIPE: Rgb = Rgb::hex(0xf8fafc);

#[derive(Clone, Copy, Debug)]
pub struct ApartmentPlan {
    pub palette: &'static Palette,
    pub floors: i32,
    /// Side-local origin at the front-left corner on the lowest ground cell
    pub origin: IVec3,
    /// Local y of the first storey, above the base
    pub base_top: i32,
    pub balconies: [bool; MAX_FLOORS],
    /// Awning color when the ground floor is a shop
    pub shop: Option<Rgb>,
    pub terrace: bool,
}

pub fn plan(ctx: &GenContext, seed: Seed) -> ApartmentPlan {
    let cfg = &ctx.config;
    let s = SeedStream::new(seed, SALT);
    let site = cfg.apartment_grid.site(seed, &s.derive(1));
    let lateral = cfg.shore_lateral + site.lateral;

    let (lo, hi) = ctx.height.range_over(
        (site.lateral, site.lateral + WIDTH - 1),
        (site.along, site.along + DEPTH - 1),
    );

    let floors = extent(s.int(4, 4, 2));
    let mut balconies = [false; MAX_FLOORS];
    for (f, balcony) in balconies.iter_mut().enumerate().skip(1) {
        *balcony = s.above(10 + f as u64, 0.3);
    }

    ApartmentPlan {
        palette: &APARTMENT[s.index(3, APARTMENT.len())],
        floors,
        origin: IVec3::new(lateral, lo, site.along),
        base_top: (hi - lo) + BASE_HEIGHT + 1,
        balconies,
        shop: s.above(5, 0.5).then(|| AWNINGS[s.index(6, AWNINGS.len())]),
        terrace: s.above(7, 0.6),
    }
}

impl ApartmentPlan {
    pub fn footprint(&self) -> Footprint {
        Footprint::new((-BALCONY_DEPTH, WIDTH), (-1, DEPTH))
            .translated(self.origin.x, self.origin.z)
    }

    pub fn roof_y(&self) -> i32 {
        self.base_top + self.floors * FLOOR_HEIGHT
    }
}

/// Footprints of every grid block that survives the exclusion test
pub fn placed_footprints(ctx: &GenContext) -> Vec<Footprint> {
    (0..ctx.config.apartment_grid.len())
        .map(|seed| plan(ctx, seed).footprint())
        .filter(|f| !ctx.is_blocked(EntityKind::Apartment, f))
        .collect()
}

pub fn generate(ctx: &GenContext, seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let plan = plan(ctx, seed);
    if ctx.is_blocked(EntityKind::Apartment, &plan.footprint()) {
        return VoxelSet::empty();
    }
    let mut b = VoxelBuilder::at(side, mode, plan.origin);

    build_base(&mut b, ctx, &plan);
    for f in 0..plan.floors {
        build_floor(&mut b, &plan, f);
    }
    if plan.terrace {
        build_terrace(&mut b, &plan);
    } else {
        build_roof(&mut b, &plan);
    }

    b.finish()
}

fn build_base(b: &mut VoxelBuilder, ctx: &GenContext, plan: &ApartmentPlan) {
    let stone = plan.palette.accent;
    let top = plan.base_top - 1;
    for x in 0..WIDTH {
        for z in 0..DEPTH {
            // courses at or below the terrain belong to the shoreline
            let buried = ground_height(ctx, plan.origin.x + x, plan.origin.z + z) - plan.origin.y;
            let shell = x == 0 || x == WIDTH - 1 || z == 0 || z == DEPTH - 1;
            for y in buried.max(0) + 1..=top {
                if !shell && y < top {
                    continue;
                }
                b.put(x, y, z, stone);
            }
        }
    }

    // Entrance on the water-facing side
    let door_z = DEPTH / 2;
    for y in top - 4..top {
        b.put(0, y, door_z, DOOR);
        b.put(0, y, door_z + 1, DOOR);
    }

    if let Some(awning) = plan.shop {
        for z in (2..=5).chain(9..=12) {
            for y in top - 3..top {
                b.lit(0, y, z, SHOP_WINDOW);
            }
        }
        for z in 1..DEPTH - 1 {
            let color = if z % 2 == 0 { awning } else { AWNING_STRIPE };
            for x in -BALCONY_DEPTH..0 {
                b.put(x, top, z, color);
            }
        }
    }
}

fn build_floor(b: &mut VoxelBuilder, plan: &ApartmentPlan, f: i32) {
    let p = plan.palette;
    let fy = plan.base_top + f * FLOOR_HEIGHT;

    for x in 0..WIDTH {
        for z in 0..DEPTH {
            let x_face = x == 0 || x == WIDTH - 1;
            let z_face = z == 0 || z == DEPTH - 1;
            if !x_face && !z_face {
                continue;
            }
            let corner = x_face && z_face;
            // Bay rhythm runs along the face
            let bay = if x_face { z.rem_euclid(5) } else { x.rem_euclid(5) };
            let in_bay = !corner && (bay == 2 || bay == 3);

            for y in 0..FLOOR_HEIGHT {
                if y == 0 {
                    b.put(x, fy, z, p.trim);
                    continue;
                }
                if in_bay && y > 1 && y < FLOOR_HEIGHT - 1 {
                    if y == 2 || y == FLOOR_HEIGHT - 2 || bay == 2 {
                        b.put(x, fy + y, z, p.trim);
                    } else {
                        b.lit(x, fy + y, z, p.glass);
                    }
                    continue;
                }
                b.put(x, fy + y, z, p.wall);
            }
        }
    }

    if plan.balconies[f as usize] {
        for x in -BALCONY_DEPTH..0 {
            for z in 0..DEPTH {
                b.put(x, fy, z, p.trim);
                let outer = x == -BALCONY_DEPTH || z == 0 || z == DEPTH - 1;
                if outer && (x + z).rem_euclid(2) == 0 {
                    b.put(x, fy + 1, z, RAIL);
                }
            }
        }
    }
}

fn build_roof(b: &mut VoxelBuilder, plan: &ApartmentPlan) {
    let roof_y = plan.roof_y();
    let color = plan.palette.roof;
    for r in 0..ROOF_LAYERS {
        let (x0, x1) = (-1 + r, WIDTH - r);
        let (z0, z1) = (-1 + r, DEPTH - r);
        let top = r == ROOF_LAYERS - 1;
        for x in x0..=x1 {
            for z in z0..=z1 {
                let edge = x == x0 || x == x1 || z == z0 || z == z1;
                if top || edge {
                    b.put(x, roof_y + r, z, color);
                }
            }
        }
    }
    let (cx, cz) = (WIDTH / 2 + 3, DEPTH / 2);
    for y in 0..ROOF_LAYERS + 2 {
        b.put(cx, roof_y + y, cz, CHIMNEY);
    }
}

fn build_terrace(b: &mut VoxelBuilder, plan: &ApartmentPlan) {
    let p = plan.palette;
    let roof_y = plan.roof_y();
    for x in 0..WIDTH {
        for z in 0..DEPTH {
            b.put(x, roof_y, z, p.trim);
            let edge = x == 0 || x == WIDTH - 1 || z == 0 || z == DEPTH - 1;
            if edge {
                b.put(x, roof_y + 1, z, p.wall);
            }
        }
    }
    // Lamp posts at the seaward corners
    for z in [1, DEPTH - 2] {
        b.put(1, roof_y + 1, z, RAIL);
        b.put(1, roof_y + 2, z, RAIL);
        b.lit(1, roof_y + 3, z, NAV_LAMP);
    }
}

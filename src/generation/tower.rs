//! Island tower: a walled rock platform in the strait carrying a square
//! keep, a lantern with cardinal windows, an onion dome and a flag pole.

use crate::core::types::{IVec3, Vec3};
use crate::math::Footprint;
use crate::procgen::SeedStream;
use crate::voxel::{Rgb, VoxelSet, VOXEL_SCALE};

use super::palette::WARM_WINDOW;
use super::{EntityKind, GenContext, Mode, Seed, Side, VoxelBuilder};

const SALT: u64 = 0x70;

pub const PLATFORM_HALF: i32 = 17;
/// Platform cells satisfy |x| + |z| < PLATFORM_DIAMOND
pub const PLATFORM_DIAMOND: i32 = 24;
pub const PIER_LENGTH: i32 = 12;
pub const WALL_INSET: i32 = 14;
pub const WALL_HEIGHT: i32 = 7;
pub const KEEP_HALF: i32 = 5;
pub const KEEP_HEIGHT: i32 = 15;
pub const LANTERN_RADIUS: f32 = 4.8;
pub const LANTERN_HEIGHT: i32 = 10;
pub const BALCONY_RADIUS: f32 = 7.2;
pub const DOME_RADIUS: f32 = 5.2;
pub const DOME_HEIGHT: i32 = 8;
pub const POLE_HEIGHT: i32 = 16;
/// Height above the tower base where the flag's hoist edge attaches
pub const FLAG_ATTACH_Y: i32 = 46;

const ROCK: Rgb = Rgb::hex(0x44403c);
const PLATFORM: Rgb = Rgb::hex(0xe5e5e5);
const WALL: Rgb = Rgb::hex(0xd6d3d1);
const WHITE: Rgb = Rgb::hex(0xf8fafc);
const ROOF: Rgb = Rgb::hex(0xef4444);
const DOME: Rgb = Rgb::hex(0x334155);
const RAIL: Rgb = Rgb::hex(0x1e293b);

pub fn origin(ctx: &GenContext, seed: Seed) -> IVec3 {
    let site = ctx.tower_site(seed);
    IVec3::new(site.lateral, 0, site.along)
}

pub fn footprint(ctx: &GenContext, seed: Seed) -> Footprint {
    let o = origin(ctx, seed);
    Footprint::new((-PLATFORM_HALF, PLATFORM_HALF + PIER_LENGTH), (-PLATFORM_HALF, PLATFORM_HALF))
        .translated(o.x, o.z)
}

/// World position where the flag's hoist edge meets the pole
pub fn flag_mount(ctx: &GenContext, seed: Seed, side: Side) -> Vec3 {
    let o = origin(ctx, seed);
    Vec3::new(
        (side.sign() * o.x) as f32,
        (o.y + FLAG_ATTACH_Y) as f32,
        o.z as f32,
    ) * VOXEL_SCALE
}

pub fn generate(ctx: &GenContext, seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    if ctx.is_blocked(EntityKind::Tower, &footprint(ctx, seed)) {
        return VoxelSet::empty();
    }
    let s = SeedStream::new(seed, SALT);
    let mut b = VoxelBuilder::at(side, mode, origin(ctx, seed));

    build_platform(&mut b, &s);
    build_walls(&mut b);
    build_side_house(&mut b);

    b.fill(
        IVec3::new(-KEEP_HALF, 0, -KEEP_HALF),
        IVec3::new(KEEP_HALF, KEEP_HEIGHT - 1, KEEP_HALF),
        WALL,
    );
    build_lantern(&mut b, KEEP_HEIGHT);
    let dome_y = KEEP_HEIGHT + LANTERN_HEIGHT;
    build_dome(&mut b, dome_y);
    for y in 0..POLE_HEIGHT {
        b.put(0, dome_y + DOME_HEIGHT + y, 0, WHITE);
    }

    b.finish()
}

fn build_platform(b: &mut VoxelBuilder, s: &SeedStream) {
    let h = PLATFORM_HALF;
    for x in -h..=h {
        for z in -h..=h {
            let d = x.abs() + z.abs();
            if d >= PLATFORM_DIAMOND {
                continue;
            }
            b.put(x, 0, z, PLATFORM);
            let edge = d >= PLATFORM_DIAMOND - 1 || x.abs() >= h - 1 || z.abs() >= h - 1;
            if !edge {
                b.put(x, -1, z, ROCK);
            } else if s.cell(0, x, z) > 0.3 {
                // Ragged rocks break the platform rim
                b.put(x, 1, z, ROCK);
                b.put(x, -1, z, ROCK);
            }
        }
    }
    // Landing pier toward the shore
    for x in h + 1..=h + PIER_LENGTH {
        for z in -3..=3 {
            b.put(x, 0, z, PLATFORM);
            b.put(x, -1, z, ROCK);
        }
    }
}

fn build_walls(b: &mut VoxelBuilder) {
    let w = WALL_INSET;
    for x in -w..=w {
        for z in -w..=w {
            if x.abs() < w && z.abs() < w {
                continue;
            }
            for y in 0..WALL_HEIGHT {
                b.put(x, y, z, WALL);
            }
            if (x.abs() + z.abs()) % 4 < 2 {
                b.put(x, WALL_HEIGHT, z, WALL);
            }
        }
    }
}

/// Red-roofed house in the seaward courtyard corner
fn build_side_house(b: &mut VoxelBuilder) {
    let (x0, x1) = (-WALL_INSET + 1, -2);
    let (z0, z1) = (2, WALL_INSET - 1);
    b.fill(IVec3::new(x0, 0, z0), IVec3::new(x1, WALL_HEIGHT - 1, z1), WHITE);
    for r in 0..4 {
        for x in x0 + r..=x1 - r {
            for z in z0 + r..=z1 - r {
                b.put(x, WALL_HEIGHT + r, z, ROOF);
            }
        }
    }
}

fn build_lantern(b: &mut VoxelBuilder, y0: i32) {
    let br = BALCONY_RADIUS.ceil() as i32;
    let (inner_sq, outer_sq) = (LANTERN_RADIUS * LANTERN_RADIUS, BALCONY_RADIUS * BALCONY_RADIUS);
    for x in -br..=br {
        for z in -br..=br {
            let d_sq = (x * x + z * z) as f32;
            if d_sq < outer_sq && d_sq > inner_sq {
                b.put(x, y0, z, PLATFORM);
                if d_sq.sqrt() > BALCONY_RADIUS - 0.8 {
                    b.put(x, y0 + 1, z, RAIL);
                }
            }
        }
    }

    let r = LANTERN_RADIUS.ceil() as i32;
    let hollow = LANTERN_RADIUS - 1.5;
    for y in 0..LANTERN_HEIGHT {
        for x in -r..=r {
            for z in -r..=r {
                let d_sq = (x * x + z * z) as f32;
                if d_sq >= inner_sq || d_sq.sqrt() < hollow {
                    continue;
                }
                // Windows face the four cardinal directions
                let window = (4..=6).contains(&y)
                    && ((x.abs() < 2 && z.abs() > 2) || (z.abs() < 2 && x.abs() > 2));
                if window {
                    b.lit(x, y0 + y, z, WARM_WINDOW);
                } else {
                    b.put(x, y0 + y, z, WHITE);
                }
            }
        }
    }
}

fn build_dome(b: &mut VoxelBuilder, y0: i32) {
    let r = DOME_RADIUS.ceil() as i32;
    for x in -r..=r {
        for z in -r..=r {
            let d = ((x * x + z * z) as f32).sqrt();
            if d > DOME_RADIUS - 0.8 && d < DOME_RADIUS {
                b.put(x, y0, z, RAIL);
            }
        }
    }
    for y in 0..DOME_HEIGHT {
        let p = y as f32 / DOME_HEIGHT as f32;
        let rr = DOME_RADIUS * ((p * std::f32::consts::FRAC_PI_2).cos() * 0.8 + 0.2);
        for x in -r..=r {
            for z in -r..=r {
                if ((x * x + z * z) as f32) < rr * rr {
                    b.put(x, y0 + y, z, DOME);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procgen::ZoneKind;
    use crate::voxel::VoxelRole;

    #[test]
    fn test_stands_inside_its_own_zone() {
        let ctx = GenContext::default();
        let zone = ctx.exclusion.zone(ZoneKind::TowerFootprint).unwrap();
        let set = generate(&ctx, ctx.config.tower_seed, Side::Asia, Mode::Day);
        assert!(!set.is_empty());
        assert!(set.iter().all(|v| zone.contains_cell(v.cell.x, v.cell.z)));
    }

    #[test]
    fn test_lantern_windows_light_at_night() {
        let ctx = GenContext::default();
        let night = generate(&ctx, ctx.config.tower_seed, Side::Asia, Mode::Night);
        let lights: Vec<_> = night.iter().filter(|v| v.role == VoxelRole::Light).collect();
        assert!(!lights.is_empty());
        let band = KEEP_HEIGHT + 4..=KEEP_HEIGHT + 6;
        assert!(lights.iter().all(|v| band.contains(&v.cell.y)));
        // one window per cardinal direction
        assert!(lights.iter().any(|v| v.cell.x - 64 > 2));
        assert!(lights.iter().any(|v| v.cell.x - 64 < -2));
        assert!(lights.iter().any(|v| v.cell.z - 64 > 2));
        assert!(lights.iter().any(|v| v.cell.z - 64 < -2));
    }

    #[test]
    fn test_flag_mount_below_pole_top() {
        let ctx = GenContext::default();
        let mount = flag_mount(&ctx, ctx.config.tower_seed, Side::Asia);
        let pole_top = (KEEP_HEIGHT + LANTERN_HEIGHT + DOME_HEIGHT + POLE_HEIGHT) as f32 * VOXEL_SCALE;
        assert!(mount.y < pole_top);
        assert!((mount.x - 8.0).abs() < 1e-5);
        let europe = flag_mount(&ctx, ctx.config.tower_seed, Side::Europe);
        assert!((europe.x + 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_rim_rocks_are_deterministic() {
        let ctx = GenContext::default();
        let a = generate(&ctx, ctx.config.tower_seed, Side::Asia, Mode::Day);
        let b = generate(&ctx, ctx.config.tower_seed, Side::Asia, Mode::Day);
        assert_eq!(a, b);
    }
}

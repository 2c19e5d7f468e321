//! Ornate three-storey mansion with twin corner turrets, a hipped tile roof
//! and a central gable.

use crate::core::types::IVec3;
use crate::math::Footprint;
use crate::procgen::SeedStream;
use crate::voxel::{Rgb, VoxelSet};

use super::palette::{Palette, MANSION_C};
use super::{mansion_slot_along, EntityKind, GenContext, Mode, Seed, Side, VoxelBuilder};

const SALT: u64 = 0xc3;

pub const WIDTH: i32 = 21;
pub const DEPTH: i32 = 15;
pub const FLOORS: i32 = 3;
pub const FLOOR_HEIGHT: i32 = 9;
pub const SETBACK: i32 = 5;
pub const TURRET_HEIGHT: i32 = 14;
const ROOF_LAYERS: i32 = 8;
const GABLE_WIDTH: i32 = 7;
const GABLE_HEIGHT: i32 = 6;

const DOOR: Rgb = Rgb::hex(0x451a03);
const GOLD: Rgb = Rgb::hex(0xd97706);

pub struct TurretPlan {
    pub palette: &'static Palette,
    pub origin: IVec3,
}

pub fn plan(ctx: &GenContext, seed: Seed) -> TurretPlan {
    let s = SeedStream::new(seed, SALT);
    let along = mansion_slot_along(&ctx.config, seed);
    let lateral = ctx.config.shore_lateral + SETBACK;
    TurretPlan {
        palette: &MANSION_C[s.index(0, MANSION_C.len())],
        origin: IVec3::new(lateral, ctx.ground(lateral, along), along),
    }
}

impl TurretPlan {
    pub fn footprint(&self) -> Footprint {
        let hw = WIDTH / 2;
        Footprint::new((-8, DEPTH + 1), (-hw - 4, hw + 4))
            .translated(self.origin.x, self.origin.z)
    }

    /// Front wall offset of an upper-floor column; centre and wings project
    pub fn front_offset(floor: i32, z: i32) -> i32 {
        if floor == 0 {
            return 0;
        }
        match z.abs() {
            0..=3 => -2,
            8.. => -1,
            _ => 0,
        }
    }

    /// Turret centres along the shore
    pub fn turret_z() -> [i32; 2] {
        [-(WIDTH / 2) + 2, WIDTH / 2 - 2]
    }
}

pub fn generate(ctx: &GenContext, seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let plan = plan(ctx, seed);
    if ctx.is_blocked(EntityKind::MansionC, &plan.footprint()) {
        return VoxelSet::empty();
    }
    let p = plan.palette;
    let hw = WIDTH / 2;
    let mut b = VoxelBuilder::at(side, mode, plan.origin);

    for z in -hw - 4..=hw + 4 {
        for x in -8..-SETBACK {
            b.put(x, 0, z, p.trim);
        }
    }

    for f in 0..FLOORS {
        let y_base = 1 + f * FLOOR_HEIGHT;
        for y in 0..FLOOR_HEIGHT {
            for z in -hw..=hw {
                let x0 = TurretPlan::front_offset(f, z);
                for x in x0..DEPTH {
                    let interior = x > x0 && x < DEPTH - 1 && z > -hw && z < hw;
                    if interior && y > 0 && y < FLOOR_HEIGHT - 1 {
                        continue;
                    }
                    let front = x == x0;
                    let side_face = z.abs() == hw;

                    if f == 0 && front && z.abs() <= 3 && y < 6 {
                        b.put(x, y_base + y, z, DOOR);
                        continue;
                    }
                    if y == 0 || y == FLOOR_HEIGHT - 1 {
                        b.put(x, y_base + y, z, p.trim);
                        continue;
                    }
                    let window_row = y > 2 && y < FLOOR_HEIGHT - 2;
                    let rhythm = z.rem_euclid(4);
                    if (front || side_face) && window_row && (rhythm == 1 || rhythm == 2) {
                        b.lit(x, y_base + y, z, p.glass);
                        continue;
                    }
                    let color = if f == 0 { p.accent } else { p.wall };
                    b.put(x, y_base + y, z, color);
                }
            }
        }
    }

    let roof_y = 1 + FLOORS * FLOOR_HEIGHT;

    // Hipped roof, leaving the front corners to the turrets
    for h in 0..ROOF_LAYERS {
        for x in -2 + h..DEPTH + 2 - h {
            for z in -hw - 2 + h..=hw + 2 - h {
                if z.abs() > hw - 3 && x < 3 {
                    continue;
                }
                b.put(x, roof_y + h, z, p.roof);
            }
        }
    }

    let tx = -2;
    for tz in TurretPlan::turret_z() {
        for ty in 0..TURRET_HEIGHT {
            for dx in -2i32..=2 {
                for dz in -2i32..=2 {
                    if ty >= 8 {
                        // Spire narrows by half a cell per layer
                        let limit = 2.0 - (ty - 8) as f32 / 2.0;
                        if dx.abs() as f32 > limit || dz.abs() as f32 > limit {
                            continue;
                        }
                        b.put(tx + dx, roof_y + ty, tz + dz, p.roof);
                        continue;
                    }
                    let face = dx.abs() == 2 || dz.abs() == 2;
                    if ty > 2 && face && dx.abs() + dz.abs() < 4 {
                        b.lit(tx + dx, roof_y + ty, tz + dz, p.glass);
                    } else {
                        b.put(tx + dx, roof_y + ty, tz + dz, p.wall);
                    }
                }
            }
        }
        b.put(tx, roof_y + TURRET_HEIGHT, tz, GOLD);
    }

    for gy in 0..GABLE_HEIGHT {
        let span = GABLE_WIDTH - gy;
        for gz in -(span / 2)..=span / 2 {
            b.put(-3, roof_y + gy, gz, p.wall);
            b.put(-2, roof_y + gy + 1, gz, p.roof);
        }
    }

    b.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turret_finials() {
        let ctx = GenContext::default();
        let seed = (0..ctx.config.mansion_slots.count)
            .find(|&s| !ctx.is_blocked(EntityKind::MansionC, &plan(&ctx, s).footprint()))
            .unwrap();
        let p = plan(&ctx, seed);
        let set = generate(&ctx, seed, Side::Asia, Mode::Day);
        let gold: Vec<_> = set.iter().filter(|v| v.color == GOLD).collect();
        assert_eq!(gold.len(), 2);
        for v in gold {
            assert_eq!(v.cell.y, p.origin.y + 1 + FLOORS * FLOOR_HEIGHT + TURRET_HEIGHT);
        }
    }

    #[test]
    fn test_front_offsets() {
        assert_eq!(TurretPlan::front_offset(0, 0), 0);
        assert_eq!(TurretPlan::front_offset(1, 2), -2);
        assert_eq!(TurretPlan::front_offset(2, -9), -1);
        assert_eq!(TurretPlan::front_offset(2, 5), 0);
    }

    #[test]
    fn test_turret_windows_only_below_spire() {
        let ctx = GenContext::default();
        let seed = 0;
        let p = plan(&ctx, seed);
        let set = generate(&ctx, seed, Side::Asia, Mode::Night);
        if set.is_empty() {
            return;
        }
        let spire_base = p.origin.y + 1 + FLOORS * FLOOR_HEIGHT + 8;
        assert!(set.iter().filter(|v| v.is_light()).all(|v| v.cell.y < spire_base));
    }
}

//! White neoclassical palace: a central risalit projecting towards the
//! water, pilastered facades and a flat roof behind a balustrade.

use crate::core::types::IVec3;
use crate::math::Footprint;
use crate::procgen::SeedStream;
use crate::voxel::VoxelSet;

use super::palette::MANSION_B;
use super::{extent, mansion_slot_along, EntityKind, GenContext, Mode, Seed, Side, VoxelBuilder};

const SALT: u64 = 0xb2;

pub const FLOOR_HEIGHT: i32 = 10;
pub const SETBACK: i32 = 5;
/// How far the central bay projects towards the water
pub const RISALIT_DEPTH: i32 = 2;

#[derive(Clone, Copy, Debug)]
pub struct PalacePlan {
    pub width: i32,
    pub depth: i32,
    pub floors: i32,
    /// Width of the projecting central bay
    pub center_span: i32,
    pub origin: IVec3,
}

pub fn plan(ctx: &GenContext, seed: Seed) -> PalacePlan {
    let s = SeedStream::new(seed, SALT);
    let along = mansion_slot_along(&ctx.config, seed);
    let lateral = ctx.config.shore_lateral + SETBACK;
    let width = extent(s.int(1, 20, 6));
    PalacePlan {
        width,
        depth: extent(s.int(2, 14, 4)),
        floors: if s.above(3, 0.7) { 3 } else { 2 },
        center_span: extent(width * 2 / 5),
        origin: IVec3::new(lateral, ctx.ground(lateral, along), along),
    }
}

impl PalacePlan {
    pub fn half_width(&self) -> i32 {
        self.width / 2
    }

    fn is_center(&self, z: i32) -> bool {
        z.abs() * 2 < self.center_span
    }

    fn projection(&self, z: i32) -> i32 {
        if self.is_center(z) { RISALIT_DEPTH } else { 0 }
    }

    pub fn footprint(&self) -> Footprint {
        let hw = self.half_width();
        Footprint::new((-8, self.depth - 1), (-hw - 4, hw + 4))
            .translated(self.origin.x, self.origin.z)
    }
}

pub fn generate(ctx: &GenContext, seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let plan = plan(ctx, seed);
    if ctx.is_blocked(EntityKind::MansionB, &plan.footprint()) {
        return VoxelSet::empty();
    }
    let p = &MANSION_B;
    let hw = plan.half_width();
    let mut b = VoxelBuilder::at(side, mode, plan.origin);

    // Marble quay in front of the shore line
    for z in -hw - 4..=hw + 4 {
        for x in -8..-SETBACK {
            b.put(x, 0, z, p.accent);
        }
    }

    for f in 0..plan.floors {
        let y_base = 1 + f * FLOOR_HEIGHT;
        for y in 0..FLOOR_HEIGHT {
            for z in -hw..=hw {
                let proj = plan.projection(z);
                for x in -proj..plan.depth {
                    let interior = x > -proj && x < plan.depth - 1 && z.abs() < hw - 1;
                    if interior && y > 0 && y < FLOOR_HEIGHT - 1 {
                        continue;
                    }

                    let front = x == -proj;
                    let back = x == plan.depth - 1;
                    let side_face = z.abs() == hw;
                    let risalit_side = plan.is_center(z) && x < 0
                        && z.abs() == (plan.center_span - 1) / 2;
                    let visible = front || back || side_face || risalit_side;

                    let rhythm = z.rem_euclid(4);
                    let color = if !visible {
                        p.wall
                    } else if y == 0 || y == FLOOR_HEIGHT - 1 {
                        p.trim
                    } else if y > 2 && y < FLOOR_HEIGHT - 2 && (rhythm == 1 || rhythm == 2) {
                        b.lit(x, y_base + y, z, p.glass);
                        continue;
                    } else if rhythm == 0 {
                        p.trim
                    } else {
                        p.wall
                    };
                    b.put(x, y_base + y, z, color);
                }
            }
        }
    }

    // Flat roof behind a balustrade
    let roof_y = 1 + plan.floors * FLOOR_HEIGHT;
    for z in -hw..=hw {
        let proj = plan.projection(z);
        for x in -proj..plan.depth {
            b.put(x, roof_y, z, p.roof);

            let edge = x == -proj || x == plan.depth - 1 || z.abs() == hw;
            let inner_corner = !plan.is_center(z) && x == 0 && z.abs() == plan.center_span / 2;
            if edge || inner_corner {
                b.put(x, roof_y + 1, z, p.trim);
                if (x + z).rem_euclid(2) == 0 {
                    b.put(x, roof_y + 2, z, p.trim);
                }
                b.put(x, roof_y + 3, z, p.trim);
            }
        }
    }

    b.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::VoxelRole;

    fn open_seed(ctx: &GenContext) -> Seed {
        (0..ctx.config.mansion_slots.count)
            .find(|&s| !ctx.is_blocked(EntityKind::MansionB, &plan(ctx, s).footprint()))
            .unwrap()
    }

    #[test]
    fn test_plan_ranges() {
        let ctx = GenContext::default();
        for seed in 0..200 {
            let p = plan(&ctx, seed);
            assert!((20..26).contains(&p.width));
            assert!((14..18).contains(&p.depth));
            assert!(p.floors == 2 || p.floors == 3);
            assert!(p.center_span >= 8);
        }
    }

    #[test]
    fn test_risalit_projects() {
        let ctx = GenContext::default();
        let seed = open_seed(&ctx);
        let p = plan(&ctx, seed);
        let set = generate(&ctx, seed, Side::Asia, Mode::Day);
        let front_x = p.origin.x - RISALIT_DEPTH;
        assert!(set.iter().any(|v| v.cell.x == front_x && v.cell.z == p.origin.z));
        // Outer wings start at the main facade
        let wing_z = p.origin.z + p.half_width();
        assert!(!set.iter().any(|v| v.cell.x == front_x && v.cell.z == wing_z && v.cell.y > p.origin.y));
    }

    #[test]
    fn test_night_windows_glow() {
        let ctx = GenContext::default();
        let seed = open_seed(&ctx);
        let night = generate(&ctx, seed, Side::Europe, Mode::Night);
        let day = generate(&ctx, seed, Side::Europe, Mode::Day);
        assert!(night.count_role(VoxelRole::Light) > 0);
        assert_eq!(day.count_role(VoxelRole::Light), 0);
        assert_eq!(night.cells(), day.cells());
    }
}

//! Timber waterfront mansion with projecting upper floors.
//!
//! Upper floors overhang the ground floor towards the water (cumba) and are
//! carried by stepped diagonal braces. Windows follow a `mod 4` rhythm
//! along each face. A stepped hipped roof with eaves caps the house.

use crate::core::types::IVec3;
use crate::math::Footprint;
use crate::procgen::SeedStream;
use crate::voxel::{Rgb, VoxelSet};

use super::palette::{Palette, MANSION_A};
use super::{extent, mansion_slot_along, EntityKind, GenContext, Mode, Seed, Side, VoxelBuilder};

const SALT: u64 = 0xa1;

pub const FLOOR_HEIGHT: i32 = 11;
/// Cells between the quay edge and the ground-floor front wall
pub const SETBACK: i32 = 4;
/// Upper floors project this far towards the water
pub const CUMBA_SHIFT: i32 = 4;
pub const CUMBA_WIDEN: i32 = 2;
pub const ROOF_LAYERS: i32 = 7;
pub const ROOF_OVERHANG: i32 = 3;

const QUAY: Rgb = Rgb::hex(0xe2e8f0);

/// Inclusive local rectangle: x runs inland from the front wall, z along shore
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x_min: i32,
    pub x_max: i32,
    pub z_min: i32,
    pub z_max: i32,
}

impl Rect {
    pub fn grown(&self, by: i32) -> Rect {
        Rect {
            x_min: self.x_min - by,
            x_max: self.x_max + by,
            z_min: self.z_min - by,
            z_max: self.z_max + by,
        }
    }

    /// True when `other` lies strictly inside this rect on every side
    pub fn strictly_contains(&self, other: &Rect) -> bool {
        self.x_min < other.x_min && self.x_max > other.x_max
            && self.z_min < other.z_min && self.z_max > other.z_max
    }
}

/// Everything the generator decides from the seed
#[derive(Clone, Copy, Debug)]
pub struct MansionPlan {
    pub palette: &'static Palette,
    pub width: i32,
    pub depth: i32,
    pub floors: i32,
    /// Side-local origin: front wall lateral, ground elevation, centre along
    pub origin: IVec3,
}

pub fn plan(ctx: &GenContext, seed: Seed) -> MansionPlan {
    let s = SeedStream::new(seed, SALT);
    let along = mansion_slot_along(&ctx.config, seed);
    let lateral = ctx.config.shore_lateral + SETBACK;
    MansionPlan {
        palette: &MANSION_A[s.index(0, MANSION_A.len())],
        width: extent(s.int(1, 18, 10)),
        depth: extent(s.int(2, 16, 6)),
        floors: if s.above(3, 0.5) { 3 } else { 2 },
        origin: IVec3::new(lateral, ctx.ground(lateral, along), along),
    }
}

impl MansionPlan {
    /// Local rect of floor `f`; floors above the ground project and widen
    pub fn floor_rect(&self, f: i32) -> Rect {
        let (width, shift) = if f == 0 {
            (self.width, 0)
        } else {
            (self.width + CUMBA_WIDEN, -CUMBA_SHIFT)
        };
        Rect {
            x_min: shift,
            x_max: self.depth - 1,
            z_min: -(width / 2),
            z_max: width / 2,
        }
    }

    /// Local y of the first roof layer
    pub fn roof_base(&self) -> i32 {
        1 + self.floors * FLOOR_HEIGHT
    }

    /// Roof layer `h`: eaves shrink from the overhang down to the top floor
    pub fn roof_rect(&self, h: i32) -> Rect {
        let grow = ROOF_OVERHANG - (h * ROOF_OVERHANG) / (ROOF_LAYERS - 1);
        self.floor_rect(self.floors - 1).grown(grow)
    }

    /// Side-local ground footprint including quay and eaves
    pub fn footprint(&self) -> Footprint {
        let roof = self.roof_rect(0);
        Footprint::new((-8, roof.x_max), (roof.z_min, roof.z_max))
            .translated(self.origin.x, self.origin.z)
    }
}

pub fn generate(ctx: &GenContext, seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let plan = plan(ctx, seed);
    if ctx.is_blocked(EntityKind::MansionA, &plan.footprint()) {
        return VoxelSet::empty();
    }
    let p = plan.palette;
    let mut b = VoxelBuilder::at(side, mode, plan.origin);

    // Quay: stone lip over the water; the promenade takes over at the shore
    for z in -(plan.width / 2) - 2..=plan.width / 2 + 2 {
        for x in -8..-SETBACK {
            b.put(x, 0, z, QUAY);
        }
    }

    for f in 0..plan.floors {
        let r = plan.floor_rect(f);
        let y_base = 1 + f * FLOOR_HEIGHT;
        let depth = r.x_max - r.x_min + 1;

        for y in 0..FLOOR_HEIGHT {
            let cornice = y == 0;
            for i in 0..depth {
                for z in r.z_min..=r.z_max {
                    let shell = i == 0 || i == depth - 1 || z == r.z_min || z == r.z_max;
                    if !shell && y > 0 && y < FLOOR_HEIGHT - 1 {
                        continue;
                    }
                    let x = r.x_min + i;
                    let front_or_back = i == 0 || i == depth - 1;
                    let side_face = z == r.z_min || z == r.z_max;

                    let mut color = if y % 2 == 0 { p.accent } else { p.wall };
                    if cornice {
                        color = p.trim;
                    } else if (front_or_back || side_face) && (3..=FLOOR_HEIGHT - 3).contains(&y) {
                        let rhythm = if front_or_back { z } else { i };
                        let m = rhythm.abs() % 4;
                        if m == 1 || m == 2 {
                            let frame = y == 3 || y == FLOOR_HEIGHT - 3 || (m == 1 && y % 3 == 0);
                            if frame {
                                color = p.trim;
                            } else {
                                b.lit(x, y_base + y, z, p.glass);
                                continue;
                            }
                        }
                    }
                    b.put(x, y_base + y, z, color);
                }
            }
        }

        // Stepped braces under the first overhang
        if f == 1 {
            for z in (r.z_min..=r.z_max).step_by(4) {
                for s in 0..CUMBA_SHIFT {
                    b.put(-s, y_base - CUMBA_SHIFT + s, z, p.trim);
                    b.put(-s, y_base - CUMBA_SHIFT + s, z + 1, p.trim);
                }
            }
        }
    }

    let roof_y = plan.roof_base();
    for h in 0..ROOF_LAYERS {
        let r = plan.roof_rect(h);
        let top = h == ROOF_LAYERS - 1;
        for x in r.x_min..=r.x_max {
            for z in r.z_min..=r.z_max {
                let edge = x == r.x_min || x == r.x_max || z == r.z_min || z == r.z_max;
                if top || edge {
                    b.put(x, roof_y + h, z, p.roof);
                }
            }
        }
    }

    b.finish()
}

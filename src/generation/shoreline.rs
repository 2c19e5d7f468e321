//! Shoreline terrain: ground cover over the height field, the quay wall and
//! scattered hillside trees.

use crate::math::Footprint;
use crate::procgen::{rng, SeedStream, ZoneKind};
use crate::voxel::{Rgb, VoxelSet};

use super::{apartment, extent, flora, GenContext, Mode, Seed, Side, VoxelBuilder};

const SALT: u64 = 0x5407;

/// Cells of quay wall below the promenade edge
pub const QUAY_WALL_DEPTH: i32 = 15;

const QUAY_WALL: Rgb = Rgb::hex(0x334155);
const PAVING: Rgb = Rgb::hex(0xcbd5e1);
const PROMENADE: Rgb = Rgb::hex(0xd6d3d1);
const ASPHALT: Rgb = Rgb::hex(0x475569);
const GRASS: Rgb = Rgb::hex(0x65a30d);
const GRASS_DARK: Rgb = Rgb::hex(0x4d7c0f);

/// Ground surface height at a side-local cell, including the flattened
/// mosque plaza
pub fn ground_height(ctx: &GenContext, lateral: i32, along: i32) -> i32 {
    let in_plaza = ctx
        .exclusion
        .zone(ZoneKind::MosquePlaza)
        .is_some_and(|z| z.contains_cell(lateral, along));
    if in_plaza {
        ctx.config.plaza_height
    } else {
        ctx.ground(lateral, along)
    }
}

pub fn generate(ctx: &GenContext, seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    let cfg = &ctx.config;
    let stream = SeedStream::new(seed, SALT);
    let mut b = VoxelBuilder::new(side, mode);
    let plaza = ctx.exclusion.zone(ZoneKind::MosquePlaza).copied();
    let spacing = extent(cfg.tree_spacing);

    // Trees keep clear of apartment blocks
    let clearance = flora::MAX_CROWN_RADIUS + 1;
    let blocks: Vec<Footprint> = apartment::placed_footprints(ctx)
        .into_iter()
        .map(|f| Footprint::new(
            (f.lateral_min - clearance, f.lateral_max + clearance),
            (f.along_min - clearance, f.along_max + clearance),
        ))
        .collect();

    for along in -cfg.along_half_range..cfg.along_half_range {
        for d in 0..cfg.land_depth {
            let lateral = cfg.shore_lateral + d;
            let in_plaza = plaza.is_some_and(|z| z.contains_cell(lateral, along));
            let h = if in_plaza { cfg.plaza_height } else { ctx.ground(lateral, along) };

            let color = if in_plaza {
                PAVING
            } else if d < cfg.promenade_depth {
                PROMENADE
            } else if d < cfg.road_depth {
                ASPHALT
            } else if stream.cell(0, lateral, along) > 0.4 {
                GRASS
            } else {
                GRASS_DARK
            };
            b.put(lateral, h, along, color);

            if d == 0 {
                for k in 1..=QUAY_WALL_DEPTH {
                    b.put(lateral, h - k, along, QUAY_WALL);
                }
            }

            let candidate = d >= cfg.road_depth
                && d % spacing == 0
                && along.rem_euclid(spacing) == 0
                && stream.cell(1, lateral, along) > cfg.tree_threshold
                && !blocks.iter().any(|f| f.contains(lateral, along));
            if candidate {
                let tree = stream.derive(rng::cell_hash(seed as u64, lateral, along));
                flora::plant_tree(ctx, &mut b, &tree, lateral, h + 1, along);
            }
        }
    }
    b.finish()
}

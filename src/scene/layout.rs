//! Where every entity of the scene goes
//!
//! Land structures are generated in place, so they get a fixed identity
//! placement. Boats, wildlife and traffic are generated around their own
//! origin and get a motion.

use crate::animation::{Motion, POD_FORMATION, WATER_LEVEL};
use crate::core::types::{Vec2, Vec3};
use crate::generation::bridge::{DECK_HALF_LENGTH, DECK_Y, LANES};
use crate::generation::{
    mansion_variant, tower, EntityKey, EntityKind, GenContext, Mode, Seed, Side,
};
use crate::procgen::SeedStream;
use crate::voxel::VOXEL_SCALE;

use super::config::{SceneConfig, MAX_CARS_PER_LANE};
use super::node::EntityInstance;

const GULL_SALT: u64 = 0x9a11;
const CAR_SALT: u64 = 0xca75;

/// Hulls ride two cells deep
const DRAFT: f32 = 2.0 * VOXEL_SCALE;

/// Dolphin pod paths: centre (x, z), radii, angular speed, start angle
const PODS: [(Vec2, Vec2, f32, f32); 2] = [
    (Vec2::new(0.0, 0.0), Vec2::new(3.0, 28.0), 0.12, 0.0),
    (Vec2::new(12.0, 0.0), Vec2::new(2.0, 14.0), 0.1, 3.5),
];

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Europe => "europe",
        Side::Asia => "asia",
    }
}

/// All entity instances for a configuration, in a stable order
pub fn layout(config: &SceneConfig, ctx: &GenContext) -> Vec<EntityInstance> {
    let mode = config.mode;
    let key = |kind, seed, side| EntityKey::new(kind, seed, side, mode);
    let mut out = Vec::new();

    for side in Side::BOTH {
        out.push(EntityInstance::in_place(
            format!("shoreline/{}", side_name(side)),
            key(EntityKind::Shoreline, config.seed, side),
        ));
    }

    // each shore draws its own slot seeds so the two banks differ
    let slots = ctx.config.mansion_slots.count;
    for (n, side) in Side::BOTH.into_iter().enumerate() {
        for slot in 0..slots {
            let seed = slot + n as u32 * slots;
            let kind = mansion_variant(seed);
            out.push(EntityInstance::in_place(
                format!("{}[{}]/{}", kind.name(), slot, side_name(side)),
                key(kind, seed, side),
            ));
        }
    }

    let blocks = ctx.config.apartment_grid.len();
    for (n, side) in Side::BOTH.into_iter().enumerate() {
        for block in 0..blocks {
            out.push(EntityInstance::in_place(
                format!("apartment[{}]/{}", block, side_name(side)),
                key(EntityKind::Apartment, block + n as u32 * blocks, side),
            ));
        }
    }

    out.push(EntityInstance::in_place("bridge", key(EntityKind::Bridge, 0, Side::Asia)));
    out.push(EntityInstance::in_place(
        "mosque",
        key(EntityKind::Mosque, ctx.config.mosque_seed, Side::Europe),
    ));

    let tower_seed = ctx.config.tower_seed;
    out.push(EntityInstance::in_place("tower", key(EntityKind::Tower, tower_seed, Side::Asia)));
    out.push(EntityInstance::new(
        "flag",
        key(EntityKind::Flag, 0, Side::Asia),
        Motion::fixed(tower::flag_mount(ctx, tower_seed, Side::Asia)),
    ));

    out.push(EntityInstance::in_place("water", key(EntityKind::Water, 0, Side::Asia)));

    if config.boats {
        push_boats(&mut out, config.seed, mode);
    }
    if config.dolphins {
        push_dolphins(&mut out, mode);
    }
    push_gulls(&mut out, config, mode);
    push_traffic(&mut out, config, ctx, mode);

    out
}

fn push_boats(out: &mut Vec<EntityInstance>, seed: Seed, mode: Mode) {
    let y = WATER_LEVEL - DRAFT;
    out.push(EntityInstance::new(
        "ferry",
        EntityKey::new(EntityKind::Ferry, seed, Side::Asia, mode),
        Motion::FerryLoop { center_x: 6.0, sway: 1.5, reach: 20.0, speed: 0.08, y },
    ));
    out.push(EntityInstance::new(
        "tanker",
        EntityKey::new(EntityKind::Tanker, seed, Side::Europe, mode),
        Motion::Transit { x: -5.0, speed: 2.0, path_length: 160.0, y },
    ));
    out.push(EntityInstance::new(
        "fishing_boat",
        EntityKey::new(EntityKind::FishingBoat, seed, Side::Europe, mode),
        Motion::EllipseLoop {
            center: Vec2::new(-11.0, 0.0),
            radii: Vec2::new(2.0, 22.0),
            speed: 0.08,
            phase: 100.0,
            y,
        },
    ));
}

fn push_dolphins(out: &mut Vec<EntityInstance>, mode: Mode) {
    // every dolphin shares one voxel set
    let key = EntityKey::new(EntityKind::Dolphin, 0, Side::Asia, mode);
    for (p, &(center, radii, speed, start_angle)) in PODS.iter().enumerate() {
        for (m, member) in POD_FORMATION.iter().enumerate() {
            out.push(EntityInstance::new(
                format!("dolphin[{}.{}]", p, m),
                key,
                Motion::DolphinPod {
                    center,
                    radii,
                    speed,
                    start_angle,
                    depth: WATER_LEVEL - 1.0,
                    member: *member,
                },
            ));
        }
    }
}

fn push_gulls(out: &mut Vec<EntityInstance>, config: &SceneConfig, mode: Mode) {
    let key = EntityKey::new(EntityKind::Seagull, 0, Side::Asia, mode);
    for i in 0..config.gulls {
        let s = SeedStream::new(config.seed, GULL_SALT).derive(i as u64);
        out.push(EntityInstance::new(
            format!("gull[{}]", i),
            key,
            Motion::GullOrbit {
                center: Vec3::new(s.range(0, -5.0, 5.0), s.range(1, 5.0, 10.0), s.range(2, -5.0, 5.0)),
                radius: s.range(3, 5.0, 15.0),
                speed: s.range(4, 0.8, 1.4),
                phase: s.range(5, 0.0, 100.0),
            },
        ));
    }
}

fn push_traffic(out: &mut Vec<EntityInstance>, config: &SceneConfig, ctx: &GenContext, mode: Mode) {
    let cars = config.cars_per_lane;
    if cars == 0 {
        return;
    }
    let half_span = DECK_HALF_LENGTH as f32 * VOXEL_SCALE;
    let deck_y = (DECK_Y + 1) as f32 * VOXEL_SCALE;
    let gap = half_span * 2.0 / cars as f32;

    for (lane, &offset) in LANES.iter().enumerate() {
        // lanes south of the centre line run towards Asia
        let side = if offset < 0 { Side::Asia } else { Side::Europe };
        let lane_z = (ctx.config.bridge_along + offset) as f32 * VOXEL_SCALE;
        for i in 0..cars {
            let s = SeedStream::new(config.seed, CAR_SALT).derive((lane as u64) << 8 | i as u64);
            let seed = config.seed.wrapping_add(lane as u32 * MAX_CARS_PER_LANE + i);
            out.push(EntityInstance::new(
                format!("car[{}.{}]", lane, i),
                EntityKey::new(EntityKind::Car, seed, side, mode),
                Motion::LaneTraffic {
                    lane_z,
                    deck_y,
                    half_span,
                    speed: s.range(0, 2.0, 3.5),
                    phase: i as f32 * gap + s.range(1, 0.0, gap * 0.5),
                    direction: side.sign() as f32,
                },
            ));
        }
    }
}

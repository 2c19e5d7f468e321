//! End-to-end checks on the generated waterfront

use std::collections::HashSet;

use bosphorus::animation::AnimationClock;
use bosphorus::generation::bridge::{DECK_HALF_LENGTH, DECK_Y, LINE};
use bosphorus::generation::shoreline::ground_height;
use bosphorus::generation::{mansion_a, mosque, EntityKind, GenContext, Mode, Side};
use bosphorus::scene::{render_top_down, save_png, Scene, SceneConfig};
use bosphorus::voxel::{partition, VOXEL_SCALE};
use bosphorus::InstanceBufferManager;

#[test]
fn bridge_deck_spans_its_full_width() {
    let ctx = GenContext::shared();
    let set = ctx.generate(EntityKind::Bridge, 0, Side::Asia, Mode::Day);
    let center = ctx.config.bridge_along as f32 * VOXEL_SCALE;
    let deck_y = DECK_Y as f32 * VOXEL_SCALE;

    // (x, z offset) of every deck-level voxel, recovered from world space
    let deck: HashSet<(i32, i32)> = set
        .iter()
        .map(|v| v.position())
        .filter(|p| p.y == deck_y)
        .map(|p| {
            (
                (p.x / VOXEL_SCALE).round() as i32,
                ((p.z - center) / VOXEL_SCALE).round() as i32,
            )
        })
        .collect();
    let half = (2.25 / VOXEL_SCALE) as i32;
    for x in -DECK_HALF_LENGTH..=DECK_HALF_LENGTH {
        for dz in -half..=half {
            assert!(
                deck.contains(&(x, dz)),
                "deck gap at x {} z offset {}",
                x as f32 * VOXEL_SCALE,
                dz as f32 * VOXEL_SCALE
            );
        }
    }

    let line: Vec<_> = set
        .iter()
        .filter(|v| v.cell.y == DECK_Y && v.cell.z == ctx.config.bridge_along)
        .collect();
    assert_eq!(line.len(), (2 * DECK_HALF_LENGTH + 1) as usize);
    assert!(line.iter().all(|v| v.color == LINE));
}

#[test]
fn mansion_roof_overhangs_top_floor() {
    let ctx = GenContext::shared();
    for seed in 0..100 {
        let plan = mansion_a::plan(ctx, seed);
        assert!(plan.floors == 2 || plan.floors == 3, "seed {}", seed);
        let top = plan.floor_rect(plan.floors - 1);
        for h in 0..mansion_a::ROOF_LAYERS - 1 {
            assert!(plan.roof_rect(h).strictly_contains(&top), "seed {} layer {}", seed, h);
        }
    }
}

#[test]
fn mosque_in_bridge_corridor_is_empty() {
    let ctx = GenContext::shared();
    let seed = ctx.config.landmark_slots.seed_for(ctx.config.bridge_along);
    assert!(ctx.is_blocked(EntityKind::Mosque, &mosque::plan(ctx, seed).footprint()));
    for side in Side::BOTH {
        for mode in Mode::BOTH {
            assert!(ctx.generate(EntityKind::Mosque, seed, side, mode).is_empty());
        }
    }
    assert!(!ctx
        .generate(EntityKind::Mosque, ctx.config.mosque_seed, Side::Europe, Mode::Night)
        .is_empty());
}

#[test]
fn structures_leave_terrain_cells_to_the_shoreline() {
    let ctx = GenContext::shared();
    let shore = ctx.config.shore_lateral..ctx.config.land_end();
    let kinds = [
        EntityKind::MansionA,
        EntityKind::MansionB,
        EntityKind::MansionC,
        EntityKind::Apartment,
    ];
    for kind in kinds {
        for seed in 0..20 {
            let set = ctx.generate(kind, seed, Side::Europe, Mode::Day);
            for v in set.iter().filter(|v| shore.contains(&v.cell.x.abs())) {
                let ground = ground_height(ctx, v.cell.x.abs(), v.cell.z);
                assert!(
                    v.cell.y > ground,
                    "{} seed {} buries {:?} (ground {})",
                    kind.name(), seed, v.cell, ground
                );
            }
        }
    }
}

#[test]
fn night_mansion_partitions_cleanly() {
    let ctx = GenContext::shared();
    let seed = (0..ctx.config.mansion_slots.count)
        .find(|&s| !ctx.generate(EntityKind::MansionB, s, Side::Europe, Mode::Night).is_empty())
        .unwrap();
    let set = ctx.generate(EntityKind::MansionB, seed, Side::Europe, Mode::Night);
    let parts = partition(&set);
    assert!(!parts.light.is_empty());
    assert_eq!(parts.opaque.len() + parts.light.len(), set.len());

    // a manager only rebuilds when handed a different set
    let mut manager = InstanceBufferManager::default();
    let opaque = std::sync::Arc::new(parts.opaque);
    assert!(manager.sync(&opaque));
    assert!(!manager.sync(&opaque));
    assert_eq!(manager.count(), opaque.len());
}

#[test]
fn scene_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("scene.json");
    std::fs::write(&config_path, r#"{ "seed": 7, "gulls": 3, "cars_per_lane": 1 }"#).unwrap();
    let config = SceneConfig::load(&config_path).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.mode, Mode::Day);

    let mut scene = Scene::new(config).unwrap();
    let report = scene.refresh();
    assert!(report.generated > 0);
    let stats = scene.stats();
    assert_eq!(stats.entities, scene.entities().len());
    assert_eq!(stats.light_voxels, 0);
    assert!(stats.per_kind.contains_key("bridge"));

    // boats move, land stays
    let mut clock = AnimationClock::new();
    clock.advance(2.5);
    let before = scene.transforms_at(0.0);
    let after = scene.transforms_at(clock.elapsed());
    let moved = before.iter().zip(&after).filter(|(a, b)| a != b).count();
    let animated = scene.entities().iter().filter(|e| e.motion.is_animated()).count();
    assert_eq!(moved, animated);

    let image = render_top_down(&scene, clock.elapsed(), 2.0);
    let map = dir.path().join("out").join("map.png");
    save_png(&image, &map).unwrap();
    assert!(map.exists());
}

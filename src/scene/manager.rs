//! Scene: generation cache, instance buffers and per-frame transforms

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::animation::{cloth, water};
use crate::core::types::Mat4;
use crate::core::Result;
use crate::generation::{EntityKey, EntityKind, GenContext, GeneratedEntity, GenerationCache, Mode};
use crate::instancing::{InstanceBufferManager, InstanceData};
use crate::voxel::VoxelSet;

use super::config::SceneConfig;
use super::layout::layout;
use super::node::{BufferSlot, EntityInstance, Stream};

/// Outcome of one [`Scene::refresh`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    /// Sets generated because they were not cached yet
    pub generated: usize,
    /// Instance buffers rebuilt because their set changed
    pub rebuilt: usize,
}

/// One instanced draw: a shared buffer placed by an entity transform
#[derive(Clone, Copy, Debug)]
pub struct DrawItem {
    /// Index into [`Scene::entities`]
    pub entity: usize,
    pub slot: BufferSlot,
    pub transform: Mat4,
    pub instances: usize,
}

/// Voxel totals per stream, counting every placed instance
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SceneStats {
    pub mode: Mode,
    pub entities: usize,
    /// Distinct generated sets (instances of one set share buffers)
    pub unique_sets: usize,
    pub opaque_voxels: usize,
    pub light_voxels: usize,
    /// Placed entities whose generator returned nothing
    pub empty_entities: usize,
    /// Voxel count per entity kind name
    pub per_kind: BTreeMap<String, usize>,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

/// The full waterfront: every placed entity plus the buffers that draw it.
///
/// Generation happens only in [`refresh`](Self::refresh); changing the mode
/// just re-keys the entities.
pub struct Scene {
    config: SceneConfig,
    cache: GenerationCache,
    entities: Vec<EntityInstance>,
    buffers: HashMap<BufferSlot, InstanceBufferManager>,
    mode: Mode,
}

impl Scene {
    /// Lay out a scene. Fails when the configuration does not validate.
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let ctx = GenContext::new(config.generation.clone());
        let entities = layout(&config, &ctx);
        log::info!(
            "Scene laid out: {} entities (seed={}, mode={:?})",
            entities.len(), config.seed, config.mode
        );
        Ok(Self {
            mode: config.mode,
            cache: GenerationCache::new(ctx),
            entities,
            buffers: HashMap::new(),
            config,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn context(&self) -> &GenContext {
        self.cache.context()
    }

    pub fn entities(&self) -> &[EntityInstance] {
        &self.entities
    }

    /// Switch lighting mode. Takes effect on the next refresh.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        log::info!("Switching scene mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        for entity in &mut self.entities {
            entity.key = entity.key.with_mode(mode);
        }
    }

    /// Generate missing sets and bring every instance buffer up to date
    pub fn refresh(&mut self) -> RefreshReport {
        let start = Instant::now();
        let keys: Vec<EntityKey> = self.entities.iter().map(|e| e.key).collect();
        let generated = self.cache.generate_missing(&keys);

        let mut rebuilt = 0;
        for key in keys {
            let entity = self.cache.get_or_generate(key);
            for stream in Stream::ALL {
                let manager = self.buffers.entry(BufferSlot::new(key, stream)).or_default();
                if manager.sync(stream_set(&entity, stream)) {
                    rebuilt += 1;
                }
            }
        }

        let (hits, misses) = self.cache.stats();
        log::info!(
            "Scene refresh: {} generated, {} buffers rebuilt, cache {}/{} hit/miss in {:.1}ms",
            generated, rebuilt, hits, misses,
            start.elapsed().as_secs_f64() * 1000.0
        );
        RefreshReport { generated, rebuilt }
    }

    /// Generated data for an entity, if refreshed since its key last changed
    pub fn generated(&self, entity: usize) -> Option<Arc<GeneratedEntity>> {
        self.cache.get(&self.entities.get(entity)?.key)
    }

    pub fn buffer(&self, slot: &BufferSlot) -> Option<&InstanceBufferManager> {
        self.buffers.get(slot)
    }

    /// Every instance buffer synced so far, keyed by slot
    pub fn buffers(&self) -> impl Iterator<Item = (&BufferSlot, &InstanceBufferManager)> {
        self.buffers.iter()
    }

    /// Entity-to-world transforms at time `t`, in entity order
    pub fn transforms_at(&self, t: f32) -> Vec<Mat4> {
        self.entities.iter().map(|e| e.transform_at(t)).collect()
    }

    /// Instanced draws for time `t`; entities with an empty stream are skipped
    pub fn draws_at(&self, t: f32) -> Vec<DrawItem> {
        let mut draws = Vec::new();
        for (i, entity) in self.entities.iter().enumerate() {
            let transform = entity.transform_at(t);
            for stream in Stream::ALL {
                let slot = BufferSlot::new(entity.key, stream);
                let instances = self.buffers.get(&slot).map_or(0, InstanceBufferManager::count);
                if instances > 0 {
                    draws.push(DrawItem { entity: i, slot, transform, instances });
                }
            }
        }
        draws
    }

    /// World-space flag instances waving at time `t`
    pub fn flag_frame(&self, t: f32) -> Option<Vec<InstanceData>> {
        let flag = self.first_of(EntityKind::Flag)?;
        let set = self.cache.get(&flag.key)?;
        // the cloth carries its own cell scale
        Some(cloth::flag_instances(&set.voxels, flag.motion.transform_at(t), t))
    }

    /// Water surface instances displaced by the waves at time `t`
    pub fn water_frame(&self, t: f32) -> Option<Vec<InstanceData>> {
        let entity = self.first_of(EntityKind::Water)?;
        let set = self.cache.get(&entity.key)?;
        Some(water::surface_instances(&set.voxels, t))
    }

    fn first_of(&self, kind: EntityKind) -> Option<&EntityInstance> {
        self.entities.iter().find(|e| e.key.kind == kind)
    }

    /// Voxel totals for the current mode; entities not yet generated count
    /// as empty
    pub fn stats(&self) -> SceneStats {
        let (cache_hits, cache_misses) = self.cache.stats();
        let mut stats = SceneStats {
            mode: self.mode,
            entities: self.entities.len(),
            cache_hits,
            cache_misses,
            ..Default::default()
        };
        let mut seen = std::collections::HashSet::new();
        for entity in &self.entities {
            let Some(set) = self.cache.get(&entity.key) else {
                stats.empty_entities += 1;
                continue;
            };
            if seen.insert(entity.key) {
                stats.unique_sets += 1;
            }
            if set.voxels.is_empty() {
                stats.empty_entities += 1;
            }
            stats.opaque_voxels += set.opaque.len();
            stats.light_voxels += set.light.len();
            *stats.per_kind.entry(entity.key.kind.name().to_string()).or_default() += set.voxels.len();
        }
        stats
    }
}

fn stream_set(entity: &GeneratedEntity, stream: Stream) -> &Arc<VoxelSet> {
    match stream {
        Stream::Opaque => &entity.opaque,
        Stream::Light => &entity.light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Few gulls and cars so refresh stays quick
    fn small_config() -> SceneConfig {
        SceneConfig {
            gulls: 2,
            cars_per_lane: 1,
            dolphins: true,
            boats: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_rejects_invalid_generation_config() {
        let mut config = small_config();
        config.generation.tree_spacing = 0;
        let err = Scene::new(config).err().unwrap();
        assert!(matches!(err, crate::core::Error::InvalidConfig(_)));
    }

    #[test]
    fn test_refresh_generates_once() {
        let mut scene = Scene::new(small_config()).unwrap();
        let first = scene.refresh();
        assert!(first.generated > 0);
        assert!(first.rebuilt > 0);
        let second = scene.refresh();
        assert_eq!(second, RefreshReport { generated: 0, rebuilt: 0 });
    }

    #[test]
    fn test_shared_sets_share_buffers() {
        let mut scene = Scene::new(small_config()).unwrap();
        scene.refresh();
        let stats = scene.stats();
        // eight dolphins and two gulls collapse onto one set each
        assert!(stats.unique_sets < stats.entities);
        let dolphins: Vec<&EntityInstance> = scene
            .entities()
            .iter()
            .filter(|e| e.key.kind == EntityKind::Dolphin)
            .collect();
        assert_eq!(dolphins.len(), 8);
        assert!(dolphins.iter().all(|e| e.key == dolphins[0].key));
    }

    #[test]
    fn test_mode_switch_rebuilds_and_keeps_geometry() {
        let mut scene = Scene::new(small_config()).unwrap();
        scene.refresh();
        let day = scene.stats();
        scene.set_mode(Mode::Night);
        let report = scene.refresh();
        assert!(report.generated > 0);
        assert!(report.rebuilt > 0);
        let night = scene.stats();
        assert_eq!(night.mode, Mode::Night);
        assert_eq!(
            day.opaque_voxels + day.light_voxels,
            night.opaque_voxels + night.light_voxels
        );
        assert!(night.light_voxels > day.light_voxels);

        // switching back hits the cache but still hands buffers new sets
        scene.set_mode(Mode::Day);
        let back = scene.refresh();
        assert_eq!(back.generated, 0);
        assert!(back.rebuilt > 0);
        assert_eq!(scene.stats().light_voxels, day.light_voxels);
    }

    #[test]
    fn test_draws_skip_empty_streams() {
        let mut scene = Scene::new(small_config()).unwrap();
        assert!(scene.draws_at(0.0).is_empty());
        scene.refresh();
        let draws = scene.draws_at(1.0);
        assert!(!draws.is_empty());
        assert!(draws.iter().all(|d| d.instances > 0));
        // beacons stay dark by day, so the bridge has no lit stream
        let bridge = scene.entities().iter().position(|e| e.key.kind == EntityKind::Bridge).unwrap();
        assert!(draws.iter().any(|d| d.entity == bridge && d.slot.stream == Stream::Opaque));
        assert!(!draws.iter().any(|d| d.entity == bridge && d.slot.stream == Stream::Light));
    }

    #[test]
    fn test_transforms_follow_entities() {
        let scene = Scene::new(small_config()).unwrap();
        let t0 = scene.transforms_at(0.0);
        let t1 = scene.transforms_at(5.0);
        assert_eq!(t0.len(), scene.entities().len());
        for (i, e) in scene.entities().iter().enumerate() {
            assert_eq!(t0[i] != t1[i], e.motion.is_animated(), "{}", e.name);
        }
    }

    #[test]
    fn test_frames_need_refresh() {
        let mut scene = Scene::new(small_config()).unwrap();
        assert!(scene.flag_frame(0.0).is_none());
        scene.refresh();
        let flag = scene.flag_frame(0.5).unwrap();
        assert_eq!(flag.len(), 60 * 40);
        let water = scene.water_frame(0.5).unwrap();
        assert_eq!(water.len(), 192 * 480);
    }
}

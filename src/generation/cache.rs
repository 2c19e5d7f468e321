//! Memoized generator output keyed by `(kind, seed, side, mode)`.
//!
//! Generators are pure, so a cached entity never goes stale. A key keeps
//! handing out the same `Arc` until the cache is cleared, which lets
//! downstream instance buffers skip rebuilds by pointer comparison.

use std::collections::HashMap;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::voxel::{partition, VoxelSet};

use super::{EntityKind, GenContext, Mode, Seed, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityKey {
    pub kind: EntityKind,
    pub seed: Seed,
    pub side: Side,
    pub mode: Mode,
}

impl EntityKey {
    pub fn new(kind: EntityKind, seed: Seed, side: Side, mode: Mode) -> Self {
        Self { kind, seed, side, mode }
    }

    /// Same entity under the other lighting mode
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }
}

/// One generated entity with its render streams split out
#[derive(Debug)]
pub struct GeneratedEntity {
    pub key: EntityKey,
    pub voxels: VoxelSet,
    pub opaque: Arc<VoxelSet>,
    pub light: Arc<VoxelSet>,
}

impl GeneratedEntity {
    pub fn generate(ctx: &GenContext, key: EntityKey) -> Self {
        let voxels = ctx.generate(key.kind, key.seed, key.side, key.mode);
        let split = partition(&voxels);
        Self {
            key,
            voxels,
            opaque: Arc::new(split.opaque),
            light: Arc::new(split.light),
        }
    }
}

pub struct GenerationCache {
    ctx: GenContext,
    entries: HashMap<EntityKey, Arc<GeneratedEntity>>,
    hits: u64,
    misses: u64,
}

impl GenerationCache {
    pub fn new(ctx: GenContext) -> Self {
        Self {
            ctx,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn context(&self) -> &GenContext {
        &self.ctx
    }

    pub fn get(&self, key: &EntityKey) -> Option<Arc<GeneratedEntity>> {
        self.entries.get(key).cloned()
    }

    /// Cached entity, generating it on first request
    pub fn get_or_generate(&mut self, key: EntityKey) -> Arc<GeneratedEntity> {
        if let Some(entity) = self.entries.get(&key) {
            self.hits += 1;
            return Arc::clone(entity);
        }
        self.misses += 1;
        let entity = Arc::new(GeneratedEntity::generate(&self.ctx, key));
        self.entries.insert(key, Arc::clone(&entity));
        entity
    }

    /// Generate every absent key in parallel. Returns how many were built.
    pub fn generate_missing(&mut self, keys: &[EntityKey]) -> usize {
        // Phase 1: collect absent keys (sequential, deduplicated)
        let mut missing: Vec<EntityKey> = keys
            .iter()
            .filter(|k| !self.entries.contains_key(k))
            .copied()
            .collect();
        missing.sort_unstable();
        missing.dedup();
        self.hits += (keys.len() - missing.len()) as u64;
        if missing.is_empty() {
            return 0;
        }

        // Phase 2: generate in parallel
        let start = std::time::Instant::now();
        let ctx = &self.ctx;
        let built: Vec<GeneratedEntity> = missing
            .par_iter()
            .map(|&key| GeneratedEntity::generate(ctx, key))
            .collect();

        let count = built.len();
        let voxels: usize = built.iter().map(|e| e.voxels.len()).sum();
        for entity in built {
            self.entries.insert(entity.key, Arc::new(entity));
        }
        self.misses += count as u64;
        log::debug!(
            "Generated {} entities ({} voxels) in {:.1}ms",
            count, voxels, start.elapsed().as_secs_f64() * 1000.0
        );
        count
    }

    pub fn contains(&self, key: &EntityKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(hits, misses)` since creation
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for GenerationCache {
    fn default() -> Self {
        Self::new(GenContext::default())
    }
}

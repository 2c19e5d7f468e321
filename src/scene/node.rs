//! Placed entity instances

use serde::Serialize;

use crate::animation::Motion;
use crate::core::types::{Mat4, Vec3};
use crate::generation::{EntityKey, EntityKind, Seed, Side};

/// Render stream of a generated entity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    Opaque,
    Light,
}

impl Stream {
    pub const ALL: [Stream; 2] = [Stream::Opaque, Stream::Light];
}

/// Identifies a generated voxel set independent of lighting mode.
///
/// A mode switch hands the same slot a new set, which is what triggers the
/// instance buffer rebuild.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferSlot {
    pub kind: EntityKind,
    pub seed: Seed,
    pub side: Side,
    pub stream: Stream,
}

impl BufferSlot {
    pub fn new(key: EntityKey, stream: Stream) -> Self {
        Self {
            kind: key.kind,
            seed: key.seed,
            side: key.side,
            stream,
        }
    }
}

/// One placement of a generated entity in the scene
#[derive(Clone, Debug)]
pub struct EntityInstance {
    pub name: String,
    pub key: EntityKey,
    pub motion: Motion,
    /// Uniform scale applied on top of the motion
    pub scale: f32,
}

impl EntityInstance {
    pub fn new(name: impl Into<String>, key: EntityKey, motion: Motion) -> Self {
        Self {
            name: name.into(),
            key,
            motion,
            scale: key.kind.entity_scale(),
        }
    }

    /// Entity placed where its generator already put it
    pub fn in_place(name: impl Into<String>, key: EntityKey) -> Self {
        Self::new(name, key, Motion::fixed(Vec3::ZERO))
    }

    /// Entity-to-world transform at time `t`
    pub fn transform_at(&self, t: f32) -> Mat4 {
        let placement = self.motion.transform_at(t);
        if self.scale == 1.0 {
            placement
        } else {
            placement * Mat4::from_scale(Vec3::splat(self.scale))
        }
    }
}

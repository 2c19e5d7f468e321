//! Bosphorus - deterministic procedural voxel generation for a waterfront scene
//!
//! Entities (terrain, mansions, apartments, bridge, mosque, tower, boats,
//! wildlife, traffic, water) are generated as [`voxel::VoxelSet`]s from
//! `(kind, seed, side, mode)`, partitioned into opaque and light streams, and
//! materialized into instance buffers for a renderer. A [`Scene`] lays the
//! entities out along the strait and animates boats, wildlife and traffic.

pub mod core;
pub mod math;
pub mod voxel;
pub mod procgen;
pub mod generation;
pub mod instancing;
pub mod animation;
pub mod scene;
#[cfg(feature = "gpu")]
pub mod render;

pub use animation::{AnimationClock, Motion};
pub use crate::core::Error;
pub use generation::{generate_entity, EntityKind, GenContext, GenerationConfig, Mode, Seed, Side};
pub use instancing::{sync_instances, InstanceBuffer, InstanceBufferManager, InstanceData};
pub use scene::{Scene, SceneConfig};
pub use voxel::{partition, Partition, Voxel, VoxelSet};

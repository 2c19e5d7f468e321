//! Instance records for batched voxel drawing
//!
//! A [`VoxelSet`](crate::voxel::VoxelSet) is lowered into one
//! [`InstanceData`] per voxel: a translation-and-uniform-scale matrix plus a
//! color. The renderer draws one unit cube per record.

pub mod instance_data;
pub mod manager;

pub use instance_data::{InstanceBuffer, InstanceData, sync_instances};
pub use manager::InstanceBufferManager;

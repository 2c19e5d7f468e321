//! Voxel data types, ordered sets and stream partitioning

pub mod voxel;
pub mod set;
pub mod partition;

pub use voxel::{Rgb, Voxel, VoxelRole, VOXEL_SCALE};
pub use set::VoxelSet;
pub use partition::{partition, Partition};

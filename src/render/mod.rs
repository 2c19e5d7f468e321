//! GPU upload of scene instance buffers (feature `gpu`)
//!
//! A thin adapter: the host renderer owns the device, pipeline and draw
//! calls; this module only mirrors CPU instance buffers into vertex buffers.

pub mod buffer;

pub use buffer::{instance_layout, GpuInstanceBuffer, SceneUploader, INSTANCE_ATTRIBUTES};

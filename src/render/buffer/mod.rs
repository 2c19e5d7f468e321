//! GPU buffer management

pub mod instance_buffer;

pub use instance_buffer::{instance_layout, GpuInstanceBuffer, SceneUploader, INSTANCE_ATTRIBUTES};

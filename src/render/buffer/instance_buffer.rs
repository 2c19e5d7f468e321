//! Per-instance vertex buffers

use std::collections::HashMap;

use crate::instancing::{InstanceBufferManager, InstanceData};
use crate::scene::{BufferSlot, Scene};

/// Shader locations 2..=5 hold the model matrix columns, 6 the color.
/// Locations 0 and 1 are left for the cube's position and normal.
pub const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4
];

/// Vertex layout stepping once per instance over [`InstanceData`]
pub fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<InstanceData>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRIBUTES,
    }
}

/// GPU mirror of one [`InstanceBufferManager`].
///
/// Uploads only when the manager's revision moves; grows the vertex buffer
/// when the instance count outgrows it.
pub struct GpuInstanceBuffer {
    label: String,
    buffer: Option<wgpu::Buffer>,
    /// Instances the current buffer can hold
    capacity: usize,
    count: u32,
    uploaded_revision: Option<u64>,
}

impl GpuInstanceBuffer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            buffer: None,
            capacity: 0,
            count: 0,
            uploaded_revision: None,
        }
    }

    /// Returns true when anything was written or reset
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        manager: &InstanceBufferManager,
    ) -> bool {
        if self.uploaded_revision == Some(manager.revision()) {
            return false;
        }
        self.uploaded_revision = Some(manager.revision());

        let Some(cpu) = manager.buffer() else {
            self.count = 0;
            return true;
        };

        if self.buffer.is_none() || cpu.len() > self.capacity {
            self.buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label.as_str()),
                size: cpu.as_bytes().len() as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = cpu.len();
            log::debug!("Allocated instance buffer '{}' for {} instances", self.label, cpu.len());
        }

        if let Some(buffer) = &self.buffer {
            queue.write_buffer(buffer, 0, cpu.as_bytes());
        }
        self.count = cpu.len() as u32;
        true
    }

    /// Slice to bind as the instance vertex buffer; None when empty
    pub fn slice(&self) -> Option<wgpu::BufferSlice<'_>> {
        if self.count == 0 {
            return None;
        }
        let bytes = self.count as u64 * std::mem::size_of::<InstanceData>() as u64;
        self.buffer.as_ref().map(|b| b.slice(..bytes))
    }

    /// Instance count for the draw call
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// GPU buffers for every slot of a scene
#[derive(Default)]
pub struct SceneUploader {
    buffers: HashMap<BufferSlot, GpuInstanceBuffer>,
}

impl SceneUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push changed slots to the GPU; returns how many were written
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, scene: &Scene) -> usize {
        let mut written = 0;
        for (slot, manager) in scene.buffers() {
            let gpu = self.buffers.entry(*slot).or_insert_with(|| {
                GpuInstanceBuffer::new(format!(
                    "{}_{}_{:?}_{:?}",
                    slot.kind.name(), slot.seed, slot.side, slot.stream
                ))
            });
            if gpu.upload(device, queue, manager) {
                written += 1;
            }
        }
        if written > 0 {
            log::debug!("Uploaded {} instance buffers", written);
        }
        written
    }

    pub fn get(&self, slot: &BufferSlot) -> Option<&GpuInstanceBuffer> {
        self.buffers.get(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stride_matches_instance() {
        let layout = instance_layout();
        assert_eq!(layout.array_stride, 80);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
        assert_eq!(layout.attributes.len(), 5);
    }

    #[test]
    fn test_attribute_offsets() {
        let offsets: Vec<u64> = INSTANCE_ATTRIBUTES.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 16, 32, 48, 64]);
        assert_eq!(INSTANCE_ATTRIBUTES[4].shader_location, 6);
    }

    #[test]
    fn test_fresh_buffer_is_empty() {
        let gpu = GpuInstanceBuffer::new("test");
        assert_eq!(gpu.count(), 0);
        assert!(gpu.slice().is_none());
    }
}

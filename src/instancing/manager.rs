//! Identity-checked instance buffer rebuilds

use std::sync::Arc;

use crate::voxel::VoxelSet;

use super::instance_data::{InstanceBuffer, sync_instances};

/// Keeps one instance buffer in step with a shared voxel set.
///
/// The buffer is rebuilt whole when the set handed to [`sync`](Self::sync)
/// is a different allocation than last time, and left alone otherwise.
/// Contents are never diffed.
#[derive(Debug, Default)]
pub struct InstanceBufferManager {
    source: Option<Arc<VoxelSet>>,
    buffer: Option<InstanceBuffer>,
    /// Bumped on every change to `buffer`
    revision: u64,
    rebuilds: u64,
}

impl InstanceBufferManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the buffer was rebuilt
    pub fn sync(&mut self, set: &Arc<VoxelSet>) -> bool {
        if self.source.as_ref().is_some_and(|current| Arc::ptr_eq(current, set)) {
            return false;
        }
        self.buffer = sync_instances(set);
        self.source = Some(Arc::clone(set));
        self.revision += 1;
        self.rebuilds += 1;
        log::trace!("Rebuilt instance buffer: {} instances", self.count());
        true
    }

    /// Drop the buffer and forget the source
    pub fn clear(&mut self) {
        if self.source.take().is_some() {
            self.buffer = None;
            self.revision += 1;
        }
    }

    /// None when the current set is empty
    pub fn buffer(&self) -> Option<&InstanceBuffer> {
        self.buffer.as_ref()
    }

    /// Instance count to draw
    pub fn count(&self) -> usize {
        self.buffer.as_ref().map_or(0, InstanceBuffer::len)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IVec3;
    use crate::voxel::{Rgb, Voxel};

    fn set_of(n: i32) -> Arc<VoxelSet> {
        Arc::new(
            (0..n)
                .map(|i| Voxel::opaque(IVec3::new(i, 0, 0), Rgb::hex(0x404040)))
                .collect(),
        )
    }

    #[test]
    fn test_same_arc_does_not_rebuild() {
        let mut manager = InstanceBufferManager::new();
        let set = set_of(4);
        assert!(manager.sync(&set));
        assert!(!manager.sync(&set));
        assert!(!manager.sync(&Arc::clone(&set)));
        assert_eq!(manager.rebuild_count(), 1);
        assert_eq!(manager.count(), 4);
    }

    #[test]
    fn test_equal_contents_new_arc_rebuilds() {
        let mut manager = InstanceBufferManager::new();
        manager.sync(&set_of(3));
        let revision = manager.revision();
        assert!(manager.sync(&set_of(3)));
        assert_eq!(manager.revision(), revision + 1);
        assert_eq!(manager.rebuild_count(), 2);
    }

    #[test]
    fn test_empty_set_is_no_buffer() {
        let mut manager = InstanceBufferManager::new();
        assert!(manager.sync(&set_of(0)));
        assert!(manager.buffer().is_none());
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut manager = InstanceBufferManager::new();
        manager.sync(&set_of(2));
        manager.clear();
        assert!(manager.buffer().is_none());
        assert_eq!(manager.revision(), 2);
        manager.clear();
        assert_eq!(manager.revision(), 2);
    }
}

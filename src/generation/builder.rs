//! Accumulates voxels for one generator call.
//!
//! Generators work in a side-local frame (x = lateral, growing inland; y up;
//! z = along the shore) relative to an origin. The builder applies the side
//! mirror and is the only place the day/night mode is consulted.

use std::collections::HashMap;

use crate::core::types::IVec3;
use crate::voxel::{Rgb, Voxel, VoxelRole, VoxelSet};

use super::palette::LightTint;
use super::{Mode, Side};

pub struct VoxelBuilder {
    side: Side,
    mode: Mode,
    origin: IVec3,
    voxels: Vec<Voxel>,
    /// Cell -> index into `voxels`
    index: HashMap<IVec3, usize>,
}

impl VoxelBuilder {
    pub fn new(side: Side, mode: Mode) -> Self {
        Self {
            side,
            mode,
            origin: IVec3::ZERO,
            voxels: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builder whose local origin sits at `origin` (side-local cells)
    pub fn at(side: Side, mode: Mode, origin: IVec3) -> Self {
        Self { origin, ..Self::new(side, mode) }
    }

    pub fn set_origin(&mut self, origin: IVec3) {
        self.origin = origin;
    }

    pub fn origin(&self) -> IVec3 {
        self.origin
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Grid cell for a local position
    #[inline]
    pub fn cell(&self, x: i32, y: i32, z: i32) -> IVec3 {
        IVec3::new(
            self.side.sign() * (self.origin.x + x),
            self.origin.y + y,
            self.origin.z + z,
        )
    }

    /// Whether a local position is already occupied
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        self.index.contains_key(&self.cell(x, y, z))
    }

    /// Opaque voxel. A repeat write to a cell replaces its color and role but
    /// keeps the cell's original place in the output order.
    pub fn put(&mut self, x: i32, y: i32, z: i32, color: Rgb) {
        self.emit(x, y, z, color, VoxelRole::Opaque);
    }

    /// Window, lamp or beacon: opaque day color by day, light stream at night
    pub fn lit(&mut self, x: i32, y: i32, z: i32, tint: LightTint) {
        match self.mode {
            Mode::Day => self.emit(x, y, z, tint.day, VoxelRole::Opaque),
            Mode::Night => self.emit(x, y, z, tint.night, VoxelRole::Light),
        }
    }

    /// Solid inclusive box of opaque voxels
    pub fn fill(&mut self, min: IVec3, max: IVec3, color: Rgb) {
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                for z in min.z..=max.z {
                    self.put(x, y, z, color);
                }
            }
        }
    }

    fn emit(&mut self, x: i32, y: i32, z: i32, color: Rgb, role: VoxelRole) {
        let cell = self.cell(x, y, z);
        let voxel = Voxel::new(cell, color, role);
        match self.index.get(&cell) {
            Some(&i) => self.voxels[i] = voxel,
            None => {
                self.index.insert(cell, self.voxels.len());
                self.voxels.push(voxel);
            }
        }
    }

    pub fn finish(self) -> VoxelSet {
        VoxelSet::from_vec(self.voxels)
    }
}

//! Reserved regions that other structures must stay out of.
//!
//! Zones live in the side-local ground plane (lateral, along) and therefore
//! apply to both shores identically. Candidate sites are tested once against
//! zones inflated by a safety margin; a structure whose half-extent fits
//! inside the margin can then never reach a zone's core.

use serde::{Deserialize, Serialize};

use crate::core::types::Vec2;
use crate::math::Footprint;
use crate::voxel::VOXEL_SCALE;

/// Which landmark a zone reserves space for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    BridgeCorridor,
    MosquePlaza,
    TowerFootprint,
}

/// Shape of a zone around its centre
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ZoneExtent {
    Rect { half_lateral: f32, half_along: f32 },
    Radius(f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExclusionZone {
    pub kind: ZoneKind,
    /// Centre as (lateral, along) in cells
    pub center: Vec2,
    pub extent: ZoneExtent,
}

impl ExclusionZone {
    pub fn rect(kind: ZoneKind, center: Vec2, half_lateral: f32, half_along: f32) -> Self {
        Self {
            kind,
            center,
            extent: ZoneExtent::Rect { half_lateral, half_along },
        }
    }

    pub fn radial(kind: ZoneKind, center: Vec2, radius: f32) -> Self {
        Self {
            kind,
            center,
            extent: ZoneExtent::Radius(radius),
        }
    }

    /// Strict interior test grown by `margin` cells on every side
    pub fn contains_inflated(&self, lateral: f32, along: f32, margin: f32) -> bool {
        let d = Vec2::new(lateral, along) - self.center;
        match self.extent {
            ZoneExtent::Rect { half_lateral, half_along } => {
                d.x.abs() < half_lateral + margin && d.y.abs() < half_along + margin
            }
            ZoneExtent::Radius(r) => {
                let r = r + margin;
                d.length_squared() < r * r
            }
        }
    }

    /// Strict interior test on the zone core
    #[inline]
    pub fn contains(&self, lateral: f32, along: f32) -> bool {
        self.contains_inflated(lateral, along, 0.0)
    }

    #[inline]
    pub fn contains_cell(&self, lateral: i32, along: i32) -> bool {
        self.contains(lateral as f32, along as f32)
    }
}

/// Short-circuit OR over a fixed list of zones
#[derive(Clone, Debug, PartialEq)]
pub struct ExclusionResolver {
    zones: Vec<ExclusionZone>,
    /// Inflation applied to candidate tests, in cells
    margin: f32,
}

impl ExclusionResolver {
    pub fn new(zones: Vec<ExclusionZone>, margin: f32) -> Self {
        Self { zones, margin }
    }

    pub fn zones(&self) -> &[ExclusionZone] {
        &self.zones
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn zone(&self, kind: ZoneKind) -> Option<&ExclusionZone> {
        self.zones.iter().find(|z| z.kind == kind)
    }

    /// Candidate test in world units. Either shore maps onto the same zones.
    pub fn is_excluded(&self, world_x: f32, world_z: f32) -> bool {
        self.is_site_excluded(world_x.abs() / VOXEL_SCALE, world_z / VOXEL_SCALE, None)
    }

    /// Candidate test in side-local cells. Zones owned by `owner` are ignored
    /// so a landmark can sit inside the space reserved for it.
    pub fn is_site_excluded(&self, lateral: f32, along: f32, owner: Option<ZoneKind>) -> bool {
        self.zones
            .iter()
            .filter(|z| Some(z.kind) != owner)
            .any(|z| z.contains_inflated(lateral, along, self.margin))
    }

    /// Candidate test at a footprint's centre
    pub fn is_footprint_excluded(&self, footprint: &Footprint, owner: Option<ZoneKind>) -> bool {
        let (lateral, along) = footprint.center();
        self.is_site_excluded(lateral, along, owner)
    }

    /// Zone whose core strictly contains the cell, if any
    pub fn core_zone_at(&self, lateral: i32, along: i32) -> Option<ZoneKind> {
        self.zones
            .iter()
            .find(|z| z.contains_cell(lateral, along))
            .map(|z| z.kind)
    }
}

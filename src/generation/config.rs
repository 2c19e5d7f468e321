//! Placement constants for the generation pipeline.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::procgen::{HeightField, LandmarkSlots, Seed, Site, SlotGrid, SlotRow};

/// Configuration shared by every generator.
///
/// All distances are in cells. `lateral` values are measured from the strait
/// centre line unless the field name says otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Lateral position of the quay edge
    pub shore_lateral: i32,
    /// How far land extends inland from the quay
    pub land_depth: i32,
    /// Terrain covers `along` in `[-along_half_range, along_half_range)`
    pub along_half_range: i32,
    /// Terrain elevation parameters
    pub height: HeightField,
    /// Ground height of the paved mosque plaza
    pub plaza_height: i32,
    /// Promenade ends this many cells behind the quay
    pub promenade_depth: i32,
    /// Coastal road ends this many cells behind the quay
    pub road_depth: i32,
    /// Spacing of candidate tree trunks
    pub tree_spacing: i32,
    /// A candidate trunk grows when its draw exceeds this
    pub tree_threshold: f32,
    /// Waterfront mansion slots along the shore
    pub mansion_slots: SlotRow,
    /// Apartment grid; lateral offsets are measured from the shoreline
    pub apartment_grid: SlotGrid,
    /// Slots shared by singular landmarks
    pub landmark_slots: LandmarkSlots,
    /// Along-shore centre of the bridge
    pub bridge_along: i32,
    /// Half width of the corridor kept clear around the bridge
    pub bridge_corridor_half: i32,
    /// Seed selecting the mosque's landmark slot
    pub mosque_seed: Seed,
    pub mosque_lateral: i32,
    pub plaza_half: i32,
    /// Seed selecting the tower's landmark slot
    pub tower_seed: Seed,
    pub tower_lateral: i32,
    pub tower_radius: f32,
    /// Inflation applied to exclusion zones when testing candidate sites
    pub exclusion_margin: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            shore_lateral: 144,
            land_depth: 144,
            along_half_range: 192,
            height: HeightField::default(),
            plaza_height: 3,
            promenade_depth: 30,
            road_depth: 40,
            tree_spacing: 8,
            tree_threshold: 0.75,
            mansion_slots: SlotRow { start: -182, step: 40, count: 10, jitter: 10 },
            apartment_grid: SlotGrid {
                along: SlotRow { start: -176, step: 38, count: 10, jitter: 16 },
                lateral: SlotRow { start: 64, step: 38, count: 2, jitter: 16 },
            },
            landmark_slots: LandmarkSlots { start: -184, step: 8, count: 47 },
            bridge_along: -40,
            bridge_corridor_half: 22,
            mosque_seed: 25,
            mosque_lateral: 166,
            plaza_half: 20,
            tower_seed: 31,
            tower_lateral: 64,
            tower_radius: 32.0,
            exclusion_margin: 28.0,
        }
    }
}

impl GenerationConfig {
    /// Site of the mosque for a landmark seed
    pub fn mosque_site(&self, seed: Seed) -> Site {
        Site::new(self.mosque_lateral, self.landmark_slots.along(seed))
    }

    /// Site of the tower for a landmark seed
    pub fn tower_site(&self, seed: Seed) -> Site {
        Site::new(self.tower_lateral, self.landmark_slots.along(seed))
    }

    /// Outermost lateral cell of the land strip
    pub fn land_end(&self) -> i32 {
        self.shore_lateral + self.land_depth
    }

    /// Reject configurations no generator can honour
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(Error::InvalidConfig(msg.to_string()));
        if self.land_depth <= 0 {
            return invalid("land_depth must be positive");
        }
        if self.along_half_range <= 0 {
            return invalid("along_half_range must be positive");
        }
        if self.height.coast_band >= self.land_depth {
            return invalid("coast band must be narrower than the land strip");
        }
        if self.promenade_depth > self.road_depth {
            return invalid("promenade must end before the road");
        }
        if self.tree_spacing <= 0 {
            return invalid("tree_spacing must be positive");
        }
        let rows = [
            ("mansion_slots", self.mansion_slots),
            ("apartment_grid.along", self.apartment_grid.along),
            ("apartment_grid.lateral", self.apartment_grid.lateral),
        ];
        for (name, row) in rows {
            if row.step <= 0 || row.count == 0 || row.jitter < 0 {
                return Err(Error::InvalidConfig(format!(
                    "{}: step and count must be positive, jitter non-negative",
                    name
                )));
            }
        }
        if self.landmark_slots.step <= 0 || self.landmark_slots.count == 0 {
            return invalid("landmark slots need a positive step and count");
        }
        if self.exclusion_margin <= 0.0 {
            return invalid("exclusion_margin must be positive");
        }
        if self.tower_radius <= 0.0 || self.plaza_half <= 0 || self.bridge_corridor_half <= 0 {
            return invalid("exclusion zones must have positive extent");
        }
        Ok(())
    }
}

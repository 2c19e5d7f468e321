//! Procedural building blocks shared by every generator: seeded draws,
//! the terrain height field, exclusion zones and site layout.

pub mod rng;
pub mod heightfield;
pub mod exclusion;
pub mod layout;

pub use rng::{Seed, SeedStream};
pub use heightfield::HeightField;
pub use exclusion::{ExclusionResolver, ExclusionZone, ZoneExtent, ZoneKind};
pub use layout::{LandmarkSlots, Site, SlotGrid, SlotRow};

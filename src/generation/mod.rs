//! Entity generation: one pure generator per entity family.
//!
//! Every generator maps `(seed, side, mode)` to a [`VoxelSet`], reading the
//! shared height field and exclusion resolver from a [`GenContext`]. Kinds
//! dispatch through a static table of function pointers indexed by the
//! kind's discriminant.
//!
//! 1. Land: shoreline terrain, three mansion styles, apartments, mosque, tower
//! 2. Infrastructure: bridge and its traffic
//! 3. Water: surface, ferry, tanker, fishing boat
//! 4. Wildlife and the tower flag

pub mod config;
pub mod palette;
pub mod builder;
pub mod cache;
pub mod shoreline;
pub mod flora;
pub mod mansion_a;
pub mod mansion_b;
pub mod mansion_c;
pub mod apartment;
pub mod bridge;
pub mod traffic;
pub mod mosque;
pub mod tower;
pub mod flag;
pub mod hull;
pub mod ferry;
pub mod tanker;
pub mod fishing_boat;
pub mod wildlife;
pub mod water;

pub use config::GenerationConfig;
pub use builder::VoxelBuilder;
pub use cache::{EntityKey, GeneratedEntity, GenerationCache};
pub use palette::{LightTint, Palette};
pub use crate::procgen::Seed;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::types::Vec2;
use crate::procgen::{ExclusionResolver, ExclusionZone, HeightField, Site, ZoneKind};
use crate::voxel::VoxelSet;

/// Shore of the strait a structure stands on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Europe,
    Asia,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Europe, Side::Asia];

    /// World x = sign * lateral
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Side::Europe => -1,
            Side::Asia => 1,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Europe => Side::Asia,
            Side::Asia => Side::Europe,
        }
    }
}

/// Lighting mode; only affects window/lamp classification
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Day,
    Night,
}

impl Mode {
    pub const BOTH: [Mode; 2] = [Mode::Day, Mode::Night];

    pub fn toggled(self) -> Mode {
        match self {
            Mode::Day => Mode::Night,
            Mode::Night => Mode::Day,
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Mode::Day),
            "night" => Ok(Mode::Night),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

/// Closed set of generated entity families
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Shoreline,
    MansionA,
    MansionB,
    MansionC,
    Apartment,
    Bridge,
    Mosque,
    Tower,
    Flag,
    Ferry,
    Tanker,
    FishingBoat,
    Dolphin,
    Seagull,
    Car,
    Water,
}

impl EntityKind {
    pub const COUNT: usize = 16;

    pub const ALL: [EntityKind; Self::COUNT] = [
        EntityKind::Shoreline,
        EntityKind::MansionA,
        EntityKind::MansionB,
        EntityKind::MansionC,
        EntityKind::Apartment,
        EntityKind::Bridge,
        EntityKind::Mosque,
        EntityKind::Tower,
        EntityKind::Flag,
        EntityKind::Ferry,
        EntityKind::Tanker,
        EntityKind::FishingBoat,
        EntityKind::Dolphin,
        EntityKind::Seagull,
        EntityKind::Car,
        EntityKind::Water,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Shoreline => "shoreline",
            EntityKind::MansionA => "mansion_a",
            EntityKind::MansionB => "mansion_b",
            EntityKind::MansionC => "mansion_c",
            EntityKind::Apartment => "apartment",
            EntityKind::Bridge => "bridge",
            EntityKind::Mosque => "mosque",
            EntityKind::Tower => "tower",
            EntityKind::Flag => "flag",
            EntityKind::Ferry => "ferry",
            EntityKind::Tanker => "tanker",
            EntityKind::FishingBoat => "fishing_boat",
            EntityKind::Dolphin => "dolphin",
            EntityKind::Seagull => "seagull",
            EntityKind::Car => "car",
            EntityKind::Water => "water",
        }
    }

    /// Kinds whose structures must respect exclusion zones
    pub fn is_land_based(self) -> bool {
        matches!(
            self,
            EntityKind::Shoreline
                | EntityKind::MansionA
                | EntityKind::MansionB
                | EntityKind::MansionC
                | EntityKind::Apartment
                | EntityKind::Mosque
                | EntityKind::Tower
        )
    }

    /// Zone reserved for this kind, exempt from its own exclusion test
    pub fn owned_zone(self) -> Option<ZoneKind> {
        match self {
            EntityKind::Bridge => Some(ZoneKind::BridgeCorridor),
            EntityKind::Mosque => Some(ZoneKind::MosquePlaza),
            EntityKind::Tower => Some(ZoneKind::TowerFootprint),
            _ => None,
        }
    }

    /// Uniform scale the renderer applies to the whole entity
    pub fn entity_scale(self) -> f32 {
        match self {
            EntityKind::Dolphin => wildlife::DOLPHIN_SCALE,
            EntityKind::Seagull => wildlife::GULL_SCALE,
            EntityKind::Flag => flag::FLAG_SCALE,
            _ => 1.0,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Generator signature shared by every family
pub type GeneratorFn = fn(&GenContext, Seed, Side, Mode) -> VoxelSet;

/// Indexed by `EntityKind as usize`; order matches the enum
static GENERATORS: [GeneratorFn; EntityKind::COUNT] = [
    shoreline::generate,
    mansion_a::generate,
    mansion_b::generate,
    mansion_c::generate,
    apartment::generate,
    bridge::generate,
    mosque::generate,
    tower::generate,
    flag::generate,
    ferry::generate,
    tanker::generate,
    fishing_boat::generate,
    wildlife::generate_dolphin,
    wildlife::generate_seagull,
    traffic::generate,
    water::generate,
];

/// Read-only inputs shared by all generators
#[derive(Clone, Debug)]
pub struct GenContext {
    pub config: GenerationConfig,
    pub height: HeightField,
    pub exclusion: ExclusionResolver,
}

impl GenContext {
    /// Build a context without validating; degenerate values clamp to one
    /// cell where a generator divides by them
    pub fn new(config: GenerationConfig) -> Self {
        let exclusion = ExclusionResolver::new(zones_for(&config), config.exclusion_margin);
        Self {
            height: config.height,
            config,
            exclusion,
        }
    }

    /// Process-wide context built from the default configuration
    pub fn shared() -> &'static GenContext {
        static SHARED: OnceLock<GenContext> = OnceLock::new();
        SHARED.get_or_init(GenContext::default)
    }

    /// Generate one entity. Total: excluded or degenerate inputs yield an
    /// empty set.
    pub fn generate(&self, kind: EntityKind, seed: Seed, side: Side, mode: Mode) -> VoxelSet {
        let set = GENERATORS[kind.index()](self, seed, side, mode);
        log::debug!(
            "Generated {} seed={} side={:?} mode={:?}: {} voxels",
            kind.name(), seed, side, mode, set.len()
        );
        set
    }

    /// Whether a candidate footprint is blocked for a structure of `kind`
    pub fn is_blocked(&self, kind: EntityKind, footprint: &crate::math::Footprint) -> bool {
        let blocked = self.exclusion.is_footprint_excluded(footprint, kind.owned_zone());
        if blocked {
            log::trace!("Skipping {} at {:?}: inside exclusion zone", kind.name(), footprint.center());
        }
        blocked
    }

    /// Ground elevation at a side-local lateral cell, measured from the quay
    pub fn ground(&self, lateral: i32, along: i32) -> i32 {
        self.height.elevation(lateral - self.config.shore_lateral, along)
    }

    pub fn mosque_site(&self, seed: Seed) -> Site {
        self.config.mosque_site(seed)
    }

    pub fn tower_site(&self, seed: Seed) -> Site {
        self.config.tower_site(seed)
    }
}

impl Default for GenContext {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}

/// Exclusion zones for a configuration; mirrored onto both shores
fn zones_for(config: &GenerationConfig) -> Vec<ExclusionZone> {
    let land_half = config.land_end() as f32 * 0.5;
    let mosque = config.mosque_site(config.mosque_seed);
    let tower = config.tower_site(config.tower_seed);
    vec![
        ExclusionZone::rect(
            ZoneKind::BridgeCorridor,
            Vec2::new(land_half, config.bridge_along as f32),
            land_half + 1.0,
            config.bridge_corridor_half as f32,
        ),
        ExclusionZone::rect(
            ZoneKind::MosquePlaza,
            Vec2::new(mosque.lateral as f32, mosque.along as f32),
            config.plaza_half as f32,
            config.plaza_half as f32,
        ),
        ExclusionZone::radial(
            ZoneKind::TowerFootprint,
            Vec2::new(tower.lateral as f32, tower.along as f32),
            config.tower_radius,
        ),
    ]
}

/// Clamp a derived dimension to at least one cell
#[inline]
pub(crate) fn extent(v: i32) -> i32 {
    v.max(1)
}

const MANSION_SLOT_SALT: u64 = 0x3a11;

/// Along-shore position of mansion slot `seed`, shared by all three styles
pub fn mansion_slot_along(config: &GenerationConfig, seed: Seed) -> i32 {
    let stream = crate::procgen::SeedStream::new(seed, MANSION_SLOT_SALT);
    config.mansion_slots.position(seed, &stream, 0)
}

/// Mansion style occupying a slot
pub fn mansion_variant(seed: Seed) -> EntityKind {
    let stream = crate::procgen::SeedStream::new(seed, MANSION_SLOT_SALT);
    match stream.index(1, 3) {
        0 => EntityKind::MansionA,
        1 => EntityKind::MansionB,
        _ => EntityKind::MansionC,
    }
}

/// Generate one entity with the shared default context
pub fn generate_entity(kind: EntityKind, seed: Seed, side: Side, mode: Mode) -> VoxelSet {
    GenContext::shared().generate(kind, seed, side, mode)
}

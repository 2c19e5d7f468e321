//! Scene configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::generation::{GenerationConfig, Mode, Seed};

/// Upper bound on circling gulls
pub const MAX_GULLS: u32 = 256;
/// Upper bound on cars per bridge lane
pub const MAX_CARS_PER_LANE: u32 = 16;

/// Configuration for a full waterfront scene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Base seed for terrain, boats, traffic and gulls
    pub seed: Seed,
    /// Initial lighting mode
    pub mode: Mode,
    /// Number of circling gulls
    pub gulls: u32,
    /// Cars on each of the four bridge lanes
    pub cars_per_lane: u32,
    /// Spawn the ferry, tanker and fishing boat
    pub boats: bool,
    /// Spawn the two dolphin pods
    pub dolphins: bool,
    /// Placement constants shared by every generator
    pub generation: GenerationConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 1453,
            mode: Mode::Day,
            gulls: 40,
            cars_per_lane: 3,
            boats: true,
            dolphins: true,
            generation: GenerationConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Load and validate a JSON config; missing fields take defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: SceneConfig = serde_json::from_str(&json)?;
        config.validate()?;
        log::debug!("Loaded scene config from {}", path.display());
        Ok(config)
    }

    /// Write as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.generation.validate()?;
        if self.gulls > MAX_GULLS {
            return Err(Error::InvalidConfig(format!(
                "gulls: {} exceeds the limit of {}",
                self.gulls, MAX_GULLS
            )));
        }
        if self.cars_per_lane > MAX_CARS_PER_LANE {
            return Err(Error::InvalidConfig(format!(
                "cars_per_lane: {} exceeds the limit of {}",
                self.cars_per_lane, MAX_CARS_PER_LANE
            )));
        }
        Ok(())
    }
}

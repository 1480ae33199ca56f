//! Dungeon configuration
//!
//! Everything needed to build a dungeon except the random source.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::ConfigError;
use crate::{
    DEFAULT_ARROW_PERCENT, DEFAULT_MONSTER_COUNT, DEFAULT_TREASURE_PERCENT, MAX_DIMENSION,
    MIN_DIMENSION,
};

/// Grid topology
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WrapMode {
    /// Edge cells are adjacent to the opposite edge (a torus)
    Wrapping,
    #[default]
    NonWrapping,
}

impl WrapMode {
    pub const fn wraps(self) -> bool {
        matches!(self, WrapMode::Wrapping)
    }
}

/// Parameters for dungeon generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// Number of rows
    pub height: u32,
    /// Number of columns
    pub width: u32,
    /// Extra edges added on top of the spanning tree
    pub extra_connectivity: u32,
    pub wrap: WrapMode,
    /// Percentage of caves that receive gems
    pub treasure_percent: u32,
    /// Total number of monsters, including the one guarding the end cave
    pub monster_count: u32,
    /// Percentage of all locations that receive an arrow pile
    #[serde(default = "default_arrow_percent")]
    pub arrow_percent: u32,
}

fn default_arrow_percent() -> u32 {
    DEFAULT_ARROW_PERCENT
}

impl DungeonConfig {
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            extra_connectivity: 0,
            wrap: WrapMode::NonWrapping,
            treasure_percent: DEFAULT_TREASURE_PERCENT,
            monster_count: DEFAULT_MONSTER_COUNT,
            arrow_percent: DEFAULT_ARROW_PERCENT,
        }
    }

    pub fn with_extra_connectivity(mut self, extra_connectivity: u32) -> Self {
        self.extra_connectivity = extra_connectivity;
        self
    }

    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_treasure_percent(mut self, treasure_percent: u32) -> Self {
        self.treasure_percent = treasure_percent;
        self
    }

    pub fn with_monster_count(mut self, monster_count: u32) -> Self {
        self.monster_count = monster_count;
        self
    }

    pub fn with_arrow_percent(mut self, arrow_percent: u32) -> Self {
        self.arrow_percent = arrow_percent;
        self
    }

    /// Parse a JSON configuration and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter that can be judged before generation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&self.height) {
            return Err(ConfigError::HeightOutOfRange {
                value: self.height,
                min: MIN_DIMENSION,
                max: MAX_DIMENSION,
            });
        }
        if !range.contains(&self.width) {
            return Err(ConfigError::WidthOutOfRange {
                value: self.width,
                min: MIN_DIMENSION,
                max: MAX_DIMENSION,
            });
        }
        if self.treasure_percent > 100 {
            return Err(ConfigError::TreasurePercentOutOfRange(self.treasure_percent));
        }
        if self.arrow_percent > 100 {
            return Err(ConfigError::ArrowPercentOutOfRange(self.arrow_percent));
        }
        if self.monster_count < 1 {
            return Err(ConfigError::NoMonsters);
        }
        Ok(())
    }

    /// Number of locations in the grid
    pub fn cell_count(&self) -> usize {
        self.height as usize * self.width as usize
    }
}

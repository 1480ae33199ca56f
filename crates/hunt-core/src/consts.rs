//! Core game constants

/// Dungeon dimension limits (rows and columns)
pub const MIN_DIMENSION: u32 = 6;
pub const MAX_DIMENSION: u32 = 100;

/// Minimum hop distance between start and end caves
pub const MIN_PATH_LENGTH: usize = 5;

/// Health of a fresh player or monster
pub const MAX_HEALTH: u32 = 100;

/// Arrows in the player's quiver at the start of a game
pub const STARTING_ARROWS: u32 = 3;

/// Gem roll range for a treasure cave
pub const MIN_GEM_QUANTITY: u32 = 1;
pub const MAX_GEM_QUANTITY: u32 = 10;

/// Arrow shot range, counted in caves
pub const MIN_SHOT_DISTANCE: u32 = 1;
pub const MAX_SHOT_DISTANCE: u32 = 5;

/// Largest arrow pile scattered on a single location
pub const MAX_ARROW_PILE: u32 = 3;

/// Configuration defaults
pub const DEFAULT_TREASURE_PERCENT: u32 = 20;
pub const DEFAULT_ARROW_PERCENT: u32 = 20;
pub const DEFAULT_MONSTER_COUNT: u32 = 1;

pub const PLAYER_NAME: &str = "Player";
pub const MONSTER_NAME: &str = "Otyugh";

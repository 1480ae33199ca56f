//! Error types for dungeon construction and play
//!
//! Construction problems are fatal and never leave a partial dungeon behind.
//! Everything raised during play is recoverable: the failing command leaves
//! the game exactly as it found it.

use thiserror::Error;

use crate::dungeon::{Coord, Direction};
use crate::object::TreasureType;

/// Rejected dungeon parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("dungeon height must be between {min} and {max}, got {value}")]
    HeightOutOfRange { value: u32, min: u32, max: u32 },

    #[error("dungeon width must be between {min} and {max}, got {value}")]
    WidthOutOfRange { value: u32, min: u32, max: u32 },

    #[error("treasure percentage must be between 0 and 100, got {0}")]
    TreasurePercentOutOfRange(u32),

    #[error("arrow percentage must be between 0 and 100, got {0}")]
    ArrowPercentOutOfRange(u32),

    #[error("monster count must be at least 1")]
    NoMonsters,

    #[error("{requested} monsters requested but only {available} caves can hold one")]
    NotEnoughCaves { requested: u32, available: usize },

    #[error("could not parse configuration: {0}")]
    Parse(String),
}

/// An action that is impossible with the current resources
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("no arrows remaining")]
    NoArrows,

    #[error("location does not have {0}")]
    TreasureUnavailable(TreasureType),

    #[error("player is not in the dungeon")]
    NotInDungeon,

    #[error("the game is already over")]
    GameOver,
}

/// Errors surfaced by dungeon and game operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("no exit to the {direction} from {location}")]
    InvalidDirection { location: Coord, direction: Direction },

    #[error("{0}")]
    InvalidState(#[from] StateError),

    #[error("arrow distance must be between 1 and 5, got {0}")]
    InvalidDistance(u32),

    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
}

impl GameError {
    /// Returns true if the game can continue after this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidDirection { .. }
                | GameError::InvalidState(_)
                | GameError::InvalidDistance(_)
        )
    }
}

pub type GameResult<T> = Result<T, GameError>;

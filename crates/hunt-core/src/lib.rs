//! hunt-core: Dungeon generation and hunt rules
//!
//! Builds a random grid dungeon of caves and tunnels and runs a single-player
//! hunt through it. The crate does no I/O; a front end drives a
//! [`GameCoordinator`] and renders what it reports.
//!
//! All randomness flows through a caller-supplied [`RandomSource`], so a seed
//! fully determines the dungeon and every roll made during play.

pub mod character;
pub mod config;
pub mod dungeon;
pub mod error;
pub mod monster;
pub mod object;
pub mod player;

mod consts;
mod game;

pub use character::Character;
pub use config::{DungeonConfig, WrapMode};
pub use consts::*;
pub use dungeon::{Coord, Direction, DungeonGraph, DungeonSnapshot, Location};
pub use error::{ConfigError, GameError, GameResult, StateError};
pub use game::{GameCoordinator, Outcome, Proximity};
pub use hunt_rng::{GameRng, RandomSource, ScriptedRng};
pub use object::{Treasure, TreasureType};
pub use player::{Encounter, Player, ShotOutcome};

//! Game session
//!
//! A [`GameCoordinator`] owns the dungeon, the player and the random source
//! for one session. Every command either succeeds completely or fails without
//! touching any state, and once the game is over no command succeeds.

use std::collections::BTreeSet;

use hunt_rng::{GameRng, RandomSource};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::PLAYER_NAME;
use crate::character::Character;
use crate::config::DungeonConfig;
use crate::dungeon::{Coord, Direction, DungeonGraph, DungeonSnapshot, Location};
use crate::error::{GameError, GameResult, StateError};
use crate::object::TreasureType;
use crate::player::{Encounter, Player, ShotOutcome};

/// How the session ended, if it has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Win,
    Loss,
    Ongoing,
}

/// How strongly the player can smell nearby monsters
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
pub enum Proximity {
    None,
    /// A single living monster two hops away
    Weak,
    /// A living monster next door, or several within two hops
    Strong,
}

/// One game session
#[derive(Debug)]
pub struct GameCoordinator<R: RandomSource = GameRng> {
    config: DungeonConfig,
    dungeon: DungeonGraph,
    player: Player,
    rng: R,
    last_encounter: Encounter,
}

impl GameCoordinator<GameRng> {
    /// Start a session with a seeded [`GameRng`]
    pub fn from_seed(config: DungeonConfig, seed: u64) -> GameResult<Self> {
        Self::new(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> GameCoordinator<R> {
    /// Generate a dungeon from `config` and place the player at its start
    pub fn new(config: DungeonConfig, mut rng: R) -> GameResult<Self> {
        let dungeon = DungeonGraph::generate(&config, &mut rng)?;
        Self::with_dungeon(config, dungeon, rng)
    }

    fn with_dungeon(config: DungeonConfig, dungeon: DungeonGraph, mut rng: R) -> GameResult<Self> {
        let mut player = Player::new(PLAYER_NAME);
        let last_encounter = player.enter_location(&dungeon, dungeon.start(), &mut rng)?;
        tracing::info!(
            start = %dungeon.start(),
            end = %dungeon.end(),
            "game started"
        );
        Ok(Self {
            config,
            dungeon,
            player,
            rng,
            last_encounter,
        })
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn dungeon(&self) -> &DungeonGraph {
        &self.dungeon
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn start(&self) -> Coord {
        self.dungeon.start()
    }

    pub fn end(&self) -> Coord {
        self.dungeon.end()
    }

    /// Where the player stands
    pub fn position(&self) -> Coord {
        self.player.location().unwrap_or_else(|| self.dungeon.start())
    }

    pub fn current_location(&self) -> Option<&Location> {
        self.dungeon.location(self.position())
    }

    /// What happened when the player last entered a location
    pub fn last_encounter(&self) -> Encounter {
        self.last_encounter
    }

    pub fn is_game_over(&self) -> bool {
        self.position() == self.dungeon.end() || !self.player.is_alive()
    }

    pub fn outcome(&self) -> Outcome {
        if !self.player.is_alive() {
            Outcome::Loss
        } else if self.position() == self.dungeon.end() {
            Outcome::Win
        } else {
            Outcome::Ongoing
        }
    }

    fn ensure_ongoing(&self) -> GameResult<()> {
        if self.is_game_over() {
            return Err(StateError::GameOver.into());
        }
        Ok(())
    }

    /// Exits of the current location
    pub fn available_directions(&self) -> BTreeSet<Direction> {
        self.dungeon.neighbors_of(self.position()).into_keys().collect()
    }

    /// Walk through the exit in `direction` and return the new location
    pub fn move_player(&mut self, direction: Direction) -> GameResult<&Location> {
        self.ensure_ongoing()?;
        let from = self.position();
        let to = self
            .dungeon
            .neighbor(from, direction)
            .ok_or(GameError::InvalidDirection {
                location: from,
                direction,
            })?;

        self.last_encounter = self.player.enter_location(&self.dungeon, to, &mut self.rng)?;
        match self.outcome() {
            Outcome::Ongoing => {}
            outcome => tracing::info!(%outcome, at = %to, "game over"),
        }
        self.dungeon.location(to).ok_or_else(|| {
            GameError::InternalInconsistency(format!("{to} is outside the dungeon"))
        })
    }

    pub fn pick_treasure(&mut self, kind: TreasureType) -> GameResult<()> {
        self.ensure_ongoing()?;
        self.player.pick_treasure(&mut self.dungeon, kind)
    }

    pub fn shoot_arrow(&mut self, direction: Direction, distance: u32) -> GameResult<ShotOutcome> {
        self.ensure_ongoing()?;
        self.player.shoot_arrow(&mut self.dungeon, direction, distance)
    }

    /// Smell of living monsters within two hops
    pub fn proximity(&self) -> Proximity {
        let living = |hops| {
            self.dungeon
                .locations_exactly_n_hops_away(self.position(), hops)
                .into_iter()
                .filter(|&c| self.dungeon.location(c).is_some_and(Location::has_living_monster))
                .count()
        };
        let (one_away, two_away) = (living(1), living(2));
        if one_away >= 1 || one_away + two_away > 1 {
            Proximity::Strong
        } else if two_away == 1 {
            Proximity::Weak
        } else {
            Proximity::None
        }
    }

    pub fn snapshot(&self) -> DungeonSnapshot {
        self.dungeon.snapshot()
    }
}

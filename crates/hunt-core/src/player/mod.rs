//! The player character
//!
//! The player carries an inventory, remembers every location it entered, and
//! is the only character that acts: moving, picking up treasure and shooting.

mod arrow;

pub use arrow::ShotOutcome;

use hunt_rng::RandomSource;
use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::dungeon::{Coord, Direction, DungeonGraph};
use crate::error::{GameError, GameResult, StateError};
use crate::monster::MonsterCondition;
use crate::object::{Treasure, TreasureType};
use crate::{MAX_HEALTH, MAX_SHOT_DISTANCE, MIN_SHOT_DISTANCE, STARTING_ARROWS};

/// What happened on entering a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encounter {
    /// No living monster here
    Quiet,
    /// Eaten by the monster
    Devoured,
    /// Shared a cave with an injured monster and got away
    Escaped,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    inventory: Treasure,
    location: Option<Coord>,
    /// Every location entered, oldest first
    visited: Vec<Coord>,
    health: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: Treasure::arrows(STARTING_ARROWS),
            location: None,
            visited: Vec::new(),
            health: MAX_HEALTH,
        }
    }

    pub fn inventory(&self) -> &Treasure {
        &self.inventory
    }

    pub fn arrows(&self) -> u32 {
        self.inventory.count(TreasureType::Arrows)
    }

    pub fn visited(&self) -> &[Coord] {
        &self.visited
    }

    fn current(&self) -> GameResult<Coord> {
        self.location
            .ok_or(GameError::InvalidState(StateError::NotInDungeon))
    }

    /// Step into `at` and face whatever lives there.
    ///
    /// An undamaged monster always kills the player. An injured one kills on
    /// a single 0 out of a two-way draw; that is the only draw made here.
    pub fn enter_location<R: RandomSource + ?Sized>(
        &mut self,
        dungeon: &DungeonGraph,
        at: Coord,
        rng: &mut R,
    ) -> GameResult<Encounter> {
        let loc = dungeon.location(at).ok_or_else(|| {
            GameError::InternalInconsistency(format!("{at} is outside the dungeon"))
        })?;

        self.visited.push(at);
        self.location = Some(at);

        let condition = loc
            .monster()
            .map_or(MonsterCondition::Dead, |m| m.condition());
        let encounter = match condition {
            MonsterCondition::Undamaged => Encounter::Devoured,
            MonsterCondition::Injured if rng.rn2(2) == 0 => Encounter::Devoured,
            MonsterCondition::Injured => Encounter::Escaped,
            MonsterCondition::Dead => Encounter::Quiet,
        };

        if encounter == Encounter::Devoured {
            self.health = 0;
            tracing::info!(location = %at, "player devoured");
        }
        tracing::debug!(location = %at, ?encounter, "player entered location");
        Ok(encounter)
    }

    /// Move one `kind` item from the current location into the inventory
    pub fn pick_treasure(
        &mut self,
        dungeon: &mut DungeonGraph,
        kind: TreasureType,
    ) -> GameResult<()> {
        let at = self.current()?;
        let loc = dungeon.location_mut(at).ok_or_else(|| {
            GameError::InternalInconsistency(format!("{at} is outside the dungeon"))
        })?;
        if !loc.remove_one(kind) {
            return Err(StateError::TreasureUnavailable(kind).into());
        }
        self.inventory.add(kind, 1);
        tracing::debug!(location = %at, %kind, "treasure picked");
        Ok(())
    }

    /// Shoot an arrow through the exit in `direction`, travelling `distance` caves
    pub fn shoot_arrow(
        &mut self,
        dungeon: &mut DungeonGraph,
        direction: Direction,
        distance: u32,
    ) -> GameResult<ShotOutcome> {
        if !(MIN_SHOT_DISTANCE..=MAX_SHOT_DISTANCE).contains(&distance) {
            return Err(GameError::InvalidDistance(distance));
        }
        if self.arrows() == 0 {
            return Err(StateError::NoArrows.into());
        }
        let at = self.current()?;
        if dungeon.neighbor(at, direction).is_none() {
            return Err(GameError::InvalidDirection {
                location: at,
                direction,
            });
        }

        self.inventory.remove_one(TreasureType::Arrows);
        let outcome = arrow::trace_arrow(dungeon, at, direction, distance);
        tracing::info!(from = %at, %direction, distance, ?outcome, "arrow shot");
        Ok(outcome)
    }
}

impl Character for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Option<Coord> {
        self.location
    }

    fn health(&self) -> u32 {
        self.health
    }
}

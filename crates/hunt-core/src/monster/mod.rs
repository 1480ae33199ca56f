//! Monsters
//!
//! The only monster is the Otyugh: it never moves or acts, it just waits in
//! its cave. Two arrow hits kill it.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::character::Character;
use crate::dungeon::Coord;
use crate::{MAX_HEALTH, MONSTER_NAME};

/// Health stage of a monster
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum MonsterCondition {
    #[default]
    Undamaged,
    Injured,
    Dead,
}

impl MonsterCondition {
    pub const fn health(self) -> u32 {
        match self {
            MonsterCondition::Undamaged => MAX_HEALTH,
            MonsterCondition::Injured => MAX_HEALTH / 2,
            MonsterCondition::Dead => 0,
        }
    }

    /// Condition after one more hit; dead stays dead
    pub const fn hit(self) -> Self {
        match self {
            MonsterCondition::Undamaged => MonsterCondition::Injured,
            MonsterCondition::Injured | MonsterCondition::Dead => MonsterCondition::Dead,
        }
    }
}

/// An Otyugh lurking in a cave
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    location: Coord,
    condition: MonsterCondition,
}

impl Monster {
    pub fn new(location: Coord) -> Self {
        Self {
            location,
            condition: MonsterCondition::Undamaged,
        }
    }

    pub fn condition(&self) -> MonsterCondition {
        self.condition
    }

    /// Take one arrow hit and return the resulting condition
    pub fn take_hit(&mut self) -> MonsterCondition {
        self.condition = self.condition.hit();
        self.condition
    }
}

impl Character for Monster {
    fn name(&self) -> &str {
        MONSTER_NAME
    }

    fn location(&self) -> Option<Coord> {
        Some(self.location)
    }

    fn health(&self) -> u32 {
        self.condition.health()
    }
}

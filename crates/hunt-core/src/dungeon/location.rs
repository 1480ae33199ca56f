//! Dungeon locations
//!
//! A location is one node of the dungeon graph. It knows its exits only by
//! the coordinates they lead to; the graph owns every node.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Coord, Direction};
use crate::character::Character;
use crate::monster::Monster;
use crate::object::{Treasure, TreasureType};

/// A cave or tunnel in the dungeon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    coord: Coord,
    /// Exit targets indexed by direction slot
    exits: [Option<Coord>; 4],
    treasure: Option<Treasure>,
    monster: Option<Monster>,
}

impl Location {
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            exits: [None; 4],
            treasure: None,
            monster: None,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Display name, e.g. `"(3, 4)"`
    pub fn name(&self) -> String {
        self.coord.to_string()
    }

    /// Where the exit in `direction` leads, if there is one
    pub fn neighbor(&self, direction: Direction) -> Option<Coord> {
        self.exits[direction.slot()]
    }

    pub fn has_exit(&self, direction: Direction) -> bool {
        self.neighbor(direction).is_some()
    }

    /// Copy of the exit mapping
    pub fn neighbors(&self) -> BTreeMap<Direction, Coord> {
        self.exits().collect()
    }

    /// Exits in direction order
    pub fn exits(&self) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.neighbor(dir).map(|to| (dir, to)))
    }

    pub fn exit_count(&self) -> usize {
        self.exits.iter().flatten().count()
    }

    /// Caves are dead ends, junctions or isolated nodes
    pub fn is_cave(&self) -> bool {
        self.exit_count() != 2
    }

    /// Tunnels have exactly two exits
    pub fn is_tunnel(&self) -> bool {
        !self.is_cave()
    }

    pub fn treasure(&self) -> Option<&Treasure> {
        self.treasure.as_ref()
    }

    /// True if something of `kind` can be picked up here
    pub fn has_treasure(&self, kind: TreasureType) -> bool {
        self.treasure.as_ref().is_some_and(|t| t.contains(kind))
    }

    pub fn monster(&self) -> Option<&Monster> {
        self.monster.as_ref()
    }

    pub fn has_living_monster(&self) -> bool {
        self.monster.as_ref().is_some_and(Monster::is_alive)
    }

    pub(crate) fn connect(&mut self, direction: Direction, to: Coord) {
        self.exits[direction.slot()] = Some(to);
    }

    pub(crate) fn set_treasure(&mut self, treasure: Treasure) {
        self.treasure = Some(treasure);
    }

    /// Treasure slot, created empty on first use
    pub(crate) fn treasure_mut(&mut self) -> &mut Treasure {
        self.treasure.get_or_insert_with(Treasure::new)
    }

    /// Take one item of `kind`; false if the location has none
    pub(crate) fn remove_one(&mut self, kind: TreasureType) -> bool {
        self.treasure.as_mut().is_some_and(|t| t.remove_one(kind))
    }

    /// Place a monster here. The slot can only be filled once.
    pub(crate) fn place_monster(&mut self, monster: Monster) -> bool {
        if self.monster.is_some() {
            return false;
        }
        self.monster = Some(monster);
        true
    }

    pub(crate) fn monster_mut(&mut self) -> Option<&mut Monster> {
        self.monster.as_mut()
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    /// Lexicographic on the display name
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(&other.name())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coord)
    }
}

//! Capabilities shared by everything that occupies a location

use crate::dungeon::Coord;

/// An agent standing somewhere in the dungeon
pub trait Character {
    fn name(&self) -> &str;

    /// Where the character currently stands, if it has been placed
    fn location(&self) -> Option<Coord>;

    fn health(&self) -> u32;

    fn is_alive(&self) -> bool {
        self.health() > 0
    }
}

//! Collectible items

mod treasure;

pub use treasure::{Treasure, TreasureType};

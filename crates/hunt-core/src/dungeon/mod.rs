//! Dungeon system
//!
//! Contains the location graph, its generator, and read-only snapshots.

mod coord;
mod disjoint_set;
mod generation;
mod graph;
mod location;
mod pool;
mod snapshot;

pub use coord::{Coord, Direction};
pub use disjoint_set::DisjointSet;
pub use graph::DungeonGraph;
pub use location::Location;
pub use snapshot::DungeonSnapshot;

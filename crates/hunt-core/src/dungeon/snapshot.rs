//! Read-only copies of a dungeon

use serde::{Deserialize, Serialize};

use super::{Coord, Location};
use crate::config::WrapMode;

/// Immutable copy of every location at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonSnapshot {
    height: usize,
    width: usize,
    wrap: WrapMode,
    start: Coord,
    end: Coord,
    locations: Vec<Location>,
}

impl DungeonSnapshot {
    pub(super) fn new(
        height: usize,
        width: usize,
        wrap: WrapMode,
        start: Coord,
        end: Coord,
        locations: Vec<Location>,
    ) -> Self {
        Self {
            height,
            width,
            wrap,
            start,
            end,
            locations,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn location(&self, coord: Coord) -> Option<&Location> {
        if coord.row >= self.height || coord.col >= self.width {
            return None;
        }
        self.locations.get(coord.row * self.width + coord.col)
    }

    /// One slice per row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Location]> {
        self.locations.chunks(self.width.max(1))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn caves(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|loc| loc.is_cave())
    }

    pub fn edge_count(&self) -> usize {
        self.locations.iter().map(Location::exit_count).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DungeonConfig;
    use crate::dungeon::{Coord, DungeonGraph};
    use crate::object::TreasureType;
    use hunt_rng::GameRng;

    #[test]
    fn test_snapshot_mirrors_graph() {
        let config = DungeonConfig::new(7, 9).with_extra_connectivity(3);
        let graph = DungeonGraph::generate(&config, &mut GameRng::new(6)).unwrap();
        let snapshot = graph.snapshot();

        assert_eq!(snapshot.height(), 7);
        assert_eq!(snapshot.width(), 9);
        assert_eq!(snapshot.start(), graph.start());
        assert_eq!(snapshot.end(), graph.end());
        assert_eq!(snapshot.edge_count(), graph.edge_count());
        assert_eq!(snapshot.caves().count(), graph.caves().len());
        assert_eq!(snapshot.rows().count(), 7);
        assert!(snapshot.rows().all(|row| row.len() == 9));
        assert!(snapshot.location(Coord::new(7, 0)).is_none());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let config = DungeonConfig::new(6, 6).with_arrow_percent(100);
        let mut graph = DungeonGraph::generate(&config, &mut GameRng::new(6)).unwrap();
        let snapshot = graph.snapshot();
        let start = graph.start();
        let before = snapshot
            .location(start)
            .and_then(|l| l.treasure())
            .map_or(0, |t| t.count(TreasureType::Arrows));
        assert!(before > 0);

        if let Some(loc) = graph.location_mut(start) {
            loc.remove_one(TreasureType::Arrows);
        }
        let after = snapshot
            .location(start)
            .and_then(|l| l.treasure())
            .map_or(0, |t| t.count(TreasureType::Arrows));
        assert_eq!(before, after);
    }

    #[test]
    fn test_snapshot_serializes() {
        let graph =
            DungeonGraph::generate(&DungeonConfig::new(6, 6), &mut GameRng::new(1)).unwrap();
        let json = serde_json::to_string(&graph.snapshot()).unwrap();
        assert!(json.contains("\"wrap\":\"nonwrapping\""));
    }
}

//! Dungeon generation
//!
//! Builds a random spanning tree over the grid with Kruskal's algorithm,
//! adds extra edges for interconnectivity, then classifies locations and
//! places treasure, endpoints, monsters and arrows.
//!
//! Random draws happen in a fixed order so a seed always yields the same
//! dungeon: spanning-tree edges, extra edges, treasure caves and their rolls,
//! the start cave, monster caves, and finally arrow piles.

use hunt_rng::RandomSource;

use super::disjoint_set::DisjointSet;
use super::pool::DrawPool;
use super::{Coord, Direction, DungeonGraph};
use crate::config::{DungeonConfig, WrapMode};
use crate::error::{ConfigError, GameError, GameResult};
use crate::monster::Monster;
use crate::object::{Treasure, TreasureType};
use crate::{MAX_ARROW_PILE, MIN_PATH_LENGTH};

/// A candidate passage; `direction` leads from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Edge {
    pub from: Coord,
    pub to: Coord,
    pub direction: Direction,
}

/// Every passage the grid allows, row-major, south before east per cell
pub(super) fn candidate_edges(height: usize, width: usize, wrap: WrapMode) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(2 * height * width);
    for row in 0..height {
        for col in 0..width {
            let from = Coord::new(row, col);
            if row + 1 < height {
                edges.push(Edge { from, to: Coord::new(row + 1, col), direction: Direction::South });
            } else if wrap.wraps() {
                edges.push(Edge { from, to: Coord::new(0, col), direction: Direction::South });
            }
            if col + 1 < width {
                edges.push(Edge { from, to: Coord::new(row, col + 1), direction: Direction::East });
            } else if wrap.wraps() {
                edges.push(Edge { from, to: Coord::new(row, 0), direction: Direction::East });
            }
        }
    }
    edges
}

/// `ceil(total * percent / 100)`
fn percent_of(total: usize, percent: u32) -> usize {
    (total * percent as usize).div_ceil(100)
}

impl DungeonGraph {
    /// Generate a dungeon from `config`, drawing from `rng`.
    ///
    /// Fails without exposing any partial dungeon if the configuration is
    /// invalid or the generated layout cannot satisfy it.
    pub fn generate<R: RandomSource + ?Sized>(
        config: &DungeonConfig,
        rng: &mut R,
    ) -> GameResult<Self> {
        config.validate()?;

        let mut graph = Self::empty(config.height as usize, config.width as usize, config.wrap);
        let leftover = graph.build_spanning_tree(rng);
        graph.unused_edges = leftover.len();
        graph.add_interconnectivity(leftover, config.extra_connectivity as usize, rng);

        graph.caves = graph
            .cells
            .iter()
            .filter(|loc| loc.is_cave())
            .map(|loc| loc.coord())
            .collect();
        tracing::debug!(
            caves = graph.caves.len(),
            tunnels = graph.cells.len() - graph.caves.len(),
            "classified locations"
        );
        if graph.caves.len() < 2 {
            return Err(GameError::InternalInconsistency(format!(
                "generated layout has {} caves",
                graph.caves.len()
            )));
        }

        graph.place_treasure(config.treasure_percent, rng);
        graph.select_endpoints(rng)?;
        graph.place_monsters(config.monster_count, rng)?;
        graph.scatter_arrows(config.arrow_percent, rng);
        Ok(graph)
    }

    fn join(&mut self, edge: Edge) {
        if let Some(from) = self.location_mut(edge.from) {
            from.connect(edge.direction, edge.to);
        }
        if let Some(to) = self.location_mut(edge.to) {
            to.connect(edge.direction.opposite(), edge.from);
        }
    }

    /// Randomized Kruskal. Returns the rejected edges in rejection order.
    fn build_spanning_tree<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Vec<Edge> {
        let mut pool = DrawPool::new(candidate_edges(self.height, self.width, self.wrap));
        let mut groups = DisjointSet::new(self.cells.len());
        let mut leftover = Vec::new();

        while let Some(edge) = pool.draw(rng) {
            let (Some(a), Some(b)) = (self.index(edge.from), self.index(edge.to)) else {
                continue;
            };
            if groups.union(a, b) {
                self.join(edge);
            } else {
                leftover.push(edge);
            }
        }

        tracing::debug!(
            tree_edges = self.cells.len() - groups.set_count(),
            leftover = leftover.len(),
            "spanning tree built"
        );
        leftover
    }

    fn add_interconnectivity<R: RandomSource + ?Sized>(
        &mut self,
        leftover: Vec<Edge>,
        requested: usize,
        rng: &mut R,
    ) {
        let mut spare = DrawPool::new(leftover);
        let extra = requested.min(spare.len());
        for _ in 0..extra {
            if let Some(edge) = spare.draw(rng) {
                self.join(edge);
            }
        }
        tracing::debug!(requested, added = extra, "interconnectivity added");
    }

    fn place_treasure<R: RandomSource + ?Sized>(&mut self, percent: u32, rng: &mut R) {
        let count = percent_of(self.caves.len(), percent);
        let mut pool = DrawPool::new(self.caves.clone());
        for _ in 0..count {
            let Some(coord) = pool.draw(rng) else {
                break;
            };
            let treasure = Treasure::rolled(rng);
            if let Some(loc) = self.location_mut(coord) {
                loc.set_treasure(treasure);
            }
        }
        tracing::debug!(treasure_caves = count, "treasure placed");
    }

    /// First cave dequeued at least [`MIN_PATH_LENGTH`] hops from `start`
    fn find_end(&self, start: Coord) -> Option<(Coord, usize)> {
        self.breadth_first(start).into_iter().find(|&(coord, distance)| {
            distance >= MIN_PATH_LENGTH && self.location(coord).is_some_and(|loc| loc.is_cave())
        })
    }

    fn select_endpoints<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> GameResult<()> {
        let first = rng.index(self.caves.len());
        let count = self.caves.len();
        for offset in 0..count {
            let start = self.caves[(first + offset) % count];
            if let Some((end, distance)) = self.find_end(start) {
                if offset > 0 {
                    tracing::warn!(
                        drawn = %self.caves[first],
                        used = %start,
                        "no cave far enough from drawn start, used next cave"
                    );
                }
                self.start = start;
                self.end = end;
                tracing::debug!(start = %start, end = %end, distance, "endpoints selected");
                return Ok(());
            }
        }
        Err(GameError::InternalInconsistency(format!(
            "no pair of caves is {MIN_PATH_LENGTH} or more hops apart"
        )))
    }

    fn place_monsters<R: RandomSource + ?Sized>(
        &mut self,
        monster_count: u32,
        rng: &mut R,
    ) -> GameResult<()> {
        let (start, end) = (self.start, self.end);
        let eligible: Vec<Coord> = self
            .caves
            .iter()
            .copied()
            .filter(|&c| c != start && c != end)
            .collect();
        let extra = monster_count.saturating_sub(1) as usize;
        if extra > eligible.len() {
            return Err(ConfigError::NotEnoughCaves {
                requested: monster_count,
                available: eligible.len() + 1,
            }
            .into());
        }

        let mut chosen = vec![end];
        let mut pool = DrawPool::new(eligible);
        for _ in 0..extra {
            if let Some(coord) = pool.draw(rng) {
                chosen.push(coord);
            }
        }
        for coord in chosen {
            if let Some(loc) = self.location_mut(coord) {
                loc.place_monster(Monster::new(coord));
            }
        }
        tracing::debug!(monsters = monster_count, "monsters placed");
        Ok(())
    }

    fn scatter_arrows<R: RandomSource + ?Sized>(&mut self, percent: u32, rng: &mut R) {
        let count = percent_of(self.cells.len(), percent);
        let mut pool = DrawPool::new(self.cells.iter().map(|loc| loc.coord()).collect());
        for _ in 0..count {
            let Some(coord) = pool.draw(rng) else {
                break;
            };
            let quantity = rng.rnd(MAX_ARROW_PILE);
            if let Some(loc) = self.location_mut(coord) {
                loc.treasure_mut().add(TreasureType::Arrows, quantity);
            }
        }
        tracing::debug!(arrow_piles = count, "arrows scattered");
    }
}

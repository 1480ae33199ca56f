//! The dungeon graph
//!
//! Locations live in a flat row-major arena; exits refer to other locations
//! by coordinate. The graph is built once by [`DungeonGraph::generate`] and
//! afterwards only treasure and monster state change.

use std::collections::{BTreeMap, VecDeque};

use super::{Coord, Direction, DungeonSnapshot, Location};
use crate::config::WrapMode;
use crate::monster::Monster;

/// A generated dungeon: every location, every edge, and the chosen endpoints
#[derive(Debug, Clone)]
pub struct DungeonGraph {
    pub(super) height: usize,
    pub(super) width: usize,
    pub(super) wrap: WrapMode,
    pub(super) cells: Vec<Location>,
    pub(super) caves: Vec<Coord>,
    pub(super) start: Coord,
    pub(super) end: Coord,
    pub(super) unused_edges: usize,
}

impl DungeonGraph {
    /// Unconnected grid of `height` x `width` locations
    pub(super) fn empty(height: usize, width: usize, wrap: WrapMode) -> Self {
        let cells = (0..height * width)
            .map(|i| Location::new(Coord::new(i / width, i % width)))
            .collect();
        Self {
            height,
            width,
            wrap,
            cells,
            caves: Vec::new(),
            start: Coord::new(0, 0),
            end: Coord::new(0, 0),
            unused_edges: 0,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap
    }

    pub(super) fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.height && coord.col < self.width)
            .then(|| coord.row * self.width + coord.col)
    }

    pub fn location(&self, coord: Coord) -> Option<&Location> {
        self.index(coord).map(|i| &self.cells[i])
    }

    pub(crate) fn location_mut(&mut self, coord: Coord) -> Option<&mut Location> {
        self.index(coord).map(move |i| &mut self.cells[i])
    }

    /// All locations in row-major order
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.cells.iter()
    }

    /// Copy of the exits of `coord`; empty if the coordinate is outside the grid
    pub fn neighbors_of(&self, coord: Coord) -> BTreeMap<Direction, Coord> {
        self.location(coord)
            .map(Location::neighbors)
            .unwrap_or_default()
    }

    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        self.location(coord).and_then(|loc| loc.neighbor(direction))
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// Caves in row-major order
    pub fn caves(&self) -> &[Coord] {
        &self.caves
    }

    pub fn tunnels(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .filter(|loc| loc.is_tunnel())
            .map(Location::coord)
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        self.cells.iter().filter_map(Location::monster)
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.cells.iter().map(Location::exit_count).sum::<usize>() / 2
    }

    /// Candidate edges rejected by the spanning tree, before any were reused
    /// for extra connectivity
    pub fn unused_edge_count(&self) -> usize {
        self.unused_edges
    }

    /// Breadth-first walk from `from`, in dequeue order with hop distances.
    ///
    /// Exits are scanned in direction order, so ties are broken by the order
    /// locations entered the frontier.
    pub(super) fn breadth_first(&self, from: Coord) -> Vec<(Coord, usize)> {
        let Some(origin) = self.index(from) else {
            return Vec::new();
        };
        let mut seen = vec![false; self.cells.len()];
        let mut order = Vec::new();
        let mut frontier = VecDeque::new();
        seen[origin] = true;
        frontier.push_back((from, 0));

        while let Some((coord, distance)) = frontier.pop_front() {
            order.push((coord, distance));
            let Some(loc) = self.location(coord) else {
                continue;
            };
            for (_, next) in loc.exits() {
                if let Some(i) = self.index(next) {
                    if !seen[i] {
                        seen[i] = true;
                        frontier.push_back((next, distance + 1));
                    }
                }
            }
        }
        order
    }

    /// Shortest hop count between two locations
    pub fn hop_distance(&self, from: Coord, to: Coord) -> Option<usize> {
        self.breadth_first(from)
            .into_iter()
            .find(|&(coord, _)| coord == to)
            .map(|(_, distance)| distance)
    }

    /// Locations whose shortest hop distance from `from` is exactly `n`
    pub fn locations_exactly_n_hops_away(&self, from: Coord, n: usize) -> Vec<Coord> {
        self.breadth_first(from)
            .into_iter()
            .skip_while(|&(_, distance)| distance < n)
            .take_while(|&(_, distance)| distance == n)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Immutable copy of the whole grid
    pub fn snapshot(&self) -> DungeonSnapshot {
        DungeonSnapshot::new(
            self.height,
            self.width,
            self.wrap,
            self.start,
            self.end,
            self.cells.clone(),
        )
    }
}

#[cfg(test)]
impl DungeonGraph {
    /// Hand-built non-wrapping grid with the given passages carved out
    pub(crate) fn carved(
        height: usize,
        width: usize,
        passages: &[(Coord, Direction)],
        start: Coord,
        end: Coord,
    ) -> Self {
        let mut graph = Self::empty(height, width, WrapMode::NonWrapping);
        for &(from, direction) in passages {
            let (dr, dc) = direction.delta();
            let to = Coord::new(
                from.row.checked_add_signed(dr).unwrap(),
                from.col.checked_add_signed(dc).unwrap(),
            );
            graph.location_mut(from).unwrap().connect(direction, to);
            graph.location_mut(to).unwrap().connect(direction.opposite(), from);
        }
        graph.caves = graph
            .cells
            .iter()
            .filter(|loc| loc.is_cave())
            .map(Location::coord)
            .collect();
        graph.start = start;
        graph.end = end;
        graph
    }
}

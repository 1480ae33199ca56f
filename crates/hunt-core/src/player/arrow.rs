//! Arrow flight
//!
//! An arrow follows tunnels around corners for free and only counts caves
//! against its range. It stops in the cave where the range runs out and hits
//! whatever monster is still alive there.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::dungeon::{Coord, Direction, DungeonGraph};
use crate::monster::MonsterCondition;

/// What became of an arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Hit a dead end, ran into a wall of a cave or looped back on itself
    Dissipated,
    /// Came to rest in a cave without a living monster
    Missed,
    /// Hit the monster at `at`
    Hit { at: Coord, killed: bool },
}

/// Fly an arrow from `origin` towards `direction` across `distance` caves
pub(crate) fn trace_arrow(
    dungeon: &mut DungeonGraph,
    origin: Coord,
    direction: Direction,
    distance: u32,
) -> ShotOutcome {
    let mut visited = HashSet::new();
    visited.insert(origin);
    let mut heading = direction;
    let mut remaining = distance;
    let mut next = dungeon.neighbor(origin, direction);

    while let Some(at) = next {
        if remaining == 0 || !visited.insert(at) {
            return ShotOutcome::Dissipated;
        }
        let Some(loc) = dungeon.location(at) else {
            return ShotOutcome::Dissipated;
        };

        if loc.is_tunnel() {
            let entry = heading.opposite();
            let Some((exit, to)) = loc.exits().find(|&(dir, _)| dir != entry) else {
                return ShotOutcome::Dissipated;
            };
            heading = exit;
            next = Some(to);
            continue;
        }

        let onward = loc.neighbor(heading);
        remaining -= 1;
        if remaining == 0 {
            return match dungeon.location_mut(at).and_then(|l| l.monster_mut()) {
                Some(monster) if monster.is_alive() => {
                    let condition = monster.take_hit();
                    ShotOutcome::Hit {
                        at,
                        killed: condition == MonsterCondition::Dead,
                    }
                }
                _ => ShotOutcome::Missed,
            };
        }
        next = onward;
    }
    ShotOutcome::Dissipated
}

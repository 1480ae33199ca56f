//! Treasure bundles
//!
//! A bundle counts items per [`TreasureType`]. Caves roll one on generation,
//! scattered arrow piles and the player's inventory reuse the same type.

use core::fmt;
use std::collections::BTreeMap;

use hunt_rng::RandomSource;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{MAX_GEM_QUANTITY, MIN_GEM_QUANTITY};

/// Kind of collectible item
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TreasureType {
    Rubies,
    Diamonds,
    Sapphires,
    Arrows,
}

impl TreasureType {
    /// Gem kinds rolled for treasure caves
    pub const GEMS: [TreasureType; 3] = [
        TreasureType::Rubies,
        TreasureType::Diamonds,
        TreasureType::Sapphires,
    ];

    pub const fn is_gem(self) -> bool {
        !matches!(self, TreasureType::Arrows)
    }
}

/// Counts per treasure type; zeroed entries are dropped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treasure {
    counts: BTreeMap<TreasureType, u32>,
}

impl Treasure {
    /// An empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// A bundle with each gem rolled independently in `1..=10`
    pub fn rolled<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut treasure = Self::new();
        for gem in TreasureType::GEMS {
            let quantity = MIN_GEM_QUANTITY + rng.rn2(MAX_GEM_QUANTITY - MIN_GEM_QUANTITY + 1);
            treasure.add(gem, quantity);
        }
        treasure
    }

    /// A bundle holding only arrows
    pub fn arrows(quantity: u32) -> Self {
        let mut treasure = Self::new();
        treasure.add(TreasureType::Arrows, quantity);
        treasure
    }

    pub fn count(&self, kind: TreasureType) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn contains(&self, kind: TreasureType) -> bool {
        self.count(kind) > 0
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// True if any gem (not just arrows) is present
    pub fn has_gems(&self) -> bool {
        TreasureType::GEMS.iter().any(|&gem| self.contains(gem))
    }

    pub fn add(&mut self, kind: TreasureType, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.counts.entry(kind).or_insert(0) += quantity;
    }

    pub fn add_arrow(&mut self) {
        self.add(TreasureType::Arrows, 1);
    }

    /// Take one item of `kind`. Returns false if there was none.
    pub fn remove_one(&mut self, kind: TreasureType) -> bool {
        match self.counts.get_mut(&kind) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(&kind);
                true
            }
            None => false,
        }
    }

    /// Non-zero entries in treasure-type order
    pub fn iter(&self) -> impl Iterator<Item = (TreasureType, u32)> + '_ {
        self.counts.iter().map(|(&kind, &count)| (kind, count))
    }
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (kind, count) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{kind}: {count}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunt_rng::{GameRng, ScriptedRng};

    #[test]
    fn test_rolled_ranges() {
        let mut rng = GameRng::new(42);
        for _ in 0..200 {
            let treasure = Treasure::rolled(&mut rng);
            for gem in TreasureType::GEMS {
                let count = treasure.count(gem);
                assert!((1..=10).contains(&count), "{gem} rolled {count}");
            }
            assert_eq!(treasure.count(TreasureType::Arrows), 0);
        }
    }

    #[test]
    fn test_rolled_uses_three_draws_in_gem_order() {
        let mut rng = ScriptedRng::new(vec![0, 9, 4]);
        let treasure = Treasure::rolled(&mut rng);
        assert_eq!(treasure.count(TreasureType::Rubies), 1);
        assert_eq!(treasure.count(TreasureType::Diamonds), 10);
        assert_eq!(treasure.count(TreasureType::Sapphires), 5);
        assert_eq!(rng.draws(), 3);
        assert!(rng.log().iter().all(|d| d.bound == 10));
    }

    #[test]
    fn test_add_arrow_creates_entry() {
        let mut treasure = Treasure::new();
        assert!(!treasure.contains(TreasureType::Arrows));
        treasure.add_arrow();
        treasure.add_arrow();
        assert_eq!(treasure.count(TreasureType::Arrows), 2);
        assert!(!treasure.has_gems());
    }

    #[test]
    fn test_remove_one_floors_at_zero() {
        let mut treasure = Treasure::arrows(1);
        assert!(treasure.remove_one(TreasureType::Arrows));
        assert_eq!(treasure.count(TreasureType::Arrows), 0);
        assert!(!treasure.remove_one(TreasureType::Arrows));
        assert_eq!(treasure.count(TreasureType::Arrows), 0);
        assert!(treasure.is_empty());
    }

    #[test]
    fn test_display() {
        let mut treasure = Treasure::new();
        treasure.add(TreasureType::Sapphires, 2);
        treasure.add(TreasureType::Rubies, 3);
        assert_eq!(treasure.to_string(), "RUBIES: 3, SAPPHIRES: 2");
        assert_eq!(Treasure::new().to_string(), "");
    }

    #[test]
    fn test_parse_type() {
        assert_eq!("diamonds".parse::<TreasureType>().unwrap(), TreasureType::Diamonds);
        assert_eq!("ARROWS".parse::<TreasureType>().unwrap(), TreasureType::Arrows);
        assert!("gold".parse::<TreasureType>().is_err());
    }
}

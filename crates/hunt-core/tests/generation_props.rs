use hunt_core::{
    Direction, DungeonConfig, DungeonGraph, GameRng, MIN_PATH_LENGTH, TreasureType, WrapMode,
};
use proptest::prelude::*;

fn wrap_mode() -> impl Strategy<Value = WrapMode> {
    prop_oneof![Just(WrapMode::NonWrapping), Just(WrapMode::Wrapping)]
}

fn config() -> impl Strategy<Value = DungeonConfig> {
    (6u32..=16, 6u32..=16, 0u32..=300, wrap_mode(), 0u32..=100).prop_map(
        |(height, width, extra, wrap, treasure)| {
            DungeonConfig::new(height, width)
                .with_extra_connectivity(extra)
                .with_wrap(wrap)
                .with_treasure_percent(treasure)
        },
    )
}

fn candidate_count(config: &DungeonConfig) -> usize {
    let (h, w) = (config.height as usize, config.width as usize);
    match config.wrap {
        WrapMode::Wrapping => 2 * h * w,
        WrapMode::NonWrapping => h * (w - 1) + w * (h - 1),
    }
}

fn ceil_percent(total: usize, percent: u32) -> usize {
    (total * percent as usize).div_ceil(100)
}

fn generate(config: &DungeonConfig, seed: u64) -> DungeonGraph {
    DungeonGraph::generate(config, &mut GameRng::new(seed)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_edge_count(config in config(), seed in any::<u64>()) {
        let graph = generate(&config, seed);
        let cells = config.cell_count();
        let tree = cells - 1;
        prop_assert_eq!(graph.unused_edge_count(), candidate_count(&config) - tree);
        let extra = (config.extra_connectivity as usize).min(graph.unused_edge_count());
        prop_assert_eq!(graph.edge_count(), tree + extra);
    }

    #[test]
    fn test_connected_and_symmetric(config in config(), seed in any::<u64>()) {
        let graph = generate(&config, seed);
        let (height, width) = graph.dimensions();
        for loc in graph.locations() {
            let from = loc.coord();
            prop_assert!(graph.hop_distance(graph.start(), from).is_some());
            for (dir, to) in loc.exits() {
                let back = graph.location(to).and_then(|l| l.neighbor(dir.opposite()));
                prop_assert_eq!(back, Some(from));

                let (dr, dc) = dir.delta();
                let row = (from.row as isize + dr).rem_euclid(height as isize) as usize;
                let col = (from.col as isize + dc).rem_euclid(width as isize) as usize;
                prop_assert_eq!((to.row, to.col), (row, col));
                if config.wrap == WrapMode::NonWrapping {
                    prop_assert_eq!(from.row as isize + dr, row as isize);
                    prop_assert_eq!(from.col as isize + dc, col as isize);
                }
            }
        }
    }

    #[test]
    fn test_caves_and_treasure(config in config(), seed in any::<u64>()) {
        let graph = generate(&config, seed);
        let caves: Vec<_> = graph
            .locations()
            .filter(|loc| loc.exit_count() != 2)
            .map(|loc| loc.coord())
            .collect();
        prop_assert_eq!(graph.caves(), caves.as_slice());

        for tunnel in graph.tunnels() {
            let loc = graph.location(tunnel).unwrap();
            prop_assert!(loc.treasure().is_none_or(|t| !t.has_gems()));
        }
        let gem_caves = graph
            .locations()
            .filter(|loc| loc.treasure().is_some_and(|t| t.has_gems()))
            .count();
        prop_assert_eq!(gem_caves, ceil_percent(caves.len(), config.treasure_percent));

        let arrow_piles = graph
            .locations()
            .filter(|loc| loc.has_treasure(TreasureType::Arrows))
            .count();
        prop_assert_eq!(arrow_piles, ceil_percent(config.cell_count(), config.arrow_percent));
    }

    #[test]
    fn test_endpoints(config in config(), seed in any::<u64>()) {
        let graph = generate(&config, seed);
        let (start, end) = (graph.start(), graph.end());
        prop_assert!(graph.caves().contains(&start));
        prop_assert!(graph.caves().contains(&end));
        let distance = graph.hop_distance(start, end).unwrap();
        prop_assert!(distance >= MIN_PATH_LENGTH);

        prop_assert!(graph.location(end).unwrap().has_living_monster());
        prop_assert!(graph.location(start).unwrap().monster().is_none());
    }

    #[test]
    fn test_monster_count(
        size in 10u32..=16,
        monsters in 1u32..=4,
        wrap in wrap_mode(),
        seed in any::<u64>(),
    ) {
        let config = DungeonConfig::new(size, size)
            .with_wrap(wrap)
            .with_monster_count(monsters);
        let graph = generate(&config, seed);
        prop_assert_eq!(graph.monsters().count(), monsters as usize);
        for loc in graph.locations().filter(|loc| loc.monster().is_some()) {
            prop_assert!(loc.is_cave());
            prop_assert_ne!(loc.coord(), graph.start());
        }
    }

    #[test]
    fn test_seed_reproducible(config in config(), seed in any::<u64>()) {
        let a = serde_json::to_string(&generate(&config, seed).snapshot()).unwrap();
        let b = serde_json::to_string(&generate(&config, seed).snapshot()).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn test_every_candidate_edge() {
    for wrap in [WrapMode::NonWrapping, WrapMode::Wrapping] {
        let config = DungeonConfig::new(7, 9)
            .with_wrap(wrap)
            .with_extra_connectivity(u32::MAX);
        let graph = generate(&config, 11);
        assert_eq!(graph.edge_count(), candidate_count(&config));
        if wrap == WrapMode::Wrapping {
            assert!(graph.locations().all(|loc| loc.exit_count() == 4));
            assert_eq!(graph.tunnels().count(), 0);
        }
        for loc in graph.locations() {
            for dir in Direction::ALL {
                let interior = match dir {
                    Direction::North => loc.coord().row > 0,
                    Direction::South => loc.coord().row < 6,
                    Direction::West => loc.coord().col > 0,
                    Direction::East => loc.coord().col < 8,
                };
                if interior {
                    assert!(loc.has_exit(dir));
                }
            }
        }
    }
}

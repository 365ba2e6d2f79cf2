use seabattle::{random_board, BoardError, Dot, ShotResult, BOARD_SIZE, FLEET, FLEET_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

fn touching(a: Dot, b: Dot) -> bool {
    (a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_fleet_never_overlaps_or_touches(seed in any::<u64>(), size in 6usize..=10) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(&mut rng, size);
        prop_assert_eq!(board.ship_count(), FLEET_SIZE);

        let ships = board.ships();
        for (i, ship) in ships.iter().enumerate() {
            prop_assert_eq!(ship.length(), FLEET[i]);
            for cell in ship.cells() {
                prop_assert!(!board.is_out_of_bounds(cell));
            }
            for other in &ships[i + 1..] {
                for a in ship.cells() {
                    for b in other.cells() {
                        prop_assert!(!touching(a, b), "{:?} touches {:?}", ship, other);
                    }
                }
            }
        }
    }

    #[test]
    fn second_shot_always_rejected(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE as i32,
        col in 0..BOARD_SIZE as i32,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng, BOARD_SIZE);
        let target = Dot::new(row, col);
        prop_assert!(board.shoot(target).is_ok());
        let sunk = board.sunk_count();
        prop_assert_eq!(board.shoot(target), Err(BoardError::AlreadyTargeted));
        prop_assert_eq!(board.sunk_count(), sunk);
    }

    #[test]
    fn sunk_count_tracks_sinkings(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng, BOARD_SIZE);
        let size = BOARD_SIZE as i32;
        let mut targets: Vec<Dot> = (0..size)
            .flat_map(|x| (0..size).map(move |y| Dot::new(x, y)))
            .collect();
        targets.shuffle(&mut rng);

        let mut sinkings = 0;
        for target in targets {
            let before = board.sunk_count();
            match board.shoot(target) {
                Ok(ShotResult::Sunk) => {
                    sinkings += 1;
                    prop_assert_eq!(board.sunk_count(), before + 1);
                }
                Ok(_) => prop_assert_eq!(board.sunk_count(), before),
                Err(e) => {
                    prop_assert_eq!(e, BoardError::AlreadyTargeted);
                    prop_assert_eq!(board.sunk_count(), before);
                }
            }
            let sunk_ships = board.ships().iter().filter(|s| s.is_sunk()).count();
            prop_assert_eq!(board.sunk_count(), sunk_ships);
        }
        prop_assert_eq!(sinkings, FLEET_SIZE);
        prop_assert!(board.all_sunk());
    }
}

use seabattle::{
    follow_up_candidates, random_target, untried_cells, AutomatedPlayer, Board, Dot, Orientation,
    Player, Ship,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// 6x6 board with a vertical cruiser through (2, 2), already hit there.
fn board_hit_at_center() -> Board {
    let mut board = Board::new(6);
    board
        .add_ship(Ship::new(Dot::new(1, 2), 3, Orientation::Vertical))
        .unwrap();
    board.shoot(Dot::new(2, 2)).unwrap();
    board
}

#[test]
fn test_follow_up_stays_next_to_the_hit() {
    let board = board_hit_at_center();
    let allowed = [
        Dot::new(1, 2),
        Dot::new(3, 2),
        Dot::new(2, 1),
        Dot::new(2, 3),
    ];
    let mut candidates = follow_up_candidates(&board, Dot::new(2, 2));
    candidates.sort();
    let mut expected = allowed.to_vec();
    expected.sort();
    assert_eq!(candidates, expected);

    let mut player = AutomatedPlayer::with_last_target(Dot::new(2, 2));
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let target = player.select_target(&mut rng, &board, true).unwrap();
        assert!(allowed.contains(&target), "unexpected follow-up {}", target);
        assert_eq!(player.last_target(), Some(Dot::new(2, 2)));
    }
}

#[test]
fn test_follow_up_skips_tried_and_off_board_cells() {
    let mut board = Board::new(6);
    board
        .add_ship(Ship::new(Dot::new(0, 0), 2, Orientation::Horizontal))
        .unwrap();
    board.shoot(Dot::new(0, 0)).unwrap();
    board.shoot(Dot::new(1, 0)).unwrap();

    assert_eq!(follow_up_candidates(&board, Dot::new(0, 0)), vec![Dot::new(0, 1)]);
    let mut player = AutomatedPlayer::with_last_target(Dot::new(0, 0));
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(
        player.select_target(&mut rng, &board, true),
        Some(Dot::new(0, 1))
    );
}

#[test]
fn test_follow_up_falls_back_to_random_shot() {
    let mut board = Board::new(6);
    board
        .add_ship(Ship::new(Dot::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    for dot in [Dot::new(5, 5), Dot::new(4, 5), Dot::new(5, 4)] {
        board.shoot(dot).unwrap();
    }
    assert!(follow_up_candidates(&board, Dot::new(5, 5)).is_empty());

    let mut player = AutomatedPlayer::with_last_target(Dot::new(5, 5));
    let mut rng = SmallRng::seed_from_u64(11);
    let target = player.select_target(&mut rng, &board, true).unwrap();
    assert!(board.is_untried(target));
    assert_eq!(player.last_target(), Some(target));
}

#[test]
fn test_random_shot_only_picks_untried_cells() {
    let mut board = Board::new(6);
    board
        .add_ship(Ship::new(Dot::new(3, 3), 1, Orientation::Horizontal))
        .unwrap();
    board.shoot(Dot::new(3, 3)).unwrap();
    // sinking revealed the 8 surrounding cells
    assert_eq!(untried_cells(&board).len(), 36 - 9);

    let mut player = AutomatedPlayer::new();
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let target = player.select_target(&mut rng, &board, false).unwrap();
        assert!(board.is_untried(target));
        assert_eq!(player.last_target(), Some(target));
    }
}

#[test]
fn test_no_target_on_exhausted_board() {
    let mut board = Board::new(2);
    board
        .add_ship(Ship::new(Dot::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board.shoot(Dot::new(0, 0)).unwrap();
    assert!(untried_cells(&board).is_empty());

    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(random_target(&board, &mut rng), None);
    let mut player = AutomatedPlayer::new();
    assert_eq!(player.select_target(&mut rng, &board, false), None);
    assert_eq!(player.select_target(&mut rng, &board, true), None);
}

#[test]
fn test_every_untried_cell_next_to_a_ship_is_accepted() {
    let mut board = Board::new(6);
    board
        .add_ship(Ship::new(Dot::new(2, 2), 2, Orientation::Horizontal))
        .unwrap();
    // leave only the ship and its surrounding cells untried
    for x in 0..6 {
        for y in 0..6 {
            if !((1..=3).contains(&x) && (1..=4).contains(&y)) {
                board.shoot(Dot::new(x, y)).unwrap();
            }
        }
    }

    let mut player = AutomatedPlayer::new();
    let mut rng = SmallRng::seed_from_u64(12);
    let mut follow_up = false;
    let mut shots = 0;
    while !board.all_sunk() {
        let target = player.select_target(&mut rng, &board, follow_up).unwrap();
        let result = board.shoot(target).unwrap();
        follow_up = result.hit();
        shots += 1;
        assert!(shots <= 12);
    }
}

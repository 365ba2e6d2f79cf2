#![cfg(feature = "std")]

use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    AutomatedPlayer, ConsoleOutput, Dot, Game, HumanPlayer, LineInput, Orientation, Ship, Side,
    Board,
};

fn single_ship(bow: Dot) -> Board {
    let mut board = Board::new(6);
    board
        .add_ship(Ship::new(bow, 1, Orientation::Horizontal))
        .unwrap();
    board
}

#[test]
fn test_console_game_from_scripted_stdin() {
    // "7 7" is off the board, "6 6" sinks the only ship.
    let script = Cursor::new("nonsense\n7 7\n6 6\n");
    let mut prompts: Vec<u8> = Vec::new();
    let human = HumanPlayer::new(LineInput::with_output(script, &mut prompts));
    let mut game = Game::new(
        Box::new(human),
        Box::new(AutomatedPlayer::new()),
        single_ship(Dot::new(0, 0)),
        single_ship(Dot::new(5, 5)),
    );
    let mut rng = SmallRng::seed_from_u64(12345);
    let mut console = ConsoleOutput::new(Vec::<u8>::new());

    assert_eq!(game.play(&mut rng, &mut console), Some(Side::Human));
    drop(game);

    let text = String::from_utf8(console.into_inner()).unwrap();
    assert!(text.contains("Player board:"));
    assert!(text.contains("Player moves!"));
    assert!(text.contains("You are trying to shoot off the board!"));
    assert!(text.contains("Ship sunk!"));
    assert!(text.trim_end().ends_with("Player wins!"));

    let prompts = String::from_utf8(prompts).unwrap();
    assert!(prompts.contains("Enter 2 coordinates!"));
}

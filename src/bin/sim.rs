#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use seabattle::{init_logging, AutomatedPlayer, Game, Side, Silent, BOARD_SIZE};
#[cfg(feature = "std")]
use serde::Serialize;

/// Outcome of one self-play game.
#[cfg(feature = "std")]
#[derive(Serialize)]
struct GameSummary {
    seed: u64,
    winner: Option<Side>,
    shots: usize,
    human_seat_sunk: usize,
    automated_seat_sunk: usize,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut summaries = Vec::new();
    for i in 0..games {
        let game_seed = seed.wrapping_add(i);
        let mut rng = SmallRng::seed_from_u64(game_seed);
        // Both seats are played by the computer.
        let mut game = Game::setup(
            &mut rng,
            BOARD_SIZE,
            Box::new(AutomatedPlayer::new()),
            Box::new(AutomatedPlayer::new()),
        );
        let winner = game.play(&mut rng, &mut Silent);
        summaries.push(GameSummary {
            seed: game_seed,
            winner,
            shots: game.shots(),
            human_seat_sunk: game.board(Side::Human).sunk_count(),
            automated_seat_sunk: game.board(Side::Automated).sunk_count(),
        });
    }

    println!("{}", serde_json::to_string(&summaries)?);
    Ok(())
}

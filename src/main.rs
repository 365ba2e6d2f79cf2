#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, AutomatedPlayer, ConsoleOutput, Game, GameOutput, HumanPlayer, LineInput, Side,
    BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Sea battle on a small grid against the computer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = BOARD_SIZE as u8,
        value_parser = clap::value_parser!(u8).range(6..=10),
        help = "Edge length of the square board"
    )]
    size: u8,
    #[arg(long, help = "Show the computer's fleet")]
    reveal: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let stdin = std::io::stdin();
    let human = HumanPlayer::new(LineInput::new(stdin.lock()));
    let mut game = Game::setup(
        &mut rng,
        cli.size as usize,
        Box::new(human),
        Box::new(AutomatedPlayer::new()),
    );
    if cli.reveal {
        game.board_mut(Side::Automated).set_hidden(false);
    }

    let mut console = ConsoleOutput::stdout();
    console.greet()?;
    match game.play(&mut rng, &mut console) {
        Some(_) => {
            game.board_mut(Side::Automated).set_hidden(false);
            console.boards(game.board(Side::Human), game.board(Side::Automated));
        }
        None => println!("\nInput closed, game abandoned."),
    }
    Ok(())
}

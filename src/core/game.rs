//! Match controller: alternating turns, extra turn on a hit, win detection.

use alloc::boxed::Box;
use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::core::{
    board::Board,
    common::{BoardError, Dot, ShotResult},
    placement::random_board,
};
use crate::player::Player;

/// The two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Automated => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The given side sank the whole enemy fleet.
    Won(Side),
}

/// Notifications sent to the output collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// `side` is about to move.
    Turn(Side),
    /// A shot by `side` at `target` was resolved.
    Shot {
        side: Side,
        target: Dot,
        result: ShotResult,
    },
    /// The board refused `target`; `side` moves again.
    Rejected {
        side: Side,
        target: Dot,
        error: BoardError,
    },
    /// `side` sank the last enemy ship.
    Victory(Side),
}

/// Receiver of everything the controller wants to tell the players.
pub trait GameOutput {
    fn event(&mut self, event: &GameEvent);

    /// Called before every move with both fleets.
    fn boards(&mut self, _human: &Board, _automated: &Board) {}
}

/// Output that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl GameOutput for Silent {
    fn event(&mut self, _event: &GameEvent) {}
}

/// Records events, mostly useful in tests and the simulator.
impl GameOutput for Vec<GameEvent> {
    fn event(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}

/// A single game between two players, each with its own board.
pub struct Game<'a> {
    players: [Box<dyn Player + 'a>; 2],
    boards: [Board; 2],
    turn: Side,
    follow_up: [bool; 2],
    shots: usize,
}

impl<'a> Game<'a> {
    /// Start a game with prepared boards. `human_board` is the fleet the
    /// automated player shoots at and vice versa. The human moves first.
    pub fn new(
        human: Box<dyn Player + 'a>,
        automated: Box<dyn Player + 'a>,
        human_board: Board,
        automated_board: Board,
    ) -> Self {
        Game {
            players: [human, automated],
            boards: [human_board, automated_board],
            turn: Side::Human,
            follow_up: [false; 2],
            shots: 0,
        }
    }

    /// Start a game with random fleets on `size`×`size` boards. The automated
    /// fleet is hidden.
    pub fn setup(
        rng: &mut SmallRng,
        size: usize,
        human: Box<dyn Player + 'a>,
        automated: Box<dyn Player + 'a>,
    ) -> Self {
        let human_board = random_board(rng, size);
        let mut automated_board = random_board(rng, size);
        automated_board.set_hidden(true);
        Self::new(human, automated, human_board, automated_board)
    }

    /// Side whose move is next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Fleet owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        &mut self.boards[side.index()]
    }

    /// Whether `side` gets a follow-up shot on its next move.
    pub fn follow_up(&self, side: Side) -> bool {
        self.follow_up[side.index()]
    }

    /// Number of shots resolved so far, rejected targets excluded.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.board(Side::Automated).all_sunk() {
            GameStatus::Won(Side::Human)
        } else if self.board(Side::Human).all_sunk() {
            GameStatus::Won(Side::Automated)
        } else {
            GameStatus::InProgress
        }
    }

    /// Play one move of the side whose turn it is.
    ///
    /// Targets rejected by the board are reported and asked for again. Returns
    /// `None` if the game is already over or the player supplied no target.
    pub fn step(&mut self, rng: &mut SmallRng, output: &mut dyn GameOutput) -> Option<ShotResult> {
        if self.status() != GameStatus::InProgress {
            return None;
        }
        let side = self.turn;
        let enemy = side.opponent();
        let follow_up = self.follow_up[side.index()];
        output.event(&GameEvent::Turn(side));

        loop {
            let target = self.players[side.index()].select_target(
                rng,
                &self.boards[enemy.index()],
                follow_up,
            )?;
            let result = match self.boards[enemy.index()].shoot(target) {
                Ok(result) => result,
                Err(error) => {
                    log::debug!("{:?} target {} rejected: {}", side, target, error);
                    output.event(&GameEvent::Rejected {
                        side,
                        target,
                        error,
                    });
                    continue;
                }
            };

            self.shots += 1;
            output.event(&GameEvent::Shot {
                side,
                target,
                result,
            });
            // A sunk ship leaves nothing to follow up on.
            self.follow_up[side.index()] = result.hit();
            if !result.grants_extra_turn() {
                self.turn = enemy;
            }
            if self.boards[enemy.index()].all_sunk() {
                log::info!("{:?} wins after {} shots", side, self.shots);
                output.event(&GameEvent::Victory(side));
            }
            return Some(result);
        }
    }

    /// Play until one fleet is sunk and return the winner, or `None` if a
    /// player stopped supplying targets.
    pub fn play(&mut self, rng: &mut SmallRng, output: &mut dyn GameOutput) -> Option<Side> {
        loop {
            if let GameStatus::Won(side) = self.status() {
                return Some(side);
            }
            output.boards(self.board(Side::Human), self.board(Side::Automated));
            self.step(rng, output)?;
        }
    }
}

//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AutomatedPlayer: random shots with a follow-up around the last hit
//! - HumanPlayer: forwards target selection to an input collaborator
//! - LineInput: line-based "x y" reader for the human player (std only)

use crate::core::{board::Board, common::Dot};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// The match controller owns both boards; a player only sees the enemy board
/// read-only while choosing a target.
pub trait Player {
    /// Choose the next cell to shoot on `enemy`. `follow_up` is set when this
    /// player's previous shot hit a ship without sinking it.
    ///
    /// Returns `None` when the player cannot provide a target any more. The
    /// board re-validates whatever is returned.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board, follow_up: bool) -> Option<Dot>;
}

// Re-export implementations
pub mod ai;
pub use ai::AutomatedPlayer;

pub mod human;
pub use human::{HumanPlayer, TargetInput};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_target, LineInput};

//! Core sea battle engine (no_std compatible)
//!
//! This module contains the board model, shot resolution, fleet placement,
//! the targeting heuristic and the match controller. It only needs `alloc`,
//! `rand` and the `log` facade.

pub mod ai;
pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod placement;
pub mod ship;

// Re-export commonly used types
pub use ai::{follow_up_candidates, follow_up_target, random_target, untried_cells};
pub use board::{Board, Cell};
pub use common::{BoardError, Dot, ShotResult};
pub use config::*;
pub use game::{Game, GameEvent, GameOutput, GameStatus, Side, Silent};
pub use placement::{random_board, random_ship, try_place_fleet};
pub use ship::{Orientation, Ship};

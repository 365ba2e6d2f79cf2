// Targeting heuristic for the automated player: random shots at untried cells,
// then the orthogonal neighbors of the last random shot while it keeps hitting.

use alloc::vec::Vec;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::core::{board::Board, common::Dot};

/// All cells of `board` that have not been shot at or revealed, row-major.
pub fn untried_cells(board: &Board) -> Vec<Dot> {
    let size = board.size() as i32;
    (0..size)
        .flat_map(|x| (0..size).map(move |y| Dot::new(x, y)))
        .filter(|&dot| board.is_untried(dot))
        .collect()
}

/// Uniformly random untried cell, or `None` when the board is exhausted.
pub fn random_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Dot> {
    untried_cells(board).choose(rng).copied()
}

/// Orthogonal neighbors of `last` that are on the grid and still untried.
pub fn follow_up_candidates(board: &Board, last: Dot) -> Vec<Dot> {
    last.orthogonal_neighbors()
        .into_iter()
        .filter(|&dot| board.is_untried(dot))
        .collect()
}

/// Uniformly random follow-up shot around `last`, or `None` when every
/// neighbor is already known.
pub fn follow_up_target<R: Rng + ?Sized>(board: &Board, last: Dot, rng: &mut R) -> Option<Dot> {
    follow_up_candidates(board, last).choose(rng).copied()
}

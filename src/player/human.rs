use crate::core::{board::Board, common::Dot};
use rand::rngs::SmallRng;

use super::Player;

/// Source of targets for a human player.
pub trait TargetInput {
    /// Ask for the next target. Coordinates are not bounds-checked here.
    /// Returns `None` once no more input is available.
    fn request_target(&mut self) -> Option<Dot>;
}

impl<F: FnMut() -> Option<Dot>> TargetInput for F {
    fn request_target(&mut self) -> Option<Dot> {
        self()
    }
}

/// Player whose moves come from a [`TargetInput`].
pub struct HumanPlayer<I> {
    input: I,
}

impl<I: TargetInput> HumanPlayer<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: TargetInput> Player for HumanPlayer<I> {
    fn select_target(&mut self, _rng: &mut SmallRng, _enemy: &Board, _follow_up: bool) -> Option<Dot> {
        self.input.request_target()
    }
}

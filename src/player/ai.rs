use crate::core::{ai, board::Board, common::Dot};
use rand::rngs::SmallRng;

use super::Player;

/// Computer opponent: random shots, then the neighbors of the last random shot
/// while the controller signals a follow-up.
#[derive(Debug, Default, Clone)]
pub struct AutomatedPlayer {
    last_target: Option<Dot>,
}

impl AutomatedPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a known shot, as if the last random shot landed on `last`.
    pub fn with_last_target(last: Dot) -> Self {
        Self {
            last_target: Some(last),
        }
    }

    /// Cell of the last random (non-follow-up) shot.
    pub fn last_target(&self) -> Option<Dot> {
        self.last_target
    }

    fn fresh_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> Option<Dot> {
        let target = ai::random_target(enemy, rng)?;
        self.last_target = Some(target);
        Some(target)
    }
}

impl Player for AutomatedPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board, follow_up: bool) -> Option<Dot> {
        if follow_up {
            // Stay anchored on the cell that started the follow-up.
            if let Some(target) = self
                .last_target
                .and_then(|last| ai::follow_up_target(enemy, last, rng))
            {
                return Some(target);
            }
            log::debug!("no follow-up around {:?}, shooting at random", self.last_target);
        }
        self.fresh_target(rng, enemy)
    }
}

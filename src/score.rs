//! Score keeping.

use std::fmt;

use crate::rules::Outcome;

/// Number of rounds won by the player and by the computer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    player: u32,
    computer: u32,
}

impl Score {
    /// The score at the start of a game.
    pub const ZERO: Self = Self {
        player: 0,
        computer: 0,
    };

    #[inline]
    pub fn new(player: u32, computer: u32) -> Self {
        Self { player, computer }
    }

    #[inline]
    pub fn player(&self) -> u32 {
        self.player
    }

    #[inline]
    pub fn computer(&self) -> u32 {
        self.computer
    }

    /// Credits the winner of a round. Ties change nothing.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.player = self.player.saturating_add(1),
            Outcome::Lose => self.computer = self.computer.saturating_add(1),
            Outcome::Tie => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::ZERO;
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.player, self.computer)
    }
}

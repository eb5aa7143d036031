//! Playing rounds and keeping score.

use std::fmt;

use anyhow::Context;

use crate::{
    gesture::{self, Gesture},
    landmark::HandLandmarks,
    opponent::{Opponent, RandomOpponent},
    rules::{self, Outcome},
    score::Score,
    source::{Frame, LandmarkSource},
};

/// A round that was played to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    player: Gesture,
    computer: Gesture,
    outcome: Outcome,
    score: Score,
}

impl Round {
    #[inline]
    pub fn player(&self) -> Gesture {
        self.player
    }

    #[inline]
    pub fn computer(&self) -> Gesture {
        self.computer
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The score after this round.
    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }
}

/// Reason why a round could not be played.
///
/// Rejections are part of normal play: the score is left alone and the player is expected to try
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The landmark source did not find a hand.
    NoHandDetected,
    /// A hand was found, but it does not show rock, paper or scissors.
    AmbiguousGesture,
}

impl Rejection {
    /// Returns the message shown to the player.
    pub fn message(self) -> &'static str {
        match self {
            Rejection::NoHandDetected => "No hand detected! Try again.",
            Rejection::AmbiguousGesture => "Unclear gesture! Try again.",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rejection::NoHandDetected => "no-hand-detected",
            Rejection::AmbiguousGesture => "ambiguous-gesture",
        })
    }
}

/// What happened when a round was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundReport {
    Played(Round),
    Rejected(Rejection),
}

impl RoundReport {
    /// Returns the played [`Round`], or [`None`] if the round was rejected.
    pub fn round(&self) -> Option<&Round> {
        match self {
            RoundReport::Played(round) => Some(round),
            RoundReport::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            RoundReport::Played(_) => None,
            RoundReport::Rejected(rejection) => Some(*rejection),
        }
    }

    /// Returns the message shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            RoundReport::Played(round) => round.outcome.message(),
            RoundReport::Rejected(rejection) => rejection.message(),
        }
    }
}

/// The game state: the score, and the opponent picking the computer's moves.
///
/// One [`Game`] holds one independent score. Nothing is persisted.
pub struct Game<O: Opponent = RandomOpponent> {
    score: Score,
    opponent: O,
}

impl Game<RandomOpponent> {
    /// Creates a game against a randomly playing computer.
    pub fn new() -> Self {
        Self::with_opponent(RandomOpponent::new())
    }
}

impl Default for Game<RandomOpponent> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Opponent> Game<O> {
    pub fn with_opponent(opponent: O) -> Self {
        Self {
            score: Score::ZERO,
            opponent,
        }
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Resets the score to 0:0.
    pub fn reset(&mut self) {
        log::debug!("resetting score (was {})", self.score);
        self.score.reset();
    }

    /// Estimates the player's hand in `frame` and plays a round with it.
    ///
    /// If `source` fails, the error is returned and the score is left unchanged.
    pub fn play_round<L>(&mut self, source: &mut L, frame: &Frame) -> anyhow::Result<RoundReport>
    where
        L: LandmarkSource + ?Sized,
    {
        let hands = source.estimate(frame).with_context(|| {
            format!("failed to estimate hand landmarks in frame {}", frame.index())
        })?;
        Ok(self.play_hands(&hands))
    }

    /// Plays a round using already estimated landmarks.
    ///
    /// Only the first hand in `hands` is considered.
    pub fn play_hands(&mut self, hands: &[HandLandmarks]) -> RoundReport {
        let Some(hand) = hands.first() else {
            log::debug!("round rejected: no hand detected");
            return RoundReport::Rejected(Rejection::NoHandDetected);
        };

        let player = gesture::classify(hand);
        if !player.is_playable() {
            log::debug!("round rejected: ambiguous gesture");
            return RoundReport::Rejected(Rejection::AmbiguousGesture);
        }

        let computer = self.opponent.choose();
        // Opponents only return playable gestures, so this always resolves.
        let Some(outcome) = rules::resolve(player, computer) else {
            log::error!("opponent returned unplayable gesture {computer:?}, rejecting round");
            return RoundReport::Rejected(Rejection::AmbiguousGesture);
        };

        self.score.record(outcome);
        log::debug!("{player} vs {computer}: {outcome} (score {})", self.score);

        RoundReport::Played(Round {
            player,
            computer,
            outcome,
            score: self.score,
        })
    }
}

//! The state shown to the player.

use std::fmt;

use crate::{
    gesture::Gesture,
    live::LiveLabel,
    round::{Rejection, RoundReport},
    rules::Outcome,
    score::Score,
};

/// The result area of the board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ResultLine {
    /// No round has been played since the start or the last reset.
    #[default]
    Prompt,
    Outcome(Outcome),
    Rejected(Rejection),
}

impl ResultLine {
    pub fn message(self) -> &'static str {
        match self {
            ResultLine::Prompt => "Make your move!",
            ResultLine::Outcome(outcome) => outcome.message(),
            ResultLine::Rejected(rejection) => rejection.message(),
        }
    }
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Everything a presentation layer needs to render the game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    live: LiveLabel,
    result: ResultLine,
    computer: Option<Gesture>,
    score: Score,
}

impl Board {
    /// The gesture currently recognized by the live preview.
    pub fn live(&self) -> LiveLabel {
        self.live
    }

    pub fn result(&self) -> ResultLine {
        self.result
    }

    /// The computer's gesture in the last played round, if any.
    pub fn computer(&self) -> Option<Gesture> {
        self.computer
    }

    /// Returns the text describing the computer's move.
    pub fn computer_label(&self) -> &'static str {
        match self.computer {
            Some(gesture) => gesture.label(),
            None => "Waiting...",
        }
    }

    /// Returns the emoji depicting the computer's move, or `?` before the first round.
    pub fn computer_emoji(&self) -> &'static str {
        self.computer.map_or("?", Gesture::emoji)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub(crate) fn set_live(&mut self, live: LiveLabel) {
        self.live = live;
    }

    /// Shows the result of a round.
    ///
    /// Rejected rounds keep the previously revealed computer move.
    pub(crate) fn show(&mut self, report: &RoundReport) {
        match report {
            RoundReport::Played(round) => {
                self.result = ResultLine::Outcome(round.outcome());
                self.computer = Some(round.computer());
                self.score = round.score();
            }
            RoundReport::Rejected(rejection) => self.result = ResultLine::Rejected(*rejection),
        }
    }

    /// Restores the board to its initial state.
    pub(crate) fn reset(&mut self) {
        *self = Board::default();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | computer: {} {} | score {}",
            self.live,
            self.result,
            self.computer_emoji(),
            self.computer_label(),
            self.score
        )
    }
}

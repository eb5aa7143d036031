//! Who beats whom.

use std::fmt;

use crate::gesture::Gesture;

/// The result of a round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Returns the message shown to the player for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win => "You Win!",
            Outcome::Lose => "Computer Wins!",
            Outcome::Tie => "It's a Tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Tie => "tie",
        })
    }
}

impl Gesture {
    /// Returns whether `self` beats `other`.
    ///
    /// Rock beats scissors, scissors beat paper, paper beats rock. [`Gesture::None`] neither beats
    /// nor is beaten by anything.
    pub fn beats(self, other: Gesture) -> bool {
        matches!(
            (self, other),
            (Gesture::Rock, Gesture::Scissors)
                | (Gesture::Scissors, Gesture::Paper)
                | (Gesture::Paper, Gesture::Rock)
        )
    }
}

/// Resolves a round between `player` and `computer`.
///
/// Returns [`None`] if either gesture is [`Gesture::None`], since such a round cannot be decided.
pub fn resolve(player: Gesture, computer: Gesture) -> Option<Outcome> {
    if !player.is_playable() || !computer.is_playable() {
        return None;
    }

    Some(if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::Win
    } else {
        Outcome::Lose
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use Gesture::*;

    #[test]
    fn same_gesture_ties() {
        for g in Gesture::PLAYABLE {
            assert_eq!(resolve(g, g), Some(Outcome::Tie));
        }
    }

    #[test]
    fn beats_relation() {
        for (winner, loser) in [(Rock, Scissors), (Scissors, Paper), (Paper, Rock)] {
            assert_eq!(resolve(winner, loser), Some(Outcome::Win));
            assert_eq!(resolve(loser, winner), Some(Outcome::Lose));
        }
    }

    #[test]
    fn every_pair_is_decided() {
        for a in Gesture::PLAYABLE {
            for b in Gesture::PLAYABLE {
                let forward = resolve(a, b).unwrap();
                let backward = resolve(b, a).unwrap();
                let expected = match forward {
                    Outcome::Win => Outcome::Lose,
                    Outcome::Lose => Outcome::Win,
                    Outcome::Tie => Outcome::Tie,
                };
                assert_eq!(backward, expected, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn none_is_undecidable() {
        for g in [Rock, Paper, Scissors, None] {
            assert_eq!(resolve(None, g), Option::None);
            assert_eq!(resolve(g, None), Option::None);
            assert!(!None.beats(g));
            assert!(!g.beats(None));
        }
    }

    #[test]
    fn messages() {
        assert_eq!(Outcome::Win.message(), "You Win!");
        assert_eq!(Outcome::Lose.message(), "Computer Wins!");
        assert_eq!(Outcome::Tie.message(), "It's a Tie!");
        assert_eq!(Outcome::Lose.to_string(), "lose");
    }
}

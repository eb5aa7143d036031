//! The computer's side of the game.

use crate::gesture::Gesture;

/// Picks the computer's gesture for a round.
///
/// Implementations must only ever return playable gestures (never [`Gesture::None`]).
///
/// Closures returning a [`Gesture`] implement this trait, which is handy for scripting the
/// computer's moves.
pub trait Opponent {
    fn choose(&mut self) -> Gesture;
}

impl<F: FnMut() -> Gesture> Opponent for F {
    fn choose(&mut self) -> Gesture {
        self()
    }
}

/// Picks rock, paper or scissors uniformly at random, independent of earlier rounds.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: fastrand::Rng,
}

impl RandomOpponent {
    /// Creates an opponent seeded from the system's entropy source.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates an opponent with a fixed seed, yielding a reproducible sequence of moves.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self) -> Gesture {
        Gesture::PLAYABLE[self.rng.usize(..Gesture::PLAYABLE.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sequences_repeat() {
        let mut a = RandomOpponent::with_seed(42);
        let mut b = RandomOpponent::with_seed(42);
        for _ in 0..50 {
            assert_eq!(a.choose(), b.choose());
        }
    }

    #[test]
    fn roughly_uniform() {
        const N: usize = 30_000;
        let mut opponent = RandomOpponent::with_seed(0xfeed);
        let mut counts = [0usize; 3];
        for _ in 0..N {
            let gesture = opponent.choose();
            let i = Gesture::PLAYABLE.iter().position(|&g| g == gesture).unwrap();
            counts[i] += 1;
        }
        for count in counts {
            let share = count as f32 / N as f32;
            assert!((share - 1.0 / 3.0).abs() < 0.02, "{counts:?}");
        }
    }

    #[test]
    fn closures_are_opponents() {
        let mut moves = [Gesture::Paper, Gesture::Rock].into_iter().cycle();
        let mut opponent = move || moves.next().unwrap();
        assert_eq!(opponent.choose(), Gesture::Paper);
        assert_eq!(opponent.choose(), Gesture::Rock);
        assert_eq!(opponent.choose(), Gesture::Paper);
    }
}

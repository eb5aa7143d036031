//! Hand gesture classification.

use std::fmt;

use crate::landmark::{Finger, HandLandmarks, LandmarkIdx};

/// A classified hand shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    /// The hand shape does not match any playable gesture.
    None,
}

impl Gesture {
    /// The gestures a round can be played with.
    pub const PLAYABLE: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    #[inline]
    pub fn is_playable(self) -> bool {
        self != Gesture::None
    }

    /// Returns the capitalized name of this gesture.
    pub fn label(self) -> &'static str {
        match self {
            Gesture::Rock => "Rock",
            Gesture::Paper => "Paper",
            Gesture::Scissors => "Scissors",
            Gesture::None => "None",
        }
    }

    /// Returns an emoji depicting this gesture, or `?` for [`Gesture::None`].
    pub fn emoji(self) -> &'static str {
        match self {
            Gesture::Rock => "✊",
            Gesture::Paper => "✋",
            Gesture::Scissors => "✌️",
            Gesture::None => "?",
        }
    }

    /// Returns a synthetic, upright hand showing this gesture.
    ///
    /// Returns [`None`] for [`Gesture::None`], since there are many hand shapes that classify as
    /// such.
    pub fn pose(self) -> Option<HandLandmarks> {
        let states = match self {
            Gesture::Rock => FingerStates::default(),
            Gesture::Paper => FingerStates::all(),
            Gesture::Scissors => FingerStates {
                index: true,
                middle: true,
                ..FingerStates::default()
            },
            Gesture::None => return None,
        };
        Some(states.pose())
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which fingers of a hand are extended.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FingerStates {
    /// Computed like the other fingers, but not used by [`FingerStates::gesture`].
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    /// All five fingers extended.
    pub fn all() -> Self {
        Self {
            thumb: true,
            index: true,
            middle: true,
            ring: true,
            pinky: true,
        }
    }

    /// Computes the extension state of every finger of `hand`.
    pub fn of(hand: &HandLandmarks) -> Self {
        Self {
            thumb: Finger::Thumb.is_extended(hand),
            index: Finger::Index.is_extended(hand),
            middle: Finger::Middle.is_extended(hand),
            ring: Finger::Ring.is_extended(hand),
            pinky: Finger::Pinky.is_extended(hand),
        }
    }

    pub fn get(&self, finger: Finger) -> bool {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }

    pub fn set(&mut self, finger: Finger, extended: bool) {
        match finger {
            Finger::Thumb => self.thumb = extended,
            Finger::Index => self.index = extended,
            Finger::Middle => self.middle = extended,
            Finger::Ring => self.ring = extended,
            Finger::Pinky => self.pinky = extended,
        }
    }

    /// Maps the four non-thumb fingers to a [`Gesture`].
    pub fn gesture(&self) -> Gesture {
        match (self.index, self.middle, self.ring, self.pinky) {
            (false, false, false, false) => Gesture::Rock,
            (true, true, true, true) => Gesture::Paper,
            (true, true, false, false) => Gesture::Scissors,
            _ => Gesture::None,
        }
    }

    /// Builds an upright hand whose fingers match `self`.
    ///
    /// Extended fingers point straight up; curled fingers fold their tip back down below the
    /// middle joint.
    pub fn pose(&self) -> HandLandmarks {
        const BASE_Y: f32 = 0.6;
        const WRIST_Y: f32 = 0.9;

        let mut hand = HandLandmarks::new([[0.0; 3]; HandLandmarks::NUM_LANDMARKS]);
        hand.set_position(LandmarkIdx::Wrist, [0.5, WRIST_Y, 0.0]);
        for (i, finger) in Finger::ALL.into_iter().enumerate() {
            let x = 0.3 + 0.1 * i as f32;
            let (base, middle, tip) = finger.joints();
            let (middle_y, tip_y) = if self.get(finger) {
                (0.45, 0.3)
            } else {
                (0.5, 0.65)
            };
            hand.set_position(base, [x, BASE_Y, 0.0]);
            hand.set_position(middle, [x, middle_y, 0.0]);
            hand.set_position(tip, [x, tip_y, 0.0]);
        }

        // Remaining joints sit between their neighbors.
        for (between, below, above) in [
            (LandmarkIdx::ThumbIp, LandmarkIdx::ThumbMcp, LandmarkIdx::ThumbTip),
            (
                LandmarkIdx::IndexFingerDip,
                LandmarkIdx::IndexFingerPip,
                LandmarkIdx::IndexFingerTip,
            ),
            (
                LandmarkIdx::MiddleFingerDip,
                LandmarkIdx::MiddleFingerPip,
                LandmarkIdx::MiddleFingerTip,
            ),
            (
                LandmarkIdx::RingFingerDip,
                LandmarkIdx::RingFingerPip,
                LandmarkIdx::RingFingerTip,
            ),
            (LandmarkIdx::PinkyDip, LandmarkIdx::PinkyPip, LandmarkIdx::PinkyTip),
        ] {
            let [ax, ay, az] = hand.position(below);
            let [bx, by, bz] = hand.position(above);
            hand.set_position(
                between,
                [(ax + bx) / 2.0, (ay + by) / 2.0, (az + bz) / 2.0],
            );
        }

        hand
    }
}

/// Classifies the gesture shown by `hand`.
///
/// Only the index, middle, ring and pinky fingers are considered:
///
/// | extended fingers            | gesture               |
/// |-----------------------------|-----------------------|
/// | none                        | [`Gesture::Rock`]     |
/// | all four                    | [`Gesture::Paper`]    |
/// | index and middle            | [`Gesture::Scissors`] |
/// | anything else               | [`Gesture::None`]     |
pub fn classify(hand: &HandLandmarks) -> Gesture {
    FingerStates::of(hand).gesture()
}

//! Hand landmarks, as produced by a hand-pose estimation model.

use std::fmt;

/// Position of a single landmark: `[x, y, z]` in image space.
pub type Position = [f32; 3];

/// The 21 landmarks of a single hand.
///
/// Landmarks are indexed by [`LandmarkIdx`]. The collection always has exactly
/// [`HandLandmarks::NUM_LANDMARKS`] entries, so every index is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    positions: [Position; HandLandmarks::NUM_LANDMARKS],
}

impl HandLandmarks {
    pub const NUM_LANDMARKS: usize = 21;

    #[inline]
    pub fn new(positions: [Position; Self::NUM_LANDMARKS]) -> Self {
        Self { positions }
    }

    /// Creates a landmark set from a slice of 3D positions.
    ///
    /// Returns an error if `positions` does not contain exactly [`Self::NUM_LANDMARKS`] entries.
    pub fn from_positions(positions: &[Position]) -> Result<Self, LandmarkCountError> {
        let positions = positions.try_into().map_err(|_| LandmarkCountError {
            found: positions.len(),
        })?;
        Ok(Self { positions })
    }

    /// Creates a landmark set from 2D points, setting all Z coordinates to `0.0`.
    pub fn from_points(points: &[[f32; 2]]) -> Result<Self, LandmarkCountError> {
        if points.len() != Self::NUM_LANDMARKS {
            return Err(LandmarkCountError {
                found: points.len(),
            });
        }

        let mut positions = [[0.0; 3]; Self::NUM_LANDMARKS];
        for (out, &[x, y]) in positions.iter_mut().zip(points) {
            *out = [x, y, 0.0];
        }
        Ok(Self { positions })
    }

    #[inline]
    pub fn positions(&self) -> &[Position; Self::NUM_LANDMARKS] {
        &self.positions
    }

    #[inline]
    pub fn position(&self, idx: LandmarkIdx) -> Position {
        self.positions[idx as usize]
    }

    #[inline]
    pub fn set_position(&mut self, idx: LandmarkIdx, pos: Position) {
        self.positions[idx as usize] = pos;
    }

    /// Returns the vertical image coordinate of a landmark.
    #[inline]
    pub fn y(&self, idx: LandmarkIdx) -> f32 {
        self.positions[idx as usize][1]
    }
}

impl From<[Position; HandLandmarks::NUM_LANDMARKS]> for HandLandmarks {
    #[inline]
    fn from(positions: [Position; HandLandmarks::NUM_LANDMARKS]) -> Self {
        Self::new(positions)
    }
}

/// Error returned when building [`HandLandmarks`] from the wrong number of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkCountError {
    found: usize,
}

impl LandmarkCountError {
    /// The number of points that was passed in.
    pub fn found(&self) -> usize {
        self.found
    }
}

impl fmt::Display for LandmarkCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} hand landmarks, got {}",
            HandLandmarks::NUM_LANDMARKS,
            self.found
        )
    }
}

impl std::error::Error for LandmarkCountError {}

/// Names for the hand pose landmarks.
///
/// # Terminology
///
/// - **CMC**: Carpometacarpal joint, the lowest joint of the thumb, located near the wrist.
/// - **MCP**: Metacarpophalangeal joint, the lower joint forming the knuckles near the palm.
/// - **IP**/**PIP**: (Proximal) Interphalangeal joint, the joint above the MCP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: placed on the tip of the finger, above the DIP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// The five fingers of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Returns the `(base, middle, tip)` landmarks used to decide whether the finger is extended.
    pub fn joints(self) -> (LandmarkIdx, LandmarkIdx, LandmarkIdx) {
        use LandmarkIdx::*;
        match self {
            Finger::Thumb => (ThumbCmc, ThumbMcp, ThumbTip),
            Finger::Index => (IndexFingerMcp, IndexFingerPip, IndexFingerTip),
            Finger::Middle => (MiddleFingerMcp, MiddleFingerPip, MiddleFingerTip),
            Finger::Ring => (RingFingerMcp, RingFingerPip, RingFingerTip),
            Finger::Pinky => (PinkyMcp, PinkyPip, PinkyTip),
        }
    }

    /// Returns whether this finger points upwards in `hand`.
    ///
    /// A finger is extended when its tip is strictly above the middle joint, which is in turn
    /// strictly above the base joint.
    pub fn is_extended(self, hand: &HandLandmarks) -> bool {
        let (base, middle, tip) = self.joints();
        hand.y(tip) < hand.y(middle) && hand.y(middle) < hand.y(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_model_layout() {
        assert_eq!(LandmarkIdx::Wrist as usize, 0);
        assert_eq!(LandmarkIdx::ThumbTip as usize, 4);
        assert_eq!(LandmarkIdx::IndexFingerTip as usize, 8);
        assert_eq!(LandmarkIdx::MiddleFingerTip as usize, 12);
        assert_eq!(LandmarkIdx::RingFingerTip as usize, 16);
        assert_eq!(LandmarkIdx::PinkyTip as usize, 20);
    }

    #[test]
    fn finger_joints() {
        let idx = |f: Finger| {
            let (a, b, c) = f.joints();
            (a as usize, b as usize, c as usize)
        };
        assert_eq!(idx(Finger::Thumb), (1, 2, 4));
        assert_eq!(idx(Finger::Index), (5, 6, 8));
        assert_eq!(idx(Finger::Middle), (9, 10, 12));
        assert_eq!(idx(Finger::Ring), (13, 14, 16));
        assert_eq!(idx(Finger::Pinky), (17, 18, 20));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = HandLandmarks::from_positions(&[[0.0; 3]; 20]).unwrap_err();
        assert_eq!(err.found(), 20);
        assert_eq!(err.to_string(), "expected 21 hand landmarks, got 20");

        HandLandmarks::from_points(&[[0.0; 2]; 22]).unwrap_err();
        HandLandmarks::from_positions(&[[0.0; 3]; 21]).unwrap();
    }

    #[test]
    fn points_get_zero_depth() {
        let points: Vec<[f32; 2]> = (0..21).map(|i| [i as f32, 2.0 * i as f32]).collect();
        let hand = HandLandmarks::from_points(&points).unwrap();
        assert_eq!(hand.position(LandmarkIdx::PinkyTip), [20.0, 40.0, 0.0]);
        assert_eq!(hand.y(LandmarkIdx::ThumbCmc), 2.0);
    }

    #[test]
    fn extension_requires_strict_chain() {
        let mut hand = HandLandmarks::new([[0.0; 3]; 21]);
        hand.set_position(LandmarkIdx::IndexFingerMcp, [0.0, 0.6, 0.0]);
        hand.set_position(LandmarkIdx::IndexFingerPip, [0.0, 0.5, 0.0]);
        hand.set_position(LandmarkIdx::IndexFingerTip, [0.0, 0.4, 0.0]);
        assert!(Finger::Index.is_extended(&hand));

        // Tip level with the middle joint is not extended.
        hand.set_position(LandmarkIdx::IndexFingerTip, [0.0, 0.5, 0.0]);
        assert!(!Finger::Index.is_extended(&hand));

        // Tip above, but middle joint below the base.
        hand.set_position(LandmarkIdx::IndexFingerTip, [0.0, 0.3, 0.0]);
        hand.set_position(LandmarkIdx::IndexFingerPip, [0.0, 0.7, 0.0]);
        assert!(!Finger::Index.is_extended(&hand));
    }
}

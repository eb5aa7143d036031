use crate::{
    gesture::FingerStates,
    landmark::{Finger, HandLandmarks, LandmarkIdx},
};

/// An upright hand with exactly the given fingers extended.
pub fn hand_with(extended: &[Finger]) -> HandLandmarks {
    let mut states = FingerStates::default();
    for &finger in extended {
        states.set(finger, true);
    }
    states.pose()
}

/// A hand with the finger states in `states`, but jittered joint positions.
///
/// Curled fingers pick one of several shapes that all fail the extension test.
pub fn wavy_hand(rng: &mut fastrand::Rng, states: &FingerStates) -> HandLandmarks {
    let mut gap = || 0.01 + rng.f32() * 0.2;
    let mut hand = HandLandmarks::new([[0.0; 3]; HandLandmarks::NUM_LANDMARKS]);
    hand.set_position(LandmarkIdx::Wrist, [0.5, 0.95, 0.0]);

    for (i, finger) in Finger::ALL.into_iter().enumerate() {
        let x = 0.2 + 0.15 * i as f32;
        let (base, middle, tip) = finger.joints();
        let base_y = 0.6 + gap() * 0.5;
        let (middle_y, tip_y) = if states.get(finger) {
            let middle_y = base_y - gap();
            (middle_y, middle_y - gap())
        } else {
            let shape = (gap() * 100.0) as u32 % 3;
            match shape {
                // Knuckle bent, tip folded back down.
                0 => {
                    let middle_y = base_y - gap();
                    (middle_y, middle_y + gap())
                }
                // Whole finger pointing down.
                1 => {
                    let middle_y = base_y + gap();
                    (middle_y, middle_y - gap())
                }
                // Tip level with the middle joint.
                _ => {
                    let middle_y = base_y - gap();
                    (middle_y, middle_y)
                }
            }
        };
        hand.set_position(base, [x, base_y, 0.0]);
        hand.set_position(middle, [x, middle_y, 0.0]);
        hand.set_position(tip, [x, tip_y, 0.0]);
    }

    hand
}

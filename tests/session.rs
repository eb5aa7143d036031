use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use rochambeau::{
    config::SessionOptions,
    gesture::{FingerStates, Gesture},
    landmark::HandLandmarks,
    live::LiveLabel,
    opponent::Opponent,
    round::{Rejection, RoundReport},
    rules::Outcome,
    score::Score,
    session::{Session, SessionError},
    source::{CameraOptions, Frame, LandmarkSource, VideoSource},
};

/// A camera whose frames each "show" one scripted hand (or none).
///
/// The hand is smuggled to the model through the frame's pixel data: one byte per frame, an index
/// into `HANDS`, or `0xff` for an empty frame.
struct ScriptedCamera {
    frames: VecDeque<u8>,
    next: u64,
}

const NO_HAND: u8 = 0xff;

fn hands() -> [HandLandmarks; 4] {
    [
        Gesture::Rock.pose().unwrap(),
        Gesture::Paper.pose().unwrap(),
        Gesture::Scissors.pose().unwrap(),
        // Thumb and pinky: not a playable gesture.
        FingerStates {
            thumb: true,
            pinky: true,
            ..FingerStates::default()
        }
        .pose(),
    ]
}

const ROCK: u8 = 0;
const PAPER: u8 = 1;
const SCISSORS: u8 = 2;
const SHAKA: u8 = 3;

impl ScriptedCamera {
    fn new(frames: &[u8]) -> Self {
        Self {
            frames: frames.iter().copied().collect(),
            next: 0,
        }
    }
}

impl VideoSource for ScriptedCamera {
    fn read(&mut self) -> anyhow::Result<Option<Frame>> {
        let Some(code) = self.frames.pop_front() else {
            return Ok(None);
        };
        let frame = Frame::new(self.next, 1, 1, vec![code]);
        self.next += 1;
        Ok(Some(frame))
    }
}

struct ScriptedModel;

impl LandmarkSource for ScriptedModel {
    fn estimate(&mut self, frame: &Frame) -> anyhow::Result<Vec<HandLandmarks>> {
        let code = frame.data()[0];
        if code == NO_HAND {
            return Ok(Vec::new());
        }
        Ok(vec![hands()[usize::from(code)]])
    }
}

fn options() -> SessionOptions {
    SessionOptions::default().reveal_delay(Duration::ZERO)
}

fn start<O: Opponent>(
    session: &mut Session<ScriptedModel, ScriptedCamera, O>,
    frames: &[u8],
) {
    let camera = ScriptedCamera::new(frames);
    session
        .start(|_: &CameraOptions| Ok(camera), || Ok(ScriptedModel))
        .unwrap();
}

#[test]
fn fist_against_paper() {
    let mut session = Session::with_opponent(options(), || Gesture::Paper);
    start(&mut session, &[ROCK]);
    assert_eq!(session.score(), Score::ZERO);

    let report = session.play_round().unwrap();
    let round = report.round().unwrap();
    assert_eq!(round.player(), Gesture::Rock);
    assert_eq!(round.computer(), Gesture::Paper);
    assert_eq!(round.outcome(), Outcome::Lose);
    assert_eq!(session.score(), Score::new(0, 1));
}

#[test]
fn a_full_game() {
    let mut computer = [Gesture::Scissors, Gesture::Scissors, Gesture::Rock].into_iter();
    let mut session = Session::with_opponent(options(), move || computer.next().unwrap());
    start(&mut session, &[ROCK, NO_HAND, SHAKA, SCISSORS, PAPER]);

    let mut results = Vec::new();
    while session.pump().unwrap() {
        let before = session.score();
        let report = session.play_round().unwrap();
        if report.rejection().is_some() {
            assert_eq!(session.score(), before);
        }
        results.push(report.round().map(|r| r.outcome()).ok_or(report.rejection()));
    }
    assert!(session.is_halted());

    assert_eq!(
        results,
        [
            Ok(Outcome::Win),
            Err(Some(Rejection::NoHandDetected)),
            Err(Some(Rejection::AmbiguousGesture)),
            Ok(Outcome::Tie),
            Ok(Outcome::Win),
        ]
    );
    assert_eq!(session.score(), Score::new(2, 0));

    session.reset();
    assert_eq!(session.score(), Score::ZERO);
    assert_eq!(session.board().result().to_string(), "Make your move!");
}

#[test]
fn live_label_tracks_camera() {
    let mut session = Session::with_opponent(options(), || Gesture::Rock);
    start(&mut session, &[NO_HAND, SCISSORS]);
    assert_eq!(session.board().live(), LiveLabel::Waiting);

    assert!(session.pump().unwrap());
    assert!(session.pump().unwrap());
    assert!(!session.pump().unwrap());

    // The preview has been joined, so both frames are processed.
    assert_eq!(session.board().live(), LiveLabel::Gesture(Gesture::Scissors));
    assert_eq!(session.score(), Score::ZERO);
}

#[test]
fn controls_follow_state() {
    let mut session = Session::with_opponent(options(), || Gesture::Rock);
    let err = session.play_round().unwrap_err();
    assert_eq!(err.downcast_ref(), Some(&SessionError::NotStarted));

    start(&mut session, &[PAPER]);
    let err = session
        .start(
            |_: &CameraOptions| Ok(ScriptedCamera::new(&[])),
            || Ok(ScriptedModel),
        )
        .unwrap_err();
    assert_eq!(err.downcast_ref(), Some(&SessionError::AlreadyStarted));

    session.play_round().unwrap();
    assert!(!session.pump().unwrap());
    let err = session.play_round().unwrap_err();
    assert_eq!(err.downcast_ref(), Some(&SessionError::Halted));
    assert_eq!(session.score(), Score::new(1, 0));
}

#[test]
fn reveal_delay_applies_to_played_rounds() {
    let delay = Duration::from_millis(50);
    let mut session = Session::with_opponent(options().reveal_delay(delay), || Gesture::Rock);
    start(&mut session, &[NO_HAND, ROCK]);

    session.pump().unwrap();
    let report = session.play_round().unwrap();
    assert_eq!(report, RoundReport::Rejected(Rejection::NoHandDetected));

    session.pump().unwrap();
    let t0 = Instant::now();
    let report = session.play_round().unwrap();
    assert!(t0.elapsed() >= delay);
    assert_eq!(report.round().unwrap().outcome(), Outcome::Tie);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let frames = [ROCK; 30];
    let play = |seed| {
        let mut session = Session::new(options().seed(seed));
        start(&mut session, &frames);
        let mut computer = Vec::new();
        while session.pump().unwrap() {
            let report = session.play_round().unwrap();
            computer.push(report.round().unwrap().computer());
        }
        (computer, session.score())
    };

    let (a, score_a) = play(1234);
    let (b, score_b) = play(1234);
    assert_eq!(a, b);
    assert_eq!(score_a, score_b);
    assert!(a.iter().all(|g| g.is_playable()));
    assert!(score_a.player() + score_a.computer() <= 30);
}

//! Plays a few rounds against the computer with a fake camera and model.
//!
//! The "camera" shows a hand that slowly cycles through rock, an unclear gesture, paper, nothing
//! at all, and scissors. A round is played every 30 frames.

use std::{thread, time::Duration};

use rochambeau::{
    config::SessionOptions,
    gesture::{FingerStates, Gesture},
    landmark::HandLandmarks,
    session::Session,
    source::{CameraOptions, Frame, LandmarkSource, VideoSource},
};

const FRAMES: u64 = 300;
const FRAMES_PER_POSE: u64 = 30;
const FRAME_TIME: Duration = Duration::from_millis(1000 / 60);

struct FakeCamera {
    next: u64,
    width: u32,
    height: u32,
}

impl VideoSource for FakeCamera {
    fn read(&mut self) -> anyhow::Result<Option<Frame>> {
        if self.next == FRAMES {
            return Ok(None);
        }
        thread::sleep(FRAME_TIME);
        let frame = Frame::empty(self.next, self.width, self.height);
        self.next += 1;
        Ok(Some(frame))
    }
}

/// Pretends to see the pose scheduled for the frame's index.
struct FakeModel {
    poses: Vec<Option<HandLandmarks>>,
}

impl LandmarkSource for FakeModel {
    fn estimate(&mut self, frame: &Frame) -> anyhow::Result<Vec<HandLandmarks>> {
        let pose = (frame.index() / FRAMES_PER_POSE) as usize % self.poses.len();
        Ok(self.poses[pose].into_iter().collect())
    }
}

fn main() -> anyhow::Result<()> {
    rochambeau::init_logger!();

    let pointing = FingerStates {
        index: true,
        ..FingerStates::default()
    };
    let poses = vec![
        Gesture::Rock.pose(),
        Some(pointing.pose()),
        Gesture::Paper.pose(),
        None,
        Gesture::Scissors.pose(),
    ];

    let options = SessionOptions::default().reveal_delay(Duration::from_millis(300));
    let mut session = Session::new(options);
    session.start(
        |opts: &CameraOptions| {
            Ok(FakeCamera {
                next: 0,
                width: opts.width(),
                height: opts.height(),
            })
        },
        || Ok(FakeModel { poses }),
    )?;

    let mut frame = 0;
    while session.pump()? {
        frame += 1;
        if frame % FRAMES_PER_POSE == FRAMES_PER_POSE / 2 {
            let report = session.play_round()?;
            log::info!("{}", report.message());
            log::info!("{}", session.board());
        }
    }

    log::info!("final score: {}", session.score());
    Ok(())
}

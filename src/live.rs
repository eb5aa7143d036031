//! Live gesture preview.
//!
//! While the camera is running, every frame is classified on a background worker so the player
//! can see which gesture is recognized before playing a round. The preview never touches the
//! score.

use std::{
    fmt, io,
    sync::{Arc, Mutex},
};

use pawawwewism::Worker;

use crate::{
    gesture::{self, Gesture},
    source::{Frame, LandmarkSource},
    timer::{FpsCounter, Timer},
};

/// The most recent result of the live preview.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LiveLabel {
    /// No frame has been classified yet.
    #[default]
    Waiting,
    NoHand,
    Gesture(Gesture),
}

impl fmt::Display for LiveLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiveLabel::Waiting => f.write_str("Waiting for gesture..."),
            LiveLabel::NoHand => f.write_str("No hand detected"),
            LiveLabel::Gesture(gesture) => fmt::Display::fmt(gesture, f),
        }
    }
}

#[derive(Default)]
struct Shared {
    label: LiveLabel,
    /// Bumped by [`LiveFeed::clear`]. Results for frames submitted earlier are discarded.
    generation: u64,
    /// Set when estimation failed; no further frames are processed.
    failed: bool,
}

/// A running live preview.
///
/// Frames are handed over with [`LiveFeed::submit`], typically once per camera frame. The feed
/// runs until [`LiveFeed::stop`] is called or it is dropped; a failing [`LandmarkSource`] stops it
/// early.
pub struct LiveFeed {
    worker: Option<Worker<(u64, Frame)>>,
    shared: Arc<Mutex<Shared>>,
}

impl LiveFeed {
    /// Spawns the preview worker, estimating landmarks with `source`.
    pub fn start<L>(source: Arc<Mutex<L>>) -> io::Result<Self>
    where
        L: LandmarkSource + Send + 'static,
    {
        let shared = Arc::new(Mutex::new(Shared::default()));
        let worker_shared = shared.clone();
        let mut fps = FpsCounter::new("live preview");
        let t_estimate = Timer::new("estimate");

        let worker = Worker::builder()
            .name("live preview")
            .spawn(move |(generation, frame): (u64, Frame)| {
                if worker_shared.lock().unwrap().failed {
                    return;
                }

                let result = t_estimate.time(|| match source.lock() {
                    Ok(mut source) => source.estimate(&frame),
                    Err(_) => Err(anyhow::anyhow!("hand pose model panicked")),
                });
                let label = match result {
                    Ok(hands) => match hands.first() {
                        Some(hand) => LiveLabel::Gesture(gesture::classify(hand)),
                        None => LiveLabel::NoHand,
                    },
                    Err(e) => {
                        log::error!(
                            "live preview failed on frame {}, stopping: {e:#}",
                            frame.index()
                        );
                        worker_shared.lock().unwrap().failed = true;
                        return;
                    }
                };

                log::trace!("frame {}: {label}", frame.index());
                let mut shared = worker_shared.lock().unwrap();
                if shared.generation == generation {
                    shared.label = label;
                }
                drop(shared);
                fps.tick_with([&t_estimate]);
            })?;

        log::debug!("live preview started");
        Ok(Self {
            worker: Some(worker),
            shared,
        })
    }

    /// Hands a new frame to the preview worker.
    ///
    /// Blocks until the worker has finished processing the previous frame. Does nothing once the
    /// feed has stopped.
    pub fn submit(&mut self, frame: Frame) {
        if !self.is_running() {
            return;
        }
        let generation = self.shared.lock().unwrap().generation;
        if let Some(worker) = &mut self.worker {
            worker.send((generation, frame));
        }
    }

    /// Puts the label back to [`LiveLabel::Waiting`].
    ///
    /// Frames submitted before this call no longer affect the label, even if the worker is still
    /// processing them.
    pub fn clear(&mut self) {
        let mut shared = self.shared.lock().unwrap();
        shared.generation += 1;
        shared.label = LiveLabel::Waiting;
    }

    /// Returns the label computed for the most recently processed frame.
    pub fn label(&self) -> LiveLabel {
        self.shared.lock().unwrap().label
    }

    /// Returns whether the feed still accepts frames.
    pub fn is_running(&self) -> bool {
        self.worker.is_some() && !self.shared.lock().unwrap().failed
    }

    /// Stops the preview, waiting for the frame in progress to finish.
    ///
    /// The last computed label stays available through [`LiveFeed::label`].
    pub fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            drop(worker);
            log::debug!("live preview stopped");
        }
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        self.stop();
    }
}

//! A game session: camera, model, live preview and score, driven by the player's controls.
//!
//! A [`Session`] exposes the three controls of the game: [`Session::start`] opens the camera and
//! loads the hand-pose model, [`Session::play_round`] plays one round against the computer, and
//! [`Session::reset`] zeroes the score. The application calls [`Session::pump`] once per camera
//! frame to keep the live preview going, and renders [`Session::board`].

use std::{
    fmt,
    sync::{Arc, Mutex},
    thread,
};

use anyhow::Context;

use crate::{
    board::Board,
    config::SessionOptions,
    live::LiveFeed,
    opponent::{Opponent, RandomOpponent},
    round::{Game, RoundReport},
    score::Score,
    source::{CameraOptions, Frame, LandmarkSource, VideoSource},
};

/// A control was used while it is not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A round was requested before the camera was started.
    NotStarted,
    /// [`Session::start`] was called while the session is already running.
    AlreadyStarted,
    /// The video stream has ended or failed. The session needs to be started again.
    Halted,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionError::NotStarted => "Please start the camera first!",
            SessionError::AlreadyStarted => "the camera is already running",
            SessionError::Halted => "the video stream has ended",
        })
    }
}

impl std::error::Error for SessionError {}

enum State<L, V> {
    Idle,
    Running(Running<L, V>),
    Halted,
}

struct Running<L, V> {
    video: V,
    model: Arc<Mutex<L>>,
    live: LiveFeed,
    /// The most recent camera frame.
    frame: Option<Frame>,
}

/// A single player's game session.
///
/// `L` is the hand-pose model, `V` the camera, and `O` picks the computer's moves.
pub struct Session<L, V, O: Opponent = RandomOpponent> {
    options: SessionOptions,
    game: Game<O>,
    board: Board,
    state: State<L, V>,
}

impl<L, V> Session<L, V, RandomOpponent>
where
    L: LandmarkSource + Send + 'static,
    V: VideoSource,
{
    /// Creates a session against a randomly playing computer.
    ///
    /// Environment variable overrides are applied to `options` here.
    pub fn new(options: SessionOptions) -> Self {
        let options = options.apply_env();
        let opponent = match options.seed {
            Some(seed) => RandomOpponent::with_seed(seed),
            None => RandomOpponent::new(),
        };
        Self::create(options, opponent)
    }
}

impl<L, V, O> Session<L, V, O>
where
    L: LandmarkSource + Send + 'static,
    V: VideoSource,
    O: Opponent,
{
    /// Creates a session in which `opponent` picks the computer's moves.
    ///
    /// Environment variable overrides are applied to `options` here. The seed is not used.
    pub fn with_opponent(options: SessionOptions, opponent: O) -> Self {
        Self::create(options.apply_env(), opponent)
    }

    fn create(options: SessionOptions, opponent: O) -> Self {
        Self {
            options,
            game: Game::with_opponent(opponent),
            board: Board::default(),
            state: State::Idle,
        }
    }

    /// Opens the camera, loads the model, and starts the live preview.
    ///
    /// `open_camera` receives the configured [`CameraOptions`]. If either closure fails, the error
    /// is returned and the session stays stopped; calling `start` again retries from scratch.
    pub fn start<C, M>(&mut self, open_camera: C, load_model: M) -> anyhow::Result<()>
    where
        C: FnOnce(&CameraOptions) -> anyhow::Result<V>,
        M: FnOnce() -> anyhow::Result<L>,
    {
        if let State::Running(_) = self.state {
            return Err(SessionError::AlreadyStarted.into());
        }

        log::info!("starting camera");
        let running =
            Self::acquire(&self.options.camera, open_camera, load_model).map_err(|e| {
                log::error!("failed to start session: {e:#}");
                e
            })?;
        self.state = State::Running(running);
        log::info!("session started");
        Ok(())
    }

    fn acquire<C, M>(
        camera: &CameraOptions,
        open_camera: C,
        load_model: M,
    ) -> anyhow::Result<Running<L, V>>
    where
        C: FnOnce(&CameraOptions) -> anyhow::Result<V>,
        M: FnOnce() -> anyhow::Result<L>,
    {
        let video = open_camera(camera).context("failed to open camera")?;
        let model = load_model().context("failed to load hand pose model")?;
        log::debug!("hand pose model loaded");

        let model = Arc::new(Mutex::new(model));
        let live = LiveFeed::start(model.clone()).context("failed to start live preview")?;
        Ok(Running {
            video,
            model,
            live,
            frame: None,
        })
    }

    /// Reads the next camera frame and hands it to the live preview.
    ///
    /// Returns `Ok(false)` when the video stream has ended. Both the end of the stream and a
    /// camera error stop the live preview and halt the session.
    pub fn pump(&mut self) -> anyhow::Result<bool> {
        let running = self.running_mut()?;
        match running.video.read() {
            Ok(Some(frame)) => {
                running.frame = Some(frame.clone());
                running.live.submit(frame);
                Ok(true)
            }
            Ok(None) => {
                log::info!("video stream ended");
                self.halt();
                Ok(false)
            }
            Err(e) => {
                log::error!("camera failed: {e:#}");
                self.halt();
                Err(e.context("failed to read camera frame"))
            }
        }
    }

    /// Plays one round with the player's hand in the current camera frame.
    ///
    /// If no frame has been read yet, one is read first. Rejected rounds (no hand, unclear
    /// gesture) are returned as [`RoundReport::Rejected`] and leave the score alone.
    ///
    /// When a round is played, the configured reveal delay elapses before the board is updated.
    pub fn play_round(&mut self) -> anyhow::Result<RoundReport> {
        if self.running_mut()?.frame.is_none() && !self.pump()? {
            return Err(SessionError::Halted.into());
        }

        let (model, frame) = match &self.state {
            State::Running(Running {
                model,
                frame: Some(frame),
                ..
            }) => (model.clone(), frame.clone()),
            _ => return Err(SessionError::Halted.into()),
        };
        let mut source = model
            .lock()
            .map_err(|_| anyhow::anyhow!("hand pose model panicked"))?;
        let report = self.game.play_round(&mut *source, &frame)?;
        drop(source);

        if let RoundReport::Played(round) = &report {
            log::debug!("computer chose {}", round.computer());
            let delay = self.options.reveal_delay;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        self.board.show(&report);
        Ok(report)
    }

    /// Resets the score and the board, including the live label.
    ///
    /// Available in every state.
    pub fn reset(&mut self) {
        self.game.reset();
        self.board.reset();
        if let State::Running(running) = &mut self.state {
            running.live.clear();
        }
    }

    /// Stops the live preview and releases camera and model.
    ///
    /// The score is kept. The session can be started again.
    pub fn stop(&mut self) {
        if let State::Running(running) = &mut self.state {
            running.live.stop();
            self.board.set_live(running.live.label());
            self.state = State::Idle;
            log::info!("session stopped");
        }
    }

    /// Returns whether the camera is running.
    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running(_))
    }

    /// Returns whether the video stream has ended or failed.
    pub fn is_halted(&self) -> bool {
        matches!(self.state, State::Halted)
    }

    pub fn score(&self) -> Score {
        self.game.score()
    }

    /// Returns a snapshot of everything the player should see.
    pub fn board(&self) -> Board {
        let mut board = self.board;
        if let State::Running(running) = &self.state {
            board.set_live(running.live.label());
        }
        board
    }

    fn running_mut(&mut self) -> Result<&mut Running<L, V>, SessionError> {
        match &mut self.state {
            State::Running(running) => Ok(running),
            State::Idle => Err(SessionError::NotStarted),
            State::Halted => Err(SessionError::Halted),
        }
    }

    fn halt(&mut self) {
        if let State::Running(running) = &mut self.state {
            running.live.stop();
            self.board.set_live(running.live.label());
        }
        self.state = State::Halted;
    }
}

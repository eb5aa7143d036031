//! The camera and the hand-pose model, as seen by the game.
//!
//! Neither is implemented here: a [`VideoSource`] produces frames, and a [`LandmarkSource`] turns
//! a frame into zero or more sets of [`HandLandmarks`].

use std::sync::Arc;

use crate::landmark::HandLandmarks;

/// A single camera frame.
///
/// Pixel data is reference-counted, so cloning a [`Frame`] is cheap. The game never inspects the
/// pixels, it only hands them to the [`LandmarkSource`].
#[derive(Debug, Clone)]
pub struct Frame {
    index: u64,
    width: u32,
    height: u32,
    data: Arc<[u8]>,
}

impl Frame {
    /// Creates a frame.
    ///
    /// `index` is the position of the frame in its video stream, used for logging.
    pub fn new(index: u64, width: u32, height: u32, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            index,
            width,
            height,
            data: data.into(),
        }
    }

    /// Creates a frame without any pixel data.
    pub fn empty(index: u64, width: u32, height: u32) -> Self {
        Self::new(index, width, height, Vec::new())
    }

    #[inline]
    pub fn index(&self) -> u64 {
        self.index
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// A hand-pose estimation model.
///
/// Loading the model is the job of whoever constructs the implementing type; see
/// [`Session::start`](crate::session::Session::start).
pub trait LandmarkSource {
    /// Estimates the landmarks of every hand visible in `frame`.
    ///
    /// Returns an empty list if no hand was found. Errors indicate that the model itself failed.
    fn estimate(&mut self, frame: &Frame) -> anyhow::Result<Vec<HandLandmarks>>;
}

impl<L: LandmarkSource + ?Sized> LandmarkSource for Box<L> {
    fn estimate(&mut self, frame: &Frame) -> anyhow::Result<Vec<HandLandmarks>> {
        (**self).estimate(frame)
    }
}

/// A continuous stream of camera frames.
pub trait VideoSource {
    /// Reads the next frame.
    ///
    /// Returns `Ok(None)` once the stream has ended.
    fn read(&mut self) -> anyhow::Result<Option<Frame>>;
}

impl<V: VideoSource + ?Sized> VideoSource for Box<V> {
    fn read(&mut self) -> anyhow::Result<Option<Frame>> {
        (**self).read()
    }
}

/// Which way the requested camera should face.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// The camera pointing at the player.
    #[default]
    User,
    /// The camera pointing away from the player.
    Environment,
}

/// Parameters passed to the camera opener when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraOptions {
    width: u32,
    height: u32,
    facing: Facing,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            facing: Facing::User,
        }
    }
}

impl CameraOptions {
    /// Sets the desired frame size.
    ///
    /// The camera may deliver a different size if it does not support the requested one.
    #[inline]
    pub fn resolution(self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    #[inline]
    pub fn facing(self, facing: Facing) -> Self {
        Self { facing, ..self }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn facing_mode(&self) -> Facing {
        self.facing
    }
}

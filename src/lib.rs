//! Rock-paper-scissors against the computer, played with hand gestures.
//!
//! A [`LandmarkSource`] (a hand-pose estimation model) turns camera frames into hand landmarks,
//! [`gesture::classify`] turns landmarks into a [`Gesture`], and a [`Game`] pits that gesture
//! against a random computer move and keeps the score. [`Session`] ties everything together with a
//! camera, a live gesture preview and the [`Board`] a presentation layer renders.
//!
//! # Coordinates
//!
//! Landmark coordinates are in image space: X points to the right, Y points *down*. A finger
//! pointing upwards therefore has its tip at a smaller Y coordinate than its knuckle.
//!
//! # Environment Variables
//!
//! Some session options can be overridden by setting environment variables:
//!
//! * `ROCHAMBEAU_SEED`: seeds the computer's move generator with a decimal `u64`, making the
//!   sequence of computer moves reproducible.
//! * `ROCHAMBEAU_REVEAL_MS`: sets the delay (in milliseconds) between the computer picking its move
//!   and the round's outcome being revealed.
//!
//! [`LandmarkSource`]: source::LandmarkSource
//! [`Gesture`]: gesture::Gesture
//! [`Game`]: round::Game
//! [`Session`]: session::Session
//! [`Board`]: board::Board

use log::LevelFilter;

pub mod board;
pub mod config;
pub mod gesture;
pub mod landmark;
pub mod live;
pub mod opponent;
pub mod round;
pub mod rules;
pub mod score;
pub mod session;
pub mod source;
pub mod timer;

#[cfg(test)]
mod test;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and this crate will log at *trace*
/// level. Otherwise, they will log at *debug* level. `RUST_LOG` is respected on top of that.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}

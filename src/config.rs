//! Session configuration.

use std::{env, str::FromStr, time::Duration};

use crate::source::CameraOptions;

const ENV_SEED: &str = "ROCHAMBEAU_SEED";
const ENV_REVEAL_MS: &str = "ROCHAMBEAU_REVEAL_MS";

/// Options for creating a [`Session`](crate::session::Session).
///
/// The environment variables listed in the crate documentation take precedence over the values
/// set here.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub(crate) reveal_delay: Duration,
    pub(crate) seed: Option<u64>,
    pub(crate) camera: CameraOptions,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            reveal_delay: Self::DEFAULT_REVEAL_DELAY,
            seed: None,
            camera: CameraOptions::default(),
        }
    }
}

impl SessionOptions {
    pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(1000);

    /// Sets the pause between the computer picking its move and the outcome being revealed.
    ///
    /// This only exists for the benefit of reveal animations. Use [`Duration::ZERO`] when nobody
    /// is watching.
    #[inline]
    pub fn reveal_delay(self, reveal_delay: Duration) -> Self {
        Self {
            reveal_delay,
            ..self
        }
    }

    /// Seeds the computer's move generator.
    ///
    /// By default, a random seed is used.
    #[inline]
    pub fn seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Sets the options passed to the camera opener in [`Session::start`].
    ///
    /// [`Session::start`]: crate::session::Session::start
    #[inline]
    pub fn camera(self, camera: CameraOptions) -> Self {
        Self { camera, ..self }
    }

    /// Applies overrides from the process environment.
    pub(crate) fn apply_env(self) -> Self {
        self.apply_overrides(|name| env::var(name).ok())
    }

    fn apply_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(seed) = parse_var::<u64>(ENV_SEED, &var) {
            log::debug!("using seed {seed} from {ENV_SEED}");
            self.seed = Some(seed);
        }
        if let Some(ms) = parse_var::<u64>(ENV_REVEAL_MS, &var) {
            log::debug!("using reveal delay of {ms}ms from {ENV_REVEAL_MS}");
            self.reveal_delay = Duration::from_millis(ms);
        }
        self
    }
}

fn parse_var<T: FromStr>(name: &str, var: &impl Fn(&str) -> Option<String>) -> Option<T> {
    let value = var(name)?;
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring invalid value for {name}: '{value}'");
            None
        }
    }
}

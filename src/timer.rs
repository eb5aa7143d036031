//! Performance measurement tools.

use std::{
    fmt,
    sync::Mutex,
    time::{Duration, Instant},
};

/// A timer that measures and averages the time an operation takes.
///
/// Collected timings are averaged and reset when the timer is displayed using `{}`
/// ([`std::fmt::Display`]).
pub struct Timer {
    name: &'static str,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    total: Duration,
    count: u32,
}

impl Timer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(State::default()),
        }
    }

    /// Invokes a closure, measuring and recording the time it takes.
    pub fn time<T>(&self, timee: impl FnOnce() -> T) -> T {
        let _guard = self.start();
        timee()
    }

    /// Starts timing an operation using a drop guard.
    ///
    /// When the returned [`TimerGuard`] is dropped, the time between the call to `start` and the
    /// drop is recorded.
    pub fn start(&self) -> TimerGuard<'_> {
        TimerGuard {
            start: Instant::now(),
            timer: self,
        }
    }

    fn stop(&self, start: Instant) {
        let mut state = self.state.lock().unwrap();
        state.total += start.elapsed();
        state.count += 1;
    }
}

/// Displays the average recorded time and resets it.
impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = std::mem::take(&mut *self.state.lock().unwrap());
        let avg_ms = if state.count == 0 {
            0.0
        } else {
            state.total.as_secs_f32() * 1000.0 / state.count as f32
        };

        write!(f, "{}: {}x{avg_ms:.01}ms", self.name, state.count)
    }
}

/// Guard returned by [`Timer::start`]. Stops timing the operation when dropped.
pub struct TimerGuard<'a> {
    start: Instant,
    timer: &'a Timer,
}

impl Drop for TimerGuard<'_> {
    fn drop(&mut self) {
        self.timer.stop(self.start);
    }
}

/// Logs frames per second, along with any [`Timer`]s passed to [`FpsCounter::tick_with`].
pub struct FpsCounter {
    name: String,
    frames: u32,
    start: Instant,
}

impl FpsCounter {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            frames: 0,
            start: Instant::now(),
        }
    }

    /// Advances the frame counter by 1 and logs FPS and `timers` if one second has passed.
    pub fn tick_with<'a>(&mut self, timers: impl IntoIterator<Item = &'a Timer>) {
        self.frames += 1;
        if self.start.elapsed() > Duration::from_secs(1) {
            let timers = timers
                .into_iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            if timers.is_empty() {
                log::debug!("{}: {} FPS", self.name, self.frames);
            } else {
                log::debug!("{}: {} FPS ({})", self.name, self.frames, timers);
            }

            self.frames = 0;
            self.start = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_resets() {
        let timer = Timer::new("estimate");
        assert_eq!(timer.time(|| 5), 5);
        timer.time(|| ());
        assert!(timer.to_string().starts_with("estimate: 2x"));
        assert_eq!(timer.to_string(), "estimate: 0x0.0ms");
    }
}

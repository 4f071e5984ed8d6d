use crate::constants::MOTION_PERIOD_SEC;
use instant::Instant;

/// Per-frame context handed to every step function.
///
/// `time` is the animation phase in seconds and is the source of truth for
/// all time-driven motion; `storm` selects the kinematic regime.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub time: f32,
    pub storm: bool,
}

impl FrameInput {
    pub fn new(time: f32, storm: bool) -> Self {
        Self { time, storm }
    }

    /// Build from unbounded elapsed seconds. The phase is wrapped into
    /// `[0, MOTION_PERIOD_SEC)` in f64 first, so f32 precision does not decay
    /// over long sessions.
    pub fn from_elapsed(elapsed: f64, storm: bool) -> Self {
        let phase = if elapsed.is_finite() {
            elapsed.rem_euclid(MOTION_PERIOD_SEC)
        } else {
            0.0
        };
        Self::new(phase as f32, storm)
    }
}

/// Monotonic elapsed-time source for hosts that don't supply their own clock.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Instant,
    last_instant: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_instant: now,
        }
    }

    /// Returns `(elapsed_sec, dt_sec)` and advances the frame marker.
    pub fn tick(&mut self) -> (f64, f32) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        ((now - self.start).as_secs_f64(), dt.as_secs_f32())
    }

    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

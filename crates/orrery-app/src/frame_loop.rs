//! Frame pacing for the headless loop.
//!
//! Each frame runs input, state advancement, mesh recomputation and draw
//! submission in that order; the pacer only decides how long to wait before
//! the next one.

use std::time::{Duration, Instant};

use tracing::warn;

/// Frames slower than this are reported.
pub const SLOW_FRAME: Duration = Duration::from_millis(250);

/// Interval between frames for `target_fps`, or `None` when unpaced.
pub fn frame_interval(target_fps: u32) -> Option<Duration> {
    (target_fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(target_fps)))
}

/// Drives frames at a fixed target rate.
pub struct FrameLoop {
    interval: Option<Duration>,
    frame_limit: Option<u64>,
    frame_count: u64,
    started: Instant,
}

impl FrameLoop {
    /// `frame_limit == 0` runs until the process is stopped.
    pub fn new(target_fps: u32, frame_limit: u64) -> Self {
        Self {
            interval: frame_interval(target_fps),
            frame_limit: (frame_limit > 0).then_some(frame_limit),
            frame_count: 0,
            started: Instant::now(),
        }
    }

    /// Run `frame_fn` until the frame limit is reached.
    pub fn run(&mut self, mut frame_fn: impl FnMut(u64)) {
        while self.frame_limit.is_none_or(|limit| self.frame_count < limit) {
            self.tick(&mut frame_fn);
        }
    }

    /// Run one frame and sleep off whatever is left of its interval.
    pub fn tick(&mut self, frame_fn: &mut impl FnMut(u64)) {
        let start = Instant::now();
        frame_fn(self.frame_count);
        self.frame_count += 1;

        let elapsed = start.elapsed();
        if elapsed > SLOW_FRAME {
            warn!(
                "Frame {} took {:.1}ms",
                self.frame_count,
                elapsed.as_secs_f64() * 1000.0
            );
        }
        if let Some(interval) = self.interval
            && let Some(remaining) = interval.checked_sub(elapsed)
        {
            std::thread::sleep(remaining);
        }
    }

    /// Frames run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Wall-clock time since the loop was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

//! Frame pacing for the real-time loop.
//!
//! Sleeps until the next frame boundary when a frame finishes early and
//! reports the measured time since the previous frame. A slow frame is not
//! made up for: the next frame simply integrates the longer interval.

use std::time::{Duration, Instant};

pub struct FramePacer {
    frame: Duration,
    started: Instant,
    last: Instant,
    frames: u64,
}

impl FramePacer {
    /// `fps` must be positive and finite.
    pub fn new(fps: f64) -> Self {
        let now = Instant::now();
        Self {
            frame: Duration::from_secs_f64(1.0 / fps),
            started: now,
            last: now,
            frames: 0,
        }
    }

    /// Wait out the rest of the current frame, then return the seconds
    /// elapsed since the previous call.
    pub fn begin_frame(&mut self) -> f64 {
        let since = self.last.elapsed();
        if since < self.frame {
            std::thread::sleep(self.frame - since);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        self.frames += 1;
        elapsed.as_secs_f64()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Seconds since the pacer was created.
    pub fn running_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Frames per second over the whole run.
    pub fn average_fps(&self) -> f64 {
        let secs = self.running_secs();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

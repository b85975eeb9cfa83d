use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Sleeps away the rest of each frame so that the loop runs at most at the
/// target rate, and keeps an exponentially smoothed estimate of the real one.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    const SMOOTHING: f64 = 0.1;

    pub fn new(max_fps: f64) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(1. / max_fps),
            frame_timer: Instant::now(),
            frametime_smoothed: 1. / max_fps,
        }
    }

    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Call once per frame, after the frame's work is done.
    pub fn delay(&mut self) {
        let busy = self.frame_timer.elapsed();
        if let Some(rest) = self.target_frametime.checked_sub(busy) {
            sleep(rest);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * Self::SMOOTHING;
        self.frame_timer = Instant::now();
    }
}

use web_time::{Duration, Instant};

/// Exponential moving average factor for the FPS readout.
const FPS_SMOOTHING: f32 = 0.05;

/// Fixed-timestep presentation gate with a smoothed FPS readout.
///
/// Input sampling runs every loop iteration; the frame is only
/// presented once the target interval has elapsed, decoupling input
/// rate from presentation rate without any extra threads.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    target_fps: u32,
    min_frame_duration: Duration,
    last_frame: Instant,
    smoothed_fps: f32,
}

impl FrameTiming {
    /// Create a frame timer with the given FPS target (0 = uncapped).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };
        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
        }
    }

    /// Whether enough time has passed since the last presented frame.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Record a presented frame and update the FPS average.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - FPS_SMOOTHING)
                + instant_fps * FPS_SMOOTHING;
        }
    }

    /// Smoothed frames-per-second estimate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncapped_timer_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
    }

    #[test]
    fn capped_timer_waits_for_the_interval() {
        let mut timing = FrameTiming::new(1);
        timing.end_frame();
        // Immediately after a frame, a 1 FPS cap cannot be ready again
        assert!(!timing.should_render());
    }
}

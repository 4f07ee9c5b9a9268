//! Frame Rate Limiter
//!
//! Caps the menu loop at a fixed tick rate and tracks a measured
//! frames-per-second figure for the window title. The FPS readout averages
//! the most recent frames rather than the single last one, so the displayed
//! number stays steady.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of recent frames averaged for the FPS readout
const FPS_SAMPLE_FRAMES: usize = 10;

/// Fixed-budget frame limiter with an FPS measurement
///
/// Call [`FrameClock::tick`] once at the end of every loop iteration. It
/// sleeps off whatever remains of the frame budget, so each iteration takes
/// at least `1 / target_fps` seconds.
pub struct FrameClock {
    frame_budget: Duration,
    last_tick: Instant,
    frame_times: VecDeque<Duration>,
}

impl FrameClock {
    /// Creates a clock targeting the given frame rate
    pub fn new(target_fps: u32) -> Self {
        FrameClock {
            frame_budget: Duration::from_secs(1) / target_fps,
            last_tick: Instant::now(),
            frame_times: VecDeque::with_capacity(FPS_SAMPLE_FRAMES),
        }
    }

    /// Blocks until the current frame's budget has elapsed, then records
    /// the frame duration for the FPS measurement
    pub fn tick(&mut self) {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.frame_budget {
            std::thread::sleep(self.frame_budget - elapsed);
        }

        let now = Instant::now();
        if self.frame_times.len() == FPS_SAMPLE_FRAMES {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(now - self.last_tick);
        self.last_tick = now;
    }

    /// Measured frames per second, averaged over recent frames
    ///
    /// Returns 0.0 before the first tick.
    pub fn fps(&self) -> f32 {
        let total: Duration = self.frame_times.iter().sum();
        average_fps(self.frame_times.len(), total)
    }
}

/// FPS over `frames` frames that took `total` time in all
pub(crate) fn average_fps(frames: usize, total: Duration) -> f32 {
    if frames == 0 || total.is_zero() {
        return 0.0;
    }
    frames as f32 / total.as_secs_f32()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_fps_no_frames() {
        assert_eq!(average_fps(0, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_average_fps_steady_rate() {
        // 30 frames over one second is 30 FPS
        let fps = average_fps(30, Duration::from_secs(1));
        assert!((fps - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_average_fps_uneven_total() {
        // 10 frames over half a second is 20 FPS
        let fps = average_fps(10, Duration::from_millis(500));
        assert!((fps - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_tick_records_fps() {
        // High target so the test doesn't block noticeably
        let mut clock = FrameClock::new(1000);
        assert_eq!(clock.fps(), 0.0);

        clock.tick();
        clock.tick();
        assert!(clock.fps() > 0.0);
    }

    #[test]
    fn test_fps_sample_window_is_bounded() {
        let mut clock = FrameClock::new(1000);
        for _ in 0..(FPS_SAMPLE_FRAMES + 5) {
            clock.tick();
        }
        assert_eq!(clock.frame_times.len(), FPS_SAMPLE_FRAMES);
    }
}

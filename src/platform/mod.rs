//! Platform glue shared by every frontend
//!
//! - Frame timing from a monotonic millisecond clock
//! - Window (y-down) to world (y-up) pointer conversion

use glam::Vec2;

use crate::consts::{FIRST_FRAME_DT, WIN_H};

/// Turns monotonic millisecond timestamps into per-frame `dt`
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call. The first call after construction or
    /// `reset` returns the nominal first-frame dt.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last).max(0.0) / 1000.0) as f32,
            None => FIRST_FRAME_DT,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Re-arm at `now_ms` so the next frame measures from here (used when a run starts)
    pub fn reset(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }
}

/// Convert a window pointer position (origin top-left) to world coordinates
#[inline]
pub fn window_to_world(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, WIN_H - y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_nominal() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(5_000.0), FIRST_FRAME_DT);
        assert!((clock.tick(5_050.0) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_reset_measures_from_reset_point() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        clock.reset(10_000.0);
        assert!((clock.tick(10_020.0) - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_clock_never_negative() {
        let mut clock = FrameClock::new();
        clock.tick(100.0);
        assert_eq!(clock.tick(50.0), 0.0);
    }

    #[test]
    fn test_window_flip() {
        assert_eq!(window_to_world(200.0, 650.0), Vec2::new(200.0, 50.0));
    }
}

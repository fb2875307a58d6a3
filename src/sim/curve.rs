//! Cubic Bézier evaluation and the ping-pong follower that drives the target
//!
//! Control points are stored as floats; integer layouts are just floats with
//! no fractional part. Evaluation never truncates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Evaluate `B(t) = (1-t)^3 P0 + 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3`.
///
/// The caller keeps `t` inside `[0, 1]`.
#[inline]
pub fn evaluate_cubic_bezier(t: f32, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let u = 1.0 - t;
    let tt = t * t;
    let uu = u * u;
    let uuu = uu * u;
    let ttt = tt * t;

    p0 * uuu + p1 * (3.0 * uu * t) + p2 * (3.0 * u * tt) + p3 * ttt
}

/// Four control points of a cubic Bézier curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub points: [Vec2; 4],
}

impl CubicBezier {
    pub const fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Gentle vertical path shown before the first run
    pub const fn idle_path() -> Self {
        Self::new(
            Vec2::new(WIN_W - 100.0, GAME_Y0 + 60.0),
            Vec2::new(WIN_W - 105.0, GAME_Y0 + 220.0),
            Vec2::new(WIN_W - 95.0, GAME_Y1 - 220.0),
            Vec2::new(WIN_W - 100.0, GAME_Y1 - 60.0),
        )
    }

    /// S-shaped path along the right edge that the target follows while running
    pub const fn run_path() -> Self {
        Self::new(
            Vec2::new(WIN_W - 120.0, GAME_Y0 + 80.0),
            Vec2::new(WIN_W - 180.0, GAME_Y0 + 250.0),
            Vec2::new(WIN_W - 60.0, GAME_Y1 - 250.0),
            Vec2::new(WIN_W - 120.0, GAME_Y1 - 80.0),
        )
    }

    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = self.points;
        evaluate_cubic_bezier(t, p0, p1, p2, p3)
    }

    /// Sample the curve from t = 0 (inclusive) towards 1 (exclusive)
    pub fn sample(&self, step: f32) -> Vec<Vec2> {
        if step <= 0.0 {
            return vec![self.point_at(0.0)];
        }
        let mut points = Vec::new();
        let mut i = 0u32;
        loop {
            let t = i as f32 * step;
            if t >= 1.0 {
                break;
            }
            points.push(self.point_at(t));
            i += 1;
        }
        points
    }
}

/// A parameter walking back and forth over `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PingPong {
    pub t: f32,
    /// Walking from 1 back to 0
    pub reverse: bool,
}

impl Default for PingPong {
    fn default() -> Self {
        Self {
            t: 0.0,
            reverse: false,
        }
    }
}

impl PingPong {
    /// Move by `delta` in the current direction, flipping (and pinning `t`)
    /// on reaching either end.
    pub fn step(&mut self, delta: f32) {
        if self.reverse {
            self.t -= delta;
        } else {
            self.t += delta;
        }

        if self.t >= 1.0 {
            self.t = 1.0;
            self.reverse = true;
        }
        if self.t <= 0.0 {
            self.t = 0.0;
            self.reverse = false;
        }
    }
}

/// Target speed in t-units per second: slow with a full clock, faster as it runs out
pub fn target_speed(remaining: u32, total: u32, min_speed: f32, max_speed: f32) -> f32 {
    let time_ratio = if total == 0 {
        0.0
    } else {
        remaining as f32 / total as f32
    };
    min_speed + (1.0 - time_ratio) * (max_speed - min_speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_endpoints() {
        let c = CubicBezier::run_path();
        assert!(close(c.point_at(0.0), c.points[0]));
        assert!(close(c.point_at(1.0), c.points[3]));
    }

    #[test]
    fn test_midpoint_matches_polynomial() {
        let c = CubicBezier::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(100.0, 500.0),
            Vec2::new(500.0, 500.0),
            Vec2::new(500.0, 100.0),
        );
        // 0.125*P0 + 0.375*P1 + 0.375*P2 + 0.125*P3
        assert!(close(c.point_at(0.5), Vec2::new(300.0, 400.0)));
    }

    #[test]
    fn test_no_integer_truncation() {
        let p = evaluate_cubic_bezier(
            0.1,
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
        );
        // 1 - 0.9^3
        assert!((p.x - 0.271).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_curve_is_stationary() {
        let p = Vec2::new(42.0, 7.0);
        let c = CubicBezier::new(p, p, p, p);
        for i in 0..=10 {
            assert!(close(c.point_at(i as f32 / 10.0), p));
        }
    }

    #[test]
    fn test_ping_pong_flips_at_ends() {
        let mut pp = PingPong::default();
        pp.step(0.6);
        assert!(!pp.reverse);
        pp.step(0.6);
        assert_eq!(pp.t, 1.0);
        assert!(pp.reverse);
        pp.step(0.3);
        assert!((pp.t - 0.7).abs() < 1e-6);
        pp.step(5.0);
        assert_eq!(pp.t, 0.0);
        assert!(!pp.reverse);
    }

    #[test]
    fn test_target_speed_ramps() {
        assert!((target_speed(120, 120, 0.12, 0.45) - 0.12).abs() < 1e-6);
        assert!((target_speed(60, 120, 0.12, 0.45) - 0.285).abs() < 1e-6);
        assert!((target_speed(0, 120, 0.12, 0.45) - 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_sample_excludes_one() {
        let c = CubicBezier::run_path();
        let pts = c.sample(0.25);
        assert_eq!(pts.len(), 4);
        assert!(close(pts[0], c.points[0]));
    }
}

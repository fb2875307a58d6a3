//! Bézier control-point editor
//!
//! A standalone tool for shaping a cubic curve by dragging its four control
//! points. Shares `evaluate_cubic_bezier` with the game, so a path drawn here
//! is exactly what the target would follow.

use glam::Vec2;

use crate::sim::CubicBezier;

/// Editable canvas extent; dragged points are clamped to `[0, w] x [0, h]`
pub const CANVAS_W: f32 = 700.0;
pub const CANVAS_H: f32 = 600.0;
/// Half-size of the square grab box around each control point
pub const GRAB_BOX: f32 = 9.0;
/// t step used when drawing the curve
pub const DRAW_STEP: f32 = 0.001;

#[derive(Debug, Clone)]
pub struct CurveEditor {
    pub curve: CubicBezier,
    /// Index of the point being dragged
    grabbed: Option<usize>,
}

impl Default for CurveEditor {
    fn default() -> Self {
        Self::new(CubicBezier::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(100.0, 500.0),
            Vec2::new(500.0, 500.0),
            Vec2::new(500.0, 100.0),
        ))
    }
}

impl CurveEditor {
    pub fn new(curve: CubicBezier) -> Self {
        Self {
            curve,
            grabbed: None,
        }
    }

    pub fn grabbed(&self) -> Option<usize> {
        self.grabbed
    }

    /// Pointer down: grab the first control point (P0 first) under `pos`
    pub fn press(&mut self, pos: Vec2) -> Option<usize> {
        self.grabbed = self.curve.points.iter().position(|p| {
            (p.x - pos.x).abs() < GRAB_BOX && (p.y - pos.y).abs() < GRAB_BOX
        });
        self.grabbed
    }

    /// Pointer motion with the button held
    pub fn drag(&mut self, pos: Vec2) {
        if let Some(i) = self.grabbed {
            self.curve.points[i] = pos.clamp(Vec2::ZERO, Vec2::new(CANVAS_W, CANVAS_H));
        }
    }

    pub fn release(&mut self) {
        self.grabbed = None;
    }

    /// Points to draw for the curve
    pub fn polyline(&self) -> Vec<Vec2> {
        self.curve.sample(DRAW_STEP)
    }

    /// Side-panel labels, e.g. `P0={100,100}`
    pub fn labels(&self) -> [String; 4] {
        std::array::from_fn(|i| {
            let p = self.curve.points[i];
            format!("P{}={{{},{}}}", i, p.x as i32, p.y as i32)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grab_drag_release() {
        let mut editor = CurveEditor::default();
        assert_eq!(editor.press(Vec2::new(505.0, 495.0)), Some(2));

        editor.drag(Vec2::new(350.0, 250.0));
        assert_eq!(editor.curve.points[2], Vec2::new(350.0, 250.0));

        editor.release();
        editor.drag(Vec2::new(10.0, 10.0));
        assert_eq!(editor.curve.points[2], Vec2::new(350.0, 250.0));
    }

    #[test]
    fn test_grab_box_is_strict() {
        let mut editor = CurveEditor::default();
        assert_eq!(editor.press(Vec2::new(109.0, 100.0)), None);
        assert_eq!(editor.press(Vec2::new(108.5, 91.5)), Some(0));
    }

    #[test]
    fn test_drag_clamped_to_canvas() {
        let mut editor = CurveEditor::default();
        editor.press(Vec2::new(500.0, 100.0));
        editor.drag(Vec2::new(900.0, -40.0));
        assert_eq!(editor.curve.points[3], Vec2::new(CANVAS_W, 0.0));
    }

    #[test]
    fn test_overlapping_points_prefer_lowest_index() {
        let p = Vec2::new(200.0, 200.0);
        let mut editor = CurveEditor::new(CubicBezier::new(p, p, p, p));
        assert_eq!(editor.press(p), Some(0));
    }

    #[test]
    fn test_labels_and_polyline() {
        let editor = CurveEditor::default();
        assert_eq!(editor.labels()[1], "P1={100,500}");
        let line = editor.polyline();
        assert!(line.len() >= 999);
        assert_eq!(line[0], Vec2::new(100.0, 100.0));
    }
}

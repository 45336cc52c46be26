//! Op-capturing surface for tests and debugging.

use crate::surface::Surface;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Resize { width: f64, height: f64 },
    SetStrokeColor(String),
    SetLineWidth(f64),
    SetLineDash(f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    QuadraticCurveTo { cx: f64, cy: f64, x: f64, y: f64 },
    Stroke,
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
}

/// A surface that records every call instead of painting.
///
/// Unlike a pixel surface, `resize` does not discard the log; the log is
/// the whole point. `width`/`height` still track the latest resize.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of `Stroke` calls recorded so far.
    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Stroke))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.ops.push(SurfaceOp::Resize { width, height });
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ops.push(SurfaceOp::SetStrokeColor(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::SetLineWidth(width));
    }

    fn set_line_dash(&mut self, dash: (f64, f64)) {
        self.ops.push(SurfaceOp::SetLineDash(dash.0, dash.1));
    }

    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(SurfaceOp::LineTo(x, y));
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ops.push(SurfaceOp::QuadraticCurveTo { cx, cy, x, y });
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn save(&mut self) {
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(SurfaceOp::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops.push(SurfaceOp::Translate(dx, dy));
    }

    fn rotate(&mut self, radians: f64) {
        self.ops.push(SurfaceOp::Rotate(radians));
    }
}

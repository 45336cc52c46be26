//! The 2D drawing-surface contract.

/// A canvas-like 2D drawing surface.
///
/// The contract mirrors the familiar immediate-mode 2D canvas:
///
/// - `resize` sets the pixel dimensions and **clears all prior content**
/// - stroke state (color, line width, dash pattern) applies to subsequent
///   `stroke` calls until changed
/// - `save`/`restore` push/pop the full draw state: the affine transform
///   *and* the stroke state
/// - `translate`/`rotate` compose onto the current transform and affect
///   path coordinates recorded afterwards
/// - the current path survives `stroke` and is only reset by `begin_path`
///
/// A surface is exclusively owned by one widget instance; it is never
/// shared across instances.
pub trait Surface {
    fn resize(&mut self, width: f64, height: f64);
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    /// Equal-length dash and gap; `(0.0, 0.0)` strokes solid.
    fn set_line_dash(&mut self, dash: (f64, f64));

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn stroke(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn rotate(&mut self, radians: f64);
}

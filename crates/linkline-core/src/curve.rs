//! Quadratic-curve control point between two anchors.

use crate::geom::{Point, rotate90};

/// Computes the control point of the quadratic Bézier joining `from` and
/// `to`.
///
/// The half-vector to the midpoint is rotated a counter-clockwise quarter
/// turn, scaled by `damper`, and added onto the midpoint:
///
/// - `damper = 1` gives a roughly circular bow
/// - `damper = 0` degenerates to the straight midpoint
/// - `|damper| > 1` bulges further out (elliptic)
/// - negative values bow to the opposite side of the segment
pub fn resolve_control_point(from: Point, to: Point, damper: f64) -> Point {
    let half = (to - from) / 2.0;
    from + half + rotate90(half) * damper
}

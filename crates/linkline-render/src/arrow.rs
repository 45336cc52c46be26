//! Shaft + chevron-head arrow painting.

use crate::surface::Surface;
use linkline_core::config::ArrowOptions;
use linkline_core::geom::{Point, norm, unit};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// How far past the end point the chevron pivot sits, along the curve's
/// end tangent.
const HEAD_PIVOT_DISTANCE: f64 = 8.0;
/// Chevron leg length as a multiple of the pivot distance.
const HEAD_LEG_SCALE: f64 = 1.4;

/// Stroke configuration for one arrow; immutable per widget instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowStyle {
    pub color: String,
    pub width: f64,
    /// Dash and gap lengths; `(0.0, 0.0)` is solid.
    pub dash: (f64, f64),
}

impl From<&ArrowOptions> for ArrowStyle {
    fn from(options: &ArrowOptions) -> Self {
        Self {
            color: options.color.clone(),
            width: options.width,
            dash: options.dash(),
        }
    }
}

/// A fully resolved arrow, in viewport space. Recomputed on every redraw
/// trigger, consumed once, never retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    pub from: Point,
    pub to: Point,
    pub control: Point,
}

/// Paints one arrow: a quadratic Bézier shaft and a two-stroke chevron
/// head whose tip points along the curve's end tangent.
///
/// When the end tangent has zero length (coincident end point and control
/// point) the head is suppressed and only the shaft is stroked.
pub fn draw_arrow(surface: &mut dyn Surface, geometry: &ArrowGeometry, style: &ArrowStyle) {
    surface.set_stroke_color(&style.color);
    surface.set_line_width(style.width);
    surface.set_line_dash(style.dash);
    surface.begin_path();
    surface.move_to(geometry.from.x, geometry.from.y);
    surface.quadratic_curve_to(
        geometry.control.x,
        geometry.control.y,
        geometry.to.x,
        geometry.to.y,
    );
    surface.stroke();

    let Some(tangent) = unit(geometry.to - geometry.control) else {
        return;
    };
    let pivot = geometry.to + tangent * HEAD_PIVOT_DISTANCE;
    let back = geometry.to - pivot;
    let leg = HEAD_LEG_SCALE * norm(back);

    // The head is drawn in a frame translated to the pivot and restored
    // afterwards; restore also brings back the shaft's stroke state.
    surface.save();
    surface.set_stroke_color(&style.color);
    surface.set_line_width(style.width + 1.0);
    surface.set_line_dash((0.0, 0.0));
    surface.translate(pivot.x, pivot.y);
    surface.rotate(back.y.atan2(back.x) + FRAC_PI_4);
    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.line_to(leg, 0.0);
    surface.stroke();
    surface.rotate(-FRAC_PI_2);
    surface.begin_path();
    surface.move_to(0.0, 0.0);
    surface.line_to(leg, 0.0);
    surface.stroke();
    surface.restore();
}

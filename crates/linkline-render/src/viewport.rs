//! Surface sizing and full-repaint plumbing.

use crate::arrow::{ArrowGeometry, ArrowStyle, draw_arrow};
use crate::surface::Surface;

/// Viewport collaborator: current size and vertical scroll offset.
///
/// `scroll_y` matters because anchors are resolved from document-space
/// bounds onto a surface pinned to the viewport; it changes continuously
/// while scrolling even though the surface itself stays put.
pub trait ViewportMetrics {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn scroll_y(&self) -> f64;
}

/// Sizes the surface to the viewport. Per the [`Surface`] contract this
/// clears all prior content, so it must precede every repaint.
pub fn resize(surface: &mut dyn Surface, metrics: &dyn ViewportMetrics) {
    surface.resize(metrics.width(), metrics.height());
}

/// Clears (by resizing) and repaints every produced arrow.
pub fn redraw_all<I>(
    surface: &mut dyn Surface,
    metrics: &dyn ViewportMetrics,
    style: &ArrowStyle,
    geometries: I,
) where
    I: IntoIterator<Item = ArrowGeometry>,
{
    resize(surface, metrics);
    for geometry in geometries {
        draw_arrow(surface, &geometry, style);
    }
}

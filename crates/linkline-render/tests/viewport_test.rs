use linkline_core::geom::point;
use linkline_render::arrow::{ArrowGeometry, ArrowStyle};
use linkline_render::record::{RecordingSurface, SurfaceOp};
use linkline_render::surface::Surface;
use linkline_render::viewport::{ViewportMetrics, redraw_all, resize};

struct FixedViewport {
    width: f64,
    height: f64,
    scroll_y: f64,
}

impl ViewportMetrics for FixedViewport {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
}

fn style() -> ArrowStyle {
    ArrowStyle {
        color: "lightgrey".to_string(),
        width: 2.0,
        dash: (0.0, 0.0),
    }
}

fn geometry(offset: f64) -> ArrowGeometry {
    ArrowGeometry {
        from: point(offset, 0.0),
        to: point(offset, 10.0),
        control: point(offset + 5.0, 5.0),
    }
}

#[test]
fn resize_matches_surface_to_viewport_dimensions() {
    let mut surface = RecordingSurface::new();
    let viewport = FixedViewport {
        width: 1280.0,
        height: 720.0,
        scroll_y: 0.0,
    };
    resize(&mut surface, &viewport);
    assert_eq!(surface.width(), 1280.0);
    assert_eq!(surface.height(), 720.0);

    let viewport = FixedViewport {
        width: 800.0,
        height: 600.0,
        scroll_y: 40.0,
    };
    resize(&mut surface, &viewport);
    assert_eq!(surface.width(), 800.0);
    assert_eq!(surface.height(), 600.0);
}

#[test]
fn redraw_all_resizes_before_painting() {
    let mut surface = RecordingSurface::new();
    let viewport = FixedViewport {
        width: 640.0,
        height: 480.0,
        scroll_y: 0.0,
    };
    redraw_all(&mut surface, &viewport, &style(), [geometry(0.0)]);

    assert_eq!(
        surface.ops()[0],
        SurfaceOp::Resize {
            width: 640.0,
            height: 480.0
        }
    );
    // shaft + two head legs
    assert_eq!(surface.stroke_count(), 3);
}

#[test]
fn redraw_all_paints_every_produced_arrow() {
    let mut surface = RecordingSurface::new();
    let viewport = FixedViewport {
        width: 640.0,
        height: 480.0,
        scroll_y: 0.0,
    };
    let geometries: Vec<_> = (0..4).map(|i| geometry(i as f64 * 20.0)).collect();
    redraw_all(&mut surface, &viewport, &style(), geometries);
    assert_eq!(surface.stroke_count(), 12);
}

#[test]
fn redraw_all_with_no_arrows_only_clears() {
    let mut surface = RecordingSurface::new();
    let viewport = FixedViewport {
        width: 640.0,
        height: 480.0,
        scroll_y: 0.0,
    };
    redraw_all(&mut surface, &viewport, &style(), []);
    assert_eq!(surface.ops().len(), 1);
}

//! One arrow instance: options + live geometry resolution + repaint.

use crate::arrow::{ArrowGeometry, ArrowStyle, draw_arrow};
use crate::events::{EventBus, Subscription};
use crate::surface::Surface;
use crate::viewport::{self, ViewportMetrics};
use linkline_core::anchor::{AnchorSpec, BoundsProvider, resolve_anchor};
use linkline_core::config::ArrowOptions;
use linkline_core::curve::resolve_control_point;
use linkline_core::error::{Error, Result};
use linkline_core::geom::Point;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// A connector arrow between two elements.
///
/// Options and style are fixed at creation; geometry is recomputed from
/// the elements' current bounds on every redraw and never retained.
#[derive(Debug, Clone)]
pub struct ArrowWidget {
    options: ArrowOptions,
    style: ArrowStyle,
}

impl ArrowWidget {
    pub fn new(options: ArrowOptions) -> Self {
        let style = ArrowStyle::from(&options);
        Self { options, style }
    }

    /// Builds a widget straight from a host attribute object.
    pub fn from_attrs(attrs: &Value) -> Result<Self> {
        Ok(Self::new(ArrowOptions::from_attrs(attrs)?))
    }

    pub fn options(&self) -> &ArrowOptions {
        &self.options
    }

    pub fn style(&self) -> &ArrowStyle {
        &self.style
    }

    /// Resolves both anchors and the curve control point against the
    /// elements' current bounds.
    ///
    /// Fails with [`Error::ElementNotFound`] when either element id does
    /// not resolve.
    pub fn resolve_geometry(
        &self,
        bounds: &dyn BoundsProvider,
        metrics: &dyn ViewportMetrics,
    ) -> Result<ArrowGeometry> {
        let from = anchor_point(&self.options.from, bounds, metrics)?;
        let to = anchor_point(&self.options.to, bounds, metrics)?;
        Ok(ArrowGeometry {
            from,
            to,
            control: resolve_control_point(from, to, self.options.damper),
        })
    }

    /// Full repaint: size the surface to the viewport (which clears it),
    /// then paint the arrow.
    ///
    /// An arrow whose elements cannot be resolved is skipped with a
    /// warning; the surface is still resized and cleared.
    pub fn redraw(
        &self,
        surface: &mut dyn Surface,
        bounds: &dyn BoundsProvider,
        metrics: &dyn ViewportMetrics,
    ) {
        viewport::resize(surface, metrics);
        match self.resolve_geometry(bounds, metrics) {
            Ok(geometry) => draw_arrow(surface, &geometry, &self.style),
            Err(err) => {
                tracing::warn!(error = %err, "skipping arrow: anchor element not resolvable");
            }
        }
    }

    /// Paints once and subscribes a repaint listener for every later
    /// trigger. The listener lives exactly as long as the returned
    /// [`MountedArrow`].
    pub fn mount(
        self,
        bus: &EventBus,
        surface: Rc<RefCell<dyn Surface>>,
        bounds: Rc<dyn BoundsProvider>,
        metrics: Rc<dyn ViewportMetrics>,
    ) -> MountedArrow {
        let widget = Rc::new(self);
        widget.redraw(&mut *surface.borrow_mut(), &*bounds, &*metrics);

        let subscription = {
            let widget = Rc::clone(&widget);
            bus.subscribe(move |_trigger| {
                widget.redraw(&mut *surface.borrow_mut(), &*bounds, &*metrics);
            })
        };
        MountedArrow {
            widget,
            _subscription: subscription,
        }
    }
}

/// A mounted widget; dropping it releases the bus listener.
pub struct MountedArrow {
    widget: Rc<ArrowWidget>,
    _subscription: Subscription,
}

impl MountedArrow {
    pub fn widget(&self) -> &ArrowWidget {
        &self.widget
    }
}

fn anchor_point(
    spec: &AnchorSpec,
    bounds: &dyn BoundsProvider,
    metrics: &dyn ViewportMetrics,
) -> Result<Point> {
    let b = bounds
        .bounds_of(&spec.element)
        .ok_or_else(|| Error::ElementNotFound {
            id: spec.element.clone(),
        })?;
    Ok(resolve_anchor(&b, spec.orientation, spec.offset, metrics.scroll_y()))
}

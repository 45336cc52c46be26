//! Anchor placement on element borders.
//!
//! Element bounds arrive in document space; anchors are returned in
//! viewport space (the vertical scroll offset is subtracted), so they can
//! be painted onto a surface pinned to the viewport.

use crate::geom::{Point, Vector, point};

/// Which side of an element's bounding box an anchor attaches to.
///
/// Parsed by case-sensitive exact match; any other value (including an
/// absent attribute) selects `Center`, which places the anchor in the
/// middle of the corresponding axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Top,
    Bottom,
    Left,
    Right,
    #[default]
    Center,
}

impl Orientation {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("top") => Self::Top,
            Some("bottom") => Self::Bottom,
            Some("left") => Self::Left,
            Some("right") => Self::Right,
            _ => Self::Center,
        }
    }
}

/// Bounding box of one element, in document space.
///
/// `width`/`height` are border-box sizes; `outer_width`/`outer_height`
/// additionally include margins. Edge placement (`Right`/`Bottom`) uses the
/// margin-inclusive pair, centering uses the border-box pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub outer_width: f64,
    pub outer_height: f64,
}

impl ElementBounds {
    /// Bounds of an element without margins.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            outer_width: width,
            outer_height: height,
        }
    }

    /// Adds total horizontal/vertical margins to the outer sizes.
    pub fn with_margins(mut self, horizontal: f64, vertical: f64) -> Self {
        self.outer_width = self.width + horizontal;
        self.outer_height = self.height + vertical;
        self
    }
}

/// One end of an arrow: the element it attaches to, the side it attaches
/// on, and a pixel offset applied after border placement.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorSpec {
    pub element: String,
    pub orientation: Orientation,
    pub offset: Vector,
}

/// Element-lookup collaborator: resolves an element id to its current
/// bounding box, or `None` when no such element exists.
pub trait BoundsProvider {
    fn bounds_of(&self, id: &str) -> Option<ElementBounds>;
}

/// Computes the anchor point for `bounds` in viewport space.
///
/// `scroll_y` is the viewport's current vertical scroll offset; bounds are
/// in document space, so the offset is subtracted from the y base.
pub fn resolve_anchor(
    bounds: &ElementBounds,
    orientation: Orientation,
    offset: Vector,
    scroll_y: f64,
) -> Point {
    let mut x = bounds.left;
    match orientation {
        Orientation::Right => x += bounds.outer_width,
        Orientation::Left => {}
        _ => x += bounds.width / 2.0,
    }

    let mut y = bounds.top - scroll_y;
    match orientation {
        Orientation::Bottom => y += bounds.outer_height,
        Orientation::Top => {}
        _ => y += bounds.height / 2.0,
    }

    point(x + offset.x, y + offset.y)
}

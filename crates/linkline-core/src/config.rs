//! Per-arrow configuration parsed from an attribute object.
//!
//! Attributes arrive as a JSON object (the host's attribute layer
//! serialized as-is). Numeric values may be JSON numbers or numeric
//! strings; anything malformed falls back to the documented default
//! rather than erroring. Only the two element ids are required.

use crate::anchor::{AnchorSpec, Orientation};
use crate::error::{Error, Result};
use crate::geom::vector;
use serde_json::Value;

pub const DEFAULT_COLOR: &str = "lightgrey";
pub const DEFAULT_WIDTH: f64 = 2.0;
pub const DEFAULT_SEGMENTS: f64 = 0.0;
pub const DEFAULT_DAMPER: f64 = 1.0;

/// Fully-defaulted per-instance options for one arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowOptions {
    /// Stroke color for shaft and head.
    pub color: String,
    /// Shaft line width; the head is stroked one unit wider.
    pub width: f64,
    /// Dash segment length; 0 draws a solid shaft.
    pub segments: f64,
    /// Curve shape factor (see `resolve_control_point`).
    pub damper: f64,
    pub from: AnchorSpec,
    pub to: AnchorSpec,
}

impl ArrowOptions {
    /// Builds options from an attribute object.
    ///
    /// Returns `MissingAttribute` when `from-element` or `to-element` is
    /// absent or empty; every other attribute is optional.
    pub fn from_attrs(attrs: &Value) -> Result<Self> {
        Ok(Self {
            color: str_attr(attrs, "color")
                .unwrap_or(DEFAULT_COLOR)
                .to_string(),
            width: num_attr(attrs, "width", DEFAULT_WIDTH).max(0.0),
            segments: num_attr(attrs, "segments", DEFAULT_SEGMENTS).max(0.0),
            damper: num_attr(attrs, "damper", DEFAULT_DAMPER),
            from: anchor_attrs(attrs, "from-element", "from-orientation", (
                "from-offset-x",
                "from-offset-y",
            ))?,
            to: anchor_attrs(attrs, "to-element", "to-orientation", (
                "to-offset-x",
                "to-offset-y",
            ))?,
        })
    }

    /// Dash pattern derived from `segments`: equal dash and gap lengths,
    /// `(0, 0)` meaning solid.
    pub fn dash(&self) -> (f64, f64) {
        (self.segments, self.segments)
    }
}

fn anchor_attrs(
    attrs: &Value,
    element: &'static str,
    orientation: &'static str,
    offsets: (&'static str, &'static str),
) -> Result<AnchorSpec> {
    let id = str_attr(attrs, element)
        .filter(|s| !s.is_empty())
        .ok_or(Error::MissingAttribute { name: element })?;
    Ok(AnchorSpec {
        element: id.to_string(),
        orientation: Orientation::parse(str_attr(attrs, orientation)),
        offset: vector(
            num_attr(attrs, offsets.0, 0.0),
            num_attr(attrs, offsets.1, 0.0),
        ),
    })
}

fn str_attr<'a>(attrs: &'a Value, name: &str) -> Option<&'a str> {
    attrs.as_object()?.get(name)?.as_str()
}

fn num_attr(attrs: &Value, name: &str, default: f64) -> f64 {
    let Some(value) = attrs.as_object().and_then(|o| o.get(name)) else {
        return default;
    };
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(default)
}

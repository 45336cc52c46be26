#![forbid(unsafe_code)]

//! `linkline` draws directional, curved connector arrows between two
//! identified elements, anchored to their live positions and repainted on
//! viewport resize and scroll.
//!
//! The core is fully headless: it consumes element bounding boxes and a
//! 2D drawing surface, nothing else. Hosts supply both through small
//! traits ([`anchor::BoundsProvider`], `render::Surface`) and forward
//! their resize/scroll notifications.
//!
//! # Features
//!
//! - `render`: enable the surface abstraction, arrow painting and
//!   viewport plumbing (`linkline::render`)

pub use linkline_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use linkline_render::arrow::{ArrowGeometry, ArrowStyle, draw_arrow};
    pub use linkline_render::events::{EventBus, Subscription, Trigger};
    pub use linkline_render::record::{RecordingSurface, SurfaceOp};
    pub use linkline_render::surface::Surface;
    pub use linkline_render::svg::SvgSurface;
    pub use linkline_render::viewport::{ViewportMetrics, redraw_all, resize};
    pub use linkline_render::widget::{ArrowWidget, MountedArrow};
}
